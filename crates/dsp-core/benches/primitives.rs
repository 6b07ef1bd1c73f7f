use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dsp_core::fft::{complex_bit_reverse, complex_fft, complex_ifft, FftMode};
use dsp_core::filter::{downsample, filter_ar, filter_ma};
use dsp_core::lpc::{estimate_lpc, lpc};
use dsp_core::math::{div_w32_w16, norm_w32, sqrt, sqrt_floor};
use dsp_core::random::rand_u_array;
use dsp_core::vector::{add_vectors_sat_w16, dot_product, max_abs_value_w16};

// 20 ms at 8 kHz and 48 kHz
const FRAME_SIZES: [usize; 2] = [160, 960];

fn test_signal(len: usize) -> Vec<i16> {
    let mut seed = 12345;
    let mut signal = vec![0i16; len];
    rand_u_array(&mut signal, &mut seed);
    signal.iter_mut().for_each(|s| *s = s.wrapping_sub(16384));
    signal
}

fn bench_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar");

    group.bench_function("norm_w32", |b| {
        b.iter(|| norm_w32(black_box(0x0001_2345)))
    });
    group.bench_function("div_w32_w16", |b| {
        b.iter(|| div_w32_w16(black_box(1_000_000), black_box(1000)))
    });
    group.bench_function("sqrt", |b| b.iter(|| sqrt(black_box(2_147_395_600))));
    group.bench_function("sqrt_floor", |b| b.iter(|| sqrt_floor(black_box(117))));

    group.finish();
}

fn bench_vector(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector");

    for &size in &FRAME_SIZES {
        let a = test_signal(size);
        let b = test_signal(size).into_iter().rev().collect::<Vec<_>>();
        let mut out = vec![0i16; size];
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("add_vectors_sat_w16", size), &size, |bench, _| {
            bench.iter(|| add_vectors_sat_w16(black_box(&mut out), black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("dot_product", size), &size, |bench, _| {
            bench.iter(|| dot_product(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("max_abs_value_w16", size), &size, |bench, _| {
            bench.iter(|| max_abs_value_w16(black_box(&a)))
        });
    }

    group.finish();
}

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("filters");
    let taps = [410i16, 1229, 2048, 1229, 410];
    let ar = [4096i16, -2048, 1024];

    for &size in &FRAME_SIZES {
        let x = test_signal(size);
        let mut y = vec![0i16; size];
        let mut y_lo = vec![0i16; size];
        let mut state = vec![0i16; taps.len() - 1];
        let mut state_hi = vec![0i16; ar.len() - 1];
        let mut state_lo = vec![0i16; ar.len() - 1];
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("filter_ma", size), &size, |bench, _| {
            bench.iter(|| filter_ma(&taps, black_box(&x), &mut state, &mut y))
        });
        group.bench_with_input(BenchmarkId::new("downsample_by_2", size), &size, |bench, _| {
            bench.iter(|| downsample(&taps, black_box(&x), &mut state, &mut y, 1, 0))
        });
        group.bench_with_input(BenchmarkId::new("filter_ar", size), &size, |bench, _| {
            bench.iter(|| {
                filter_ar(&ar, black_box(&x), &mut state_hi, &mut state_lo, &mut y, &mut y_lo)
            })
        });
    }

    group.finish();
}

fn bench_lpc(c: &mut Criterion) {
    let mut group = c.benchmark_group("lpc");
    let x = test_signal(240);
    let mut a = [0i16; 11];

    group.bench_function("lpc_order_10", |b| b.iter(|| lpc(black_box(&x), 10, &mut a)));
    group.bench_function("estimate_lpc_order_10", |b| {
        b.iter(|| estimate_lpc(black_box(&x), 10))
    });

    group.finish();
}

fn bench_fft(c: &mut Criterion) {
    let mut group = c.benchmark_group("fft");

    for &stages in &[6u32, 8, 10] {
        let n = 1usize << stages;
        let signal = test_signal(2 * n);
        let mut frfi = signal.clone();
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("forward", n), &stages, |bench, &stages| {
            bench.iter(|| {
                frfi.copy_from_slice(&signal);
                complex_bit_reverse(&mut frfi, stages);
                complex_fft(black_box(&mut frfi), stages, FftMode::Accurate)
            })
        });
        group.bench_with_input(BenchmarkId::new("inverse", n), &stages, |bench, &stages| {
            bench.iter(|| {
                frfi.copy_from_slice(&signal);
                complex_bit_reverse(&mut frfi, stages);
                complex_ifft(black_box(&mut frfi), stages, FftMode::Accurate)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scalar, bench_vector, bench_filters, bench_lpc, bench_fft);
criterion_main!(benches);
