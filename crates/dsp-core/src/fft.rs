//! Fixed-point radix-2 complex FFT
//!
//! Data is interleaved in place as `[re0, im0, re1, im1, ...]` with
//! `1 << stages` complex points, at most 1024. The transforms are
//! decimation in time and expect bit-reversed input, so a spectrum is
//! computed as [`complex_bit_reverse`] followed by [`complex_fft`].
//! Twiddle factors come from [`SIN_TABLE_1024`] in Q15.
//!
//! The forward transform halves every butterfly output, so its result is
//! the DFT divided by the length. The inverse transform does not divide;
//! it shifts a stage down only when the data would otherwise overflow, and
//! reports the total number of shifts so the caller can restore the level.

use crate::tables::SIN_TABLE_1024;
use crate::vector::max_abs_value_w16;

/// Largest supported `stages` (1024 complex points)
pub const MAX_FFT_STAGES: u32 = 10;

// Extra bits of headroom kept in the accurate butterflies
const ACCURATE_SHIFT: u32 = 14;

// Inverse stages shift down once past each of these peak magnitudes
const IFFT_HEADROOM: [i16; 2] = [13573, 27146];

/// Butterfly rounding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FftMode {
    /// Truncating Q15 products
    Fast,
    /// Products kept with 14 extra bits and rounded once per butterfly
    #[default]
    Accurate,
}

/// Reorder `1 << stages` complex points into bit-reversed index order
///
/// Applying it twice restores the original order.
pub fn complex_bit_reverse(frfi: &mut [i16], stages: u32) {
    debug_assert!(stages <= MAX_FFT_STAGES);
    let n = 1usize << stages;
    debug_assert!(frfi.len() >= 2 * n);

    let mut mr = 0usize;
    for m in 1..n {
        let mut l = n;
        loop {
            l >>= 1;
            if mr + l < n {
                break;
            }
        }
        mr = (mr & (l - 1)) + l;

        if mr > m {
            frfi.swap(2 * m, 2 * mr);
            frfi.swap(2 * m + 1, 2 * mr + 1);
        }
    }
}

/// In-place forward FFT of bit-reversed input, scaled by `1 / (1 << stages)`
///
/// Returns `false` without touching `frfi` when `stages` is above
/// [`MAX_FFT_STAGES`].
///
/// ```
/// use dsp_core::fft::{complex_bit_reverse, complex_fft, FftMode};
///
/// let mut frfi = [1000i16, 0, 1000, 0, 1000, 0, 1000, 0];
/// complex_bit_reverse(&mut frfi, 2);
/// assert!(complex_fft(&mut frfi, 2, FftMode::Accurate));
/// assert_eq!(frfi, [1000, 0, 0, 0, 0, 0, 0, 0]);
/// ```
pub fn complex_fft(frfi: &mut [i16], stages: u32, mode: FftMode) -> bool {
    if stages > MAX_FFT_STAGES {
        return false;
    }
    let n = 1usize << stages;
    debug_assert!(frfi.len() >= 2 * n);

    let mut l = 1usize;
    let mut k = MAX_FFT_STAGES - 1;
    while l < n {
        let istep = l << 1;
        for m in 0..l {
            let j = m << k;
            let wr = SIN_TABLE_1024[j + 256] as i32;
            let wi = -(SIN_TABLE_1024[j] as i32);

            for i in (m..n).step_by(istep) {
                butterfly(frfi, i, i + l, wr, wi, mode, 1);
            }
        }
        k = k.saturating_sub(1);
        l = istep;
    }
    true
}

/// In-place inverse FFT of bit-reversed input
///
/// Each stage looks at the current peak magnitude and shifts its outputs
/// down by up to two bits to stay in range. The returned scale is the total
/// shift, so the time signal is the output shifted left by it. Returns
/// `None` without touching `frfi` when `stages` is above
/// [`MAX_FFT_STAGES`].
pub fn complex_ifft(frfi: &mut [i16], stages: u32, mode: FftMode) -> Option<u32> {
    if stages > MAX_FFT_STAGES {
        return None;
    }
    let n = 1usize << stages;
    debug_assert!(frfi.len() >= 2 * n);

    let mut scale = 0u32;
    let mut l = 1usize;
    let mut k = MAX_FFT_STAGES - 1;
    while l < n {
        let peak = max_abs_value_w16(&frfi[..2 * n]);
        let shift = IFFT_HEADROOM.iter().filter(|&&limit| peak > limit).count() as u32;
        scale += shift;

        let istep = l << 1;
        for m in 0..l {
            let j = m << k;
            let wr = SIN_TABLE_1024[j + 256] as i32;
            let wi = SIN_TABLE_1024[j] as i32;

            for i in (m..n).step_by(istep) {
                butterfly(frfi, i, i + l, wr, wi, mode, shift);
            }
        }
        k = k.saturating_sub(1);
        l = istep;
    }
    Some(scale)
}

/// One radix-2 butterfly on points `i` and `j`, outputs shifted right by `shift`
#[inline]
fn butterfly(frfi: &mut [i16], i: usize, j: usize, wr: i32, wi: i32, mode: FftMode, shift: u32) {
    let (re, im) = (frfi[2 * j] as i32, frfi[2 * j + 1] as i32);
    let tr_full = (wr * re).wrapping_sub(wi * im);
    let ti_full = (wr * im).wrapping_add(wi * re);
    let (qr, qi) = (frfi[2 * i] as i32, frfi[2 * i + 1] as i32);

    let out = match mode {
        FftMode::Fast => {
            let (tr, ti) = (tr_full >> 15, ti_full >> 15);
            [qr - tr, qi - ti, qr + tr, qi + ti].map(|v| (v >> shift) as i16)
        }
        FftMode::Accurate => {
            let down = shift + ACCURATE_SHIFT;
            let round = 1i32 << (down - 1);
            let tr = tr_full.wrapping_add(1) >> (15 - ACCURATE_SHIFT);
            let ti = ti_full.wrapping_add(1) >> (15 - ACCURATE_SHIFT);
            let (qr, qi) = (qr << ACCURATE_SHIFT, qi << ACCURATE_SHIFT);
            [
                qr.wrapping_sub(tr),
                qi.wrapping_sub(ti),
                qr.wrapping_add(tr),
                qi.wrapping_add(ti),
            ]
            .map(|v| (v.wrapping_add(round) >> down) as i16)
        }
    };

    frfi[2 * j] = out[0];
    frfi[2 * j + 1] = out[1];
    frfi[2 * i] = out[2];
    frfi[2 * i + 1] = out[3];
}
