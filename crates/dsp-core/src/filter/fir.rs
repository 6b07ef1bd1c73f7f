//! FIR (moving average) filtering and decimation in Q12
//!
//! Taps are Q12. Products accumulate in a wrapping 32-bit register that is
//! clamped to `[-2^27, 2^27 - 1 - 2^11]`, rounded and shifted down by 12,
//! so every output fits 16 bits without a separate saturation step.

use super::{push_history, round_q12};
use crate::error::Result;
use crate::math::mul_16_16;
use crate::types::{BlockFilter, DecimatorConfig, FirConfig};
use crate::utils::validation::validate_buffer_size;
use tracing::{debug, trace};

/// Input sample at signed position `pos`, reaching into `state` for `pos < 0`
#[inline(always)]
fn sample_at(x: &[i16], state: &[i16], pos: isize) -> i16 {
    if pos >= 0 {
        x[pos as usize]
    } else {
        state[(state.len() as isize + pos) as usize]
    }
}

#[inline(always)]
fn convolve_at(b: &[i16], x: &[i16], state: &[i16], pos: usize) -> i32 {
    let mut acc: i32 = 0;
    for (j, &tap) in b.iter().enumerate() {
        let sample = sample_at(x, state, pos as isize - j as isize);
        acc = acc.wrapping_add(mul_16_16(tap, sample));
    }
    acc
}

/// FIR filter a block with caller-owned input history
///
/// `y[n] = round(sum_j b[j] * x[n - j])` in Q12, where samples before the
/// block come from `state` (chronological, newest last, at least
/// `b.len() - 1` long). Afterwards `state` holds the newest `state.len()`
/// input samples. Returns the number of samples written, `x.len()`.
pub fn filter_ma(b: &[i16], x: &[i16], state: &mut [i16], y: &mut [i16]) -> usize {
    debug_assert!(!b.is_empty());
    debug_assert!(state.len() + 1 >= b.len());
    debug_assert!(y.len() >= x.len());

    for (n, out) in y.iter_mut().take(x.len()).enumerate() {
        *out = round_q12(convolve_at(b, x, state, n));
    }

    push_history(state, x);
    x.len()
}

/// Stateless FIR filter in Q12
///
/// `x_with_history` carries `b.len() - 1` history samples followed by the
/// samples to filter; `out.len()` outputs are produced.
pub fn filter_ma_fast_q12(x_with_history: &[i16], out: &mut [i16], b: &[i16]) {
    debug_assert!(!b.is_empty());
    let order = b.len() - 1;
    debug_assert!(x_with_history.len() >= out.len() + order);

    for (n, o) in out.iter_mut().enumerate() {
        let newest = n + order;
        let mut acc: i32 = 0;
        for (j, &tap) in b.iter().enumerate() {
            acc = acc.wrapping_add(mul_16_16(tap, x_with_history[newest - j]));
        }
        *o = round_q12(acc);
    }
}

/// Filter with `b` and keep every `2^factor`-th output
///
/// Output `n` is the filter response at input position
/// `(n << factor) + delay`, `delay < 1 << factor`. History handling matches
/// [`filter_ma`]. Returns the number of samples written, at most
/// `x.len() >> factor` and never more than `y.len()`.
pub fn downsample(
    b: &[i16],
    x: &[i16],
    state: &mut [i16],
    y: &mut [i16],
    factor: u32,
    delay: usize,
) -> usize {
    debug_assert!(!b.is_empty());
    debug_assert!(state.len() + 1 >= b.len());
    debug_assert!(delay < 1 << factor);

    let count = (x.len() >> factor).min(y.len());
    for (n, out) in y.iter_mut().take(count).enumerate() {
        let pos = (n << factor) + delay;
        *out = round_q12(convolve_at(b, x, state, pos));
    }

    push_history(state, x);
    count
}

/// FIR filter that owns its history
#[derive(Debug, Clone)]
pub struct FirFilter {
    coefficients: Vec<i16>,
    state: Vec<i16>,
}

impl FirFilter {
    /// Create a filter from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the coefficients are empty, the order exceeds
    /// [`MAX_FIR_ORDER`](crate::constants::MAX_FIR_ORDER) or the state is
    /// shorter than the order.
    pub fn new(config: FirConfig) -> Result<Self> {
        config.validate()?;

        debug!(
            "Creating FIR filter: order={}, state={} samples",
            config.order(),
            config.state_len
        );

        Ok(Self {
            state: vec![0; config.state_len],
            coefficients: config.coefficients,
        })
    }

    /// Current input history, oldest first
    pub fn state(&self) -> &[i16] {
        &self.state
    }
}

impl BlockFilter for FirFilter {
    fn process_to_buffer(&mut self, input: &[i16], output: &mut [i16]) -> Result<usize> {
        validate_buffer_size(input.len(), output.len())?;

        let written = filter_ma(&self.coefficients, input, &mut self.state, output);

        trace!("FIR filtered {} samples", written);
        Ok(written)
    }

    fn output_len(&self, input_len: usize) -> usize {
        input_len
    }

    fn reset(&mut self) {
        self.state.fill(0);
        debug!("FIR filter reset");
    }

    fn order(&self) -> usize {
        self.coefficients.len() - 1
    }
}

/// Decimating FIR that owns its history
#[derive(Debug, Clone)]
pub struct Decimator {
    coefficients: Vec<i16>,
    state: Vec<i16>,
    factor: u32,
    delay: usize,
}

impl Decimator {
    /// Create a decimator from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error for invalid taps, a factor above
    /// [`MAX_DECIMATION_FACTOR`](crate::constants::MAX_DECIMATION_FACTOR),
    /// a delay outside the stride or a short state.
    pub fn new(config: DecimatorConfig) -> Result<Self> {
        config.validate()?;

        debug!(
            "Creating decimator: order={}, factor=2^{}, delay={}",
            config.order(),
            config.factor,
            config.delay
        );

        Ok(Self {
            state: vec![0; config.state_len],
            coefficients: config.coefficients,
            factor: config.factor,
            delay: config.delay,
        })
    }

    /// Decimation factor as a power of two
    pub fn factor(&self) -> u32 {
        self.factor
    }
}

impl BlockFilter for Decimator {
    fn process_to_buffer(&mut self, input: &[i16], output: &mut [i16]) -> Result<usize> {
        validate_buffer_size(self.output_len(input.len()), output.len())?;

        let written = downsample(
            &self.coefficients,
            input,
            &mut self.state,
            output,
            self.factor,
            self.delay,
        );

        trace!("Decimated {} samples to {}", input.len(), written);
        Ok(written)
    }

    fn output_len(&self, input_len: usize) -> usize {
        input_len >> self.factor
    }

    fn reset(&mut self) {
        self.state.fill(0);
        debug!("Decimator reset");
    }

    fn order(&self) -> usize {
        self.coefficients.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DspError;

    #[test]
    fn test_impulse_response() {
        let b = [4096i16, 2048, -1024, 7];
        let mut x = [0i16; 8];
        x[0] = 4096;
        let mut state = [0i16; 3];
        let mut y = [0i16; 8];

        assert_eq!(filter_ma(&b, &x, &mut state, &mut y), 8);
        assert_eq!(y, [4096, 2048, -1024, 7, 0, 0, 0, 0]);
    }

    #[test]
    fn test_state_carries_across_blocks() {
        let b = [1000i16, -2000, 3000, 500];
        let signal: Vec<i16> = (0..40).map(|i| ((i * 977) % 2001 - 1000) as i16).collect();

        let mut whole_state = [0i16; 3];
        let mut whole = vec![0i16; 40];
        filter_ma(&b, &signal, &mut whole_state, &mut whole);

        let mut state = [0i16; 3];
        let mut pieces = vec![0i16; 40];
        let mut start = 0;
        for len in [1usize, 2, 7, 13, 17] {
            filter_ma(&b, &signal[start..start + len], &mut state, &mut pieces[start..]);
            start += len;
        }
        assert_eq!(start, 40);
        assert_eq!(pieces, whole);
        assert_eq!(state, whole_state);
    }

    #[test]
    fn test_accumulator_clamp() {
        let b = [4096i16, 4096];
        let mut state = [32767i16];
        let mut y = [0i16; 1];
        filter_ma(&b, &[32767], &mut state, &mut y);
        assert_eq!(y[0], 32767);

        let mut state = [-32768i16];
        filter_ma(&b, &[-32768], &mut state, &mut y);
        assert_eq!(y[0], -32768);
    }

    #[test]
    fn test_fast_q12_matches_stateful() {
        let b = [1200i16, 800, -300];
        let history = [11i16, -7];
        let block: Vec<i16> = (0..16).map(|i| (i * 300 - 2000) as i16).collect();

        let mut with_history = history.to_vec();
        with_history.extend_from_slice(&block);
        let mut fast = vec![0i16; 16];
        filter_ma_fast_q12(&with_history, &mut fast, &b);

        let mut state = history;
        let mut slow = vec![0i16; 16];
        filter_ma(&b, &block, &mut state, &mut slow);
        assert_eq!(fast, slow);
    }

    #[test]
    fn test_downsample_identity() {
        let x: Vec<i16> = (0..10).map(|i| (i * 3001 - 15000) as i16).collect();
        let mut y = vec![0i16; 10];
        let mut state: [i16; 0] = [];
        assert_eq!(downsample(&[4096], &x, &mut state, &mut y, 0, 0), 10);
        assert_eq!(y, x);
    }

    #[test]
    fn test_downsample_picks_phase() {
        let x: Vec<i16> = (1..=8).collect();
        let mut y = [0i16; 4];
        let mut state: [i16; 0] = [];

        assert_eq!(downsample(&[4096], &x, &mut state, &mut y, 1, 0), 4);
        assert_eq!(y, [1, 3, 5, 7]);

        assert_eq!(downsample(&[4096], &x, &mut state, &mut y, 1, 1), 4);
        assert_eq!(y, [2, 4, 6, 8]);

        let mut y = [0i16; 2];
        assert_eq!(downsample(&[4096], &x, &mut state, &mut y, 2, 3), 2);
        assert_eq!(y, [4, 8]);
    }

    #[test]
    fn test_downsample_matches_filter_then_pick() {
        let b = [2048i16, 2048];
        let x: Vec<i16> = (0..12).map(|i| (i * 100) as i16).collect();

        let mut full = vec![0i16; 12];
        filter_ma(&b, &x, &mut [0i16; 1], &mut full);

        let mut decimated = vec![0i16; 6];
        let written = downsample(&b, &x, &mut [0i16; 1], &mut decimated, 1, 1);
        assert_eq!(written, 6);
        let picked: Vec<i16> = full.iter().skip(1).step_by(2).copied().collect();
        assert_eq!(decimated, picked);
    }

    #[test]
    fn test_downsample_respects_output_capacity() {
        let x = [1i16; 16];
        let mut y = [0i16; 3];
        let mut state: [i16; 0] = [];
        assert_eq!(downsample(&[4096], &x, &mut state, &mut y, 1, 0), 3);
    }

    #[test]
    fn test_fir_filter_wrapper() {
        let mut filter = FirFilter::new(FirConfig::new(vec![4096i16, 4096])).unwrap();
        assert_eq!(filter.order(), 1);

        let out = filter.process(&[1, 2, 3]).unwrap();
        assert_eq!(out, vec![1, 3, 5]);
        assert_eq!(filter.state(), &[3]);

        let out = filter.process(&[10]).unwrap();
        assert_eq!(out, vec![13]);

        filter.reset();
        let out = filter.process(&[10]).unwrap();
        assert_eq!(out, vec![10]);

        let mut small = [0i16; 1];
        assert_eq!(
            filter.process_to_buffer(&[1, 2], &mut small),
            Err(DspError::BufferTooSmall { needed: 2, actual: 1 })
        );
    }

    #[test]
    fn test_decimator_wrapper() {
        let config = DecimatorConfig::new(vec![2048i16, 2048], 1).with_delay(1);
        let mut decimator = Decimator::new(config).unwrap();
        assert_eq!(decimator.factor(), 1);
        assert_eq!(decimator.output_len(9), 4);

        let out = decimator.process(&[2, 4, 6, 8]).unwrap();
        assert_eq!(out, vec![3, 7]);

        assert!(Decimator::new(DecimatorConfig::new(vec![4096i16], 7)).is_err());
    }
}
