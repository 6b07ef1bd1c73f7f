//! All-pole (AR) filtering with Q12 coefficients
//!
//! `a` is a Q12 polynomial whose leading coefficient is taken as unity and
//! never read. The output is carried at Q12 precision split across two
//! 16-bit words: the rounded integer sample and the Q12 residual.

use super::round_q12;
use crate::error::Result;
use crate::math::mul_16_16;
use crate::types::{ArConfig, BlockFilter};
use crate::utils::validation::validate_buffer_size;
use tracing::{debug, trace};

/// One step of the AR recursion
///
/// `hist_hi`/`hist_lo` hold past outputs, oldest first, and must be at
/// least `a.len() - 1` long. Computes
/// `o = (x << 12) - sum_k a[k] * y_hi[-k] + ((-sum_k a[k] * y_lo[-k]) >> 12)`,
/// splits it into `hi = (o + 2048) >> 12` and `lo = o - (hi << 12)`, pushes
/// both into the history and returns them.
pub fn filter_ar_sample_based(
    sample: i16,
    a: &[i16],
    hist_hi: &mut [i16],
    hist_lo: &mut [i16],
) -> (i16, i16) {
    let order = a.len().saturating_sub(1);
    let len = hist_hi.len();
    debug_assert!(len >= order && hist_lo.len() == len);

    let mut o: i32 = (sample as i32) << 12;
    let mut o_low: i32 = 0;
    for k in 1..=order {
        o = o.wrapping_sub(mul_16_16(a[k], hist_hi[len - k]));
        o_low = o_low.wrapping_sub(mul_16_16(a[k], hist_lo[len - k]));
    }
    o = o.wrapping_add(o_low >> 12);

    let hi = (o.wrapping_add(2048) >> 12) as i16;
    let lo = o.wrapping_sub((hi as i32) << 12) as i16;

    if len > 0 {
        hist_hi.copy_within(1.., 0);
        hist_lo.copy_within(1.., 0);
        hist_hi[len - 1] = hi;
        hist_lo[len - 1] = lo;
    }

    (hi, lo)
}

/// Block AR filter with hi/lo split output
///
/// Runs [`filter_ar_sample_based`] over `x`, writing the integer part to
/// `out_hi` and the Q12 residual to `out_lo`. `state_hi`/`state_lo` are the
/// caller's output history and end up holding the newest outputs. Returns
/// the number of samples filtered, `x.len()`.
pub fn filter_ar(
    a: &[i16],
    x: &[i16],
    state_hi: &mut [i16],
    state_lo: &mut [i16],
    out_hi: &mut [i16],
    out_lo: &mut [i16],
) -> usize {
    debug_assert!(out_hi.len() >= x.len() && out_lo.len() >= x.len());

    for ((&sample, hi), lo) in x.iter().zip(out_hi.iter_mut()).zip(out_lo.iter_mut()) {
        let (h, l) = filter_ar_sample_based(sample, a, state_hi, state_lo);
        *hi = h;
        *lo = l;
    }
    x.len()
}

/// AR filter in Q12 without a residual word
///
/// `out_with_history` carries `a.len() - 1` past outputs followed by room
/// for `x.len()` new ones. Unlike [`filter_ar`], `a[0]` scales the input:
/// `y[n] = round((a[0] * x[n] - sum_k a[k] * y[n - k]) >> 12)` with the
/// usual Q12 accumulator clamp.
pub fn filter_ar_fast_q12(x: &[i16], out_with_history: &mut [i16], a: &[i16]) {
    debug_assert!(!a.is_empty());
    let order = a.len() - 1;
    debug_assert!(out_with_history.len() >= x.len() + order);

    for (n, &sample) in x.iter().enumerate() {
        let pos = n + order;
        let mut feedback: i32 = 0;
        for k in 1..=order {
            feedback = feedback.wrapping_add(mul_16_16(a[k], out_with_history[pos - k]));
        }
        let acc = mul_16_16(a[0], sample).wrapping_sub(feedback);
        out_with_history[pos] = round_q12(acc);
    }
}

/// AR filter that owns its hi/lo output history
#[derive(Debug, Clone)]
pub struct ArFilter {
    coefficients: Vec<i16>,
    state_hi: Vec<i16>,
    state_lo: Vec<i16>,
    residual: Vec<i16>,
}

impl ArFilter {
    /// Create a filter from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the coefficients are empty, the order exceeds
    /// [`MAX_AR_ORDER`](crate::constants::MAX_AR_ORDER) or `a[0]` is not
    /// unity in Q12.
    pub fn new(config: ArConfig) -> Result<Self> {
        config.validate()?;

        let order = config.order();
        debug!("Creating AR filter: order={}", order);

        Ok(Self {
            coefficients: config.coefficients,
            state_hi: vec![0; order],
            state_lo: vec![0; order],
            residual: Vec::new(),
        })
    }

    /// Q12 residuals of the most recent block
    pub fn residual(&self) -> &[i16] {
        &self.residual
    }
}

impl BlockFilter for ArFilter {
    fn process_to_buffer(&mut self, input: &[i16], output: &mut [i16]) -> Result<usize> {
        validate_buffer_size(input.len(), output.len())?;

        self.residual.clear();
        self.residual.resize(input.len(), 0);
        let written = filter_ar(
            &self.coefficients,
            input,
            &mut self.state_hi,
            &mut self.state_lo,
            output,
            &mut self.residual,
        );

        trace!("AR filtered {} samples", written);
        Ok(written)
    }

    fn output_len(&self, input_len: usize) -> usize {
        input_len
    }

    fn reset(&mut self) {
        self.state_hi.fill(0);
        self.state_lo.fill(0);
        self.residual.clear();
        debug!("AR filter reset");
    }

    fn order(&self) -> usize {
        self.coefficients.len() - 1
    }
}
