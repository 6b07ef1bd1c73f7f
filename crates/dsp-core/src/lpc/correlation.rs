//! Autocorrelation with automatic block scaling

use crate::math::{get_size_in_bits, mul_16_16, norm_w32};
use crate::vector::max_abs_value_w16;

/// Autocorrelation lags `0..=order` of `x`
///
/// Each product is shifted right by a common `scale` chosen so that
/// `x.len()` products of the peak sample fit in 32 bits. Lags at or beyond
/// `x.len()` are zero. Returns `(order + 1, scale)`.
///
/// ```
/// use dsp_core::lpc::auto_correlation;
/// let mut r = [0i32; 2];
/// assert_eq!(auto_correlation(&[1, 2, 33, 100], 1, &mut r), (2, 0));
/// assert_eq!(r, [11094, 3368]);
/// ```
pub fn auto_correlation(x: &[i16], order: usize, out: &mut [i32]) -> (usize, u32) {
    debug_assert!(out.len() > order);

    let smax = max_abs_value_w16(x);
    let scale = if smax == 0 {
        0
    } else {
        let nbits = get_size_in_bits(x.len() as u32);
        let t = norm_w32(mul_16_16(smax, smax));
        nbits.saturating_sub(t)
    };

    for (lag, r) in out.iter_mut().take(order + 1).enumerate() {
        *r = if lag < x.len() {
            x.iter()
                .zip(&x[lag..])
                .fold(0i32, |acc, (&a, &b)| acc.wrapping_add(mul_16_16(a, b) >> scale))
        } else {
            0
        };
    }

    (order + 1, scale)
}
