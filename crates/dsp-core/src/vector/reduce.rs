//! Reductions: extrema, dot products and block scaling
//!
//! Index searches resolve ties to the earliest index. On empty input the
//! value searches return their identity (the opposite type limit, or 0 for
//! absolute maxima) and the index searches return 0.

use crate::constants::{WORD16_MAX, WORD16_MIN, WORD32_MAX, WORD32_MIN};
use crate::math::{get_size_in_bits, mul_16_16, norm_w32};

/// Largest `|v[i]|`, saturated to `WORD16_MAX`
///
/// ```
/// use dsp_core::vector::max_abs_value_w16;
/// assert_eq!(max_abs_value_w16(&[-32768, 100]), 32767);
/// ```
pub fn max_abs_value_w16(v: &[i16]) -> i16 {
    let maximum = v
        .iter()
        .map(|&x| (x as i32).abs())
        .max()
        .unwrap_or(0);
    maximum.min(WORD16_MAX as i32) as i16
}

/// Largest `|v[i]|`, saturated to `WORD32_MAX`
pub fn max_abs_value_w32(v: &[i32]) -> i32 {
    let maximum = v.iter().map(|&x| x.unsigned_abs()).max().unwrap_or(0);
    maximum.min(WORD32_MAX as u32) as i32
}

/// Largest element
pub fn max_value_w16(v: &[i16]) -> i16 {
    v.iter().copied().fold(WORD16_MIN, i16::max)
}

/// Largest element
pub fn max_value_w32(v: &[i32]) -> i32 {
    v.iter().copied().fold(WORD32_MIN, i32::max)
}

/// Smallest element
pub fn min_value_w16(v: &[i16]) -> i16 {
    v.iter().copied().fold(WORD16_MAX, i16::min)
}

/// Smallest element
pub fn min_value_w32(v: &[i32]) -> i32 {
    v.iter().copied().fold(WORD32_MAX, i32::min)
}

/// Index of the first element with the largest magnitude
///
/// `-32768` counts as larger than `32767`.
pub fn max_abs_index_w16(v: &[i16]) -> usize {
    let mut index = 0;
    let mut maximum = -1i32;
    for (i, &x) in v.iter().enumerate() {
        let magnitude = (x as i32).abs();
        if magnitude > maximum {
            maximum = magnitude;
            index = i;
        }
    }
    index
}

/// Index of the first largest element
pub fn max_index_w16(v: &[i16]) -> usize {
    first_index_by(v, |x, best| x > best)
}

/// Index of the first largest element
pub fn max_index_w32(v: &[i32]) -> usize {
    first_index_by(v, |x, best| x > best)
}

/// Index of the first smallest element
pub fn min_index_w16(v: &[i16]) -> usize {
    first_index_by(v, |x, best| x < best)
}

/// Index of the first smallest element
pub fn min_index_w32(v: &[i32]) -> usize {
    first_index_by(v, |x, best| x < best)
}

#[inline]
fn first_index_by<T: Copy>(v: &[T], better: impl Fn(T, T) -> bool) -> usize {
    let Some(&first) = v.first() else {
        return 0;
    };
    let mut index = 0;
    let mut best = first;
    for (i, &x) in v.iter().enumerate().skip(1) {
        if better(x, best) {
            best = x;
            index = i;
        }
    }
    index
}

/// Sum of `a[i] * b[i]` in 32 bits
///
/// Neither scaled nor saturated; the caller keeps `len * max|a*b|` below
/// `2^31`.
///
/// ```
/// use dsp_core::vector::dot_product;
/// assert_eq!(dot_product(&[1, 2, 3], &[4, 5, 6]), 32);
/// ```
pub fn dot_product(a: &[i16], b: &[i16]) -> i32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .fold(0i32, |acc, (&x, &y)| acc.wrapping_add(mul_16_16(x, y)))
}

/// Sum of `(a[i] * b[i]) >> scaling`
pub fn dot_product_with_scale(a: &[i16], b: &[i16], scaling: u32) -> i32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).fold(0i32, |acc, (&x, &y)| {
        acc.wrapping_add(mul_16_16(x, y) >> scaling)
    })
}

/// Cross-correlation of `seq1` against successive offsets of `seq2`
///
/// `out[i] = sum_j (seq1[j] * seq2[j + i * step_seq2]) >> right_shifts`
/// for `j < dim_seq`, producing `out.len()` lags. `step_seq2` may be
/// negative to correlate backwards, in which case `seq2` must be the slice
/// that starts at the earliest sample reached.
pub fn cross_correlation(
    out: &mut [i32],
    seq1: &[i16],
    seq2: &[i16],
    dim_seq: usize,
    right_shifts: u32,
    step_seq2: isize,
) {
    debug_assert!(seq1.len() >= dim_seq);
    let origin: isize = if step_seq2 < 0 {
        -step_seq2 * (out.len() as isize - 1).max(0)
    } else {
        0
    };
    for (i, o) in out.iter_mut().enumerate() {
        let start = (origin + i as isize * step_seq2) as usize;
        let window = &seq2[start..start + dim_seq];
        *o = seq1[..dim_seq].iter().zip(window).fold(0i32, |acc, (&x, &y)| {
            acc.wrapping_add(mul_16_16(x, y) >> right_shifts)
        });
    }
}

/// Right shift needed so that `times` squared samples of `v` sum in 32 bits
///
/// With `nbits = get_size_in_bits(times)` and `t = norm_w32(max|v| << 16)`,
/// the result is 0 when `v` is silent or `t > nbits`, else `nbits - t`.
pub fn get_scaling_square(v: &[i16], times: u32) -> u32 {
    let nbits = get_size_in_bits(times);
    let smax = max_abs_value_w16(v);
    if smax == 0 {
        return 0;
    }
    let t = norm_w32((smax as i32) << 16);
    if t > nbits {
        0
    } else {
        nbits - t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const B: [i32; 4] = [4, 12, 133, -1100];

    fn b16() -> Vec<i16> {
        B.iter().map(|&x| x as i16).collect()
    }

    #[test]
    fn test_min_max() {
        let b16 = b16();
        assert_eq!(max_abs_value_w16(&b16), 1100);
        assert_eq!(max_abs_value_w32(&B), 1100);
        assert_eq!(max_value_w16(&b16), 133);
        assert_eq!(max_value_w32(&B), 133);
        assert_eq!(max_abs_index_w16(&b16), 3);
        assert_eq!(max_index_w16(&b16), 2);
        assert_eq!(max_index_w32(&B), 2);
        assert_eq!(min_value_w16(&b16), -1100);
        assert_eq!(min_value_w32(&B), -1100);
        assert_eq!(min_index_w16(&b16), 3);
        assert_eq!(min_index_w32(&B), 3);
        assert_eq!(get_scaling_square(&b16, 1), 0);
    }

    #[test]
    fn test_saturating_abs_max() {
        assert_eq!(max_abs_value_w16(&[-32768, 100]), 32767);
        assert_eq!(max_abs_value_w32(&[i32::MIN, 100]), i32::MAX);
        assert_eq!(max_abs_index_w16(&[32767, -32768]), 1);
    }

    #[test]
    fn test_ties_pick_earliest() {
        assert_eq!(max_index_w16(&[5, 9, 9, 1]), 1);
        assert_eq!(min_index_w32(&[5, -9, 3, -9]), 1);
        assert_eq!(max_abs_index_w16(&[7, -7]), 0);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(max_abs_value_w16(&[]), 0);
        assert_eq!(max_abs_value_w32(&[]), 0);
        assert_eq!(max_value_w16(&[]), i16::MIN);
        assert_eq!(min_value_w32(&[]), i32::MAX);
        assert_eq!(max_index_w32(&[]), 0);
        assert_eq!(min_index_w16(&[]), 0);
        assert_eq!(dot_product(&[], &[]), 0);
        assert_eq!(get_scaling_square(&[], 100), 0);
    }

    #[test]
    fn test_dot_products() {
        let b: [i16; 4] = [4, 12, 133, 1100];
        assert_eq!(dot_product(&[1, 2, 3], &[4, 5, 6]), 32);
        assert_eq!(dot_product_with_scale(&b, &b, 2), 306_962);
    }

    #[test]
    fn test_cross_correlation() {
        let seq1: [i16; 4] = [4, 12, 133, 1100];
        let seq2: [i16; 4] = [9, 25, 267, 2201];
        let mut out = [0i32; 2];
        cross_correlation(&mut out, &seq1, &seq2, 4, 2, 0);
        assert_eq!(out, [614_236, 614_236]);

        let seq2: [i16; 5] = [1, 2, 3, 4, 5];
        let mut out = [0i32; 3];
        cross_correlation(&mut out, &[1, 1], &seq2, 2, 0, 1);
        assert_eq!(out, [3, 5, 7]);

        cross_correlation(&mut out, &[1, 1], &seq2, 2, 0, -1);
        assert_eq!(out, [7, 5, 3]);
    }

    #[test]
    fn test_scaling_square_grows_with_count() {
        let loud = [32767i16; 4];
        assert_eq!(get_scaling_square(&loud, 1), 1);
        assert_eq!(get_scaling_square(&loud, 256), 9);
        assert_eq!(get_scaling_square(&[100], 4), 0);
    }
}
