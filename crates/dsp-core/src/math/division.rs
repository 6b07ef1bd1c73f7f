//! Division primitives and square roots
//!
//! Division by zero never traps: the quotient saturates to the positive
//! maximum of the result type. That sentinel is indistinguishable from a
//! legitimately large quotient, so callers that care must check the
//! denominator first.

use super::ops::{mul_16_16, split_hi_low};

/// `num / den` truncated toward zero; `i32::MAX` when `den == 0`
///
/// ```
/// use dsp_core::math::div_w32_w16;
/// assert_eq!(div_w32_w16(1_000_000, 1000), 1000);
/// assert_eq!(div_w32_w16(123, 0), i32::MAX);
/// ```
#[inline]
pub fn div_w32_w16(num: i32, den: i16) -> i32 {
    if den != 0 {
        num.wrapping_div(den as i32)
    } else {
        i32::MAX
    }
}

/// `num / den` narrowed to 16 bits; `i16::MAX` when `den == 0`
#[inline]
pub fn div_w32_w16_res_w16(num: i32, den: i16) -> i16 {
    if den != 0 {
        num.wrapping_div(den as i32) as i16
    } else {
        i16::MAX
    }
}

/// Unsigned `num / den`; `u32::MAX` when `den == 0`
#[inline]
pub fn div_u32_u16(num: u32, den: u16) -> u32 {
    if den != 0 {
        num / den as u32
    } else {
        u32::MAX
    }
}

/// Fractional division `num / den` in Q31 with a hi/low split denominator
///
/// The denominator is `(den_hi << 16) + (den_low << 1)`, a normalized 31-bit
/// value such as the output of [`split_hi_low`]. A Q14 reciprocal estimate
/// from `den_hi` is refined with one Newton step, giving about 27 correct
/// bits. Expects `|num| < den`.
pub fn div_w32_hi_low(num: i32, den_hi: i16, den_low: i16) -> i32 {
    // 0x1FFFFFFF is 0.5 in Q30, so the estimate lands in Q14
    let approx = div_w32_w16(0x1FFF_FFFF, den_hi) as i16;

    // den * approx in Q30
    let product = (mul_16_16(den_hi, approx) << 1)
        .wrapping_add((mul_16_16(den_low, approx) >> 15) << 1);

    // 2.0 - den * approx in Q30
    let correction = 0x7FFF_FFFFi32.wrapping_sub(product);
    let (corr_hi, corr_low) = split_hi_low(correction);

    // 1 / den in Q29
    let inverse = mul_16_16(corr_hi, approx)
        .wrapping_add(mul_16_16(corr_low, approx) >> 15)
        << 1;
    let (inv_hi, inv_low) = split_hi_low(inverse);

    let (num_hi, num_low) = split_hi_low(num);

    // num * (1 / den) in Q28
    let quotient = mul_16_16(num_hi, inv_hi)
        .wrapping_add(mul_16_16(num_hi, inv_low) >> 15)
        .wrapping_add(mul_16_16(num_low, inv_hi) >> 15);

    quotient.wrapping_shl(3)
}

/// Long division producing `num / den` in Q31
///
/// Restoring division over 31 quotient bits with the sign tracked separately.
/// Expects `|num| < |den|`.
pub fn div_result_in_q31(num: i32, den: i32) -> i32 {
    if num == 0 {
        return 0;
    }

    let mut negative = false;
    let mut l_num = num;
    let mut l_den = den;
    if num < 0 {
        negative = !negative;
        l_num = num.wrapping_neg();
    }
    if den < 0 {
        negative = !negative;
        l_den = den.wrapping_neg();
    }

    let mut div: i32 = 0;
    for _ in 0..31 {
        div <<= 1;
        l_num = l_num.wrapping_shl(1);
        if l_num >= l_den {
            l_num = l_num.wrapping_sub(l_den);
            div += 1;
        }
    }

    if negative {
        -div
    } else {
        div
    }
}

/// Integer square root, `floor(sqrt(value))`
///
/// `value` must be non-negative. Same result as [`sqrt_floor`].
///
/// ```
/// use dsp_core::math::sqrt;
/// assert_eq!(sqrt(2_147_395_600), 46340);
/// assert_eq!(sqrt(2), 1);
/// ```
pub fn sqrt(value: i32) -> i32 {
    debug_assert!(value >= 0, "sqrt of negative value {}", value);
    sqrt_floor(value)
}

/// Floor of the square root of a non-negative 32-bit value
///
/// Bitwise restoring square root over 16 iterations from bit 15 down to bit
/// 0. The partial root is kept shifted left by one bit and the final `>> 1`
/// yields the result. Negative input is read as its unsigned bit pattern.
///
/// ```
/// use dsp_core::math::sqrt_floor;
/// assert_eq!(sqrt_floor(117), 10);
/// ```
pub fn sqrt_floor(value: i32) -> i32 {
    let mut remainder = value as u32;
    let mut root: u32 = 0;
    for n in (0..16).rev() {
        let trial = (root + (1 << n)) << n;
        if remainder >= trial {
            remainder -= trial;
            root |= 2 << n;
        }
    }
    (root >> 1) as i32
}

/// `y[i] = sqrt(1 - x[i]^2)` with `x` and `y` in Q15
///
/// One is represented as `1073741823` in Q30.
pub fn sqrt_of_one_minus_x_squared(x: &[i16], y: &mut [i16]) {
    debug_assert!(y.len() >= x.len());
    for (out, &sample) in y.iter_mut().zip(x) {
        let one_minus_sq = 1_073_741_823 - mul_16_16(sample, sample);
        *out = sqrt(one_minus_sq.max(0)) as i16;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div_w32_w16() {
        assert_eq!(div_w32_w16(1_000_000, 1000), 1000);
        assert_eq!(div_w32_w16(-1, 1), -1);
        assert_eq!(div_w32_w16(123, 0), 0x7FFF_FFFF);
        assert_eq!(div_w32_w16(117, -5), -23);
        assert_eq!(div_w32_w16(-117, 5), -23);
        assert_eq!(div_w32_w16(i32::MIN, -1), i32::MIN);
    }

    #[test]
    fn test_div_w32_w16_res_w16() {
        assert_eq!(div_w32_w16_res_w16(117, -5), -23);
        assert_eq!(div_w32_w16_res_w16(117, 0), i16::MAX);
    }

    #[test]
    fn test_div_u32_u16() {
        assert_eq!(div_u32_u16(117, 5), 23);
        assert_eq!(div_u32_u16(117, 0), u32::MAX);
    }

    #[test]
    fn test_div_result_in_q31() {
        assert_eq!(div_result_in_q31(-5, 117), -91_772_805);
        assert_eq!(div_result_in_q31(5, 117), 91_772_805);
        assert_eq!(div_result_in_q31(0, 117), 0);
        // 0.5 in Q31
        assert_eq!(div_result_in_q31(1, 2), 0x4000_0000);
        assert_eq!(div_result_in_q31(-1, -2), 0x4000_0000);
    }

    #[test]
    fn test_div_w32_hi_low() {
        assert_eq!(div_w32_hi_low(128, 0, 256), 0);

        // 0.25 / 0.5 = 0.5 in Q31, within the ~27-bit accuracy
        let (hi, low) = split_hi_low(0x4000_0000);
        let q = div_w32_hi_low(0x2000_0000, hi, low);
        assert!((q - 0x4000_0000).abs() < 1 << 6, "got {:#x}", q);

        let (hi, low) = split_hi_low(0x6000_0000);
        let q = div_w32_hi_low(0x2000_0000, hi, low);
        let expected = (((0x2000_0000i64) << 31) / 0x6000_0000i64) as i32;
        assert!((q - expected).abs() < 1 << 6, "got {} expected {}", q, expected);
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(sqrt(0), 0);
        assert_eq!(sqrt(1), 1);
        assert_eq!(sqrt(2), 1);
        assert_eq!(sqrt(4), 2);
        assert_eq!(sqrt(117), 10);
        assert_eq!(sqrt(2_147_395_600), 46340);
        assert_eq!(sqrt(i32::MAX), 46340);
    }

    #[test]
    fn test_sqrt_floor() {
        assert_eq!(sqrt_floor(117), 10);
        assert_eq!(sqrt_floor(120), 10);
        assert_eq!(sqrt_floor(121), 11);
        assert_eq!(sqrt_floor(0), 0);
        assert_eq!(sqrt_floor(i32::MAX), 46340);
        for v in [3, 99, 10_000, 1 << 20, 1_999_999_999] {
            let r = sqrt_floor(v) as i64;
            assert!(r * r <= v as i64 && (r + 1) * (r + 1) > v as i64, "value {}", v);
        }
        // unsigned bit pattern
        assert_eq!(sqrt_floor(-1), 65535);
    }

    #[test]
    fn test_sqrt_of_one_minus_x_squared() {
        let x = [4i16, 12, 133, 1100];
        let mut y = [0i16; 4];
        sqrt_of_one_minus_x_squared(&x, &mut y);
        assert_eq!(y, [32767, 32767, 32767, 32749]);

        let mut y = [0i16; 1];
        sqrt_of_one_minus_x_squared(&[i16::MIN], &mut y);
        assert_eq!(y[0], 0);
    }
}
