//! Saturating scalar arithmetic and fixed-point multiply helpers
//!
//! Functions whose name contains `sat` clamp to the type limits. Everything
//! else wraps in two's complement, exactly like the 16/32-bit integer code it
//! is bit-exact with. Callers pick the variant explicitly.

use crate::constants::{WORD16_MAX, WORD16_MIN};

/// Saturating 16-bit addition
///
/// ```
/// use dsp_core::math::add_sat_w16;
/// assert_eq!(add_sat_w16(32000, 1000), 32767);
/// ```
#[inline(always)]
pub fn add_sat_w16(a: i16, b: i16) -> i16 {
    sat_w32_to_w16(a as i32 + b as i32)
}

/// Saturating 16-bit subtraction
#[inline(always)]
pub fn sub_sat_w16(a: i16, b: i16) -> i16 {
    sat_w32_to_w16(a as i32 - b as i32)
}

/// Saturating 32-bit addition
///
/// Overflow happens iff both operands share a sign that the wrapped sum does
/// not have.
#[inline(always)]
pub fn add_sat_w32(a: i32, b: i32) -> i32 {
    let sum = a.wrapping_add(b);
    if ((a ^ sum) & (b ^ sum)) < 0 {
        if a < 0 {
            i32::MIN
        } else {
            i32::MAX
        }
    } else {
        sum
    }
}

/// Saturating 32-bit subtraction
///
/// Overflow happens iff the operands differ in sign and the wrapped
/// difference does not have the sign of `a`.
#[inline(always)]
pub fn sub_sat_w32(a: i32, b: i32) -> i32 {
    let diff = a.wrapping_sub(b);
    if ((a ^ b) & (a ^ diff)) < 0 {
        if a < 0 {
            i32::MIN
        } else {
            i32::MAX
        }
    } else {
        diff
    }
}

/// Clamp a 32-bit value to the 16-bit range
#[inline(always)]
pub fn sat_w32_to_w16(x: i32) -> i16 {
    if x > WORD16_MAX as i32 {
        WORD16_MAX
    } else if x < WORD16_MIN as i32 {
        WORD16_MIN
    } else {
        x as i16
    }
}

/// Clamp `x` to `[lower, upper]`
#[inline(always)]
pub fn sat(upper: i32, x: i32, lower: i32) -> i32 {
    if x > upper {
        upper
    } else if x < lower {
        lower
    } else {
        x
    }
}

/// Absolute value; `i16::MIN` wraps to itself
#[inline(always)]
pub fn abs_w16(a: i16) -> i16 {
    a.wrapping_abs()
}

/// Absolute value; `i32::MIN` wraps to itself
#[inline(always)]
pub fn abs_w32(a: i32) -> i32 {
    a.wrapping_abs()
}

/// 16x16 -> 32-bit product (never overflows)
#[inline(always)]
pub fn mul_16_16(a: i16, b: i16) -> i32 {
    a as i32 * b as i32
}

/// 16x16 product shifted right by `c`
#[inline(always)]
pub fn mul_16_16_rsft(a: i16, b: i16, c: u32) -> i32 {
    mul_16_16(a, b) >> c
}

/// 16x16 product shifted right by `c` with rounding
#[inline(always)]
pub fn mul_16_16_rsft_with_round(a: i16, b: i16, c: u32) -> i32 {
    (mul_16_16(a, b) + ((1i32 << c) >> 1)) >> c
}

/// 16x16 product rounded and shifted right by 15 (Q15 x Q15 -> Q15)
#[inline(always)]
pub fn mul_16_16_rsft_with_fixround(a: i16, b: i16) -> i32 {
    (mul_16_16(a, b) + 16384) >> 15
}

/// 16x32 product shifted right by 16
///
/// The 32-bit operand is split into its high half and a 15-bit low half so
/// that the product never needs more than 32 bits.
#[inline(always)]
pub fn mul_16_32_rsft16(a: i16, b: i32) -> i32 {
    let hi = a as i32 * (b >> 16);
    let lo = (a as i32 * ((b & 0xFFFF) >> 1) + 0x4000) >> 15;
    hi.wrapping_add(lo)
}

/// 32x32 product shifted right by 32, with the first operand in hi/low form
#[inline(always)]
pub fn mul_32_32_rsft32(a_hi: i16, a_low: i16, b: i32) -> i32 {
    mul_16_32_rsft16(a_hi, b).wrapping_add(mul_16_32_rsft16(a_low, b) >> 16)
}

/// Shift a 16-bit value; positive `c` shifts left, negative shifts right
#[inline(always)]
pub fn shift_w16(x: i16, c: i32) -> i16 {
    if c >= 0 {
        x.wrapping_shl(c as u32)
    } else {
        x >> (-c) as u32
    }
}

/// Shift a 32-bit value; positive `c` shifts left, negative shifts right
#[inline(always)]
pub fn shift_w32(x: i32, c: i32) -> i32 {
    if c >= 0 {
        x.wrapping_shl(c as u32)
    } else {
        x >> (-c) as u32
    }
}

/// One step of the cheap multiplicative scrambler used for dithering
#[inline(always)]
pub fn rand_w16(a: i16) -> i16 {
    (mul_16_16_rsft(a, 18816, 7) & 0x7FFF) as i16
}

/// Split a 32-bit value into a high word and a 15-bit low word
///
/// `x == (hi << 16) + (low << 1)` up to the discarded LSB.
#[inline(always)]
pub fn split_hi_low(x: i32) -> (i16, i16) {
    let hi = (x >> 16) as i16;
    let low = (x.wrapping_sub((hi as i32) << 16) >> 1) as i16;
    (hi, low)
}

/// Inverse of [`split_hi_low`]
#[inline(always)]
pub fn join_hi_low(hi: i16, low: i16) -> i32 {
    ((hi as i32) << 16).wrapping_add((low as i32) << 1)
}
