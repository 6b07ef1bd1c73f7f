//! Normalization counts and bit widths
//!
//! These drive the dynamic Q-point selection in the rest of the library.

/// Number of left shifts that bring the top significant bit of `x` to bit 30
///
/// Negative inputs are one's-complemented first, so `x` and `!x` normalize
/// identically. Both `0` and `-1` have no significant bits and return 0.
///
/// ```
/// use dsp_core::math::norm_w32;
/// assert_eq!(norm_w32(1), 30);
/// assert_eq!(norm_w32(0x0001_0000), 14);
/// ```
#[inline]
pub fn norm_w32(x: i32) -> u32 {
    let magnitude = if x < 0 { !x } else { x } as u32;
    if magnitude == 0 {
        0
    } else {
        magnitude.leading_zeros() - 1
    }
}

/// 16-bit analog of [`norm_w32`]; result in `[0, 15]`
#[inline]
pub fn norm_w16(x: i16) -> u32 {
    let magnitude = if x < 0 { !x } else { x } as u16;
    if magnitude == 0 {
        0
    } else {
        magnitude.leading_zeros() - 1
    }
}

/// Number of leading zeros of an unsigned value; 0 maps to 0
#[inline]
pub fn norm_u32(x: u32) -> u32 {
    if x == 0 {
        0
    } else {
        x.leading_zeros()
    }
}

/// Position of the highest set bit plus one; 0 maps to 0
#[inline]
pub fn get_size_in_bits(x: u32) -> u32 {
    32 - x.leading_zeros()
}
