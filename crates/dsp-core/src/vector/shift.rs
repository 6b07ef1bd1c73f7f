//! Block shifts between Q-domains
//!
//! Positive counts shift right, negative counts shift left. None of these
//! round or saturate; the caller pre-scales so nothing is lost. Shift counts
//! must be smaller than the sample width in either direction; release builds
//! wrap the count instead of trapping.

/// `out[i] = input[i] >> shift` (or `<< -shift` when negative)
pub fn vector_bit_shift_w16(out: &mut [i16], input: &[i16], shift: i32) {
    debug_assert!(out.len() >= input.len());
    debug_assert!(shift.unsigned_abs() < 16, "shift count {} out of range", shift);
    if shift > 0 {
        for (o, &x) in out.iter_mut().zip(input) {
            *o = x.wrapping_shr(shift as u32);
        }
    } else {
        let left = shift.unsigned_abs();
        for (o, &x) in out.iter_mut().zip(input) {
            *o = x.wrapping_shl(left);
        }
    }
}

/// `out[i] = input[i] >> shift` (or `<< -shift` when negative)
pub fn vector_bit_shift_w32(out: &mut [i32], input: &[i32], shift: i32) {
    debug_assert!(out.len() >= input.len());
    debug_assert!(shift.unsigned_abs() < 32, "shift count {} out of range", shift);
    if shift > 0 {
        for (o, &x) in out.iter_mut().zip(input) {
            *o = x.wrapping_shr(shift as u32);
        }
    } else {
        let left = shift.unsigned_abs();
        for (o, &x) in out.iter_mut().zip(input) {
            *o = x.wrapping_shl(left);
        }
    }
}

/// Shift 32-bit samples and truncate them to 16 bits
///
/// The high half is simply dropped, so the input must already fit after
/// the shift.
pub fn vector_bit_shift_w32_to_w16(out: &mut [i16], input: &[i32], shift: i32) {
    debug_assert!(out.len() >= input.len());
    debug_assert!(shift.unsigned_abs() < 32, "shift count {} out of range", shift);
    if shift >= 0 {
        for (o, &x) in out.iter_mut().zip(input) {
            *o = x.wrapping_shr(shift as u32) as i16;
        }
    } else {
        let left = shift.unsigned_abs();
        for (o, &x) in out.iter_mut().zip(input) {
            *o = x.wrapping_shl(left) as i16;
        }
    }
}
