//! Element-wise arithmetic over 16-bit vectors
//!
//! Products are formed in 32 bits and narrowed back to 16 bits by plain
//! truncation unless the function name says `sat` or `round`.

use crate::math::{mul_16_16, mul_16_16_rsft, mul_16_16_rsft_with_round, sat_w32_to_w16};
use crate::utils::simd;

/// `out[i] = (a[i] * b[i]) >> right_shifts`
pub fn elementwise_vector_mult(out: &mut [i16], a: &[i16], b: &[i16], right_shifts: u32) {
    debug_assert!(a.len() == b.len() && out.len() >= a.len());
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = mul_16_16_rsft(x, y, right_shifts) as i16;
    }
}

/// `out[i] = (a[i] * b[len - 1 - i]) >> right_shifts`
///
/// Windowing with a time-reversed window.
pub fn reverse_order_mult_array_elements(
    out: &mut [i16],
    a: &[i16],
    b: &[i16],
    right_shifts: u32,
) {
    debug_assert!(a.len() == b.len() && out.len() >= a.len());
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b.iter().rev()) {
        *o = mul_16_16_rsft(x, y, right_shifts) as i16;
    }
}

/// `out[i] = (gain * input[i]) >> right_shifts`, truncated to 16 bits
pub fn scale_vector(out: &mut [i16], input: &[i16], gain: i16, right_shifts: u32) {
    debug_assert!(out.len() >= input.len());
    for (o, &x) in out.iter_mut().zip(input) {
        *o = mul_16_16_rsft(x, gain, right_shifts) as i16;
    }
}

/// `out[i] = (gain * input[i]) >> right_shifts`, saturated to 16 bits
pub fn scale_vector_with_sat(out: &mut [i16], input: &[i16], gain: i16, right_shifts: u32) {
    debug_assert!(out.len() >= input.len());
    for (o, &x) in out.iter_mut().zip(input) {
        *o = sat_w32_to_w16(mul_16_16_rsft(x, gain, right_shifts));
    }
}

/// `out[i] = (a[i] + b[i]) >> right_shifts`
///
/// The sum is not saturated; inputs must be scaled so it cannot wrap.
pub fn add_vectors_and_shift(out: &mut [i16], a: &[i16], b: &[i16], right_shifts: u32) {
    debug_assert!(a.len() == b.len() && out.len() >= a.len());
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = ((x as i32 + y as i32) >> right_shifts) as i16;
    }
}

/// `out[i] += (gain * input[i] + add_constant) >> right_shifts`
pub fn add_affine_vector_to_vector(
    out: &mut [i16],
    input: &[i16],
    gain: i16,
    add_constant: i32,
    right_shifts: u32,
) {
    debug_assert!(out.len() >= input.len());
    for (o, &x) in out.iter_mut().zip(input) {
        let term = (mul_16_16(x, gain).wrapping_add(add_constant) >> right_shifts) as i16;
        *o = o.wrapping_add(term);
    }
}

/// `out[i] = (gain * input[i] + add_constant) >> right_shifts`
pub fn affine_transform_vector(
    out: &mut [i16],
    input: &[i16],
    gain: i16,
    add_constant: i32,
    right_shifts: u32,
) {
    debug_assert!(out.len() >= input.len());
    for (o, &x) in out.iter_mut().zip(input) {
        *o = (mul_16_16(x, gain).wrapping_add(add_constant) >> right_shifts) as i16;
    }
}

/// `out[i] = ((gain_a * a[i]) >> shift_a) + ((gain_b * b[i]) >> shift_b)`
///
/// Each term is narrowed to 16 bits before the (wrapping) sum.
pub fn scale_and_add_vectors(
    out: &mut [i16],
    a: &[i16],
    gain_a: i16,
    shift_a: u32,
    b: &[i16],
    gain_b: i16,
    shift_b: u32,
) {
    debug_assert!(a.len() == b.len() && out.len() >= a.len());
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        let term_a = mul_16_16_rsft(gain_a, x, shift_a) as i16;
        let term_b = mul_16_16_rsft(gain_b, y, shift_b) as i16;
        *o = term_a.wrapping_add(term_b);
    }
}

/// Like [`scale_and_add_vectors`] with both terms rounded and shifted by 16
pub fn scale_and_add_vectors_rshift16(
    out: &mut [i16],
    a: &[i16],
    gain_a: i16,
    b: &[i16],
    gain_b: i16,
) {
    debug_assert!(a.len() == b.len() && out.len() >= a.len());
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        let term_a = mul_16_16_rsft_with_round(gain_a, x, 16) as i16;
        let term_b = mul_16_16_rsft_with_round(gain_b, y, 16) as i16;
        *o = term_a.wrapping_add(term_b);
    }
}

/// `out[i] = (a[i] * scale_a + b[i] * scale_b + round) >> right_shifts`
///
/// `round` is half an output LSB, or zero when `right_shifts == 0`.
pub fn scale_and_add_vectors_with_round(
    out: &mut [i16],
    a: &[i16],
    scale_a: i16,
    b: &[i16],
    scale_b: i16,
    right_shifts: u32,
) {
    debug_assert!(a.len() == b.len() && out.len() >= a.len());
    let round = (1i32 << right_shifts) >> 1;
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        let acc = mul_16_16(x, scale_a)
            .wrapping_add(mul_16_16(y, scale_b))
            .wrapping_add(round);
        *o = (acc >> right_shifts) as i16;
    }
}

/// `out[i] = add_sat_w16(a[i], b[i])`
///
/// Uses the host's saturating vector add when available.
pub fn add_vectors_sat_w16(out: &mut [i16], a: &[i16], b: &[i16]) {
    simd::add_vectors_sat_w16_optimized(out, a, b);
}
