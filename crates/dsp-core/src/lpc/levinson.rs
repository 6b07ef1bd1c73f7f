//! Autocorrelation to reflection/LPC coefficients
//!
//! Two recursions are provided. [`levinson_durbin`] works on the full
//! 32-bit autocorrelation in split hi/low precision and produces both LPC
//! and reflection coefficients. [`auto_corr_to_refl_coef`] is the cheaper
//! Schur recursion on a 16-bit normalized autocorrelation and produces only
//! reflection coefficients.

use crate::constants::MAX_LPC_ORDER;
use crate::math::{
    abs_w16, add_sat_w16, div_w32_hi_low, join_hi_low, mul_16_16, norm_w32, split_hi_low,
};

/// Reflection coefficients above this magnitude (Q15) are treated as unstable
pub(crate) const STABILITY_LIMIT: i32 = 32750;

/// Product of two hi/low values in Q31
#[inline]
fn mul_hi_low(a_hi: i16, a_low: i16, b_hi: i16, b_low: i16) -> i32 {
    mul_16_16(a_hi, b_hi)
        .wrapping_add(mul_16_16(a_hi, b_low) >> 15)
        .wrapping_add(mul_16_16(a_low, b_hi) >> 15)
        .wrapping_shl(1)
}

/// `1 - k^2` in Q31 for a hi/low reflection coefficient
#[inline]
fn one_minus_k_squared(k_hi: i16, k_low: i16) -> i32 {
    let k_sq = ((mul_16_16(k_hi, k_low) >> 14).wrapping_add(mul_16_16(k_hi, k_hi))).wrapping_shl(1);
    0x7FFF_FFFFi32.wrapping_sub(k_sq.wrapping_abs())
}

/// Levinson-Durbin recursion
///
/// Reads `r[0..=order]` and writes the Q12 polynomial `a[0..=order]`
/// (`a[0] = 4096`) and the Q15 reflection coefficients `k[0..order]`.
/// Returns `false` as soon as a reflection coefficient exceeds 32750 in
/// magnitude; `a` is then left untouched and `k` is only partly written.
pub fn levinson_durbin(r: &[i32], a: &mut [i16], k: &mut [i16], order: usize) -> bool {
    debug_assert!(order >= 1 && order <= MAX_LPC_ORDER);
    debug_assert!(r.len() > order && a.len() > order && k.len() >= order);

    let mut r_hi = [0i16; MAX_LPC_ORDER + 1];
    let mut r_low = [0i16; MAX_LPC_ORDER + 1];
    let mut a_hi = [0i16; MAX_LPC_ORDER + 1];
    let mut a_low = [0i16; MAX_LPC_ORDER + 1];
    let mut a_upd_hi = [0i16; MAX_LPC_ORDER + 1];
    let mut a_upd_low = [0i16; MAX_LPC_ORDER + 1];

    let norm = norm_w32(r[0]);
    for i in 0..=order {
        (r_hi[i], r_low[i]) = split_hi_low(r[i].wrapping_shl(norm));
    }

    // k = a[1] = -r[1] / r[0]
    let r1 = join_hi_low(r_hi[1], r_low[1]);
    let mut tmp = div_w32_hi_low(r1.wrapping_abs(), r_hi[0], r_low[0]);
    if r1 > 0 {
        tmp = tmp.wrapping_neg();
    }

    let (mut k_hi, mut k_low) = split_hi_low(tmp);
    k[0] = k_hi;

    // Q31 -> Q27
    (a_hi[1], a_low[1]) = split_hi_low(tmp >> 4);

    // alpha = r[0] * (1 - k^2)
    let (t_hi, t_low) = split_hi_low(one_minus_k_squared(k_hi, k_low));
    let alpha = mul_hi_low(r_hi[0], r_low[0], t_hi, t_low);

    let mut alpha_exp = norm_w32(alpha);
    let (mut alpha_hi, mut alpha_low) = split_hi_low(alpha.wrapping_shl(alpha_exp));

    for i in 2..=order {
        // r[i] + sum_{j=1}^{i-1} r[j] * a[i-j]
        let mut sum: i32 = 0;
        for j in 1..i {
            sum = sum.wrapping_add(mul_hi_low(r_hi[j], r_low[j], a_hi[i - j], a_low[i - j]));
        }
        sum = sum
            .wrapping_shl(4)
            .wrapping_add(join_hi_low(r_hi[i], r_low[i]));

        // k = -sum / alpha
        let mut k_new = div_w32_hi_low(sum.wrapping_abs(), alpha_hi, alpha_low);
        if sum > 0 {
            k_new = k_new.wrapping_neg();
        }

        // Undo the alpha normalization, saturating if it does not fit
        let norm = norm_w32(k_new);
        if alpha_exp <= norm || k_new == 0 {
            k_new = k_new.wrapping_shl(alpha_exp);
        } else if k_new > 0 {
            k_new = i32::MAX;
        } else {
            k_new = i32::MIN;
        }

        (k_hi, k_low) = split_hi_low(k_new);
        k[i - 1] = k_hi;

        if (k_hi as i32).abs() > STABILITY_LIMIT {
            return false;
        }

        // a_new[j] = a[j] + k * a[i-j], a_new[i] = k
        for j in 1..i {
            let updated = join_hi_low(a_hi[j], a_low[j])
                .wrapping_add(mul_hi_low(k_hi, k_low, a_hi[i - j], a_low[i - j]));
            (a_upd_hi[j], a_upd_low[j]) = split_hi_low(updated);
        }
        (a_upd_hi[i], a_upd_low[i]) = split_hi_low(k_new >> 4);

        // alpha = alpha * (1 - k^2)
        let (t_hi, t_low) = split_hi_low(one_minus_k_squared(k_hi, k_low));
        let alpha = mul_hi_low(alpha_hi, alpha_low, t_hi, t_low);
        let norm = norm_w32(alpha);
        (alpha_hi, alpha_low) = split_hi_low(alpha.wrapping_shl(norm));
        alpha_exp += norm;

        a_hi[1..=i].copy_from_slice(&a_upd_hi[1..=i]);
        a_low[1..=i].copy_from_slice(&a_upd_low[1..=i]);
    }

    // Q27 -> Q12 with rounding
    a[0] = 4096;
    for i in 1..=order {
        let q27 = join_hi_low(a_hi[i], a_low[i]);
        a[i] = (q27.wrapping_shl(1).wrapping_add(32768) >> 16) as i16;
    }

    true
}

/// Schur recursion from autocorrelation to Q15 reflection coefficients
///
/// `r[0..=order]` is normalized to 16 bits. If the recursion degenerates
/// (a lattice error exceeds the residual energy) the remaining
/// coefficients are set to zero.
pub fn auto_corr_to_refl_coef(r: &[i32], order: usize, k: &mut [i16]) {
    debug_assert!(order <= MAX_LPC_ORDER);
    debug_assert!(r.len() > order && k.len() >= order);

    let mut p = [0i16; MAX_LPC_ORDER + 1];
    let mut w = [0i16; MAX_LPC_ORDER + 1];

    let shift = norm_w32(r[0]);
    for i in 0..=order {
        p[i] = (r[i].wrapping_shl(shift) >> 16) as i16;
        w[i] = p[i];
    }

    for n in 1..=order {
        let magnitude = abs_w16(p[1]);
        if p[0] < magnitude {
            k[n - 1..order].fill(0);
            return;
        }

        // 15-bit restoring division magnitude / p[0]
        let mut coef: i16 = 0;
        if magnitude != 0 {
            let mut num = magnitude as i32;
            let den = p[0] as i32;
            for _ in 0..15 {
                coef <<= 1;
                num <<= 1;
                if num >= den {
                    num -= den;
                    coef += 1;
                }
            }
            if p[1] > 0 {
                coef = -coef;
            }
        }
        k[n - 1] = coef;

        if n == order {
            return;
        }

        let scaled = |x: i16| ((mul_16_16(x, coef) + 16384) >> 15) as i16;
        p[0] = add_sat_w16(p[0], scaled(p[1]));
        for i in 1..=order - n {
            p[i] = add_sat_w16(p[i + 1], scaled(w[i]));
            w[i] = add_sat_w16(w[i], scaled(p[i + 1]));
        }
    }
}
