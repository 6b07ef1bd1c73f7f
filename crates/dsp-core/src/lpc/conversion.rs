//! Reflection coefficients <-> direct-form LPC polynomial

use crate::constants::MAX_LPC_ORDER;
use crate::math::{div_w32_w16, mul_16_16, sat};

/// Step-up recursion from Q15 reflection coefficients to an LPC polynomial
/// in Q`q`
///
/// `a[0]` is unity in Q`q` (32767 for Q15) and
/// `a_i^(m) = a_i^(m-1) + k_m * a_{m-i}^(m-1)`, with each `k` pre-shifted
/// by `15 - q`.
pub fn k_to_a_q_scale(k: &[i16], order: usize, q: u32, a: &mut [i16]) {
    debug_assert!(order >= 1 && order <= MAX_LPC_ORDER);
    debug_assert!(q <= 15);
    debug_assert!(k.len() >= order && a.len() > order);

    let shift = 15 - q;
    let mut next = [0i16; MAX_LPC_ORDER + 1];

    a[0] = (1i32 << q).min(i16::MAX as i32) as i16;
    next[0] = a[0];
    a[1] = k[0] >> shift;

    for m in 1..order {
        next[m + 1] = k[m] >> shift;
        for i in 0..m {
            let reflected = (mul_16_16(a[m - i], k[m]) >> 15) as i16;
            next[i + 1] = a[i + 1].wrapping_add(reflected);
        }
        a[..m + 2].copy_from_slice(&next[..m + 2]);
    }
}

/// [`k_to_a_q_scale`] with Q12 output
///
/// ```
/// use dsp_core::lpc::refl_coef_to_lpc;
/// let mut a = [0i16; 3];
/// refl_coef_to_lpc(&[-16384, 8192], 2, &mut a);
/// assert_eq!(a, [4096, -2560, 1024]);
/// ```
pub fn refl_coef_to_lpc(k: &[i16], order: usize, a: &mut [i16]) {
    k_to_a_q_scale(k, order, 12, a);
}

/// Step-down recursion from a Q12 LPC polynomial to Q15 reflection
/// coefficients
///
/// `a` doubles as scratch space and is overwritten.
pub fn lpc_to_refl_coef(a: &mut [i16], order: usize, k: &mut [i16]) {
    debug_assert!(order >= 1 && order <= MAX_LPC_ORDER);
    debug_assert!(a.len() > order && k.len() >= order);

    let mut tmp = [0i32; MAX_LPC_ORDER + 1];

    // Q12 -> Q15
    k[order - 1] = a[order].wrapping_shl(3);

    for m in (1..order).rev() {
        // (1 - k^2) in Q30, then Q15
        let denom = ((1_073_741_823 - mul_16_16(k[m], k[m])) >> 15) as i16;

        for i in 1..=m {
            // (a[i] - k * a[m - i + 1]) in Q28, divided down to Q13
            let num = ((a[i] as i32) << 16)
                .wrapping_sub(mul_16_16(k[m], a[m - i + 1]).wrapping_shl(1));
            tmp[i] = div_w32_w16(num, denom);
        }

        for i in 1..m {
            a[i] = (tmp[i] >> 1) as i16;
        }

        k[m - 1] = (sat(8191, tmp[m], -8191) << 2) as i16;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_up() {
        let mut a = [0i16; 2];
        refl_coef_to_lpc(&[-16384], 1, &mut a);
        assert_eq!(a, [4096, -2048]);

        let mut a = [0i16; 3];
        refl_coef_to_lpc(&[-16384, 8192], 2, &mut a);
        assert_eq!(a, [4096, -2560, 1024]);
    }

    #[test]
    fn test_q_domains() {
        let mut a = [0i16; 3];
        k_to_a_q_scale(&[-16384, 8192], 2, 15, &mut a);
        assert_eq!(a, [32767, -20480, 8192]);

        k_to_a_q_scale(&[-16384, 8192], 2, 0, &mut a);
        assert_eq!(a, [1, -2, 0]);
    }

    #[test]
    fn test_step_down() {
        let mut a = [4096i16, -3072, 1024];
        let mut k = [0i16; 2];
        lpc_to_refl_coef(&mut a, 2, &mut k);
        assert_eq!(k, [-19660, 8192]);

        let mut a = [4096i16, -2560, 1024];
        lpc_to_refl_coef(&mut a, 2, &mut k);
        assert_eq!(k, [-16384, 8192]);
    }

    #[test]
    fn test_fourth_order_round_trip() {
        let k = [-29819i16, 27263, -19147, 8520];
        let mut a = [0i16; 5];
        refl_coef_to_lpc(&k, 4, &mut a);
        assert_eq!(a, [4096, -9444, 9320, -4688, 1065]);

        let mut back = [0i16; 4];
        lpc_to_refl_coef(&mut a, 4, &mut back);
        assert_eq!(back, [-29868, 27212, -19152, 8520]);
        for (x, y) in k.iter().zip(&back) {
            assert!((*x as i32 - *y as i32).abs() < 64);
        }
    }
}
