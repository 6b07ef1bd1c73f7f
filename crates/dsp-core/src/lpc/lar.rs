//! Reflection coefficient <-> log-area ratio
//!
//! Piecewise-linear approximation of `log((1 + k) / (1 - k))` in three
//! segments, applied to `|k|` with the sign restored afterwards. The
//! segment boundaries sit where adjacent segments meet, so the mapping is
//! continuous and monotone.

use crate::math::{add_sat_w16, add_sat_w32};

/// Upper edge of the linear segment (Q15)
const K_LOW_LIMIT: i32 = 22118;
/// Upper edge of the middle segment (Q15)
const K_MID_LIMIT: i32 = 31130;
/// Offset of the middle segment
const MID_OFFSET: i32 = 11059;
/// Offset of the steep segment
const HIGH_OFFSET: i32 = 26112;
/// Largest LAR produced by the middle segment
const LAR_MID_LIMIT_W16: i32 = 20070;
/// LAR at the top of the middle segment, exclusive, for the 32-bit variant
const LAR_MID_LIMIT_W32: i32 = (K_MID_LIMIT - MID_OFFSET) << 16;

/// Log-area ratio of a Q15 reflection coefficient
///
/// ```
/// use dsp_core::lpc::{k_to_lar_w16, lar_to_refl_coef_w16};
/// let lar = k_to_lar_w16(-25000);
/// assert_eq!(lar, -13941);
/// assert_eq!(lar_to_refl_coef_w16(lar), -25000);
/// ```
pub fn k_to_lar_w16(k: i16) -> i16 {
    let magnitude = (k as i32).abs();
    let lar = if magnitude < K_LOW_LIMIT {
        magnitude >> 1
    } else if magnitude < K_MID_LIMIT {
        magnitude - MID_OFFSET
    } else {
        (magnitude - HIGH_OFFSET) << 2
    };
    if k < 0 {
        -lar as i16
    } else {
        lar as i16
    }
}

/// Reflection coefficient (Q15) from a log-area ratio
///
/// Inverse of [`k_to_lar_w16`]; exact except that odd coefficients in the
/// linear segment come back with their lowest bit cleared.
pub fn lar_to_refl_coef_w16(lar: i16) -> i16 {
    let magnitude = (lar as i32).abs().min(i16::MAX as i32) as i16;
    let k = if (magnitude as i32) < MID_OFFSET {
        magnitude << 1
    } else if (magnitude as i32) < LAR_MID_LIMIT_W16 {
        magnitude + MID_OFFSET as i16
    } else {
        add_sat_w16(magnitude >> 2, HIGH_OFFSET as i16)
    };
    if lar < 0 {
        -k
    } else {
        k
    }
}

/// 32-bit analog of [`k_to_lar_w16`] with `k` in Q31
pub fn k_to_lar_w32(k: i32) -> i32 {
    let magnitude = k.unsigned_abs().min(i32::MAX as u32) as i32;
    let lar = if magnitude < K_LOW_LIMIT << 16 {
        magnitude >> 1
    } else if magnitude < K_MID_LIMIT << 16 {
        magnitude - (MID_OFFSET << 16)
    } else {
        (magnitude - (HIGH_OFFSET << 16)) << 2
    };
    if k < 0 {
        -lar
    } else {
        lar
    }
}

/// 32-bit analog of [`lar_to_refl_coef_w16`]
pub fn lar_to_refl_coef_w32(lar: i32) -> i32 {
    let magnitude = lar.unsigned_abs().min(i32::MAX as u32) as i32;
    let k = if magnitude < MID_OFFSET << 16 {
        magnitude << 1
    } else if magnitude < LAR_MID_LIMIT_W32 {
        magnitude + (MID_OFFSET << 16)
    } else {
        add_sat_w32(magnitude >> 2, HIGH_OFFSET << 16)
    };
    if lar < 0 {
        -k
    } else {
        k
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_w16() {
        assert_eq!(k_to_lar_w16(0), 0);
        assert_eq!(k_to_lar_w16(20000), 10000);
        assert_eq!(k_to_lar_w16(-25000), -13941);
        assert_eq!(k_to_lar_w16(32000), 23552);
        assert_eq!(k_to_lar_w16(32767), 26620);
        assert_eq!(k_to_lar_w16(-32768), -26624);
    }

    #[test]
    fn test_continuity_at_boundaries() {
        assert_eq!(k_to_lar_w16(22117), 11058);
        assert_eq!(k_to_lar_w16(22118), 11059);
        assert_eq!(k_to_lar_w16(31129), 20070);
        assert_eq!(k_to_lar_w16(31130), 20072);
    }

    #[test]
    fn test_inverse_w16() {
        assert_eq!(lar_to_refl_coef_w16(10000), 20000);
        assert_eq!(lar_to_refl_coef_w16(-13941), -25000);
        assert_eq!(lar_to_refl_coef_w16(23552), 32000);
        assert_eq!(lar_to_refl_coef_w16(26620), 32767);
        // saturated at the top
        assert_eq!(lar_to_refl_coef_w16(i16::MAX), 32767);
        assert_eq!(lar_to_refl_coef_w16(i16::MIN), -32767);
    }

    #[test]
    fn test_round_trip_w16() {
        for k in -32767..=32767i32 {
            let k = k as i16;
            let back = lar_to_refl_coef_w16(k_to_lar_w16(k));
            let magnitude = (k as i32).abs();
            if magnitude < K_LOW_LIMIT {
                assert_eq!(back, (magnitude & !1) as i16 * k.signum(), "k = {}", k);
            } else {
                assert_eq!(back, k, "k = {}", k);
            }
        }
    }

    #[test]
    fn test_round_trip_w32() {
        let samples = [
            0i32,
            1 << 20,
            -(1 << 28),
            (K_LOW_LIMIT << 16) - 2,
            K_LOW_LIMIT << 16,
            (K_MID_LIMIT << 16) - 1,
            K_MID_LIMIT << 16,
            -(K_MID_LIMIT << 16) - 12346,
            i32::MAX - 3,
        ];
        // all even, so the linear segment is exact too
        for &k in &samples {
            assert_eq!(lar_to_refl_coef_w32(k_to_lar_w32(k)), k, "k = {}", k);
        }
        assert_eq!(lar_to_refl_coef_w32(k_to_lar_w32(-12345)), -12344);
    }

    #[test]
    fn test_w32_scales_w16() {
        for &k in &[1000i16, -20000, 25000, 31500, -32000] {
            let wide = k_to_lar_w32((k as i32) << 16);
            assert_eq!(wide >> 16, k_to_lar_w16(k) as i32, "k = {}", k);
        }
    }
}
