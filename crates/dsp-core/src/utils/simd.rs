//! SIMD capability detection and saturating vector kernels
//!
//! Detection runs once and is cached. Every accelerated kernel has a scalar
//! twin producing identical results, so outputs never depend on the host.

use crate::math::add_sat_w16;
use std::sync::OnceLock;

/// SIMD support information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimdSupport {
    /// x86_64 SSE2 support
    pub sse2: bool,
    /// x86_64 AVX2 support
    pub avx2: bool,
    /// AArch64 NEON support
    pub neon: bool,
}

static SIMD_SUPPORT: OnceLock<SimdSupport> = OnceLock::new();

/// Initialize SIMD support detection
pub fn init_simd_support() {
    SIMD_SUPPORT.get_or_init(detect_simd_support);
}

fn detect_simd_support() -> SimdSupport {
    #[cfg(target_arch = "x86_64")]
    {
        SimdSupport {
            sse2: is_x86_feature_detected!("sse2"),
            avx2: is_x86_feature_detected!("avx2"),
            neon: false,
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        SimdSupport {
            sse2: false,
            avx2: false,
            neon: std::arch::is_aarch64_feature_detected!("neon"),
        }
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        SimdSupport {
            sse2: false,
            avx2: false,
            neon: false,
        }
    }
}

/// Get SIMD support information
pub fn get_simd_support() -> SimdSupport {
    *SIMD_SUPPORT.get_or_init(detect_simd_support)
}

/// Check if any SIMD support is available
pub fn has_simd_support() -> bool {
    let support = get_simd_support();
    support.sse2 || support.avx2 || support.neon
}

/// Saturating 16-bit vector add (x86_64 SSE2)
///
/// # Safety
///
/// The CPU must support SSE2.
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
#[target_feature(enable = "sse2")]
pub unsafe fn add_vectors_sat_w16_sse2(out: &mut [i16], a: &[i16], b: &[i16]) {
    use std::arch::x86_64::{__m128i, _mm_adds_epi16, _mm_loadu_si128, _mm_storeu_si128};

    let len = out.len().min(a.len()).min(b.len());
    let lanes = len - len % 8;

    let mut i = 0;
    while i < lanes {
        let va = _mm_loadu_si128(a.as_ptr().add(i) as *const __m128i);
        let vb = _mm_loadu_si128(b.as_ptr().add(i) as *const __m128i);
        _mm_storeu_si128(out.as_mut_ptr().add(i) as *mut __m128i, _mm_adds_epi16(va, vb));
        i += 8;
    }

    add_vectors_sat_w16_scalar(&mut out[lanes..len], &a[lanes..len], &b[lanes..len]);
}

/// Saturating 16-bit vector add (AArch64 NEON)
#[cfg(all(feature = "simd", target_arch = "aarch64"))]
pub fn add_vectors_sat_w16_neon(out: &mut [i16], a: &[i16], b: &[i16]) {
    use std::arch::aarch64::{vld1q_s16, vqaddq_s16, vst1q_s16};

    let len = out.len().min(a.len()).min(b.len());
    let lanes = len - len % 8;

    let mut i = 0;
    while i < lanes {
        // SAFETY: i + 8 <= lanes <= len for every slice; NEON is mandatory on aarch64
        unsafe {
            let va = vld1q_s16(a.as_ptr().add(i));
            let vb = vld1q_s16(b.as_ptr().add(i));
            vst1q_s16(out.as_mut_ptr().add(i), vqaddq_s16(va, vb));
        }
        i += 8;
    }

    add_vectors_sat_w16_scalar(&mut out[lanes..len], &a[lanes..len], &b[lanes..len]);
}

/// Scalar saturating 16-bit vector add
pub fn add_vectors_sat_w16_scalar(out: &mut [i16], a: &[i16], b: &[i16]) {
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = add_sat_w16(x, y);
    }
}

/// Cross-platform saturating vector add dispatcher
pub fn add_vectors_sat_w16_optimized(out: &mut [i16], a: &[i16], b: &[i16]) {
    debug_assert!(a.len() == b.len() && out.len() >= a.len());

    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    {
        if get_simd_support().sse2 {
            // SAFETY: SSE2 presence was just checked
            return unsafe { add_vectors_sat_w16_sse2(out, a, b) };
        }
    }

    #[cfg(all(feature = "simd", target_arch = "aarch64"))]
    {
        if get_simd_support().neon {
            return add_vectors_sat_w16_neon(out, a, b);
        }
    }

    add_vectors_sat_w16_scalar(out, a, b);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simd_support_detection() {
        init_simd_support();
        let support = get_simd_support();

        #[cfg(target_arch = "x86_64")]
        assert!(support.sse2);

        #[cfg(target_arch = "aarch64")]
        assert!(support.neon);

        assert_eq!(support, get_simd_support());
    }

    #[test]
    fn test_dispatch_matches_scalar() {
        let a: Vec<i16> = (0..53).map(|i| ((i * 7919) % 65536 - 32768) as i16).collect();
        let b: Vec<i16> = (0..53).map(|i| ((i * 104_729) % 65536 - 32768) as i16).collect();

        let mut fast = vec![0i16; a.len()];
        let mut slow = vec![0i16; a.len()];
        add_vectors_sat_w16_optimized(&mut fast, &a, &b);
        add_vectors_sat_w16_scalar(&mut slow, &a, &b);
        assert_eq!(fast, slow);
    }

    #[test]
    fn test_saturation_in_vector_lanes() {
        let a = [32000i16; 8];
        let b = [1000i16; 8];
        let mut out = [0i16; 8];
        add_vectors_sat_w16_optimized(&mut out, &a, &b);
        assert_eq!(out, [32767; 8]);

        let a = [-32000i16; 8];
        let b = [-1000i16; 8];
        add_vectors_sat_w16_optimized(&mut out, &a, &b);
        assert_eq!(out, [-32768; 8]);
    }
}
