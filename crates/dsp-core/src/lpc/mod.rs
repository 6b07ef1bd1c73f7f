//! Linear prediction
//!
//! Autocorrelation, the Levinson-Durbin and Schur recursions, conversions
//! between reflection coefficients, log-area ratios and the direct-form
//! polynomial, and the end-to-end estimators built from them.
//!
//! LPC polynomials are Q12 with `a[0] = 4096` unless a function takes an
//! explicit Q-domain. Reflection coefficients are Q15.

pub mod conversion;
pub mod correlation;
pub mod lar;
pub mod levinson;

pub use conversion::{k_to_a_q_scale, lpc_to_refl_coef, refl_coef_to_lpc};
pub use correlation::auto_correlation;
pub use lar::{k_to_lar_w16, k_to_lar_w32, lar_to_refl_coef_w16, lar_to_refl_coef_w32};
pub use levinson::{auto_corr_to_refl_coef, levinson_durbin};

use crate::constants::{MAX_LPC_ORDER, WORD16_MAX};
use crate::error::{DspError, Result};
use crate::utils::validation::{validate_lpc_order, validate_q_domain};
use levinson::STABILITY_LIMIT;
use tracing::{debug, warn};

/// Estimate a Q12 LPC polynomial of `order` from `x`
///
/// Autocorrelates `x`, replaces a zero `r[0]` with `32767`, runs the Schur
/// recursion and steps the reflection coefficients up to `a[0..=order]`.
/// Silence yields the identity polynomial. Returns `order + 1`.
///
/// ```
/// use dsp_core::lpc::lpc;
/// let mut a = [0i16; 4];
/// assert_eq!(lpc(&[0; 32], 3, &mut a), 4);
/// assert_eq!(a, [4096, 0, 0, 0]);
/// ```
pub fn lpc(x: &[i16], order: usize, a: &mut [i16]) -> usize {
    debug_assert!(order >= 1 && order <= MAX_LPC_ORDER);
    debug_assert!(a.len() > order);

    let mut r = [0i32; MAX_LPC_ORDER + 1];
    let mut k = [0i16; MAX_LPC_ORDER];

    auto_correlation(x, order, &mut r);
    if r[0] == 0 {
        r[0] = WORD16_MAX as i32;
    }

    auto_corr_to_refl_coef(&r, order, &mut k);
    refl_coef_to_lpc(&k, order, a);

    order + 1
}

/// Checked LPC analysis of one frame
///
/// Like [`lpc`] but uses the higher precision [`levinson_durbin`]
/// recursion and reports instability instead of returning a questionable
/// polynomial.
///
/// # Errors
///
/// Returns [`DspError::InvalidFilterOrder`] for an order outside
/// `1..=MAX_LPC_ORDER`, [`DspError::InvalidConfig`] when `x` has no more
/// samples than the order, and [`DspError::UnstableFilter`] when the
/// recursion fails.
pub fn estimate_lpc(x: &[i16], order: usize) -> Result<Vec<i16>> {
    validate_lpc_order(order, x.len())?;

    let mut r = vec![0i32; order + 1];
    let (_, scale) = auto_correlation(x, order, &mut r);
    if r[0] == 0 {
        r[0] = WORD16_MAX as i32;
    }

    debug!(
        "Estimating order {} LPC from {} samples (scale {})",
        order,
        x.len(),
        scale
    );

    lpc_from_autocorrelation(&r)
}

/// Q12 LPC polynomial from autocorrelation lags `r[0..=order]`
///
/// The order is `r.len() - 1`.
///
/// # Errors
///
/// Returns [`DspError::InvalidFilterOrder`] unless `r` holds between 2 and
/// `MAX_LPC_ORDER + 1` lags, and [`DspError::UnstableFilter`] naming the
/// first stage whose reflection coefficient reached the stability limit.
pub fn lpc_from_autocorrelation(r: &[i32]) -> Result<Vec<i16>> {
    let order = r.len().saturating_sub(1);
    validate_lpc_order(order, r.len())?;

    let mut a = vec![0i16; order + 1];
    let mut k = vec![0i16; order];

    if !levinson_durbin(r, &mut a, &mut k, order) {
        let stage = k
            .iter()
            .position(|&c| (c as i32).abs() > STABILITY_LIMIT)
            .unwrap_or(order);
        warn!("Levinson-Durbin recursion unstable at stage {}", stage);
        return Err(DspError::UnstableFilter { stage });
    }

    Ok(a)
}

/// LPC polynomial in Q`q` from Q15 reflection coefficients
///
/// # Errors
///
/// Returns [`DspError::InvalidFilterOrder`] for an empty or too long `k`
/// and [`DspError::InvalidQDomain`] for `q > 15`.
pub fn lpc_from_refl_coef(k: &[i16], q: u32) -> Result<Vec<i16>> {
    validate_lpc_order(k.len(), k.len() + 1)?;
    validate_q_domain(q)?;

    let mut a = vec![0i16; k.len() + 1];
    k_to_a_q_scale(k, k.len(), q, &mut a);
    Ok(a)
}
