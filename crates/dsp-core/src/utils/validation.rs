//! Input validation for the checked layer
//!
//! Everything here runs once at construction or at the API boundary, never
//! inside the per-sample loops.

use crate::constants::{MAX_DECIMATION_FACTOR, MAX_LPC_ORDER, Q12_ONE};
use crate::error::{DspError, Result};

/// Validate FIR/AR coefficients against a maximum filter order
///
/// The order of a coefficient vector is its length minus one.
pub fn validate_coefficients(coefficients: &[i16], max_order: usize) -> Result<()> {
    if coefficients.is_empty() {
        return Err(DspError::EmptyCoefficients);
    }

    let order = coefficients.len() - 1;
    if order > max_order {
        return Err(DspError::InvalidFilterOrder {
            order,
            max: max_order,
        });
    }

    Ok(())
}

/// Validate that AR coefficients are normalized (`a[0]` is unity in Q12)
pub fn validate_ar_coefficients(coefficients: &[i16], max_order: usize) -> Result<()> {
    validate_coefficients(coefficients, max_order)?;

    if coefficients[0] != Q12_ONE {
        return Err(DspError::invalid_config(format!(
            "AR coefficients must start with {} (unity in Q12), got {}",
            Q12_ONE, coefficients[0]
        )));
    }

    Ok(())
}

/// Validate the length of a caller-visible filter state
pub fn validate_state_len(needed: usize, actual: usize) -> Result<()> {
    if actual < needed {
        return Err(DspError::state_too_short(needed, actual));
    }
    Ok(())
}

/// Validate an output buffer size
pub fn validate_buffer_size(needed: usize, actual: usize) -> Result<()> {
    if actual < needed {
        return Err(DspError::buffer_too_small(needed, actual));
    }
    Ok(())
}

/// Validate a Q-domain for LPC output
pub fn validate_q_domain(q: u32) -> Result<()> {
    if q > 15 {
        return Err(DspError::InvalidQDomain { q });
    }
    Ok(())
}

/// Validate a decimation factor (log2) and phase delay
pub fn validate_decimation(factor: u32, delay: usize) -> Result<()> {
    if factor > MAX_DECIMATION_FACTOR {
        return Err(DspError::InvalidFactor {
            factor,
            max: MAX_DECIMATION_FACTOR,
        });
    }

    if delay >= 1 << factor {
        return Err(DspError::invalid_config(format!(
            "Decimation delay {} must be below the stride {}",
            delay,
            1usize << factor
        )));
    }

    Ok(())
}

/// Validate an LPC order and the analysis frame it is estimated from
pub fn validate_lpc_order(order: usize, frame_len: usize) -> Result<()> {
    if order == 0 || order > MAX_LPC_ORDER {
        return Err(DspError::InvalidFilterOrder {
            order,
            max: MAX_LPC_ORDER,
        });
    }

    if frame_len <= order {
        return Err(DspError::invalid_config(format!(
            "Analysis frame of {} samples is too short for order {}",
            frame_len, order
        )));
    }

    Ok(())
}
