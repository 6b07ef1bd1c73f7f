//! Error handling for the checked layer of the library
//!
//! The fixed-point primitives themselves never fail: they return sentinels or
//! saturate. The types in this module are only produced by the configuration
//! and stateful filter layer, where buffer sizes and filter orders are checked
//! once at the API boundary instead of inside the inner loops.

#![allow(missing_docs)]

use std::fmt;
use thiserror::Error;

/// Result type alias for checked operations
pub type Result<T> = std::result::Result<T, DspError>;

/// Error type for the checked DSP layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DspError {
    /// Invalid filter or generator configuration
    #[error("Invalid configuration: {details}")]
    InvalidConfig { details: String },

    /// Filter order outside the supported range
    #[error("Invalid filter order: {order} (maximum: {max})")]
    InvalidFilterOrder { order: usize, max: usize },

    /// Filter built without any coefficients
    #[error("Filter coefficients cannot be empty")]
    EmptyCoefficients,

    /// Caller-owned filter state is shorter than the filter order
    #[error("Filter state too short: need {needed} samples, got {actual}")]
    StateTooShort { needed: usize, actual: usize },

    /// Output buffer too small for the requested operation
    #[error("Buffer too small: need {needed} samples, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    /// Q-domain outside `[0, 15]`
    #[error("Invalid Q-domain: Q{q} (supported: Q0..=Q15)")]
    InvalidQDomain { q: u32 },

    /// Decimation factor (log2) outside the supported range
    #[error("Invalid decimation factor: 2^{factor} (maximum: 2^{max})")]
    InvalidFactor { factor: u32, max: u32 },

    /// Levinson-Durbin recursion produced a reflection coefficient with |k| >= 1
    #[error("Unstable all-pole model at stage {stage}")]
    UnstableFilter { stage: usize },
}

impl DspError {
    /// Create a new invalid configuration error
    pub fn invalid_config(details: impl Into<String>) -> Self {
        Self::InvalidConfig {
            details: details.into(),
        }
    }

    /// Create a new buffer too small error
    pub fn buffer_too_small(needed: usize, actual: usize) -> Self {
        Self::BufferTooSmall { needed, actual }
    }

    /// Create a new state too short error
    pub fn state_too_short(needed: usize, actual: usize) -> Self {
        Self::StateTooShort { needed, actual }
    }

    /// Check if this error is recoverable
    ///
    /// Configuration errors need a different configuration; buffer and
    /// stability errors can be retried with other input.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidConfig { .. }
            | Self::InvalidFilterOrder { .. }
            | Self::EmptyCoefficients
            | Self::InvalidQDomain { .. }
            | Self::InvalidFactor { .. } => false,

            Self::StateTooShort { .. }
            | Self::BufferTooSmall { .. }
            | Self::UnstableFilter { .. } => true,
        }
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidConfig { .. }
            | Self::InvalidFilterOrder { .. }
            | Self::EmptyCoefficients
            | Self::InvalidQDomain { .. }
            | Self::InvalidFactor { .. } => ErrorCategory::Configuration,

            Self::StateTooShort { .. } | Self::BufferTooSmall { .. } => ErrorCategory::Memory,

            Self::UnstableFilter { .. } => ErrorCategory::Computation,
        }
    }
}

/// Error category for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Configuration and parameter errors
    Configuration,
    /// Buffer sizing errors
    Memory,
    /// Numerical errors
    Computation,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Memory => write!(f, "Memory"),
            Self::Computation => write!(f, "Computation"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = DspError::invalid_config("test message");
        assert!(matches!(err, DspError::InvalidConfig { .. }));
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_error_recoverability() {
        assert!(DspError::UnstableFilter { stage: 3 }.is_recoverable());
        assert!(DspError::buffer_too_small(10, 4).is_recoverable());
        assert!(!DspError::EmptyCoefficients.is_recoverable());
        assert!(!DspError::InvalidQDomain { q: 16 }.is_recoverable());
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(
            DspError::InvalidFilterOrder { order: 40, max: 16 }.category(),
            ErrorCategory::Configuration
        );
        assert_eq!(
            DspError::state_too_short(4, 2).category(),
            ErrorCategory::Memory
        );
        assert_eq!(
            DspError::UnstableFilter { stage: 1 }.category(),
            ErrorCategory::Computation
        );
    }

    #[test]
    fn test_error_display() {
        let err = DspError::StateTooShort {
            needed: 8,
            actual: 3,
        };
        let display = format!("{}", err);
        assert!(display.contains("need 8"));
        assert!(display.contains("got 3"));

        let err = DspError::InvalidFactor { factor: 6, max: 4 };
        assert_eq!(format!("{}", err), "Invalid decimation factor: 2^6 (maximum: 2^4)");
    }
}
