//! Configuration types and the block-filter trait for the checked layer
//!
//! The free functions in [`crate::filter`] leave state management to the
//! caller. The types here bundle coefficients with correctly sized state,
//! validate once at construction, and expose a common block interface.

use crate::constants::{MAX_AR_ORDER, MAX_FIR_ORDER};
use crate::error::Result;
use crate::utils::validation::{
    validate_ar_coefficients, validate_coefficients, validate_decimation, validate_state_len,
};

/// Common interface of the stateful block filters
pub trait BlockFilter {
    /// Filter `input` into a caller-provided buffer
    ///
    /// Returns the number of samples written.
    ///
    /// # Errors
    ///
    /// Returns an error if `output` is shorter than
    /// [`output_len`](Self::output_len) for this input.
    fn process_to_buffer(&mut self, input: &[i16], output: &mut [i16]) -> Result<usize>;

    /// Number of output samples produced for `input_len` input samples
    fn output_len(&self, input_len: usize) -> usize;

    /// Clear the filter history
    fn reset(&mut self);

    /// Filter order (number of coefficients minus one)
    fn order(&self) -> usize;

    /// Filter `input` into a newly allocated buffer
    fn process(&mut self, input: &[i16]) -> Result<Vec<i16>> {
        let mut output = vec![0i16; self.output_len(input.len())];
        let written = self.process_to_buffer(input, &mut output)?;
        output.truncate(written);
        Ok(output)
    }
}

/// FIR (moving average) filter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirConfig {
    /// Q12 taps, `b[0]` applies to the newest sample
    pub coefficients: Vec<i16>,
    /// Length of the input history kept between blocks
    pub state_len: usize,
}

impl FirConfig {
    /// Create a configuration with the minimal state for these taps
    pub fn new(coefficients: impl Into<Vec<i16>>) -> Self {
        let coefficients = coefficients.into();
        let state_len = coefficients.len().saturating_sub(1);
        Self {
            coefficients,
            state_len,
        }
    }

    /// Set the state length
    pub fn with_state_len(mut self, state_len: usize) -> Self {
        self.state_len = state_len;
        self
    }

    /// Filter order
    pub fn order(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validate_coefficients(&self.coefficients, MAX_FIR_ORDER)?;
        validate_state_len(self.order(), self.state_len)
    }
}

/// Decimating FIR configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimatorConfig {
    /// Q12 anti-aliasing taps
    pub coefficients: Vec<i16>,
    /// Decimation factor as a power of two
    pub factor: u32,
    /// Input phase picked within each stride, below `1 << factor`
    pub delay: usize,
    /// Length of the input history kept between blocks
    pub state_len: usize,
}

impl DecimatorConfig {
    /// Create a configuration decimating by `2^factor` with zero delay
    pub fn new(coefficients: impl Into<Vec<i16>>, factor: u32) -> Self {
        let coefficients = coefficients.into();
        let state_len = coefficients.len().saturating_sub(1);
        Self {
            coefficients,
            factor,
            delay: 0,
            state_len,
        }
    }

    /// Set the input phase
    pub fn with_delay(mut self, delay: usize) -> Self {
        self.delay = delay;
        self
    }

    /// Set the state length
    pub fn with_state_len(mut self, state_len: usize) -> Self {
        self.state_len = state_len;
        self
    }

    /// Filter order
    pub fn order(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Input samples consumed per output sample
    pub fn stride(&self) -> usize {
        1 << self.factor
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validate_coefficients(&self.coefficients, MAX_FIR_ORDER)?;
        validate_decimation(self.factor, self.delay)?;
        validate_state_len(self.order(), self.state_len)
    }
}

/// All-pole (AR) filter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArConfig {
    /// Q12 polynomial `a`, with `a[0] == 4096`
    pub coefficients: Vec<i16>,
}

impl ArConfig {
    /// Create a configuration from a Q12 polynomial
    pub fn new(coefficients: impl Into<Vec<i16>>) -> Self {
        Self {
            coefficients: coefficients.into(),
        }
    }

    /// Filter order
    pub fn order(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validate_ar_coefficients(&self.coefficients, MAX_AR_ORDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DspError;

    #[test]
    fn test_fir_config() {
        let config = FirConfig::new(vec![4096i16, 2048, 1024]);
        assert_eq!(config.order(), 2);
        assert_eq!(config.state_len, 2);
        assert!(config.validate().is_ok());

        let short = FirConfig::new(vec![4096i16, 2048, 1024]).with_state_len(1);
        assert_eq!(
            short.validate(),
            Err(DspError::StateTooShort { needed: 2, actual: 1 })
        );

        assert_eq!(
            FirConfig::new(Vec::<i16>::new()).validate(),
            Err(DspError::EmptyCoefficients)
        );
    }

    #[test]
    fn test_decimator_config() {
        let config = DecimatorConfig::new([1024i16; 4], 1).with_delay(1);
        assert_eq!(config.stride(), 2);
        assert!(config.validate().is_ok());

        let bad_delay = DecimatorConfig::new([1024i16; 4], 1).with_delay(2);
        assert!(bad_delay.validate().is_err());

        let bad_factor = DecimatorConfig::new([1024i16; 4], 5);
        assert_eq!(
            bad_factor.validate(),
            Err(DspError::InvalidFactor { factor: 5, max: 4 })
        );
    }

    #[test]
    fn test_ar_config() {
        assert!(ArConfig::new(vec![4096i16, -3000, 1000]).validate().is_ok());
        assert!(ArConfig::new(vec![2048i16, -3000]).validate().is_err());
        assert_eq!(
            ArConfig::new(vec![4096i16; 34]).validate(),
            Err(DspError::InvalidFilterOrder { order: 33, max: 32 })
        );
    }
}
