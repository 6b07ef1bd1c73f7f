//! # DSP-Core: Bit-Exact Fixed-Point Signal Processing
//!
//! A library of 16/32-bit fixed-point primitives for real-time speech and
//! audio processing. Every routine is bit-exact: identical integer inputs
//! give identical outputs on every platform.
//!
//! ## Contents
//!
//! - **Scalar math**: saturating add/subtract, normalization, division,
//!   square roots
//! - **Vectors**: copy, shift, scale, affine transforms, reductions
//! - **Random**: a deterministic LCG with uniform and Gaussian samplers
//! - **Filters**: Hanning window, Q12 FIR, polyphase decimation, Q12 AR
//! - **Linear prediction**: autocorrelation, Levinson-Durbin, Schur,
//!   reflection coefficient / LAR / LPC conversions
//! - **Energy**: block energy and smoothed energy tracking
//! - **FFT**: radix-2 complex FFT and inverse in Q15, up to 1024 points
//!
//! ## Usage
//!
//! ```rust
//! use dsp_core::{BlockFilter, FirConfig, FirFilter};
//!
//! // Two-tap moving average in Q12
//! let mut fir = FirFilter::new(FirConfig::new([2048i16, 2048]))?;
//! let smoothed = fir.process(&[100, 200, 300])?;
//! assert_eq!(smoothed, vec![50, 150, 250]);
//!
//! let a = dsp_core::lpc::estimate_lpc(&[0; 160], 10)?;
//! assert_eq!(a[0], 4096);
//! # Ok::<(), dsp_core::DspError>(())
//! ```
//!
//! ## Error Model
//!
//! The primitives never fail. Division by zero returns the positive maximum
//! of the result type and overflow either saturates or wraps, as named.
//! Only the checked layer ([`types`], the stateful filters and
//! [`lpc::estimate_lpc`]) returns [`Result`].
//!
//! ## Feature Flags
//!
//! - `simd`: SSE2/NEON saturating vector kernels (enabled by default)

#![deny(missing_docs)]

pub mod constants;
pub mod energy;
pub mod error;
pub mod fft;
pub mod filter;
pub mod lpc;
pub mod math;
pub mod random;
pub mod tables;
pub mod types;
pub mod utils;
pub mod vector;

#[cfg(test)]
mod tests;

// Re-export commonly used types and traits
pub use energy::EnergyTracker;
pub use error::{DspError, ErrorCategory, Result};
pub use filter::{ArFilter, Decimator, FirFilter};
pub use random::NoiseGenerator;
pub use types::{ArConfig, BlockFilter, DecimatorConfig, FirConfig};

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
///
/// Installs a `tracing` fmt subscriber if none is set and detects SIMD
/// capabilities. Calling it is optional and safe to repeat.
///
/// # Errors
///
/// Currently always succeeds.
pub fn init() -> Result<()> {
    // Initialize logging if not already done
    let _ = tracing_subscriber::fmt::try_init();

    utils::simd::init_simd_support();

    tracing::info!("DSP-Core v{} initialized", VERSION);
    tracing::info!("SIMD support: {:?}", utils::simd::get_simd_support());

    Ok(())
}

/// Get library information
pub fn info() -> LibraryInfo {
    LibraryInfo {
        version: VERSION,
        max_lpc_order: constants::MAX_LPC_ORDER,
        simd_support: utils::simd::get_simd_support(),
    }
}

/// Library information structure
#[derive(Debug, Clone)]
pub struct LibraryInfo {
    /// Library version
    pub version: &'static str,
    /// Largest LPC order the kernels accept
    pub max_lpc_order: usize,
    /// SIMD support information
    pub simd_support: utils::simd::SimdSupport,
}
