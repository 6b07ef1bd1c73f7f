//! Constants that form part of the public contract

/// Largest 16-bit sample value
pub const WORD16_MAX: i16 = 32767;
/// Smallest 16-bit sample value
pub const WORD16_MIN: i16 = -32768;
/// Largest 32-bit accumulator value
pub const WORD32_MAX: i32 = 0x7FFF_FFFF;
/// Smallest 32-bit accumulator value
pub const WORD32_MIN: i32 = -0x8000_0000;

/// Maximum LPC / reflection coefficient order handled by the LPC kernels
pub const MAX_LPC_ORDER: usize = 16;

/// Maximum order accepted by the block AR filter wrapper
pub const MAX_AR_ORDER: usize = 32;

/// Maximum decimation factor (as a power of two) accepted by [`crate::filter::Decimator`]
pub const MAX_DECIMATION_FACTOR: u32 = 4;

/// Seed modulus of the linear congruential generator
///
/// The seed is kept in `[0, MAX_SEED_USED)`.
pub const MAX_SEED_USED: u32 = 0x8000_0000;

/// LCG multiplier
pub const RAND_MULTIPLIER: u32 = 69069;

/// LCG increment
pub const RAND_INCREMENT: u32 = 1;

/// Unity in Q12
pub const Q12_ONE: i16 = 4096;

/// Rounding term for a right shift by 12
pub const Q12_ROUND: i32 = 2048;

/// Upper clamp applied to Q12 filter accumulators before rounding
///
/// `2^27 - 1 - 2^11`, so that adding [`Q12_ROUND`] and shifting by 12 stays
/// inside the 16-bit range.
pub const Q12_ACC_MAX: i32 = 134_215_679;

/// Lower clamp applied to Q12 filter accumulators before rounding
pub const Q12_ACC_MIN: i32 = -134_217_728;

/// Maximum order accepted by the checked FIR filter and decimator wrappers
pub const MAX_FIR_ORDER: usize = 64;
