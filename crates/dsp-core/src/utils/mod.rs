//! Utilities shared by the checked layer: SIMD detection and input validation

pub mod simd;
pub mod validation;
