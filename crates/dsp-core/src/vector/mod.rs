//! Vector kernels over caller-owned slices
//!
//! Inputs are immutable slices and outputs mutable slices. Unless a function
//! says otherwise, the number of elements processed is the length of the
//! shortest slice involved, and length mismatches are caught by
//! `debug_assert!` only.

pub mod arith;
pub mod copy;
pub mod reduce;
pub mod shift;

pub use arith::*;
pub use copy::*;
pub use reduce::*;
pub use shift::*;
