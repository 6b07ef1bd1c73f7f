//! Scalar fixed-point arithmetic
//!
//! - `ops`: saturating add/subtract and the multiply/shift helper family
//! - `bits`: normalization counts and bit widths
//! - `division`: quotients, reciprocals and square roots

pub mod bits;
pub mod division;
pub mod ops;

pub use bits::{get_size_in_bits, norm_u32, norm_w16, norm_w32};
pub use division::{
    div_result_in_q31, div_u32_u16, div_w32_hi_low, div_w32_w16, div_w32_w16_res_w16, sqrt,
    sqrt_floor, sqrt_of_one_minus_x_squared,
};
pub use ops::*;
