//! Windowing and Q12 filters
//!
//! The free functions take caller-owned state slices; [`FirFilter`],
//! [`Decimator`] and [`ArFilter`] own their state and validate their
//! configuration once.

pub mod fir;
pub mod iir;
pub mod window;

pub use fir::{downsample, filter_ma, filter_ma_fast_q12, Decimator, FirFilter};
pub use iir::{filter_ar, filter_ar_fast_q12, filter_ar_sample_based, ArFilter};
pub use window::get_hanning_window;

use crate::constants::{Q12_ACC_MAX, Q12_ACC_MIN, Q12_ROUND};
use crate::math::sat;

/// Clamp a Q12 accumulator and round it back to a 16-bit sample
#[inline(always)]
pub(crate) fn round_q12(acc: i32) -> i16 {
    ((sat(Q12_ACC_MAX, acc, Q12_ACC_MIN) + Q12_ROUND) >> 12) as i16
}

/// Slide `block` into the tail of `state`, keeping the newest samples
///
/// `state` is chronological, oldest first.
pub(crate) fn push_history(state: &mut [i16], block: &[i16]) {
    let state_len = state.len();
    if block.len() >= state_len {
        state.copy_from_slice(&block[block.len() - state_len..]);
    } else {
        state.copy_within(block.len().., 0);
        state[state_len - block.len()..].copy_from_slice(block);
    }
}
