//! Block energy and exponentially smoothed energy tracking

use crate::error::{DspError, Result};
use crate::math::{add_sat_w32, mul_16_16, norm_w32};
use crate::vector::get_scaling_square;
use tracing::debug;

/// Energy of `x` as `(sum of x[i]^2 >> scale, scale)`
///
/// The scale is chosen by [`get_scaling_square`] so that the sum fits in
/// 32 bits.
///
/// ```
/// use dsp_core::energy::energy;
/// assert_eq!(energy(&[1, 2, 33, 100]), (11094, 0));
/// ```
pub fn energy(x: &[i16]) -> (i32, u32) {
    let scale = get_scaling_square(x, x.len() as u32);
    let sum = x
        .iter()
        .fold(0i32, |acc, &s| acc.wrapping_add(mul_16_16(s, s) >> scale));
    (sum, scale)
}

/// Leaky integration of `v[i]^2` into `energy`
///
/// Per sample: `energy += (v[i]^2 - energy + round) >> alpha`. A larger
/// `alpha` gives a slower update; `round` is usually `(1 << alpha) >> 1`.
pub fn update_energy_from_array(energy: &mut i32, v: &[i16], alpha: u32, round: i32) {
    debug_assert!(alpha < 32);
    for &s in v {
        let step = mul_16_16(s, s).wrapping_sub(*energy).wrapping_add(round);
        *energy = energy.wrapping_add(step >> alpha);
    }
}

/// Weighted combination `w1 * energy + w2 * new_data` with Q15 weights
///
/// Each operand is normalized to 16 bits with its own shift and weighted in
/// its own domain, so a small operand keeps its precision next to a large
/// one. The result stays in the Q-domain of the inputs and saturates at 32
/// bits.
pub fn update_energy_from_value(energy: &mut i32, w1: i16, new_data: i32, w2: i16) {
    *energy = add_sat_w32(weighted_term(*energy, w1), weighted_term(new_data, w2));
}

/// `w * x` for a Q15 weight, rounded back into the domain of `x`
fn weighted_term(x: i32, w: i16) -> i32 {
    let norm = norm_w32(x);
    let x16 = (x.wrapping_shl(norm) >> 16) as i16;

    // the product is the result shifted left by norm - 1
    let prod = mul_16_16(x16, w);
    if norm == 0 {
        add_sat_w32(prod, prod)
    } else {
        let shift = norm - 1;
        add_sat_w32(prod, (1i32 << shift) >> 1) >> shift
    }
}

/// Smoothed energy estimate owning its accumulator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnergyTracker {
    energy: i32,
    alpha: u32,
    round: i32,
}

impl EnergyTracker {
    /// Create a tracker with decay `alpha` (in bits) and half-step rounding
    ///
    /// # Errors
    ///
    /// Returns [`DspError::InvalidConfig`] when `alpha` is 32 or more.
    pub fn new(alpha: u32) -> Result<Self> {
        if alpha >= 32 {
            return Err(DspError::invalid_config(format!(
                "Energy decay of {} bits does not fit a 32-bit accumulator",
                alpha
            )));
        }

        let round = (1i32 << alpha) >> 1;
        debug!("Creating energy tracker: alpha={}, round={}", alpha, round);

        Ok(Self {
            energy: 0,
            alpha,
            round,
        })
    }

    /// Replace the rounding term
    pub fn with_round(mut self, round: i32) -> Self {
        self.round = round;
        self
    }

    /// Current energy
    pub fn energy(&self) -> i32 {
        self.energy
    }

    /// Decay in bits
    pub fn alpha(&self) -> u32 {
        self.alpha
    }

    /// Integrate a block of samples, see [`update_energy_from_array`]
    pub fn update_from_array(&mut self, v: &[i16]) -> i32 {
        update_energy_from_array(&mut self.energy, v, self.alpha, self.round);
        self.energy
    }

    /// Blend in a precomputed energy, see [`update_energy_from_value`]
    pub fn update_from_value(&mut self, w1: i16, new_data: i32, w2: i16) -> i32 {
        update_energy_from_value(&mut self.energy, w1, new_data, w2);
        self.energy
    }

    /// Forget the accumulated energy
    pub fn reset(&mut self) {
        self.energy = 0;
        debug!("Energy tracker reset");
    }
}
