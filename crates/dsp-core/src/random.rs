//! Deterministic pseudo-random sequences
//!
//! A 31-bit linear congruential generator drives a uniform sampler and a
//! Gaussian sampler that reads from [`RAND_N_TABLE`]. Identical seeds give
//! identical sequences on every platform. Callers own the seed; the
//! [`NoiseGenerator`] wrapper is provided for callers that prefer a value
//! to carry it.

use crate::constants::{MAX_SEED_USED, RAND_INCREMENT, RAND_MULTIPLIER};
use crate::tables::RAND_N_TABLE;
use tracing::debug;

/// Advance the seed one step and return the new value
///
/// `seed = (seed * 69069 + 1) mod 2^31`
///
/// ```
/// use dsp_core::random::increase_seed;
/// let mut seed = 0;
/// assert_eq!(increase_seed(&mut seed), 1);
/// ```
#[inline]
pub fn increase_seed(seed: &mut u32) -> u32 {
    *seed = seed
        .wrapping_mul(RAND_MULTIPLIER)
        .wrapping_add(RAND_INCREMENT)
        & (MAX_SEED_USED - 1);
    *seed
}

/// Uniform sample in `[0, 32767]` from the top bits of the next seed
#[inline]
pub fn rand_u(seed: &mut u32) -> i16 {
    (increase_seed(seed) >> 16) as i16
}

/// Gaussian sample looked up from the top bits of the next seed
#[inline]
pub fn rand_n(seed: &mut u32) -> i16 {
    RAND_N_TABLE[(increase_seed(seed) >> 23) as usize]
}

/// Fill `v` with successive [`rand_u`] samples
///
/// Returns the number of samples written.
pub fn rand_u_array(v: &mut [i16], seed: &mut u32) -> usize {
    for sample in v.iter_mut() {
        *sample = rand_u(seed);
    }
    v.len()
}

/// Fill `v` with Gaussian samples for comfort noise
///
/// The seed advances once per call and selects a start position in the
/// 512-entry table; the samples are then copied out contiguously, wrapping
/// at the end of the table. Successive samples are therefore not
/// independent, which is acceptable for noise fill.
pub fn rand_n_array(v: &mut [i16], seed: &mut u32) -> usize {
    let table_len = RAND_N_TABLE.len();
    let mut start = (increase_seed(seed) & 0x1FF) as usize;

    let mut written = 0;
    while written < v.len() {
        let span = (table_len - start).min(v.len() - written);
        v[written..written + span].copy_from_slice(&RAND_N_TABLE[start..start + span]);
        written += span;
        start = 0;
    }
    written
}

/// Seeded noise source owning its LCG state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseGenerator {
    seed: u32,
}

impl NoiseGenerator {
    /// Create a generator; the seed is reduced modulo `MAX_SEED_USED`
    pub fn new(seed: u32) -> Self {
        let seed = seed & (MAX_SEED_USED - 1);
        debug!("Creating noise generator with seed {}", seed);
        Self { seed }
    }

    /// Current seed
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Restart the sequence from `seed`
    pub fn reseed(&mut self, seed: u32) {
        self.seed = seed & (MAX_SEED_USED - 1);
        debug!("Noise generator reseeded to {}", self.seed);
    }

    /// Next uniform sample
    pub fn uniform(&mut self) -> i16 {
        rand_u(&mut self.seed)
    }

    /// Next Gaussian sample
    pub fn gaussian(&mut self) -> i16 {
        rand_n(&mut self.seed)
    }

    /// Fill `out` with uniform samples
    pub fn fill_uniform(&mut self, out: &mut [i16]) -> usize {
        rand_u_array(out, &mut self.seed)
    }

    /// Fill `out` with table-walk Gaussian samples, see [`rand_n_array`]
    pub fn fill_gaussian(&mut self, out: &mut [i16]) -> usize {
        rand_n_array(out, &mut self.seed)
    }
}

impl Default for NoiseGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sequence() {
        let mut seed = 100_000;
        assert_eq!(increase_seed(&mut seed), 464_449_057);
        assert_eq!(rand_u(&mut seed), 31565);

        let mut lookahead = seed;
        let expected = RAND_N_TABLE[(increase_seed(&mut lookahead) >> 23) as usize];
        assert_eq!(rand_n(&mut seed), expected);

        let mut out = [0i16; 4];
        assert_eq!(rand_u_array(&mut out, &mut seed), 4);
        assert_eq!(out, [3653, 12446, 8525, 30691]);
    }

    #[test]
    fn test_seed_zero() {
        let mut seed = 0;
        assert_eq!(increase_seed(&mut seed), 1);
        seed = 0;
        assert_eq!(rand_u(&mut seed), 0);
    }

    #[test]
    fn test_seed_stays_in_range() {
        let mut seed = u32::MAX;
        for _ in 0..1000 {
            assert!(increase_seed(&mut seed) < MAX_SEED_USED);
        }
    }

    #[test]
    fn test_rand_n_array_walks_table() {
        let mut seed = 7;
        let mut lookahead = seed;
        let start = (increase_seed(&mut lookahead) & 0x1FF) as usize;

        let mut out = vec![0i16; 600];
        assert_eq!(rand_n_array(&mut out, &mut seed), 600);
        assert_eq!(seed, lookahead);
        for (i, &v) in out.iter().enumerate() {
            assert_eq!(v, RAND_N_TABLE[(start + i) % 512], "index {}", i);
        }
    }

    #[test]
    fn test_rand_n_array_empty() {
        let mut seed = 3;
        assert_eq!(rand_n_array(&mut [], &mut seed), 0);
        // the seed still advances
        assert_ne!(seed, 3);
    }

    #[test]
    fn test_noise_generator_matches_free_functions() {
        let mut noise = NoiseGenerator::new(100_000);
        let mut seed = 100_000;
        for _ in 0..32 {
            assert_eq!(noise.uniform(), rand_u(&mut seed));
            assert_eq!(noise.gaussian(), rand_n(&mut seed));
        }
        assert_eq!(noise.seed(), seed);

        noise.reseed(0);
        let mut block = [0i16; 3];
        noise.fill_uniform(&mut block);
        let mut seed = 0;
        let mut expected = [0i16; 3];
        rand_u_array(&mut expected, &mut seed);
        assert_eq!(block, expected);
    }

    #[test]
    fn test_noise_generator_masks_seed() {
        let noise = NoiseGenerator::new(0xFFFF_FFFF);
        assert_eq!(noise.seed(), 0x7FFF_FFFF);
        assert_eq!(NoiseGenerator::default().seed(), 0);
    }
}
