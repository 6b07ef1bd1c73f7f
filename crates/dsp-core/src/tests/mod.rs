//! Crate-level test suites
//!
//! Module-level unit tests live next to the code. The suites here pin the
//! published reference values and check the numeric invariants with
//! randomized inputs.


/// Common test signals
pub mod utils {
    /// Two sinusoids at periods 20 and 7 samples, peak about 11000
    pub fn two_tone(len: usize) -> Vec<i16> {
        (0..len)
            .map(|i| {
                let t = i as f64;
                (8000.0 * (2.0 * std::f64::consts::PI * t / 20.0).sin()
                    + 3000.0 * (2.0 * std::f64::consts::PI * t / 7.0).sin()) as i16
            })
            .collect()
    }

    /// Uniform noise from a seeded `rand` generator
    pub fn white_noise(len: usize, amplitude: i16, seed: u64) -> Vec<i16> {
        use rand::rngs::SmallRng;
        use rand::{Rng, SeedableRng};

        let mut rng = SmallRng::seed_from_u64(seed);
        (0..len)
            .map(|_| rng.gen_range(-amplitude..=amplitude))
            .collect()
    }
}
