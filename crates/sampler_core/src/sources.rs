//! Synthetic sample generators behind the two trigger buttons.

use rand::Rng;
use rand_distr::{Distribution, Normal, Poisson};

/// Number of samples produced per generator fire.
pub const SAMPLE_COUNT: usize = 1000;

/// Rate parameter of the poisson generator.
pub const POISSON_RATE: f64 = 2.0;

/// Draws `n` samples from the standard normal distribution.
pub fn normal_samples<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<f64> {
    let normal = Normal::new(0.0, 1.0).expect("standard normal parameters are valid");
    (0..n).map(|_| normal.sample(rng)).collect()
}

/// Draws `n` samples from a poisson distribution with rate [`POISSON_RATE`].
/// Values are non-negative integers carried as `f64`.
pub fn poisson_samples<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<f64> {
    let poisson = Poisson::new(POISSON_RATE).expect("poisson rate is positive");
    (0..n).map(|_| poisson.sample(rng)).collect()
}
