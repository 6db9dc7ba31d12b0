//! Random source for counteroffer draws

use crate::types::Price;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Draws a price from an inclusive range.
///
/// Callers guarantee `low <= high`.
pub trait PriceSampler {
    fn sample(&mut self, low: Price, high: Price) -> Price;
}

/// Uniform sampler backed by any `rand` generator
#[derive(Clone, Debug)]
pub struct RngSampler<R> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    /// Wrap a generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSampler<ThreadRng> {
    /// Sampler on the thread-local generator
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngSampler<StdRng> {
    /// Reproducible sampler
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PriceSampler for RngSampler<R> {
    fn sample(&mut self, low: Price, high: Price) -> Price {
        self.rng.gen_range(low..=high)
    }
}

impl<S: PriceSampler + ?Sized> PriceSampler for Box<S> {
    fn sample(&mut self, low: Price, high: Price) -> Price {
        (**self).sample(low, high)
    }
}
