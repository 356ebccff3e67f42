//! Fault injection: a probabilistic simulated interpreter crash that is
//! unrelated to the source text. The random source is always supplied by
//! the caller so tests can seed it or force either branch.

use crate::dialect::Dialect;
use rand::Rng;

pub const DEFAULT_FAULT_PROBABILITY: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaultInjector {
    probability: f64,
}

impl Default for FaultInjector {
    fn default() -> Self {
        FaultInjector::new(DEFAULT_FAULT_PROBABILITY)
    }
}

impl FaultInjector {
    /// Probability is clamped to `[0, 1]`.
    pub fn new(probability: f64) -> FaultInjector {
        FaultInjector {
            probability: if probability.is_nan() {
                0.0
            } else {
                probability.clamp(0.0, 1.0)
            },
        }
    }

    pub fn disabled() -> FaultInjector {
        FaultInjector::new(0.0)
    }

    pub fn always() -> FaultInjector {
        FaultInjector::new(1.0)
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// One independent draw per call. A fault is produced only when the
    /// draw lands under the probability and no error is already present.
    pub fn maybe_inject<R: Rng + ?Sized>(
        &self,
        dialect: Dialect,
        current_error: Option<&str>,
        rng: &mut R,
    ) -> Option<String> {
        let roll: f64 = rng.gen();
        if roll < self.probability && current_error.is_none() {
            Some(format!(
                "Runtime error: {} interpreter crashed unexpectedly.",
                dialect.id()
            ))
        } else {
            None
        }
    }
}
