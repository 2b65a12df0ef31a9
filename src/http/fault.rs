//! Randomized failure injection for the liveness endpoint.

use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Decides, per request, whether to report a simulated failure.
///
/// Every decision is an independent Bernoulli(`error_rate`) draw from one
/// generator seeded at construction. The generator sits behind a mutex so
/// concurrent handlers never share unsynchronized state.
#[derive(Debug)]
pub struct FaultInjector {
    error_rate: f64,
    rng: Mutex<StdRng>,
}

impl FaultInjector {
    /// Seed from the current time.
    pub fn new(error_rate: f64) -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_seed(error_rate, seed)
    }

    pub fn with_seed(error_rate: f64, seed: u64) -> Self {
        Self {
            error_rate,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn error_rate(&self) -> f64 {
        self.error_rate
    }

    /// Draw once; true means this request should fail.
    pub fn should_fail(&self) -> bool {
        // A panic while holding the lock cannot leave the generator half-updated.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let draw: f64 = rng.gen();
        draw < self.error_rate
    }
}
