//! Randomness sources.
//!
//! The engine owns a single seeded generator and threads it through every
//! operator. The mutation gate additionally mixes in a clock reading supplied
//! by a [`TickSource`].

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Creates a deterministic generator from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A clock-like counter used as secondary entropy by the mutation gate.
///
/// Only `tick() % 100` is ever observed, so granularity does not matter.
pub trait TickSource {
    fn tick(&self) -> u64;
}

/// Wall-clock milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTicks;

impl TickSource for SystemTicks {
    fn tick(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0)
    }
}

/// A constant reading. Makes the mutation gate depend on the generator alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedTicks(pub u64);

impl TickSource for FixedTicks {
    fn tick(&self) -> u64 {
        self.0
    }
}
