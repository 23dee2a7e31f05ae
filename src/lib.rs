//! Genetic-algorithm optimizer for closed-tour routing.
//!
//! Evolves permutations of a fixed point set toward the shortest closed tour
//! (a Traveling-Salesman objective) using:
//!
//! - **Rank-weighted selection**: a roulette wheel whose slot counts follow
//!   fitness rank.
//! - **Repaired one-point crossover**: a prefix of one parent, the remainder
//!   in the other parent's order with duplicates replaced.
//! - **Gated swap mutation**: two non-origin positions exchanged when a
//!   clock-and-random gate opens.
//! - **Elitism**: the best tour ever found is kept in every population.
//!
//! The engine is single-threaded and synchronous. Rendering and user
//! commands are left to the host; the optional `cli` feature ships a
//! headless `tourga` binary.

pub mod error;
pub mod ga;
pub mod random;

pub use error::{ConfigError, InvariantError, TourGaError};
