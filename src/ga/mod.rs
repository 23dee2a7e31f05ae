//! Generational genetic algorithm for closed tours.
//!
//! A run places `node_count` labeled points, builds a population of
//! `gene_count` tours that all start at the first point, and improves them
//! one generation per [`TourGa::operate`] call.
//!
//! # Key Types
//!
//! - [`TourGaConfig`]: Run parameters (sizes, mutation gate, wheel rounds, layout)
//! - [`TourGa`]: Owns the population and the best-ever archive
//! - [`Tour`], [`Node`]: Chromosome and the points it visits
//! - [`GenerationReport`], [`GaSnapshot`]: Read-only views for hosts
//!
//! # Submodules
//!
//! - [`fitness`]: Cyclic Euclidean tour length
//! - [`init`]: Node placement and fixed-origin shuffling
//! - [`operators`]: Repaired one-point crossover and gated swap mutation
//! - [`selection`]: Rank-weighted selection wheel
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Baker (1985), "Adaptive Selection Methods for Genetic Algorithms"

mod config;
pub mod fitness;
pub mod init;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::{NodeLayout, TourGaConfig};
pub use runner::{GaSnapshot, GenerationReport, TourGa};
pub use selection::RouletteWheel;
pub use types::{node_name, Node, Position, SwapRecord, Tour, UNSCORED};
