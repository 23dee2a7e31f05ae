//! Error types.
//!
//! Two failure families exist: configurations rejected before a run starts
//! ([`ConfigError`]), and operator defects detected while a generation is being
//! built ([`InvariantError`]). Neither is recoverable at runtime; both are
//! wrapped by [`TourGaError`] at the engine boundary.

/// A configuration that cannot drive a run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("node_count must be at least 2, got {0}")]
    TooFewNodes(usize),

    #[error("gene_count must be at least 2, got {0}")]
    TooFewGenes(usize),

    #[error("mutation_probability must be within 0..=100, got {0}")]
    MutationProbabilityOutOfRange(u8),

    #[error("ranking_rounds must be at least 2, got {0}")]
    TooFewRankingRounds(usize),

    #[error("layout bounds are inverted: min = {min}, max = {max}")]
    InvertedBounds { min: i32, max: i32 },

    #[error("fixed layout has {positions} positions but node_count is {node_count}")]
    LayoutMismatch { positions: usize, node_count: usize },
}

/// An internal state that correct operators never produce.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantError {
    #[error("tour has {actual} nodes, expected {expected}")]
    TourLength { actual: usize, expected: usize },

    #[error("tour visits node {node} more than once")]
    DuplicateNode { node: usize },

    #[error("tour references unknown node {node} (node_count = {node_count})")]
    UnknownNode { node: usize, node_count: usize },

    #[error("population has {actual} tours, expected {expected}")]
    PopulationSize { actual: usize, expected: usize },

    #[error("selection wheel is empty")]
    EmptyWheel,

    #[error("selection wheel only offers population index {0}, a distinct second parent is impossible")]
    SingleCandidateWheel(usize),
}

/// Errors surfaced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TourGaError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("internal invariant violated: {0}")]
    Invariant(#[from] InvariantError),
}
