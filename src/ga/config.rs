//! Engine configuration.
//!
//! [`TourGaConfig`] holds every parameter that shapes a run.

use super::types::Position;
use crate::error::ConfigError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where node positions come from on each reset.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeLayout {
    /// Each coordinate drawn uniformly from `min..=max`.
    Random { min: i32, max: i32 },

    /// Positions given up front, one per node in creation order.
    Fixed(Vec<Position>),
}

impl Default for NodeLayout {
    fn default() -> Self {
        NodeLayout::Random { min: 10, max: 490 }
    }
}

/// Configuration for the tour genetic algorithm.
///
/// # Defaults
///
/// ```
/// use u_tourga::ga::TourGaConfig;
///
/// let config = TourGaConfig::default();
/// assert_eq!(config.node_count, 10);
/// assert_eq!(config.gene_count, 10);
/// assert_eq!(config.mutation_probability, 1);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tourga::ga::TourGaConfig;
///
/// let config = TourGaConfig::default()
///     .with_node_count(12)
///     .with_gene_count(40)
///     .with_mutation_probability(5)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TourGaConfig {
    /// Number of nodes in every tour.
    pub node_count: usize,

    /// Number of tours in the population.
    pub gene_count: usize,

    /// Mutation gate threshold, out of 100.
    pub mutation_probability: u8,

    /// Ranking rounds used to build the selection wheel.
    ///
    /// `None` uses `node_count`. Only the best `ranking_rounds` tours (capped
    /// by `gene_count`) receive wheel slots, so a value below `gene_count`
    /// leaves the worst tours out of parent selection entirely.
    pub ranking_rounds: Option<usize>,

    /// Node placement.
    pub layout: NodeLayout,

    /// Rejected duplicate offspring tolerated per population slot before a
    /// duplicate is accepted.
    ///
    /// The limit is reached whenever the wheel's parents keep breeding tours
    /// already accepted this generation. That happens once a population
    /// converges on a few short tours, and always when `gene_count` exceeds
    /// the `(node_count - 1)!` tours that share the origin node. Without a
    /// limit such a population could never be filled.
    pub duplicate_retry_limit: usize,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for TourGaConfig {
    fn default() -> Self {
        Self {
            node_count: 10,
            gene_count: 10,
            mutation_probability: 1,
            ranking_rounds: None,
            layout: NodeLayout::default(),
            duplicate_retry_limit: 1000,
            seed: None,
        }
    }
}

impl TourGaConfig {
    /// Sets the number of nodes.
    pub fn with_node_count(mut self, n: usize) -> Self {
        self.node_count = n;
        self
    }

    /// Sets the population size.
    pub fn with_gene_count(mut self, n: usize) -> Self {
        self.gene_count = n;
        self
    }

    /// Sets the mutation gate threshold, clamped to 100.
    pub fn with_mutation_probability(mut self, p: u8) -> Self {
        self.mutation_probability = p.min(100);
        self
    }

    /// Decouples the selection wheel's ranking rounds from `node_count`.
    pub fn with_ranking_rounds(mut self, rounds: usize) -> Self {
        self.ranking_rounds = Some(rounds);
        self
    }

    /// Draws node coordinates uniformly from `min..=max`.
    pub fn with_random_layout(mut self, min: i32, max: i32) -> Self {
        self.layout = NodeLayout::Random { min, max };
        self
    }

    /// Pins node positions. Also sets `node_count` to `positions.len()`.
    pub fn with_positions(mut self, positions: Vec<Position>) -> Self {
        self.node_count = positions.len();
        self.layout = NodeLayout::Fixed(positions);
        self
    }

    /// Sets the per-slot duplicate retry limit.
    pub fn with_duplicate_retry_limit(mut self, limit: usize) -> Self {
        self.duplicate_retry_limit = limit;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Ranking rounds actually used by the selection wheel.
    pub fn effective_ranking_rounds(&self) -> usize {
        self.ranking_rounds.unwrap_or(self.node_count)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.node_count < 2 {
            return Err(ConfigError::TooFewNodes(self.node_count));
        }
        if self.gene_count < 2 {
            return Err(ConfigError::TooFewGenes(self.gene_count));
        }
        if self.mutation_probability > 100 {
            return Err(ConfigError::MutationProbabilityOutOfRange(
                self.mutation_probability,
            ));
        }
        let rounds = self.effective_ranking_rounds();
        if rounds < 2 {
            return Err(ConfigError::TooFewRankingRounds(rounds));
        }
        match &self.layout {
            NodeLayout::Random { min, max } if min > max => {
                return Err(ConfigError::InvertedBounds {
                    min: *min,
                    max: *max,
                });
            }
            NodeLayout::Fixed(positions) if positions.len() != self.node_count => {
                return Err(ConfigError::LayoutMismatch {
                    positions: positions.len(),
                    node_count: self.node_count,
                });
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TourGaConfig::default();
        assert_eq!(config.node_count, 10);
        assert_eq!(config.gene_count, 10);
        assert_eq!(config.mutation_probability, 1);
        assert!(config.ranking_rounds.is_none());
        assert_eq!(config.layout, NodeLayout::Random { min: 10, max: 490 });
        assert_eq!(config.duplicate_retry_limit, 1000);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = TourGaConfig::default()
            .with_node_count(15)
            .with_gene_count(30)
            .with_mutation_probability(20)
            .with_ranking_rounds(30)
            .with_random_layout(0, 100)
            .with_duplicate_retry_limit(5)
            .with_seed(42);

        assert_eq!(config.node_count, 15);
        assert_eq!(config.gene_count, 30);
        assert_eq!(config.mutation_probability, 20);
        assert_eq!(config.ranking_rounds, Some(30));
        assert_eq!(config.layout, NodeLayout::Random { min: 0, max: 100 });
        assert_eq!(config.duplicate_retry_limit, 5);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_ranking_rounds_follow_node_count() {
        let config = TourGaConfig::default().with_node_count(7).with_gene_count(20);
        assert_eq!(config.effective_ranking_rounds(), 7);
        assert_eq!(config.with_ranking_rounds(20).effective_ranking_rounds(), 20);
    }

    #[test]
    fn test_clamp_mutation_probability() {
        let config = TourGaConfig::default().with_mutation_probability(250);
        assert_eq!(config.mutation_probability, 100);
    }

    #[test]
    fn test_with_positions_sets_node_count() {
        let config = TourGaConfig::default().with_positions(vec![
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(1, 1),
        ]);
        assert_eq!(config.node_count, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_too_few_nodes() {
        let config = TourGaConfig::default().with_node_count(1);
        assert_eq!(config.validate(), Err(ConfigError::TooFewNodes(1)));
    }

    #[test]
    fn test_validate_too_few_genes() {
        let config = TourGaConfig::default().with_gene_count(1);
        assert_eq!(config.validate(), Err(ConfigError::TooFewGenes(1)));
    }

    #[test]
    fn test_validate_mutation_out_of_range() {
        let config = TourGaConfig {
            mutation_probability: 101,
            ..TourGaConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::MutationProbabilityOutOfRange(101))
        );
    }

    #[test]
    fn test_validate_ranking_rounds() {
        let config = TourGaConfig::default().with_ranking_rounds(1);
        assert_eq!(config.validate(), Err(ConfigError::TooFewRankingRounds(1)));
    }

    #[test]
    fn test_validate_inverted_bounds() {
        let config = TourGaConfig::default().with_random_layout(50, 10);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedBounds { min: 50, max: 10 })
        );
    }

    #[test]
    fn test_validate_layout_mismatch() {
        let config = TourGaConfig::default()
            .with_positions(vec![Position::new(0, 0), Position::new(1, 1)])
            .with_node_count(3);
        assert_eq!(
            config.validate(),
            Err(ConfigError::LayoutMismatch {
                positions: 2,
                node_count: 3
            })
        );
    }
}
