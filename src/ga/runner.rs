//! Generational engine.
//!
//! [`TourGa`] owns the node table, the population and the best-ever archive,
//! and advances one generation per [`TourGa::operate`] call:
//! wheel → selection + crossover/mutation → scoring → elitism.

use super::config::TourGaConfig;
use super::fitness::{evaluate, evaluate_population};
use super::init::{generate_nodes, generate_origin, generate_population};
use super::operators::{offspring, MutationGate};
use super::selection::RouletteWheel;
use super::types::{Node, Tour, UNSCORED};
use crate::error::{InvariantError, TourGaError};
use crate::random::{create_rng, SystemTicks, TickSource};
use rand::rngs::StdRng;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Outcome of one [`TourGa::operate`] call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GenerationReport {
    /// Generation counter after the step.
    pub generation: usize,

    /// Whether the archive found a strictly shorter tour.
    pub improved: bool,

    /// Archive fitness after the step.
    pub optimum_fitness: f64,

    /// Population index holding the archive tour (found or injected).
    pub best_gene_index: usize,

    /// Offspring that received a swap mutation.
    pub mutations: usize,

    /// Offspring rejected for duplicating an accepted tour.
    pub duplicate_rejections: usize,

    /// Duplicates accepted after the retry limit ran out.
    pub forced_duplicates: usize,
}

/// Read-only copy of the engine state for presentation layers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GaSnapshot {
    pub generation: usize,
    pub optimum_fitness: f64,
    pub best_gene_index: usize,
    pub nodes: Vec<Node>,
    pub best: Tour,
    pub population: Vec<Tour>,
}

/// Generational genetic algorithm over closed tours.
///
/// # Usage
///
/// ```
/// use u_tourga::ga::{TourGa, TourGaConfig};
///
/// let config = TourGaConfig::default().with_node_count(8).with_seed(42);
/// let mut ga = TourGa::new(config).unwrap();
/// for _ in 0..50 {
///     ga.operate().unwrap();
/// }
/// assert_eq!(ga.generation(), 51);
/// assert!(ga.optimum_fitness() > 0.0);
/// ```
#[derive(Debug)]
pub struct TourGa<T: TickSource = SystemTicks> {
    config: TourGaConfig,
    gate: MutationGate,
    ticks: T,
    rng: StdRng,
    nodes: Vec<Node>,
    origin: Tour,
    population: Vec<Tour>,
    best: Tour,
    optimum_fitness: f64,
    best_gene_index: usize,
    generation: usize,
}

impl TourGa<SystemTicks> {
    /// Validates `config` and initializes a run, using the wall clock as the
    /// mutation gate's tick source.
    pub fn new(config: TourGaConfig) -> Result<Self, TourGaError> {
        Self::with_ticks(config, SystemTicks)
    }
}

impl<T: TickSource> TourGa<T> {
    /// Validates `config` and initializes a run with a custom tick source.
    pub fn with_ticks(config: TourGaConfig, ticks: T) -> Result<Self, TourGaError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let mut ga = Self {
            gate: MutationGate::new(config.mutation_probability),
            config,
            ticks,
            rng,
            nodes: Vec::new(),
            origin: Tour::identity(0),
            population: Vec::new(),
            best: Tour::identity(0),
            optimum_fitness: UNSCORED,
            best_gene_index: 0,
            generation: 1,
        };
        ga.reset();
        Ok(ga)
    }

    /// Starts a new run: fresh nodes, fresh population, archive seeded with
    /// the origin tour, generation 1.
    pub fn reset(&mut self) {
        let n = self.config.node_count;

        self.generation = 1;
        self.optimum_fitness = UNSCORED;
        self.best_gene_index = 0;

        self.nodes = generate_nodes(n, &self.config.layout, &mut self.rng);
        self.origin = generate_origin(n);
        evaluate(&self.nodes, &mut self.origin);

        self.population = generate_population(self.config.gene_count, &self.origin, &mut self.rng);
        evaluate_population(&self.nodes, &mut self.population);

        self.best = self.origin.clone();

        tracing::info!(
            node_count = n,
            gene_count = self.config.gene_count,
            mutation_probability = self.config.mutation_probability,
            "run reset"
        );
    }

    /// Advances one generation.
    ///
    /// The next population is built and scored in fresh storage and only
    /// replaces the current one once complete. Fails only when an operator
    /// produced an invalid tour or population.
    pub fn operate(&mut self) -> Result<GenerationReport, TourGaError> {
        let wheel = RouletteWheel::build(&self.population, self.config.effective_ranking_rounds());

        let mut report = GenerationReport {
            generation: self.generation,
            improved: false,
            optimum_fitness: self.optimum_fitness,
            best_gene_index: self.best_gene_index,
            mutations: 0,
            duplicate_rejections: 0,
            forced_duplicates: 0,
        };

        let mut next = self.select(&wheel, &mut report)?;
        evaluate_population(&self.nodes, &mut next);

        let (improved, best_gene_index) = self.search_best(&mut next);

        self.population = next;
        self.best_gene_index = best_gene_index;
        self.generation += 1;

        report.generation = self.generation;
        report.improved = improved;
        report.optimum_fitness = self.optimum_fitness;
        report.best_gene_index = best_gene_index;

        tracing::debug!(
            generation = self.generation,
            optimum_fitness = self.optimum_fitness,
            improved,
            mutations = report.mutations,
            duplicate_rejections = report.duplicate_rejections,
            "generation complete"
        );

        Ok(report)
    }

    /// Breeds a full population of offspring, rejecting duplicates.
    fn select(
        &mut self,
        wheel: &RouletteWheel,
        report: &mut GenerationReport,
    ) -> Result<Vec<Tour>, TourGaError> {
        let gene_count = self.config.gene_count;
        let node_count = self.config.node_count;
        let mut next: Vec<Tour> = Vec::with_capacity(gene_count);
        let mut attempts = 0usize;

        while next.len() < gene_count {
            let a = wheel.spin(&mut self.rng)?;
            let b = wheel.spin_other(a, &mut self.rng)?;

            let child = offspring(
                &self.population[a],
                &self.population[b],
                &self.gate,
                &self.ticks,
                &mut self.rng,
            );
            child.check_permutation(node_count)?;

            if next.iter().any(|t| t.same_order(&child)) {
                report.duplicate_rejections += 1;
                if attempts < self.config.duplicate_retry_limit {
                    attempts += 1;
                    continue;
                }
                report.forced_duplicates += 1;
                tracing::debug!(slot = next.len(), attempts, "duplicate retry limit reached");
            }

            if child.mutation_occurred() {
                report.mutations += 1;
            }
            attempts = 0;
            next.push(child);
        }

        if report.forced_duplicates > 0 {
            tracing::warn!(
                forced_duplicates = report.forced_duplicates,
                gene_count,
                "population could not be filled with distinct tours"
            );
        }

        if next.len() != gene_count {
            return Err(InvariantError::PopulationSize {
                actual: next.len(),
                expected: gene_count,
            }
            .into());
        }
        Ok(next)
    }

    /// Updates the archive from `population`, or injects the archive tour
    /// over the worst member when nothing improved.
    ///
    /// Returns whether the archive improved and the population index now
    /// holding the archive tour.
    fn search_best(&mut self, population: &mut [Tour]) -> (bool, usize) {
        let mut improved = false;
        let mut best_index = self.best_gene_index;
        let mut worst_index = 0;
        let mut worst_fitness = 0.0;

        for (i, tour) in population.iter().enumerate() {
            if tour.fitness() < self.optimum_fitness {
                self.optimum_fitness = tour.fitness();
                self.best = tour.clone();
                best_index = i;
                improved = true;
            }
            if tour.fitness() > worst_fitness {
                worst_fitness = tour.fitness();
                worst_index = i;
            }
        }

        if improved {
            tracing::info!(
                generation = self.generation + 1,
                optimum_fitness = self.optimum_fitness,
                index = best_index,
                "archive improved"
            );
        } else if !population.is_empty() {
            population[worst_index] = self.best.clone();
            best_index = worst_index;
            tracing::debug!(index = worst_index, "archive tour injected over worst member");
        }

        (improved, best_index)
    }

    // ---- Read-only state ----

    pub fn config(&self) -> &TourGaConfig {
        &self.config
    }

    pub fn node_count(&self) -> usize {
        self.config.node_count
    }

    pub fn gene_count(&self) -> usize {
        self.config.gene_count
    }

    /// Current generation, starting at 1.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Length of the best tour found so far. [`UNSCORED`] before the first
    /// [`operate`](Self::operate).
    pub fn optimum_fitness(&self) -> f64 {
        self.optimum_fitness
    }

    /// Population index where the archive tour was last found or injected.
    pub fn best_gene_index(&self) -> usize {
        self.best_gene_index
    }

    /// The best-ever tour.
    pub fn best(&self) -> &Tour {
        &self.best
    }

    pub fn origin(&self) -> &Tour {
        &self.origin
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn population(&self) -> &[Tour] {
        &self.population
    }

    /// Copies the observable state.
    pub fn snapshot(&self) -> GaSnapshot {
        GaSnapshot {
            generation: self.generation,
            optimum_fitness: self.optimum_fitness,
            best_gene_index: self.best_gene_index,
            nodes: self.nodes.clone(),
            best: self.best.clone(),
            population: self.population.clone(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
