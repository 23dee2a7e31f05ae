//! Rank-weighted selection wheel.
//!
//! The wheel is a flat list of population indices. Better-ranked tours occupy
//! more slots, so a uniform slot draw is biased toward short tours.

use super::types::Tour;
use crate::error::InvariantError;
use rand::Rng;

/// A weighted sampling list of population indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouletteWheel {
    slots: Vec<usize>,
}

impl RouletteWheel {
    /// Builds the wheel from scored tours.
    ///
    /// Runs `ranking_rounds` rounds. Each round takes the lowest-fitness tour
    /// not taken yet (the first one in population order on ties) and appends
    /// its index `population.len() - round` times. Rounds past the population
    /// size contribute nothing.
    pub fn build(population: &[Tour], ranking_rounds: usize) -> Self {
        let n = population.len();
        let mut taken = vec![false; n];
        let mut slots = Vec::new();

        for round in 0..ranking_rounds {
            let weight = n.saturating_sub(round);
            if weight == 0 {
                break;
            }

            let mut best: Option<usize> = None;
            for (i, tour) in population.iter().enumerate() {
                if taken[i] {
                    continue;
                }
                match best {
                    Some(b) if population[b].fitness() <= tour.fitness() => {}
                    _ => best = Some(i),
                }
            }
            let Some(index) = best else { break };

            taken[index] = true;
            slots.extend(std::iter::repeat_n(index, weight));
        }

        Self { slots }
    }

    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots holding `index`.
    pub fn weight_of(&self, index: usize) -> usize {
        self.slots.iter().filter(|&&i| i == index).count()
    }

    /// Draws a uniform slot and returns its population index.
    pub fn spin<R: Rng>(&self, rng: &mut R) -> Result<usize, InvariantError> {
        if self.slots.is_empty() {
            return Err(InvariantError::EmptyWheel);
        }
        Ok(self.slots[rng.random_range(0..self.slots.len())])
    }

    /// Draws slots until one holds a population index other than `exclude`.
    pub fn spin_other<R: Rng>(&self, exclude: usize, rng: &mut R) -> Result<usize, InvariantError> {
        if self.slots.is_empty() {
            return Err(InvariantError::EmptyWheel);
        }
        if self.slots.iter().all(|&i| i == exclude) {
            return Err(InvariantError::SingleCandidateWheel(exclude));
        }
        loop {
            let index = self.slots[rng.random_range(0..self.slots.len())];
            if index != exclude {
                return Ok(index);
            }
        }
    }
}
