//! Core data model: nodes and tours.
//!
//! Nodes are immutable value records stored once per run in a node table.
//! A [`Tour`] holds node indices into that table, so reordering a tour never
//! copies coordinate data and every tour stays independently mutable.

use crate::error::InvariantError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fitness assigned to a tour that has not been scored yet, and the initial
/// value of the best-ever archive.
pub const UNSCORED: f64 = f64::INFINITY;

/// Integer 2-D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Position) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }
}

/// A labeled point to be visited.
///
/// Node `i` of a run is named `'A' + i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    name: char,
    position: Position,
}

impl Node {
    /// Creates the node with creation index `index`.
    pub fn new(index: usize, position: Position) -> Self {
        Self {
            name: node_name(index),
            position,
        }
    }

    pub fn name(&self) -> char {
        self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

/// Name of the node created at `index`: `A`, `B`, `C`, ...
pub fn node_name(index: usize) -> char {
    u32::try_from(index)
        .ok()
        .and_then(|i| char::from_u32(u32::from(b'A') + i))
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// The two positions exchanged by a swap mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SwapRecord {
    pub first: usize,
    pub second: usize,
}

/// A candidate solution: a permutation of every node index.
///
/// Index 0 is the tour origin. Shuffle and mutation never move it; crossover
/// may still inherit a different origin from the first parent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tour {
    order: Vec<usize>,
    fitness: f64,
    mutation: Option<SwapRecord>,
}

impl Tour {
    /// Wraps a node order. Fitness starts as [`UNSCORED`].
    pub fn from_order(order: Vec<usize>) -> Self {
        Self {
            order,
            fitness: UNSCORED,
            mutation: None,
        }
    }

    /// The identity order `0, 1, ..., node_count - 1`.
    pub fn identity(node_count: usize) -> Self {
        Self::from_order((0..node_count).collect())
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub(crate) fn order_mut(&mut self) -> &mut [usize] {
        &mut self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total cyclic length. [`UNSCORED`] until evaluated.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    /// The swap applied by the last mutation, if any.
    pub fn mutation(&self) -> Option<SwapRecord> {
        self.mutation
    }

    pub fn mutation_occurred(&self) -> bool {
        self.mutation.is_some()
    }

    pub(crate) fn set_mutation(&mut self, mutation: Option<SwapRecord>) {
        self.mutation = mutation;
    }

    /// Same node order, ignoring fitness and annotations.
    pub fn same_order(&self, other: &Tour) -> bool {
        self.order == other.order
    }

    /// Node names in tour order, e.g. `"ACBD"`.
    pub fn label(&self, nodes: &[Node]) -> String {
        self.order
            .iter()
            .map(|&i| nodes.get(i).map_or('?', Node::name))
            .collect()
    }

    /// Checks that the tour visits each of `node_count` nodes exactly once.
    pub fn check_permutation(&self, node_count: usize) -> Result<(), InvariantError> {
        if self.order.len() != node_count {
            return Err(InvariantError::TourLength {
                actual: self.order.len(),
                expected: node_count,
            });
        }
        let mut seen = vec![false; node_count];
        for &node in &self.order {
            match seen.get_mut(node) {
                None => return Err(InvariantError::UnknownNode { node, node_count }),
                Some(true) => return Err(InvariantError::DuplicateNode { node }),
                Some(slot) => *slot = true,
            }
        }
        Ok(())
    }
}
