//! Genetic operators for fixed-origin tours.
//!
//! Tours are permutations of node indices `0..n`. Parents are only read;
//! every operator builds or edits a separate child.
//!
//! # Crossover
//!
//! [`crossover`] keeps a prefix of the first parent and fills the rest in the
//! second parent's order, repairing duplicates from the second parent's own
//! prefix.
//!
//! # Mutation
//!
//! [`mutate`] swaps two non-origin positions when the [`MutationGate`] opens.
//! The gate sums a clock reading and a random draw, both reduced modulo 100.

use super::types::{SwapRecord, Tour};
use crate::random::TickSource;
use rand::Rng;
use std::ops::RangeInclusive;

// ============================================================================
// Crossover
// ============================================================================

/// Legal division points for a tour of `n` nodes: `1..=n-2`, or just `1`
/// when `n < 3`.
pub fn division_range(n: usize) -> RangeInclusive<usize> {
    1..=n.saturating_sub(2).max(1)
}

/// One-point crossover with duplicate repair at a given division point.
///
/// The child starts with `parent_a[..division]`. Then, for each position `i`
/// in `division..n`, it appends `parent_b[i]` if that node is not placed yet,
/// or otherwise the first node of `parent_b[..division]` that is not placed
/// yet. Exactly one node is appended per position, so two permutations of
/// the same nodes always yield a permutation.
///
/// # Panics
/// Panics if the parents have different lengths, `division` exceeds their
/// length, a parent holds a node index `>= n`, or the parents are not
/// permutations of the same nodes.
pub fn crossover_at(parent_a: &[usize], parent_b: &[usize], division: usize) -> Vec<usize> {
    let n = parent_a.len();
    assert_eq!(n, parent_b.len(), "parents must have equal length");
    assert!(division <= n, "division point {division} beyond tour length {n}");

    let mut child = Vec::with_capacity(n);
    let mut placed = vec![false; n];

    for &node in &parent_a[..division] {
        child.push(node);
        placed[node] = true;
    }

    for &node in &parent_b[division..] {
        let next = if placed[node] {
            let Some(free) = parent_b[..division].iter().copied().find(|&m| !placed[m]) else {
                panic!("parents are not permutations of the same nodes");
            };
            free
        } else {
            node
        };
        child.push(next);
        placed[next] = true;
    }

    child
}

/// One-point crossover at a uniformly drawn division point.
///
/// # Panics
/// Panics if the parents have different lengths or are empty.
pub fn crossover<R: Rng>(parent_a: &[usize], parent_b: &[usize], rng: &mut R) -> Vec<usize> {
    assert!(!parent_a.is_empty(), "parents must not be empty");
    let division = rng.random_range(division_range(parent_a.len()));
    crossover_at(parent_a, parent_b, division)
}

// ============================================================================
// Mutation
// ============================================================================

/// Probability check deciding whether an offspring is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationGate {
    /// Threshold out of 100.
    pub probability: u8,
}

impl MutationGate {
    pub fn new(probability: u8) -> Self {
        Self { probability }
    }

    /// `(tick % 100 + draw % 100) % 100 < probability`.
    pub fn is_open(&self, tick: u64, draw: u64) -> bool {
        (tick % 100 + draw % 100) % 100 < u64::from(self.probability)
    }

    /// Reads `ticks`, draws from `rng`, and evaluates the gate.
    pub fn roll<T: TickSource, R: Rng>(&self, ticks: &T, rng: &mut R) -> bool {
        let tick = ticks.tick();
        let draw = rng.random_range(0..100u64);
        self.is_open(tick, draw)
    }
}

/// Swaps two distinct positions drawn uniformly from `1..n`.
///
/// Position 0 is never touched. Tours shorter than 3 have no two distinct
/// non-origin positions and are left unchanged.
pub fn swap_mutation<R: Rng>(order: &mut [usize], rng: &mut R) -> Option<SwapRecord> {
    let n = order.len();
    if n < 3 {
        return None;
    }
    let first = rng.random_range(1..n);
    let second = loop {
        let candidate = rng.random_range(1..n);
        if candidate != first {
            break candidate;
        }
    };
    order.swap(first, second);
    Some(SwapRecord { first, second })
}

/// Applies a gated swap mutation to `tour` and records the outcome.
///
/// Returns whether a swap happened.
pub fn mutate<T: TickSource, R: Rng>(
    tour: &mut Tour,
    gate: &MutationGate,
    ticks: &T,
    rng: &mut R,
) -> bool {
    let record = if gate.roll(ticks, rng) {
        swap_mutation(tour.order_mut(), rng)
    } else {
        None
    };
    tour.set_mutation(record);
    record.is_some()
}

/// Breeds one child: crossover of the two parents followed by [`mutate`].
pub fn offspring<T: TickSource, R: Rng>(
    parent_a: &Tour,
    parent_b: &Tour,
    gate: &MutationGate,
    ticks: &T,
    rng: &mut R,
) -> Tour {
    let mut child = Tour::from_order(crossover(parent_a.order(), parent_b.order(), rng));
    mutate(&mut child, gate, ticks, rng);
    child
}

// ============================================================================
// Tests
// ============================================================================
