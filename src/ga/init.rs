//! Run initialization: node placement and the starting population.

use super::config::NodeLayout;
use super::types::{Node, Position, Tour};
use rand::Rng;

/// Creates the node table for a run.
///
/// Random layouts draw each coordinate independently and uniformly from the
/// inclusive `min..=max` range. Fixed layouts take positions in order.
pub fn generate_nodes<R: Rng>(node_count: usize, layout: &NodeLayout, rng: &mut R) -> Vec<Node> {
    match layout {
        NodeLayout::Random { min, max } => (0..node_count)
            .map(|i| {
                let x = rng.random_range(*min..=*max);
                let y = rng.random_range(*min..=*max);
                Node::new(i, Position::new(x, y))
            })
            .collect(),
        NodeLayout::Fixed(positions) => positions
            .iter()
            .take(node_count)
            .enumerate()
            .map(|(i, &p)| Node::new(i, p))
            .collect(),
    }
}

/// The origin tour: nodes in creation order.
pub fn generate_origin(node_count: usize) -> Tour {
    Tour::identity(node_count)
}

/// Fisher–Yates shuffle of positions `1..len`; position 0 is left in place.
///
/// For `n` from `len - 1` down to 2, swaps position `n` with a uniform
/// position in `1..=n`.
pub fn shuffle_fixed_origin<R: Rng>(order: &mut [usize], rng: &mut R) {
    for n in (2..order.len()).rev() {
        let k = rng.random_range(1..=n);
        order.swap(k, n);
    }
}

/// A copy of `origin` with every position except the first shuffled.
pub fn generate_tour<R: Rng>(origin: &Tour, rng: &mut R) -> Tour {
    let mut order = origin.order().to_vec();
    shuffle_fixed_origin(&mut order, rng);
    Tour::from_order(order)
}

/// `gene_count` independently shuffled tours.
pub fn generate_population<R: Rng>(gene_count: usize, origin: &Tour, rng: &mut R) -> Vec<Tour> {
    (0..gene_count).map(|_| generate_tour(origin, rng)).collect()
}
