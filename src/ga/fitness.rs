//! Tour length evaluation.

use super::types::{Node, Tour};

/// Cyclic Euclidean length of `order` over `nodes`, including the edge from
/// the last node back to the first.
///
/// # Panics
/// Panics if `order` references an index outside `nodes`.
pub fn tour_length(nodes: &[Node], order: &[usize]) -> f64 {
    let n = order.len();
    (0..n)
        .map(|i| {
            let from = nodes[order[i]].position();
            let to = nodes[order[(i + 1) % n]].position();
            from.distance(&to)
        })
        .sum()
}

/// Scores `tour` and stores the result in its fitness field.
pub fn evaluate(nodes: &[Node], tour: &mut Tour) -> f64 {
    let length = tour_length(nodes, tour.order());
    tour.set_fitness(length);
    length
}

/// Scores every tour in `population`.
pub fn evaluate_population(nodes: &[Node], population: &mut [Tour]) {
    for tour in population.iter_mut() {
        evaluate(nodes, tour);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::types::Position;
    use proptest::prelude::*;

    fn nodes_at(points: &[(i32, i32)]) -> Vec<Node> {
        points
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Node::new(i, Position::new(x, y)))
            .collect()
    }

    #[test]
    fn test_unit_square_perimeter() {
        let nodes = nodes_at(&[(0, 0), (0, 1), (1, 1), (1, 0)]);
        assert!((tour_length(&nodes, &[0, 1, 2, 3]) - 4.0).abs() < 1e-12);
        assert!((tour_length(&nodes, &[0, 3, 2, 1]) - 4.0).abs() < 1e-12);

        // Crossing the diagonals
        let crossed = 2.0 + 2.0 * 2f64.sqrt();
        assert!((tour_length(&nodes, &[0, 2, 1, 3]) - crossed).abs() < 1e-12);
    }

    #[test]
    fn test_includes_closing_edge() {
        let nodes = nodes_at(&[(0, 0), (3, 4)]);
        // There and back
        assert!((tour_length(&nodes, &[0, 1]) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_writes_fitness() {
        let nodes = nodes_at(&[(0, 0), (0, 1), (1, 1), (1, 0)]);
        let mut population = vec![
            Tour::from_order(vec![0, 1, 2, 3]),
            Tour::from_order(vec![0, 2, 1, 3]),
        ];
        evaluate_population(&nodes, &mut population);
        assert!((population[0].fitness() - 4.0).abs() < 1e-12);
        assert!(population[1].fitness() > population[0].fitness());
    }

    proptest! {
        #[test]
        fn prop_rotation_invariant_and_non_negative(
            points in prop::collection::vec((10i32..=490, 10i32..=490), 2..20),
            shift in 0usize..20,
        ) {
            let nodes = nodes_at(&points);
            let order: Vec<usize> = (0..nodes.len()).collect();
            let length = tour_length(&nodes, &order);
            prop_assert!(length >= 0.0);

            let mut rotated = order.clone();
            rotated.rotate_left(shift % nodes.len());
            let rotated_length = tour_length(&nodes, &rotated);
            prop_assert!((length - rotated_length).abs() < 1e-9);
        }
    }
}
