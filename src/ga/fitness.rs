//! Conflict counting.

use super::types::Coloring;
use crate::graph::Graph;

/// Counts color conflicts of `coloring` on `graph`.
///
/// Scans every stored adjacency entry `i -> j` once and counts the entries
/// whose endpoints share a color, then halves the count (integer division).
///
/// The halving is exact only when every edge is listed in both directions.
/// Graphs loaded from DIMACS store each edge once, so on those graphs the
/// result is half the number of conflicting edges, rounded down, and a
/// single conflicting edge scores 0.
///
/// # Panics
/// Panics if the coloring is shorter than the node count.
pub fn conflicts(graph: &Graph, coloring: &Coloring) -> usize {
    let mut matches = 0usize;
    for (i, neighbors) in graph.adjacency().iter().enumerate() {
        let color = coloring[i];
        matches += neighbors.iter().filter(|&&j| coloring[j] == color).count();
    }
    matches / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)])
    }

    #[test]
    fn test_proper_coloring_scores_zero() {
        assert_eq!(conflicts(&triangle(), &Coloring::from(vec![0, 1, 2])), 0);
    }

    #[test]
    fn test_monochrome_triangle() {
        // Three one-directional matches, halved.
        assert_eq!(conflicts(&triangle(), &Coloring::from(vec![0, 0, 0])), 1);
    }

    #[test]
    fn test_single_stored_conflict_rounds_down() {
        // Only 0-1 conflicts: raw count 1, reported 0.
        assert_eq!(conflicts(&triangle(), &Coloring::from(vec![0, 0, 1])), 0);
    }

    #[test]
    fn test_mirrored_edges_give_true_count() {
        let g = Graph::from_edges(2, &[(0, 1), (1, 0)]);
        assert_eq!(conflicts(&g, &Coloring::from(vec![4, 4])), 1);
        assert_eq!(conflicts(&g, &Coloring::from(vec![4, 3])), 0);
    }

    #[test]
    fn test_no_edges_always_zero() {
        let g = Graph::new(5);
        for genes in [vec![0; 5], vec![0, 1, 2, 3, 4], vec![7, 7, 1, 1, 7]] {
            assert_eq!(conflicts(&g, &Coloring::from(genes)), 0);
        }
    }

    #[test]
    fn test_depends_only_on_matching_pairs() {
        // Relabelling colors does not change the score.
        let g = Graph::from_edges(4, &[(0, 1), (0, 2), (1, 2), (2, 3), (0, 3)]);
        let a = Coloring::from(vec![0, 0, 1, 1]);
        let b = Coloring::from(vec![5, 5, 2, 2]);
        assert_eq!(conflicts(&g, &a), conflicts(&g, &b));
    }
}
