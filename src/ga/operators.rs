//! Initialization, crossover, and mutation for integer colorings.
//!
//! # Crossover
//!
//! [`block_crossover`] splits the genome into `ceil(L / P)`-sized contiguous
//! blocks for `P` parents and copies each block verbatim from a parent drawn
//! uniformly and independently per block. The same parent may supply every
//! block.
//!
//! # Mutation
//!
//! [`reset_mutation`] redraws each gene with probability `1 / L`, so one gene
//! is redrawn per call on average. A redrawn gene may keep its old value.

use super::types::{Coloring, Population};
use rand::Rng;

// ============================================================================
// Initialization
// ============================================================================

/// Creates a coloring with every gene drawn uniformly from `[0, num_colors)`.
///
/// # Panics
/// Panics if `num_colors` is 0 and `len` is not.
pub fn random_coloring<R: Rng>(len: usize, num_colors: usize, rng: &mut R) -> Coloring {
    Coloring::new((0..len).map(|_| rng.random_range(0..num_colors)).collect())
}

/// Creates `size` independent random colorings.
pub fn random_population<R: Rng>(
    size: usize,
    len: usize,
    num_colors: usize,
    rng: &mut R,
) -> Population {
    (0..size)
        .map(|_| random_coloring(len, num_colors, rng))
        .collect()
}

// ============================================================================
// Crossover
// ============================================================================

/// Block-wise random-source crossover over any number of parents.
///
/// # Complexity
/// O(L) time, O(L) space
///
/// # Panics
/// Panics if `parents` is empty or the parents differ in length.
pub fn block_crossover<R: Rng>(parents: &[&Coloring], rng: &mut R) -> Coloring {
    assert!(!parents.is_empty(), "crossover needs at least one parent");
    let len = parents[0].len();
    assert!(
        parents.iter().all(|p| p.len() == len),
        "parents must have equal length"
    );

    let block = len.div_ceil(parents.len()).max(1);
    let mut genes = Vec::with_capacity(len);
    let mut start = 0;
    while start < len {
        let end = (start + block).min(len);
        let source = parents[rng.random_range(0..parents.len())];
        genes.extend_from_slice(&source.genes()[start..end]);
        start = end;
    }
    Coloring::new(genes)
}

// ============================================================================
// Mutation
// ============================================================================

/// Redraws each gene from `[0, num_colors)` with probability `1 / len`.
///
/// Mutates in place and returns the coloring for chaining.
pub fn reset_mutation<R: Rng>(mut child: Coloring, num_colors: usize, rng: &mut R) -> Coloring {
    let len = child.len();
    if len == 0 {
        return child;
    }
    let rate = 1.0 / len as f64;
    for gene in child.genes_mut() {
        if rng.random_bool(rate) {
            *gene = rng.random_range(0..num_colors);
        }
    }
    child
}

// ============================================================================
// Tests
// ============================================================================
