//! Chromosome and population types.
//!
//! A [`Coloring`] is one candidate solution: gene `i` is the color of node
//! `i`. Operators only ever produce full-length colorings whose genes lie in
//! `[0, num_colors)`; the runner checks this for every offspring in debug
//! builds. [`Coloring::new`] itself does not validate.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// One color per node, read positionally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coloring(Vec<usize>);

impl Coloring {
    /// Wraps a gene vector.
    pub fn new(genes: Vec<usize>) -> Self {
        Self(genes)
    }

    /// Number of genes (equals the node count of the graph it colors).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the coloring has no genes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gene slice.
    pub fn genes(&self) -> &[usize] {
        &self.0
    }

    pub(crate) fn genes_mut(&mut self) -> &mut [usize] {
        &mut self.0
    }

    /// Returns `true` if every gene is below `num_colors`.
    pub fn is_within(&self, num_colors: usize) -> bool {
        self.0.iter().all(|&c| c < num_colors)
    }

    /// Number of distinct colors actually used.
    pub fn colors_used(&self) -> usize {
        let mut seen: Vec<usize> = self.0.clone();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }

    /// Unwraps into the gene vector.
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}

impl From<Vec<usize>> for Coloring {
    fn from(genes: Vec<usize>) -> Self {
        Self(genes)
    }
}

impl Index<usize> for Coloring {
    type Output = usize;

    fn index(&self, node: usize) -> &usize {
        &self.0[node]
    }
}

/// Fixed-size collection of candidate colorings, best-first after each
/// generation.
pub type Population = Vec<Coloring>;

/// A coloring paired with its conflict count for one generation's sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredColoring {
    pub coloring: Coloring,
    pub score: usize,
}
