//! Graph model shared by the solver and the I/O layer.
//!
//! A [`Graph`] is an adjacency list indexed by node plus one color per node.
//! Edges are stored the way DIMACS files list them: `e u v` records `v` in
//! the adjacency of `u` only. The solver never mutates the graph; `colors`
//! is written once after solving so the result can be visualized.
//!
//! # Submodules
//!
//! - [`dimacs`]: DIMACS `.col` parser
//! - [`dot`]: Graphviz output

pub mod dimacs;
pub mod dot;

use crate::error::{Error, Result};
use crate::ga::Coloring;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Adjacency representation plus a per-node color array.
///
/// Invariant: `colors.len() == adjacency.len()` and every neighbor index is
/// below the node count.
///
/// The JSON form uses the field names `AdjecencyList` and `Colors`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Graph {
    #[serde(rename = "AdjecencyList")]
    adjacency: Vec<Vec<usize>>,
    #[serde(rename = "Colors")]
    colors: Vec<usize>,
}

impl Graph {
    /// Creates a graph with `node_count` isolated nodes, all colored 0.
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
            colors: vec![0; node_count],
        }
    }

    /// Creates a graph from directed edge entries `(from, to)`.
    ///
    /// # Panics
    /// Panics if an endpoint is not below `node_count`.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Self {
        let mut graph = Self::new(node_count);
        for &(from, to) in edges {
            graph.add_edge(from, to);
        }
        graph
    }

    /// Generates a random graph.
    ///
    /// For every pair `i < j` the entry `i -> j` is stored with probability
    /// `edge_probability`. An expected average degree `d` corresponds to
    /// `edge_probability = d / node_count`.
    pub fn random<R: Rng>(node_count: usize, edge_probability: f64, rng: &mut R) -> Self {
        let p = if edge_probability.is_nan() {
            0.0
        } else {
            edge_probability.clamp(0.0, 1.0)
        };
        let mut graph = Self::new(node_count);
        for i in 0..node_count {
            for j in (i + 1)..node_count {
                if rng.random_bool(p) {
                    graph.adjacency[i].push(j);
                }
            }
        }
        graph
    }

    /// Records `to` in the adjacency of `from`.
    ///
    /// # Panics
    /// Panics if either endpoint is out of range.
    pub fn add_edge(&mut self, from: usize, to: usize) {
        let n = self.node_count();
        assert!(
            from < n && to < n,
            "edge ({from}, {to}) out of range for {n} nodes"
        );
        self.adjacency[from].push(to);
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored adjacency entries.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Stored neighbors of `node`.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    /// The full adjacency list, indexed by node.
    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    /// Current per-node colors.
    pub fn colors(&self) -> &[usize] {
        &self.colors
    }

    /// Writes a solved coloring back into the graph.
    ///
    /// # Panics
    /// Panics if the coloring length differs from the node count.
    pub fn apply_coloring(&mut self, coloring: &Coloring) {
        assert_eq!(
            coloring.len(),
            self.node_count(),
            "coloring length must equal node count"
        );
        self.colors.clear();
        self.colors.extend_from_slice(coloring.genes());
    }

    /// Serializes the graph to a JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = serde_json::to_vec(self)?;
        fs::write(path, bytes)?;
        Ok(())
    }

    /// Loads a graph previously written by [`save_json`](Self::save_json).
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path)?;
        let graph: Graph = serde_json::from_slice(&bytes)?;
        graph.check()?;
        Ok(graph)
    }

    fn check(&self) -> Result<()> {
        let n = self.node_count();
        if self.colors.len() != n {
            return Err(Error::parse(
                0,
                format!(
                    "graph has {} adjacency rows but {} colors",
                    n,
                    self.colors.len()
                ),
            ));
        }
        for (node, neighbors) in self.adjacency.iter().enumerate() {
            if let Some(&bad) = neighbors.iter().find(|&&j| j >= n) {
                return Err(Error::parse(
                    0,
                    format!("node {node} lists neighbor {bad}, out of range for {n} nodes"),
                ));
            }
        }
        Ok(())
    }
}
