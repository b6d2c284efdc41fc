//! Graph coloring by genetic search.
//!
//! Given an undirected graph and a number of colors, finds a coloring that
//! minimizes the number of edges whose endpoints share a color. The search is
//! a heuristic: it stops at the first conflict-free coloring it meets or when
//! its iteration budget runs out, and gives no optimality guarantee.
//!
//! - [`graph`]: Graph model, DIMACS loading, JSON persistence, Graphviz output
//! - [`ga`]: Colorings, operators, and the evolutionary loop
//! - [`random`]: Seedable generators so every run is reproducible
//!
//! ```
//! use u_coloring::ga::{ColoringRunner, SolverConfig};
//! use u_coloring::graph::dimacs::parse_dimacs_str;
//!
//! let graph = parse_dimacs_str("p edge 3 3\ne 1 2\ne 2 3\ne 1 3\n")?;
//! let config = SolverConfig::default()
//!     .with_num_colors(3)
//!     .with_population_size(20)
//!     .with_max_iterations(100)
//!     .with_seed(7);
//! let solution = ColoringRunner::try_run(&graph, &config)?;
//! assert_eq!(solution.score, 0);
//! # Ok::<(), u_coloring::Error>(())
//! ```

pub mod error;
pub mod ga;
pub mod graph;
pub mod random;

pub use error::{Error, Result};
