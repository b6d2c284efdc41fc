//! Genetic search for graph coloring.
//!
//! A population of random colorings evolves by uniform parent selection,
//! block-wise crossover, and per-gene reset mutation. Offspring are scored
//! by their conflict count and the best of them replace the population
//! each generation.
//!
//! # Key Types
//!
//! - [`Coloring`]: A candidate solution, one color per node
//! - [`SolverConfig`]: Algorithm parameters (colors, population, iterations, seed)
//! - [`ColoringRunner`]: Executes the evolutionary loop
//! - [`Solution`]: Final coloring and its score
//!
//! # Submodules
//!
//! - [`operators`]: Initialization, crossover, and mutation
//! - [`selection`]: Fitness-blind parent selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Beyer & Schwefel (2002), "Evolution strategies: A comprehensive introduction"

mod config;
mod fitness;
pub mod operators;
mod progress;
mod runner;
pub mod selection;
mod solution;
mod types;

pub use config::SolverConfig;
pub use fitness::conflicts;
pub use progress::{LogProgress, ProgressObserver, Silent};
pub use runner::ColoringRunner;
pub use solution::Solution;
pub use types::{Coloring, Population, ScoredColoring};
