//! Evolutionary loop execution.
//!
//! [`ColoringRunner`] drives the generational search:
//! initialization → (selection → crossover → mutation → scoring) × 2μ →
//! sort → keep best μ → repeat.
//!
//! Replacement is a (μ, λ) strategy with λ = 2μ: the parent population is
//! discarded every generation, so the best coloring of one generation can be
//! lost in the next. The loop stops when a generation's best score is 0, when
//! `max_iterations` generations have run, or when the cancellation flag is
//! set.

use super::config::SolverConfig;
use super::fitness::conflicts;
use super::operators::{block_crossover, random_population, reset_mutation};
use super::progress::{LogProgress, ProgressObserver};
use super::selection::select_parents;
use super::solution::Solution;
use super::types::{Population, ScoredColoring};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::random::{create_rng, entropy_seed};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Executes the coloring search.
///
/// # Usage
///
/// ```
/// use u_coloring::ga::{ColoringRunner, SolverConfig};
/// use u_coloring::graph::Graph;
///
/// let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
/// let config = SolverConfig::default()
///     .with_num_colors(2)
///     .with_population_size(20)
///     .with_max_iterations(200)
///     .with_seed(42);
/// let solution = ColoringRunner::run(&graph, &config);
/// assert_eq!(solution.coloring.len(), 4);
/// ```
pub struct ColoringRunner;

impl ColoringRunner {
    /// Runs the search, logging progress through `tracing`.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`SolverConfig::validate`]
    /// or use [`try_run`](Self::try_run) to get a descriptive error).
    pub fn run(graph: &Graph, config: &SolverConfig) -> Solution {
        Self::run_with_cancel(graph, config, None)
    }

    /// Runs the search, returning [`Error::InvalidConfig`] instead of
    /// panicking on a bad configuration.
    pub fn try_run(graph: &Graph, config: &SolverConfig) -> Result<Solution> {
        Self::run_with_observer(graph, config, &LogProgress, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// If the flag is set, the search stops before the next generation and
    /// returns the best coloring of the last completed one.
    ///
    /// # Panics
    /// Panics if the configuration is invalid.
    pub fn run_with_cancel(
        graph: &Graph,
        config: &SolverConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Solution {
        config.validate().expect("invalid SolverConfig");
        evolve(graph, config, &LogProgress, cancel)
    }

    /// Runs the search, sending progress reports to `observer`.
    pub fn run_with_observer<O: ProgressObserver + ?Sized>(
        graph: &Graph,
        config: &SolverConfig,
        observer: &O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<Solution> {
        config.validate().map_err(Error::InvalidConfig)?;
        Ok(evolve(graph, config, observer, cancel))
    }
}

/// The generational loop. Expects a validated configuration.
fn evolve<O: ProgressObserver + ?Sized>(
    graph: &Graph,
    config: &SolverConfig,
    observer: &O,
    cancel: Option<Arc<AtomicBool>>,
) -> Solution {
    let seed = config.seed.unwrap_or_else(entropy_seed);
    let mut rng = create_rng(seed);

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        colors = config.num_colors,
        population = config.population_size,
        seed,
        "starting coloring search"
    );

    let mut population: Population = random_population(
        config.population_size,
        graph.node_count(),
        config.num_colors,
        &mut rng,
    );

    let offspring_count = config.offspring_count();
    let mut iterations = 0usize;
    let mut cancelled = false;

    for iteration in 0..config.max_iterations {
        if let Some(ref flag) = cancel {
            if flag.load(Ordering::Relaxed) {
                warn!(iteration, "coloring search cancelled");
                cancelled = true;
                break;
            }
        }

        // Offspring are buffered before replacing the population.
        let mut offspring: Vec<ScoredColoring> = Vec::with_capacity(offspring_count);
        for _ in 0..offspring_count {
            let parents = select_parents(&population, &mut rng);
            let child = block_crossover(&parents, &mut rng);
            let child = reset_mutation(child, config.num_colors, &mut rng);
            debug_assert!(
                child.len() == graph.node_count() && child.is_within(config.num_colors),
                "offspring must color every node with a color in [0, {})",
                config.num_colors
            );
            let score = conflicts(graph, &child);
            offspring.push(ScoredColoring {
                coloring: child,
                score,
            });
        }

        // Stable: ties keep breeding order.
        offspring.sort_by_key(|s| s.score);
        let best_score = offspring[0].score;

        population = offspring
            .into_iter()
            .take(config.population_size)
            .map(|s| s.coloring)
            .collect();
        iterations = iteration + 1;

        if iteration % config.progress_interval == 0 {
            observer.on_progress(iteration, best_score);
        }
        if best_score == 0 {
            debug!(iteration, "proper coloring found");
            break;
        }
    }

    let coloring = population.swap_remove(0);
    // Score is recomputed from the graph, not taken from the last sort.
    let score = conflicts(graph, &coloring);

    info!(score, iterations, cancelled, "coloring search finished");

    Solution {
        coloring,
        score,
        iterations,
        cancelled,
    }
}

// ============================================================================
// Tests
// ============================================================================
