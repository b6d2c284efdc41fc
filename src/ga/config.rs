//! Solver configuration.
//!
//! [`SolverConfig`] holds all parameters that control the evolutionary loop.

/// Configuration for the coloring solver.
///
/// # Defaults
///
/// ```
/// use u_coloring::ga::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert_eq!(config.population_size, 200);
/// assert_eq!(config.max_iterations, 100_000);
/// assert_eq!(config.progress_interval, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_coloring::ga::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_num_colors(7)
///     .with_population_size(50)
///     .with_max_iterations(1_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Number of available colors; genes lie in `[0, num_colors)`.
    pub num_colors: usize,

    /// Number of colorings kept between generations.
    ///
    /// Each generation breeds twice this many offspring and keeps the best
    /// `population_size` of them. Parents are not carried over.
    pub population_size: usize,

    /// Maximum number of generations before termination.
    ///
    /// The loop stops earlier as soon as a generation's best score is 0.
    pub max_iterations: usize,

    /// Report progress every this many generations (starting at 0).
    pub progress_interval: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a seed from entropy; the drawn seed is logged.
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            num_colors: 3,
            population_size: 200,
            max_iterations: 100_000,
            progress_interval: 100,
            seed: None,
        }
    }
}

impl SolverConfig {
    /// Sets the number of colors.
    pub fn with_num_colors(mut self, k: usize) -> Self {
        self.num_colors = k;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the progress reporting interval.
    pub fn with_progress_interval(mut self, every: usize) -> Self {
        self.progress_interval = every;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of offspring bred per generation.
    pub fn offspring_count(&self) -> usize {
        2 * self.population_size
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_colors == 0 {
            return Err("num_colors must be at least 1".into());
        }
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if self.progress_interval == 0 {
            return Err("progress_interval must be at least 1".into());
        }
        Ok(())
    }
}
