//! Progress reporting hooks.

use tracing::info;

/// Receives `(iteration, best_score)` at the configured progress interval.
///
/// Any `Fn(usize, usize)` closure is an observer.
pub trait ProgressObserver {
    fn on_progress(&self, iteration: usize, best_score: usize);
}

impl<F: Fn(usize, usize)> ProgressObserver for F {
    fn on_progress(&self, iteration: usize, best_score: usize) {
        self(iteration, best_score)
    }
}

/// Default observer: one `tracing` info event per report.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressObserver for LogProgress {
    fn on_progress(&self, iteration: usize, best_score: usize) {
        info!(iteration, score = best_score, "generation progress");
    }
}

/// Observer that ignores every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl ProgressObserver for Silent {
    fn on_progress(&self, _iteration: usize, _best_score: usize) {}
}
