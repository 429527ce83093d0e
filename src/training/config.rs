//! Training configuration.

use super::Loss;

/// Configuration for the training driver.
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// Number of single-sample training steps.
    pub steps: usize,
    /// Steps between loss measurements.
    pub report_every: usize,
    /// Loss function used for reporting.
    pub loss: Loss,
    /// Whether to log progress at info level.
    pub verbose: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            steps: 10_000,
            report_every: 100,
            loss: Loss::Mse,
            verbose: true,
        }
    }
}

impl TrainingConfig {
    /// Creates a new TrainingConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of steps.
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Sets the reporting interval. Zero disables intermediate reports.
    pub fn report_every(mut self, report_every: usize) -> Self {
        self.report_every = report_every;
        self
    }

    /// Sets the loss function.
    pub fn loss(mut self, loss: Loss) -> Self {
        self.loss = loss;
        self
    }

    /// Sets whether to log progress.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
