//! Loss functions for reporting training progress.

use crate::errors::NetworkError;

/// Supported loss functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Loss {
    /// Mean Squared Error loss.
    #[default]
    Mse,
}

impl Loss {
    /// Computes the loss between one output vector and its target.
    pub fn compute(&self, outputs: &[f64], targets: &[f64]) -> Result<f64, NetworkError> {
        if outputs.len() != targets.len() {
            return Err(NetworkError::mismatch(
                "loss",
                (outputs.len(), 1),
                (targets.len(), 1),
            ));
        }
        if outputs.is_empty() {
            return Ok(0.0);
        }
        match self {
            Loss::Mse => {
                let sum: f64 = outputs
                    .iter()
                    .zip(targets)
                    .map(|(o, t)| (o - t) * (o - t))
                    .sum();
                Ok(sum / outputs.len() as f64)
            }
        }
    }
}
