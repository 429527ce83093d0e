//! Training loop implementation.

use super::{Loss, TrainingConfig};
use crate::errors::NetworkError;
use crate::network::Network;

/// Loss measurements collected while training.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingResult {
    /// Mean loss over all samples, measured before training and then every
    /// `report_every` steps.
    pub loss_history: Vec<f64>,
    /// Number of `Network::train` calls performed.
    pub steps: usize,
}

impl TrainingResult {
    /// Loss at the last measurement.
    pub fn final_loss(&self) -> Option<f64> {
        self.loss_history.last().copied()
    }
}

/// Mean loss of `network` over every `(input, target)` pair.
pub fn evaluate(
    network: &Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
    loss: Loss,
) -> Result<f64, NetworkError> {
    check_samples(inputs, targets)?;
    let mut total = 0.0;
    for (input, target) in inputs.iter().zip(targets) {
        let outputs = network.feedforward(input)?;
        total += loss.compute(&outputs, target)?;
    }
    Ok(total / inputs.len() as f64)
}

/// Trains `network` in place, cycling through the samples in order.
///
/// Step `s` trains on sample `s % inputs.len()`.
pub fn train(
    network: &mut Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
    config: &TrainingConfig,
) -> Result<TrainingResult, NetworkError> {
    check_samples(inputs, targets)?;

    let mut loss_history = Vec::new();
    loss_history.push(evaluate(network, inputs, targets, config.loss)?);

    for step in 0..config.steps {
        let sample = step % inputs.len();
        network.train(&inputs[sample], &targets[sample])?;

        let done = step + 1;
        if config.report_every > 0 && done % config.report_every == 0 {
            let loss_value = evaluate(network, inputs, targets, config.loss)?;
            loss_history.push(loss_value);

            if config.verbose {
                log::info!("Step {}/{}: loss = {:.6}", done, config.steps, loss_value);
            }
        }
    }

    Ok(TrainingResult {
        loss_history,
        steps: config.steps,
    })
}

fn check_samples(inputs: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<(), NetworkError> {
    if inputs.is_empty() {
        return Err(NetworkError::TrainingError {
            message: "no training samples".to_string(),
        });
    }
    if inputs.len() != targets.len() {
        return Err(NetworkError::TrainingError {
            message: format!(
                "{} inputs but {} targets",
                inputs.len(),
                targets.len()
            ),
        });
    }
    Ok(())
}
