//! Network - a stack of sigmoid dense layers trained by backpropagation.
//!
//! Layer sizes run `inputs -> hidden[0] -> ... -> hidden[k-1] -> outputs`.
//! Weights and biases are initialized once and then only mutated in place
//! by [`Network::train`]; [`Network::feedforward`] never touches them.

mod config;
mod trace;

pub use config::{DEFAULT_LEARNING_RATE, ErrorPropagation, HiddenLayers, NetworkConfig};
use trace::Trace;

use crate::errors::NetworkError;
use crate::layers::Dense;
use crate::matrix::Matrix;

/// A dense feed-forward network.
///
/// A network is not synchronized: concurrent `train` calls on one instance
/// must be serialized by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    config: NetworkConfig,
    layers: Vec<Dense>,
}

impl Network {
    /// Creates a new configuration builder.
    pub fn new_config(
        num_inputs: usize,
        hidden: impl Into<HiddenLayers>,
        num_outputs: usize,
    ) -> NetworkConfig {
        NetworkConfig::new(num_inputs, hidden, num_outputs)
    }

    pub(crate) fn with_layers(mut config: NetworkConfig, layers: Vec<Dense>) -> Self {
        config.learning_rate = config::resolve_learning_rate(config.learning_rate);
        log::debug!(
            "Built network {} -> {:?} -> {} ({} layers, learning rate {})",
            config.num_inputs,
            config.hidden.0,
            config.num_outputs,
            layers.len(),
            config.learning_rate
        );
        Self { config, layers }
    }

    /// Creates a network from explicit weights and biases.
    ///
    /// `weights[i]` and `biases[i]` must have the shapes the configuration
    /// implies for layer `i`.
    pub fn from_parameters(
        config: NetworkConfig,
        weights: Vec<Matrix>,
        biases: Vec<Matrix>,
    ) -> Result<Self, NetworkError> {
        config.validate()?;

        let expected = config.layer_configs();
        if weights.len() != expected.len() || biases.len() != expected.len() {
            return Err(NetworkError::invalid_config(format!(
                "expected {} weight and bias matrices, got {} and {}",
                expected.len(),
                weights.len(),
                biases.len()
            )));
        }

        let mut layers = Vec::with_capacity(expected.len());
        for ((shape, weights), bias) in expected.iter().zip(weights).zip(biases) {
            let wanted = (shape.output_size, shape.input_size);
            if weights.shape() != wanted {
                return Err(NetworkError::mismatch("weights", wanted, weights.shape()));
            }
            layers.push(Dense::from_parameters(weights, bias)?);
        }

        Ok(Self::with_layers(config, layers))
    }

    /// Evaluates the network on one input sample.
    ///
    /// The input length must equal `num_inputs()`. Every output lies in `(0, 1)`.
    pub fn feedforward(&self, input: &[f64]) -> Result<Vec<f64>, NetworkError> {
        let mut current = Matrix::from_slice(input);
        for layer in &self.layers {
            current = layer.forward(&current, self.config.activation)?;
        }
        Ok(current.to_vec())
    }

    /// Runs one backpropagation step on a single `(input, target)` pair and
    /// updates every layer's weights and bias in place.
    ///
    /// Shape errors are detected before any parameter changes.
    pub fn train(&mut self, input: &[f64], target: &[f64]) -> Result<(), NetworkError> {
        let activation = self.config.activation;
        let learning_rate = self.config.learning_rate;

        let mut trace = Trace::new(Matrix::from_slice(input));
        for layer in &self.layers {
            let product = Matrix::product(&layer.weights, trace.last())?;
            let output = trace.record(product);
            output
                .add_matrix(&layer.bias)?
                .map_in_place(|x| activation.apply(x));
        }

        let mut output_error = Matrix::subtract(&Matrix::from_slice(target), trace.last())?;
        log::trace!("Output error {:?}", output_error.as_slice());

        while let Some((index, mut gradient, previous)) = trace.pop_layer_output() {
            let layer = &mut self.layers[index];

            gradient
                .map_in_place(|y| activation.derivative_from_output(y))
                .hadamard(&output_error)?
                .scale(learning_rate);

            let delta = Matrix::product(&gradient, &previous.transpose())?;

            let pre_update = match self.config.error_propagation {
                ErrorPropagation::PreUpdate => Some(layer.weights.transpose()),
                ErrorPropagation::PostUpdate => None,
            };

            layer.weights.add_matrix(&delta)?;
            layer.bias.add_matrix(&gradient)?;

            let transposed = match pre_update {
                Some(weights) => weights,
                None => layer.weights.transpose(),
            };
            output_error = Matrix::product(&transposed, &output_error)?;
        }

        Ok(())
    }

    /// Returns the configuration the network was built from.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Returns the layers in forward order.
    pub fn layers(&self) -> &[Dense] {
        &self.layers
    }

    /// Returns the weight matrices in forward order.
    pub fn weights(&self) -> impl Iterator<Item = &Matrix> {
        self.layers.iter().map(|l| l.weights())
    }

    /// Returns the bias columns in forward order.
    pub fn biases(&self) -> impl Iterator<Item = &Matrix> {
        self.layers.iter().map(|l| l.bias())
    }

    pub fn num_inputs(&self) -> usize {
        self.config.num_inputs
    }

    pub fn num_outputs(&self) -> usize {
        self.config.num_outputs
    }

    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    pub fn learning_rate(&self) -> f64 {
        self.config.learning_rate
    }
}
