//! Network configuration.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::Network;
use crate::errors::NetworkError;
use crate::layers::{Activation, DenseConfig};

/// Learning rate used when none is configured.
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// Which weight matrix carries the error back to the previous layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ErrorPropagation {
    /// Transpose the weights after this step's update has been applied.
    #[default]
    PostUpdate,
    /// Transpose the weights as they were before this step's update.
    PreUpdate,
}

/// Hidden layer sizes, built from a single size or a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HiddenLayers(pub Vec<usize>);

impl From<usize> for HiddenLayers {
    fn from(size: usize) -> Self {
        HiddenLayers(vec![size])
    }
}

impl From<Vec<usize>> for HiddenLayers {
    fn from(sizes: Vec<usize>) -> Self {
        HiddenLayers(sizes)
    }
}

impl From<&[usize]> for HiddenLayers {
    fn from(sizes: &[usize]) -> Self {
        HiddenLayers(sizes.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for HiddenLayers {
    fn from(sizes: [usize; N]) -> Self {
        HiddenLayers(sizes.to_vec())
    }
}

/// Configuration for building a Network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Number of input features.
    pub num_inputs: usize,
    /// Sizes of the hidden layers, in order.
    pub hidden: HiddenLayers,
    /// Number of outputs.
    pub num_outputs: usize,
    /// Step size applied to each gradient.
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default)]
    pub activation: Activation,
    #[serde(default)]
    pub error_propagation: ErrorPropagation,
    /// Seed for parameter initialization; entropy is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_learning_rate() -> f64 {
    DEFAULT_LEARNING_RATE
}

/// Zero and NaN fall back to [`DEFAULT_LEARNING_RATE`]; anything else is kept.
pub(crate) fn resolve_learning_rate(lr: f64) -> f64 {
    if lr == 0.0 || lr.is_nan() {
        DEFAULT_LEARNING_RATE
    } else {
        lr
    }
}

impl NetworkConfig {
    /// Creates a new NetworkConfig with default training settings.
    pub fn new(num_inputs: usize, hidden: impl Into<HiddenLayers>, num_outputs: usize) -> Self {
        Self {
            num_inputs,
            hidden: hidden.into(),
            num_outputs,
            learning_rate: DEFAULT_LEARNING_RATE,
            activation: Activation::default(),
            error_propagation: ErrorPropagation::default(),
            seed: None,
        }
    }

    /// Sets the learning rate. `0.0` selects the default.
    pub fn learning_rate(mut self, lr: f64) -> Self {
        self.learning_rate = resolve_learning_rate(lr);
        self
    }

    /// Sets how the error is propagated between layers.
    pub fn error_propagation(mut self, propagation: ErrorPropagation) -> Self {
        self.error_propagation = propagation;
        self
    }

    /// Sets the initialization seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, NetworkError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, NetworkError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the layer layout.
    pub fn validate(&self) -> Result<(), NetworkError> {
        if self.num_inputs == 0 {
            return Err(NetworkError::invalid_config("network must have at least 1 input"));
        }
        if self.num_outputs == 0 {
            return Err(NetworkError::invalid_config("network must have at least 1 output"));
        }
        if self.hidden.0.is_empty() {
            return Err(NetworkError::invalid_config(
                "network must have at least 1 hidden layer",
            ));
        }
        if let Some(index) = self.hidden.0.iter().position(|&size| size < 1) {
            return Err(NetworkError::invalid_config(format!(
                "cannot have less than 1 node in hidden layer {}",
                index
            )));
        }
        Ok(())
    }

    /// Returns the per-layer shapes `inputs -> hidden... -> outputs`.
    pub fn layer_configs(&self) -> Vec<DenseConfig> {
        let sizes: Vec<usize> = std::iter::once(self.num_inputs)
            .chain(self.hidden.0.iter().copied())
            .chain(std::iter::once(self.num_outputs))
            .collect();
        sizes
            .windows(2)
            .map(|pair| DenseConfig::new(pair[0], pair[1]))
            .collect()
    }

    /// Builds the Network, seeding from `seed` when set.
    pub fn build(&self) -> Result<Network, NetworkError> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.build_with_rng(&mut rng)
    }

    /// Builds the Network drawing initial parameters from `rng`.
    pub fn build_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Network, NetworkError> {
        self.validate()?;

        let layers = self
            .layer_configs()
            .iter()
            .map(|config| config.init(&mut *rng))
            .collect();

        Ok(Network::with_layers(self.clone(), layers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NetworkConfig::new(2, 4, 1);
        assert_eq!(config.hidden, HiddenLayers(vec![4]));
        assert!((config.learning_rate - 0.1).abs() < 1e-12);
        assert_eq!(config.error_propagation, ErrorPropagation::PostUpdate);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_config_builder() {
        let config = NetworkConfig::new(3, [5, 2], 2)
            .learning_rate(0.5)
            .error_propagation(ErrorPropagation::PreUpdate)
            .seed(9);

        assert_eq!(config.hidden.0, vec![5, 2]);
        assert!((config.learning_rate - 0.5).abs() < 1e-12);
        assert_eq!(config.error_propagation, ErrorPropagation::PreUpdate);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_layer_configs_chain() {
        let config = NetworkConfig::new(3, vec![5, 2], 4);
        let layers = config.layer_configs();

        assert_eq!(
            layers,
            vec![
                DenseConfig::new(3, 5),
                DenseConfig::new(5, 2),
                DenseConfig::new(2, 4),
            ]
        );
    }

    #[test]
    fn test_validate_rejects_zero_hidden() {
        let err = NetworkConfig::new(2, [3, 0], 1).validate().unwrap_err();
        assert!(matches!(err, NetworkError::InvalidLayerConfig { .. }));
        assert!(err.to_string().contains("hidden layer 1"));
    }

    #[test]
    fn test_validate_rejects_empty_layout() {
        assert!(NetworkConfig::new(2, Vec::<usize>::new(), 1).validate().is_err());
        assert!(NetworkConfig::new(0, 2, 1).validate().is_err());
        assert!(NetworkConfig::new(2, 2, 0).validate().is_err());
    }

    #[test]
    fn test_zero_learning_rate_selects_default() {
        let config = NetworkConfig::new(2, 2, 1).learning_rate(0.0);
        assert_eq!(config.learning_rate, DEFAULT_LEARNING_RATE);

        let network = config.seed(1).build().unwrap();
        assert_eq!(network.learning_rate(), 0.1);
    }

    #[test]
    fn test_negative_learning_rate_is_kept() {
        let network = NetworkConfig::new(2, 2, 1)
            .learning_rate(-0.1)
            .seed(1)
            .build()
            .unwrap();
        assert_eq!(network.learning_rate(), -0.1);
    }

    #[test]
    fn test_zero_learning_rate_from_json_selects_default() {
        let config = NetworkConfig::from_json(
            r#"{"num_inputs": 2, "hidden": [4], "num_outputs": 1, "learning_rate": 0.0}"#,
        )
        .unwrap();
        let network = config.build().unwrap();
        assert_eq!(network.learning_rate(), DEFAULT_LEARNING_RATE);
    }

    #[test]
    fn test_json_round_trip_and_defaults() {
        let config = NetworkConfig::new(2, [4, 3], 1).seed(11);
        let json = config.to_json().unwrap();
        assert!(json.contains("\"POSTUPDATE\""));
        assert_eq!(NetworkConfig::from_json(&json).unwrap(), config);

        let minimal =
            NetworkConfig::from_json(r#"{"num_inputs": 2, "hidden": [4], "num_outputs": 1}"#)
                .unwrap();
        assert_eq!(minimal, NetworkConfig::new(2, 4, 1));
    }

    #[test]
    fn test_from_json_invalid() {
        let err = NetworkConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, NetworkError::SerializationError(_)));
    }
}
