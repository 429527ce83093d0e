//! Dense (fully connected) layer implementation.

use rand::Rng;

use crate::errors::NetworkError;
use crate::layers::Activation;
use crate::matrix::Matrix;

/// Configuration for a Dense layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DenseConfig {
    /// Number of input features.
    pub input_size: usize,
    /// Number of output features.
    pub output_size: usize,
}

impl DenseConfig {
    /// Creates a new DenseConfig.
    pub fn new(input_size: usize, output_size: usize) -> Self {
        Self {
            input_size,
            output_size,
        }
    }

    /// Initializes the layer with weights and bias drawn from `rng`.
    pub fn init<R: Rng + ?Sized>(&self, rng: &mut R) -> Dense {
        let weights = Matrix::random(self.output_size, self.input_size, rng);
        let bias = Matrix::random(self.output_size, 1, rng);
        Dense { weights, bias }
    }
}

/// A dense layer: a weight matrix and its bias column.
///
/// `weights` is `output_size x input_size` and `bias` is `output_size x 1`.
/// It performs: output = sigmoid(weights * input + bias)
#[derive(Debug, Clone, PartialEq)]
pub struct Dense {
    pub(crate) weights: Matrix,
    pub(crate) bias: Matrix,
}

impl Dense {
    /// Creates a layer from existing parameters.
    pub fn from_parameters(weights: Matrix, bias: Matrix) -> Result<Self, NetworkError> {
        if bias.cols() != 1 || bias.rows() != weights.rows() {
            return Err(NetworkError::mismatch(
                "bias",
                weights.shape(),
                bias.shape(),
            ));
        }
        Ok(Self { weights, bias })
    }

    /// Performs the forward pass for one column vector.
    pub fn forward(&self, input: &Matrix, activation: Activation) -> Result<Matrix, NetworkError> {
        let mut output = Matrix::product(&self.weights, input)?;
        output
            .add_matrix(&self.bias)?
            .map_in_place(|x| activation.apply(x));
        Ok(output)
    }

    /// Returns the input size of this layer.
    pub fn input_size(&self) -> usize {
        self.weights.cols()
    }

    /// Returns the output size of this layer.
    pub fn output_size(&self) -> usize {
        self.weights.rows()
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn bias(&self) -> &Matrix {
        &self.bias
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_dense_config_creation() {
        let config = DenseConfig::new(10, 5);

        assert_eq!(config.input_size, 10);
        assert_eq!(config.output_size, 5);
    }

    #[test]
    fn test_dense_layer_shapes() {
        let mut rng = StdRng::seed_from_u64(1);
        let dense = DenseConfig::new(4, 2).init(&mut rng);

        assert_eq!(dense.input_size(), 4);
        assert_eq!(dense.output_size(), 2);
        assert_eq!(dense.weights().shape(), (2, 4));
        assert_eq!(dense.bias().shape(), (2, 1));
    }

    #[test]
    fn test_dense_forward() {
        let weights = Matrix::from_rows(vec![vec![1.0, -1.0], vec![0.5, 0.5]]).unwrap();
        let bias = Matrix::from_slice(&[0.0, -1.0]);
        let dense = Dense::from_parameters(weights, bias).unwrap();

        let output = dense
            .forward(&Matrix::from_slice(&[2.0, 2.0]), Activation::Sigmoid)
            .unwrap();

        assert_eq!(output.shape(), (2, 1));
        assert_relative_eq!(output[(0, 0)], 0.5);
        assert_relative_eq!(output[(1, 0)], Activation::Sigmoid.apply(1.0));
    }

    #[test]
    fn test_dense_forward_wrong_input_size() {
        let mut rng = StdRng::seed_from_u64(1);
        let dense = DenseConfig::new(3, 2).init(&mut rng);

        let result = dense.forward(&Matrix::from_slice(&[1.0, 2.0]), Activation::Sigmoid);

        assert!(matches!(result, Err(NetworkError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_from_parameters_rejects_misaligned_bias() {
        let result = Dense::from_parameters(Matrix::zeros(3, 2), Matrix::zeros(2, 1));
        assert!(matches!(
            result,
            Err(NetworkError::DimensionMismatch { op: "bias", .. })
        ));
    }
}
