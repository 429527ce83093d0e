//! Activation function for network layers.

use serde::{Deserialize, Serialize};

/// Supported activation functions.
///
/// Only the logistic sigmoid is available; its derivative is hand-coded in
/// terms of the activated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Activation {
    /// Sigmoid: f(x) = 1 / (1 + exp(-x))
    #[default]
    Sigmoid,
}

impl Activation {
    /// Applies the activation to a pre-activation value.
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
        }
    }

    /// Derivative expressed through the activated output `y = apply(x)`.
    ///
    /// `y` must already be activated. Passing a raw pre-activation sum gives
    /// a wrong gradient.
    pub fn derivative_from_output(&self, y: f64) -> f64 {
        match self {
            Activation::Sigmoid => y * (1.0 - y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sigmoid_values() {
        let act = Activation::Sigmoid;
        assert_relative_eq!(act.apply(0.0), 0.5);
        assert_relative_eq!(act.apply(2.0), 0.8807970779778823, epsilon = 1e-12);
        assert_relative_eq!(act.apply(-2.0), 0.11920292202211755, epsilon = 1e-12);
    }

    #[test]
    fn test_sigmoid_open_interval() {
        let act = Activation::Sigmoid;
        for x in [-30.0, -1.0, 0.0, 1.0, 30.0] {
            let y = act.apply(x);
            assert!(y > 0.0 && y < 1.0, "sigmoid({}) = {}", x, y);
        }
    }

    #[test]
    fn test_derivative_from_output_matches_numeric_derivative() {
        let act = Activation::Sigmoid;
        let h = 1e-6;
        for x in [-3.0, -0.5, 0.0, 0.7, 2.5] {
            let numeric = (act.apply(x + h) - act.apply(x - h)) / (2.0 * h);
            assert_relative_eq!(
                act.derivative_from_output(act.apply(x)),
                numeric,
                epsilon = 1e-8
            );
        }
    }

    #[test]
    fn test_activation_serde_name() {
        let json = serde_json::to_string(&Activation::Sigmoid).unwrap();
        assert_eq!(json, "\"SIGMOID\"");
    }
}
