//! # ffnet
//!
//! A small dense feed-forward neural network trained by backpropagation.
//!
//! The crate is built from two pieces:
//!
//! - **[`Matrix`]**: a dense 2-D `f64` container with element-wise arithmetic,
//!   matrix product, transpose and in-place mapping.
//! - **[`Network`]**: a chain of sigmoid dense layers with single-sample
//!   `feedforward` and `train` (one gradient-descent step).
//!
//! Initial parameters come from an explicitly seeded or injected random
//! generator, so training runs are reproducible.
//!
//! ## Example
//!
//! ```
//! use ffnet::prelude::*;
//!
//! let mut network = NetworkConfig::new(2, 4, 1)
//!     .seed(7)
//!     .build()
//!     .expect("Failed to build network");
//!
//! network.train(&[1.0, 0.0], &[1.0]).unwrap();
//!
//! let output = network.feedforward(&[1.0, 0.0]).unwrap();
//! assert_eq!(output.len(), 1);
//! assert!(output[0] > 0.0 && output[0] < 1.0);
//! ```

pub mod errors;
pub mod layers;
pub mod matrix;
pub mod network;
pub mod training;

// Re-exports for convenience
pub use errors::NetworkError;
pub use layers::activation::Activation;
pub use matrix::Matrix;
pub use network::{ErrorPropagation, Network, NetworkConfig};
pub use training::{Loss, TrainingConfig};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::errors::NetworkError;
    pub use crate::layers::activation::Activation;
    pub use crate::matrix::Matrix;
    pub use crate::network::{ErrorPropagation, HiddenLayers, Network, NetworkConfig};
    pub use crate::training::{Loss, TrainingConfig, train};
}
