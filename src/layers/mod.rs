//! Neural network layer implementations.
//!
//! This module contains the dense (fully connected) layer and the
//! activation function it applies.

pub mod activation;
pub mod dense;

pub use activation::Activation;
pub use dense::{Dense, DenseConfig};
