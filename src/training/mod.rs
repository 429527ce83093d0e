//! Training utilities for networks.
//!
//! This module provides a thin driver around [`Network::train`]:
//! - Mean squared error loss
//! - Training configuration
//! - A loop that cycles samples in order and records loss history
//!
//! [`Network::train`]: crate::network::Network::train

mod config;
mod loss;
mod trainer;

pub use config::TrainingConfig;
pub use loss::Loss;
pub use trainer::{TrainingResult, evaluate, train};
