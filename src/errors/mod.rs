//! Error types for matrix and network operations.

mod network_error;

pub use network_error::{NetworkError, Shape};
