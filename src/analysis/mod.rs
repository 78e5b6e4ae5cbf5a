//! Comparative instrumentation across search strategies

/// Multi-strategy comparison on a shared instance
pub mod compare;

pub use compare::{AlgorithmReport, compare_algorithms};
