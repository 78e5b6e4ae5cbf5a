//! Input/output operations and error handling

/// Command-line interface and text rendering
pub mod cli;
/// Engine constants and runtime configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Episode progress display
pub mod progress;
