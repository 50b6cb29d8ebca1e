/// Command-line interface and batch sheet processing
pub mod cli;
/// Static tables and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// Text rendering of combination tables
pub mod format;
/// Sheet rendering and unpacking
pub mod image;
/// Batch progress display
pub mod progress;
