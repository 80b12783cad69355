//! Infrastructure adapters for Layup.
//!
//! This crate implements the ports defined in `layup-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod host;
pub mod picker;
pub mod scanner;

// Re-export commonly used adapters
pub use host::{MemoryHost, ScriptHost};
pub use picker::PresetPicker;
pub use scanner::{LocalScanner, MemoryScanner};
