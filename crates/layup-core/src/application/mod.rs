//! Application layer for Layup.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ImportService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ImportService, NO_FILES_ALERT};

// Re-export port traits (for adapter implementation)
pub use ports::{DocumentId, DrawingHost, FolderPicker, LayerId, PlacedItemId, SourceScanner};

pub use error::ApplicationError;
