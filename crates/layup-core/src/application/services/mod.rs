//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "import a folder of PDFs".

pub mod import_service;

pub use import_service::{ImportService, NO_FILES_ALERT};
