//! Layup Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Layup
//! batch-import tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           layup-cli (CLI)               │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ImportService)               │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)           │
//! │  (Driven: DrawingHost, Picker, Scanner) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      layup-adapters (Infrastructure)      │
//! │   (MemoryHost, ScriptHost, LocalScanner) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)         │
//! │   (SourceFile, ImportPlan, ImportOptions) │
//! │         No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use layup_core::{
//!     application::ImportService,
//!     domain::{ImportOptions, ImportOutcome},
//! };
//! # fn wire(host: Box<dyn layup_core::application::ports::DrawingHost>,
//! #         picker: Box<dyn layup_core::application::ports::FolderPicker>,
//! #         scanner: Box<dyn layup_core::application::ports::SourceScanner>) {
//! // 1. Describe the run
//! let options = ImportOptions::default();
//!
//! // 2. Use application service (with injected adapters)
//! let service = ImportService::new(host, picker, scanner);
//! match service.run(&options).unwrap() {
//!     ImportOutcome::Completed { layers } => println!("{layers} layers"),
//!     ImportOutcome::NoFilesFound => println!("nothing to import"),
//!     ImportOutcome::Cancelled => println!("cancelled"),
//! }
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ImportService,
        ports::{DocumentId, DrawingHost, FolderPicker, LayerId, PlacedItemId, SourceScanner},
    };
    pub use crate::domain::{
        FileOrder, FlattenMode, ImportOptions, ImportOutcome, ImportPlan, MenuCommand, PlanEntry,
        SourceFile, SuffixMatch,
    };
    pub use crate::error::{LayupError, LayupResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
