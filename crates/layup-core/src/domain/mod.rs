// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Layup.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All host, prompt, and filesystem concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, host, or external calls
//! - **No external crates**: Only std library + thiserror + serde
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Rich domain model**: Behavior lives in entities, not services
//!
// Public API - what the world sees
pub mod error;
pub mod options;
pub mod outcome;
pub mod plan;
pub mod source;
pub mod value_objects;

// Re-exports for convenience
pub use error::DomainError;
pub use options::{DEFAULT_PROMPT, ImportOptions};
pub use outcome::ImportOutcome;
pub use plan::{ImportPlan, PlanEntry};
pub use source::{PDF_SUFFIX, SourceFile, label_is_lossy, layer_label, matches_pdf_suffix};
pub use value_objects::{FileOrder, FlattenMode, MenuCommand, SuffixMatch};
