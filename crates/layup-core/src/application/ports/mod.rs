//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `layup-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `DrawingHost`: The document/layer/artwork surface of the drawing app
//!   - `FolderPicker`: Source directory selection
//!   - `SourceScanner`: Directory enumeration
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    DocumentId, DrawingHost, FolderPicker, LayerId, PlacedItemId, SourceScanner,
};

#[cfg(test)]
pub use output::{MockDrawingHost, MockFolderPicker, MockSourceScanner};
