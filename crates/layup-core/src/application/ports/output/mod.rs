//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `layup-adapters` crate provides implementations.

use crate::domain::{MenuCommand, SourceFile};
use crate::error::LayupResult;
use std::fmt;
use std::path::{Path, PathBuf};

// ── Host handles ─────────────────────────────────────────────────────────────

/// Opaque handle to a document minted by a [`DrawingHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(u32);

impl DocumentId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc-{}", self.0)
    }
}

/// Opaque handle to a layer within a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(u32);

impl LayerId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer-{}", self.0)
    }
}

/// Opaque handle to one placed piece of art.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacedItemId(u32);

impl PlacedItemId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlacedItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

// ── Ports ────────────────────────────────────────────────────────────────────

/// Port for asking the user where the source files live.
///
/// Implemented by:
/// - `layup_adapters::picker::PresetPicker` (directory known up front)
/// - the CLI's interactive prompt (production)
///
/// Returning `Ok(None)` means the user dismissed the prompt; that is a
/// normal outcome, not an error.
#[cfg_attr(test, mockall::automock)]
pub trait FolderPicker: Send + Sync {
    /// Ask for a directory, starting from `fallback`.
    fn pick_directory(&self, prompt: &str, fallback: &Path) -> LayupResult<Option<PathBuf>>;
}

/// Port for enumerating the files of one directory.
///
/// Implemented by:
/// - `layup_adapters::scanner::LocalScanner` (production)
/// - `layup_adapters::scanner::MemoryScanner` (testing)
///
/// ## Design Notes
///
/// - Immediate children only, no recursion
/// - No filtering: the suffix rules are domain logic, not scanner logic
/// - Order is whatever the backing store yields; callers sort if they care
#[cfg_attr(test, mockall::automock)]
pub trait SourceScanner: Send + Sync {
    /// List the plain files directly inside `dir`.
    fn list_files(&self, dir: &Path) -> LayupResult<Vec<SourceFile>>;
}

/// Port for the drawing application that receives the imported layers.
///
/// Implemented by:
/// - `layup_adapters::host::ScriptHost` (renders a host driver script)
/// - `layup_adapters::host::MemoryHost` (testing and dry runs)
///
/// ## Design Notes
///
/// - Handles are opaque; only the adapter knows what they index
/// - A fresh document starts with exactly one layer, `initial_layer`
/// - Menu commands act on the current selection of the active layer, so
///   callers must `set_active_layer` before `run_menu_command`
#[cfg_attr(test, mockall::automock)]
pub trait DrawingHost: Send + Sync {
    /// Open a new, empty document.
    fn create_document(&self) -> LayupResult<DocumentId>;

    /// Close a document, discarding its contents.
    fn close_document(&self, doc: DocumentId) -> LayupResult<()>;

    /// The layer every fresh document starts with.
    fn initial_layer(&self, doc: DocumentId) -> LayupResult<LayerId>;

    /// Append a new layer to the document.
    fn add_layer(&self, doc: DocumentId) -> LayupResult<LayerId>;

    /// Rename a layer.
    fn rename_layer(&self, doc: DocumentId, layer: LayerId, name: &str) -> LayupResult<()>;

    /// Place the file at `path` onto `layer` as linked art, selected.
    fn place_file(&self, doc: DocumentId, layer: LayerId, path: &Path)
    -> LayupResult<PlacedItemId>;

    /// Embed previously placed art, severing the link to its source file.
    fn embed(&self, doc: DocumentId, item: PlacedItemId) -> LayupResult<()>;

    /// Make `layer` the active layer.
    fn set_active_layer(&self, doc: DocumentId, layer: LayerId) -> LayupResult<()>;

    /// Dispatch a menu command against the active layer's selection.
    fn run_menu_command(&self, doc: DocumentId, command: MenuCommand) -> LayupResult<()>;

    /// Resize the artboard to fit all placed art, plus `margin` points.
    fn fit_artboard_to_art(&self, doc: DocumentId, margin: f64) -> LayupResult<()>;

    /// Show a message to the user.
    fn alert(&self, message: &str) -> LayupResult<()>;
}
