//! Options for one import run.

use std::path::PathBuf;

use crate::domain::error::DomainError;
use crate::domain::value_objects::{FileOrder, FlattenMode, SuffixMatch};

/// The prompt shown when asking for a source directory.
pub const DEFAULT_PROMPT: &str = "Select folder containing PDF files to merge";

/// Everything the import use case needs to know about one run.
///
/// Defaults reproduce the classic behavior: flatten each embedded file,
/// match the `.pdf` suffix case-sensitively, keep the scanner's discovery
/// order, and fit the artboard with no margin.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOptions {
    pub flatten: FlattenMode,
    pub suffix_match: SuffixMatch,
    pub order: FileOrder,
    /// Margin in points for the final artboard fit.
    pub artboard_margin: f64,
    /// Prompt text for the folder picker.
    pub prompt: String,
    /// Directory the folder picker starts from.
    pub fallback_dir: PathBuf,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            flatten: FlattenMode::default(),
            suffix_match: SuffixMatch::default(),
            order: FileOrder::default(),
            artboard_margin: 0.0,
            prompt: DEFAULT_PROMPT.to_owned(),
            fallback_dir: PathBuf::from("~"),
        }
    }
}

impl ImportOptions {
    pub fn with_flatten(mut self, flatten: FlattenMode) -> Self {
        self.flatten = flatten;
        self
    }

    pub fn with_suffix_match(mut self, suffix_match: SuffixMatch) -> Self {
        self.suffix_match = suffix_match;
        self
    }

    pub fn with_order(mut self, order: FileOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_artboard_margin(mut self, margin: f64) -> Self {
        self.artboard_margin = margin;
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_fallback_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fallback_dir = dir.into();
        self
    }

    /// Check the run parameters before any host work starts.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.artboard_margin.is_finite() {
            return Err(DomainError::InvalidMargin {
                value: self.artboard_margin,
                reason: "margin must be a finite number",
            });
        }
        if self.artboard_margin < 0.0 {
            return Err(DomainError::InvalidMargin {
                value: self.artboard_margin,
                reason: "margin must not be negative",
            });
        }
        Ok(())
    }
}
