//! Terminal states of an import run.

use std::fmt;

/// How a run ended. All three are successes, not errors.
///
/// Host or filesystem failures surface as `Err(LayupError)` from the
/// service instead; an `ImportOutcome` is only produced once the run has
/// reached one of its defined endings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Every candidate was imported; the document holds `layers` layers.
    Completed { layers: usize },
    /// The directory held no matching files; the document was closed again.
    NoFilesFound,
    /// The user dismissed the folder prompt before any document existed.
    Cancelled,
}

impl ImportOutcome {
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    /// Layer count for completed runs, `None` otherwise.
    pub const fn layer_count(&self) -> Option<usize> {
        match self {
            Self::Completed { layers } => Some(*layers),
            _ => None,
        }
    }
}

impl fmt::Display for ImportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed { layers } => write!(f, "completed ({layers} layers)"),
            Self::NoFilesFound => f.write_str("no files found"),
            Self::Cancelled => f.write_str("cancelled"),
        }
    }
}
