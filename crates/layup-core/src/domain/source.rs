//! Source files and the candidate-selection rules.
//!
//! Everything here is pure string/path logic: which directory entries count
//! as import candidates, and what the layer created for each one is called.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;
use crate::domain::value_objects::SuffixMatch;

/// The suffix a candidate file name must carry.
pub const PDF_SUFFIX: &str = ".pdf";

/// One file discovered in the source directory.
///
/// Construction validates that the path ends in a plain UTF-8 file name;
/// scanners skip entries that do not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    path: PathBuf,
    file_name: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_owned)
            .ok_or_else(|| DomainError::UnusableFileName {
                path: path.display().to_string(),
            })?;
        Ok(Self { path, file_name })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Whether this file passes the `.pdf` suffix filter.
    pub fn is_candidate(&self, mode: SuffixMatch) -> bool {
        matches_pdf_suffix(&self.file_name, mode)
    }

    /// The name of the layer this file will be imported onto.
    pub fn layer_label(&self) -> &str {
        layer_label(&self.file_name)
    }
}

/// Suffix filter for candidate file names.
///
/// A name matches only when at least one character precedes the suffix, so a
/// bare `.pdf` is never a candidate. With [`SuffixMatch::Strict`] the suffix
/// must be lowercase; [`SuffixMatch::AnyCase`] compares it case-insensitively.
pub fn matches_pdf_suffix(name: &str, mode: SuffixMatch) -> bool {
    if name.len() <= PDF_SUFFIX.len() {
        return false;
    }
    match mode {
        SuffixMatch::Strict => name.ends_with(PDF_SUFFIX),
        SuffixMatch::AnyCase => name
            .get(name.len() - PDF_SUFFIX.len()..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(PDF_SUFFIX)),
    }
}

/// Layer label for a file name: everything before the first `.`.
///
/// `map.pdf` becomes `map`, but `map.v2.pdf` becomes `map` as well, and
/// `..pdf` becomes the empty string. Truncating at the first dot rather than
/// the last is the classic naming rule and is kept as-is; callers that care
/// can detect the lossy cases with [`label_is_lossy`]. A name without any dot
/// is returned unchanged (candidates always carry `.pdf`, so the import flow
/// never hits that arm).
pub fn layer_label(name: &str) -> &str {
    match name.find('.') {
        Some(dot) => &name[..dot],
        None => name,
    }
}

/// Whether [`layer_label`] drops more than the `.pdf` suffix from `name`.
///
/// True for multi-dot names such as `map.v2.pdf` (the label `map` loses
/// `.v2`) and for names starting with a dot. Case differences in the suffix
/// alone do not count as lossy.
pub fn label_is_lossy(name: &str) -> bool {
    let rest = &name[layer_label(name).len()..];
    !rest.is_empty() && !rest.eq_ignore_ascii_case(PDF_SUFFIX)
}
