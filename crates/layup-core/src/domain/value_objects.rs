//! Domain value objects: FlattenMode, SuffixMatch, FileOrder, MenuCommand.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! They hold NO orchestration logic. The filtering and naming rules that
//! consume them live in `source.rs`. This file's only job is to define the
//! types and their string representations.

use serde::{Deserialize, Serialize};
use std::fmt;

// ── FlattenMode ──────────────────────────────────────────────────────────────

/// What happens to a placed file's structure after it is embedded.
///
/// The classic behavior is [`FlattenMode::Flatten`]: each embedded PDF is
/// ungrouped and its clipping mask released, leaving loose art on the layer.
/// [`FlattenMode::Preserve`] keeps the grouped, masked art intact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlattenMode {
    #[default]
    Flatten,
    Preserve,
}

impl FlattenMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Flatten => "flatten",
            Self::Preserve => "preserve",
        }
    }

    pub const fn is_flatten(self) -> bool {
        matches!(self, Self::Flatten)
    }
}

impl fmt::Display for FlattenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── SuffixMatch ──────────────────────────────────────────────────────────────

/// How candidate file names are matched against the `.pdf` suffix.
///
/// [`SuffixMatch::Strict`] accepts only a lowercase `.pdf` ending, so
/// `map.PDF` is skipped. That is the classic behavior and the default;
/// [`SuffixMatch::AnyCase`] is the opt-in fix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuffixMatch {
    #[default]
    Strict,
    AnyCase,
}

impl SuffixMatch {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::AnyCase => "any-case",
        }
    }
}

impl fmt::Display for SuffixMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── FileOrder ────────────────────────────────────────────────────────────────

/// The order in which candidate files become layers.
///
/// [`FileOrder::Discovered`] keeps whatever order the scanner produced,
/// which is filesystem-dependent. [`FileOrder::ByName`] sorts candidates
/// lexicographically by file name for reproducible runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileOrder {
    #[default]
    Discovered,
    ByName,
}

impl FileOrder {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Discovered => "discovered",
            Self::ByName => "by-name",
        }
    }
}

impl fmt::Display for FileOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── MenuCommand ──────────────────────────────────────────────────────────────

/// A host menu command, addressed by its dispatch token.
///
/// Hosts take an opaque token string for menu dispatch; this enum names the
/// two commands the import flow relies on so callers cannot misspell them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    Ungroup,
    ReleaseClippingMask,
}

impl MenuCommand {
    /// The token the host's menu dispatcher expects.
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Ungroup => "ungroup",
            Self::ReleaseClippingMask => "releaseMask",
        }
    }
}

impl fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
