//! The import plan: which files become which layers.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::domain::options::ImportOptions;
use crate::domain::source::SourceFile;
use crate::domain::value_objects::FileOrder;

/// One planned layer: a candidate file and the label its layer will get.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanEntry {
    pub file: SourceFile,
    pub layer_label: String,
}

/// The full plan for a run, computed before any host work touches a layer.
///
/// Building a plan applies the suffix filter and the ordering policy; it
/// performs no I/O and never talks to a host, so `plan`/`--dry-run` can show
/// exactly what an import would do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportPlan {
    source_dir: PathBuf,
    entries: Vec<PlanEntry>,
}

impl ImportPlan {
    pub fn build(
        source_dir: impl Into<PathBuf>,
        listing: Vec<SourceFile>,
        options: &ImportOptions,
    ) -> Self {
        let mut entries: Vec<PlanEntry> = listing
            .into_iter()
            .filter(|file| file.is_candidate(options.suffix_match))
            .map(|file| {
                let layer_label = file.layer_label().to_owned();
                PlanEntry { file, layer_label }
            })
            .collect();
        if options.order == FileOrder::ByName {
            entries.sort_by(|a, b| a.file.file_name().cmp(b.file.file_name()));
        }
        Self {
            source_dir: source_dir.into(),
            entries,
        }
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
