//! Import Service - main application orchestrator.
//!
//! This service coordinates the entire batch-import workflow:
//! 1. Ask for a source directory
//! 2. Open a fresh document
//! 3. Scan the directory and build the plan
//! 4. Import each candidate onto its own layer
//! 5. Fit the artboard around the result
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::Path;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::ports::{DocumentId, DrawingHost, FolderPicker, LayerId, SourceScanner},
    domain::{ImportOptions, ImportOutcome, ImportPlan, MenuCommand, PlanEntry, source},
    error::{LayupError, LayupResult},
};

/// Alert text shown when the chosen directory holds no candidates.
pub const NO_FILES_ALERT: &str = "No PDF files found";

/// Main import service.
///
/// Orchestrates the pick, scan, place, and flatten workflow against an
/// injected [`DrawingHost`].
pub struct ImportService {
    host: Box<dyn DrawingHost>,
    picker: Box<dyn FolderPicker>,
    scanner: Box<dyn SourceScanner>,
}

impl ImportService {
    /// Create a new import service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use layup_core::application::{ImportService, ports::*};
    ///
    /// let service = ImportService::new(
    ///     host,    // impl DrawingHost
    ///     picker,  // impl FolderPicker
    ///     scanner, // impl SourceScanner
    /// );
    /// ```
    pub fn new(
        host: Box<dyn DrawingHost>,
        picker: Box<dyn FolderPicker>,
        scanner: Box<dyn SourceScanner>,
    ) -> Self {
        Self {
            host,
            picker,
            scanner,
        }
    }

    /// Run one batch import.
    ///
    /// This is the main use case - one folder in, one document of embedded
    /// layers out. All three [`ImportOutcome`] variants are successful
    /// endings; `Err` means a port failed mid-flight.
    #[instrument(
        skip_all,
        fields(
            session = %Uuid::new_v4(),
            flatten = %options.flatten,
            order = %options.order
        )
    )]
    pub fn run(&self, options: &ImportOptions) -> LayupResult<ImportOutcome> {
        // 1. Validate run parameters
        options.validate().map_err(LayupError::Domain)?;

        // 2. Ask for the source directory; dismissing the prompt ends the run
        let Some(dir) = self
            .picker
            .pick_directory(&options.prompt, &options.fallback_dir)?
        else {
            info!("Folder prompt dismissed, nothing to do");
            return Ok(ImportOutcome::Cancelled);
        };
        info!(dir = %dir.display(), "Source folder selected");

        // 3. Open the document before scanning; an empty scan closes it below
        let doc = self.host.create_document()?;

        // 4. Enumerate and plan
        let listing = self.scanner.list_files(&dir)?;
        let plan = ImportPlan::build(dir, listing, options);

        if plan.is_empty() {
            warn!("No candidate files in the selected folder");
            self.host.alert(NO_FILES_ALERT)?;
            self.host.close_document(doc)?;
            return Ok(ImportOutcome::NoFilesFound);
        }

        // 5. One layer per file; the first file reuses the document's
        //    initial layer instead of adding a second one
        for (index, entry) in plan.entries().iter().enumerate() {
            let layer = if index == 0 {
                self.host.initial_layer(doc)?
            } else {
                self.host.add_layer(doc)?
            };
            self.import_entry(doc, layer, entry, options)?;
        }

        // 6. Fit the artboard around everything that was placed
        self.host.fit_artboard_to_art(doc, options.artboard_margin)?;

        info!(layers = plan.len(), "Import completed");
        Ok(ImportOutcome::Completed { layers: plan.len() })
    }

    /// Compute the plan for `dir` without touching the host.
    ///
    /// Backs `--dry-run` style callers: same filter, labels, and order as
    /// [`ImportService::run`], no document side effects.
    pub fn preview(&self, dir: impl AsRef<Path>, options: &ImportOptions) -> LayupResult<ImportPlan> {
        let dir = dir.as_ref();
        let listing = self.scanner.list_files(dir)?;
        Ok(ImportPlan::build(dir, listing, options))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Import a single planned file onto `layer`.
    fn import_entry(
        &self,
        doc: DocumentId,
        layer: LayerId,
        entry: &PlanEntry,
        options: &ImportOptions,
    ) -> LayupResult<()> {
        debug!(
            file = %entry.file.file_name(),
            label = %entry.layer_label,
            "Importing file"
        );
        if source::label_is_lossy(entry.file.file_name()) {
            warn!(
                file = %entry.file.file_name(),
                label = %entry.layer_label,
                "Layer name truncated at the first dot"
            );
        }

        self.host.rename_layer(doc, layer, &entry.layer_label)?;
        let item = self.host.place_file(doc, layer, entry.file.path())?;

        // Embed strictly before any restructuring of the placed art
        self.host.embed(doc, item)?;

        if options.flatten.is_flatten() {
            // Menu commands act on the active layer's selection
            self.host.set_active_layer(doc, layer)?;
            self.host.run_menu_command(doc, MenuCommand::Ungroup)?;
            self.host
                .run_menu_command(doc, MenuCommand::ReleaseClippingMask)?;
        }

        Ok(())
    }
}
