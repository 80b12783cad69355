//! Implementation of the `layup plan` command.
//!
//! Shows which files an import would pick up and what their layers would be
//! called, without opening a document or writing a script.

use std::path::PathBuf;

use tracing::{debug, instrument};

use layup_adapters::LocalScanner;
use layup_core::{
    application::ports::SourceScanner,
    domain::{FileOrder, ImportOptions, ImportPlan, SuffixMatch},
};

use crate::{
    cli::{PlanArgs, PlanFormat, global::GlobalArgs},
    commands::{fallback_dir, resolve_picker},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `layup plan` command.
#[instrument(skip_all)]
pub fn execute(
    args: PlanArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let options = build_options(&args, &config);

    let Some(dir) = choose_directory(args.dir, &options)? else {
        output.info("Folder prompt dismissed, nothing to plan")?;
        return Ok(());
    };
    debug!(dir = %dir.display(), "Planning import");

    let listing = LocalScanner::new().list_files(&dir)?;
    let plan = ImportPlan::build(dir, listing, &options);

    if plan.is_empty() {
        output.warning("No PDF files found")?;
        return Ok(());
    }

    render(&plan, args.format, &output)
}

/// Resolve the source directory the same way an import would: the `--dir`
/// flag becomes a preset answer, otherwise the prompt fires.
fn choose_directory(
    dir: Option<PathBuf>,
    options: &ImportOptions,
) -> CliResult<Option<PathBuf>> {
    let picker = resolve_picker(dir)?;
    picker
        .pick_directory(&options.prompt, &options.fallback_dir)
        .map_err(CliError::Core)
}

fn build_options(args: &PlanArgs, config: &AppConfig) -> ImportOptions {
    let suffix_match = if args.ignore_case || config.defaults.ignore_case {
        SuffixMatch::AnyCase
    } else {
        SuffixMatch::Strict
    };
    let order = if args.sorted || config.defaults.sorted {
        FileOrder::ByName
    } else {
        FileOrder::Discovered
    };

    ImportOptions::default()
        .with_suffix_match(suffix_match)
        .with_order(order)
        .with_fallback_dir(fallback_dir(config))
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn render(plan: &ImportPlan, format: PlanFormat, output: &OutputManager) -> CliResult<()> {
    match format {
        PlanFormat::Table => {
            output.header(&format!("Import plan for {}", plan.source_dir().display()))?;
            let width = plan
                .entries()
                .iter()
                .map(|e| e.layer_label.chars().count())
                .max()
                .unwrap_or(0);
            for entry in plan.entries() {
                output.print(&format!(
                    "  {:<width$}  {}",
                    entry.layer_label,
                    entry.file.file_name(),
                ))?;
            }
            output.print("")?;
            output.print(&format!(
                "{} file{} would be imported",
                plan.len(),
                if plan.len() == 1 { "" } else { "s" },
            ))?;
        }

        PlanFormat::Json => {
            // Serialised straight to stdout, bypassing the OutputManager:
            // JSON must stay parseable even in non-TTY pipes.
            let json = serde_json::to_string_pretty(plan).unwrap_or_else(|_| "{}".into());
            println!("{json}");
        }

        PlanFormat::List => {
            for entry in plan.entries() {
                println!("{}", entry.file.file_name());
            }
        }

        PlanFormat::Csv => {
            println!("file,layer");
            for entry in plan.entries() {
                println!("{},{}", entry.file.file_name(), entry.layer_label);
            }
        }
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
