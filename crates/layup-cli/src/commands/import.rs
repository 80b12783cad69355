//! Implementation of the `layup import` command.
//!
//! Responsibility: translate CLI arguments into `ImportOptions`, run the
//! core import service, and deliver the driver script. No business logic
//! lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use layup_adapters::{LocalScanner, MemoryHost, ScriptHost};
use layup_core::{
    application::{ImportService, ports::DocumentId},
    domain::{FileOrder, FlattenMode, ImportOptions, ImportOutcome, SuffixMatch},
};

use crate::{
    cli::{ImportArgs, global::GlobalArgs},
    commands::{fallback_dir, resolve_picker},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `layup import` command.
///
/// Dispatch sequence:
/// 1. Build `ImportOptions` from flags and config
/// 2. Refuse to clobber an existing output file unless `--force`
/// 3. Dry run: replay against the in-memory host, report, write nothing
/// 4. Real run: record against the script host, then write the driver
#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(
    args: ImportArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve run options (flags win over config)
    let options = build_options(&args, &config);
    debug!(
        flatten = %options.flatten,
        suffix = %options.suffix_match,
        order = %options.order,
        margin = options.artboard_margin,
        "Options resolved"
    );

    // 2. Check the output target up front, before any prompt fires
    let target = OutputTarget::from_arg(&args.output);
    if let OutputTarget::File(path) = &target {
        if path.exists() && !args.force && !args.dry_run {
            return Err(CliError::OutputExists { path: path.clone() });
        }
    }

    // 3. Dry run never touches the filesystem
    if args.dry_run {
        return dry_run(args.dir, &options, &output);
    }

    // 4. Record the run against the script host
    let host = ScriptHost::new();
    let service = ImportService::new(
        Box::new(host.clone()),
        resolve_picker(args.dir)?,
        Box::new(LocalScanner::new()),
    );

    info!(session = %host.session(), "Import run starting");
    let outcome = service.run(&options)?;

    match outcome {
        ImportOutcome::Completed { layers } => {
            deliver_script(&host, &target, layers, &global, &output)?;
        }
        ImportOutcome::NoFilesFound => {
            output.warning("No PDF files found")?;
        }
        ImportOutcome::Cancelled => {
            output.info("Folder prompt dismissed, nothing imported")?;
        }
    }

    Ok(())
}

// ── Output target ─────────────────────────────────────────────────────────────

/// Where the rendered driver script goes.
#[derive(Debug, PartialEq, Eq)]
enum OutputTarget {
    /// `-o -`: the script itself is the stdout payload.
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    fn from_arg(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdout
        } else {
            Self::File(path.to_path_buf())
        }
    }
}

/// Render the recorded program and hand it over.
///
/// With a file target the script is written and a summary printed; with
/// stdout the script *is* the output, so no decorated chrome goes near it.
fn deliver_script(
    host: &ScriptHost,
    target: &OutputTarget,
    layers: usize,
    global: &GlobalArgs,
    output: &OutputManager,
) -> CliResult<()> {
    match target {
        OutputTarget::Stdout => {
            let script = host.render().map_err(CliError::Core)?;
            print!("{script}");
            info!(layers, "Driver script sent to stdout");
        }
        OutputTarget::File(path) => {
            host.write_to(path).map_err(CliError::Core)?;
            info!(layers, path = %path.display(), "Driver script written");

            output.success(&format!(
                "Driver script for {layers} layer{} written to {}",
                plural(layers),
                path.display(),
            ))?;
            if !global.quiet {
                output.print("")?;
                output.print("Next steps:")?;
                output.print("  1. Open Adobe Illustrator")?;
                output.print("  2. File > Scripts > Other Script...")?;
                output.print(&format!("  3. Choose {}", path.display()))?;
            }
        }
    }
    Ok(())
}

// ── Dry run ───────────────────────────────────────────────────────────────────

/// Replay the full run against [`MemoryHost`] and report the model state.
///
/// This exercises the exact pipeline a real run would, prompt included, so
/// the reported layers match what the script host would record.
fn dry_run(dir: Option<PathBuf>, options: &ImportOptions, output: &OutputManager) -> CliResult<()> {
    let host = MemoryHost::new();
    let service = ImportService::new(
        Box::new(host.clone()),
        resolve_picker(dir)?,
        Box::new(LocalScanner::new()),
    );

    match service.run(options)? {
        ImportOutcome::Completed { layers } => {
            output.info(&format!(
                "Dry run: would import {layers} file{} as embedded layers",
                plural(layers),
            ))?;
            for name in host.layer_names(DocumentId::new(0)) {
                output.print(&format!("  {name}"))?;
            }
            if options.flatten.is_flatten() {
                output.print("  (each file ungrouped, clipping mask released)")?;
            }
            output.info("No driver script written")?;
        }
        ImportOutcome::NoFilesFound => {
            output.warning("No PDF files found")?;
        }
        ImportOutcome::Cancelled => {
            output.info("Folder prompt dismissed, nothing imported")?;
        }
    }
    Ok(())
}

// ── Option building ───────────────────────────────────────────────────────────

fn build_options(args: &ImportArgs, config: &AppConfig) -> ImportOptions {
    let flatten = if args.keep_groups || !config.defaults.flatten {
        FlattenMode::Preserve
    } else {
        FlattenMode::Flatten
    };
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
        .with_flatten(flatten)
        .with_suffix_match(suffix_match)
        .with_order(order)
        .with_artboard_margin(args.margin.unwrap_or(config.defaults.margin))
        .with_fallback_dir(fallback_dir(config))
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_args() -> ImportArgs {
        ImportArgs {
            dir: None,
            output: PathBuf::from("layup-import.jsx"),
            keep_groups: false,
            ignore_case: false,
            sorted: false,
            margin: None,
            force: false,
            dry_run: false,
        }
    }

    // ── build_options ─────────────────────────────────────────────────────

    #[test]
    fn defaults_reproduce_the_classic_run() {
        let options = build_options(&bare_args(), &AppConfig::default());
        assert_eq!(options.flatten, FlattenMode::Flatten);
        assert_eq!(options.suffix_match, SuffixMatch::Strict);
        assert_eq!(options.order, FileOrder::Discovered);
        assert_eq!(options.artboard_margin, 0.0);
    }

    #[test]
    fn keep_groups_forces_preserve() {
        let mut args = bare_args();
        args.keep_groups = true;
        let options = build_options(&args, &AppConfig::default());
        assert_eq!(options.flatten, FlattenMode::Preserve);
    }

    #[test]
    fn config_can_turn_flatten_off() {
        let mut config = AppConfig::default();
        config.defaults.flatten = false;
        let options = build_options(&bare_args(), &config);
        assert_eq!(options.flatten, FlattenMode::Preserve);
    }

    #[test]
    fn ignore_case_from_flag_or_config() {
        let mut args = bare_args();
        args.ignore_case = true;
        let options = build_options(&args, &AppConfig::default());
        assert_eq!(options.suffix_match, SuffixMatch::AnyCase);

        let mut config = AppConfig::default();
        config.defaults.ignore_case = true;
        let options = build_options(&bare_args(), &config);
        assert_eq!(options.suffix_match, SuffixMatch::AnyCase);
    }

    #[test]
    fn sorted_from_flag_or_config() {
        let mut args = bare_args();
        args.sorted = true;
        let options = build_options(&args, &AppConfig::default());
        assert_eq!(options.order, FileOrder::ByName);

        let mut config = AppConfig::default();
        config.defaults.sorted = true;
        let options = build_options(&bare_args(), &config);
        assert_eq!(options.order, FileOrder::ByName);
    }

    #[test]
    fn margin_flag_overrides_config() {
        let mut config = AppConfig::default();
        config.defaults.margin = 6.0;

        let options = build_options(&bare_args(), &config);
        assert_eq!(options.artboard_margin, 6.0);

        let mut args = bare_args();
        args.margin = Some(12.5);
        let options = build_options(&args, &config);
        assert_eq!(options.artboard_margin, 12.5);
    }

    #[test]
    fn configured_source_dir_becomes_the_prompt_fallback() {
        let mut config = AppConfig::default();
        config.sources.default_dir = Some(PathBuf::from("/srv/pdfs"));
        let options = build_options(&bare_args(), &config);
        assert_eq!(options.fallback_dir, PathBuf::from("/srv/pdfs"));
    }

    // ── output target ─────────────────────────────────────────────────────

    #[test]
    fn dash_means_stdout() {
        assert_eq!(OutputTarget::from_arg(Path::new("-")), OutputTarget::Stdout);
    }

    #[test]
    fn anything_else_is_a_file() {
        assert_eq!(
            OutputTarget::from_arg(Path::new("maps.jsx")),
            OutputTarget::File(PathBuf::from("maps.jsx"))
        );
    }

    #[test]
    fn plural_suffix() {
        assert_eq!(plural(1), "");
        assert_eq!(plural(2), "s");
    }
}
