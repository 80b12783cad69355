//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "layup",
    bin_name = "layup",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Import a folder of PDFs as embedded layers",
    long_about = "Layup turns a folder of PDF files into a drawing document \
                  with one embedded layer per file, delivered as a driver \
                  script the drawing application replays.",
    after_help = "EXAMPLES:\n\
        \x20 layup import --dir ~/maps -o maps-import.jsx\n\
        \x20 layup import --dir ~/maps --keep-groups --margin 12\n\
        \x20 layup plan --dir ~/maps --format json\n\
        \x20 layup completions bash > /usr/share/bash-completion/completions/layup",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Import a folder of PDFs into a new document.
    #[command(
        visible_alias = "i",
        about = "Import a folder of PDFs",
        after_help = "EXAMPLES:\n\
            \x20 layup import                      # prompt for the folder\n\
            \x20 layup import --dir ~/maps         # skip the prompt\n\
            \x20 layup import --dir ~/maps -o -    # driver script to stdout\n\
            \x20 layup import --dir ~/maps --keep-groups --sorted"
    )]
    Import(ImportArgs),

    /// Show which files would be imported, without importing.
    #[command(
        visible_alias = "p",
        about = "Preview the import plan",
        after_help = "EXAMPLES:\n\
            \x20 layup plan --dir ~/maps\n\
            \x20 layup plan --dir ~/maps --format json\n\
            \x20 layup plan --dir ~/maps --sorted --ignore-case"
    )]
    Plan(PlanArgs),

    /// Initialise a Layup configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 layup init            # default location\n\
            \x20 layup init --force    # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 layup completions bash > ~/.local/share/bash-completion/completions/layup\n\
            \x20 layup completions zsh  > ~/.zfunc/_layup\n\
            \x20 layup completions fish > ~/.config/fish/completions/layup.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Layup configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 layup config get defaults.flatten\n\
            \x20 layup config set defaults.sorted true\n\
            \x20 layup config list"
    )]
    Config(ConfigCommands),
}

// ── import ────────────────────────────────────────────────────────────────────

/// Arguments for `layup import`.
#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Source directory.  When omitted, an interactive prompt asks for one.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Folder containing the PDF files"
    )]
    pub dir: Option<PathBuf>,

    /// Where to write the driver script.  `-` writes to stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        default_value = "layup-import.jsx",
        help = "Driver script path (- for stdout)"
    )]
    pub output: PathBuf,

    /// Keep each embedded file as a grouped, masked object.
    #[arg(
        long = "keep-groups",
        help = "Skip ungrouping and clipping-mask release"
    )]
    pub keep_groups: bool,

    /// Also accept `.PDF` / `.Pdf` suffixes.
    #[arg(long = "ignore-case", help = "Match the .pdf suffix case-insensitively")]
    pub ignore_case: bool,

    /// Sort candidates by file name instead of discovery order.
    #[arg(long = "sorted", help = "Import files in lexicographic name order")]
    pub sorted: bool,

    /// Margin in points for the final artboard fit.
    #[arg(long = "margin", value_name = "PTS", help = "Artboard margin in points")]
    pub margin: Option<f64>,

    /// Overwrite an existing driver script.
    #[arg(long = "force", help = "Overwrite existing output file")]
    pub force: bool,

    /// Run against the in-memory host and write nothing.
    #[arg(long = "dry-run", help = "Show what would be imported without writing")]
    pub dry_run: bool,
}

// ── plan ──────────────────────────────────────────────────────────────────────

/// Arguments for `layup plan`.
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Source directory.  When omitted, an interactive prompt asks for one.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Folder containing the PDF files"
    )]
    pub dir: Option<PathBuf>,

    /// Also accept `.PDF` / `.Pdf` suffixes.
    #[arg(long = "ignore-case", help = "Match the .pdf suffix case-insensitively")]
    pub ignore_case: bool,

    /// Sort candidates by file name instead of discovery order.
    #[arg(long = "sorted", help = "List files in lexicographic name order")]
    pub sorted: bool,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: PlanFormat,
}

/// Output format for the `plan` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PlanFormat {
    /// Human-readable table.
    Table,
    /// One file name per line.
    List,
    /// JSON object.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `layup init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `layup completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `layup config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.flatten`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_import_command() {
        let cli = Cli::parse_from([
            "layup",
            "import",
            "--dir",
            "/maps",
            "--keep-groups",
            "--sorted",
        ]);
        match cli.command {
            Commands::Import(args) => {
                assert_eq!(args.dir, Some(PathBuf::from("/maps")));
                assert!(args.keep_groups);
                assert!(args.sorted);
                assert!(!args.ignore_case);
                assert_eq!(args.output, PathBuf::from("layup-import.jsx"));
            }
            other => panic!("expected Import, got {other:?}"),
        }
    }

    #[test]
    fn import_alias_i() {
        let cli = Cli::parse_from(["layup", "i", "--dir", "/maps"]);
        assert!(matches!(cli.command, Commands::Import(_)));
    }

    #[test]
    fn margin_accepts_fractions() {
        let cli = Cli::parse_from(["layup", "import", "--dir", "/maps", "--margin", "6.5"]);
        if let Commands::Import(args) = cli.command {
            assert_eq!(args.margin, Some(6.5));
        } else {
            panic!("expected Import command");
        }
    }

    #[test]
    fn plan_defaults_to_table() {
        let cli = Cli::parse_from(["layup", "plan", "--dir", "/maps"]);
        if let Commands::Plan(args) = cli.command {
            assert!(matches!(args.format, PlanFormat::Table));
        } else {
            panic!("expected Plan command");
        }
    }

    #[test]
    fn config_get_takes_a_key() {
        let cli = Cli::parse_from(["layup", "config", "get", "defaults.flatten"]);
        if let Commands::Config(ConfigCommands::Get { key }) = cli.command {
            assert_eq!(key, "defaults.flatten");
        } else {
            panic!("expected Config Get");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["layup", "--quiet", "--verbose", "plan"]);
        assert!(result.is_err());
    }
}
