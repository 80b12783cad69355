//! CLI subcommand implementations.
//!
//! Each submodule owns one subcommand's `execute` function.  Shared wiring
//! that more than one command needs lives here.

pub mod completions;
pub mod config;
pub mod import;
pub mod init;
pub mod plan;

use std::path::PathBuf;

use layup_adapters::PresetPicker;
use layup_core::application::ports::FolderPicker;

use crate::config::AppConfig;
use crate::error::CliResult;

/// Choose the folder picker for a run: a preset answer when `--dir` was
/// given, the interactive terminal prompt otherwise.
pub(crate) fn resolve_picker(dir: Option<PathBuf>) -> CliResult<Box<dyn FolderPicker>> {
    match dir {
        Some(dir) => Ok(Box::new(PresetPicker::new(dir))),
        None => prompt_picker(),
    }
}

#[cfg(feature = "interactive")]
fn prompt_picker() -> CliResult<Box<dyn FolderPicker>> {
    Ok(Box::new(crate::picker::PromptPicker::new()))
}

#[cfg(not(feature = "interactive"))]
fn prompt_picker() -> CliResult<Box<dyn FolderPicker>> {
    Err(crate::error::CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

/// Directory the folder prompt starts from.
pub(crate) fn fallback_dir(config: &AppConfig) -> PathBuf {
    config
        .sources
        .default_dir
        .clone()
        .or_else(|| directories::UserDirs::new().map(|d| d.home_dir().to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}
