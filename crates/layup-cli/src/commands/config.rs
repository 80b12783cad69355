//! `layup config` — read and write configuration values.

use std::path::{Path, PathBuf};

use crate::{
    cli::{ConfigCommands, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    mut config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::Set { key, value } => {
            set_config_value(&mut config, &key, &value)?;
            write_config(&config, &active_config_path(&global))?;
            output.success(&format!("Set {key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&active_config_path(&global).display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// The file reads and writes go to: `--config` if given, else the default.
fn active_config_path(global: &GlobalArgs) -> PathBuf {
    global
        .config
        .clone()
        .unwrap_or_else(AppConfig::config_path)
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "defaults.flatten" => Ok(config.defaults.flatten.to_string()),
        "defaults.ignore_case" => Ok(config.defaults.ignore_case.to_string()),
        "defaults.sorted" => Ok(config.defaults.sorted.to_string()),
        "defaults.margin" => Ok(config.defaults.margin.to_string()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        "sources.default_dir" => Ok(config
            .sources
            .default_dir
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_default()),
        _ => Err(unknown_key(key)),
    }
}

fn set_config_value(config: &mut AppConfig, key: &str, value: &str) -> CliResult<()> {
    match key {
        "defaults.flatten" => config.defaults.flatten = parse_bool(key, value)?,
        "defaults.ignore_case" => config.defaults.ignore_case = parse_bool(key, value)?,
        "defaults.sorted" => config.defaults.sorted = parse_bool(key, value)?,
        "defaults.margin" => config.defaults.margin = parse_margin(value)?,
        "output.no_color" => config.output.no_color = parse_bool(key, value)?,
        "output.format" => config.output.format = parse_format(value)?,
        // An empty value clears the configured directory.
        "sources.default_dir" => {
            config.sources.default_dir = if value.is_empty() {
                None
            } else {
                Some(PathBuf::from(value))
            };
        }
        _ => return Err(unknown_key(key)),
    }
    Ok(())
}

fn write_config(config: &AppConfig, path: &Path) -> CliResult<()> {
    let toml = toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
            message: format!("Failed to create config directory '{}'", parent.display()),
            source: e,
        })?;
    }
    std::fs::write(path, &toml).map_err(|e| CliError::IoError {
        message: format!("Failed to write config to '{}'", path.display()),
        source: e,
    })
}

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!(
            "Unknown config key: '{key}' (see 'layup config list' for valid keys)"
        ),
        source: None,
    }
}

fn parse_bool(key: &str, value: &str) -> CliResult<bool> {
    value.parse().map_err(|_| CliError::ConfigError {
        message: format!("'{key}' expects true or false, got '{value}'"),
        source: None,
    })
}

fn parse_margin(value: &str) -> CliResult<f64> {
    let margin: f64 = value.parse().map_err(|_| CliError::ConfigError {
        message: format!("'defaults.margin' expects a number of points, got '{value}'"),
        source: None,
    })?;
    if !margin.is_finite() || margin < 0.0 {
        return Err(CliError::ConfigError {
            message: format!("'defaults.margin' must be zero or positive, got '{value}'"),
            source: None,
        });
    }
    Ok(margin)
}

fn parse_format(value: &str) -> CliResult<String> {
    match value {
        "auto" | "human" | "plain" | "json" => Ok(value.to_owned()),
        _ => Err(CliError::ConfigError {
            message: format!(
                "'output.format' expects auto, human, plain, or json, got '{value}'"
            ),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "defaults.flatten").unwrap(), "true");
        assert_eq!(get_config_value(&cfg, "defaults.margin").unwrap(), "0");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn get_unset_default_dir_is_empty() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "sources.default_dir").unwrap(), "");
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut cfg = AppConfig::default();
        set_config_value(&mut cfg, "defaults.sorted", "true").unwrap();
        assert_eq!(get_config_value(&cfg, "defaults.sorted").unwrap(), "true");

        set_config_value(&mut cfg, "defaults.margin", "6.5").unwrap();
        assert_eq!(cfg.defaults.margin, 6.5);

        set_config_value(&mut cfg, "sources.default_dir", "/maps").unwrap();
        assert_eq!(cfg.sources.default_dir, Some(PathBuf::from("/maps")));
    }

    #[test]
    fn empty_value_clears_default_dir() {
        let mut cfg = AppConfig::default();
        cfg.sources.default_dir = Some(PathBuf::from("/maps"));
        set_config_value(&mut cfg, "sources.default_dir", "").unwrap();
        assert_eq!(cfg.sources.default_dir, None);
    }

    #[test]
    fn set_rejects_non_boolean() {
        let mut cfg = AppConfig::default();
        assert!(set_config_value(&mut cfg, "defaults.flatten", "yes").is_err());
    }

    #[test]
    fn set_rejects_negative_margin() {
        let mut cfg = AppConfig::default();
        assert!(set_config_value(&mut cfg, "defaults.margin", "-3").is_err());
        assert!(set_config_value(&mut cfg, "defaults.margin", "NaN").is_err());
    }

    #[test]
    fn set_validates_output_format() {
        let mut cfg = AppConfig::default();
        assert!(set_config_value(&mut cfg, "output.format", "plain").is_ok());
        assert!(set_config_value(&mut cfg, "output.format", "yaml").is_err());
    }
}
