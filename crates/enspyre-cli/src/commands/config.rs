//! `config` subcommands: `path`, `show`, `get`, `init`.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::cli::ConfigAction;
use crate::config::EnspyreConfig;
use crate::{Error, Result};

/// Handles a config subcommand, printing to stdout.
///
/// `show` and `get` report `config`, the effective settings after command
/// line overrides.
pub fn handle_config_command(
    config: &EnspyreConfig,
    config_path: Option<&str>,
    action: ConfigAction,
) -> Result<()> {
    let mut out = io::stdout().lock();
    match action {
        ConfigAction::Path => cmd_config_path(config_path, &mut out),
        ConfigAction::Show => cmd_config_show(config, &mut out),
        ConfigAction::Get { key } => cmd_config_get(config, &key, &mut out),
        ConfigAction::Init { file, force } => {
            let target = file.as_deref().or(config_path);
            cmd_config_init(target, force, &mut out).map(|_| ())
        }
    }
}

/// Prints the resolved config file path.
pub fn cmd_config_path<W: Write>(config_path: Option<&str>, out: &mut W) -> Result<()> {
    let path = EnspyreConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))?;
    writeln!(out, "{}", path.display())?;
    if !path.exists() {
        tracing::warn!(
            "{} does not exist; run `{} config init` to create it",
            path.display(),
            EnspyreConfig::PROJECT_NAME
        );
    }
    Ok(())
}

/// Prints the whole configuration as TOML.
pub fn cmd_config_show<W: Write>(config: &EnspyreConfig, out: &mut W) -> Result<()> {
    write!(out, "{}", config.to_toml_string()?)?;
    Ok(())
}

/// Prints one configuration value by dotted key.
pub fn cmd_config_get<W: Write>(config: &EnspyreConfig, key: &str, out: &mut W) -> Result<()> {
    let value = toml::Value::try_from(config).map_err(|e| Error::config(e.to_string()))?;
    let found = get_nested_value(&value, key)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))?;
    writeln!(out, "{}", format_toml_value(found))?;
    Ok(())
}

/// Writes a default config file and returns its path.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn cmd_config_init<W: Write>(file: Option<&str>, force: bool, out: &mut W) -> Result<PathBuf> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => EnspyreConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let toml_str = EnspyreConfig::default().to_toml_string()?;
    std::fs::write(&path, toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    writeln!(out, "Config file created at {}", path.display())?;
    Ok(path)
}

/// Walks a dotted key path through a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Formats a TOML value for display; strings print bare.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
