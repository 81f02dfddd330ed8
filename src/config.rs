use crate::error::{GpaError, Result};
use crate::types::config::GpaConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "gpa.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".gpa/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/gpa-wizard/config.toml";

/// Loads and validates configuration for `root`, or `None` when no file exists.
pub fn load_config(root: &Path) -> Result<Option<GpaConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<GpaConfig>> {
    let mut merged = Value::Table(Map::new());
    let mut found = false;
    if let Some(path) = global_path {
        found |= merge_file_if_exists(&mut merged, path)?;
    }
    found |= merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    found |= merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;
    if !found {
        return Ok(None);
    }

    let mut cfg: GpaConfig = merged.try_into()?;
    cfg.validate()?;

    if let Some(catalog) = cfg.catalog.as_mut() {
        if let Some(path) = catalog.path.as_mut() {
            if path.is_relative() {
                *path = root.join(&*path);
            }
        }
    }
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| GpaError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
