use crate::error::{CardioError, Result};
use crate::types::config::CardioConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "cardiorisk.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".cardiorisk/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/cardiorisk/config.toml";

/// Loads the layered configuration for `root`, or `None` when no layer exists.
pub fn load_config(root: &Path) -> Result<Option<CardioConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<CardioConfig>> {
    let layers = global_path
        .map(Path::to_path_buf)
        .into_iter()
        .chain([root.join(DEFAULT_CONFIG_FILE), root.join(DEFAULT_LOCAL_FILE)])
        .filter(|path| path.exists())
        .collect::<Vec<_>>();
    if layers.is_empty() {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    for path in &layers {
        tracing::debug!(path = %path.display(), "merging config layer");
        let value = read_toml_value(path)?;
        merge_toml(&mut merged, value);
    }

    let cfg: CardioConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| CardioError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| CardioError::ConfigParse(format!("{}: {}", path.display(), e)))
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
