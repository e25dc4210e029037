//! JSON persistence for the binding table.
//!
//! The file is an object of key name to an array of pattern strings, e.g.
//! `{ "F1": ["GEAR_Rifle_Trader", "GEAR_Rifle"], "F6": ["GEAR_MooseHideBag:1"] }`.
//! Keys keep their file order, so a duplicated key resolves to its last entry.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::bindings::{BindingTable, DEFAULT_BINDINGS, LoadedBindings};
use crate::error::ConfigError;

pub const CONFIG_FILE_NAME: &str = "tld_hotkeys.json";
pub const DEBUG_MARKER_FILE_NAME: &str = "tld_hotkeys.debug";

/// Where the mod keeps its files inside the host's user-data directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModPaths {
    pub config: PathBuf,
    pub debug_marker: PathBuf,
}

impl ModPaths {
    pub fn from_user_data_dir(dir: &Path) -> Self {
        Self { config: dir.join(CONFIG_FILE_NAME), debug_marker: dir.join(DEBUG_MARKER_FILE_NAME) }
    }

    /// Verbose diagnostics are on while the marker file exists. Its content is ignored.
    pub fn diagnostics_enabled(&self) -> bool {
        self.debug_marker.exists()
    }
}

pub fn default_bindings_json() -> Value {
    let map: Map<String, Value> = DEFAULT_BINDINGS
        .iter()
        .map(|(key, patterns)| {
            let patterns = patterns.iter().map(|p| Value::String(p.to_string())).collect();
            (key.to_string(), Value::Array(patterns))
        })
        .collect();
    Value::Object(map)
}

pub fn write_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), ConfigError> {
    let io_err = |source: io::Error| ConfigError::Io { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(value).map_err(|e| io_err(io::Error::other(e)))?;
    fs::write(&tmp_path, json).map_err(io_err)?;
    fs::rename(&tmp_path, path).map_err(io_err)?;
    Ok(())
}

/// Parse config text into `(key name, raw patterns)` pairs, in file order.
pub fn parse_entries(
    path: &Path,
    content: &str,
) -> Result<Vec<(String, Vec<String>)>, ConfigError> {
    let shape_err = |reason: String| ConfigError::Shape { path: path.to_path_buf(), reason };

    let value: Value = serde_json::from_str(content)
        .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
    let Value::Object(map) = value else {
        return Err(shape_err("top level must be an object".to_string()));
    };

    let mut entries = Vec::with_capacity(map.len());
    for (key, patterns) in map {
        let Value::Array(patterns) = patterns else {
            return Err(shape_err(format!("value for '{key}' must be an array")));
        };
        let patterns = patterns
            .into_iter()
            .map(|pattern| match pattern {
                Value::String(s) => Ok(s),
                other => {
                    Err(shape_err(format!("pattern for '{key}' must be a string, got {other}")))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        entries.push((key, patterns));
    }
    Ok(entries)
}

impl BindingTable {
    /// Load the table from `path`, writing the defaults there first if the file is missing.
    pub fn load(path: &Path) -> Result<LoadedBindings, ConfigError> {
        if !path.exists() {
            write_atomic(path, &default_bindings_json())?;
            tracing::info!(path = %path.display(), "wrote default hotkey config");
        }

        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let entries = parse_entries(path, &content)?;
        Ok(BindingTable::from_entries(entries))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::keys::KeyId;
    use tempfile::tempdir;

    #[test]
    fn fresh_environment_writes_and_loads_defaults() {
        let dir = tempdir().expect("tempdir");
        let paths = ModPaths::from_user_data_dir(dir.path());
        assert!(!paths.config.exists());

        let loaded = BindingTable::load(&paths.config).expect("load");
        assert_eq!(loaded.table, BindingTable::defaults());
        assert!(loaded.skipped.is_empty());

        let on_disk: Value =
            serde_json::from_str(&fs::read_to_string(&paths.config).expect("read")).expect("json");
        assert_eq!(on_disk, default_bindings_json());

        let tmp_path = paths.config.with_extension("json.tmp");
        assert!(!tmp_path.exists());
    }

    #[test]
    fn default_file_keeps_key_order() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        BindingTable::load(&path).expect("load");

        let content = fs::read_to_string(&path).expect("read");
        let positions: Vec<usize> = ["\"F1\"", "\"F2\"", "\"F3\"", "\"F4\"", "\"F5\"", "\"F6\""]
            .iter()
            .map(|key| content.find(key).expect("key present"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn existing_file_is_not_overwritten() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{ "F9": ["GEAR_Flare"] }"#).expect("write");

        let loaded = BindingTable::load(&path).expect("load");
        assert_eq!(loaded.table.len(), 1);
        assert_eq!(loaded.table.get(KeyId::F9).unwrap()[0].name, "GEAR_Flare");
        assert!(loaded.table.get(KeyId::F1).is_none());
    }

    #[test]
    fn unknown_keys_are_dropped_silently() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{ "Bogus": ["GEAR_Rifle"], "F2": ["GEAR_Revolver"] }"#)
            .expect("write");

        let loaded = BindingTable::load(&path).expect("load");
        assert_eq!(loaded.table.len(), 1);
        assert!(loaded.table.get(KeyId::F2).is_some());
        assert_eq!(loaded.skipped, ["Bogus"]);
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{ not json").expect("write");

        let err = BindingTable::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn wrong_shape_is_a_shape_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);

        for bad in [r#"["F1"]"#, r#"{ "F1": "GEAR_Rifle" }"#, r#"{ "F1": ["GEAR_Rifle", 3] }"#] {
            fs::write(&path, bad).expect("write");
            let err = BindingTable::load(&path).unwrap_err();
            assert!(matches!(err, ConfigError::Shape { .. }), "expected shape error for {bad}");
        }
    }

    #[test]
    fn unserializable_value_is_an_io_error_and_writes_nothing() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        let tuple_keys = BTreeMap::from([((1_u8, 2_u8), "GEAR_Rifle")]);

        let err = write_atomic(&path, &tuple_keys).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(!path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn diagnostics_follow_marker_file() {
        let dir = tempdir().expect("tempdir");
        let paths = ModPaths::from_user_data_dir(dir.path());
        assert!(!paths.diagnostics_enabled());

        fs::write(&paths.debug_marker, "").expect("write marker");
        assert!(paths.diagnostics_enabled());
    }
}
