use std::collections::BTreeMap;
use std::path::Path;

use serde_yaml_ng::{Mapping, Value};

use crate::error::RenderError;
use shipstack_core::package::SETTINGS_FILE;

/// Build the effective settings tree for a package.
///
/// Layers, in increasing precedence: the package's `settings.yml` (absent is
/// treated as empty), each overlay file in order, then the `KEY=VALUE`
/// override map where dotted keys address nested mappings.
pub fn load_settings(
    package_dir: &Path,
    settings_files: &[impl AsRef<Path>],
    overrides: &BTreeMap<String, String>,
) -> Result<Value, RenderError> {
    let mut merged = Value::Mapping(Mapping::new());

    let base = package_dir.join(SETTINGS_FILE);
    if base.exists() {
        merge(&mut merged, load_file(&base)?);
    }

    for file in settings_files {
        merge(&mut merged, load_file(file.as_ref())?);
    }

    for (key, value) in overrides {
        set_dotted(&mut merged, key, value);
    }

    Ok(merged)
}

fn load_file(path: &Path) -> Result<Value, RenderError> {
    let content = std::fs::read_to_string(path).map_err(|e| RenderError::SettingsLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let value: Value =
        serde_yaml_ng::from_str(&content).map_err(|e| RenderError::SettingsParse {
            path: path.to_path_buf(),
            source: e,
        })?;
    match value {
        Value::Mapping(_) => Ok(value),
        Value::Null => Ok(Value::Mapping(Mapping::new())),
        _ => Err(RenderError::SettingsNotAMapping {
            path: path.to_path_buf(),
        }),
    }
}

/// Deep merge: mappings merge key-wise, anything else is replaced by the
/// overlay.
pub(crate) fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(base_value) => merge(base_value, overlay_value),
                    None => {
                        base_map.insert(key, overlay_value);
                    }
                }
            }
        }
        (base_slot, overlay_value) => *base_slot = overlay_value,
    }
}

/// Set a dotted-path key, creating intermediate mappings. A non-mapping node
/// on the path is replaced; overrides always win.
fn set_dotted(node: &mut Value, dotted: &str, value: &str) {
    if !matches!(node, Value::Mapping(_)) {
        *node = Value::Mapping(Mapping::new());
    }
    let Value::Mapping(map) = node else { return };
    match dotted.split_once('.') {
        None => {
            map.insert(
                Value::String(dotted.to_owned()),
                Value::String(value.to_owned()),
            );
        }
        Some((head, rest)) => {
            let child = map
                .entry(Value::String(head.to_owned()))
                .or_insert_with(|| Value::Mapping(Mapping::new()));
            set_dotted(child, rest, value);
        }
    }
}

/// Flatten the settings tree into dotted-path variables. Scalar leaves are
/// stringified; sequences and null leaves are not addressable and are
/// skipped.
pub fn flatten(settings: &Value) -> BTreeMap<String, String> {
    let mut vars = BTreeMap::new();
    flatten_into(settings, String::new(), &mut vars);
    vars
}

fn flatten_into(value: &Value, prefix: String, vars: &mut BTreeMap<String, String>) {
    match value {
        Value::Mapping(map) => {
            for (key, child) in map {
                let Some(key) = key.as_str() else { continue };
                let path = if prefix.is_empty() {
                    key.to_owned()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(child, path, vars);
            }
        }
        Value::String(s) => {
            vars.insert(prefix, s.clone());
        }
        Value::Number(n) => {
            vars.insert(prefix, n.to_string());
        }
        Value::Bool(b) => {
            vars.insert(prefix, b.to_string());
        }
        Value::Null | Value::Sequence(_) | Value::Tagged(_) => {}
    }
}
