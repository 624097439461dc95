use std::collections::BTreeMap;
use std::path::Path;

use serde_yaml_ng::Value;
use tracing::debug;

use crate::error::RenderError;
use crate::settings::{flatten, load_settings, merge};
use shipstack_core::package::COMPOSE_FILE;

/// Render a package's compose template into a deployable manifest.
///
/// Override compose files, when given, deep-merge over the package template
/// in order. Every `${dotted.path}` placeholder is substituted from the
/// merged settings before the YAML is parsed, so overlays may themselves
/// contain placeholders.
pub fn render(
    package_dir: &Path,
    compose_files: &[impl AsRef<Path>],
    settings_files: &[impl AsRef<Path>],
    overrides: &BTreeMap<String, String>,
) -> Result<String, RenderError> {
    let settings = load_settings(package_dir, settings_files, overrides)?;
    let vars = flatten(&settings);
    debug!(package = %package_dir.display(), vars = vars.len(), "rendering compose template");

    let base_path = package_dir.join(COMPOSE_FILE);
    if !base_path.exists() {
        return Err(RenderError::ComposeMissing { path: base_path });
    }

    let mut manifest = load_compose(&base_path, &vars)?;
    for file in compose_files {
        let overlay = load_compose(file.as_ref(), &vars)?;
        merge(&mut manifest, overlay);
    }

    validate_manifest(&manifest)?;
    serde_yaml_ng::to_string(&manifest).map_err(|e| RenderError::Serialize { source: e })
}

fn load_compose(path: &Path, vars: &BTreeMap<String, String>) -> Result<Value, RenderError> {
    let template = std::fs::read_to_string(path).map_err(|e| RenderError::ComposeLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let substituted = substitute(&template, vars)?;
    serde_yaml_ng::from_str(&substituted).map_err(|e| RenderError::ComposeParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Replace `${dotted.path}` placeholders. `$$` escapes a literal dollar; any
/// other `$` passes through untouched.
fn substitute(template: &str, vars: &BTreeMap<String, String>) -> Result<String, RenderError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('$') => {
                chars.next();
                out.push('$');
            }
            Some('{') => {
                chars.next();
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => name.push(c),
                        None => return Err(RenderError::UnterminatedPlaceholder),
                    }
                }
                let value = vars
                    .get(&name)
                    .ok_or_else(|| RenderError::UnknownVariable { name: name.clone() })?;
                out.push_str(value);
            }
            _ => out.push('$'),
        }
    }
    Ok(out)
}

fn validate_manifest(manifest: &Value) -> Result<(), RenderError> {
    let Value::Mapping(map) = manifest else {
        return Err(RenderError::NotAComposeManifest {
            reason: "top level is not a mapping".to_owned(),
        });
    };
    match map.get("services") {
        Some(Value::Mapping(services)) if !services.is_empty() => Ok(()),
        Some(_) => Err(RenderError::NotAComposeManifest {
            reason: "'services' is not a mapping".to_owned(),
        }),
        None => Err(RenderError::NotAComposeManifest {
            reason: "no 'services' section".to_owned(),
        }),
    }
}

/// Map each service in a rendered manifest to its image reference. Services
/// without an `image` key are skipped.
pub fn service_images(manifest: &str) -> Result<BTreeMap<String, String>, RenderError> {
    let value: Value =
        serde_yaml_ng::from_str(manifest).map_err(|e| RenderError::NotAComposeManifest {
            reason: format!("invalid YAML: {e}"),
        })?;
    let mut images = BTreeMap::new();
    let services = value
        .get("services")
        .and_then(Value::as_mapping)
        .ok_or_else(|| RenderError::NotAComposeManifest {
            reason: "no 'services' section".to_owned(),
        })?;
    for (name, spec) in services {
        let (Some(name), Some(image)) = (name.as_str(), spec.get("image").and_then(Value::as_str))
        else {
            continue;
        };
        images.insert(name.to_owned(), image.to_owned());
    }
    Ok(images)
}
