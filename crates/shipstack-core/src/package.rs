use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Extension of application package directories and single-file packages.
pub const PACKAGE_EXTENSION: &str = ".stack";

/// Compose template inside a package.
pub const COMPOSE_FILE: &str = "compose.yml";

/// Default settings inside a package.
pub const SETTINGS_FILE: &str = "settings.yml";

/// Package metadata file.
pub const METADATA_FILE: &str = "metadata.yml";

/// Subdirectory holding saved images.
pub const IMAGES_DIR: &str = "images";

/// Derive the application name from a package directory: the base name with
/// the `.stack` extension stripped.
pub fn app_name_from_dir(dir: &Path) -> String {
    let base = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.to_string_lossy().into_owned());
    match base.strip_suffix(PACKAGE_EXTENSION) {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => base,
    }
}

/// Resolve the deployment stack name: an explicit flag value wins, otherwise
/// the name derives from the package directory.
pub fn stack_name(explicit: Option<&str>, package_dir: &Path) -> String {
    match explicit {
        Some(name) => name.to_owned(),
        None => app_name_from_dir(package_dir),
    }
}

/// `metadata.yml` contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Metadata {
    /// Load metadata from a package directory. A missing file yields the
    /// default; a present but unparsable file is an error.
    pub fn load(package_dir: &Path) -> Result<Self> {
        let path = package_dir.join(METADATA_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|e| Error::MetadataLoad {
            path: path.clone(),
            source: e,
        })?;
        serde_yaml_ng::from_str(&content).map_err(|e| Error::MetadataParse { path, source: e })
    }
}
