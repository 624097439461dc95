use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::debug;

use crate::error::PackError;
use shipstack_core::Metadata;
use shipstack_core::package::{COMPOSE_FILE, METADATA_FILE, PACKAGE_EXTENSION, SETTINGS_FILE};

/// Scoped cleanup for extraction artifacts. Directory packages need none;
/// single-file packages own the temporary directory their documents were
/// split into, removed when the guard drops.
#[must_use = "dropping the guard removes temporary extraction artifacts"]
#[derive(Debug)]
pub struct Cleanup {
    temp: Option<TempDir>,
}

impl Cleanup {
    fn none() -> Self {
        Self { temp: None }
    }

    fn temp(dir: TempDir) -> Self {
        Self { temp: Some(dir) }
    }

    /// True when the extracted package lives in a temporary location.
    pub fn is_temporary(&self) -> bool {
        self.temp.is_some()
    }
}

/// Resolve an application package to a directory on disk.
///
/// Resolution order: an existing directory (as given, then with `.stack`
/// appended), an existing single file (same two spellings), or — with an
/// empty name — the sole `*.stack` entry in the current directory. The
/// returned guard must stay alive for as long as the path is used.
pub fn extract(app_name: &str) -> Result<(PathBuf, Cleanup), PackError> {
    extract_in(Path::new("."), app_name)
}

/// [`extract`] rooted at an explicit base directory. Absolute names ignore
/// the base.
pub fn extract_in(base: &Path, app_name: &str) -> Result<(PathBuf, Cleanup), PackError> {
    let candidate = if app_name.is_empty() {
        find_sole_package(base)?
    } else {
        resolve_name(base, app_name)?
    };

    if candidate.is_dir() {
        check_package_dir(&candidate)?;
        let meta = Metadata::load(&candidate)?;
        debug!(package = %candidate.display(), name = ?meta.name, version = ?meta.version, "using package directory");
        return Ok((candidate, Cleanup::none()));
    }

    split_single_file(&candidate)
}

fn resolve_name(base: &Path, app_name: &str) -> Result<PathBuf, PackError> {
    let plain = base.join(app_name);
    if plain.exists() {
        return Ok(plain);
    }
    let with_ext = base.join(format!("{app_name}{PACKAGE_EXTENSION}"));
    if with_ext.exists() {
        return Ok(with_ext);
    }
    Err(PackError::PackageNotFound {
        name: app_name.to_owned(),
    })
}

fn find_sole_package(dir: &Path) -> Result<PathBuf, PackError> {
    let entries = std::fs::read_dir(dir).map_err(|e| PackError::PackageRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PackError::PackageRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(PACKAGE_EXTENSION) {
            candidates.push(name);
        }
    }

    match candidates.as_slice() {
        [] => Err(PackError::NoPackageFound {
            dir: dir.to_path_buf(),
        }),
        [sole] => Ok(dir.join(sole)),
        _ => {
            candidates.sort();
            Err(PackError::AmbiguousPackage { candidates })
        }
    }
}

fn check_package_dir(dir: &Path) -> Result<(), PackError> {
    if dir.join(COMPOSE_FILE).is_file() {
        Ok(())
    } else {
        Err(PackError::NotAPackage {
            path: dir.to_path_buf(),
        })
    }
}

/// Split a single-file package (metadata, compose, settings documents joined
/// by `---`) into a temporary directory.
fn split_single_file(path: &Path) -> Result<(PathBuf, Cleanup), PackError> {
    let content = std::fs::read_to_string(path).map_err(|e| PackError::PackageRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let docs = split_documents(&content);
    if docs.len() != 3 {
        return Err(PackError::MalformedSingleFile {
            path: path.to_path_buf(),
            docs: docs.len(),
        });
    }

    let temp = TempDir::new().map_err(|e| PackError::TempDir { source: e })?;
    for (file, doc) in [METADATA_FILE, COMPOSE_FILE, SETTINGS_FILE].iter().zip(&docs) {
        let dest = temp.path().join(file);
        std::fs::write(&dest, doc).map_err(|e| PackError::ExtractWrite {
            path: dest.clone(),
            source: e,
        })?;
    }

    let extracted = temp.path().to_path_buf();
    let meta = Metadata::load(&extracted)?;
    debug!(package = %path.display(), name = ?meta.name, version = ?meta.version, "extracted single-file package");
    Ok((extracted, Cleanup::temp(temp)))
}

fn split_documents(content: &str) -> Vec<String> {
    let mut docs = Vec::new();
    let mut current = String::new();
    for line in content.lines() {
        if line.trim_end() == "---" {
            docs.push(std::mem::take(&mut current));
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    docs.push(current);
    // a leading `---` directive opens an empty first document; drop it
    if docs.first().is_some_and(|d| d.trim().is_empty()) && docs.len() > 3 {
        docs.remove(0);
    }
    docs
}
