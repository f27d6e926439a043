//! Structure and ontology files on disk.
//!
//! Structure files are the pretty-printed JSON form of a forest, UTF-8 with
//! non-ASCII text kept as is.

use std::path::{Path, PathBuf};

use sdf_core::Forest;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid structure file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Read a structure file.
pub fn read_forest(path: &Path) -> Result<Forest, StoreError> {
    let content = std::fs::read_to_string(path).map_err(io_error(path))?;
    serde_json::from_str(&content).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a structure file, creating parent directories as needed.
pub fn write_forest(path: &Path, forest: &Forest) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(forest).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    write_text(path, &json)
}

pub fn write_text(path: &Path, content: &str) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    std::fs::write(path, content).map_err(io_error(path))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "file written");
    Ok(())
}

fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map_or_else(|| "structure".into(), |s| s.to_string_lossy());
    path.with_file_name(format!("{stem}_{suffix}.json"))
}

/// `dir/structure.json` -> `dir/structure_backup.json`.
pub fn backup_path(path: &Path) -> PathBuf {
    sibling_path(path, "backup")
}

/// `dir/structure.json` -> `dir/structure_merged.json`.
pub fn merged_path(path: &Path) -> PathBuf {
    sibling_path(path, "merged")
}

/// Copy `path` to its backup location and return that location.
pub fn backup(path: &Path) -> Result<PathBuf, StoreError> {
    let target = backup_path(path);
    std::fs::copy(path, &target).map_err(io_error(path))?;
    Ok(target)
}

/// `dir/structure_<element>.json`.
pub fn element_structure_path(dir: &Path, element: &str) -> PathBuf {
    dir.join(format!("structure_{element}.json"))
}
