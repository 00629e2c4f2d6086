//! Offline template maintenance
//!
//! Two batch tools for moving the legacy PHP-include site onto the askama
//! templates: [`convert`] rewrites file contents, [`reorganize`] moves flat
//! files into the categorized folder layout. Both support a dry run and copy
//! the tree to a sibling backup directory before the first write.

pub mod convert;
pub mod reorganize;

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("templates directory not found: {}", .0.display())]
    TemplatesDirNotFound(PathBuf),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk templates directory: {0}")]
    Walk(#[from] walkdir::Error),
}

impl MigrationError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        MigrationError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Sibling of `dir` named `<dir name><suffix>`.
pub fn sibling_dir(dir: &Path, suffix: &str) -> PathBuf {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "templates".to_string());
    dir.with_file_name(format!("{}{}", name, suffix))
}

/// Copy `source` to `target` unless `target` already exists.
///
/// Returns `true` when a copy was made. An existing backup is never
/// overwritten, so the first backup always holds the untouched originals.
pub fn backup_once(source: &Path, target: &Path) -> Result<bool, MigrationError> {
    if target.exists() {
        return Ok(false);
    }

    for entry in WalkDir::new(source) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| MigrationError::io(entry.path(), io::Error::new(io::ErrorKind::Other, e)))?;
        let destination = target.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&destination).map_err(|e| MigrationError::io(&destination, e))?;
        } else {
            std::fs::copy(entry.path(), &destination).map_err(|e| MigrationError::io(&destination, e))?;
        }
    }

    tracing::info!("Created backup at: {}", target.display());
    Ok(true)
}

/// Indented listing of a directory tree, directories first, names sorted.
pub fn tree_lines(root: &Path) -> Result<Vec<String>, MigrationError> {
    let mut lines = Vec::new();
    let walker = WalkDir::new(root).sort_by(|a, b| {
        b.file_type()
            .is_dir()
            .cmp(&a.file_type().is_dir())
            .then_with(|| a.file_name().cmp(b.file_name()))
    });

    for entry in walker {
        let entry = entry?;
        let indent = "  ".repeat(entry.depth());
        let name = if entry.depth() == 0 {
            root.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "templates".to_string())
        } else {
            entry.file_name().to_string_lossy().into_owned()
        };

        if entry.file_type().is_dir() {
            lines.push(format!("{}{}/", indent, name));
        } else {
            lines.push(format!("{}{}", indent, name));
        }
    }
    Ok(lines)
}
