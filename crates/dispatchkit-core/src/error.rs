//! Typed failures for catalog lookups

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures surfaced by catalog lookups.
///
/// `NotFound` and `Ambiguous` are the only resolution outcomes; `Io`
/// covers a resolved path that could not be read.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No entry matched the requested name.
    #[error("not found: {0}")]
    NotFound(String),

    /// More than one entry matched a prefix.
    #[error("ambiguous: {0}")]
    Ambiguous(String),

    /// A resolved path failed to read.
    #[error("failed to read {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CatalogError {
    /// `NotFound` carrying the directory's current entries so the caller
    /// can correct the name.
    pub(crate) fn no_match(dir: &Path, name: &str, available: &[String]) -> Self {
        Self::NotFound(format!(
            "no entry matching '{}' in {}/ (available: {:?})",
            name,
            dir_label(dir),
            available
        ))
    }

    /// `Ambiguous` listing every candidate the prefix matched.
    pub(crate) fn ambiguous_prefix(dir: &Path, name: &str, matches: &[String]) -> Self {
        Self::Ambiguous(format!(
            "prefix '{}' in {}/ matches {:?}",
            name,
            dir_label(dir),
            matches
        ))
    }

    /// `NotFound` for a directory item missing its fixed inner file.
    pub(crate) fn missing_inner(dir: &Path, entry: &str, inner: &str) -> Self {
        Self::NotFound(format!("no {} in {}/{}/", inner, dir_label(dir), entry))
    }

    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Last path component, used in messages ("skills", "schemas").
fn dir_label(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}
