//! Centralized locations for the bundled data tree
//!
//! All content paths in one place for consistency

use std::path::{Path, PathBuf};

/// Fixed name of the document inside each example directory.
pub const EXAMPLE_DOC: &str = "README.md";

/// Fixed name of the master document at the data root.
pub const MASTER_DOC: &str = "SKILL.md";

/// Immutable table of content locations under a single data root.
///
/// Built once and never mutated; every lookup derives its directory from
/// here instead of carrying loose paths around.
#[derive(Debug, Clone)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    /// Paths rooted at an explicit data directory.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Paths for the data tree bundled with this crate.
    pub fn bundled() -> Self {
        Self::from_root(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// The data root itself.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the skills directory (data/skills)
    pub fn skills_dir(&self) -> PathBuf {
        self.root.join("skills")
    }

    /// Get the rules directory (data/rules)
    pub fn rules_dir(&self) -> PathBuf {
        self.root.join("rules")
    }

    /// Get the examples directory (data/examples)
    pub fn examples_dir(&self) -> PathBuf {
        self.root.join("examples")
    }

    /// Get the templates directory (data/templates)
    pub fn templates_dir(&self) -> PathBuf {
        self.root.join("templates")
    }

    /// Get the TypeScript source directory (data/src)
    pub fn src_dir(&self) -> PathBuf {
        self.root.join("src")
    }

    /// Get the schema directory (data/src/schemas)
    pub fn schemas_dir(&self) -> PathBuf {
        self.src_dir().join("schemas")
    }

    /// Get the master document (data/SKILL.md)
    pub fn master_doc(&self) -> PathBuf {
        self.root.join(MASTER_DOC)
    }
}
