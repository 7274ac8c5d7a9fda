//! Accessor façade over the content tree
//!
//! One list/load pair per category, each composing the resolver with that
//! category's directory and default suffix. `Catalog::bundled()` serves
//! the tree shipped with this crate; `Catalog::new` takes any other root
//! (tests use temporary trees).

use once_cell::sync::Lazy;

use crate::error::CatalogError;
use crate::paths::{DataPaths, EXAMPLE_DOC};
use crate::resolve::{list_dirs, list_files, read_text, resolve_dir, resolve_file};

static BUNDLED: Lazy<Catalog> = Lazy::new(|| Catalog::new(DataPaths::bundled()));

/// Read-only accessor for one data root.
#[derive(Debug, Clone)]
pub struct Catalog {
    paths: DataPaths,
}

impl Catalog {
    /// Catalog over an explicit path table.
    pub fn new(paths: DataPaths) -> Self {
        Self { paths }
    }

    /// The catalog over the data tree bundled with this crate.
    pub fn bundled() -> &'static Catalog {
        &BUNDLED
    }

    /// The path table this catalog reads from.
    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    // Skills

    /// Skill file names, sorted.
    pub fn list_skills(&self) -> Vec<String> {
        list_files(&self.paths.skills_dir(), Some(".md"))
    }

    /// A skill document by name or prefix (e.g. "01" or "01-diagnose").
    pub fn load_skill(&self, name: &str) -> Result<String, CatalogError> {
        read_text(&resolve_file(&self.paths.skills_dir(), name, ".md")?)
    }

    // Rules

    /// Rule file names, sorted.
    pub fn list_rules(&self) -> Vec<String> {
        list_files(&self.paths.rules_dir(), Some(".md"))
    }

    /// A rule document by name or prefix.
    pub fn load_rule(&self, name: &str) -> Result<String, CatalogError> {
        read_text(&resolve_file(&self.paths.rules_dir(), name, ".md")?)
    }

    // Examples

    /// Example directory names, sorted.
    pub fn list_examples(&self) -> Vec<String> {
        list_dirs(&self.paths.examples_dir())
    }

    /// An example's README by directory name or prefix.
    pub fn load_example(&self, name: &str) -> Result<String, CatalogError> {
        read_text(&resolve_dir(
            &self.paths.examples_dir(),
            name,
            EXAMPLE_DOC,
        )?)
    }

    // Templates

    /// Template file names, sorted. No suffix filter: every shipped
    /// template flavor is listed.
    pub fn list_templates(&self) -> Vec<String> {
        list_files(&self.paths.templates_dir(), None)
    }

    /// A template by name or prefix.
    pub fn load_template(&self, name: &str) -> Result<String, CatalogError> {
        read_text(&resolve_file(
            &self.paths.templates_dir(),
            name,
            ".ts.template",
        )?)
    }

    // Schemas

    /// Schema file names from src/schemas/, sorted.
    pub fn list_schemas(&self) -> Vec<String> {
        list_files(&self.paths.schemas_dir(), Some(".ts"))
    }

    /// A schema file by name or prefix.
    pub fn load_schema(&self, name: &str) -> Result<String, CatalogError> {
        read_text(&resolve_file(&self.paths.schemas_dir(), name, ".ts")?)
    }

    // Sources

    /// TypeScript source file names from src/, sorted.
    pub fn list_sources(&self) -> Vec<String> {
        list_files(&self.paths.src_dir(), Some(".ts"))
    }

    /// A TypeScript source file by name or prefix.
    pub fn load_source(&self, name: &str) -> Result<String, CatalogError> {
        read_text(&resolve_file(&self.paths.src_dir(), name, ".ts")?)
    }

    // Master document

    /// The master SKILL.md, addressed with no name and no resolution.
    pub fn load_master_doc(&self) -> Result<String, CatalogError> {
        read_text(&self.paths.master_doc())
    }
}

// Free functions over the bundled catalog, mirroring the Catalog surface
// for callers that never inject a root.

/// List bundled skill names.
pub fn list_skills() -> Vec<String> {
    Catalog::bundled().list_skills()
}

/// Load a bundled skill by name or prefix.
pub fn load_skill(name: &str) -> Result<String, CatalogError> {
    Catalog::bundled().load_skill(name)
}

/// List bundled rule names.
pub fn list_rules() -> Vec<String> {
    Catalog::bundled().list_rules()
}

/// Load a bundled rule by name or prefix.
pub fn load_rule(name: &str) -> Result<String, CatalogError> {
    Catalog::bundled().load_rule(name)
}

/// List bundled example names.
pub fn list_examples() -> Vec<String> {
    Catalog::bundled().list_examples()
}

/// Load a bundled example's README by name or prefix.
pub fn load_example(name: &str) -> Result<String, CatalogError> {
    Catalog::bundled().load_example(name)
}

/// List bundled template names.
pub fn list_templates() -> Vec<String> {
    Catalog::bundled().list_templates()
}

/// Load a bundled template by name or prefix.
pub fn load_template(name: &str) -> Result<String, CatalogError> {
    Catalog::bundled().load_template(name)
}

/// List bundled schema file names.
pub fn list_schemas() -> Vec<String> {
    Catalog::bundled().list_schemas()
}

/// Load a bundled schema file by name or prefix.
pub fn load_schema(name: &str) -> Result<String, CatalogError> {
    Catalog::bundled().load_schema(name)
}

/// List bundled TypeScript source names.
pub fn list_sources() -> Vec<String> {
    Catalog::bundled().list_sources()
}

/// Load a bundled TypeScript source by name or prefix.
pub fn load_source(name: &str) -> Result<String, CatalogError> {
    Catalog::bundled().load_source(name)
}

/// Load the bundled master document.
pub fn load_master_doc() -> Result<String, CatalogError> {
    Catalog::bundled().load_master_doc()
}
