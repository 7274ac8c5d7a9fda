//! Bundled content catalog for the command-dispatch refactoring toolkit
//!
//! The crate ships a read-only `data/` tree of skills, rules, examples,
//! templates, Zod schema files, and TypeScript sources, and exposes each
//! category through a list/load pair. Names resolve by exact match, by
//! the category's default suffix, or by unique prefix.
//!
//! # Directory Structure
//!
//! ```text
//! data/
//!   SKILL.md                     master document
//!   skills/*.md                  numbered workflow documents
//!   rules/*.md                   convention documents
//!   examples/<name>/README.md    worked migrations, one per directory
//!   templates/*.ts.template      scaffold files
//!   src/*.ts                     reference TypeScript sources
//!   src/schemas/*.ts             reference Zod schemas
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use dispatchkit_core::Catalog;
//!
//! let catalog = Catalog::bundled();
//!
//! // List available skills
//! for name in catalog.list_skills() {
//!     println!("{}", name);
//! }
//!
//! // Load skill content, prefix matching included
//! let content = catalog.load_skill("01")?;
//! ```

pub mod catalog;
pub mod error;
pub mod paths;
pub mod resolve;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use paths::DataPaths;

// Re-export the bundled-catalog free functions for direct use
pub use catalog::{
    list_examples, list_rules, list_schemas, list_skills, list_sources, list_templates,
    load_example, load_master_doc, load_rule, load_schema, load_skill, load_source, load_template,
};
