//! Name resolution and listing over the data tree
//!
//! Two resolution strategies share one result shape: `resolve_file` for
//! flat file categories (exact, then default suffix, then unique prefix)
//! and `resolve_dir` for directory categories (exact or unique prefix,
//! then a fixed inner file). Listing is one level deep and tolerates a
//! missing directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::CatalogError;

/// List file names directly inside `dir`, lexically sorted.
///
/// With `suffix`, keep only names carrying it. A missing or unreadable
/// directory lists as empty.
pub fn list_files(dir: &Path, suffix: Option<&str>) -> Vec<String> {
    let mut names = read_names(dir, EntryKind::File);
    if let Some(suffix) = suffix {
        names.retain(|n| n.ends_with(suffix));
    }
    names
}

/// List subdirectory names directly inside `dir`, lexically sorted.
pub fn list_dirs(dir: &Path) -> Vec<String> {
    read_names(dir, EntryKind::Dir)
}

/// Resolve `name` to a single file in `dir`.
///
/// Tries the exact name, then `name + suffix`, then a unique
/// case-sensitive prefix over the directory's files. First hit wins;
/// zero prefix matches is `NotFound` (listing what is available), more
/// than one is `Ambiguous` (listing every match).
pub fn resolve_file(dir: &Path, name: &str, suffix: &str) -> Result<PathBuf, CatalogError> {
    let exact = dir.join(name);
    if exact.is_file() {
        return Ok(exact);
    }

    let with_suffix = dir.join(format!("{}{}", name, suffix));
    if with_suffix.is_file() {
        return Ok(with_suffix);
    }

    let files = list_files(dir, None);
    let matches: Vec<String> = files
        .iter()
        .filter(|n| n.starts_with(name))
        .cloned()
        .collect();
    match matches.as_slice() {
        [single] => {
            debug!("resolved '{}' to {:?} by prefix", name, dir.join(single));
            Ok(dir.join(single))
        }
        [] => Err(CatalogError::no_match(dir, name, &files)),
        _ => Err(CatalogError::ambiguous_prefix(dir, name, &matches)),
    }
}

/// Resolve `name` to the fixed `inner` file of a subdirectory of `dir`.
///
/// Directories have no suffix step: exact match first, then unique
/// prefix. A matched directory without its inner file is `NotFound`.
pub fn resolve_dir(dir: &Path, name: &str, inner: &str) -> Result<PathBuf, CatalogError> {
    if dir.join(name).is_dir() {
        return inner_doc(dir, name, inner);
    }

    let dirs = list_dirs(dir);
    let matches: Vec<String> = dirs
        .iter()
        .filter(|n| n.starts_with(name))
        .cloned()
        .collect();
    match matches.as_slice() {
        [single] => {
            debug!("resolved '{}' to {:?} by prefix", name, dir.join(single));
            inner_doc(dir, single, inner)
        }
        [] => Err(CatalogError::no_match(dir, name, &dirs)),
        _ => Err(CatalogError::ambiguous_prefix(dir, name, &matches)),
    }
}

/// Read a resolved path as UTF-8 text.
pub(crate) fn read_text(path: &Path) -> Result<String, CatalogError> {
    fs::read_to_string(path).map_err(|e| CatalogError::read(path, e))
}

fn inner_doc(dir: &Path, entry: &str, inner: &str) -> Result<PathBuf, CatalogError> {
    let doc = dir.join(entry).join(inner);
    if doc.is_file() {
        Ok(doc)
    } else {
        Err(CatalogError::missing_inner(dir, entry, inner))
    }
}

enum EntryKind {
    File,
    Dir,
}

fn read_names(dir: &Path, kind: EntryKind) -> Vec<String> {
    let mut names = Vec::new();

    let Ok(entries) = fs::read_dir(dir) else {
        return names;
    };

    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let keep = match kind {
            EntryKind::File => file_type.is_file(),
            EntryKind::Dir => file_type.is_dir(),
        };
        if !keep {
            continue;
        }
        if let Ok(name) = entry.file_name().into_string() {
            names.push(name);
        }
    }

    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn list_files_sorts_and_skips_directories() {
        let temp = tempdir().unwrap();
        touch(temp.path(), "b.md", "b");
        touch(temp.path(), "a.md", "a");
        fs::create_dir(temp.path().join("sub")).unwrap();

        assert_eq!(list_files(temp.path(), None), vec!["a.md", "b.md"]);
    }

    #[test]
    fn list_files_applies_suffix_filter() {
        let temp = tempdir().unwrap();
        touch(temp.path(), "note.md", "n");
        touch(temp.path(), "code.ts", "c");

        assert_eq!(list_files(temp.path(), Some(".ts")), vec!["code.ts"]);
    }

    #[test]
    fn listing_a_missing_directory_is_empty() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("absent");

        assert!(list_files(&missing, None).is_empty());
        assert!(list_dirs(&missing).is_empty());
    }

    #[test]
    fn list_dirs_skips_files() {
        let temp = tempdir().unwrap();
        touch(temp.path(), "loose.md", "x");
        fs::create_dir(temp.path().join("beta")).unwrap();
        fs::create_dir(temp.path().join("alpha")).unwrap();

        assert_eq!(list_dirs(temp.path()), vec!["alpha", "beta"]);
    }

    #[test]
    fn exact_match_wins_over_suffix_and_prefix() {
        let temp = tempdir().unwrap();
        touch(temp.path(), "plan", "exact");
        touch(temp.path(), "plan.md", "suffixed");
        touch(temp.path(), "plan-extended.md", "prefixed");

        let path = resolve_file(temp.path(), "plan", ".md").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "exact");
    }

    #[test]
    fn suffix_match_wins_over_prefix() {
        let temp = tempdir().unwrap();
        touch(temp.path(), "plan.md", "suffixed");
        touch(temp.path(), "plan-extended.md", "prefixed");

        let path = resolve_file(temp.path(), "plan", ".md").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "suffixed");
    }

    #[test]
    fn unique_prefix_resolves() {
        let temp = tempdir().unwrap();
        touch(temp.path(), "01-diagnose.md", "one");
        touch(temp.path(), "02-inventory.md", "two");

        let path = resolve_file(temp.path(), "01", ".md").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "one");
    }

    #[test]
    fn shared_prefix_is_ambiguous_and_lists_matches() {
        let temp = tempdir().unwrap();
        touch(temp.path(), "01-diagnose.md", "one");
        touch(temp.path(), "02-inventory.md", "two");

        let err = resolve_file(temp.path(), "0", ".md").unwrap_err();
        match err {
            CatalogError::Ambiguous(detail) => {
                assert!(detail.contains("01-diagnose.md"));
                assert!(detail.contains("02-inventory.md"));
            }
            other => panic!("expected Ambiguous, got {:?}", other),
        }
    }

    #[test]
    fn unknown_name_is_not_found_and_lists_available() {
        let temp = tempdir().unwrap();
        touch(temp.path(), "01-diagnose.md", "one");

        let err = resolve_file(temp.path(), "99", ".md").unwrap_err();
        match err {
            CatalogError::NotFound(detail) => assert!(detail.contains("01-diagnose.md")),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn resolving_in_a_missing_directory_is_not_found() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("absent");

        assert!(matches!(
            resolve_file(&missing, "anything", ".md"),
            Err(CatalogError::NotFound(_))
        ));
    }

    #[test]
    fn prefix_match_only_considers_files() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("plan-dir")).unwrap();
        touch(temp.path(), "plan-notes.md", "notes");

        let path = resolve_file(temp.path(), "plan", ".md").unwrap();
        assert_eq!(path, temp.path().join("plan-notes.md"));
    }

    #[test]
    fn directory_resolves_by_exact_name_and_prefix() {
        let temp = tempdir().unwrap();
        let item = temp.path().join("zustand-store-wrap");
        fs::create_dir(&item).unwrap();
        touch(&item, "README.md", "store");

        let exact = resolve_dir(temp.path(), "zustand-store-wrap", "README.md").unwrap();
        let short = resolve_dir(temp.path(), "zustand", "README.md").unwrap();
        assert_eq!(exact, short);
        assert_eq!(fs::read_to_string(exact).unwrap(), "store");
    }

    #[test]
    fn directory_without_inner_file_is_not_found() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("empty-example")).unwrap();

        let err = resolve_dir(temp.path(), "empty-example", "README.md").unwrap_err();
        match err {
            CatalogError::NotFound(detail) => assert!(detail.contains("README.md")),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn directory_prefix_shared_by_two_entries_is_ambiguous() {
        let temp = tempdir().unwrap();
        for name in ["redux-action-wrap", "redux-thunk-wrap"] {
            let item = temp.path().join(name);
            fs::create_dir(&item).unwrap();
            touch(&item, "README.md", name);
        }

        assert!(matches!(
            resolve_dir(temp.path(), "redux", "README.md"),
            Err(CatalogError::Ambiguous(_))
        ));
    }

    #[test]
    fn directory_resolution_ignores_loose_files() {
        let temp = tempdir().unwrap();
        touch(temp.path(), "zustand-notes.md", "not a dir");

        assert!(matches!(
            resolve_dir(temp.path(), "zustand", "README.md"),
            Err(CatalogError::NotFound(_))
        ));
    }
}
