//! Creating, finding, listing and deleting stored shortcuts.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use itertools::Itertools;
use log::{debug, info};

use crate::config::ScopeConfig;
use crate::error::{Error, Result};
use crate::shortcut::{Scope, Shortcut, ShortcutName, SHORTCUT_EXTENSION};

/// Written as the first line of every new shortcut.
pub const NEW_SHORTCUT_HINT: &str = "# lines starting with `#` are comments; add variables with defaults as {varname(defaultvalue)}";

const MAX_SUGGESTIONS: usize = 3;

/// Creates an empty shortcut in `scope`, creating the store directory if needed.
///
/// # Errors
///
/// Returns [`Error::AlreadyExists`] if the file is already there; an existing
/// file is never truncated.
pub fn create(config: &ScopeConfig, name: &ShortcutName, scope: Scope) -> Result<Shortcut> {
    let dir = config.dir(scope);
    fs::create_dir_all(dir).map_err(|e| Error::io_error("store directory", dir, e))?;

    let path = config.shortcut_path(name, scope);
    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(Error::AlreadyExists {
                name: name.to_string(),
                scope,
                path,
            })
        }
        Err(e) => return Err(Error::io_error("shortcut", path, e)),
    };

    writeln!(file, "{NEW_SHORTCUT_HINT}").map_err(|e| Error::io_error("shortcut", &path, e))?;
    info!("Created `{}`", path.display());

    Ok(Shortcut {
        name: name.clone(),
        scope,
        path,
    })
}

/// Finds an existing shortcut.
///
/// With an explicit `scope` only that store is checked; otherwise the local
/// store is checked before the global one.
///
/// # Errors
///
/// Returns [`Error::NotFound`] after every searched scope misses, with close
/// names from those scopes as suggestions.
pub fn locate(config: &ScopeConfig, name: &ShortcutName, scope: Option<Scope>) -> Result<Shortcut> {
    let searched = Scope::lookup_order(scope);

    for &candidate in searched {
        let path = config.shortcut_path(name, candidate);
        if path.is_file() {
            debug!("Found `{name}` in {candidate} at `{}`", path.display());
            return Ok(Shortcut {
                name: name.clone(),
                scope: candidate,
                path,
            });
        }
        debug!("`{name}` is not in {candidate}");
    }

    Err(Error::not_found(
        name.as_str(),
        searched,
        suggest(config, name.as_str(), searched),
    ))
}

/// Names of every shortcut in `scope`, sorted. A missing store is empty.
///
/// # Errors
///
/// Returns an error if the store directory exists but cannot be read.
pub fn list(config: &ScopeConfig, scope: Scope) -> Result<Vec<String>> {
    let dir = config.dir(scope);
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(Error::io_error("store directory", dir, e)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::io_error("store directory", dir, e))?.path();
        if !path.is_file() {
            continue;
        }

        if path.extension().and_then(|ext| ext.to_str()) != Some(SHORTCUT_EXTENSION) {
            continue;
        }

        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };

        match ShortcutName::parse(stem) {
            Ok(name) => names.push(name.as_str().to_string()),
            Err(_) => debug!("Skipping `{}`, not a valid shortcut name", path.display()),
        }
    }

    Ok(names.into_iter().sorted().collect())
}

/// Removes a shortcut's file.
///
/// # Errors
///
/// Returns an error if the file cannot be removed.
pub fn delete(shortcut: &Shortcut) -> Result<()> {
    fs::remove_file(&shortcut.path).map_err(|e| Error::io_error("shortcut", &shortcut.path, e))?;
    info!("Deleted `{}`", shortcut.path.display());
    Ok(())
}

/// Shortcut names in `scopes` that fuzzily match `name`, best first.
pub fn suggest(config: &ScopeConfig, name: &str, scopes: &[Scope]) -> Vec<String> {
    let matcher = SkimMatcherV2::default();

    scopes
        .iter()
        .filter_map(|&scope| list(config, scope).ok())
        .flatten()
        .unique()
        .filter_map(|candidate| {
            let score = matcher
                .fuzzy_match(&candidate, name)
                .or_else(|| matcher.fuzzy_match(name, &candidate))?;
            Some((score, candidate))
        })
        .sorted_by(|(a_score, a_name), (b_score, b_name)| {
            b_score.cmp(a_score).then_with(|| a_name.cmp(b_name))
        })
        .take(MAX_SUGGESTIONS)
        .map(|(_, candidate)| candidate)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn scoped_config(root: &TempDir) -> ScopeConfig {
        ScopeConfig::new(root.path().join("local"), root.path().join("global"))
    }

    fn name(value: &str) -> ShortcutName {
        ShortcutName::parse(value).unwrap()
    }

    #[test]
    fn test_create_writes_hint_and_creates_directory() {
        let root = TempDir::new().unwrap();
        let config = scoped_config(&root);

        let shortcut = create(&config, &name("build"), Scope::Global).unwrap();

        assert_eq!(shortcut.scope, Scope::Global);
        assert!(shortcut.path.starts_with(&config.global_dir));
        let content = fs::read_to_string(&shortcut.path).unwrap();
        assert!(content.starts_with('#'));
        assert!(!config.local_dir.exists());
    }

    #[test]
    fn test_create_existing_is_rejected_and_untouched() {
        let root = TempDir::new().unwrap();
        let config = scoped_config(&root);
        let shortcut = create(&config, &name("build"), Scope::Local).unwrap();
        fs::write(&shortcut.path, "cargo build\n").unwrap();

        let result = create(&config, &name("build"), Scope::Local);

        assert!(matches!(result, Err(Error::AlreadyExists { .. })));
        assert_eq!(fs::read_to_string(&shortcut.path).unwrap(), "cargo build\n");
    }

    #[test]
    fn test_locate_prefers_local() {
        let root = TempDir::new().unwrap();
        let config = scoped_config(&root);
        create(&config, &name("test"), Scope::Local).unwrap();
        create(&config, &name("test"), Scope::Global).unwrap();

        assert_eq!(locate(&config, &name("test"), None).unwrap().scope, Scope::Local);
        assert_eq!(
            locate(&config, &name("test"), Some(Scope::Global)).unwrap().scope,
            Scope::Global
        );
    }

    #[test]
    fn test_locate_falls_back_to_global() {
        let root = TempDir::new().unwrap();
        let config = scoped_config(&root);
        create(&config, &name("deploy"), Scope::Global).unwrap();

        let shortcut = locate(&config, &name("deploy"), None).unwrap();
        assert_eq!(shortcut.scope, Scope::Global);

        let result = locate(&config, &name("deploy"), Some(Scope::Local));
        assert!(matches!(result, Err(Error::NotFound { .. })));
    }

    #[test]
    fn test_locate_missing_suggests_close_names() {
        let root = TempDir::new().unwrap();
        let config = scoped_config(&root);
        create(&config, &name("deploy_prod"), Scope::Global).unwrap();
        create(&config, &name("unrelated"), Scope::Local).unwrap();

        match locate(&config, &name("deploy"), None) {
            Err(Error::NotFound {
                searched,
                suggestions,
                ..
            }) => {
                assert_eq!(searched, "local or global scope");
                assert_eq!(suggestions, vec!["deploy_prod".to_string()]);
            }
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_list_filters_and_sorts() {
        let root = TempDir::new().unwrap();
        let config = scoped_config(&root);
        create(&config, &name("zeta"), Scope::Local).unwrap();
        create(&config, &name("alpha"), Scope::Local).unwrap();
        fs::write(config.local_dir.join("notes.txt"), "").unwrap();
        fs::create_dir(config.local_dir.join("nested.command-shortcut")).unwrap();
        fs::write(config.local_dir.join("a.b.command-shortcut"), "").unwrap();
        fs::write(config.local_dir.join("has-dash.command-shortcut"), "").unwrap();

        assert_eq!(list(&config, Scope::Local).unwrap(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_list_missing_directory_is_empty() {
        let root = TempDir::new().unwrap();
        let config = scoped_config(&root);
        assert!(list(&config, Scope::Global).unwrap().is_empty());
    }

    #[test]
    fn test_create_then_delete_restores_store() {
        let root = TempDir::new().unwrap();
        let config = scoped_config(&root);
        fs::create_dir_all(&config.local_dir).unwrap();
        let before = list(&config, Scope::Local).unwrap();

        let shortcut = create(&config, &name("temp"), Scope::Local).unwrap();
        delete(&shortcut).unwrap();

        assert_eq!(list(&config, Scope::Local).unwrap(), before);
        assert!(!shortcut.path.exists());
    }
}
