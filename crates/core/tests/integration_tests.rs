//! Integration tests for command-cuts-core
//!
//! These tests verify that the store, loader and placeholder engine work
//! together by driving complete workflows against a temporary store.

use command_cuts_core::{
    config::ScopeConfig,
    error::Error,
    loader::Loader,
    placeholder::{declared, Overrides},
    shortcut::{Line, Scope, ShortcutName},
    store,
};
use std::fs;
use tempfile::TempDir;

fn scoped_config(root: &TempDir) -> ScopeConfig {
    ScopeConfig::new(root.path().join("work"), root.path().join("home"))
}

fn commands(lines: Vec<Line>) -> Vec<String> {
    lines
        .into_iter()
        .filter_map(|line| match line {
            Line::Command(text) => Some(text),
            Line::Comment(_) => None,
        })
        .collect()
}

/// Create, fill, locate and render a shortcut end-to-end
#[test]
fn test_create_and_render_workflow() {
    let root = TempDir::new().unwrap();
    let config = scoped_config(&root);
    let name = ShortcutName::parse("deploy").unwrap();

    let created = store::create(&config, &name, Scope::Local).unwrap();
    fs::write(
        &created.path,
        "# deploy a manifest\n\
         kubectl apply -f {manifest(app.yml)} --context {ctx(dev)}\n\
         echo deployed {manifest(app.yml)}\n",
    )
    .unwrap();

    let shortcut = store::locate(&config, &name, None).unwrap();
    assert_eq!(shortcut, created);

    let overrides = Overrides::parse(&["ctx=prod"]);
    let lines: Vec<Line> = Loader::new(&shortcut, &overrides)
        .lines()
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(lines[0], Line::Comment("# deploy a manifest".to_string()));
    assert_eq!(
        commands(lines),
        vec![
            "kubectl apply -f app.yml --context prod".to_string(),
            "echo deployed app.yml".to_string(),
        ]
    );
}

/// Comment lines never contribute placeholders or get substituted
#[test]
fn test_comments_are_passed_through() {
    let root = TempDir::new().unwrap();
    let config = scoped_config(&root);
    let name = ShortcutName::parse("notes").unwrap();
    let shortcut = store::create(&config, &name, Scope::Global).unwrap();
    fs::write(&shortcut.path, "#{x(1)}\necho {y(2)}\n").unwrap();

    let overrides = Overrides::parse(&["x=9"]);
    let loader = Loader::new(&shortcut, &overrides);
    let lines: Vec<Line> = loader.lines().unwrap().map(Result::unwrap).collect();
    assert_eq!(lines[0], Line::Comment("#{x(1)}".to_string()));

    let stored = loader.stored_lines().unwrap();
    let command_texts: Vec<&str> = stored
        .iter()
        .filter(|line| matches!(line, Line::Command(_)))
        .map(Line::text)
        .collect();
    let names: Vec<String> = declared(command_texts)
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(names, vec!["y".to_string()]);
}

/// A shortcut that only exists globally is found without a scope flag
#[test]
fn test_scope_fallback_workflow() {
    let root = TempDir::new().unwrap();
    let config = scoped_config(&root);
    let name = ShortcutName::parse("backup").unwrap();
    store::create(&config, &name, Scope::Global).unwrap();

    let found = store::locate(&config, &name, None).unwrap();
    assert_eq!(found.scope, Scope::Global);

    store::delete(&found).unwrap();
    let result = store::locate(&config, &name, None);
    assert!(matches!(result, Err(Error::NotFound { .. })));
}

/// Creating then deleting leaves each scope as it was
#[test]
fn test_create_delete_round_trip_in_both_scopes() {
    let root = TempDir::new().unwrap();
    let config = scoped_config(&root);
    let keep = ShortcutName::parse("keep").unwrap();
    store::create(&config, &keep, Scope::Local).unwrap();
    store::create(&config, &keep, Scope::Global).unwrap();

    for scope in [Scope::Local, Scope::Global] {
        let before = store::list(&config, scope).unwrap();
        let name = ShortcutName::parse("_scratch_1").unwrap();

        let shortcut = store::create(&config, &name, scope).unwrap();
        assert!(store::list(&config, scope).unwrap().contains(&"_scratch_1".to_string()));
        store::delete(&shortcut).unwrap();

        assert_eq!(store::list(&config, scope).unwrap(), before);
    }
}

/// Lines keep file order across restarts of the loader
#[test]
fn test_loader_restart_reads_current_content() {
    let root = TempDir::new().unwrap();
    let config = scoped_config(&root);
    let name = ShortcutName::parse("evolving").unwrap();
    let shortcut = store::create(&config, &name, Scope::Local).unwrap();
    let overrides = Overrides::default();
    let loader = Loader::new(&shortcut, &overrides);

    fs::write(&shortcut.path, "echo one\n").unwrap();
    assert_eq!(commands(loader.stored_lines().unwrap()), vec!["echo one"]);

    fs::write(&shortcut.path, "echo one\necho {n(two)}\n").unwrap();
    let lines: Vec<Line> = loader.lines().unwrap().map(Result::unwrap).collect();
    assert_eq!(commands(lines), vec!["echo one", "echo two"]);
}
