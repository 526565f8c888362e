use command_cuts_core::config::{ScopeConfig, Settings};
use command_cuts_core::editor;
use command_cuts_core::error::Result;
use command_cuts_core::shortcut::{Scope, ShortcutName};
use command_cuts_core::store;

/// Creates `name` in `scope` and, unless told otherwise, opens it for editing.
///
/// # Errors
///
/// Returns an error if the shortcut already exists, the file cannot be
/// created, or the editor fails.
pub fn create_shortcut(
    scopes: &ScopeConfig,
    settings: &Settings,
    name: &ShortcutName,
    scope: Scope,
    open_editor: bool,
) -> Result<()> {
    let shortcut = store::create(scopes, name, scope)?;
    println!("created \"{}\" in {}", shortcut.path.display(), shortcut.scope);

    if open_editor {
        println!("opening \"{}\" in the editor...", shortcut.path.display());
        editor::open_in_editor(settings, &shortcut.path)?;
    }

    Ok(())
}
