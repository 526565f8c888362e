use log::info;

use command_cuts_core::config::{ScopeConfig, Settings};
use command_cuts_core::editor;
use command_cuts_core::error::Result;
use command_cuts_core::shortcut::{Scope, ShortcutName};
use command_cuts_core::store::{self, NEW_SHORTCUT_HINT};

/// Reopens an existing shortcut in the editor.
///
/// # Errors
///
/// Returns an error if the shortcut cannot be found or the editor fails.
pub fn edit_shortcut(
    scopes: &ScopeConfig,
    settings: &Settings,
    name: &ShortcutName,
    scope: Option<Scope>,
) -> Result<()> {
    let shortcut = store::locate(scopes, name, scope)?;

    println!("opening \"{}\" in the editor...", shortcut.path.display());
    println!("{NEW_SHORTCUT_HINT}");

    let editor = editor::open_in_editor(settings, &shortcut.path)?;
    info!("Edited `{}` with `{editor}`", shortcut.path.display());

    Ok(())
}
