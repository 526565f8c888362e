use command_cuts_core::config::ScopeConfig;
use command_cuts_core::error::{Error, Result};
use command_cuts_core::shortcut::{Scope, ShortcutName};
use command_cuts_core::store;

use crate::prompt;

/// Deletes a shortcut, asking first unless `confirmed`.
///
/// A missing shortcut is reported before any prompt is shown.
///
/// # Errors
///
/// Returns [`Error::NotFound`] for a missing shortcut and [`Error::Cancelled`]
/// when the prompt is declined.
pub fn delete_shortcut(
    scopes: &ScopeConfig,
    name: &ShortcutName,
    scope: Option<Scope>,
    confirmed: bool,
) -> Result<()> {
    let shortcut = store::locate(scopes, name, scope)?;

    let confirmed = confirmed
        || prompt::confirm(&format!(
            "are you sure you want to delete \"{}\" from {}?",
            shortcut.name, shortcut.scope
        ))?;

    if !confirmed {
        return Err(Error::Cancelled(shortcut.name.to_string()));
    }

    store::delete(&shortcut)?;
    println!("deleted \"{}\"", shortcut.path.display());

    Ok(())
}
