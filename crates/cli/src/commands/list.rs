use command_cuts_core::config::ScopeConfig;
use command_cuts_core::error::Result;
use command_cuts_core::shortcut::Scope;
use command_cuts_core::store;

use crate::table::Table;

pub const NO_SHORTCUTS_MESSAGE: &str = "no shortcuts found...";

/// Prints every shortcut in `scope` as a numbered table.
///
/// # Errors
///
/// Returns an error if the store directory cannot be read.
pub fn list_shortcuts(scopes: &ScopeConfig, scope: Scope) -> Result<()> {
    let names = store::list(scopes, scope)?;

    match shortcuts_table(&names) {
        Some(table) => println!("{}", table.render_for_stdout()),
        None => println!("{NO_SHORTCUTS_MESSAGE}"),
    }

    Ok(())
}

fn shortcuts_table(names: &[String]) -> Option<Table> {
    if names.is_empty() {
        return None;
    }

    let mut table = Table::new(["S.no", "Shortcut name"]);
    for (index, name) in names.iter().enumerate() {
        table.push_row([(index + 1).to_string(), name.clone()]);
    }

    Some(table)
}
