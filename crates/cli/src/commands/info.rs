use std::io::{stdout, IsTerminal};

use command_cuts_core::config::ScopeConfig;
use command_cuts_core::error::Result;
use command_cuts_core::loader::Loader;
use command_cuts_core::placeholder::{declared, Overrides};
use command_cuts_core::shortcut::{Line, Scope, Shortcut, ShortcutName};
use command_cuts_core::store;

use crate::table::Table;

/// Prints where a shortcut is stored, its variables and its lines.
///
/// # Errors
///
/// Returns an error if the shortcut cannot be found or read.
pub fn shortcut_info(scopes: &ScopeConfig, name: &ShortcutName, scope: Option<Scope>) -> Result<()> {
    let shortcut = store::locate(scopes, name, scope)?;
    let overrides = Overrides::default();
    let lines = Loader::new(&shortcut, &overrides).stored_lines()?;

    print!("{}", describe(&shortcut, &lines, stdout().is_terminal()));
    Ok(())
}

fn describe(shortcut: &Shortcut, lines: &[Line], styled: bool) -> String {
    let mut variables = Table::new(["Name", "Default value"]);
    let commands = lines.iter().filter_map(|line| match line {
        Line::Command(text) => Some(text.as_str()),
        Line::Comment(_) => None,
    });
    for (name, default) in declared(commands) {
        variables.push_row([name, default]);
    }

    let mut listing = Table::new(["Line", "Command line"]);
    for (number, line) in lines.iter().enumerate() {
        listing.push_row([(number + 1).to_string(), line.text().to_string()]);
    }

    format!(
        "Shortcut: {} ({})\nFile: {}\nRuntime variables:\n{}\nCommand lines:\n{}\n",
        shortcut.name,
        shortcut.scope,
        shortcut.path.display(),
        table_or_dash(&variables, styled),
        table_or_dash(&listing, styled),
    )
}

fn table_or_dash(table: &Table, styled: bool) -> String {
    if table.is_empty() {
        "-".to_string()
    } else {
        table.render(styled)
    }
}
