use log::{info, warn};

use command_cuts_core::config::{ScopeConfig, Settings};
use command_cuts_core::error::{Error, Result};
use command_cuts_core::execution::Dispatcher;
use command_cuts_core::loader::Loader;
use command_cuts_core::placeholder::Overrides;
use command_cuts_core::shortcut::{Line, Scope, ShortcutName};
use command_cuts_core::store;

/// Runs every command line of a shortcut in order.
///
/// Lines that exit unsuccessfully do not stop the run; they are counted and
/// reported once all lines have been attempted.
///
/// # Errors
///
/// Returns [`Error::NotFound`] for a missing shortcut, [`Error::SubProcess`]
/// when a line cannot be launched at all, and [`Error::SubProcessExit`] when
/// one or more lines exited unsuccessfully.
pub fn run_shortcut(
    scopes: &ScopeConfig,
    settings: &Settings,
    name: &ShortcutName,
    scope: Option<Scope>,
    overrides: &Overrides,
    dry_run: bool,
) -> Result<()> {
    let shortcut = store::locate(scopes, name, scope)?;
    let loader = Loader::new(&shortcut, overrides);

    if dry_run {
        for line in loader.lines()? {
            match line? {
                Line::Command(command_line) if !command_line.trim().is_empty() => {
                    println!("{command_line}");
                }
                _ => {}
            }
        }
        return Ok(());
    }

    let dispatcher = Dispatcher::new(settings.shell());
    let mut failures = 0;

    for line in loader.lines()? {
        let Line::Command(command_line) = line? else {
            continue;
        };

        let Some(outcome) = dispatcher.dispatch(&command_line)? else {
            continue;
        };

        if outcome.success() {
            info!("`{command_line}` finished ({:?})", outcome.strategy);
        } else {
            warn!("`{command_line}` exited with {}", outcome.status);
            failures += 1;
        }
    }

    if failures > 0 {
        return Err(Error::SubProcessExit(failures));
    }

    Ok(())
}
