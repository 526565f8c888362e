//! One handler per subcommand.
//!
//! Every handler receives the store locations and settings explicitly; none
//! of them reads process-wide state beyond the filesystem.

pub mod delete;
pub mod edit;
pub mod info;
pub mod list;
pub mod new;
pub mod run;

use command_cuts_core::config::{ScopeConfig, Settings};
use command_cuts_core::error::Result;
use command_cuts_core::request::{Operation, Request};

/// Dispatches `request` to its handler.
///
/// # Errors
///
/// Returns whatever the selected handler fails with.
pub fn execute(request: &Request, scopes: &ScopeConfig, settings: &Settings) -> Result<()> {
    match &request.command {
        Operation::New { name, open_editor } => {
            new::create_shortcut(scopes, settings, name, request.target_scope(), *open_editor)
        }
        Operation::Run { name, dry_run } => run::run_shortcut(
            scopes,
            settings,
            name,
            request.scope,
            &request.overrides,
            *dry_run,
        ),
        Operation::Edit { name } => edit::edit_shortcut(scopes, settings, name, request.scope),
        Operation::List => list::list_shortcuts(scopes, request.target_scope()),
        Operation::Info { name } => info::shortcut_info(scopes, name, request.scope),
        Operation::Delete { name, confirmed } => {
            delete::delete_shortcut(scopes, name, request.scope, *confirmed)
        }
    }
}
