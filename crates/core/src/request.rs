//! A parsed invocation, built once at startup and handed to the handlers.

use crate::placeholder::Overrides;
use crate::shortcut::{Scope, ShortcutName};

/// The operation a user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    New {
        name: ShortcutName,
        open_editor: bool,
    },
    Run {
        name: ShortcutName,
        dry_run: bool,
    },
    Edit {
        name: ShortcutName,
    },
    List,
    Info {
        name: ShortcutName,
    },
    Delete {
        name: ShortcutName,
        confirmed: bool,
    },
}

impl Operation {
    pub fn name(&self) -> Option<&ShortcutName> {
        match self {
            Operation::New { name, .. }
            | Operation::Run { name, .. }
            | Operation::Edit { name }
            | Operation::Info { name }
            | Operation::Delete { name, .. } => Some(name),
            Operation::List => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub command: Operation,
    /// Placeholder values from `--var`; empty for everything but `run`.
    pub overrides: Overrides,
    /// `None` means no scope flag was given.
    pub scope: Option<Scope>,
}

impl Request {
    /// Scope for operations that act on a single store (`new`, `list`).
    pub fn target_scope(&self) -> Scope {
        self.scope.unwrap_or(Scope::Local)
    }
}
