//! Command-line argument parsing.
//!
//! This module defines the command-line interface with `clap` and turns the
//! parsed arguments into a [`Request`].

use clap::{Parser, Subcommand};
use command_cuts_core::error::Result;
use command_cuts_core::placeholder::Overrides;
use command_cuts_core::request::{Operation, Request};
use command_cuts_core::shortcut::{Scope, ShortcutName};

/// Save and run repetitively used commands.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use command_cuts_cli::cli_args::Args;
///
/// let args = Args::parse_from(["cmdcut", "run", "build", "--var", "profile=release"]);
/// let request = args.to_request().unwrap();
/// assert_eq!(request.overrides.get("profile"), Some("release"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(name = "cmdcut", version, term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the settings YAML file.
    ///
    /// If not provided, defaults to `~/.command-shortcuts/settings.yml`.
    #[arg(long, short = 'c', global = true)]
    pub config_path: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new shortcut and open it in the editor
    New {
        /// The name of the new shortcut
        shortcut_name: String,

        /// Create the file without opening an editor
        #[arg(long, action)]
        no_editor: bool,

        #[command(flatten)]
        scope: ScopeArgs,
    },

    /// Run a shortcut
    Run {
        /// The name of the shortcut to run
        shortcut_name: String,

        /// Values for the shortcut's variables.
        ///
        /// Entries without exactly one `=` are ignored.
        ///
        /// # Examples
        /// ```bash
        /// cmdcut run deploy --var env=prod region=eu-west-1
        /// ```
        #[arg(long = "var", value_name = "NAME=VALUE", num_args = 1.., action = clap::ArgAction::Append)]
        vars: Vec<String>,

        /// Print the resolved command lines instead of running them
        #[arg(long, short = 'd', action)]
        dry_run: bool,

        #[command(flatten)]
        scope: ScopeArgs,
    },

    /// Open an existing shortcut in the editor
    Edit {
        /// The name of the shortcut to edit
        shortcut_name: String,

        #[command(flatten)]
        scope: ScopeArgs,
    },

    /// List all shortcuts
    List {
        #[command(flatten)]
        scope: ScopeArgs,
    },

    /// Show a shortcut's file, variables and command lines
    Info {
        /// The name of the shortcut to describe
        shortcut_name: String,

        #[command(flatten)]
        scope: ScopeArgs,
    },

    /// Delete a shortcut
    Del {
        /// The name of the shortcut to delete
        shortcut_name: String,

        /// Confirm deletion without prompt
        #[arg(short = 'y', action)]
        yes: bool,

        #[command(flatten)]
        scope: ScopeArgs,
    },
}

/// Scope selection shared by every subcommand.
#[derive(clap::Args, Debug, Default, Clone, Copy)]
pub struct ScopeArgs {
    /// Use the global store in the home directory
    #[arg(long, action)]
    pub global: bool,

    /// Use only the local store in the working directory
    #[arg(long, action, conflicts_with = "global")]
    pub local: bool,
}

impl ScopeArgs {
    #[must_use]
    pub fn scope(&self) -> Option<Scope> {
        match (self.global, self.local) {
            (true, _) => Some(Scope::Global),
            (false, true) => Some(Scope::Local),
            (false, false) => None,
        }
    }
}

impl Args {
    /// Validates the shortcut name and builds the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the shortcut name is not a valid identifier.
    pub fn to_request(&self) -> Result<Request> {
        let mut overrides = Overrides::default();

        let (command, scope) = match &self.command {
            Commands::New {
                shortcut_name,
                no_editor,
                scope,
            } => (
                Operation::New {
                    name: ShortcutName::parse(shortcut_name)?,
                    open_editor: !no_editor,
                },
                scope,
            ),
            Commands::Run {
                shortcut_name,
                vars,
                dry_run,
                scope,
            } => {
                overrides = Overrides::parse(vars);
                (
                    Operation::Run {
                        name: ShortcutName::parse(shortcut_name)?,
                        dry_run: *dry_run,
                    },
                    scope,
                )
            }
            Commands::Edit {
                shortcut_name,
                scope,
            } => (
                Operation::Edit {
                    name: ShortcutName::parse(shortcut_name)?,
                },
                scope,
            ),
            Commands::List { scope } => (Operation::List, scope),
            Commands::Info {
                shortcut_name,
                scope,
            } => (
                Operation::Info {
                    name: ShortcutName::parse(shortcut_name)?,
                },
                scope,
            ),
            Commands::Del {
                shortcut_name,
                yes,
                scope,
            } => (
                Operation::Delete {
                    name: ShortcutName::parse(shortcut_name)?,
                    confirmed: *yes,
                },
                scope,
            ),
        };

        Ok(Request {
            command,
            overrides,
            scope: scope.scope(),
        })
    }
}
