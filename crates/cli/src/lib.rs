//! Command Cuts CLI Library
//!
//! This crate provides the command-line interface for command-cuts. It parses
//! arguments into a request, dispatches it to one handler per subcommand and
//! takes care of presentation and prompting.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing into a request
//! - [`commands`]: One handler per subcommand
//! - [`prompt`]: Deletion confirmation
//! - [`table`]: Table rendering for `list` and `info`
//!
//! # Examples
//!
//! ```bash
//! # Create a shortcut in the working directory's store
//! cmdcut new build
//!
//! # Run it, overriding the `profile` placeholder
//! cmdcut run build --var profile=release
//!
//! # Print the resolved lines without running them
//! cmdcut run build --dry-run
//!
//! # Work with the store in the home directory
//! cmdcut list --global
//! cmdcut del build -y --global
//! ```

pub mod cli_args;
pub mod commands;
pub mod prompt;
pub mod table;
