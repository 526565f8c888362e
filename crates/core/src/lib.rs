//! Command Cuts Core Library
//!
//! This crate provides the core functionality for command-cuts, a tool that
//! saves frequently-run command sequences as named shortcut files and runs
//! them later with placeholder substitution.
//!
//! # Key Features
//!
//! - **Placeholders**: `{name(default)}` tokens resolved from `name=value` overrides
//! - **Scopes**: a local store under the working directory and a global one under `~`
//! - **Dispatch**: direct execution with a shell fallback for built-ins and pipelines
//! - **Error Handling**: one error type for every failure mode
//!
//! # Examples
//!
//! Rendering a single line:
//!
//! ```
//! use command_cuts_core::placeholder::{render, Overrides};
//!
//! let overrides = Overrides::parse(&["port=8080"]);
//! let line = render("serve --port {port(3000)} --host {host(localhost)}", &overrides);
//! assert_eq!(line, "serve --port 8080 --host localhost");
//! ```

pub mod config;
pub mod editor;
pub mod error;
pub mod execution;
pub mod loader;
pub mod placeholder;
pub mod request;
pub mod shortcut;
pub mod store;
