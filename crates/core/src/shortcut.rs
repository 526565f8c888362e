//! Shortcut names, scopes and stored lines.
//!
//! A shortcut is one plain text file named `<name>.command-shortcut` inside a
//! scope's store directory. Each line is either a comment (starting with `#`)
//! or a command line that may contain `{name(default)}` placeholders.

use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

/// File extension of a stored shortcut.
pub const SHORTCUT_EXTENSION: &str = "command-shortcut";

/// Lines starting with this character are comments.
pub const COMMENT_PREFIX: char = '#';

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("shortcut name pattern is valid"));

/// Which store a shortcut lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// `.command-shortcuts` under the working directory.
    Local,
    /// `.command-shortcuts` under the user's home directory.
    Global,
}

impl Scope {
    pub fn label(&self) -> &'static str {
        match self {
            Scope::Local => "local",
            Scope::Global => "global",
        }
    }

    /// Scopes to search for an existing shortcut, in order.
    ///
    /// An explicit scope is searched alone; otherwise local wins over global.
    pub fn lookup_order(requested: Option<Scope>) -> &'static [Scope] {
        match requested {
            Some(Scope::Local) => &[Scope::Local],
            Some(Scope::Global) => &[Scope::Global],
            None => &[Scope::Local, Scope::Global],
        }
    }
}

impl Display for Scope {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} scope", self.label())
    }
}

/// A validated shortcut identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortcutName(String);

impl ShortcutName {
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] unless `name` matches `^[A-Za-z_][A-Za-z0-9_]*$`.
    pub fn parse(name: &str) -> Result<Self> {
        if NAME_PATTERN.is_match(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(Error::InvalidName(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.0, SHORTCUT_EXTENSION)
    }
}

impl FromStr for ShortcutName {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::parse(name)
    }
}

impl Display for ShortcutName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// A shortcut known to exist on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub name: ShortcutName,
    pub scope: Scope,
    pub path: PathBuf,
}

/// One line of a shortcut file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Comment(String),
    Command(String),
}

impl Line {
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with(COMMENT_PREFIX) {
            Line::Comment(raw.to_string())
        } else {
            Line::Command(raw.to_string())
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Line::Comment(text) | Line::Command(text) => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["build", "_private", "deploy_2", "A", "_"] {
            assert!(ShortcutName::parse(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "2fast", "has space", "dash-name", "dot.name", "../escape", "ünïcode"] {
            let result = ShortcutName::parse(name);
            assert!(matches!(result, Err(Error::InvalidName(_))), "{name} should be invalid");
        }
    }

    #[test]
    fn test_file_name() {
        let name: ShortcutName = "build".parse().unwrap();
        assert_eq!(name.file_name(), "build.command-shortcut");
        assert_eq!(name.to_string(), "build");
    }

    #[test]
    fn test_lookup_order() {
        assert_eq!(Scope::lookup_order(None), &[Scope::Local, Scope::Global]);
        assert_eq!(Scope::lookup_order(Some(Scope::Global)), &[Scope::Global]);
        assert_eq!(Scope::lookup_order(Some(Scope::Local)), &[Scope::Local]);
    }

    #[test]
    fn test_line_classification() {
        assert_eq!(Line::parse("# note"), Line::Comment("# note".to_string()));
        assert_eq!(Line::parse("echo #1"), Line::Command("echo #1".to_string()));
        assert_eq!(Line::parse(" # indented"), Line::Command(" # indented".to_string()));
    }
}
