//! Reads a stored shortcut and yields its finished lines.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Lines};

use crate::error::{Error, Result};
use crate::placeholder::{self, Overrides};
use crate::shortcut::{Line, Shortcut};

/// Drives placeholder substitution over every line of a shortcut.
///
/// Each call to [`Loader::lines`] reopens the file, so the sequence can be
/// restarted from the top.
pub struct Loader<'a> {
    shortcut: &'a Shortcut,
    overrides: &'a Overrides,
}

impl<'a> Loader<'a> {
    pub fn new(shortcut: &'a Shortcut, overrides: &'a Overrides) -> Self {
        Self {
            shortcut,
            overrides,
        }
    }

    /// Opens the shortcut file and returns a lazy iterator over its lines.
    ///
    /// Comment lines come back untouched; command lines come back with every
    /// placeholder substituted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the file no longer exists, or an
    /// [`Error::Io`] for any other failure to open it.
    pub fn lines(&self) -> Result<FinishedLines<'a>> {
        Ok(FinishedLines {
            lines: self.raw_lines()?,
            shortcut: self.shortcut,
            overrides: self.overrides,
        })
    }

    /// Reads every stored line as written, without substitution.
    ///
    /// # Errors
    ///
    /// Same as [`Loader::lines`], plus any read failure.
    pub fn stored_lines(&self) -> Result<Vec<Line>> {
        self.raw_lines()?
            .map(|line| {
                line.map(|text| Line::parse(&text))
                    .map_err(|e| Error::io_error("shortcut", &self.shortcut.path, e))
            })
            .collect()
    }

    fn raw_lines(&self) -> Result<Lines<BufReader<File>>> {
        match File::open(&self.shortcut.path) {
            Ok(file) => Ok(BufReader::new(file).lines()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::not_found(
                self.shortcut.name.as_str(),
                &[self.shortcut.scope],
                Vec::new(),
            )),
            Err(e) => Err(Error::io_error("shortcut", &self.shortcut.path, e)),
        }
    }
}

pub struct FinishedLines<'a> {
    lines: Lines<BufReader<File>>,
    shortcut: &'a Shortcut,
    overrides: &'a Overrides,
}

impl Iterator for FinishedLines<'_> {
    type Item = Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = match self.lines.next()? {
            Ok(raw) => raw,
            Err(e) => return Some(Err(Error::io_error("shortcut", &self.shortcut.path, e))),
        };

        Some(Ok(match Line::parse(&raw) {
            Line::Command(text) => Line::Command(placeholder::render(&text, self.overrides)),
            comment => comment,
        }))
    }
}
