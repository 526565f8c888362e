//! Placeholder scanning, resolution and substitution.
//!
//! A placeholder is written `{name(default)}`. Scanning a line yields every
//! placeholder in order, resolving picks the override for its name or falls
//! back to its own default, and substitution splices the resolved values into
//! the exact spans that were matched. Replaced text is never scanned again.

use std::collections::HashMap;
use std::ops::Range;

use indexmap::IndexSet;
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

static PLACEHOLDER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\w+)\((.*?)\)\}").expect("placeholder pattern is valid"));

/// One `{name(default)}` occurrence within a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub name: String,
    pub default: String,
    /// Byte range of the whole `{name(default)}` token in the scanned line.
    pub span: Range<usize>,
}

/// A placeholder paired with the value it will be replaced by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub placeholder: &'a Placeholder,
    pub value: &'a str,
}

/// Values supplied at run time, keyed by placeholder name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides(HashMap<String, String>);

impl Overrides {
    /// Parses `name=value` entries.
    ///
    /// Entries that do not contain exactly one `=` are ignored. A later entry
    /// for the same name replaces an earlier one.
    pub fn parse<S: AsRef<str>>(entries: &[S]) -> Self {
        let mut values = HashMap::new();

        for entry in entries {
            let entry = entry.as_ref();
            let parts: Vec<&str> = entry.split('=').collect();
            if parts.len() != 2 {
                warn!("Ignoring malformed variable `{entry}`, expected `name=value`");
                continue;
            }

            values.insert(parts[0].to_string(), parts[1].to_string());
        }

        Self(values)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Overrides {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// Finds every placeholder in `line`, left to right, without overlap.
pub fn scan(line: &str) -> Vec<Placeholder> {
    PLACEHOLDER_PATTERN
        .captures_iter(line)
        .filter_map(|captures| {
            let whole = captures.get(0)?;
            Some(Placeholder {
                name: captures.get(1)?.as_str().to_string(),
                default: captures.get(2)?.as_str().to_string(),
                span: whole.range(),
            })
        })
        .collect()
}

/// Pairs each placeholder with its override, or its own default.
pub fn resolve<'a>(placeholders: &'a [Placeholder], overrides: &'a Overrides) -> Vec<Resolution<'a>> {
    placeholders
        .iter()
        .map(|placeholder| Resolution {
            placeholder,
            value: overrides
                .get(&placeholder.name)
                .unwrap_or(placeholder.default.as_str()),
        })
        .collect()
}

/// Replaces each resolved span of `line` with its value.
///
/// `resolutions` must come from scanning this same `line`.
pub fn substitute(line: &str, resolutions: &[Resolution<'_>]) -> String {
    let mut ordered: Vec<&Resolution<'_>> = resolutions.iter().collect();
    ordered.sort_by_key(|resolution| resolution.placeholder.span.start);

    let mut rendered = String::with_capacity(line.len());
    let mut cursor = 0;

    for resolution in ordered {
        let span = &resolution.placeholder.span;
        if span.start < cursor || span.end > line.len() {
            continue;
        }

        rendered.push_str(&line[cursor..span.start]);
        rendered.push_str(resolution.value);
        cursor = span.end;
    }

    rendered.push_str(&line[cursor..]);
    rendered
}

/// Scans, resolves and substitutes a single command line.
pub fn render(line: &str, overrides: &Overrides) -> String {
    let placeholders = scan(line);
    if placeholders.is_empty() {
        return line.to_string();
    }

    substitute(line, &resolve(&placeholders, overrides))
}

/// Distinct `(name, default)` pairs across `lines`, in order of first appearance.
pub fn declared<'a, I>(lines: I) -> IndexSet<(String, String)>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .flat_map(scan)
        .map(|placeholder| (placeholder.name, placeholder.default))
        .collect()
}
