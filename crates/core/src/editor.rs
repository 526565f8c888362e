//! Opening shortcut files in the user's editor.

use std::env;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

use log::debug;

use crate::config::Settings;
use crate::error::{Error, Result};

#[cfg(windows)]
const FALLBACK_EDITORS: &[&str] = &["notepad"];
#[cfg(not(windows))]
const FALLBACK_EDITORS: &[&str] = &["nano", "vim", "vi"];

/// Editors to try, most preferred first.
///
/// The settings file wins over `$EDITOR`, which wins over `$VISUAL`; the
/// platform fallbacks come last.
pub fn editor_candidates(settings: &Settings) -> Vec<String> {
    let configured = settings.editor.clone();
    let from_env = ["EDITOR", "VISUAL"].into_iter().map(|key| env::var(key).ok());

    std::iter::once(configured)
        .chain(from_env)
        .flatten()
        .filter(|editor| !editor.trim().is_empty())
        .chain(FALLBACK_EDITORS.iter().map(|editor| (*editor).to_string()))
        .collect()
}

/// Opens `path` in the first editor that can be launched and waits for it to close.
///
/// # Errors
///
/// Returns [`Error::NoEditor`] when no candidate can be launched, or
/// [`Error::EditorExit`] when the editor exits unsuccessfully.
pub fn open_in_editor(settings: &Settings, path: &Path) -> Result<String> {
    for editor in editor_candidates(settings) {
        match launch(&editor, path) {
            Ok(()) => return Ok(editor),
            Err(Error::EditorLaunch { original, .. }) if original.kind() == ErrorKind::NotFound => {
                debug!("Editor `{editor}` is not available, trying the next one");
            }
            Err(e) => return Err(e),
        }
    }

    Err(Error::NoEditor)
}

fn launch(editor: &str, path: &Path) -> Result<()> {
    let words = shlex::split(editor).unwrap_or_else(|| vec![editor.to_string()]);
    let Some((program, arguments)) = words.split_first() else {
        return Err(Error::NoEditor);
    };

    let status = Command::new(program)
        .args(arguments)
        .arg(path)
        .status()
        .map_err(|original| Error::EditorLaunch {
            editor: editor.to_string(),
            original,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::EditorExit(editor.to_string()))
    }
}
