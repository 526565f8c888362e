use std::path::PathBuf;

use thiserror::Error;

use crate::shortcut::Scope;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid shortcut name \"{}\": a name starts with a letter or `_` and contains only letters, digits and `_`", .0)]
    InvalidName(String),

    #[error("a shortcut named \"{}\" already exists in {} at `{}`", .name, .scope, .path.display())]
    AlreadyExists {
        name: String,
        scope: Scope,
        path: PathBuf,
    },

    #[error("no shortcut found with name \"{}\" in {}{}", .name, .searched, suggestion_hint(.suggestions))]
    NotFound {
        name: String,
        searched: String,
        suggestions: Vec<String>,
    },

    #[error("cancelled deletion of \"{}\"", .0)]
    Cancelled(String),

    #[error("{} command line(s) exited with a non-success code.", .0)]
    SubProcessExit(usize),

    #[error("Error with sub process: {}", _0)]
    SubProcess(#[from] std::io::Error),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} at path `{}`: {}", .description, .path.display(), .original)]
    Io {
        description: String,
        path: PathBuf,
        original: std::io::Error,
    },

    #[error("Failed to launch editor `{}`: {}", .editor, .original)]
    EditorLaunch {
        editor: String,
        original: std::io::Error,
    },

    #[error("Editor `{}` exited with a non-success code.", .0)]
    EditorExit(String),

    #[error("No editor found. Set `editor` in the settings file or the $EDITOR environment variable.")]
    NoEditor,

    #[error("STDIO error: {}", .0)]
    Stdio(std::io::Error),
}

fn suggestion_hint(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

impl Error {
    pub fn not_found(name: &str, searched: &[Scope], suggestions: Vec<String>) -> Self {
        let searched = match searched {
            [] => "no scope".to_string(),
            [only] => only.to_string(),
            _ => format!(
                "{} scope",
                searched
                    .iter()
                    .map(|scope| scope.label())
                    .collect::<Vec<_>>()
                    .join(" or ")
            ),
        };

        Self::NotFound {
            name: name.to_string(),
            searched,
            suggestions,
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(description: &str, path: impl Into<PathBuf>, original: std::io::Error) -> Self {
        Self::Io {
            description: description.to_string(),
            path: path.into(),
            original,
        }
    }
}
