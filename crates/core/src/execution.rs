//! Running finished command lines.
//!
//! A line is first split into shell words and launched directly. Only when the
//! program cannot be found is the raw line handed to the shell, which covers
//! built-ins, pipes and redirections.

use std::io::ErrorKind;
use std::process::{Command, ExitStatus, Stdio};

use log::{debug, info};

use crate::error::Result;

/// How a line ended up being run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Direct,
    Shell,
}

/// Result of running one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub strategy: Strategy,
    pub status: ExitStatus,
}

impl Outcome {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

pub struct Dispatcher {
    shell: String,
}

impl Dispatcher {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    pub fn shell(&self) -> &str {
        &self.shell
    }

    /// Runs `line` and waits for it. Blank lines are skipped and yield `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the direct launch fails for any reason other than a
    /// missing program, or if the shell itself cannot be launched.
    pub fn dispatch(&self, line: &str) -> Result<Option<Outcome>> {
        let Some(words) = shlex::split(line) else {
            debug!("Could not split `{line}` into words, handing it to the shell");
            return self.run_in_shell(line).map(Some);
        };

        let Some((program, arguments)) = words.split_first() else {
            return Ok(None);
        };

        let mut command = Command::new(program);
        command.args(arguments);

        match execute_command(command) {
            Ok(status) => {
                info!("Ran `{line}` directly");
                Ok(Some(Outcome {
                    strategy: Strategy::Direct,
                    status,
                }))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("`{program}` is not an executable, falling back to `{}`", self.shell);
                self.run_in_shell(line).map(Some)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn run_in_shell(&self, line: &str) -> Result<Outcome> {
        let mut command = Command::new(&self.shell);
        command.arg(shell_flag(&self.shell)).arg(line);

        let status = execute_command(command)?;
        info!("Ran `{line}` with `{}`", self.shell);

        Ok(Outcome {
            strategy: Strategy::Shell,
            status,
        })
    }
}

fn shell_flag(shell: &str) -> &'static str {
    let program = shell
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(shell)
        .to_ascii_lowercase();

    if program == "cmd" || program == "cmd.exe" {
        "/C"
    } else {
        "-c"
    }
}

/// Spawns `command` with inherited stdio and waits for it to exit.
fn execute_command(mut command: Command) -> std::io::Result<ExitStatus> {
    command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()?
        .wait()
}
