use std::io::{stdin, stdout, BufRead, Write};

use command_cuts_core::error::{Error, Result};

/// Asks `question` on stdout and reads the answer from stdin.
///
/// # Errors
///
/// Returns an error if the terminal cannot be written to or read from.
pub fn confirm(question: &str) -> Result<bool> {
    confirm_with(&mut stdin().lock(), &mut stdout(), question)
}

/// Only `y` or `yes` (any case) confirms; anything else, including end of
/// input, declines.
pub fn confirm_with<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, question: &str) -> Result<bool> {
    write!(writer, "{question} (y/n) ").map_err(Error::Stdio)?;
    writer.flush().map_err(Error::Stdio)?;

    let mut input = String::new();
    reader.read_line(&mut input).map_err(Error::Stdio)?;

    let lowercase_input = input.trim().to_lowercase();
    Ok(lowercase_input == "y" || lowercase_input == "yes")
}
