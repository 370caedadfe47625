//! Input helper functions for the CLI.

use std::io::{self, Read};

use crate::errors::CliError;

/// Use the TEXT argument if given, otherwise read all of stdin.
///
/// One trailing newline (as added by `echo` or a here-string) is removed
/// from stdin input; everything else is kept verbatim.
pub fn read_text(arg: Option<String>, stdin_is_terminal: bool) -> anyhow::Result<String> {
    if let Some(value) = arg {
        return Ok(value);
    }

    if stdin_is_terminal {
        return Err(CliError::invalid_input(
            "No TEXT given; pass it as an argument or pipe it on stdin",
        )
        .into());
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    Ok(strip_trailing_newline(buffer))
}

fn strip_trailing_newline(mut value: String) -> String {
    if value.ends_with('\n') {
        value.pop();
        if value.ends_with('\r') {
            value.pop();
        }
    }
    value
}
