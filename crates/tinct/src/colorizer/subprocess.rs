//! Typed subprocess invocation for external colorizers.
//!
//! Arguments are built programmatically (never via shell interpolation),
//! stdin is piped in, and the entire stdout is buffered and read after the
//! process terminates. No timeout is imposed; a hung engine hangs the pass.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::ColorizeError;

/// Verify that an executable exists and is invocable.
///
/// Runs `program probe_arg` with all streams silenced and checks the exit
/// status.
pub fn check_availability(program: &str, probe_arg: &str) -> Result<(), ColorizeError> {
    let status = Command::new(program)
        .arg(probe_arg)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| ColorizeError::Unavailable {
            program: program.to_owned(),
            reason: e.to_string(),
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(ColorizeError::Unavailable {
            program: program.to_owned(),
            reason: format!("probe exited with {status}"),
        })
    }
}

/// Run a program with `input` piped to stdin, returning its full stdout.
///
/// A non-success exit status is surfaced as
/// [`ColorizeError::Subprocess`] with the captured stderr.
pub fn run_piped(program: &str, args: &[String], input: &str) -> Result<String, ColorizeError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| ColorizeError::Unavailable {
            program: program.to_owned(),
            reason: e.to_string(),
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(input.as_bytes())
            .map_err(|source| ColorizeError::Io {
                program: program.to_owned(),
                source,
            })?;
    }

    let output = child
        .wait_with_output()
        .map_err(|source| ColorizeError::Io {
            program: program.to_owned(),
            source,
        })?;

    if !output.status.success() {
        return Err(ColorizeError::Subprocess {
            program: program.to_owned(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    String::from_utf8(output.stdout).map_err(|_| ColorizeError::OutputNotUtf8 {
        program: program.to_owned(),
    })
}
