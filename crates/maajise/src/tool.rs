//! Running external programs (`git`, `bd`, ...) by argument vector.
//!
//! Nothing here goes through a shell: every argument reaches the child
//! process exactly as given.

use std::path::Path;
use std::process::{Command, ExitStatus, Output, Stdio};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
  #[error("{program} not found on PATH")]
  NotFound { program: String },

  #[error("failed to run {command}: {source}")]
  Spawn {
    command: String,
    #[source]
    source: std::io::Error,
  },

  #[error("{command} failed ({status}){}", stderr_suffix(.stderr))]
  Failed { command: String, status: String, stderr: String },
}

impl ToolError {
  fn failed(command: String, status: ExitStatus, stderr: &[u8]) -> Self {
    Self::Failed {
      command,
      status: status
        .code()
        .map_or_else(|| "terminated by signal".to_string(), |code| format!("exit code {code}")),
      stderr: String::from_utf8_lossy(stderr).trim().to_string(),
    }
  }

  fn spawn(program: &str, command: String, source: std::io::Error) -> Self {
    match source.kind() {
      std::io::ErrorKind::NotFound => Self::NotFound { program: program.to_string() },
      _ => Self::Spawn { command, source },
    }
  }
}

fn stderr_suffix(stderr: &str) -> String {
  if stderr.is_empty() {
    String::new()
  } else {
    format!(": {stderr}")
  }
}

/// True when `program` resolves on PATH
pub fn is_available(program: &str) -> bool {
  which::which(program).is_ok()
}

pub fn require(program: &str) -> Result<(), ToolError> {
  if is_available(program) {
    Ok(())
  } else {
    Err(ToolError::NotFound { program: program.to_string() })
  }
}

fn display(program: &str, args: &[&str]) -> String {
  std::iter::once(program).chain(args.iter().copied()).collect::<Vec<_>>().join(" ")
}

fn command(program: &str, args: &[&str], dir: Option<&Path>) -> Command {
  let mut cmd = Command::new(program);
  cmd.args(args);
  if let Some(dir) = dir {
    cmd.current_dir(dir);
  }
  cmd
}

/// Run for effect. With `verbose` the child shares our stdout/stderr,
/// otherwise both are captured and stderr ends up in the error.
pub fn run(program: &str, args: &[&str], dir: Option<&Path>, verbose: bool) -> Result<(), ToolError> {
  let shown = display(program, args);
  tracing::debug!(command = %shown, dir = ?dir, "running");

  let mut cmd = command(program, args, dir);
  cmd.stdin(Stdio::null());
  if verbose {
    let status = cmd.status().map_err(|source| ToolError::spawn(program, shown.clone(), source))?;
    if !status.success() {
      return Err(ToolError::failed(shown, status, &[]));
    }
    return Ok(());
  }

  capture(program, args, dir, shown).map(|_| ())
}

fn capture(
  program: &str,
  args: &[&str],
  dir: Option<&Path>,
  shown: String,
) -> Result<Output, ToolError> {
  let out = command(program, args, dir)
    .stdin(Stdio::null())
    .output()
    .map_err(|source| ToolError::spawn(program, shown.clone(), source))?;
  if !out.status.success() {
    return Err(ToolError::failed(shown, out.status, &out.stderr));
  }
  Ok(out)
}

/// Run and return trimmed stdout
pub fn output(program: &str, args: &[&str], dir: Option<&Path>) -> Result<String, ToolError> {
  let shown = display(program, args);
  tracing::debug!(command = %shown, dir = ?dir, "capturing");

  let out = capture(program, args, dir, shown)?;
  Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
}

/// First line of `<program> <args>` output, for version reports.
/// Some tools print their version on stderr, so that is used when stdout is empty.
pub fn version(program: &str, args: &[&str]) -> Result<String, ToolError> {
  let out = capture(program, args, None, display(program, args))?;
  let text = if out.stdout.is_empty() { &out.stderr } else { &out.stdout };
  Ok(String::from_utf8_lossy(text).lines().next().unwrap_or_default().trim().to_string())
}
