//! Herald - console status output and logging setup for maajise
//!
//! ## Features
//!
//! - Status lines (success, info, warn, error, verbose) with a colored marker
//! - Multi-line message support with consistent formatting
//! - Boxed banners for command headers and summaries
//! - `tracing` subscriber setup for diagnostics
//!
//! ## Usage
//!
//! Status functions: `success()`, `info()`, `warn()`, `error()`, `verbose()`
//!
//! Banners: `header()`, `summary()`
//!
//! Every status function has a macro twin taking `format!` arguments.

use colored::*;
use std::env;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the `tracing` filter directive
pub const LOG_ENV: &str = "MAAJISE_LOG";

/// Inner width of banner boxes, excluding the vertical borders
pub const BOX_WIDTH: usize = 59;

const SUCCESS_MARK: &str = "✓";
const INFO_MARK: &str = "→";
const WARN_MARK: &str = "⚠";
const ERROR_MARK: &str = "✗";
const VERBOSE_MARK: &str = "·";

/// Apply `NO_COLOR` before anything is printed
pub fn init() {
  if env::var_os("NO_COLOR").is_some() {
    colored::control::set_override(false);
  }
}

/// Install the global `tracing` subscriber.
///
/// The filter comes from `MAAJISE_LOG` when set, otherwise `warn`, or `debug`
/// in verbose mode. Calling this more than once is harmless.
pub fn init_logging(verbose: bool) {
  let fallback = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .try_init();
}

/// Uncolored form of a status line
pub fn format_line(marker: &str, line: &str) -> String {
  format!("{marker} {line}")
}

fn emit(marker: ColoredString, message: &str, to_stderr: bool) {
  for line in message.lines() {
    // blank lines separate paragraphs and carry no marker
    let text = if line.is_empty() { String::new() } else { format_line(&marker.to_string(), line) };
    if to_stderr {
      eprintln!("{text}");
    } else {
      println!("{text}");
    }
  }
}

/// Something completed successfully
pub fn success(message: &str) {
  emit(SUCCESS_MARK.green(), message, false);
}

/// General progress information
pub fn info(message: &str) {
  emit(INFO_MARK.blue(), message, false);
}

/// Something needs attention but the run continues
pub fn warn(message: &str) {
  emit(WARN_MARK.yellow(), message, false);
}

/// Something went wrong; written to stderr
pub fn error(message: &str) {
  emit(ERROR_MARK.red(), message, true);
}

/// Detail only shown when the caller runs in verbose mode
pub fn verbose(message: &str) {
  emit(VERBOSE_MARK.cyan(), message, false);
}

/// Print a line with no marker
pub fn plain(message: &str) {
  println!("{message}");
}

/// Lay out lines inside a double-line box.
///
/// Lines longer than the box are not truncated; the right border moves.
pub fn format_box(lines: &[&str]) -> Vec<String> {
  let border = "═".repeat(BOX_WIDTH);
  let content_width = BOX_WIDTH - 2;

  let mut out = Vec::with_capacity(lines.len() + 2);
  out.push(format!("╔{border}╗"));
  for line in lines {
    out.push(format!("║  {line:<content_width$}║"));
  }
  out.push(format!("╚{border}╝"));
  out
}

fn print_box(lines: &[&str], color: Color) {
  println!();
  for line in format_box(lines) {
    println!("{}", line.color(color));
  }
  println!();
}

/// Boxed title shown when a command starts
pub fn header(title: &str) {
  print_box(&[title], Color::Blue);
}

/// Boxed closing summary
pub fn summary(lines: &[&str]) {
  print_box(lines, Color::Green);
}

#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => {
    $crate::success(&format!($($arg)*))
  };
}

#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => {
    $crate::info(&format!($($arg)*))
  };
}

#[macro_export]
macro_rules! warn {
  ($($arg:tt)*) => {
    $crate::warn(&format!($($arg)*))
  };
}

#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => {
    $crate::error(&format!($($arg)*))
  };
}

#[macro_export]
macro_rules! verbose {
  ($($arg:tt)*) => {
    $crate::verbose(&format!($($arg)*))
  };
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_format_line() {
    assert_eq!(format_line("✓", "Created README.md"), "✓ Created README.md");
  }

  #[test]
  fn test_format_box_pads_to_width() {
    let lines = format_box(&["Hello"]);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with('╔'));
    assert!(lines[2].starts_with('╚'));
    // border chars are multi-byte, compare char counts
    assert_eq!(lines[1].chars().count(), lines[0].chars().count());
    assert!(lines[1].starts_with("║  Hello"));
    assert!(lines[1].ends_with('║'));
  }

  #[test]
  fn test_format_box_multiple_lines() {
    let lines = format_box(&["one", "two", "three"]);
    assert_eq!(lines.len(), 5);
    assert!(lines[3].contains("three"));
  }

  #[test]
  fn test_format_box_overlong_line_is_kept_whole() {
    let long = "x".repeat(BOX_WIDTH + 10);
    let lines = format_box(&[&long]);
    assert!(lines[1].contains(&long));
  }
}
