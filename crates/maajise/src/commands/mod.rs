//! One module per subcommand. Every command works on an explicit directory
//! so it can run against temporary projects in tests.

use std::path::Path;
use thiserror::Error;

use crate::config::FileConfig;
use crate::templates::TemplateRegistry;

pub mod add;
pub mod config;
pub mod doctor;
pub mod init;
pub mod status;
pub mod templates;
pub mod update;
pub mod validate;
pub mod version;

/// Bad invocation; the message ends with a pointer to the command's help
#[derive(Error, Debug)]
#[error("{message}\n\nRun 'maajise {command} --help' for usage information")]
pub struct UsageError {
  pub command: &'static str,
  pub message: String,
}

pub fn usage_error(command: &'static str, message: impl Into<String>) -> anyhow::Error {
  UsageError { command, message: message.into() }.into()
}

/// Last path component of `dir`, resolving `.` and friends first
pub fn project_name_of(dir: &Path) -> String {
  let resolved = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
  resolved
    .file_name()
    .map(|name| name.to_string_lossy().into_owned())
    .unwrap_or_default()
}

/// Built-in templates plus the user's custom ones.
///
/// An unreadable custom directory is reported and the built-ins are used alone.
pub fn load_registry(config: &FileConfig) -> TemplateRegistry {
  let dir = config.templates_dir();
  match TemplateRegistry::with_custom_dir(&dir) {
    Ok(registry) => registry,
    Err(e) => {
      tracing::warn!("custom templates unavailable: {e}");
      herald::warn!("Custom templates unavailable: {e}");
      TemplateRegistry::builtin()
    }
  }
}

/// Template named on the command line, or the one detected from `dir`
pub fn resolve_template_name(explicit: Option<&str>, dir: &Path, verbose: bool) -> String {
  match explicit {
    Some(name) => name.to_string(),
    None => {
      let detected = crate::detect::detect_template(dir);
      if verbose {
        herald::info!("Detected template: {detected}");
      }
      detected.to_string()
    }
  }
}
