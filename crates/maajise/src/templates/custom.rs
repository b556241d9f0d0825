//! User-defined templates loaded from YAML files.
//!
//! ```yaml
//! name: my-stack
//! description: Team service layout
//! dependencies: [git, docker]
//! files:
//!   README.md: |
//!     # {{.ProjectName}}
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{is_contained_path, with_project, Template, TemplateError, TemplateFiles};

#[derive(Debug, Clone, Deserialize)]
pub struct CustomTemplate {
  pub name: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub dependencies: Vec<String>,
  #[serde(default)]
  pub files: BTreeMap<String, String>,
}

impl Template for CustomTemplate {
  fn name(&self) -> &str {
    &self.name
  }

  fn description(&self) -> &str {
    &self.description
  }

  fn dependencies(&self) -> Vec<&str> {
    self.dependencies.iter().map(String::as_str).collect()
  }

  fn files(&self, project_name: &str) -> TemplateFiles {
    self
      .files
      .iter()
      .map(|(path, content)| (with_project(path, project_name), with_project(content, project_name)))
      .collect()
  }
}

/// `~/.maajise/templates`, or a relative fallback when there is no home directory
pub fn default_custom_templates_dir() -> PathBuf {
  dirs::home_dir()
    .unwrap_or_else(|| PathBuf::from("."))
    .join(".maajise")
    .join("templates")
}

pub fn load_custom_template(path: &Path) -> Result<CustomTemplate, TemplateError> {
  let content = fs::read_to_string(path)
    .map_err(|source| TemplateError::Read { path: path.to_path_buf(), source })?;
  let template: CustomTemplate = serde_yaml::from_str(&content)
    .map_err(|source| TemplateError::Parse { path: path.to_path_buf(), source })?;

  if template.name.trim().is_empty() {
    return Err(TemplateError::Invalid {
      path: path.to_path_buf(),
      reason: "name must not be empty".to_string(),
    });
  }
  if !template.files.keys().all(|file| is_contained_path(file)) {
    return Err(TemplateError::Invalid {
      path: path.to_path_buf(),
      reason: "file paths must be relative and stay inside the project".to_string(),
    });
  }
  Ok(template)
}

fn is_template_file(path: &Path) -> bool {
  path.is_file()
    && matches!(path.extension().and_then(|ext| ext.to_str()), Some("yaml") | Some("yml"))
}

/// Parse every `*.yaml`/`*.yml` file in `dir`, in file name order.
///
/// The outer error is only for an unreadable directory; a missing one yields
/// no templates. Per-file failures are returned inline for the caller to report.
pub fn load_dir(dir: &Path) -> Result<Vec<Result<CustomTemplate, TemplateError>>, TemplateError> {
  if !dir.is_dir() {
    tracing::debug!(dir = %dir.display(), "no custom templates directory");
    return Ok(Vec::new());
  }

  let entries =
    fs::read_dir(dir).map_err(|source| TemplateError::Read { path: dir.to_path_buf(), source })?;
  let mut paths: Vec<PathBuf> =
    entries.filter_map(|entry| entry.ok().map(|e| e.path())).filter(|p| is_template_file(p)).collect();
  paths.sort();

  Ok(paths.iter().map(|path| load_custom_template(path)).collect())
}
