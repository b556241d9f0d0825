//! Project templates: the boilerplate each language gets.
//!
//! Built-in templates live in this module's children; user templates are
//! YAML files loaded by [`custom`]. A [`TemplateRegistry`] holds both, with
//! custom templates shadowing built-ins of the same name.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

pub mod base;
pub mod custom;
pub mod golang;
pub mod php;
pub mod python;
pub mod rust;
pub mod typescript;
pub mod vars;

pub use custom::CustomTemplate;
pub use vars::TemplateVars;

/// Relative file path -> file content, sorted by path
pub type TemplateFiles = BTreeMap<String, String>;

/// Name of the template used when nothing else is selected or detected
pub const DEFAULT_TEMPLATE: &str = "base";

/// Files every template is expected to carry
pub const COMMON_FILES: [&str; 3] = [".gitignore", ".ubsignore", "README.md"];

pub trait Template {
  fn name(&self) -> &str;
  fn description(&self) -> &str;
  /// Tools a project built from this template expects on PATH
  fn dependencies(&self) -> Vec<&str>;
  /// Files for a project called `project_name`, before variable substitution
  fn files(&self, project_name: &str) -> TemplateFiles;
}

#[derive(Error, Debug)]
pub enum TemplateError {
  #[error("unknown template: {name} (available: {available})")]
  Unknown { name: String, available: String },

  #[error("failed to read template {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse template {path}: {source}")]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_yaml::Error,
  },

  #[error("invalid template {path}: {reason}")]
  Invalid { path: PathBuf, reason: String },

  #[error("template {template} renders a file path outside the project: {path}")]
  UnsafePath { template: String, path: String },
}

/// True for a non-empty relative path that stays inside the directory it is joined to
pub fn is_contained_path(path: &str) -> bool {
  let path = Path::new(path);
  !path.as_os_str().is_empty()
    && path.components().all(|part| matches!(part, Component::Normal(_) | Component::CurDir))
}

/// Substitute the project name placeholder in built-in content
pub(crate) fn with_project(content: &str, project_name: &str) -> String {
  content.replace(vars::PROJECT_NAME_PLACEHOLDER, project_name)
}

pub struct TemplateRegistry {
  templates: BTreeMap<String, Box<dyn Template>>,
}

impl TemplateRegistry {
  /// Registry without any template
  pub fn empty() -> Self {
    Self { templates: BTreeMap::new() }
  }

  /// Registry holding the built-in templates
  pub fn builtin() -> Self {
    let mut registry = Self::empty();
    registry.register(Box::new(base::BaseTemplate));
    registry.register(Box::new(golang::GoTemplate));
    registry.register(Box::new(php::PhpTemplate));
    registry.register(Box::new(python::PythonTemplate));
    registry.register(Box::new(rust::RustTemplate));
    registry.register(Box::new(typescript::TypeScriptTemplate));
    registry
  }

  /// Built-ins plus every custom template found in `dir`
  pub fn with_custom_dir(dir: &Path) -> Result<Self, TemplateError> {
    let mut registry = Self::builtin();
    registry.load_custom_dir(dir)?;
    Ok(registry)
  }

  /// Add a template, replacing any with the same name
  pub fn register(&mut self, template: Box<dyn Template>) {
    self.templates.insert(template.name().to_string(), template);
  }

  /// Load custom templates from `dir`, returning the names registered.
  ///
  /// A missing directory is not an error. Files that fail to parse are
  /// skipped with a warning so one broken template does not hide the rest.
  pub fn load_custom_dir(&mut self, dir: &Path) -> Result<Vec<String>, TemplateError> {
    let mut loaded = Vec::new();
    for result in custom::load_dir(dir)? {
      match result {
        Ok(template) => {
          tracing::debug!(name = template.name(), "registered custom template");
          loaded.push(template.name().to_string());
          self.register(Box::new(template));
        }
        Err(e) => {
          tracing::warn!("skipping custom template: {e}");
          herald::warn!("Skipping custom template: {e}");
        }
      }
    }
    Ok(loaded)
  }

  pub fn get(&self, name: &str) -> Option<&dyn Template> {
    self.templates.get(name).map(|t| t.as_ref())
  }

  /// Like [`get`](Self::get) but with an error listing the known names
  pub fn require(&self, name: &str) -> Result<&dyn Template, TemplateError> {
    self.get(name).ok_or_else(|| TemplateError::Unknown {
      name: name.to_string(),
      available: self.names().join(", "),
    })
  }

  /// Template names in sorted order
  pub fn names(&self) -> Vec<&str> {
    self.templates.keys().map(String::as_str).collect()
  }

  /// Templates sorted by name
  pub fn all(&self) -> impl Iterator<Item = &dyn Template> {
    self.templates.values().map(|t| t.as_ref())
  }
}

impl Default for TemplateRegistry {
  fn default() -> Self {
    Self::builtin()
  }
}
