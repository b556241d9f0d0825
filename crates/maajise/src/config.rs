//! User configuration (`~/.maajiserc`) and the resolved options for `init`.
//!
//! The file is optional. Every section and field falls back to its default,
//! so a file holding only `variables.author` is valid.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::templates::custom::default_custom_templates_dir;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "MAAJISE_CONFIG";
pub const CONFIG_FILE_NAME: &str = ".maajiserc";
pub const DEFAULT_MAIN_BRANCH: &str = "main";

#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("could not determine home directory; set {CONFIG_ENV} to choose a config file")]
  NoHome,

  #[error("failed to read config file {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse config file {path}: {source}")]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_yaml::Error,
  },

  #[error("failed to serialize config: {0}")]
  Serialize(#[from] serde_yaml::Error),

  #[error("failed to write config file {path}: {source}")]
  Write {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

/// Defaults for `init` when the corresponding flag is not given
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
  pub template: String,
  pub git_name: String,
  pub git_email: String,
  pub skip_remote: bool,
  pub skip_beads: bool,
  pub main_branch: String,
}

/// Values substituted into template placeholders
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Variables {
  pub author: String,
  pub email: String,
  pub year: String,
  pub license: String,
  pub github: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
  pub defaults: Defaults,
  pub variables: Variables,
  pub templates_dir: String,
}

impl FileConfig {
  /// Example contents written by `maajise config init`
  pub fn starter() -> Self {
    Self {
      defaults: Defaults {
        template: crate::templates::DEFAULT_TEMPLATE.to_string(),
        main_branch: DEFAULT_MAIN_BRANCH.to_string(),
        ..Defaults::default()
      },
      variables: Variables {
        year: chrono::Local::now().year().to_string(),
        license: "MIT".to_string(),
        ..Variables::default()
      },
      templates_dir: String::new(),
    }
  }

  pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
    let content = fs::read_to_string(path)
      .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
    // an empty file parses as YAML null
    if content.trim().is_empty() {
      return Ok(Self::default());
    }
    serde_yaml::from_str(&content)
      .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
  }

  /// Load `path`, or defaults when it does not exist
  pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
    if !path.exists() {
      tracing::debug!(path = %path.display(), "no config file, using defaults");
      return Ok(Self::default());
    }
    Self::load_from_file(path)
  }

  /// Load the user config from [`config_path`]
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_or_default(&config_path()?)
  }

  pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
    let content = self.to_yaml()?;
    crate::fsutil::write_file(path, &content)
      .map_err(|source| ConfigError::Write { path: path.to_path_buf(), source })
  }

  pub fn to_yaml(&self) -> Result<String, ConfigError> {
    Ok(serde_yaml::to_string(self)?)
  }

  /// Custom templates directory from the file, or `~/.maajise/templates`
  pub fn templates_dir(&self) -> PathBuf {
    if self.templates_dir.trim().is_empty() {
      default_custom_templates_dir()
    } else {
      expand_home(self.templates_dir.trim())
    }
  }
}

/// `$MAAJISE_CONFIG` if set, otherwise `~/.maajiserc`
pub fn config_path() -> Result<PathBuf, ConfigError> {
  if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
    return Ok(PathBuf::from(path));
  }
  dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME)).ok_or(ConfigError::NoHome)
}

fn expand_home(path: &str) -> PathBuf {
  match (path.strip_prefix("~/"), dirs::home_dir()) {
    (Some(rest), Some(home)) => home.join(rest),
    _ => PathBuf::from(path),
  }
}

/// Everything `init` needs, after command-line flags and the config file are merged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitOptions {
  pub project_name: Option<String>,
  pub in_place: bool,
  pub no_overwrite: bool,
  pub skip_git: bool,
  pub skip_beads: bool,
  pub skip_commit: bool,
  pub skip_remote: bool,
  pub skip_git_user: bool,
  pub git_name: Option<String>,
  pub git_email: Option<String>,
  pub template: Option<String>,
  pub main_branch: Option<String>,
  pub remote: Option<String>,
  pub verbose: bool,
}

impl InitOptions {
  /// Fill fields the command line left unset from the config file.
  ///
  /// Skip switches from the file are OR-ed in since the command line has no
  /// way to turn a skip off.
  pub fn merge_file_config(&mut self, file: &FileConfig) {
    fn fill(target: &mut Option<String>, value: &str) {
      if target.is_none() && !value.trim().is_empty() {
        *target = Some(value.trim().to_string());
      }
    }

    fill(&mut self.template, &file.defaults.template);
    fill(&mut self.git_name, &file.defaults.git_name);
    fill(&mut self.git_email, &file.defaults.git_email);
    fill(&mut self.main_branch, &file.defaults.main_branch);
    self.skip_remote |= file.defaults.skip_remote;
    self.skip_beads |= file.defaults.skip_beads;
  }

  pub fn template_name(&self) -> &str {
    self.template.as_deref().unwrap_or(crate::templates::DEFAULT_TEMPLATE)
  }

  pub fn main_branch(&self) -> &str {
    self.main_branch.as_deref().unwrap_or(DEFAULT_MAIN_BRANCH)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;
  use tempfile::TempDir;

  #[test]
  fn test_load_missing_file_is_default() {
    let dir = TempDir::new().unwrap();
    let config = FileConfig::load_or_default(&dir.path().join(".maajiserc")).unwrap();
    assert_eq!(config, FileConfig::default());
  }

  #[test]
  fn test_partial_file_parses() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".maajiserc");
    fs::write(
      &path,
      "defaults:\n  template: typescript\n  git_name: Test User\nvariables:\n  author: Test Author\n",
    )
    .unwrap();

    let config = FileConfig::load_from_file(&path).unwrap();
    assert_eq!(config.defaults.template, "typescript");
    assert_eq!(config.defaults.git_name, "Test User");
    assert_eq!(config.variables.author, "Test Author");
    assert!(!config.defaults.skip_beads);
    assert!(config.templates_dir.is_empty());
  }

  #[test]
  fn test_empty_file_is_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".maajiserc");
    fs::write(&path, "").unwrap();
    assert_eq!(FileConfig::load_from_file(&path).unwrap(), FileConfig::default());
  }

  #[test]
  fn test_invalid_yaml_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".maajiserc");
    fs::write(&path, "defaults: [oops").unwrap();
    let err = FileConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains(".maajiserc"));
  }

  #[test]
  fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join(".maajiserc");
    let mut config = FileConfig::starter();
    config.defaults.skip_remote = true;
    config.save_to_file(&path).unwrap();

    assert_eq!(FileConfig::load_from_file(&path).unwrap(), config);
  }

  #[test]
  fn test_starter_values() {
    let config = FileConfig::starter();
    assert_eq!(config.defaults.template, "base");
    assert_eq!(config.defaults.main_branch, "main");
    assert_eq!(config.variables.license, "MIT");
    assert_eq!(config.variables.year.len(), 4);
  }

  #[test]
  fn test_merge_fills_only_unset() {
    let mut file = FileConfig::default();
    file.defaults.template = "rust".to_string();
    file.defaults.git_name = "Config User".to_string();
    file.defaults.git_email = "config@example.com".to_string();
    file.defaults.skip_beads = true;

    let mut options =
      InitOptions { git_email: Some("user@example.com".to_string()), ..InitOptions::default() };
    options.merge_file_config(&file);

    assert_eq!(options.template_name(), "rust");
    assert_eq!(options.git_name.as_deref(), Some("Config User"));
    assert_eq!(options.git_email.as_deref(), Some("user@example.com"));
    assert!(options.skip_beads);
    assert!(!options.skip_remote);
    assert_eq!(options.main_branch(), "main");
  }

  #[test]
  fn test_merge_keeps_cli_skip() {
    let mut options = InitOptions { skip_remote: true, ..InitOptions::default() };
    options.merge_file_config(&FileConfig::default());
    assert!(options.skip_remote);
    assert_eq!(options.template_name(), "base");
  }

  #[test]
  fn test_templates_dir_default_and_override() {
    let mut config = FileConfig::default();
    assert!(config.templates_dir().ends_with(".maajise/templates"));
    config.templates_dir = "/opt/templates".to_string();
    assert_eq!(config.templates_dir(), PathBuf::from("/opt/templates"));
  }

  #[test]
  #[serial]
  fn test_config_path_env_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.yaml");
    std::env::set_var(CONFIG_ENV, &path);
    assert_eq!(config_path().unwrap(), path);
    std::env::remove_var(CONFIG_ENV);
  }
}
