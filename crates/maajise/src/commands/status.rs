use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::project_name_of;
use crate::detect::detect_template;
use crate::fsutil;
use crate::templates::COMMON_FILES;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectStatus {
  pub project: String,
  pub path: PathBuf,
  pub git: bool,
  pub beads: bool,
  pub template: String,
  /// Key file -> present
  pub files: BTreeMap<String, bool>,
}

pub fn collect(dir: &Path) -> ProjectStatus {
  ProjectStatus {
    project: project_name_of(dir),
    path: dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf()),
    git: fsutil::dir_exists(&dir.join(".git")),
    beads: fsutil::dir_exists(&dir.join(".beads")),
    template: detect_template(dir).to_string(),
    files: COMMON_FILES
      .iter()
      .map(|file| (file.to_string(), fsutil::file_exists(&dir.join(file))))
      .collect(),
  }
}

pub fn execute(dir: &Path, json: bool) -> Result<ProjectStatus> {
  let status = collect(dir);
  if json {
    println!("{}", serde_json::to_string_pretty(&status)?);
    return Ok(status);
  }

  herald::plain(&format!("Project:  {}", status.project));
  herald::plain(&format!("Path:     {}", status.path.display()));
  herald::plain("");

  if status.git {
    herald::success("Git:      initialized");
  } else {
    herald::warn("Git:      not initialized");
  }
  if status.beads {
    herald::success("Beads:    initialized");
  } else {
    herald::warn("Beads:    not initialized");
  }
  herald::plain(&format!("Template: {}", status.template));

  herald::plain("");
  herald::plain("Files:");
  for (file, present) in &status.files {
    let mark = if *present { "✓" } else { "✗" };
    herald::plain(&format!("  {mark} {file}"));
  }
  Ok(status)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::TempDir;

  #[test]
  fn test_collect() {
    let dir = TempDir::new().unwrap();
    let project = dir.path().join("my-app");
    fs::create_dir_all(project.join(".git")).unwrap();
    fs::write(project.join("README.md"), "").unwrap();
    fs::write(project.join("pyproject.toml"), "").unwrap();

    let status = collect(&project);
    assert_eq!(status.project, "my-app");
    assert!(status.git);
    assert!(!status.beads);
    assert_eq!(status.template, "python");
    assert_eq!(status.files["README.md"], true);
    assert_eq!(status.files[".gitignore"], false);
  }

  #[test]
  fn test_json_shape() {
    let dir = TempDir::new().unwrap();
    let value = serde_json::to_value(collect(dir.path())).unwrap();
    assert_eq!(value["git"], false);
    assert_eq!(value["template"], "base");
    assert_eq!(value["files"][".ubsignore"], false);
  }
}
