use anyhow::{Context, Result};
use std::path::Path;

use super::{load_registry, project_name_of, resolve_template_name, usage_error};
use crate::config::FileConfig;
use crate::fsutil;
use crate::templates::vars::files_with_vars;
use crate::templates::{TemplateFiles, TemplateVars};

#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
  /// Only these template files; all of them when empty
  pub files: Vec<String>,
  pub template: Option<String>,
  pub force: bool,
  pub dry_run: bool,
  pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateReport {
  pub updated: usize,
  pub skipped: usize,
}

/// Write the template's files into `dir`, keeping existing ones unless forced
pub fn execute(dir: &Path, options: &UpdateOptions, file_config: &FileConfig) -> Result<UpdateReport> {
  let project_name = project_name_of(dir);
  let template_name = resolve_template_name(options.template.as_deref(), dir, options.verbose);
  let registry = load_registry(file_config);
  let template = registry.require(&template_name).map_err(|e| usage_error("update", e.to_string()))?;

  let vars = TemplateVars::from_config(&project_name, &file_config.variables);
  let files = select(files_with_vars(template, &vars)?, &options.files, &template_name);
  if files.is_empty() {
    return Err(usage_error("update", "no files to update"));
  }

  let mut report = UpdateReport::default();
  for (name, content) in &files {
    let path = dir.join(name);
    let existed = fsutil::path_exists(&path);

    if options.dry_run {
      let action = match (existed, options.force) {
        (true, true) => "Would overwrite",
        (true, false) => "Would skip (exists)",
        (false, _) => "Would create",
      };
      herald::info!("[dry-run] {action}: {name}");
      continue;
    }

    if existed && !options.force {
      if options.verbose {
        herald::warn!("Skipped {name} (exists, use --force to overwrite)");
      }
      report.skipped += 1;
      continue;
    }

    fsutil::write_file(&path, content).with_context(|| format!("failed to write {name}"))?;
    if existed {
      herald::success!("Updated {name}");
    } else {
      herald::success!("Created {name}");
    }
    report.updated += 1;
  }

  if !options.dry_run {
    herald::plain("");
    herald::info!("Updated: {}, Skipped: {}", report.updated, report.skipped);
  }
  Ok(report)
}

/// Keep only the requested files, warning about names the template lacks
fn select(files: TemplateFiles, requested: &[String], template_name: &str) -> TemplateFiles {
  if requested.is_empty() {
    return files;
  }
  for name in requested.iter().filter(|name| !files.contains_key(name.as_str())) {
    herald::warn!("File {name} not in template {template_name}");
  }
  files.into_iter().filter(|(name, _)| requested.contains(name)).collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::TempDir;

  fn isolated() -> FileConfig {
    FileConfig { templates_dir: "/nonexistent/maajise-templates".to_string(), ..FileConfig::default() }
  }

  #[test]
  fn test_creates_missing_and_skips_existing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("README.md"), "mine\n").unwrap();

    let report = execute(dir.path(), &UpdateOptions::default(), &isolated()).unwrap();
    assert_eq!(report, UpdateReport { updated: 2, skipped: 1 });
    assert_eq!(fs::read_to_string(dir.path().join("README.md")).unwrap(), "mine\n");
  }

  #[test]
  fn test_force_overwrites_all() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("README.md"), "mine\n").unwrap();
    let options = UpdateOptions { force: true, ..UpdateOptions::default() };
    let report = execute(dir.path(), &options, &isolated()).unwrap();
    assert_eq!(report, UpdateReport { updated: 3, skipped: 0 });
    assert_ne!(fs::read_to_string(dir.path().join("README.md")).unwrap(), "mine\n");
  }

  #[test]
  fn test_specific_files_only() {
    let dir = TempDir::new().unwrap();
    let options = UpdateOptions {
      files: vec![".gitignore".to_string(), "missing.txt".to_string()],
      ..UpdateOptions::default()
    };
    let report = execute(dir.path(), &options, &isolated()).unwrap();
    assert_eq!(report.updated, 1);
    assert!(dir.path().join(".gitignore").exists());
    assert!(!dir.path().join("README.md").exists());
  }

  #[test]
  fn test_no_matching_files_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let options = UpdateOptions { files: vec!["missing.txt".to_string()], ..UpdateOptions::default() };
    let err = execute(dir.path(), &options, &isolated()).unwrap_err();
    assert!(err.to_string().starts_with("no files to update"));
  }

  #[test]
  fn test_unknown_template_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let options = UpdateOptions { template: Some("cobol".to_string()), ..UpdateOptions::default() };
    let err = execute(dir.path(), &options, &isolated()).unwrap_err();
    assert!(err.downcast_ref::<super::super::UsageError>().is_some());
  }

  #[test]
  fn test_dry_run_counts_nothing() {
    let dir = TempDir::new().unwrap();
    let options =
      UpdateOptions { dry_run: true, template: Some("go".to_string()), ..UpdateOptions::default() };
    let report = execute(dir.path(), &options, &isolated()).unwrap();
    assert_eq!(report, UpdateReport::default());
    assert!(!dir.path().join("go.mod").exists());
  }

  #[test]
  fn test_variable_cannot_move_file_outside_project() {
    let dir = TempDir::new().unwrap();
    let templates = dir.path().join("templates");
    fs::create_dir(&templates).unwrap();
    let yaml = "name: team\nfiles:\n  \"{{.GitHub}}/pwned.txt\": x\n";
    fs::write(templates.join("team.yaml"), yaml).unwrap();
    let outside = dir.path().join("outside");
    let project = dir.path().join("svc");
    fs::create_dir(&project).unwrap();

    let mut config =
      FileConfig { templates_dir: templates.display().to_string(), ..FileConfig::default() };
    config.variables.github = outside.display().to_string();
    let options = UpdateOptions { template: Some("team".to_string()), ..UpdateOptions::default() };

    let err = execute(&project, &options, &config).unwrap_err();
    assert!(err.to_string().contains("outside the project"));
    assert!(!outside.join("pwned.txt").exists());
  }

  #[test]
  fn test_detected_template_files() {
    let dir = TempDir::new().unwrap();
    let project = dir.path().join("svc");
    fs::create_dir(&project).unwrap();
    fs::write(project.join("package.json"), "{}").unwrap();
    execute(&project, &UpdateOptions::default(), &isolated()).unwrap();
    assert!(project.join("src/controllers/.gitkeep").exists());
    assert_eq!(fs::read_to_string(project.join("package.json")).unwrap(), "{}");
  }
}
