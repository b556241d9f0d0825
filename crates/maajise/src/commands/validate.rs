use anyhow::{bail, Result};
use std::path::Path;

use super::{load_registry, project_name_of};
use crate::config::FileConfig;
use crate::detect::detect_template;
use crate::fsutil;
use crate::templates::TemplateRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
  Pass,
  Warn,
  Fail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
  pub name: String,
  pub status: CheckStatus,
  pub message: String,
}

impl Check {
  fn new(name: impl Into<String>, status: CheckStatus, message: impl Into<String>) -> Self {
    Self { name: name.into(), status, message: message.into() }
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
  pub passed: usize,
  pub warnings: usize,
  pub failed: usize,
}

impl Tally {
  pub fn of(checks: &[Check]) -> Self {
    checks.iter().fold(Self::default(), |mut tally, check| {
      match check.status {
        CheckStatus::Pass => tally.passed += 1,
        CheckStatus::Warn => tally.warnings += 1,
        CheckStatus::Fail => tally.failed += 1,
      }
      tally
    })
  }
}

/// Everything `validate` looks at, in display order
pub fn run_checks(dir: &Path, registry: &TemplateRegistry, verbose: bool) -> Vec<Check> {
  use CheckStatus::*;
  let mut checks = Vec::new();

  checks.push(if fsutil::dir_exists(&dir.join(".git")) {
    Check::new("Git", Pass, "Repository initialized")
  } else {
    Check::new("Git", Fail, "Not a git repository (run 'git init')")
  });

  checks.push(if fsutil::dir_exists(&dir.join(".beads")) {
    Check::new("Beads", Pass, "Issue tracking initialized")
  } else {
    Check::new("Beads", Warn, "Not initialized (run 'bd init')")
  });

  for file in [".gitignore", "README.md"] {
    checks.push(if fsutil::file_exists(&dir.join(file)) {
      Check::new(file, Pass, "Present")
    } else {
      Check::new(file, Warn, "Missing")
    });
  }

  if fsutil::file_exists(&dir.join(".ubsignore")) {
    checks.push(Check::new(".ubsignore", Pass, "Present"));
  } else if verbose {
    checks.push(Check::new(".ubsignore", Warn, "Missing (recommended)"));
  }

  let template_name = detect_template(dir);
  if verbose {
    herald::info!("Detected template: {template_name}");
  }
  if let Some(template) = registry.get(template_name) {
    for file in template.files(&project_name_of(dir)).into_keys() {
      if crate::templates::COMMON_FILES.contains(&file.as_str()) {
        continue;
      }
      if fsutil::file_exists(&dir.join(&file)) {
        if verbose {
          checks.push(Check::new(file, Pass, "Present"));
        }
      } else {
        checks.push(Check::new(file, Warn, format!("Missing (expected for {template_name} template)")));
      }
    }
  }

  checks
}

pub fn execute(dir: &Path, strict: bool, verbose: bool, file_config: &FileConfig) -> Result<Tally> {
  herald::info!("Validating project: {}", project_name_of(dir));
  herald::plain("");

  let registry = load_registry(file_config);
  let checks = run_checks(dir, &registry, verbose);
  for check in &checks {
    let line = format!("{}: {}", check.name, check.message);
    match check.status {
      CheckStatus::Pass => herald::success(&line),
      CheckStatus::Warn => herald::warn(&line),
      CheckStatus::Fail => herald::error(&line),
    }
  }

  let tally = Tally::of(&checks);
  herald::plain("");
  herald::info!(
    "Results: {} passed, {} warnings, {} failed",
    tally.passed,
    tally.warnings,
    tally.failed
  );

  if tally.failed > 0 {
    bail!("validation failed with {} errors", tally.failed);
  }
  if strict && tally.warnings > 0 {
    bail!("validation failed with {} warnings (strict mode)", tally.warnings);
  }
  Ok(tally)
}
