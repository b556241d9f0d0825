use anyhow::{bail, Result};
use serde::Serialize;
use std::path::PathBuf;

use crate::config::{config_path, FileConfig};
use crate::tool;

/// An external program maajise relies on
#[derive(Debug, Clone, Copy)]
pub struct Dependency {
  pub name: &'static str,
  pub program: &'static str,
  pub args: &'static [&'static str],
  pub required: bool,
}

pub const DEPENDENCIES: [Dependency; 4] = [
  Dependency { name: "git", program: "git", args: &["--version"], required: true },
  Dependency { name: "bd (Beads)", program: "bd", args: &["--version"], required: true },
  Dependency { name: "ubs", program: "ubs", args: &["--version"], required: false },
  Dependency { name: "go", program: "go", args: &["version"], required: false },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyCheck {
  pub name: String,
  pub required: bool,
  pub found: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub version: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigReport {
  pub path: Option<PathBuf>,
  pub exists: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
  pub templates_dir: PathBuf,
  pub templates_dir_exists: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorReport {
  pub dependencies: Vec<DependencyCheck>,
  pub config: ConfigReport,
}

impl DoctorReport {
  pub fn required_missing(&self) -> bool {
    self.dependencies.iter().any(|d| d.required && !d.found)
  }

  pub fn all_found(&self) -> bool {
    self.dependencies.iter().all(|d| d.found)
  }
}

pub fn check(dependency: &Dependency) -> DependencyCheck {
  let result = tool::version(dependency.program, dependency.args);
  DependencyCheck {
    name: dependency.name.to_string(),
    required: dependency.required,
    found: result.is_ok(),
    error: result.as_ref().err().map(ToString::to_string),
    version: result.ok(),
  }
}

fn check_config() -> ConfigReport {
  let path = config_path().ok();
  let (config, error) = match FileConfig::load() {
    Ok(config) => (config, None),
    Err(e) => (FileConfig::default(), Some(e.to_string())),
  };
  let templates_dir = config.templates_dir();
  ConfigReport {
    exists: path.as_ref().is_some_and(|p| p.is_file()),
    path,
    error,
    templates_dir_exists: templates_dir.is_dir(),
    templates_dir,
  }
}

pub fn collect() -> DoctorReport {
  DoctorReport {
    dependencies: DEPENDENCIES.iter().map(check).collect(),
    config: check_config(),
  }
}

pub fn execute(json: bool, verbose: bool) -> Result<DoctorReport> {
  let report = collect();
  if json {
    println!("{}", serde_json::to_string_pretty(&report)?);
  } else {
    print_report(&report, verbose);
  }

  if report.required_missing() {
    bail!("required dependencies missing");
  }
  Ok(report)
}

fn print_report(report: &DoctorReport, verbose: bool) {
  herald::info("Checking maajise dependencies...");
  herald::plain("");

  for dep in &report.dependencies {
    let need = if dep.required { "required" } else { "optional" };
    match (&dep.version, dep.required) {
      (Some(version), _) => herald::success!("{}: {version}", dep.name),
      (None, true) => herald::error!("{}: not found ({need})", dep.name),
      (None, false) => herald::warn!("{}: not found ({need})", dep.name),
    }
    if let (true, Some(error)) = (verbose, &dep.error) {
      herald::verbose!("  {error}");
    }
  }

  herald::plain("");
  herald::info("Configuration:");
  let config = &report.config;
  let shown = config.path.as_ref().map_or_else(|| "unknown".to_string(), |p| p.display().to_string());
  match (&config.error, config.exists) {
    (Some(error), _) => herald::error!("Config file: {error}"),
    (None, true) => herald::success!("Config file: {shown}"),
    (None, false) => herald::warn!("Config file: not found ({shown})"),
  }
  if config.templates_dir_exists {
    herald::success!("Custom templates: {}", config.templates_dir.display());
  } else if verbose {
    herald::verbose!("Custom templates: {} (not present)", config.templates_dir.display());
  }

  herald::plain("");
  if report.required_missing() {
    return;
  }
  if report.all_found() {
    herald::success("All checks passed!");
  } else {
    herald::info("Some optional dependencies missing (maajise will still work)");
  }
}
