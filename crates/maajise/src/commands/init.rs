//! `maajise init`: create a project directory and scaffold it.
//!
//! Steps run in a fixed order: structure, git, git user, beads, files,
//! initial commit, remote. Optional steps (beads, remote) only warn when
//! they fail; everything before them has already happened by then.

use anyhow::{anyhow, bail, Context, Result};
use std::path::{Path, PathBuf};

use super::{load_registry, project_name_of, usage_error};
use crate::config::{FileConfig, InitOptions};
use crate::git::{Git, DEFAULT_REMOTE};
use crate::prompt::Prompter;
use crate::templates::vars::files_with_vars;
use crate::templates::{Template, TemplateVars};
use crate::validate::{
  is_plausible_email, sanitize_input, validate_git_url, validate_project_name, MAX_USER_INPUT_LENGTH,
};
use crate::{beads, fsutil, git, tool};

pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit

- Add .ubsignore for UBS scanner
- Add .gitignore for version control
- Add README.md with project structure
- Initialize Beads issue tracking";

/// What `init` produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
  pub project_name: String,
  pub repo_path: PathBuf,
  pub template: String,
  pub files_written: Vec<String>,
  pub committed: bool,
  pub remote: Option<String>,
}

pub fn execute(
  cwd: &Path,
  mut options: InitOptions,
  file_config: &FileConfig,
  prompter: &dyn Prompter,
) -> Result<InitReport> {
  let project_name = resolve_project_name(cwd, &options)?;
  validate_project_name(&project_name).map_err(|e| usage_error("init", e.to_string()))?;

  options.merge_file_config(file_config);
  let registry = load_registry(file_config);
  let template = registry
    .require(options.template_name())
    .map_err(|e| usage_error("init", e.to_string()))?;

  check_dependencies(&options)?;

  herald::header(&format!("Initializing {project_name}"));

  let repo_path = create_structure(cwd, &project_name, &options)?;
  let repo = Git::new(&repo_path, options.verbose);

  init_git(&repo, &options)?;
  configure_git_user(&repo, &options, prompter)?;
  init_beads(&repo_path, &options);

  let vars = TemplateVars::from_config(&project_name, &file_config.variables);
  let files_written = write_template_files(&repo_path, template, &vars, &options)?;

  let committed = create_initial_commit(&repo, &files_written, &options)?;
  let remote = setup_remote(&repo, &project_name, &options, prompter);

  let report = InitReport {
    project_name,
    repo_path,
    template: template.name().to_string(),
    files_written,
    committed,
    remote,
  };
  show_summary(&report, &options);
  Ok(report)
}

fn resolve_project_name(cwd: &Path, options: &InitOptions) -> Result<String> {
  match (&options.project_name, options.in_place) {
    (Some(name), _) => Ok(name.clone()),
    (None, true) => Ok(project_name_of(cwd)),
    (None, false) => Err(usage_error("init", "project name required")),
  }
}

fn check_dependencies(options: &InitOptions) -> Result<()> {
  if !options.skip_git {
    tool::require(git::PROGRAM).context("git is required (install it or pass --skip-git)")?;
  }
  if !options.skip_beads {
    tool::require(beads::PROGRAM).context("beads is required (install bd or pass --skip-beads)")?;
  }
  Ok(())
}

fn create_structure(cwd: &Path, project_name: &str, options: &InitOptions) -> Result<PathBuf> {
  if options.in_place {
    if options.verbose {
      herald::verbose!("Using current directory: {}", cwd.display());
    }
    return Ok(cwd.to_path_buf());
  }

  herald::info("Creating directory structure...");
  let outer = cwd.join(project_name);
  if fsutil::path_exists(&outer) {
    bail!("directory '{project_name}' already exists");
  }

  let inner = outer.join(project_name);
  fsutil::ensure_dir(&inner).with_context(|| format!("failed to create {}", inner.display()))?;
  herald::success!("Created {project_name}/{project_name}/");
  Ok(inner)
}

fn init_git(repo: &Git, options: &InitOptions) -> Result<()> {
  if options.skip_git {
    if options.verbose {
      herald::verbose("Skipping Git (--skip-git)");
    }
    return Ok(());
  }

  if repo.is_repo() {
    herald::warn("Git already initialized");
    return Ok(());
  }

  herald::info("Initializing Git...");
  repo.init().context("git init failed")?;
  if let Err(e) = repo.set_initial_branch(options.main_branch()) {
    tracing::warn!("could not set initial branch: {e}");
    herald::warn!("Could not set initial branch to '{}'", options.main_branch());
  }
  herald::success("Git initialized");
  Ok(())
}

/// Flag or config value if present, otherwise ask
fn user_value(given: Option<&str>, label: &str, prompter: &dyn Prompter) -> Result<String> {
  let raw = match given {
    Some(value) => value.to_string(),
    None => prompter.input(label)?,
  };
  sanitize_input(&raw, MAX_USER_INPUT_LENGTH).map_err(|e| anyhow!("{label}: {e}"))
}

fn configure_git_user(repo: &Git, options: &InitOptions, prompter: &dyn Prompter) -> Result<()> {
  if options.skip_git || options.skip_git_user {
    if options.verbose {
      herald::verbose("Skipping Git user configuration");
    }
    return Ok(());
  }

  let needs_prompt = options.git_name.is_none() || options.git_email.is_none();
  if needs_prompt {
    if !prompter.is_interactive() {
      bail!(
        "git user not configured and no terminal to ask on; pass --git-name and --git-email, or --skip-git-user"
      );
    }
    herald::info("Configuring Git user...");
  }

  let name = user_value(options.git_name.as_deref(), "Git user.name (full name)", prompter)?;
  let email = user_value(options.git_email.as_deref(), "Git user.email (email address)", prompter)?;
  if !is_plausible_email(&email) {
    bail!("invalid email format: {email}");
  }

  repo.set_config("user.name", &name).context("failed to set git user.name")?;
  repo.set_config("user.email", &email).context("failed to set git user.email")?;
  herald::success!("Git user configured: {name} <{email}>");
  Ok(())
}

fn init_beads(repo_path: &Path, options: &InitOptions) {
  if options.skip_beads {
    if options.verbose {
      herald::verbose("Skipping Beads (--skip-beads)");
    }
    return;
  }

  if beads::is_initialized(repo_path) {
    herald::warn("Beads already initialized");
    return;
  }

  herald::info("Initializing Beads...");
  match beads::init(repo_path, options.verbose) {
    Ok(()) => herald::success("Beads initialized"),
    Err(e) => {
      tracing::warn!("bd init failed: {e}");
      herald::warn("Beads init failed (run 'bd init' manually)");
    }
  }
}

fn write_template_files(
  repo_path: &Path,
  template: &dyn Template,
  vars: &TemplateVars,
  options: &InitOptions,
) -> Result<Vec<String>> {
  herald::info!("Writing {} template files...", template.name());
  let mut written = Vec::new();

  for (relative, content) in files_with_vars(template, vars)? {
    let path = repo_path.join(&relative);
    if fsutil::file_exists(&path) {
      if options.no_overwrite {
        herald::warn!("Skipped {relative} (exists, --no-overwrite)");
        continue;
      }
      herald::warn!("Overwriting {relative}");
    }

    fsutil::write_file(&path, &content).with_context(|| format!("failed to write {relative}"))?;
    if options.verbose {
      herald::verbose!("Created {relative}");
    }
    written.push(relative);
  }

  herald::success!("Created {} files", written.len());
  Ok(written)
}

fn create_initial_commit(repo: &Git, written: &[String], options: &InitOptions) -> Result<bool> {
  if options.skip_git || options.skip_commit {
    if options.verbose {
      herald::verbose("Skipping initial commit");
    }
    return Ok(false);
  }

  herald::info("Creating initial commit...");
  if written.is_empty() || !repo.has_changes().context("failed to check git status")? {
    herald::warn("Nothing to commit");
    return Ok(false);
  }

  repo.add(written).context("failed to stage files")?;
  repo.commit(INITIAL_COMMIT_MESSAGE).context("failed to create initial commit")?;
  herald::success("Initial commit created");
  Ok(true)
}

/// Candidate URL from `--remote` or the interactive prompt; `None` skips the step
fn remote_candidate(
  project_name: &str,
  options: &InitOptions,
  prompter: &dyn Prompter,
) -> Option<String> {
  if let Some(url) = &options.remote {
    return Some(url.clone());
  }
  if !prompter.is_interactive() {
    if options.verbose {
      herald::verbose("Skipping remote setup (no terminal)");
    }
    return None;
  }

  herald::info("Git remote setup (optional)");
  match prompter.confirm("Add git remote?", false) {
    Ok(true) => {}
    Ok(false) => {
      herald::info("Skipped remote setup");
      return None;
    }
    Err(e) => {
      tracing::warn!("remote prompt failed: {e}");
      return None;
    }
  }

  herald::info!("Enter remote URL (e.g., https://github.com/username/{project_name}.git)");
  match prompter.input("Remote URL") {
    Ok(url) if !url.trim().is_empty() => Some(url.trim().to_string()),
    Ok(_) => {
      herald::info("Skipped remote setup");
      None
    }
    Err(e) => {
      tracing::warn!("remote prompt failed: {e}");
      None
    }
  }
}

/// Register `origin`. Never fails the run: a bad URL or a git error only skips this step.
fn setup_remote(
  repo: &Git,
  project_name: &str,
  options: &InitOptions,
  prompter: &dyn Prompter,
) -> Option<String> {
  if options.skip_git || options.skip_remote {
    if options.verbose {
      herald::verbose("Skipping remote setup");
    }
    return None;
  }

  if let Some(existing) = repo.remote_url(DEFAULT_REMOTE) {
    herald::warn!("Remote '{DEFAULT_REMOTE}' already exists: {existing}");
    return None;
  }

  let candidate = remote_candidate(project_name, options, prompter)?;
  let url = match validate_git_url(&candidate) {
    Ok(url) => url,
    Err(rejection) => {
      herald::error!("Invalid git remote URL: {rejection}");
      return None;
    }
  };

  if let Err(e) = repo.add_remote(DEFAULT_REMOTE, url) {
    tracing::warn!("git remote add failed: {e}");
    herald::warn("Failed to add remote (may already exist)");
    return None;
  }

  herald::success!("Added remote: {DEFAULT_REMOTE} → {url}");
  herald::info("Push to remote with:");
  if !options.in_place {
    herald::plain(&format!("  cd {project_name}/{project_name}"));
  }
  herald::plain(&format!("  git push -u {DEFAULT_REMOTE} {}", options.main_branch()));
  Some(url.to_string())
}

fn show_summary(report: &InitReport, options: &InitOptions) {
  herald::summary(&["✓ Repository initialized successfully!"]);
  herald::success!("Project: {}", report.project_name);
  herald::success!("Location: {}", report.repo_path.display());
  herald::success!("Template: {}", report.template);

  herald::plain("");
  herald::info("Next steps:");
  let mut steps = Vec::new();
  if !options.in_place {
    steps.push(format!("cd {0}/{0}", report.project_name));
  }
  steps.push("Create your project files".to_string());
  steps.push("Run 'ubs .' to scan for issues".to_string());
  steps.push("Run 'bd list' to manage tasks".to_string());
  for (i, step) in steps.iter().enumerate() {
    herald::plain(&format!("  {}. {step}", i + 1));
  }

  herald::plain("");
  herald::info("Quick commands:");
  herald::plain("  bd create --title \"Task name\"    # Create new task");
  herald::plain("  bd list                           # View all tasks");
  herald::plain("  ubs .                             # Scan for bugs");
}
