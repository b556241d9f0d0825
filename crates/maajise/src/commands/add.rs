use anyhow::{anyhow, bail, Context, Result};
use std::path::Path;

use super::{load_registry, project_name_of, resolve_template_name, usage_error};
use crate::config::FileConfig;
use crate::git::Git;
use crate::templates::vars::files_with_vars;
use crate::templates::{TemplateFiles, TemplateVars};
use crate::{beads, fsutil};

const TOOLING_ITEMS: [(&str, &str); 3] = [
  ("git", "Initialize Git repository"),
  ("beads", "Initialize Beads issue tracking"),
  ("ubs", "Add .ubsignore file"),
];

const FILE_ITEMS: [(&str, &str); 3] = [
  (".gitignore", "Add .gitignore from template"),
  (".ubsignore", "Add .ubsignore from template"),
  ("readme", "Add README.md from template"),
];

#[derive(Debug, Clone, Default)]
pub struct AddOptions {
  pub items: Vec<String>,
  pub template: Option<String>,
  pub force: bool,
  pub dry_run: bool,
  pub verbose: bool,
}

/// What an item on the command line refers to
#[derive(Debug, Clone, PartialEq, Eq)]
enum Item {
  Git,
  Beads,
  File(String),
}

impl Item {
  fn parse(raw: &str) -> Self {
    match raw.to_lowercase().as_str() {
      "git" => Item::Git,
      "beads" => Item::Beads,
      "ubs" | ".ubsignore" | "ubsignore" => Item::File(".ubsignore".to_string()),
      ".gitignore" | "gitignore" => Item::File(".gitignore".to_string()),
      "readme" | "readme.md" => Item::File("README.md".to_string()),
      _ => Item::File(raw.to_string()),
    }
  }
}

pub fn print_items() {
  herald::plain("Usage: maajise add <item>... [--template T] [--force] [--dry-run]");
  herald::plain("");
  herald::plain("Tooling:");
  for (name, description) in TOOLING_ITEMS {
    herald::plain(&format!("  {name:<12}  {description}"));
  }
  herald::plain("");
  herald::plain("Files:");
  for (name, description) in FILE_ITEMS {
    herald::plain(&format!("  {name:<12}  {description}"));
  }
  herald::plain("  <path>        Any file of the project's template");
}

/// Add each item to the project at `dir`.
///
/// A failing item is reported and the rest still run; the command fails at
/// the end if any item did.
pub fn execute(dir: &Path, options: &AddOptions, file_config: &FileConfig) -> Result<()> {
  if options.items.is_empty() {
    print_items();
    return Ok(());
  }

  let project_name = project_name_of(dir);
  let template_name = resolve_template_name(options.template.as_deref(), dir, options.verbose);
  let registry = load_registry(file_config);
  let template = registry.require(&template_name).map_err(|e| usage_error("add", e.to_string()))?;
  let vars = TemplateVars::from_config(&project_name, &file_config.variables);
  let files = files_with_vars(template, &vars)?;

  let mut failed = 0;
  for raw in &options.items {
    let result = match Item::parse(raw) {
      Item::Git => add_git(dir, file_config, options),
      Item::Beads => add_beads(dir, options),
      Item::File(name) => add_file(dir, &name, &files, &template_name, options),
    };
    if let Err(e) = result {
      herald::error!("Failed to add {raw}: {e:#}");
      failed += 1;
    }
  }

  if failed > 0 {
    bail!("{failed} of {} items could not be added", options.items.len());
  }
  Ok(())
}

fn add_git(dir: &Path, file_config: &FileConfig, options: &AddOptions) -> Result<()> {
  let repo = Git::new(dir, options.verbose);
  if repo.is_repo() {
    herald::warn("Git already initialized");
    return Ok(());
  }
  if options.dry_run {
    herald::info("[dry-run] Would initialize Git repository");
    return Ok(());
  }

  repo.init().context("git init failed")?;
  let branch = match file_config.defaults.main_branch.trim() {
    "" => crate::config::DEFAULT_MAIN_BRANCH,
    branch => branch,
  };
  if let Err(e) = repo.set_initial_branch(branch) {
    tracing::warn!("could not set initial branch: {e}");
  }
  herald::success("Initialized Git repository");
  Ok(())
}

fn add_beads(dir: &Path, options: &AddOptions) -> Result<()> {
  if beads::is_initialized(dir) {
    herald::warn("Beads already initialized");
    return Ok(());
  }
  if options.dry_run {
    herald::info("[dry-run] Would initialize Beads issue tracking");
    return Ok(());
  }

  beads::init(dir, options.verbose).context("bd init failed")?;
  herald::success("Initialized Beads issue tracking");
  Ok(())
}

fn add_file(
  dir: &Path,
  name: &str,
  files: &TemplateFiles,
  template_name: &str,
  options: &AddOptions,
) -> Result<()> {
  let content = files
    .get(name)
    .ok_or_else(|| anyhow!("file {name} not found in template {template_name}"))?;
  let path = dir.join(name);
  let existed = fsutil::file_exists(&path);

  if existed && !options.force {
    herald::warn!("Skipped {name} (exists, use --force to overwrite)");
    return Ok(());
  }
  if options.dry_run {
    let action = if existed { "overwrite" } else { "create" };
    herald::info!("[dry-run] Would {action}: {name}");
    return Ok(());
  }

  fsutil::write_file(&path, content).with_context(|| format!("failed to write {name}"))?;
  if existed {
    herald::success!("Updated {name}");
  } else {
    herald::success!("Created {name}");
  }
  Ok(())
}
