//! Thin wrapper over the `git` commands scaffolding needs.

use std::path::PathBuf;

use crate::tool::{self, ToolError};

pub const PROGRAM: &str = "git";
pub const DEFAULT_REMOTE: &str = "origin";

pub fn is_available() -> bool {
  tool::is_available(PROGRAM)
}

/// A repository (or soon-to-be repository) at `dir`
#[derive(Debug, Clone)]
pub struct Git {
  dir: PathBuf,
  verbose: bool,
}

impl Git {
  pub fn new(dir: impl Into<PathBuf>, verbose: bool) -> Self {
    Self { dir: dir.into(), verbose }
  }

  fn run(&self, args: &[&str]) -> Result<(), ToolError> {
    tool::run(PROGRAM, args, Some(&self.dir), self.verbose)
  }

  fn output(&self, args: &[&str]) -> Result<String, ToolError> {
    tool::output(PROGRAM, args, Some(&self.dir))
  }

  /// `.git` exists in the directory
  pub fn is_repo(&self) -> bool {
    self.dir.join(".git").exists()
  }

  pub fn init(&self) -> Result<(), ToolError> {
    self.run(&["init"])
  }

  /// Point HEAD at `branch` before the first commit exists
  pub fn set_initial_branch(&self, branch: &str) -> Result<(), ToolError> {
    let head = format!("refs/heads/{branch}");
    self.run(&["symbolic-ref", "HEAD", &head])
  }

  pub fn set_config(&self, key: &str, value: &str) -> Result<(), ToolError> {
    self.run(&["config", key, value])
  }

  /// Value of `key`, or `None` when unset
  pub fn get_config(&self, key: &str) -> Option<String> {
    match self.output(&["config", key]) {
      Ok(value) if !value.is_empty() => Some(value),
      Ok(_) => None,
      Err(e) => {
        tracing::debug!("git config {key} unavailable: {e}");
        None
      }
    }
  }

  pub fn has_changes(&self) -> Result<bool, ToolError> {
    Ok(!self.output(&["status", "--porcelain"])?.is_empty())
  }

  pub fn add<S: AsRef<str>>(&self, files: &[S]) -> Result<(), ToolError> {
    let mut args = vec!["add", "--"];
    args.extend(files.iter().map(AsRef::as_ref));
    self.run(&args)
  }

  pub fn commit(&self, message: &str) -> Result<(), ToolError> {
    self.run(&["commit", "-m", message])
  }

  /// URL of `name`, or `None` when no such remote exists
  pub fn remote_url(&self, name: &str) -> Option<String> {
    self.output(&["remote", "get-url", name]).ok().filter(|url| !url.is_empty())
  }

  /// `url` must already have passed [`crate::validate::validate_git_url`]
  pub fn add_remote(&self, name: &str, url: &str) -> Result<(), ToolError> {
    self.run(&["remote", "add", name, url])
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::TempDir;

  fn repo() -> Option<(TempDir, Git)> {
    if !is_available() {
      return None;
    }
    let dir = TempDir::new().unwrap();
    let git = Git::new(dir.path(), false);
    git.init().unwrap();
    git.set_config("user.name", "Test User").unwrap();
    git.set_config("user.email", "test@example.com").unwrap();
    git.set_config("commit.gpgsign", "false").unwrap();
    Some((dir, git))
  }

  #[test]
  fn test_is_repo() {
    let dir = TempDir::new().unwrap();
    let git = Git::new(dir.path(), false);
    assert!(!git.is_repo());
    fs::create_dir(dir.path().join(".git")).unwrap();
    assert!(git.is_repo());
  }

  #[test]
  fn test_config_roundtrip() {
    let Some((_dir, git)) = repo() else { return };
    assert_eq!(git.get_config("user.name").as_deref(), Some("Test User"));
    assert_eq!(git.get_config("maajise.unset-key"), None);
  }

  #[test]
  fn test_branch_add_commit() {
    let Some((dir, git)) = repo() else { return };
    git.set_initial_branch("trunk").unwrap();
    fs::write(dir.path().join("README.md"), "# x\n").unwrap();
    assert!(git.has_changes().unwrap());

    git.add(&["README.md"]).unwrap();
    git.commit("Initial commit").unwrap();
    assert!(!git.has_changes().unwrap());

    let head = tool::output(PROGRAM, &["rev-parse", "--abbrev-ref", "HEAD"], Some(dir.path())).unwrap();
    assert_eq!(head, "trunk");
  }

  #[test]
  fn test_remote_url_passed_verbatim() {
    let Some((_dir, git)) = repo() else { return };
    assert_eq!(git.remote_url(DEFAULT_REMOTE), None);
    git.add_remote(DEFAULT_REMOTE, "git@github.com:user/repo.git").unwrap();
    assert_eq!(git.remote_url(DEFAULT_REMOTE).as_deref(), Some("git@github.com:user/repo.git"));
    assert!(git.add_remote(DEFAULT_REMOTE, "https://github.com/other/repo").is_err());
  }
}
