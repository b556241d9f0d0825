//! `maajise config`: manage `~/.maajiserc`.

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use crate::config::{config_path, FileConfig};

/// Write the starter config, refusing to replace an existing file unless forced
pub fn init(force: bool) -> Result<PathBuf> {
  let path = config_path()?;
  if path.exists() && !force {
    bail!("config file already exists at {} (use --force to overwrite)", path.display());
  }
  FileConfig::starter().save_to_file(&path).context("failed to create config file")?;
  herald::success!("Created config file: {}", path.display());
  Ok(path)
}

/// Print the effective configuration as YAML
pub fn show() -> Result<()> {
  let config = FileConfig::load()?;
  print!("{}", config.to_yaml()?);
  Ok(())
}

pub fn path() -> Result<()> {
  println!("{}", config_path()?.display());
  Ok(())
}
