//! Beads (`bd`) issue tracker setup.

use std::path::Path;

use crate::tool::{self, ToolError};

pub const PROGRAM: &str = "bd";

/// `.beads` exists in `dir`
pub fn is_initialized(dir: &Path) -> bool {
  dir.join(".beads").exists()
}

pub fn init(dir: &Path, verbose: bool) -> Result<(), ToolError> {
  tool::run(PROGRAM, &["init"], Some(dir), verbose)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::TempDir;

  #[test]
  fn test_is_initialized() {
    let dir = TempDir::new().unwrap();
    assert!(!is_initialized(dir.path()));
    fs::create_dir(dir.path().join(".beads")).unwrap();
    assert!(is_initialized(dir.path()));
  }
}
