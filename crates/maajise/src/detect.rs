//! Guess a project's template from the marker files in its root.

use std::path::Path;

use crate::templates::DEFAULT_TEMPLATE;

/// Checked in order; the first marker present wins
const MARKERS: [(&str, &str); 7] = [
  ("package.json", "typescript"),
  ("tsconfig.json", "typescript"),
  ("Cargo.toml", "rust"),
  ("pyproject.toml", "python"),
  ("requirements.txt", "python"),
  ("composer.json", "php"),
  ("go.mod", "go"),
];

pub fn detect_template(dir: &Path) -> &'static str {
  MARKERS
    .iter()
    .find(|(marker, _)| crate::fsutil::file_exists(&dir.join(marker)))
    .map_or(DEFAULT_TEMPLATE, |(_, template)| template)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::TempDir;

  fn detect_with(files: &[&str]) -> &'static str {
    let dir = TempDir::new().unwrap();
    for file in files {
      fs::write(dir.path().join(file), "").unwrap();
    }
    detect_template(dir.path())
  }

  #[test]
  fn test_single_markers() {
    assert_eq!(detect_with(&["package.json"]), "typescript");
    assert_eq!(detect_with(&["tsconfig.json"]), "typescript");
    assert_eq!(detect_with(&["Cargo.toml"]), "rust");
    assert_eq!(detect_with(&["pyproject.toml"]), "python");
    assert_eq!(detect_with(&["requirements.txt"]), "python");
    assert_eq!(detect_with(&["composer.json"]), "php");
    assert_eq!(detect_with(&["go.mod"]), "go");
    assert_eq!(detect_with(&[]), "base");
  }

  #[test]
  fn test_priority() {
    assert_eq!(detect_with(&["go.mod", "Cargo.toml"]), "rust");
    assert_eq!(detect_with(&["Cargo.toml", "package.json"]), "typescript");
    assert_eq!(detect_with(&["composer.json", "requirements.txt"]), "python");
  }

  #[test]
  fn test_directory_marker_is_ignored() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("Cargo.toml")).unwrap();
    assert_eq!(detect_template(dir.path()), "base");
  }
}
