use std::fs;
use std::io;
use std::path::Path;

/// Exists and is a regular file (following symlinks)
pub fn file_exists(path: &Path) -> bool {
  path.is_file()
}

pub fn dir_exists(path: &Path) -> bool {
  path.is_dir()
}

pub fn path_exists(path: &Path) -> bool {
  path.exists()
}

/// Create `path` and its parents. Fails if it exists as something other than a directory.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
  if dir_exists(path) {
    return Ok(());
  }
  if path_exists(path) {
    return Err(io::Error::new(
      io::ErrorKind::AlreadyExists,
      format!("{} exists and is not a directory", path.display()),
    ));
  }
  fs::create_dir_all(path)
}

pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
  match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
    _ => Ok(()),
  }
}

/// Write `content` to `path`, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> io::Result<()> {
  ensure_parent_dir(path)?;
  fs::write(path, content)
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  #[test]
  fn test_exists_helpers() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("file.txt");
    fs::write(&file, "x").unwrap();

    assert!(file_exists(&file));
    assert!(!dir_exists(&file));
    assert!(path_exists(&file));

    assert!(!file_exists(dir.path()));
    assert!(dir_exists(dir.path()));
    assert!(path_exists(dir.path()));

    let missing = dir.path().join("missing");
    assert!(!file_exists(&missing) && !dir_exists(&missing) && !path_exists(&missing));
  }

  #[test]
  fn test_ensure_dir_nested_and_idempotent() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b").join("c");
    ensure_dir(&nested).unwrap();
    ensure_dir(&nested).unwrap();
    assert!(nested.is_dir());
  }

  #[test]
  fn test_ensure_dir_over_file_fails() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("taken");
    fs::write(&file, "").unwrap();
    let err = ensure_dir(&file).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
  }

  #[test]
  fn test_ensure_parent_dir_relative_name_is_noop() {
    ensure_parent_dir(Path::new("file.txt")).unwrap();
  }

  #[test]
  fn test_write_file_creates_parents() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("src").join("config").join(".gitkeep");
    write_file(&target, "").unwrap();
    assert!(file_exists(&target));

    let blocked = dir.path().join("src").join("config").join(".gitkeep").join("child");
    assert!(write_file(&blocked, "x").is_err());
  }
}
