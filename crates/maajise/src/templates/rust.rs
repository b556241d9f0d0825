use super::{with_project, Template, TemplateFiles};

/// Cargo binary crate
pub struct RustTemplate;

impl Template for RustTemplate {
  fn name(&self) -> &str {
    "rust"
  }

  fn description(&self) -> &str {
    "Rust project with Cargo configuration"
  }

  fn dependencies(&self) -> Vec<&str> {
    vec!["git", "bd", "cargo", "rustc"]
  }

  fn files(&self, project_name: &str) -> TemplateFiles {
    TemplateFiles::from([
      (".gitignore".to_string(), GITIGNORE.to_string()),
      (".ubsignore".to_string(), UBSIGNORE.to_string()),
      ("README.md".to_string(), with_project(README, project_name)),
      ("Cargo.toml".to_string(), with_project(CARGO_TOML, project_name)),
      ("src/main.rs".to_string(), MAIN_RS.to_string()),
    ])
  }
}

const GITIGNORE: &str = r#"# Rust
/target/
Cargo.lock

# IDE
.vscode/
.idea/
*.swp
*.swo

# OS
.DS_Store
Thumbs.db

# Environment
.env
"#;

const UBSIGNORE: &str = r#"# UBS Scanner Ignore File
target/
.git/
.vscode/
.idea/
.beads/
.claude/
*.md
*.toml
*.lock
"#;

const README: &str = r#"# {{.ProjectName}}

A Rust project.

## Setup

```bash
# Build the project
cargo build

# Run the project
cargo run
```

## Development

```bash
# Run in release mode
cargo run --release

# Run tests
cargo test

# Check code without building
cargo check

# Format code
cargo fmt

# Lint
cargo clippy
```

## Issue Tracking

```bash
bd list           # View issues
bd create --title "Task"  # Create issue
```

## Code Quality

```bash
ubs .             # Scan for bugs
```
"#;

const CARGO_TOML: &str = r#"[package]
name = "{{.ProjectName}}"
version = "0.1.0"
edition = "2021"

[dependencies]
"#;

const MAIN_RS: &str = r#"fn main() {
    println!("Hello, Rust!");
}
"#;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_rust_files() {
    let files = RustTemplate.files("crab");
    assert!(files["Cargo.toml"].contains("name = \"crab\""));
    assert!(files["src/main.rs"].contains("fn main()"));
    assert!(files[".gitignore"].contains("/target/"));
  }
}
