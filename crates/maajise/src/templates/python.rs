use super::{with_project, Template, TemplateFiles};

/// pip/venv project with a `src/` package
pub struct PythonTemplate;

impl Template for PythonTemplate {
  fn name(&self) -> &str {
    "python"
  }

  fn description(&self) -> &str {
    "Python project with pip/venv configuration"
  }

  fn dependencies(&self) -> Vec<&str> {
    vec!["git", "bd", "python3", "pip"]
  }

  fn files(&self, project_name: &str) -> TemplateFiles {
    TemplateFiles::from([
      (".gitignore".to_string(), GITIGNORE.to_string()),
      (".ubsignore".to_string(), UBSIGNORE.to_string()),
      ("README.md".to_string(), with_project(README, project_name)),
      ("pyproject.toml".to_string(), with_project(PYPROJECT, project_name)),
      ("requirements.txt".to_string(), REQUIREMENTS.to_string()),
      ("src/__init__.py".to_string(), String::new()),
      ("src/main.py".to_string(), MAIN_PY.to_string()),
    ])
  }
}

const GITIGNORE: &str = r#"# Python
__pycache__/
*.py[cod]
*$py.class
*.so

# Virtual environments
venv/
.venv/
ENV/
env/

# Distribution
dist/
build/
*.egg-info/
*.egg

# IDE
.vscode/
.idea/
*.swp
*.swo

# Testing
.pytest_cache/
.coverage
htmlcov/
.tox/

# Environment
.env
.env.local

# OS
.DS_Store
Thumbs.db

# Type checking
.mypy_cache/
"#;

const UBSIGNORE: &str = r#"# UBS Scanner Ignore File
__pycache__/
venv/
.venv/
dist/
build/
*.egg-info/
.git/
.vscode/
.idea/
.beads/
.claude/
.pytest_cache/
htmlcov/
*.md
*.txt
*.toml
*.cfg
"#;

const README: &str = r#"# {{.ProjectName}}

A Python project.

## Setup

```bash
# Create virtual environment
python -m venv venv

# Activate (Linux/Mac)
source venv/bin/activate

# Activate (Windows)
venv\Scripts\activate

# Install dependencies
pip install -r requirements.txt
```

## Development

```bash
# Run the application
python src/main.py

# Run tests
pytest

# Type checking
mypy src/
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

const PYPROJECT: &str = r#"[build-system]
requires = ["setuptools>=61.0"]
build-backend = "setuptools.build_meta"

[project]
name = "{{.ProjectName}}"
version = "0.1.0"
description = ""
readme = "README.md"
requires-python = ">=3.9"
dependencies = []

[project.optional-dependencies]
dev = [
    "pytest",
    "mypy",
]
"#;

const REQUIREMENTS: &str = r#"# Core dependencies
# Add your dependencies here

# Development dependencies
pytest>=7.0.0
mypy>=1.0.0
"#;

const MAIN_PY: &str = r#""""Main entry point."""


def main() -> None:
    """Run the application."""
    print("Hello, Python!")


if __name__ == "__main__":
    main()
"#;
