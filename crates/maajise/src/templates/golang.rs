use super::{with_project, Template, TemplateFiles};

/// Standard Go project layout (`cmd/`, `internal/`, `pkg/`)
pub struct GoTemplate;

/// Layout directories created empty, each holding a `.gitkeep`
const KEEP_DIRS: [&str; 8] = ["api", "build", "configs", "docs", "internal", "pkg", "scripts", "test"];

impl Template for GoTemplate {
  fn name(&self) -> &str {
    "go"
  }

  fn description(&self) -> &str {
    "Go project with Standard Go Project Layout (cmd/, internal/, pkg/)"
  }

  fn dependencies(&self) -> Vec<&str> {
    vec!["git", "bd", "go"]
  }

  fn files(&self, project_name: &str) -> TemplateFiles {
    let mut files = TemplateFiles::from([
      (".gitignore".to_string(), GITIGNORE.to_string()),
      (".ubsignore".to_string(), UBSIGNORE.to_string()),
      ("README.md".to_string(), with_project(README, project_name)),
      ("go.mod".to_string(), with_project(GO_MOD, project_name)),
      (format!("cmd/{project_name}/main.go"), MAIN_GO.to_string()),
    ]);
    for dir in KEEP_DIRS {
      files.insert(format!("{dir}/.gitkeep"), String::new());
    }
    files
  }
}

const GITIGNORE: &str = r#"# Go
/bin/
/dist/
*.exe
*.exe~
*.dll
*.so
*.dylib
*.test
*.out

# Dependency directories
/vendor/

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

# Coverage
coverage.out
coverage.html
"#;

const UBSIGNORE: &str = r#"# UBS Scanner Ignore File
bin/
dist/
vendor/
.git/
.vscode/
.idea/
.beads/
.claude/
*.md
*.sum
*.mod
"#;

const README: &str = r#"# {{.ProjectName}}

## Project Structure

This project follows the [Standard Go Project Layout](https://github.com/golang-standards/project-layout).

| Directory | Purpose |
|-----------|---------|
| cmd/{{.ProjectName}}/ | Main application entry point |
| internal/ | Private application code (enforced by Go) |
| pkg/ | Public library code (can be imported externally) |
| api/ | API definitions (OpenAPI, Protocol Buffers, JSON Schema) |
| configs/ | Configuration file templates |
| scripts/ | Build, install, and management scripts |
| test/ | Additional test apps and test data |
| docs/ | Documentation beyond README |
| build/ | Packaging and CI configuration |

## Development

### Build
```bash
go build -o bin/{{.ProjectName}} ./cmd/{{.ProjectName}}
```

### Run directly
```bash
go run ./cmd/{{.ProjectName}}
```

### Test all packages
```bash
go test ./...
```

### Format code
```bash
go fmt ./...
```

## Getting Started

1. Add your business logic to internal/
2. Create public APIs in pkg/ if needed
3. Import internal packages in cmd/{{.ProjectName}}/main.go

## Issue Tracking

```bash
bd list           # View issues
bd create --title "Task"  # Create issue
```

## Code Quality

```bash
ubs .             # Scan for bugs
go vet ./...      # Go static analysis
```
"#;

const GO_MOD: &str = r#"module {{.ProjectName}}

go 1.23
"#;

const MAIN_GO: &str = r#"package main

import (
	"fmt"
)

func main() {
	fmt.Println("Hello, Go!")
}
"#;
