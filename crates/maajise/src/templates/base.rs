use super::{with_project, Template, TemplateFiles};

/// Language-agnostic default
pub struct BaseTemplate;

impl Template for BaseTemplate {
  fn name(&self) -> &str {
    "base"
  }

  fn description(&self) -> &str {
    "Base template (language-agnostic)"
  }

  fn dependencies(&self) -> Vec<&str> {
    vec!["git", "bd"]
  }

  fn files(&self, project_name: &str) -> TemplateFiles {
    TemplateFiles::from([
      (".gitignore".to_string(), GITIGNORE.to_string()),
      (".ubsignore".to_string(), UBSIGNORE.to_string()),
      ("README.md".to_string(), with_project(README, project_name)),
    ])
  }
}

const GITIGNORE: &str = r#"# Dependencies
node_modules/
vendor/
packages/

# Build outputs
.next/
build/
dist/
target/
out/
*.o
*.exe

# Logs
*.log
logs/
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# Environment variables
.env
.env.local
.env*.local

# IDE
.vscode/
.idea/
*.swp
*.swo
*~

# OS
.DS_Store
Thumbs.db
desktop.ini

# Testing
coverage/
.nyc_output/

# Temporary files
*.tmp
*.temp
.cache/
"#;

const UBSIGNORE: &str = r#"# UBS Scanner Ignore File
# Excludes non-source files from bug scanning

# Dependencies
node_modules/
vendor/
packages/

# Build outputs
.next/
build/
dist/
target/
out/
bin/
obj/

# Version control & IDE
.git/
.vscode/
.idea/
.beads/
.claude/

# Documentation & metadata
docs/
history/
openspec/

# Scripts
scripts/

# Static assets
public/
static/
assets/

# File types to skip
*.md
*.json
*.config.*
*.log
*.txt
*.lock
*.sum

# Environment & secrets
.env*
*.key
*.pem
*.cert
"#;

const README: &str = r#"# {{.ProjectName}}

## Description

[Add project description here]

## Setup

```bash
# Clone the repository
git clone <repository-url>
cd {{.ProjectName}}

# [Add setup instructions here]
```

## Usage

[Add usage instructions here]

## Development

### Prerequisites

- [List prerequisites here]

### Running Locally

```bash
# [Add development commands here]
```

### Testing

```bash
# [Add testing commands here]
```

## Issue Tracking

This project uses [Beads](https://github.com/jfischoff/beads) for issue tracking.

```bash
# View all issues
bd list

# Create new issue
bd create --title "Issue title" --description "Issue description"

# View issue details
bd show <issue-id>
```

## Code Quality

This project uses [UBS (Ultimate Bug Scanner)](https://github.com/Dicklesworthstone/ultimate_bug_scanner) for static analysis.

```bash
# Run scanner on source code
ubs .

# Run with strict mode (fail on warnings)
ubs . --fail-on-warning
```

## Contributing

[Add contribution guidelines here]

## License

[Add license information here]
"#;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_base_files() {
    let files = BaseTemplate.files("demo");
    assert_eq!(files.len(), 3);
    assert!(files["README.md"].contains("cd demo"));
    assert!(files[".gitignore"].contains("node_modules/"));
    assert!(files[".ubsignore"].contains(".beads/"));
  }
}
