use super::{with_project, Template, TemplateFiles};

/// Composer project with PSR-4 autoloading from `src/`
pub struct PhpTemplate;

impl Template for PhpTemplate {
  fn name(&self) -> &str {
    "php"
  }

  fn description(&self) -> &str {
    "PHP project with Composer configuration"
  }

  fn dependencies(&self) -> Vec<&str> {
    vec!["git", "bd", "php", "composer"]
  }

  fn files(&self, project_name: &str) -> TemplateFiles {
    TemplateFiles::from([
      (".gitignore".to_string(), GITIGNORE.to_string()),
      (".ubsignore".to_string(), UBSIGNORE.to_string()),
      ("README.md".to_string(), with_project(README, project_name)),
      ("composer.json".to_string(), with_project(COMPOSER_JSON, project_name)),
      ("src/index.php".to_string(), INDEX_PHP.to_string()),
    ])
  }
}

const GITIGNORE: &str = r#"# PHP
/vendor/
composer.lock

# IDE
.vscode/
.idea/
*.swp
*.swo
.phpunit.result.cache

# Environment
.env
.env.local

# OS
.DS_Store
Thumbs.db

# Logs
*.log

# Cache
/cache/
"#;

const UBSIGNORE: &str = r#"# UBS Scanner Ignore File
vendor/
.git/
.vscode/
.idea/
.beads/
.claude/
cache/
*.md
*.json
*.lock
*.log
"#;

const README: &str = r#"# {{.ProjectName}}

A PHP project.

## Setup

```bash
# Install dependencies
composer install
```

## Development

```bash
# Run the application
php src/index.php

# Run tests
composer test

# Run PHP linter
composer lint
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

const COMPOSER_JSON: &str = r#"{
    "name": "project/{{.ProjectName}}",
    "description": "",
    "type": "project",
    "require": {
        "php": ">=8.1"
    },
    "require-dev": {
        "phpunit/phpunit": "^10.0"
    },
    "autoload": {
        "psr-4": {
            "App\\": "src/"
        }
    },
    "scripts": {
        "test": "phpunit",
        "lint": "php -l src/"
    }
}
"#;

const INDEX_PHP: &str = r#"<?php

declare(strict_types=1);

echo "Hello, PHP!\n";
"#;
