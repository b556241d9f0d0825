use super::{with_project, Template, TemplateFiles};

/// Layered Node/TypeScript service (routes, controllers, services, models)
pub struct TypeScriptTemplate;

const LAYER_DIRS: [&str; 8] =
  ["config", "controllers", "middleware", "models", "routes", "services", "types", "utils"];

impl Template for TypeScriptTemplate {
  fn name(&self) -> &str {
    "typescript"
  }

  fn description(&self) -> &str {
    "TypeScript project with layered architecture (controllers, services, models, routes)"
  }

  fn dependencies(&self) -> Vec<&str> {
    vec!["git", "bd", "node", "npm"]
  }

  fn files(&self, project_name: &str) -> TemplateFiles {
    let mut files = TemplateFiles::from([
      (".gitignore".to_string(), GITIGNORE.to_string()),
      (".ubsignore".to_string(), UBSIGNORE.to_string()),
      ("README.md".to_string(), with_project(README, project_name)),
      ("package.json".to_string(), with_project(PACKAGE_JSON, project_name)),
      ("tsconfig.json".to_string(), TSCONFIG_JSON.to_string()),
      ("src/index.ts".to_string(), INDEX_TS.to_string()),
      ("tests/.gitkeep".to_string(), String::new()),
    ]);
    for layer in LAYER_DIRS {
      files.insert(format!("src/{layer}/.gitkeep"), String::new());
    }
    files
  }
}

const GITIGNORE: &str = r#"# Dependencies
node_modules/

# Build outputs
dist/
build/
*.js
*.js.map
*.d.ts
!*.config.js

# Logs
*.log
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# Environment
.env
.env.local
.env*.local

# IDE
.vscode/
.idea/
*.swp
*.swo

# OS
.DS_Store
Thumbs.db

# Testing
coverage/
.nyc_output/

# Cache
.cache/
*.tsbuildinfo
"#;

const UBSIGNORE: &str = r#"# UBS Scanner Ignore File
node_modules/
dist/
build/
coverage/
.git/
.vscode/
.idea/
.beads/
.claude/
*.md
*.json
*.lock
*.log
"#;

const README: &str = r#"# {{.ProjectName}}

## Project Structure

This project uses a layered architecture for scalability and maintainability.

| Directory | Purpose |
|-----------|---------|
| src/config/ | Application configuration and environment variables |
| src/controllers/ | Request handlers and HTTP logic |
| src/middleware/ | Express/HTTP middleware functions |
| src/models/ | Data models and schemas |
| src/routes/ | API route definitions |
| src/services/ | Business logic layer |
| src/types/ | TypeScript type definitions and interfaces |
| src/utils/ | Utility functions and helpers |
| tests/ | Unit and integration tests |
| dist/ | Compiled JavaScript output |

## Architecture

Request flow: Routes → Controllers → Services → Models

- **Routes**: Define endpoints, validate input
- **Controllers**: Handle HTTP request/response
- **Services**: Business logic, reusable across controllers
- **Models**: Data structures, database schemas

## Development

### Install dependencies
```bash
npm install
```

### Build
```bash
npm run build
```

### Run
```bash
npm start
```

### Development mode (watch)
```bash
npm run dev
```

### Clean build artifacts
```bash
npm run clean
```

## Path Aliases

This project uses path aliases for cleaner imports:

- @config/* → src/config/*
- @controllers/* → src/controllers/*
- @services/* → src/services/*
- @models/* → src/models/*
- @middleware/* → src/middleware/*
- @routes/* → src/routes/*
- @types/* → src/types/*
- @utils/* → src/utils/*

Example: import { logger } from '@utils/logger';

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

const PACKAGE_JSON: &str = r#"{
  "name": "{{.ProjectName}}",
  "version": "0.1.0",
  "description": "",
  "main": "dist/index.js",
  "types": "dist/index.d.ts",
  "scripts": {
    "build": "tsc",
    "dev": "tsc --watch",
    "start": "node dist/index.js",
    "clean": "node -e \"require('fs').rmSync('dist',{recursive:true,force:true})\"",
    "test": "echo \"Error: no test specified\" && exit 1"
  },
  "keywords": [],
  "author": "",
  "license": "ISC",
  "devDependencies": {
    "typescript": "^5.0.0"
  }
}
"#;

const TSCONFIG_JSON: &str = r#"{
  "compilerOptions": {
    "target": "ES2022",
    "module": "commonjs",
    "lib": ["ES2022"],
    "outDir": "./dist",
    "rootDir": "./src",
    "strict": true,
    "esModuleInterop": true,
    "skipLibCheck": true,
    "forceConsistentCasingInFileNames": true,
    "declaration": true,
    "declarationMap": true,
    "sourceMap": true,
    "resolveJsonModule": true,
    "baseUrl": "./src",
    "paths": {
      "@config/*": ["config/*"],
      "@controllers/*": ["controllers/*"],
      "@services/*": ["services/*"],
      "@models/*": ["models/*"],
      "@middleware/*": ["middleware/*"],
      "@routes/*": ["routes/*"],
      "@types/*": ["types/*"],
      "@utils/*": ["utils/*"]
    }
  },
  "include": ["src/**/*"],
  "exclude": ["node_modules", "dist", "tests"]
}
"#;

const INDEX_TS: &str = r#"// Entry point
console.log("Hello, TypeScript!");

// Example imports (uncomment as you build):
// import { config } from './config';
// import { setupRoutes } from './routes';
// import { logger } from './utils';
"#;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_typescript_layers() {
    let files = TypeScriptTemplate.files("svc");
    for layer in LAYER_DIRS {
      assert!(files.contains_key(&format!("src/{layer}/.gitkeep")), "{layer}");
    }
    assert!(files.contains_key("tests/.gitkeep"));
    assert_eq!(files.len(), 7 + LAYER_DIRS.len());
  }

  #[test]
  fn test_typescript_json_files_parse() {
    let files = TypeScriptTemplate.files("svc");
    let package: serde_json::Value = serde_json::from_str(&files["package.json"]).unwrap();
    assert_eq!(package["name"], "svc");
    let tsconfig: serde_json::Value = serde_json::from_str(&files["tsconfig.json"]).unwrap();
    assert_eq!(tsconfig["compilerOptions"]["outDir"], "./dist");
    assert_eq!(tsconfig["compilerOptions"]["paths"]["@utils/*"][0], "utils/*");
  }
}
