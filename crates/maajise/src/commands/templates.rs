use anyhow::Result;

use super::load_registry;
use crate::config::FileConfig;
use crate::templates::TemplateRegistry;

/// Listing lines: name and description, then dependencies when there are any
pub fn format_listing(registry: &TemplateRegistry) -> Vec<String> {
  let mut lines = Vec::new();
  for template in registry.all() {
    lines.push(format!("  {:<12}  {}", template.name(), template.description()));
    let deps = template.dependencies();
    if !deps.is_empty() {
      lines.push(format!("  {:<12}  Dependencies: {}", "", deps.join(", ")));
    }
  }
  lines
}

pub fn execute(file_config: &FileConfig) -> Result<()> {
  let registry = load_registry(file_config);
  herald::plain("Available templates:");
  herald::plain("");
  for line in format_listing(&registry) {
    herald::plain(&line);
  }
  herald::plain("");
  herald::plain("Usage: maajise init <project-name> --template <template>");
  Ok(())
}
