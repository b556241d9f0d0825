//! `{{.Name}}` placeholder substitution for template content.

use chrono::Datelike;

use super::{is_contained_path, Template, TemplateError, TemplateFiles};
use crate::config::Variables;

pub const PROJECT_NAME_PLACEHOLDER: &str = "{{.ProjectName}}";

/// Values available to template content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateVars {
  pub project_name: String,
  pub author: String,
  pub email: String,
  pub year: String,
  pub license: String,
  pub github: String,
}

impl TemplateVars {
  /// Project name, current year and MIT license; everything else empty
  pub fn defaults(project_name: &str) -> Self {
    Self {
      project_name: project_name.to_string(),
      year: chrono::Local::now().year().to_string(),
      license: "MIT".to_string(),
      ..Self::default()
    }
  }

  /// Defaults overlaid with the non-empty values from the user config
  pub fn from_config(project_name: &str, variables: &Variables) -> Self {
    let mut vars = Self::defaults(project_name);
    let overlay = |target: &mut String, value: &str| {
      if !value.is_empty() {
        *target = value.to_string();
      }
    };
    overlay(&mut vars.author, &variables.author);
    overlay(&mut vars.email, &variables.email);
    overlay(&mut vars.year, &variables.year);
    overlay(&mut vars.license, &variables.license);
    overlay(&mut vars.github, &variables.github);
    vars
  }

  fn pairs(&self) -> [(&'static str, &str); 6] {
    [
      (PROJECT_NAME_PLACEHOLDER, &self.project_name),
      ("{{.Author}}", &self.author),
      ("{{.Email}}", &self.email),
      ("{{.Year}}", &self.year),
      ("{{.License}}", &self.license),
      ("{{.GitHub}}", &self.github),
    ]
  }

  /// Replace known placeholders; unknown ones are left as written
  pub fn render(&self, content: &str) -> String {
    if !content.contains("{{.") {
      return content.to_string();
    }
    self
      .pairs()
      .into_iter()
      .fold(content.to_string(), |acc, (placeholder, value)| acc.replace(placeholder, value))
  }
}

/// Files of `template` with every placeholder rendered from `vars`.
///
/// Paths are checked after rendering, since a variable can turn a relative
/// key into an absolute or parent-relative path.
pub fn files_with_vars(
  template: &dyn Template,
  vars: &TemplateVars,
) -> Result<TemplateFiles, TemplateError> {
  template
    .files(&vars.project_name)
    .into_iter()
    .map(|(path, content)| {
      let path = vars.render(&path);
      if !is_contained_path(&path) {
        return Err(TemplateError::UnsafePath { template: template.name().to_string(), path });
      }
      Ok((path, vars.render(&content)))
    })
    .collect()
}
