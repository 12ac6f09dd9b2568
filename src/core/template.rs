//! `${name}` placeholder substitution for tag templates and shell commands

use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

/// Variables available to a template. A known variable with no value renders empty.
pub type Vars<'a> = BTreeMap<&'a str, Option<&'a str>>;

/// Why a template could not be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
  /// `${` without a closing `}`
  Unclosed { offset: usize },
  /// Placeholder names a variable that was not provided
  Unknown { name: String },
}

impl fmt::Display for TemplateError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      TemplateError::Unclosed { offset } => write!(f, "unclosed placeholder at byte {}", offset),
      TemplateError::Unknown { name } => write!(f, "unknown variable `{}`", name),
    }
  }
}

impl std::error::Error for TemplateError {}

/// Render `template`, failing on malformed or unknown placeholders.
pub fn render(template: &str, vars: &Vars<'_>) -> Result<String, TemplateError> {
  let mut out = String::with_capacity(template.len());
  let mut rest = template;

  while let Some(start) = rest.find("${") {
    out.push_str(&rest[..start]);
    let after = &rest[start + 2..];
    let end = after.find('}').ok_or(TemplateError::Unclosed {
      offset: template.len() - rest.len() + start,
    })?;
    let name = after[..end].trim();
    match vars.get(name) {
      Some(value) => out.push_str(value.unwrap_or_default()),
      None => {
        return Err(TemplateError::Unknown { name: name.to_string() });
      }
    }
    rest = &after[end + 1..];
  }

  out.push_str(rest);
  Ok(out)
}

/// Render `template`, returning an empty string when rendering fails.
///
/// Callers treat the empty result as "use a fallback".
pub fn format(template: &str, vars: &Vars<'_>) -> String {
  match render(template, vars) {
    Ok(rendered) => rendered,
    Err(err) => {
      warn!(template, error = %err, "template rendering failed");
      String::new()
    }
  }
}

/// Number of `${name}` placeholders in `template`
pub fn count_placeholder(template: &str, name: &str) -> usize {
  let mut count = 0;
  let mut rest = template;
  while let Some(start) = rest.find("${") {
    let after = &rest[start + 2..];
    let Some(end) = after.find('}') else { break };
    if after[..end].trim() == name {
      count += 1;
    }
    rest = &after[end + 1..];
  }
  count
}

/// Whether `template` references `${name}` at all
pub fn references(template: &str, name: &str) -> bool {
  count_placeholder(template, name) > 0
}
