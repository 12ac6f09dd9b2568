//! Latest tag lookup and tag template derivation

use super::git::GitBase;
use crate::core::exec::Exec;
use tracing::debug;

impl<E: Exec> GitBase<E> {
  /// Nearest tag reachable from HEAD. No tags is a normal state, not an error.
  pub fn latest_tag_name(&self) -> Option<String> {
    match self.read("git describe --tags --abbrev=0") {
      Ok(tag) if !tag.is_empty() => Some(tag),
      Ok(_) => None,
      Err(err) => {
        debug!(error = %err, "no previous tag");
        None
      }
    }
  }

  /// Explicit `tag_name` option, else the latest tag's `v` convention
  pub fn tag_template(&self, latest_tag_name: Option<&str>) -> String {
    match self.options.tag_name {
      Some(ref explicit) => explicit.clone(),
      None => derive_tag_template(latest_tag_name).to_string(),
    }
  }
}

/// `v${version}` when the latest tag starts with `v`, otherwise `${version}`
pub fn derive_tag_template(latest_tag_name: Option<&str>) -> &'static str {
  match latest_tag_name {
    Some(tag) if tag.starts_with('v') => "v${version}",
    _ => "${version}",
  }
}
