//! Resolved release facts and the stores that publish them
//!
//! # Design
//!
//! Two stores, never the same object:
//!
//! - `ResolutionContext`: local to the VCS plugin, built once per run and
//!   filled in order (remote, repo, latest tag, tag template, then version and
//!   tag name at bump time).
//! - `SharedConfig`: the pipeline-wide store that later steps (publish, tag)
//!   read. It is passed explicitly as `&mut SharedConfig`; nothing global.
//!
//! ```text
//! key         writer            readers
//! latestTag   GitBase::init     changelog/publish steps, `resolve --json`
//! tagName     GitBase::bump     tag/publish steps, `bump --json`
//! ```

use crate::core::url::RemoteDescriptor;
use serde::Serialize;
use std::collections::BTreeMap;

/// Facts resolved for the current run.
///
/// Setters take values rather than options so a resolved field can be
/// replaced but never erased.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionContext {
  remote_url: Option<String>,
  repo: Option<RemoteDescriptor>,
  latest_tag_name: Option<String>,
  tag_template: Option<String>,
  version: Option<String>,
  tag_name: Option<String>,
}

impl ResolutionContext {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn remote_url(&self) -> Option<&str> {
    self.remote_url.as_deref()
  }

  pub fn repo(&self) -> Option<&RemoteDescriptor> {
    self.repo.as_ref()
  }

  pub fn latest_tag_name(&self) -> Option<&str> {
    self.latest_tag_name.as_deref()
  }

  pub fn tag_template(&self) -> Option<&str> {
    self.tag_template.as_deref()
  }

  pub fn version(&self) -> Option<&str> {
    self.version.as_deref()
  }

  pub fn tag_name(&self) -> Option<&str> {
    self.tag_name.as_deref()
  }

  pub(crate) fn set_remote(&mut self, remote_url: String, repo: RemoteDescriptor) {
    self.remote_url = Some(remote_url);
    self.repo = Some(repo);
  }

  pub(crate) fn set_latest_tag_name(&mut self, tag: String) {
    self.latest_tag_name = Some(tag);
  }

  pub(crate) fn set_tag_template(&mut self, template: String) {
    self.tag_template = Some(template);
  }

  pub(crate) fn set_release(&mut self, version: String, tag_name: String) {
    self.version = Some(version);
    self.tag_name = Some(tag_name);
  }
}

/// Keys of the pipeline-wide store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SharedKey {
  /// Most recent tag before this release (null when there is none)
  LatestTag,
  /// Tag the release will be created under
  TagName,
}

/// Pipeline-wide key/value store, longer-lived than any single step.
///
/// A key that was published with no value (`latestTag` on a repository
/// without tags) is distinct from a key nobody published.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct SharedConfig {
  values: BTreeMap<SharedKey, Option<String>>,
}

impl SharedConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn set(&mut self, key: SharedKey, value: Option<String>) {
    self.values.insert(key, value);
  }

  pub fn get(&self, key: SharedKey) -> Option<&str> {
    self.values.get(&key).and_then(|v| v.as_deref())
  }

  /// Whether any step has published `key`, with or without a value
  pub fn is_published(&self, key: SharedKey) -> bool {
    self.values.contains_key(&key)
  }
}
