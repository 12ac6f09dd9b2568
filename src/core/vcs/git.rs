//! Git plugin: remote resolution, tag resolution, changelog and bump
//!
//! Lookups live in `git_remote.rs` (push remote, fetch) and `git_tags.rs`
//! (latest tag, tag template). This file wires them into the
//! `VersionControl` lifecycle and owns the two publish points.

use super::VersionControl;
use crate::core::config::GitOptions;
use crate::core::context::{ResolutionContext, SharedConfig, SharedKey};
use crate::core::error::{ConfigError, GitError, ReleaseResult};
use crate::core::exec::{self, Exec, ExecOptions};
use crate::core::template::{self, Vars};
use crate::core::url;
use tracing::{debug, info};

/// Changelog command used when the configured one needs a tag that does not exist
pub const CHANGELOG_FALLBACK: &str = r#"git log --pretty=format:"* %s (%h)""#;

/// Git implementation of `VersionControl`
pub struct GitBase<E: Exec> {
  pub(super) exec: E,
  pub(super) options: GitOptions,
  ctx: ResolutionContext,
}

impl<E: Exec> GitBase<E> {
  pub fn new(exec: E, options: GitOptions) -> Self {
    Self {
      exec,
      options,
      ctx: ResolutionContext::new(),
    }
  }

  /// Run a read-only git lookup
  pub(super) fn read(&self, command: &str) -> ReleaseResult<String> {
    self.exec.exec(command, ExecOptions::READ)
  }
}

impl<E: Exec> VersionControl for GitBase<E> {
  fn init(&mut self, shared: &mut SharedConfig) -> ReleaseResult<()> {
    let remote_url = self
      .resolve_remote_url()
      .filter(|url| !url.is_empty())
      .ok_or(GitError::RemoteUrl)?;
    info!(remote_url = %remote_url, "resolved push remote");

    self.fetch(&remote_url)?;

    let repo = url::parse(&remote_url);
    let latest_tag_name = self.latest_tag_name();
    let tag_template = self.tag_template(latest_tag_name.as_deref());
    debug!(latest_tag = ?latest_tag_name, tag_template = %tag_template, "resolved tags");

    self.ctx.set_remote(remote_url, repo);
    self.ctx.set_tag_template(tag_template);
    if let Some(tag) = latest_tag_name.clone() {
      self.ctx.set_latest_tag_name(tag);
    }
    shared.set(SharedKey::LatestTag, latest_tag_name);

    Ok(())
  }

  fn name(&self) -> Option<&str> {
    self.ctx.repo().map(|repo| repo.project.as_str())
  }

  fn latest_version(&self) -> Option<String> {
    self.ctx.latest_tag_name().map(version_from_tag)
  }

  fn changelog(&self) -> ReleaseResult<Option<String>> {
    let Some(configured) = self.options.changelog.as_deref() else {
      return Ok(None);
    };

    let latest_tag = self.ctx.latest_tag_name();
    let command = if latest_tag.is_none() && template::references(configured, "latestTag") {
      debug!(configured, "no latest tag, using full log");
      CHANGELOG_FALLBACK
    } else {
      configured
    };

    // Tags come from the remote and reach the shell quoted
    let quoted_tag = latest_tag.map(exec::quote).transpose()?;
    let command = template::render(command, &Vars::from([("latestTag", quoted_tag.as_deref())])).map_err(|err| {
      ConfigError::InvalidTemplate {
        template: command.to_string(),
        reason: err.to_string(),
      }
    })?;

    self.exec.exec(&command, ExecOptions::READ).map(Some)
  }

  fn bump(&mut self, version: &str, shared: &mut SharedConfig) {
    let tag_template = self.ctx.tag_template().unwrap_or_default();
    let rendered = template::format(tag_template, &Vars::from([("version", Some(version))]));
    let tag_name = if rendered.is_empty() {
      version.to_string()
    } else {
      rendered
    };
    debug!(version, tag_name = %tag_name, "bump");

    self.ctx.set_release(version.to_string(), tag_name.clone());
    shared.set(SharedKey::TagName, Some(tag_name));
  }

  fn context(&self) -> &ResolutionContext {
    &self.ctx
  }
}

/// `v2.3.0` -> `2.3.0`; only a single leading `v` is stripped
pub fn version_from_tag(tag: &str) -> String {
  tag.strip_prefix('v').unwrap_or(tag).to_string()
}
