//! Push remote resolution and reachability
//!
//! Resolution order, first hit wins:
//! 1. `push_repo` option (name or URL)
//! 2. the current branch's configured remote
//! 3. `origin`
//!
//! Lookups that fail are "not configured" and fall through; only the caller
//! decides that nothing resolved is fatal.

use super::git::GitBase;
use crate::core::error::{GitError, ReleaseError, ReleaseResult};
use crate::core::exec::{self, Exec, ExecOptions};
use tracing::debug;

const DEFAULT_REMOTE: &str = "origin";

impl<E: Exec> GitBase<E> {
  /// URL of the push remote, or `None` when a bare remote name has no URL
  pub fn resolve_remote_url(&self) -> Option<String> {
    let candidate = self
      .options
      .push_repo
      .clone()
      .or_else(|| self.remote_for_current_branch())
      .unwrap_or_else(|| DEFAULT_REMOTE.to_string());

    if is_remote_name(&candidate) {
      self
        .remote_get_url(&candidate)
        .or_else(|| self.remote_config_url(&candidate))
    } else {
      Some(candidate)
    }
  }

  /// Remote configured for the checked-out branch
  fn remote_for_current_branch(&self) -> Option<String> {
    self.branch_name().and_then(|branch| self.remote_for_branch(&branch))
  }

  fn branch_name(&self) -> Option<String> {
    self.lookup("git rev-parse --abbrev-ref HEAD").filter(|s| !s.is_empty())
  }

  fn remote_for_branch(&self, branch: &str) -> Option<String> {
    self
      .lookup_with("git config --get", &format!("branch.{}.remote", branch))
      .filter(|s| !s.is_empty())
  }

  fn remote_get_url(&self, name: &str) -> Option<String> {
    self.lookup_with("git remote get-url", name)
  }

  fn remote_config_url(&self, name: &str) -> Option<String> {
    self.lookup_with("git config --get", &format!("remote.{}.url", name))
  }

  /// Read-only lookup where failure means "not available"
  fn lookup(&self, command: &str) -> Option<String> {
    self
      .read(command)
      .inspect_err(|err| debug!(command, error = %err, "lookup unavailable"))
      .ok()
  }

  /// `lookup` of `command` followed by one shell-quoted argument
  fn lookup_with(&self, command: &str, arg: &str) -> Option<String> {
    let arg = exec::quote(arg)
      .inspect_err(|err| debug!(command, error = %err, "lookup unavailable"))
      .ok()?;
    self.lookup(&format!("{} {}", command, arg))
  }

  /// Confirm the remote is reachable
  pub fn fetch(&self, remote_url: &str) -> ReleaseResult<()> {
    self
      .exec
      .exec("git fetch", ExecOptions::WRITE)
      .map(|_| ())
      .map_err(|err| {
        debug!(error = ?err, "git fetch failed");
        let reason = match err {
          ReleaseError::Git(GitError::CommandFailed { stderr, .. }) if !stderr.is_empty() => stderr,
          other => other.to_string(),
        };
        GitError::Network {
          remote_url: remote_url.to_string(),
          reason,
        }
        .into()
      })
  }
}

/// A remote name contains no path separator; anything else is already a URL
pub fn is_remote_name(remote: &str) -> bool {
  !remote.contains('/')
}
