//! Version-control plugins
//!
//! A plugin resolves the facts a release needs from the repository and
//! publishes them. `GitBase` is the git implementation.

mod git;
mod git_remote;
mod git_tags;

pub use git::GitBase;

use crate::core::context::{ResolutionContext, SharedConfig};
use crate::core::error::ReleaseResult;

/// Lifecycle of a version-control plugin within a release run
pub trait VersionControl {
  /// Resolve remote, validate it, resolve the latest tag and publish.
  ///
  /// Fails only when no remote is configured or the remote is unreachable.
  fn init(&mut self, shared: &mut SharedConfig) -> ReleaseResult<()>;

  /// Project name of the resolved remote
  fn name(&self) -> Option<&str>;

  /// Latest released version, from the latest tag
  fn latest_version(&self) -> Option<String>;

  /// Render the changelog since the latest release, if a command is configured
  fn changelog(&self) -> ReleaseResult<Option<String>>;

  /// Publish the version chosen for this release and its tag name
  fn bump(&mut self, version: &str, shared: &mut SharedConfig);

  /// Facts resolved so far
  fn context(&self) -> &ResolutionContext;
}
