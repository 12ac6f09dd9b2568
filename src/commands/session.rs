//! Shared command setup: load config, build the git plugin, run `init`

use crate::core::config::{GitOptions, ReleaseConfig};
use crate::core::context::SharedConfig;
use crate::core::error::ReleaseResult;
use crate::core::exec::ShellExecutor;
use crate::core::vcs::{GitBase, VersionControl};
use std::env;
use std::path::Path;
use tracing::debug;

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
  /// Overrides for the `[git]` table of release.toml
  pub git: GitOptions,
  /// Skip state-changing commands
  pub dry_run: bool,
}

/// An initialized git plugin and the pipeline store it published into
pub struct Session {
  pub git: GitBase<ShellExecutor>,
  pub shared: SharedConfig,
}

impl Session {
  /// Start a session in the current directory
  pub fn start(opts: &GlobalOptions) -> ReleaseResult<Self> {
    let workspace_root = env::current_dir()?;
    Self::start_in(&workspace_root, opts)
  }

  /// Start a session rooted at `root`
  pub fn start_in(root: &Path, opts: &GlobalOptions) -> ReleaseResult<Self> {
    let config = ReleaseConfig::load(root)?;
    let options = config.git.merge(opts.git.clone());
    options.validate()?;
    debug!(?options, dry_run = opts.dry_run, "git options");

    let mut git = GitBase::new(ShellExecutor::new(root, opts.dry_run), options);
    let mut shared = SharedConfig::new();
    git.init(&mut shared)?;

    Ok(Self { git, shared })
  }
}
