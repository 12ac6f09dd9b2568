//! Shell command execution
//!
//! Every git invocation (and the user's changelog command) goes through the
//! `Exec` trait so the resolution logic can run against a scripted executor
//! in tests.
//!
//! Commands are shell strings, so any value that comes from the repository
//! (branch, remote or tag names) must pass through `quote` before it is
//! spliced in.

use crate::core::error::{GitError, ReleaseError, ReleaseResult};
use std::borrow::Cow;
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, info};

/// Per-invocation execution options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecOptions {
  /// Whether the command changes state. Writing commands are skipped in dry-run mode.
  pub write: bool,
}

impl ExecOptions {
  /// A read-only lookup, always executed
  pub const READ: ExecOptions = ExecOptions { write: false };
  /// A state-changing command
  pub const WRITE: ExecOptions = ExecOptions { write: true };
}

/// Quote `value` as a single shell word. Plain names come back unchanged.
pub fn quote(value: &str) -> ReleaseResult<Cow<'_, str>> {
  shlex::try_quote(value)
    .map_err(|err| ReleaseError::message(format!("Cannot pass '{}' to the shell: {}", value.escape_debug(), err)))
}

/// Runs a shell command and returns its trimmed stdout
pub trait Exec {
  fn exec(&self, command: &str, opts: ExecOptions) -> ReleaseResult<String>;
}

/// Executor backed by the system shell
pub struct ShellExecutor {
  /// Working directory for every command
  cwd: PathBuf,
  /// Skip writing commands
  dry_run: bool,
}

impl ShellExecutor {
  pub fn new(cwd: impl Into<PathBuf>, dry_run: bool) -> Self {
    Self {
      cwd: cwd.into(),
      dry_run,
    }
  }

  /// Build a shell invocation for `command` in the working directory
  fn shell_cmd(&self, command: &str) -> Command {
    #[cfg(target_os = "windows")]
    let mut cmd = {
      let mut cmd = Command::new("cmd");
      cmd.arg("/C").arg(command);
      cmd
    };
    #[cfg(not(target_os = "windows"))]
    let mut cmd = {
      let mut cmd = Command::new("sh");
      cmd.arg("-c").arg(command);
      cmd
    };

    cmd.current_dir(&self.cwd);
    // Keep git from prompting for credentials on a hung terminal
    cmd.env("GIT_TERMINAL_PROMPT", "0");
    cmd
  }
}

impl Exec for ShellExecutor {
  fn exec(&self, command: &str, opts: ExecOptions) -> ReleaseResult<String> {
    if self.dry_run && opts.write {
      info!(command, "dry run, skipping");
      return Ok(String::new());
    }

    debug!(command, "exec");
    let output = self
      .shell_cmd(command)
      .output()
      .map_err(|err| ReleaseError::message(format!("Failed to execute: {}\n{}", command, err)))?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
      return Err(
        GitError::CommandFailed {
          command: command.to_string(),
          status: output.status.code(),
          stderr,
        }
        .into(),
      );
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }
}
