//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A working repository with git history and a local bare `origin`
pub struct TestRepo {
  root: TempDir,
  pub path: PathBuf,
  pub origin: PathBuf,
}

impl TestRepo {
  /// Create a repository with one commit, pushed to a bare `origin`
  pub fn new() -> Result<Self> {
    let repo = Self::without_remote()?;
    let origin = repo.create_bare("origin.git")?;
    git(&repo.path, &["remote", "add", "origin", &path_str(&origin)])?;
    git(&repo.path, &["push", "-u", "origin", "main"])?;
    Ok(Self { origin, ..repo })
  }

  /// Create a repository with one commit and no remotes
  pub fn without_remote() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().join("widget");
    std::fs::create_dir_all(&path)?;

    git(&path, &["init", "--initial-branch=main"])?;
    git(&path, &["config", "user.name", "Test User"])?;
    git(&path, &["config", "user.email", "test@example.com"])?;
    git(&path, &["config", "commit.gpgsign", "false"])?;
    git(&path, &["config", "tag.gpgsign", "false"])?;

    let origin = root.path().join("origin.git");
    let repo = Self { root, path, origin };
    repo.commit("chore: initial commit")?;
    Ok(repo)
  }

  /// Create a bare repository next to the working copy
  pub fn create_bare(&self, name: &str) -> Result<PathBuf> {
    let bare = self.root.path().join(name);
    git(self.root.path(), &["init", "--bare", "--initial-branch=main", &path_str(&bare)])?;
    Ok(bare)
  }

  /// Write a file and commit it
  pub fn commit(&self, message: &str) -> Result<String> {
    let n = std::fs::read_dir(&self.path)?.count();
    std::fs::write(self.path.join(format!("file-{}.txt", n)), message)?;
    git(&self.path, &["add", "."])?;
    git(&self.path, &["commit", "-m", message])?;

    let output = git(&self.path, &["rev-parse", "HEAD"])?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }

  /// Create a lightweight tag at HEAD
  pub fn tag(&self, name: &str) -> Result<()> {
    git(&self.path, &["tag", name])?;
    Ok(())
  }

  /// Write release.toml in the working copy
  pub fn write_config(&self, content: &str) -> Result<()> {
    std::fs::write(self.path.join("release.toml"), content)?;
    Ok(())
  }
}

/// Forward-slash path string, as git prints remote URLs
pub fn path_str(path: &Path) -> String {
  path.to_string_lossy().replace('\\', "/")
}

/// Run git command in a directory
pub fn git(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = Command::new("git")
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run git command")?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    anyhow::bail!("Git command failed: git {}\n{}", args.join(" "), stderr);
  }

  Ok(output)
}

/// Run release-rail and return its output, whatever the exit status
pub fn run_release_rail_raw(cwd: &Path, args: &[&str]) -> Result<Output> {
  let bin = env!("CARGO_BIN_EXE_release-rail");

  Command::new(bin)
    .current_dir(cwd)
    .args(args)
    .env_remove("RUST_LOG")
    .output()
    .context("Failed to run release-rail")
}

/// Run release-rail, failing unless it exits successfully
pub fn run_release_rail(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = run_release_rail_raw(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "release-rail command failed: release-rail {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

/// Run release-rail with `--json` appended and parse stdout
pub fn run_json(cwd: &Path, args: &[&str]) -> Result<serde_json::Value> {
  let mut args = args.to_vec();
  args.push("--json");
  let output = run_release_rail(cwd, &args)?;
  serde_json::from_slice(&output.stdout).context("stdout is not JSON")
}
