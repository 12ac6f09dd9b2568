//! `release-rail resolve`: show the facts a release would be built on

use super::session::{GlobalOptions, Session};
use crate::core::error::ReleaseResult;
use crate::core::vcs::VersionControl;
use serde_json::json;

/// Run the resolve command
pub fn run_resolve(opts: &GlobalOptions, json: bool) -> ReleaseResult<()> {
  let session = Session::start(opts)?;
  let git = &session.git;
  let ctx = git.context();

  if json {
    let output = json!({
      "name": git.name(),
      "latestVersion": git.latest_version(),
      "context": ctx,
      "shared": session.shared,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    return Ok(());
  }

  println!("📦 Release context");
  println!();
  println!("  Remote:          {}", ctx.remote_url().unwrap_or("-"));
  if let Some(repo) = ctx.repo() {
    if repo.host.is_empty() {
      println!("  Project:         {}", repo.project);
    } else {
      println!("  Project:         {} ({})", repo.repository, repo.host);
    }
  }
  println!("  Latest tag:      {}", ctx.latest_tag_name().unwrap_or("(none)"));
  println!(
    "  Latest version:  {}",
    git.latest_version().as_deref().unwrap_or("(none)")
  );
  println!("  Tag template:    {}", ctx.tag_template().unwrap_or("-"));
  if opts.dry_run {
    println!();
    println!("🔍 Dry-run mode (fetch skipped)");
  }

  Ok(())
}
