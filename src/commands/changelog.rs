//! `release-rail changelog`: render changes since the latest tag

use super::session::{GlobalOptions, Session};
use crate::core::error::ReleaseResult;
use crate::core::vcs::VersionControl;

/// Run the changelog command
pub fn run_changelog(opts: &GlobalOptions) -> ReleaseResult<()> {
  let session = Session::start(opts)?;

  match session.git.changelog()? {
    Some(changelog) => println!("{}", changelog),
    None => {
      eprintln!("⚠️  No changelog command configured");
      eprintln!();
      eprintln!("Add one to release.toml:");
      eprintln!("  [git]");
      eprintln!("  changelog = \"git log --pretty=format:\\\"* %s (%h)\\\" ${{latestTag}}...HEAD\"");
    }
  }

  Ok(())
}
