//! `release-rail bump`: publish the next version and its tag name

use super::session::{GlobalOptions, Session};
use crate::core::error::{ReleaseError, ReleaseResult};
use crate::core::vcs::VersionControl;
use semver::{BuildMetadata, Prerelease, Version};
use serde_json::json;

/// Run the bump command
///
/// `requested` is an explicit version (`1.2.0`, `v1.2.0`) or `major`, `minor`, `patch`.
pub fn run_bump(opts: &GlobalOptions, requested: &str, json: bool) -> ReleaseResult<()> {
  let mut session = Session::start(opts)?;
  let latest = session.git.latest_version();
  let version = next_version(requested, latest.as_deref())?;

  session.git.bump(&version, &mut session.shared);
  let ctx = session.git.context();

  if json {
    let output = json!({
      "latestVersion": latest,
      "version": ctx.version(),
      "tagName": ctx.tag_name(),
      "shared": session.shared,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    return Ok(());
  }

  println!("🏷️  Next release");
  println!();
  println!("  Current:   {}", latest.as_deref().unwrap_or("(none)"));
  println!("  Version:   {}", ctx.version().unwrap_or(&version));
  println!("  Tag name:  {}", ctx.tag_name().unwrap_or(&version));

  Ok(())
}

/// Resolve the requested version against the latest released one
fn next_version(requested: &str, latest: Option<&str>) -> ReleaseResult<String> {
  let increment = match requested {
    "major" | "minor" | "patch" => requested,
    explicit => {
      let explicit = explicit.strip_prefix('v').unwrap_or(explicit);
      return Ok(Version::parse(explicit)?.to_string());
    }
  };

  let current = match latest {
    Some(latest) => Version::parse(latest).map_err(|err| {
      ReleaseError::with_help(
        format!("Latest version '{}' is not valid semver: {}", latest, err),
        "Pass an explicit version instead, e.g. `release-rail bump 1.2.0`",
      )
    })?,
    None => Version::new(0, 0, 0),
  };

  let next = match increment {
    "major" => Version::new(bump_component(&current, current.major)?, 0, 0),
    "minor" => Version::new(current.major, bump_component(&current, current.minor)?, 0),
    _ if !current.pre.is_empty() => Version {
      pre: Prerelease::EMPTY,
      build: BuildMetadata::EMPTY,
      ..current
    },
    _ => Version::new(current.major, current.minor, bump_component(&current, current.patch)?),
  };

  Ok(next.to_string())
}

fn bump_component(current: &Version, component: u64) -> ReleaseResult<u64> {
  component.checked_add(1).ok_or_else(|| {
    ReleaseError::with_help(
      format!("Cannot increment version {}: component is already at its maximum", current),
      "Pass an explicit version instead, e.g. `release-rail bump 1.2.0`",
    )
  })
}
