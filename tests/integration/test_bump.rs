//! Integration tests for `release-rail bump`

use crate::helpers::{TestRepo, run_json, run_release_rail};
use anyhow::Result;

#[test]
fn test_bump_follows_v_prefix() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.tag("v0.9.0")?;

  let json = run_json(&repo.path, &["bump", "1.0.0"])?;
  assert_eq!(json["version"], "1.0.0");
  assert_eq!(json["tagName"], "v1.0.0");
  assert_eq!(json["latestVersion"], "0.9.0");
  assert_eq!(json["shared"]["tagName"], "v1.0.0");
  assert_eq!(json["shared"]["latestTag"], "v0.9.0");

  Ok(())
}

#[test]
fn test_bump_without_tag_uses_bare_version() -> Result<()> {
  let repo = TestRepo::new()?;

  let json = run_json(&repo.path, &["bump", "1.0.0"])?;
  assert_eq!(json["tagName"], "1.0.0");

  Ok(())
}

#[test]
fn test_bump_increment() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.tag("v0.9.3")?;

  let json = run_json(&repo.path, &["bump", "minor"])?;
  assert_eq!(json["version"], "0.10.0");
  assert_eq!(json["tagName"], "v0.10.0");

  Ok(())
}

#[test]
fn test_bump_explicit_tag_template() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.tag("v0.9.0")?;
  repo.write_config("[git]\ntag_name = \"widget-${version}\"\n")?;

  let output = run_release_rail(&repo.path, &["bump", "patch"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("Tag name:  widget-0.9.1"), "stdout: {stdout}");

  Ok(())
}
