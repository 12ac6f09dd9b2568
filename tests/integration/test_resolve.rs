//! Integration tests for `release-rail resolve`

use crate::helpers::{TestRepo, git, path_str, run_json, run_release_rail, run_release_rail_raw};
use anyhow::Result;

#[test]
fn test_resolve_origin_with_v_tag() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.tag("v0.9.0")?;

  let json = run_json(&repo.path, &["resolve"])?;
  let ctx = &json["context"];

  assert_eq!(ctx["remoteUrl"], path_str(&repo.origin));
  assert_eq!(ctx["latestTagName"], "v0.9.0");
  assert_eq!(ctx["tagTemplate"], "v${version}");
  assert_eq!(ctx["tagName"], serde_json::Value::Null);
  assert_eq!(ctx["repo"]["project"], "origin");
  assert_eq!(json["latestVersion"], "0.9.0");
  assert_eq!(json["shared"]["latestTag"], "v0.9.0");
  assert!(json["shared"].get("tagName").is_none());

  Ok(())
}

#[test]
fn test_resolve_without_tags() -> Result<()> {
  let repo = TestRepo::new()?;

  let json = run_json(&repo.path, &["resolve"])?;
  assert_eq!(json["context"]["latestTagName"], serde_json::Value::Null);
  assert_eq!(json["context"]["tagTemplate"], "${version}");
  assert_eq!(json["latestVersion"], serde_json::Value::Null);
  assert_eq!(json["shared"]["latestTag"], serde_json::Value::Null);

  Ok(())
}

#[test]
fn test_resolve_unprefixed_tag() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.tag("2.3.0")?;

  let json = run_json(&repo.path, &["resolve"])?;
  assert_eq!(json["context"]["tagTemplate"], "${version}");
  assert_eq!(json["latestVersion"], "2.3.0");

  Ok(())
}

#[test]
fn test_resolve_prefers_branch_remote() -> Result<()> {
  let repo = TestRepo::new()?;
  let fork = repo.create_bare("fork.git")?;
  git(&repo.path, &["remote", "add", "fork", &path_str(&fork)])?;
  git(&repo.path, &["config", "branch.main.remote", "fork"])?;

  let json = run_json(&repo.path, &["resolve"])?;
  assert_eq!(json["context"]["remoteUrl"], path_str(&fork));
  assert_eq!(json["name"], "fork");

  Ok(())
}

#[test]
fn test_resolve_explicit_push_repo() -> Result<()> {
  let repo = TestRepo::new()?;
  let upstream = repo.create_bare("upstream.git")?;
  git(&repo.path, &["remote", "add", "upstream", &path_str(&upstream)])?;

  // By name, from the command line
  let json = run_json(&repo.path, &["resolve", "--push-repo", "upstream"])?;
  assert_eq!(json["context"]["remoteUrl"], path_str(&upstream));

  // By URL, from release.toml
  repo.write_config(&format!("[git]\npush_repo = \"{}\"\n", path_str(&upstream)))?;
  let json = run_json(&repo.path, &["resolve"])?;
  assert_eq!(json["context"]["remoteUrl"], path_str(&upstream));

  Ok(())
}

#[test]
fn test_resolve_text_output() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.tag("v1.4.0")?;

  let output = run_release_rail(&repo.path, &["resolve"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("Latest tag:      v1.4.0"), "stdout: {stdout}");
  assert!(stdout.contains("Tag template:    v${version}"), "stdout: {stdout}");

  Ok(())
}

#[test]
fn test_missing_remote_fails_with_remote_url_error() -> Result<()> {
  let repo = TestRepo::without_remote()?;

  let output = run_release_rail_raw(&repo.path, &["resolve"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr.contains("Could not get remote Git url"), "stderr: {stderr}");
  assert!(!stderr.contains("Unable to fetch"), "stderr: {stderr}");

  Ok(())
}

#[test]
fn test_unreachable_remote_fails_with_network_error() -> Result<()> {
  let repo = TestRepo::new()?;
  let missing = repo.origin.with_file_name("missing.git");
  git(&repo.path, &["remote", "set-url", "origin", &path_str(&missing)])?;

  let output = run_release_rail_raw(&repo.path, &["resolve"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert_eq!(output.status.code(), Some(2));
  assert!(
    stderr.contains(&format!("Unable to fetch from {}", path_str(&missing))),
    "stderr: {stderr}"
  );
  assert!(!stderr.contains("Could not get remote Git url"), "stderr: {stderr}");

  Ok(())
}

#[test]
fn test_dry_run_skips_fetch() -> Result<()> {
  let repo = TestRepo::new()?;
  let missing = repo.origin.with_file_name("missing.git");
  git(&repo.path, &["remote", "set-url", "origin", &path_str(&missing)])?;

  let json = run_json(&repo.path, &["resolve", "--dry-run"])?;
  assert_eq!(json["context"]["remoteUrl"], path_str(&missing));

  Ok(())
}

#[test]
fn test_invalid_tag_name_is_rejected() -> Result<()> {
  let repo = TestRepo::new()?;

  let output = run_release_rail_raw(&repo.path, &["resolve", "--tag-name", "latest"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr.contains("tag_name"), "stderr: {stderr}");

  Ok(())
}

#[test]
fn test_config_tag_name_can_be_overridden() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.write_config("[git]\ntag_name = \"latest\"\n")?;

  let output = run_release_rail_raw(&repo.path, &["resolve"])?;
  assert_eq!(output.status.code(), Some(1));

  let json = run_json(&repo.path, &["resolve", "--tag-name", "release-${version}"])?;
  assert_eq!(json["context"]["tagTemplate"], "release-${version}");

  Ok(())
}

#[test]
fn test_branch_remote_with_shell_metacharacters() -> Result<()> {
  let repo = TestRepo::new()?;
  let fork = repo.create_bare("fork.git")?;
  git(&repo.path, &["remote", "add", "fork", &path_str(&fork)])?;
  git(&repo.path, &["checkout", "-b", "feat&x"])?;
  git(&repo.path, &["config", "branch.feat&x.remote", "fork"])?;

  let json = run_json(&repo.path, &["resolve"])?;
  assert_eq!(json["context"]["remoteUrl"], path_str(&fork));

  Ok(())
}

#[test]
fn test_branch_name_is_not_run_by_the_shell() -> Result<()> {
  let repo = TestRepo::new()?;
  git(&repo.path, &["checkout", "-b", "x;touch${IFS}INJECTED;"])?;

  let json = run_json(&repo.path, &["resolve"])?;
  assert_eq!(json["context"]["remoteUrl"], path_str(&repo.origin));
  assert!(!repo.path.join("INJECTED").exists());

  Ok(())
}
