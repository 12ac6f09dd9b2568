//! Git remote URL parsing
//!
//! Turns the URL forms git accepts into a `RemoteDescriptor`:
//! - `https://host[:port]/owner/project.git`
//! - `ssh://[user@]host[:port]/owner/project.git`
//! - scp-like `[user@]host:owner/project.git`
//! - local paths and `file://` URLs

use serde::Serialize;

/// Structured view of a remote URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteDescriptor {
  /// The URL exactly as resolved
  pub url: String,
  /// `https`, `http`, `ssh`, `git`, or `file`
  pub protocol: String,
  /// Host without user or port (empty for local paths)
  pub host: String,
  /// Everything between host and project, e.g. `group/subgroup`
  pub owner: String,
  /// Last path segment without `.git`
  pub project: String,
  /// `owner/project`, or just `project` without an owner
  pub repository: String,
}

/// Parse a remote URL. Never fails: unrecognized input is treated as a local path.
pub fn parse(url: &str) -> RemoteDescriptor {
  let trimmed = url.trim();
  let (protocol, host, path) = split_url(trimmed);

  let path = path.trim_matches('/');
  let path = path.strip_suffix(".git").unwrap_or(path);
  let path = path.trim_end_matches('/');

  let (owner, project) = match path.rsplit_once('/') {
    Some((owner, project)) => (owner.to_string(), project.to_string()),
    None => (String::new(), path.to_string()),
  };

  // Local paths keep only the parent directory name as owner
  let owner = if protocol == "file" {
    owner.rsplit('/').next().unwrap_or_default().to_string()
  } else {
    owner
  };

  let repository = if owner.is_empty() {
    project.clone()
  } else {
    format!("{}/{}", owner, project)
  };

  RemoteDescriptor {
    url: url.to_string(),
    protocol,
    host,
    owner,
    project,
    repository,
  }
}

/// Split into (protocol, host, path)
fn split_url(url: &str) -> (String, String, &str) {
  if let Some((scheme, rest)) = url.split_once("://") {
    let protocol = match scheme {
      "git+ssh" | "ssh+git" => "ssh".to_string(),
      other => other.to_lowercase(),
    };
    if protocol == "file" {
      return (protocol, String::new(), rest);
    }
    let (authority, path) = rest.split_once('/').unwrap_or((rest, ""));
    return (protocol, bare_host(authority), path);
  }

  if is_scp_like(url) {
    let (authority, path) = url.split_once(':').unwrap_or((url, ""));
    return ("ssh".to_string(), bare_host(authority), path);
  }

  ("file".to_string(), String::new(), url)
}

/// `host` from `user@host:port`
fn bare_host(authority: &str) -> String {
  let host = authority.rsplit_once('@').map(|(_, h)| h).unwrap_or(authority);
  let host = match host.rsplit_once(':') {
    Some((h, port)) if port.chars().all(|c| c.is_ascii_digit()) => h,
    _ => host,
  };
  host.to_lowercase()
}

/// `[user@]host:path`, where the colon comes before any slash and is not a drive letter
fn is_scp_like(url: &str) -> bool {
  let Some(colon) = url.find(':') else {
    return false;
  };
  if url[..colon].contains('/') || url[..colon].contains('\\') {
    return false;
  }
  // C:\repo or C:/repo
  !(colon == 1 && url.as_bytes()[0].is_ascii_alphabetic())
}
