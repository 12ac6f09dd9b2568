use crate::core::error::{ConfigError, ReleaseError, ReleaseResult};
use crate::core::template::{self, Vars};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for release-rail
/// Searched in order: release.toml, .release.toml, .config/release.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReleaseConfig {
  #[serde(default)]
  pub git: GitOptions,
}

/// Options for the git plugin (`[git]` table)
///
/// # Example
///
/// ```toml
/// [git]
/// push_repo = "upstream"
/// tag_name = "v${version}"
/// changelog = "git log --pretty=format:\"* %s (%h)\" ${latestTag}...HEAD"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GitOptions {
  /// Remote name or URL to push to (default: the current branch's remote, then `origin`)
  #[serde(default)]
  pub push_repo: Option<String>,

  /// Tag template with one `${version}` (default: inferred from the latest tag)
  #[serde(default)]
  pub tag_name: Option<String>,

  /// Changelog command; may reference `${latestTag}`
  #[serde(default)]
  pub changelog: Option<String>,
}

impl GitOptions {
  /// Validate option values
  pub fn validate(&self) -> Result<(), ConfigError> {
    if let Some(ref push_repo) = self.push_repo
      && push_repo.trim().is_empty()
    {
      return Err(ConfigError::InvalidOption {
        option: "push_repo".to_string(),
        reason: "must not be empty".to_string(),
      });
    }

    if let Some(ref tag_name) = self.tag_name {
      let count = template::count_placeholder(tag_name, "version");
      if count != 1 {
        return Err(ConfigError::InvalidOption {
          option: "tag_name".to_string(),
          reason: format!("'{}' has {} ${{version}} placeholders, expected exactly one", tag_name, count),
        });
      }
      if let Err(err) = template::render(tag_name, &Vars::from([("version", Some("0.0.0"))])) {
        return Err(ConfigError::InvalidOption {
          option: "tag_name".to_string(),
          reason: err.to_string(),
        });
      }
    }

    Ok(())
  }

  /// Overlay `other` on top of `self`; set fields in `other` win
  pub fn merge(self, other: GitOptions) -> GitOptions {
    GitOptions {
      push_repo: other.push_repo.or(self.push_repo),
      tag_name: other.tag_name.or(self.tag_name),
      changelog: other.changelog.or(self.changelog),
    }
  }
}

impl ReleaseConfig {
  /// Find config file in search order: release.toml, .release.toml, .config/release.toml
  pub fn find_config_path(path: &Path) -> Option<PathBuf> {
    let candidates = vec![
      path.join("release.toml"),
      path.join(".release.toml"),
      path.join(".config").join("release.toml"),
    ];

    candidates.into_iter().find(|p| p.exists())
  }

  /// Load config, falling back to defaults when no file exists
  ///
  /// Values are not validated here: command-line overrides are merged on top
  /// first, then the merged options are validated.
  pub fn load(path: &Path) -> ReleaseResult<Self> {
    let Some(config_path) = Self::find_config_path(path) else {
      return Ok(Self::default());
    };

    let content = fs::read_to_string(&config_path).map_err(|err| {
      ReleaseError::message(format!("Failed to read config from {}: {}", config_path.display(), err))
    })?;
    let config: ReleaseConfig = toml_edit::de::from_str(&content).map_err(|err| ConfigError::Parse {
      path: config_path.clone(),
      reason: err.to_string(),
    })?;

    Ok(config)
  }
}
