//! Error types for release-rail with help messages and exit codes
//!
//! Every error that reaches the user carries an optional help message that
//! points toward a fix. Two git errors are deliberately separate kinds:
//! `RemoteUrl` (no remote configured anywhere) and `Network` (a remote was
//! found but could not be fetched).

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for release-rail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, invalid args, missing remote)
  User = 1,
  /// System error (git, network, I/O)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for release-rail
#[derive(Debug)]
pub enum ReleaseError {
  /// Configuration errors
  Config(ConfigError),

  /// Git operation errors
  Git(GitError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional help
  Message { message: String, help: Option<String> },
}

impl ReleaseError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    ReleaseError::Message {
      message: msg.into(),
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    ReleaseError::Message {
      message: msg.into(),
      help: Some(help.into()),
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      ReleaseError::Config(_) => ExitCode::User,
      ReleaseError::Git(GitError::RemoteUrl) => ExitCode::User,
      ReleaseError::Git(_) => ExitCode::System,
      ReleaseError::Io(_) => ExitCode::System,
      ReleaseError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      ReleaseError::Config(e) => e.help_message(),
      ReleaseError::Git(e) => e.help_message(),
      ReleaseError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for ReleaseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ReleaseError::Config(e) => write!(f, "{}", e),
      ReleaseError::Git(e) => write!(f, "{}", e),
      ReleaseError::Io(e) => write!(f, "I/O error: {}", e),
      ReleaseError::Message { message, .. } => write!(f, "{}", message),
    }
  }
}

impl std::error::Error for ReleaseError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ReleaseError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for ReleaseError {
  fn from(err: io::Error) -> Self {
    ReleaseError::Io(err)
  }
}

impl From<GitError> for ReleaseError {
  fn from(err: GitError) -> Self {
    ReleaseError::Git(err)
  }
}

impl From<ConfigError> for ReleaseError {
  fn from(err: ConfigError) -> Self {
    ReleaseError::Config(err)
  }
}

impl From<serde_json::Error> for ReleaseError {
  fn from(err: serde_json::Error) -> Self {
    ReleaseError::message(format!("JSON error: {}", err))
  }
}

impl From<semver::Error> for ReleaseError {
  fn from(err: semver::Error) -> Self {
    ReleaseError::message(format!("Invalid version: {}", err))
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// Config file exists but could not be parsed
  Parse { path: PathBuf, reason: String },

  /// An option has a value that can never work
  InvalidOption { option: String, reason: String },

  /// A command or tag template could not be rendered
  InvalidTemplate { template: String, reason: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::Parse { .. } => Some("Check the [git] table in release.toml for typos.".to_string()),
      ConfigError::InvalidOption { option, .. } if option == "tag_name" => {
        Some("A tag template needs exactly one ${version} placeholder, e.g. \"v${version}\".".to_string())
      }
      ConfigError::InvalidTemplate { .. } => {
        Some("Only ${version} and ${latestTag} can be substituted; write shell variables without braces, e.g. $HOME.".to_string())
      }
      _ => None,
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::Parse { path, reason } => {
        write!(f, "Failed to parse config from {}: {}", path.display(), reason)
      }
      ConfigError::InvalidOption { option, reason } => {
        write!(f, "Invalid value for `{}`: {}", option, reason)
      }
      ConfigError::InvalidTemplate { template, reason } => {
        write!(f, "Cannot render template '{}': {}", template, reason)
      }
    }
  }
}

/// Git operation errors
#[derive(Debug)]
pub enum GitError {
  /// Git (or a user-configured) command exited unsuccessfully
  CommandFailed {
    command: String,
    status: Option<i32>,
    stderr: String,
  },

  /// No remote URL could be resolved through any fallback step
  RemoteUrl,

  /// The resolved remote could not be fetched
  Network { remote_url: String, reason: String },
}

impl GitError {
  fn help_message(&self) -> Option<String> {
    match self {
      GitError::RemoteUrl => Some(
        "Please add a remote repository (`git remote add origin <url>`) or pass --push-repo.".to_string(),
      ),
      GitError::Network { reason, .. } => {
        if reason.contains("Permission denied") || reason.contains("403") {
          Some("Check your SSH key or access token for this remote.".to_string())
        } else {
          Some("Check the remote URL and your network connection, or use --dry-run.".to_string())
        }
      }
      GitError::CommandFailed { .. } => None,
    }
  }
}

impl fmt::Display for GitError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GitError::CommandFailed { command, status, stderr } => {
        match status {
          Some(code) => write!(f, "Command failed (exit {}): {}", code, command)?,
          None => write!(f, "Command failed: {}", command)?,
        }
        if !stderr.is_empty() {
          write!(f, "\n{}", stderr)?;
        }
        Ok(())
      }
      GitError::RemoteUrl => write!(f, "Could not get remote Git url."),
      GitError::Network { remote_url, reason } => {
        write!(f, "Unable to fetch from {}\n{}", remote_url, reason)
      }
    }
  }
}

/// Result type alias for release-rail
pub type ReleaseResult<T> = Result<T, ReleaseError>;

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &ReleaseError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
