//! Core engine for release-rail
//!
//! - **config**: release.toml parsing and option validation
//! - **context**: resolved facts (`ResolutionContext`) and the pipeline-wide `SharedConfig`
//! - **error**: error types with contextual help messages and exit codes
//! - **exec**: shell command execution behind the `Exec` trait
//! - **template**: `${name}` placeholder rendering
//! - **url**: git remote URL parsing
//! - **vcs**: the `VersionControl` trait and its git implementation

pub mod config;
pub mod context;
pub mod error;
pub mod exec;
pub mod template;
pub mod url;
pub mod vcs;
