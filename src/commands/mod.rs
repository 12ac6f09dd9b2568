//! CLI commands for release-rail
//!
//! - **resolve**: resolve remote, latest tag and tag template
//! - **changelog**: render the changelog since the latest tag
//! - **bump**: publish the next version and its tag name
//!
//! Every command starts a `Session`, which runs the git plugin's `init`.

pub mod bump;
pub mod changelog;
pub mod resolve;
mod session;

pub use bump::run_bump;
pub use changelog::run_changelog;
pub use resolve::run_resolve;
pub use session::GlobalOptions;
