//! Diagnostic tracing for release-rail.
//!
//! User-facing output goes to stdout via `println!`; tracing is for
//! diagnostics only and always writes to stderr.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the level is `warn`, or `debug` with `--verbose`.
///
/// ```bash
/// RUST_LOG=release_rail=trace release-rail resolve
/// ```
pub fn init(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::registry()
    .with(filter)
    .with(fmt::layer().with_writer(std::io::stderr).compact())
    .init();
}
