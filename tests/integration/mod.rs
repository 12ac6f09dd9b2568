//! Integration tests for release-rail, run against temporary git repositories

mod helpers;
mod test_bump;
mod test_resolve;
