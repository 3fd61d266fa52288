/*! Integration tests for Photoroll.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - user_store: Tests for UserStore lifecycle, sessions, and snapshot persistence
 * - album: Tests for album and photo gestures made through a session
 * - search: Tests for date and tag searches over a user's photos
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("photoroll=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod helpers;
mod search;
mod user_store;
