/*! Integration tests for pathmap.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - map: Tests for PathMap set/get/delete/flatten and their edge cases
 * - serialization: Tests for serde and JSON interop
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("pathmap=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod helpers;
mod serialization;
