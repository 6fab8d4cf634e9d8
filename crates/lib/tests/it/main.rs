/*! Integration tests for dotpath.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - path: Tests for path splitting, escaping and validation
 * - coerce: Tests for the scalar coercions
 * - get: Tests for candidate fallback and the typed getters
 * - set: Tests for writes and intermediate-map creation
 * - keys: Tests for key enumeration
 * - extend: Tests for the default-aware merge
 * - records: Tests for fixed-field records through every operation
 * - json: Tests for the serde_json bridge
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("dotpath=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod coerce;
mod extend;
mod get;
mod keys;
