//! Shared helpers for the `gofer` integration and property tests.

pub mod builders;
pub mod recording_action;

use std::future::Future;
use std::sync::Once;
use std::time::Duration;

use gofer::logging::LOG_ENV;
use tracing_subscriber::EnvFilter;

/// Upper bound for any single awaited operation in a test.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

static INIT: Once = Once::new();

/// Route `tracing` output from the crate under test into the test harness.
///
/// Output is captured per test and shown only for failures. Directives come
/// from `GOFER_LOG` like the binary; without it the crate logs at `debug`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = std::env::var(LOG_ENV)
            .ok()
            .and_then(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::new("gofer=debug"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Await `f`, panicking if it takes longer than [`TEST_TIMEOUT`].
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: Future<Output = T>,
{
    match tokio::time::timeout(TEST_TIMEOUT, f).await {
        Ok(value) => value,
        Err(_) => panic!("test operation timed out after {TEST_TIMEOUT:?}"),
    }
}
