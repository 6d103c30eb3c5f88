//! Test logging shared by unit tests, integration tests and the simulator's
//! tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Quiet unless asked otherwise.
const DEFAULT_DIRECTIVE: &str = "warn";

/// `TEST_LOG` wins over `RUST_LOG`; neither set means [`DEFAULT_DIRECTIVE`].
fn filter_from_env() -> EnvFilter {
    ["TEST_LOG", "RUST_LOG"]
        .into_iter()
        .find_map(|var| std::env::var(var).ok())
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the test subscriber once per process. Safe to call from every
/// test binary's `ctor` hook.
///
/// ```bash
/// TEST_LOG=bringten_backend=debug cargo test -p bringten-backend
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let installed = fmt()
            .with_env_filter(filter_from_env())
            .with_test_writer()
            .without_time()
            .with_target(false)
            .try_init();
        // Another harness may own the global subscriber already.
        drop(installed);
    });
}
