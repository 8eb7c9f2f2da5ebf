use std::sync::Once;

static INIT: Once = Once::new();

/// Install a test tracing subscriber once per test binary. Honors
/// `RUST_LOG` so dispatch logging can be inspected when a test fails.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
