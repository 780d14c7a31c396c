//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Call once at application startup. Log levels are controlled through the
/// `RUST_LOG` environment variable.
pub fn init() {
    env_logger::init();
}

/// Initialize logging for test binaries
///
/// Safe to call from multiple tests; only the first call takes effect.
pub fn init_for_tests() {
    let _ = env_logger::builder().is_test(true).try_init();
}
