//! Logging setup
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - rule compilation and session events
//! - `RUST_LOG=quillmark=trace` - everything from the library

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize a stderr subscriber, `warn` unless RUST_LOG says otherwise
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
