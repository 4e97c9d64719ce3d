//! Parser diagnostics.
//!
//! Built with `--features tracing`, `debug!` and `warn!` are the `tracing`
//! macros and `init()` sends them to stderr so list output on stdout stays
//! clean. Without the feature the macros expand to nothing and the parser
//! carries no logging cost.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

// Stand-ins that swallow the same field syntax the tracing macros take
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};

/// Install a stderr subscriber filtered by `RUST_LOG`, e.g.
/// `RUST_LOG=bulletlist=warn` to see coerced numbers and ignored options.
#[cfg(feature = "tracing")]
pub fn init() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(feature = "tracing"))]
pub fn init() {}
