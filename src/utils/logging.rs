//! Structured logging bootstrap.
//!
//! The library itself only emits `tracing` events; installing a
//! subscriber is the embedding application's job. This helper covers
//! binaries and demos that want the conventional env-filtered console
//! subscriber.

use tracing_subscriber::{fmt, EnvFilter};

/// Install a console subscriber. `RUST_LOG` takes precedence; the given
/// directive is the fallback when it is unset. Safe to call more than
/// once; later calls are no-ops.
pub fn init(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = fmt().with_env_filter(filter).try_init();
}
