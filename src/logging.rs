// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! The filter defaults to `info` for this crate and `warn` for everything
//! else; `RUST_LOG` replaces it entirely.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,rapid_photo_downloader=info";

/// Installs the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
