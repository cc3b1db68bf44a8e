//! Opt-in tracing setup for applications embedding `chart-host`.
//!
//! The library only emits `tracing` events. Hosts either call one of the
//! initializers below once at startup or install their own subscriber.

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_TRACING_FILTER: &str = "info";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back
/// to `DEFAULT_TRACING_FILTER`.
///
/// Returns `false` when the `telemetry` feature is off or a global subscriber
/// is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_TRACING_FILTER)
}

/// Like `init_default_tracing`, with a caller-chosen fallback directive such
/// as `chart_host=trace` for lifecycle debugging.
#[must_use]
pub fn init_tracing_with_fallback(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback_filter))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACING_FILTER));
        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
        if installed {
            tracing::debug!(fallback_filter, "chart-host tracing initialized");
        }
        return installed;
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
