//! Opt-in log output for hosts embedding the tree engine.
//!
//! The engine only emits `tracing` events under the `checkbox_tree` target.
//! With the `telemetry` feature these helpers install a compact `fmt`
//! subscriber; hosts that already run their own subscriber should skip them.

/// Filter used when `RUST_LOG` is unset: engine warnings only (duplicate
/// values on flatten), everything else silent.
pub const DEFAULT_TREE_LOG_FILTER: &str = "warn,checkbox_tree=warn";

/// Filter that surfaces every toggle, filter pass and list operation of the
/// engine, useful while debugging a host's event wiring.
pub const VERBOSE_TREE_LOG_FILTER: &str = "warn,checkbox_tree=trace";

/// Installs the engine's log subscriber, honoring `RUST_LOG` and falling back
/// to [`DEFAULT_TREE_LOG_FILTER`].
///
/// Returns `false` without the `telemetry` feature, or when a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_TREE_LOG_FILTER));
        install(filter)
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

/// Installs the engine's log subscriber with explicit filter `directives`
/// (`RUST_LOG` syntax), ignoring the environment.
///
/// Malformed directives install nothing and return `false`.
#[must_use]
pub fn init_tracing_with_filter(directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        match tracing_subscriber::EnvFilter::try_new(directives) {
            Ok(filter) => install(filter),
            Err(_) => false,
        }
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}

#[cfg(feature = "telemetry")]
fn install(filter: tracing_subscriber::EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .is_ok()
}
