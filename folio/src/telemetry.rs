//! Telemetry initialization (tracing, fmt subscriber, etc.)
//!
//! Log verbosity is controlled through the standard `RUST_LOG` environment
//! variable, defaulting to `info` when unset:
//!
//! ```bash
//! export RUST_LOG="folio=debug,sqlx=warn"
//! ```

use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize tracing with console output
///
/// This function sets up tracing-subscriber with:
/// - An `EnvFilter` honoring `RUST_LOG` (default level: info)
/// - Console output (fmt layer)
pub fn init_telemetry() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    info!("Telemetry initialized");

    Ok(())
}
