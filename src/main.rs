//! pulse: a real-time CPU and throughput dashboard.
//!
//! Run with:  `RUST_LOG=info pulse`
//! Feed JSON lines instead of sampling the machine by setting
//! `[feed] source = "stdin"` in `~/.config/pulse/pulse.toml`.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging. RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("pulse v{} starting", env!("CARGO_PKG_VERSION"));

    pulse_window::run().map_err(Into::into)
}
