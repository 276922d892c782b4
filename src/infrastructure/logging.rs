//! Console logging setup and the separator lines framing the run.

use anyhow::{Result, anyhow};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Width of separator lines in the console output.
pub const SCREEN_WIDTH: usize = 100;

/// Initialize the tracing subscriber.
///
/// `trace` lowers the crate filter to trace level; `RUST_LOG` overrides both.
pub fn init_logging(trace: bool) -> Result<()> {
    let default_filter = if trace {
        "aftercredits=trace"
    } else {
        "aftercredits=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

/// Log a labeled separator line.
pub fn separator(label: &str) {
    info!("{:=^width$}", format!(" {label} "), width = SCREEN_WIDTH);
}
