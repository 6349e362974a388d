use std::io;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::cli::LogLevel;

/// Install a compact stderr subscriber. `log` records from the scanner are bridged into it.
pub fn init(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    let stderr_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_writer(io::stderr)
        .with_filter(filter);

    if let Err(err) = tracing_subscriber::registry().with(stderr_layer).try_init() {
        eprintln!("logging already initialized: {}", err);
    }
}
