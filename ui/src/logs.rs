//! Logging to the javascript console.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

/// Initialize console logging. Call once, before the first render.
pub fn init_logging() {
    let env_filter = EnvFilter::new("warn,ui=debug,payloads=debug");

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is not available in browsers
        .with_level(false)
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::debug!("console logging ready");
}
