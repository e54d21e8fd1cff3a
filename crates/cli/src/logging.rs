use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Selects `text` (default) or `json` log lines.
pub const LOG_FORMAT_ENV: &str = "PROFITBOOK_LOG_FORMAT";

/// Install the global subscriber. Filter comes from `RUST_LOG`, default
/// `warn`. Logs go to stderr; stdout carries program output only.
pub fn init_tracing() {
    let log_format = std::env::var(LOG_FORMAT_ENV).unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
