//! Log output for the CLI. `KEYSTASH_LOG_FORMAT=json` switches from text to
//! JSON lines; `RUST_LOG` overrides the default `info` filter.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber, formatted per `KEYSTASH_LOG_FORMAT`.
/// Logs go to stderr and `log` records from the core crate are bridged in.
pub fn init_tracing() {
    let log_format = std::env::var("KEYSTASH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
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
