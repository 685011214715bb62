use std::io;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info,tower_http=info,axum=info";
const JSON_FILTER: &str = "info,sea_orm=warn";

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Compact human-readable lines on stdout. `RUST_LOG` wins over the default filter.
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(filter_or(DEFAULT_FILTER))
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// One JSON object per event, for log shippers. SeaORM statements are
/// quieted to `warn` unless `RUST_LOG` says otherwise.
pub fn init_logging_json() {
    let _ = fmt()
        .with_env_filter(filter_or(JSON_FILTER))
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

/// Pick the formatter from `LOG_FORMAT` (`json` or anything else for compact).
/// Safe to call more than once; later calls are ignored.
pub fn init_logging_from_env() {
    match std::env::var("LOG_FORMAT") {
        Ok(v) if v.eq_ignore_ascii_case("json") => init_logging_json(),
        _ => init_logging_default(),
    }
}
