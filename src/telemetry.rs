//! Telemetry initialization (tracing/tracing-subscriber).
//!
//! Behavior:
//! - LOG_LEVEL controls the filter (e.g. "debug" or detailed directives like
//!   "info,puzzle=debug,store=warn").
//! - LOG_FORMAT selects "pretty" (default) or "json" structured logs.
//!
//! Targets are included in the output: `czech_declension` for lifecycle and
//! config, `puzzle` for sampling and answers, `store` for persistence.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,puzzle=debug,store=debug,czech_declension=debug";

/// Install the global subscriber. Returns `false` when the host already has one.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    let installed = match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().try_init().is_ok(),
        _ => builder.try_init().is_ok(),
    };
    if installed {
        tracing::debug!(target: "czech_declension", "Tracing initialized");
    }
    installed
}
