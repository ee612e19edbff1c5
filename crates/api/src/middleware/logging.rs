//! Logging initialization for the Goodfellows API.
//!
//! Structured JSON output in production, pretty output for local runs.
//! `RUST_LOG` takes precedence when set; otherwise the filter derives from
//! the configured level with sqlx statement logging dialed down, since every
//! repository query already records its own duration metric.

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LoggingConfig;

/// Filter directives applied when `RUST_LOG` is unset.
fn default_filter(level: &str) -> String {
    format!("{level},goodfellows_api={level},sqlx=warn")
}

/// Initializes the logging subsystem based on configuration.
pub fn init_logging(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(&config.level)));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    match config.format.as_str() {
        "json" => {
            let json_layer = fmt::layer()
                .json()
                .with_span_events(FmtSpan::CLOSE)
                .with_current_span(true)
                .with_target(true);
            subscriber.with(json_layer).init();
        }
        _ => {
            let pretty_layer = fmt::layer()
                .pretty()
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true);
            subscriber.with(pretty_layer).init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_quiets_sqlx() {
        let filter = default_filter("info");
        assert_eq!(filter, "info,goodfellows_api=info,sqlx=warn");
        assert!(EnvFilter::try_new(&filter).is_ok());
    }

    #[test]
    fn test_default_filter_tracks_configured_level() {
        assert!(default_filter("debug").starts_with("debug,goodfellows_api=debug"));
    }
}
