use crate::core::config::LoggingConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Human-readable output is chosen by either `console = true` or
/// `format = "console"`; anything else logs JSON lines.
fn wants_console(config: &LoggingConfig) -> bool {
    config.console || config.format.eq_ignore_ascii_case("console")
}

/// `RUST_LOG` wins over the configured level. An unparsable level falls
/// back to `info` rather than silencing the server.
fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber
pub fn init_tracing(config: &LoggingConfig) {
    let console = wants_console(config);

    let console_layer = console.then(|| {
        fmt::layer()
            .with_target(true)
            .with_ansi(true)
            .with_line_number(true)
    });
    let json_layer = (!console).then(|| {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
    });

    tracing_subscriber::registry()
        .with(build_filter(config))
        .with(console_layer)
        .with(json_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logging(level: &str, format: &str, console: bool) -> LoggingConfig {
        LoggingConfig {
            level: level.to_string(),
            format: format.to_string(),
            console,
        }
    }

    #[test]
    fn test_wants_console() {
        assert!(!wants_console(&logging("info", "json", false)));
        assert!(wants_console(&logging("info", "json", true)));
        assert!(wants_console(&logging("info", "Console", false)));
    }

    #[test]
    fn test_build_filter_falls_back_on_bad_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let filter = build_filter(&logging("club_events=loudest", "json", false));
        assert_eq!(filter.to_string(), "info");
    }
}
