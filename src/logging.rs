//! Log initialisation for the CLI, built on `tracing-subscriber`.
//!
//! Logs go to stderr so stdout stays clean for results (and for JSON
//! output in particular). The library itself only emits events.

use std::io;
use tracing::Level;
use tracing_subscriber::{filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, coloured; for development.
    Pretty,
    Compact,
    /// One JSON object per event; for tool integration.
    Json,
}

impl LogFormat {
    pub fn parse(s: &str) -> Option<LogFormat> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "compact" => Some(LogFormat::Compact),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init(level: Level, format: LogFormat) {
    let targets = Targets::new()
        .with_default(Level::WARN)
        .with_target("codesim", level);
    let layer = create_format_layer(format, io::stderr).with_filter(targets);
    let _ = tracing_subscriber::registry().with(layer).try_init();
}

fn create_format_layer<W, F>(format: LogFormat, make_writer: F) -> Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(LogFormat::parse("JSON"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse(" pretty "), Some(LogFormat::Pretty));
        assert_eq!(LogFormat::parse("xml"), None);
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(Level::DEBUG, LogFormat::Compact);
        init(Level::INFO, LogFormat::Json);
    }
}
