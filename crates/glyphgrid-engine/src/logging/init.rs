use std::sync::Once;

use env_logger::{Target, WriteStyle};
use log::LevelFilter;

/// How a binary wants its log output.
///
/// The filter actually installed is picked by [`LoggingConfig::resolve_filter`]:
/// an explicit `filter` wins, then `RUST_LOG`, then `level` for every target.
#[derive(Debug)]
pub struct LoggingConfig {
    /// `env_logger` filter directives, e.g. `"glyphgrid_layout=debug,warn"`.
    pub filter: Option<String>,
    pub level: LevelFilter,
    pub target: Target,
    pub write_style: WriteStyle,
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            level: LevelFilter::Info,
            target: Target::Stderr,
            write_style: WriteStyle::Auto,
            timestamps: true,
        }
    }
}

impl LoggingConfig {
    /// Level from a repeated `-v` count: none is info, one is debug, more is trace.
    pub fn from_verbosity(count: u8) -> Self {
        let level = match count {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        Self { level, ..Self::default() }
    }

    /// Stdout carries the protocol: log uncolored to stderr, warnings and up.
    pub fn for_language_server() -> Self {
        Self {
            level: LevelFilter::Warn,
            target: Target::Stderr,
            write_style: WriteStyle::Never,
            timestamps: false,
            ..Self::default()
        }
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Filter directives to install, given the current `RUST_LOG` value.
    pub fn resolve_filter(&self, rust_log: Option<&str>) -> String {
        match (&self.filter, rust_log) {
            (Some(filter), _) => filter.clone(),
            (None, Some(env)) if !env.trim().is_empty() => env.to_string(),
            _ => self.level.as_str().to_ascii_lowercase(),
        }
    }
}

static INIT: Once = Once::new();

/// Install the global logger. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let rust_log = std::env::var("RUST_LOG").ok();
        let filter = config.resolve_filter(rust_log.as_deref());

        let mut builder = env_logger::Builder::new();
        builder
            .parse_filters(&filter)
            .target(config.target)
            .write_style(config.write_style);
        if !config.timestamps {
            builder.format_timestamp(None);
        }
        builder.init();

        log::debug!("logging initialized with filter {filter:?}");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_the_level() {
        assert_eq!(LoggingConfig::from_verbosity(0).level, LevelFilter::Info);
        assert_eq!(LoggingConfig::from_verbosity(1).level, LevelFilter::Debug);
        assert_eq!(LoggingConfig::from_verbosity(2).level, LevelFilter::Trace);
        assert_eq!(LoggingConfig::from_verbosity(9).level, LevelFilter::Trace);
    }

    #[test]
    fn level_applies_without_overrides() {
        let config = LoggingConfig::from_verbosity(1);
        assert_eq!(config.resolve_filter(None), "debug");
        assert_eq!(config.resolve_filter(Some("  ")), "debug");
    }

    #[test]
    fn rust_log_beats_the_level() {
        let config = LoggingConfig::from_verbosity(2);
        assert_eq!(config.resolve_filter(Some("glyphgrid_ui=trace")), "glyphgrid_ui=trace");
    }

    #[test]
    fn explicit_filter_beats_rust_log() {
        let config = LoggingConfig::default().with_filter("glyphgrid_layout=debug,warn");
        assert_eq!(config.resolve_filter(Some("trace")), "glyphgrid_layout=debug,warn");
    }

    #[test]
    fn language_server_logs_quietly_to_stderr() {
        let config = LoggingConfig::for_language_server();
        assert!(matches!(config.target, Target::Stderr));
        assert!(!config.timestamps);
        assert_eq!(config.resolve_filter(None), "warn");
    }
}
