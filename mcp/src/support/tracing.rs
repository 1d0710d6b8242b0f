use std::path::Path;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, Registry};

use super::lazy_file_writer::LazyFileWriter;

static CURRENT_LEVEL: AtomicU8 = AtomicU8::new(TracingLevel::Warn.as_u8());

/// HTTP stack targets that only add connection noise to the trace log
const SUPPRESSED_TARGETS: &[&str] = &["reqwest::", "hyper", "h2::", "rustls::", "want::"];

/// Level filter backed by a process-wide atomic so it can change at runtime
#[derive(Clone)]
pub struct DynamicFilter;

impl<S> Layer<S> for DynamicFilter
where
    S: Subscriber,
{
    fn enabled(
        &self,
        metadata: &tracing::Metadata<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) -> bool {
        let target = metadata.target();
        if SUPPRESSED_TARGETS
            .iter()
            .any(|prefix| target.starts_with(prefix))
        {
            return false;
        }
        level_enabled(*metadata.level(), CURRENT_LEVEL.load(Ordering::Relaxed))
    }
}

const fn level_enabled(level: Level, current: u8) -> bool {
    let value = match level {
        Level::ERROR => 0,
        Level::WARN => 1,
        Level::INFO => 2,
        Level::DEBUG => 3,
        _ => 4,
    };
    value <= current
}

/// Trace verbosity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TracingLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl FromStr for TracingLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(format!(
                "invalid tracing level '{s}'; valid levels are: error, warn, info, debug, trace"
            )),
        }
    }
}

impl TracingLevel {
    const fn as_u8(self) -> u8 {
        match self {
            Self::Error => 0,
            Self::Warn => 1,
            Self::Info => 2,
            Self::Debug => 3,
            Self::Trace => 4,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Install the file subscriber at `level`.
    ///
    /// The log file is only created once something at or above the level is
    /// emitted, so nothing is written to disk at the default level unless a
    /// warning occurs.
    pub fn init_file_tracing(log_path: &Path, level: Self) {
        CURRENT_LEVEL.store(level.as_u8(), Ordering::Relaxed);

        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(LazyFileWriter::new(log_path.to_path_buf()))
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        Registry::default()
            .with(DynamicFilter)
            .with(file_layer)
            .init();
    }

    pub fn current() -> Self {
        match CURRENT_LEVEL.load(Ordering::Relaxed) {
            0 => Self::Error,
            2 => Self::Info,
            3 => Self::Debug,
            4 => Self::Trace,
            _ => Self::Warn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_level_from_str() {
        assert_eq!("error".parse(), Ok(TracingLevel::Error));
        assert_eq!("WARN".parse(), Ok(TracingLevel::Warn));
        assert_eq!(" info ".parse(), Ok(TracingLevel::Info));
        assert_eq!("Debug".parse(), Ok(TracingLevel::Debug));
        assert_eq!("trace".parse(), Ok(TracingLevel::Trace));
        assert!("verbose".parse::<TracingLevel>().is_err());
    }

    #[test]
    fn test_level_round_trips_through_str() {
        for level in [
            TracingLevel::Error,
            TracingLevel::Warn,
            TracingLevel::Info,
            TracingLevel::Debug,
            TracingLevel::Trace,
        ] {
            assert_eq!(level.as_str().parse(), Ok(level));
        }
    }

    #[test]
    fn test_level_enabled() {
        let warn = TracingLevel::Warn.as_u8();
        assert!(level_enabled(Level::ERROR, warn));
        assert!(level_enabled(Level::WARN, warn));
        assert!(!level_enabled(Level::INFO, warn));
        assert!(level_enabled(Level::TRACE, TracingLevel::Trace.as_u8()));
    }
}
