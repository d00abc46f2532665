//! crates/pidlog/src/tracing_bridge.rs
//! Bridge between the verbosity threshold and the tracing ecosystem.
//!
//! Hosts that already use `tracing` can keep their instrumentation while
//! honoring this facility's threshold: [`init_tracing`] installs a
//! `tracing-subscriber` fmt subscriber on the same diagnostic stream
//! (stderr), with the maximum level mapped from [`Level`].

use tracing::level_filters::LevelFilter;

use super::config::LogConfig;
use super::level::Level;

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            Level::None => Self::OFF,
            Level::Error => Self::ERROR,
            Level::Info => Self::INFO,
            Level::Debug => Self::DEBUG,
        }
    }
}

/// Installs a global tracing subscriber mirroring `config`.
///
/// Output goes to stderr, ANSI colors follow `config.auto_color`, and the
/// subscriber's max level follows `config.threshold`. Fails if a global
/// subscriber is already set.
pub fn init_tracing(
    config: LogConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::from(config.threshold))
        .with_ansi(config.auto_color)
        .with_writer(std::io::stderr)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_to_matching_filters() {
        assert_eq!(LevelFilter::from(Level::None), LevelFilter::OFF);
        assert_eq!(LevelFilter::from(Level::Error), LevelFilter::ERROR);
        assert_eq!(LevelFilter::from(Level::Info), LevelFilter::INFO);
        assert_eq!(LevelFilter::from(Level::Debug), LevelFilter::DEBUG);
    }

    #[test]
    fn init_tracing_installs_a_subscriber_once() {
        assert!(init_tracing(LogConfig::default()).is_ok());
        // The global default can only be set once per process.
        assert!(init_tracing(LogConfig::default()).is_err());
    }
}
