//! crates/pidlog/src/config.rs
//! Process-wide verbosity and color configuration.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use super::level::Level;

static THRESHOLD: AtomicU8 = AtomicU8::new(Level::Debug as u8);
static AUTO_COLOR: AtomicBool = AtomicBool::new(true);

/// Verbosity and color configuration applied with [`init`].
///
/// The default logs everything ([`Level::Debug`]) with auto-color enabled,
/// matching the facility's behavior when a host program never configures it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogConfig {
    /// Highest severity that still renders; lower-priority calls are no-ops.
    pub threshold: Level,
    /// Whether debug and custom tags pick a process-id-derived color.
    pub auto_color: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            threshold: Level::Debug,
            auto_color: true,
        }
    }
}

/// Installs `config` as the process-wide logging configuration.
///
/// Every emission reads this state at invocation time, so the threshold can
/// change at runtime. Calling `init` again overwrites the previous
/// configuration.
pub fn init(config: LogConfig) {
    THRESHOLD.store(config.threshold as u8, Ordering::Relaxed);
    AUTO_COLOR.store(config.auto_color, Ordering::Relaxed);
}

/// Returns the configured verbosity threshold.
#[must_use]
pub fn threshold() -> Level {
    Level::from_u8(THRESHOLD.load(Ordering::Relaxed))
}

/// Reports whether auto-color mode is enabled.
#[must_use]
pub fn auto_color_enabled() -> bool {
    AUTO_COLOR.load(Ordering::Relaxed)
}

/// Reports whether a message at `level` passes the configured threshold.
#[must_use]
pub fn enabled(level: Level) -> bool {
    threshold() >= level
}

// The configuration is process-wide; in-crate tests that mutate it or rely
// on its current value serialize through this lock.
#[cfg(test)]
pub(crate) static TEST_CONFIG_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
