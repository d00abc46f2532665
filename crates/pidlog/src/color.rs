//! crates/pidlog/src/color.rs
//! ANSI color escapes and the process-id-derived auto palette.

/// Resets the terminal color to its default.
pub const RESET: &str = "\x1b[0m";

/// Red escape, reserved for the error tag.
pub const RED: &str = "\x1b[31m";

/// Yellow escape, reserved for the info tag.
pub const YELLOW: &str = "\x1b[33m";

/// Default terminal color (no tint).
pub const NORMAL: &str = "\x1b[0m";

/// Green escape.
pub const GREEN: &str = "\x1b[32m";

/// Blue escape.
pub const BLUE: &str = "\x1b[34m";

/// Magenta escape.
pub const MAGENTA: &str = "\x1b[35m";

/// Cyan escape.
pub const CYAN: &str = "\x1b[36m";

/// White escape.
pub const WHITE: &str = "\x1b[37m";

/// Rotating palette for debug and custom tags.
///
/// Red and yellow are left out because the error and info tags already own
/// them; keeping arbitrary tags off those colors is a convention, not a
/// correctness requirement.
pub const PALETTE: [&str; 6] = [NORMAL, GREEN, BLUE, MAGENTA, CYAN, WHITE];

/// Selects the palette entry for a process id.
///
/// The mapping is `PALETTE[pid % 6]`: stable within one process, and likely
/// (not guaranteed) distinct across a handful of concurrently running
/// processes sharing a terminal.
///
/// # Examples
///
/// ```
/// use pidlog::{auto_color, PALETTE};
///
/// assert_eq!(auto_color(13), PALETTE[1]);
/// assert_eq!(auto_color(6), auto_color(0));
/// ```
#[must_use]
pub const fn auto_color(pid: u32) -> &'static str {
    PALETTE[(pid % 6) as usize]
}
