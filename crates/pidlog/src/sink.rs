//! crates/pidlog/src/sink.rs
//! The log sink: formats records and writes them to an arbitrary writer.

use std::fmt;
use std::io::{self, Write};

use super::color::auto_color;
use super::config;
use super::level::{DEBUG_TAG, ERROR_TAG, INFO_TAG, Level};
use super::record::{CallSite, Record};

/// Writes formatted log lines into an [`io::Write`] target.
///
/// The sink owns the underlying writer together with the process id used for
/// auto-color selection. The pid is captured once at construction; tests can
/// inject a fixed value via [`with_pid`](Self::with_pid) to make color
/// selection deterministic.
///
/// The sink performs no locking of its own. When several threads share one
/// destination, bytes from concurrent calls may interleave unless the
/// underlying writer serializes whole writes; wrap the sink in
/// `pidlog-sink`'s serialized wrapper when line atomicity across threads is
/// required.
///
/// # Examples
///
/// Collect a line into a [`Vec<u8>`] with a deterministic pid:
///
/// ```
/// use pidlog::{CallSite, LogSink};
///
/// let mut sink = LogSink::with_pid(Vec::new(), 7);
/// let site = CallSite { function: "demo", line: 3 };
/// sink.emit(" DEMO ", site, format_args!("ready"))?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output, "[7] demo:3   \t| DEMO ready\x1b[0m\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct LogSink<W> {
    writer: W,
    pid: u32,
}

impl<W> LogSink<W> {
    /// Creates a sink that tags lines with the current process id.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_pid(writer, std::process::id())
    }

    /// Creates a sink with an explicit process id.
    ///
    /// Intended for tests and for hosts that forward diagnostics on behalf
    /// of another process.
    #[must_use]
    pub const fn with_pid(writer: W, pid: u32) -> Self {
        Self { writer, pid }
    }

    /// Returns the process id stamped onto every line.
    #[must_use]
    pub const fn pid(&self) -> u32 {
        self.pid
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub const fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Default for LogSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> LogSink<W>
where
    W: Write,
{
    const fn record<'a>(&self, tag: &'a str, site: CallSite) -> Record<'a> {
        Record {
            pid: self.pid,
            site,
            tag,
        }
    }

    /// Writes one uncolored line, regardless of the configured threshold.
    ///
    /// This is the unconditional emission primitive the leveled helpers are
    /// built on.
    pub fn emit(&mut self, tag: &str, site: CallSite, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.record(tag, site).render_to(&mut self.writer, None, args)
    }

    /// Writes one line prefixed with `color`, regardless of the threshold.
    pub fn emit_colored(
        &mut self,
        tag: &str,
        color: &str,
        site: CallSite,
        args: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        self.record(tag, site)
            .render_to(&mut self.writer, Some(color), args)
    }

    /// Writes one line in the sink's auto color when auto-color mode is
    /// enabled, or uncolored otherwise.
    ///
    /// Tags with embedded escapes (the error and info tags) keep their own
    /// color either way; only the surrounding line picks up the palette
    /// entry.
    pub fn emit_auto(
        &mut self,
        tag: &str,
        site: CallSite,
        args: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        if config::auto_color_enabled() {
            self.emit_colored(tag, auto_color(self.pid), site, args)
        } else {
            self.emit(tag, site, args)
        }
    }

    /// Emits a debug line, or does nothing when the threshold is below
    /// [`Level::Debug`].
    pub fn debug(&mut self, site: CallSite, args: fmt::Arguments<'_>) -> io::Result<()> {
        if !config::enabled(Level::Debug) {
            return Ok(());
        }
        self.emit_auto(DEBUG_TAG, site, args)
    }

    /// Emits an info line, or does nothing when the threshold is below
    /// [`Level::Info`]. The tag renders yellow on every path.
    pub fn info(&mut self, site: CallSite, args: fmt::Arguments<'_>) -> io::Result<()> {
        if !config::enabled(Level::Info) {
            return Ok(());
        }
        self.emit_auto(INFO_TAG, site, args)
    }

    /// Emits an error line, or does nothing when the threshold is below
    /// [`Level::Error`]. The tag renders red on every path.
    pub fn error(&mut self, site: CallSite, args: fmt::Arguments<'_>) -> io::Result<()> {
        if !config::enabled(Level::Error) {
            return Ok(());
        }
        self.emit_auto(ERROR_TAG, site, args)
    }

    /// Emits an error line with `": <description>"` appended, where the
    /// description comes from `error`. Gated like [`error`](Self::error).
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    /// use pidlog::{CallSite, LogSink};
    ///
    /// let mut sink = LogSink::with_pid(Vec::new(), 1);
    /// let site = CallSite { function: "read_config", line: 12 };
    /// let missing = io::Error::from_raw_os_error(2);
    /// sink.os_error(&missing, site, format_args!("read failed"))?;
    ///
    /// let output = String::from_utf8(sink.into_inner()).unwrap();
    /// assert!(output.contains("read failed: "));
    /// # Ok::<(), io::Error>(())
    /// ```
    pub fn os_error(
        &mut self,
        error: &io::Error,
        site: CallSite,
        args: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        if !config::enabled(Level::Error) {
            return Ok(());
        }
        self.emit_auto(ERROR_TAG, site, format_args!("{args}: {error}"))
    }

    /// Emits an error line describing the calling thread's last OS error,
    /// like C's `perror`. Gated like [`error`](Self::error).
    pub fn last_os_error(&mut self, site: CallSite, args: fmt::Arguments<'_>) -> io::Result<()> {
        // Read errno before anything else can clobber it.
        let error = io::Error::last_os_error();
        self.os_error(&error, site, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{CYAN, PALETTE};

    fn site() -> CallSite {
        CallSite {
            function: "worker",
            line: 99,
        }
    }

    fn take_output(sink: LogSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).expect("utf-8")
    }

    // Tests below rely on the default process-wide configuration, which other
    // tests temporarily replace.
    fn config_guard() -> std::sync::MutexGuard<'static, ()> {
        crate::config::TEST_CONFIG_LOCK
            .lock()
            .unwrap_or_else(|e| e.into_inner())
    }

    #[test]
    fn new_captures_current_process_id() {
        let sink: LogSink<Vec<u8>> = LogSink::new(Vec::new());
        assert_eq!(sink.pid(), std::process::id());
    }

    #[test]
    fn emit_writes_uncolored_line() {
        let mut sink = LogSink::with_pid(Vec::new(), 5);
        sink.emit(" CUSTOM ", site(), format_args!("hello"))
            .expect("write succeeds");

        assert_eq!(
            take_output(sink),
            "[5] worker:99   \t| CUSTOM hello\x1b[0m\n"
        );
    }

    #[test]
    fn emit_colored_prefixes_requested_color() {
        let mut sink = LogSink::with_pid(Vec::new(), 5);
        sink.emit_colored(" CUSTOM ", CYAN, site(), format_args!("hi"))
            .expect("write succeeds");

        let output = take_output(sink);
        assert!(output.starts_with(CYAN));
    }

    #[test]
    fn emit_auto_uses_injected_pid_for_palette_index() {
        let _guard = config_guard();
        // 13 % 6 == 1
        let mut sink = LogSink::with_pid(Vec::new(), 13);
        sink.emit_auto(" CUSTOM ", site(), format_args!("x"))
            .expect("write succeeds");

        let output = take_output(sink);
        assert!(output.starts_with(PALETTE[1]));
    }

    #[test]
    fn os_error_appends_description_after_message() {
        let _guard = config_guard();
        let mut sink = LogSink::with_pid(Vec::new(), 1);
        let missing = io::Error::from_raw_os_error(2);
        let expected_suffix = format!("read failed: {missing}\x1b[0m\n");

        sink.os_error(&missing, site(), format_args!("read failed"))
            .expect("write succeeds");

        assert!(take_output(sink).ends_with(&expected_suffix));
    }

    #[test]
    fn os_error_with_empty_message_keeps_separator() {
        let _guard = config_guard();
        let mut sink = LogSink::with_pid(Vec::new(), 1);
        let missing = io::Error::from_raw_os_error(2);

        sink.os_error(&missing, site(), format_args!(""))
            .expect("write succeeds");

        assert!(take_output(sink).contains(&format!("|\x1b[31m ERROR \x1b[0m: {missing}")));
    }

    #[test]
    fn accessors_expose_writer_and_pid() {
        let mut sink = LogSink::with_pid(vec![1u8], 3);
        assert_eq!(sink.get_ref(), &[1u8]);
        sink.get_mut().push(2);
        assert_eq!(sink.into_inner(), vec![1u8, 2]);
    }
}
