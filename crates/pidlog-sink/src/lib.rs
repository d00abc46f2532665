#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `pidlog-sink` wraps a [`pidlog::LogSink`] in a mutex so that every
//! emission produces one contiguous line even when several threads share the
//! same destination. The core facility deliberately takes no locks; this
//! crate is the opt-in, composable serialization layer for hosts that need
//! cross-thread line atomicity.
//!
//! # Design
//!
//! [`SerialSink`] holds an `Arc<Mutex<LogSink<W>>>` and is [`Clone`], so one
//! writer can be handed to many threads cheaply. Each operation takes the
//! lock, renders a full line, and releases it. [`lock`](SerialSink::lock)
//! exposes the guarded sink for batch emission under a single critical
//! section.
//!
//! # Invariants
//!
//! - No two lines emitted through clones of the same [`SerialSink`]
//!   interleave.
//! - A panicking writer never poisons diagnostics for the rest of the
//!   process; poisoned locks are recovered and reused.
//!
//! # Examples
//!
//! ```
//! use pidlog::CallSite;
//! use pidlog_sink::SerialSink;
//!
//! let sink = SerialSink::with_pid(Vec::new(), 8);
//! let site = CallSite { function: "boot", line: 5 };
//! sink.emit(" INIT ", site, format_args!("ready"))?;
//!
//! let output = String::from_utf8(sink.into_sink().unwrap().into_inner()).unwrap();
//! assert!(output.ends_with("ready\x1b[0m\n"));
//! # Ok::<(), std::io::Error>(())
//! ```

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use pidlog::{CallSite, LogSink};

/// Cloneable, mutex-guarded wrapper around a [`LogSink`].
///
/// Mirrors the sink's operation surface; every call locks, writes one line,
/// and unlocks. See the crate docs for the atomicity contract.
pub struct SerialSink<W> {
    inner: Arc<Mutex<LogSink<W>>>,
}

impl<W> Clone for SerialSink<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<W> fmt::Debug for SerialSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerialSink").finish_non_exhaustive()
    }
}

impl<W> SerialSink<W> {
    /// Wraps a writer, stamping lines with the current process id.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::from_sink(LogSink::new(writer))
    }

    /// Wraps a writer with an explicit process id.
    #[must_use]
    pub fn with_pid(writer: W, pid: u32) -> Self {
        Self::from_sink(LogSink::with_pid(writer, pid))
    }

    /// Wraps an existing [`LogSink`].
    #[must_use]
    pub fn from_sink(sink: LogSink<W>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(sink)),
        }
    }

    /// Locks the inner sink for a batch of emissions.
    ///
    /// Lines written through the returned guard are contiguous with respect
    /// to every clone of this sink.
    pub fn lock(&self) -> MutexGuard<'_, LogSink<W>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Recovers the inner [`LogSink`] when this is the last clone.
    ///
    /// Returns `Err(self)` while other clones are still alive.
    pub fn into_sink(self) -> Result<LogSink<W>, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => Ok(mutex.into_inner().unwrap_or_else(PoisonError::into_inner)),
            Err(inner) => Err(Self { inner }),
        }
    }
}

impl<W> Default for SerialSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> SerialSink<W>
where
    W: Write,
{
    /// Serialized [`LogSink::emit`].
    pub fn emit(&self, tag: &str, site: CallSite, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.lock().emit(tag, site, args)
    }

    /// Serialized [`LogSink::emit_colored`].
    pub fn emit_colored(
        &self,
        tag: &str,
        color: &str,
        site: CallSite,
        args: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        self.lock().emit_colored(tag, color, site, args)
    }

    /// Serialized [`LogSink::emit_auto`].
    pub fn emit_auto(&self, tag: &str, site: CallSite, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.lock().emit_auto(tag, site, args)
    }

    /// Serialized [`LogSink::debug`].
    pub fn debug(&self, site: CallSite, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.lock().debug(site, args)
    }

    /// Serialized [`LogSink::info`].
    pub fn info(&self, site: CallSite, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.lock().info(site, args)
    }

    /// Serialized [`LogSink::error`].
    pub fn error(&self, site: CallSite, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.lock().error(site, args)
    }

    /// Serialized [`LogSink::os_error`].
    pub fn os_error(
        &self,
        error: &io::Error,
        site: CallSite,
        args: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        self.lock().os_error(error, site, args)
    }

    /// Serialized [`LogSink::last_os_error`].
    ///
    /// The thread's last OS error is read before the lock is taken, so a
    /// contended lock cannot clobber the errno being reported.
    pub fn last_os_error(&self, site: CallSite, args: fmt::Arguments<'_>) -> io::Result<()> {
        let error = io::Error::last_os_error();
        self.lock().os_error(&error, site, args)
    }
}
