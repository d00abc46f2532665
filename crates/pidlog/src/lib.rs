#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `pidlog` provides leveled, color-coded, PID-tagged console diagnostics.
//! Each call renders exactly one line to the process's stderr (or to any
//! [`std::io::Write`] target through [`LogSink`]), tagged with the severity,
//! the emitting process id, and the call site's function and line.
//!
//! # Design
//!
//! Four severity levels ([`Level`]) gate emission against a process-wide
//! threshold installed with [`init`] and read at every call. The error and
//! info tags carry fixed colors (red and yellow) baked into the tag text;
//! the debug tag and caller-supplied custom tags rotate through a six-entry
//! palette indexed by `pid % 6`, so concurrently running processes sharing a
//! terminal are likely to render in distinct colors.
//!
//! The convenience macros ([`debug!`], [`info!`], [`error!`], [`perror!`],
//! and the unconditional [`log!`] family) capture the call site and write to
//! stderr, discarding write errors: diagnostics are best-effort and never
//! produce a result for the caller to handle.
//!
//! # Invariants
//!
//! - A message at level `L` is emitted iff the threshold `T` satisfies
//!   `T >= L`.
//! - Every emitted line carries exactly one trailing color reset and one
//!   newline.
//! - Error and info tags render red and yellow on every path; only debug and
//!   custom tags participate in auto-color rotation.
//! - The sink takes no locks. Cross-thread line atomicity on a shared
//!   destination is the caller's concern; the `pidlog-sink` crate offers a
//!   serialized wrapper for exactly that.
//!
//! # Errors
//!
//! [`LogSink`] methods surface [`std::io::Error`] values from the underlying
//! writer unchanged. The macro layer swallows them.
//!
//! # Examples
//!
//! ```
//! use pidlog::{init, Level, LogConfig};
//!
//! init(LogConfig { threshold: Level::Info, auto_color: true });
//!
//! pidlog::info!("starting worker {}", 3);
//! pidlog::debug!("this line is suppressed at the Info threshold");
//! ```
//!
//! Render into a buffer with a deterministic process id:
//!
//! ```
//! use pidlog::{CallSite, LogSink};
//!
//! let mut sink = LogSink::with_pid(Vec::new(), 13);
//! let site = CallSite { function: "restore", line: 41 };
//! sink.emit(" CACHE ", site, format_args!("{} entries", 7))?;
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(output, "[13] restore:41   \t| CACHE 7 entries\x1b[0m\n");
//! # Ok::<(), std::io::Error>(())
//! ```

mod color;
mod config;
mod level;
mod macros;
mod record;
mod sink;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use color::{BLUE, CYAN, GREEN, MAGENTA, NORMAL, PALETTE, RED, RESET, WHITE, YELLOW, auto_color};
pub use config::{LogConfig, auto_color_enabled, enabled, init, threshold};
pub use level::{DEBUG_TAG, ERROR_TAG, INFO_TAG, Level, ParseLevelError};
pub use record::{CallSite, Record};
pub use sink::LogSink;
#[cfg(feature = "tracing")]
pub use tracing_bridge::init_tracing;

#[doc(hidden)]
pub use macros::__private;
