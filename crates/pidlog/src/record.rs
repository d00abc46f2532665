//! crates/pidlog/src/record.rs
//! Per-call log records and the single line renderer.

use std::fmt;
use std::io::{self, Write};

use super::color::RESET;

/// Source location of a log call, captured at the macro expansion site.
///
/// The [`callsite!`](crate::callsite) macro fills this in with the enclosing
/// function's name and the expansion line, standing in for C's
/// `__FUNCTION__`/`__LINE__` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallSite {
    /// Short name of the enclosing function.
    pub function: &'static str,
    /// Source line of the log call.
    pub line: u32,
}

/// Ephemeral description of one log line; built, rendered, and discarded per
/// call. Nothing is retained after the write returns.
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    /// Identifier of the emitting process.
    pub pid: u32,
    /// Where the call was made.
    pub site: CallSite,
    /// Tag text, possibly with embedded color escapes.
    pub tag: &'a str,
}

impl Record<'_> {
    /// Renders the record as exactly one line:
    ///
    /// ```text
    /// [<pid>] <function>:<line>   \t|<tag><message><reset>\n
    /// ```
    ///
    /// `color` prefixes the whole line when present. The trailing reset is
    /// written unconditionally, so a reset already embedded in the tag stays
    /// idempotent.
    pub fn render_to<W>(
        &self,
        writer: &mut W,
        color: Option<&str>,
        args: fmt::Arguments<'_>,
    ) -> io::Result<()>
    where
        W: Write,
    {
        if let Some(color) = color {
            writer.write_all(color.as_bytes())?;
        }
        write!(
            writer,
            "[{}] {}:{}   \t|{}",
            self.pid, self.site.function, self.site.line, self.tag
        )?;
        writer.write_fmt(args)?;
        writer.write_all(RESET.as_bytes())?;
        writer.write_all(b"\n")
    }
}
