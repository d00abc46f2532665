//! crates/pidlog/src/macros.rs
//! Call-site-capturing macros over the process stderr stream.

/// Expands to the short name of the enclosing function.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        let name = name.trim_end_matches("::{{closure}}");
        match name.rsplit("::").next() {
            Some(short) => short,
            None => name,
        }
    }};
}

/// Captures the enclosing function name and current line as a
/// [`CallSite`](crate::CallSite).
#[macro_export]
macro_rules! callsite {
    () => {
        $crate::CallSite {
            function: $crate::__function_name!(),
            line: ::core::line!(),
        }
    };
}

/// Writes one uncolored line to stderr with a caller-supplied tag,
/// regardless of the configured threshold.
///
/// # Example
/// ```
/// pidlog::log!(" BOOT ", "cache warmed in {}ms", 12);
/// ```
#[macro_export]
macro_rules! log {
    ($tag:expr, $($arg:tt)*) => {
        $crate::__private::emit($tag, $crate::callsite!(), format_args!($($arg)*))
    };
}

/// Writes one line to stderr prefixed with an explicit color escape,
/// regardless of the configured threshold.
///
/// # Example
/// ```
/// pidlog::log_colored!(" BOOT ", pidlog::CYAN, "listening on {}", 8080);
/// ```
#[macro_export]
macro_rules! log_colored {
    ($tag:expr, $color:expr, $($arg:tt)*) => {
        $crate::__private::emit_colored(
            $tag,
            $color,
            $crate::callsite!(),
            format_args!($($arg)*),
        )
    };
}

/// Writes one line to stderr in the process's auto color when auto-color
/// mode is enabled, uncolored otherwise. Not gated by the threshold.
///
/// # Example
/// ```
/// pidlog::log_auto!(" SYNC ", "resynced {} entries", 3);
/// ```
#[macro_export]
macro_rules! log_auto {
    ($tag:expr, $($arg:tt)*) => {
        $crate::__private::emit_auto($tag, $crate::callsite!(), format_args!($($arg)*))
    };
}

/// Writes a debug line to stderr when the threshold allows
/// [`Level::Debug`](crate::Level::Debug).
///
/// # Example
/// ```
/// pidlog::debug!("retry {} of {}", 1, 5);
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::__private::debug($crate::callsite!(), format_args!($($arg)*))
    };
}

/// Writes an info line to stderr when the threshold allows
/// [`Level::Info`](crate::Level::Info). The tag always renders yellow.
///
/// # Example
/// ```
/// pidlog::info!("connected to {}", "upstream");
/// ```
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__private::info($crate::callsite!(), format_args!($($arg)*))
    };
}

/// Writes an error line to stderr when the threshold allows
/// [`Level::Error`](crate::Level::Error). The tag always renders red.
///
/// # Example
/// ```
/// pidlog::error!("handshake rejected");
/// ```
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::__private::error($crate::callsite!(), format_args!($($arg)*))
    };
}

/// Writes an error line with the thread's last OS error description appended
/// after `": "`, like C's `perror`. Gated like [`error!`](crate::error).
///
/// # Example
/// ```
/// if std::fs::metadata("/nonexistent").is_err() {
///     pidlog::perror!("stat failed");
/// }
/// ```
#[macro_export]
macro_rules! perror {
    ($($arg:tt)*) => {
        $crate::__private::last_os_error($crate::callsite!(), format_args!($($arg)*))
    };
}

/// Implementation detail of the logging macros; not part of the public API.
#[doc(hidden)]
pub mod __private {
    use std::fmt::Arguments;
    use std::io;

    use crate::record::CallSite;
    use crate::sink::LogSink;

    // Write failures on the diagnostic stream are deliberately swallowed:
    // logging is best-effort and never surfaces errors to the call site.

    pub fn emit(tag: &str, site: CallSite, args: Arguments<'_>) {
        let _ = LogSink::new(io::stderr().lock()).emit(tag, site, args);
    }

    pub fn emit_colored(tag: &str, color: &str, site: CallSite, args: Arguments<'_>) {
        let _ = LogSink::new(io::stderr().lock()).emit_colored(tag, color, site, args);
    }

    pub fn emit_auto(tag: &str, site: CallSite, args: Arguments<'_>) {
        let _ = LogSink::new(io::stderr().lock()).emit_auto(tag, site, args);
    }

    pub fn debug(site: CallSite, args: Arguments<'_>) {
        let _ = LogSink::new(io::stderr().lock()).debug(site, args);
    }

    pub fn info(site: CallSite, args: Arguments<'_>) {
        let _ = LogSink::new(io::stderr().lock()).info(site, args);
    }

    pub fn error(site: CallSite, args: Arguments<'_>) {
        let _ = LogSink::new(io::stderr().lock()).error(site, args);
    }

    pub fn last_os_error(site: CallSite, args: Arguments<'_>) {
        let _ = LogSink::new(io::stderr().lock()).last_os_error(site, args);
    }
}
