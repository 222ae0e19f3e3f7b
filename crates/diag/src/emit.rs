//! Emission entry points and channel dispatch.
//!
//! Every entry point follows the same sequence: read any ambient error
//! code first, render the message into a bounded [`MessageBuf`], append
//! the error-context suffix if one was requested, then hand the text to
//! each channel the routing table selected. Emission never fails
//! observably: encoding trouble degrades to raw bytes, channel write
//! failures are swallowed, and nothing here terminates the process.
//!
//! The emitter appends no newline of its own; stream-destined text
//! carries its terminator in the format string, dialog text needs none.

use std::fmt::{self, Write as _};

use crate::buffer::MessageBuf;
use crate::route::{route, BuildMode, Destinations, PlatformCaps};
use crate::severity::Severity;

/// Which error-code vocabulary a context suffix uses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Vocabulary {
    /// OS last-error codes.
    Os,
    /// C-runtime `errno` values.
    Errno,
}

/// An error code captured at the failure site, plus the operation that
/// failed.
#[derive(Clone, Copy, Debug)]
struct ErrorContext<'a> {
    operation: &'a str,
    code: i32,
    vocabulary: Vocabulary,
}

impl ErrorContext<'_> {
    fn describe(&self) -> String {
        match self.vocabulary {
            Vocabulary::Os => platform::error::describe_os_error(self.code),
            Vocabulary::Errno => platform::error::describe_errno(self.code),
        }
    }
}

/// Emits a debug-severity message.
///
/// Prefixes the process id so interleaved parent/child bootstrap output
/// stays attributable. Most callers use [`boot_debug!`](crate::boot_debug),
/// which compiles away outside debug builds.
pub fn debug(args: fmt::Arguments<'_>) {
    emit(BuildMode::CURRENT, PlatformCaps::HOST, Severity::Debug, args, None);
}

/// Emits a non-fatal error message.
pub fn error(args: fmt::Arguments<'_>) {
    emit(BuildMode::CURRENT, PlatformCaps::HOST, Severity::Error, args, None);
}

/// Emits a fatal error message.
///
/// Termination stays with the caller; this only reports.
pub fn fatal(args: fmt::Arguments<'_>) {
    emit(BuildMode::CURRENT, PlatformCaps::HOST, Severity::Fatal, args, None);
}

/// Emits a fatal message carrying the OS last-error description for
/// `operation`.
///
/// The ambient code is read before anything else so an intervening call
/// cannot overwrite it.
pub fn fatal_os_error(operation: &str, args: fmt::Arguments<'_>) {
    let code = platform::error::last_error_code();
    emit(
        BuildMode::CURRENT,
        PlatformCaps::HOST,
        Severity::Fatal,
        args,
        Some(ErrorContext {
            operation,
            code,
            vocabulary: Vocabulary::Os,
        }),
    );
}

/// Emits a fatal message carrying the C-runtime error description for
/// `operation`.
pub fn fatal_errno(operation: &str, args: fmt::Arguments<'_>) {
    let code = platform::error::last_errno();
    emit(
        BuildMode::CURRENT,
        PlatformCaps::HOST,
        Severity::Fatal,
        args,
        Some(ErrorContext {
            operation,
            code,
            vocabulary: Vocabulary::Errno,
        }),
    );
}

/// Reports a non-fatal failure with the OS last-error description for
/// `operation`, always on the console stream.
///
/// Unlike [`error`], this never raises a dialog; it is the low-ceremony
/// report used while the bootstrap sequence keeps going.
pub fn os_error_report(operation: &str, args: fmt::Arguments<'_>) {
    let code = platform::error::last_error_code();
    emit_report(
        BuildMode::CURRENT,
        PlatformCaps::HOST,
        args,
        ErrorContext {
            operation,
            code,
            vocabulary: Vocabulary::Os,
        },
    );
}

/// Reports a non-fatal failure with the C-runtime error description for
/// `operation`, always on the console stream.
pub fn errno_report(operation: &str, args: fmt::Arguments<'_>) {
    let code = platform::error::last_errno();
    emit_report(
        BuildMode::CURRENT,
        PlatformCaps::HOST,
        args,
        ErrorContext {
            operation,
            code,
            vocabulary: Vocabulary::Errno,
        },
    );
}

fn emit(
    mode: BuildMode,
    caps: PlatformCaps,
    severity: Severity,
    args: fmt::Arguments<'_>,
    context: Option<ErrorContext<'_>>,
) {
    let destinations = route(mode, caps, severity);
    if !destinations.any() {
        return;
    }

    let mut message = if destinations.dialog {
        MessageBuf::for_dialog()
    } else {
        MessageBuf::for_console()
    };
    if severity.is_debug() {
        let _ = write!(message, "[{}] ", std::process::id());
    }
    let _ = message.write_fmt(args);
    if let Some(context) = context {
        message.append_error_context(context.operation, &context.describe());
    }

    dispatch(severity, &message, destinations);
}

/// Stream-only report path: console stream always, plus the system-log
/// mirror on graphical debug builds whose log viewer stands in for the
/// missing console.
fn emit_report(
    mode: BuildMode,
    caps: PlatformCaps,
    args: fmt::Arguments<'_>,
    context: ErrorContext<'_>,
) {
    let mut message = MessageBuf::for_console();
    let _ = message.write_fmt(args);
    message.append_error_context(context.operation, &context.describe());

    channels::stream(message.as_str());
    if mode.windowed && mode.debug && caps.syslog_mirror {
        channels::syslog(message.as_str());
    }
}

fn dispatch(severity: Severity, message: &MessageBuf, destinations: Destinations) {
    if destinations.stream {
        channels::stream(message.as_str());
    }
    if destinations.dialog {
        channels::dialog(severity, message.as_str());
    }
    if destinations.syslog {
        channels::syslog(message.as_str());
    }
    if destinations.debugger {
        channels::debugger(message.as_str());
    }
}

#[cfg(not(test))]
mod channels {
    use std::io::Write as _;

    use crate::severity::Severity;

    pub(super) fn stream(text: &str) {
        let stderr = std::io::stderr();
        let mut handle = stderr.lock();
        #[cfg(windows)]
        {
            let mut narrow = [0u8; crate::buffer::CONSOLE_TEXT_LEN];
            if let Ok(len) = platform::console::to_active_code_page(text, &mut narrow) {
                let _ = handle.write_all(&narrow[..len]);
                let _ = handle.flush();
                return;
            }
            // Conversion failure degrades to the raw bytes below.
        }
        let _ = handle.write_all(text.as_bytes());
        let _ = handle.flush();
    }

    pub(super) fn dialog(severity: Severity, text: &str) {
        #[cfg(windows)]
        {
            let caption = severity.dialog_caption().unwrap_or("Error detected");
            let icon = if severity.is_fatal() {
                platform::dialog::DialogIcon::Exclamation
            } else {
                platform::dialog::DialogIcon::Warning
            };
            platform::dialog::show_message_box(text, caption, icon);
        }
        #[cfg(not(windows))]
        {
            // Routing never selects the dialog without a backend.
            let _ = (severity, text);
        }
    }

    pub(super) fn syslog(text: &str) {
        #[cfg(unix)]
        platform::syslog::notice(text);
        #[cfg(not(unix))]
        let _ = text;
    }

    pub(super) fn debugger(text: &str) {
        #[cfg(windows)]
        platform::debugger::output(text);
        #[cfg(not(windows))]
        let _ = text;
    }
}

/// Test doubles recording channel traffic per test thread.
#[cfg(test)]
mod channels {
    use std::cell::RefCell;

    use crate::severity::Severity;

    thread_local! {
        static STREAM: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
        static DIALOGS: RefCell<Vec<(Severity, String)>> = const { RefCell::new(Vec::new()) };
        static SYSLOG: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
        static DEBUGGER: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    pub(super) fn stream(text: &str) {
        STREAM.with(|log| log.borrow_mut().push(text.to_owned()));
    }

    pub(super) fn dialog(severity: Severity, text: &str) {
        DIALOGS.with(|log| log.borrow_mut().push((severity, text.to_owned())));
    }

    pub(super) fn syslog(text: &str) {
        SYSLOG.with(|log| log.borrow_mut().push(text.to_owned()));
    }

    pub(super) fn debugger(text: &str) {
        DEBUGGER.with(|log| log.borrow_mut().push(text.to_owned()));
    }

    pub(super) fn take_stream() -> Vec<String> {
        STREAM.with(RefCell::take)
    }

    pub(super) fn take_dialogs() -> Vec<(Severity, String)> {
        DIALOGS.with(RefCell::take)
    }

    pub(super) fn take_syslog() -> Vec<String> {
        SYSLOG.with(RefCell::take)
    }

    pub(super) fn take_debugger() -> Vec<String> {
        DEBUGGER.with(RefCell::take)
    }
}
