//! System log notices for graphical debug builds.
//!
//! A macOS app bundle has no console, so debug-build diagnostics are
//! mirrored to syslog(3) where the Console log viewer picks them up.
//! The DEBUG and INFO priorities are filtered out of that view by
//! default, so entries go out at NOTICE.

use std::ffi::CString;

/// Sends one message to the system log at NOTICE priority.
///
/// No `openlog` call is made; entries carry the default process ident.
/// Messages with interior NUL bytes are dropped; there is no way to
/// hand them to syslog intact.
pub fn notice(message: &str) {
    let Ok(c_message) = CString::new(message) else {
        return;
    };
    // syslog(3) interprets `%` as a format specifier. Routing the text
    // through "%s" avoids format string injection.
    // SAFETY: both pointers reference valid NUL-terminated C strings for
    // the duration of the call.
    unsafe {
        libc::syslog(
            libc::LOG_NOTICE,
            c"%s".as_ptr(),
            c_message.as_ptr(),
        );
    }
}
