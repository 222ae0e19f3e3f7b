//! Debugger output stream for windowed debug builds.

use std::ffi::CString;

use windows::core::PCSTR;
use windows::Win32::System::Diagnostics::Debug::OutputDebugStringA;

/// Writes one message to the debugger output stream.
///
/// Windowed debug builds have no console; `OutputDebugStringA` makes
/// the text visible in an attached debugger or a capture tool. Messages
/// with interior NUL bytes are dropped.
pub fn output(message: &str) {
    let Ok(c_message) = CString::new(message) else {
        return;
    };
    // SAFETY: the pointer references a valid NUL-terminated string for
    // the duration of the call.
    unsafe {
        OutputDebugStringA(PCSTR(c_message.as_ptr().cast()));
    }
}
