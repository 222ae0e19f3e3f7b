//! Translation of OS and C-runtime error codes into readable text.
//!
//! Two vocabularies exist side by side. The OS vocabulary is the
//! platform's ambient last-error state: `GetLastError()` on Windows,
//! `errno` elsewhere. The C-runtime vocabulary is always `errno`. The
//! two coincide on Unix and differ on Windows, where a failed Win32 call
//! sets the last-error slot while CRT wrappers set `errno`. A message
//! carries one vocabulary or the other, never both.
//!
//! Callers must read the ambient code *before* any other library call:
//! the slot is overwritten by whatever fails (or succeeds) next. The
//! translators here take the code as an argument and never re-fetch it.

/// Upper bound, in bytes, of a translated error description.
pub const ERROR_TEXT_LEN: usize = 256;

/// Reads the ambient OS last-error code for the current thread.
///
/// Call this immediately after the failed operation, before anything
/// else that might touch the slot.
#[cfg(windows)]
#[must_use]
pub fn last_error_code() -> i32 {
    use windows::Win32::Foundation::GetLastError;

    GetLastError().0 as i32
}

/// Reads the ambient OS last-error code for the current thread.
///
/// On Unix the OS vocabulary is `errno`; this is the same value
/// [`last_errno`] reports.
#[cfg(unix)]
#[must_use]
pub fn last_error_code() -> i32 {
    std::io::Error::last_os_error().raw_os_error().unwrap_or(0)
}

/// Reads the C runtime's ambient `errno` for the current thread.
#[cfg(windows)]
#[must_use]
pub fn last_errno() -> i32 {
    unsafe extern "C" {
        fn _errno() -> *mut libc::c_int;
    }
    // SAFETY: _errno returns the address of the calling thread's errno
    // slot, which is valid for the life of the thread.
    unsafe { *_errno() }
}

/// Reads the C runtime's ambient `errno` for the current thread.
#[cfg(unix)]
#[must_use]
pub fn last_errno() -> i32 {
    last_error_code()
}

/// Translates an OS last-error code into a bounded description.
///
/// Uses the system message table (`FormatMessageW`), trims the trailing
/// CR/LF the formatter appends, and converts the text to UTF-8. Codes
/// the system cannot describe yield `"unknown error <code>"`.
#[cfg(windows)]
#[must_use]
pub fn describe_os_error(code: i32) -> String {
    use windows::core::PWSTR;
    use windows::Win32::System::Diagnostics::Debug::{
        FormatMessageW, FORMAT_MESSAGE_FROM_SYSTEM, FORMAT_MESSAGE_IGNORE_INSERTS,
    };

    let mut wide = [0u16; ERROR_TEXT_LEN];
    // SAFETY: the buffer is writable for ERROR_TEXT_LEN units; the
    // formatter writes at most that many and returns the unit count.
    let len = unsafe {
        FormatMessageW(
            FORMAT_MESSAGE_FROM_SYSTEM | FORMAT_MESSAGE_IGNORE_INSERTS,
            None,
            code as u32,
            0,
            PWSTR(wide.as_mut_ptr()),
            wide.len() as u32,
            None,
        )
    } as usize;
    if len == 0 {
        return format!("unknown error {code}");
    }

    let mut utf8 = [0u8; ERROR_TEXT_LEN * 3];
    match encoding::wide_to_utf8(&wide[..len], &mut utf8) {
        Ok(utf8_len) => {
            let text = core::str::from_utf8(&utf8[..utf8_len])
                .expect("UTF-16 decoder emits complete UTF-8 sequences");
            bounded(text.trim_end())
        }
        Err(_) => format!("unknown error {code}"),
    }
}

/// Translates an OS last-error code into a bounded description.
///
/// On Unix the OS vocabulary is `errno`, so this is
/// [`describe_errno`] under another entry point.
#[cfg(unix)]
#[must_use]
pub fn describe_os_error(code: i32) -> String {
    describe_errno(code)
}

/// Translates a C-runtime error number into a bounded description.
#[cfg(unix)]
#[must_use]
pub fn describe_errno(code: i32) -> String {
    let mut buf = [0 as libc::c_char; ERROR_TEXT_LEN];
    // SAFETY: `buf` is writable for ERROR_TEXT_LEN bytes; strerror_r
    // NUL-terminates within the bound on success.
    let rc = unsafe { libc::strerror_r(code, buf.as_mut_ptr(), buf.len()) };
    if rc != 0 {
        return format!("unknown error {code}");
    }
    // SAFETY: strerror_r reported success, so `buf` now holds a
    // NUL-terminated string.
    let text = unsafe { std::ffi::CStr::from_ptr(buf.as_ptr()) };
    bounded(&text.to_string_lossy())
}

/// Translates a C-runtime error number into a bounded description.
#[cfg(windows)]
#[must_use]
pub fn describe_errno(code: i32) -> String {
    // SAFETY: strerror returns a pointer into CRT-owned storage that
    // stays valid until the next strerror call on this thread; the text
    // is copied out immediately. The bootstrap sequence is
    // single-threaded at every diagnostic call site.
    let text = unsafe {
        let ptr = libc::strerror(code);
        if ptr.is_null() {
            return format!("unknown error {code}");
        }
        std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned()
    };
    bounded(&text)
}

/// Caps a description at [`ERROR_TEXT_LEN`] bytes on a character
/// boundary.
fn bounded(text: &str) -> String {
    if text.len() <= ERROR_TEXT_LEN {
        return text.to_owned();
    }
    let mut cut = ERROR_TEXT_LEN;
    while cut > 0 && !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text[..cut].to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn describe_errno_translates_known_codes() {
        assert_eq!(describe_errno(libc::ENOENT), "No such file or directory");
        assert_eq!(describe_errno(libc::EACCES), "Permission denied");
    }

    #[test]
    #[cfg(unix)]
    fn describe_os_error_shares_the_errno_vocabulary() {
        assert_eq!(describe_os_error(libc::ENOENT), describe_errno(libc::ENOENT));
    }

    #[test]
    fn unknown_codes_fall_back_to_the_numeric_form() {
        let text = describe_os_error(-424242);
        // Some libcs render their own "Unknown error" wording; either
        // way the code must survive into the text.
        assert!(text.contains("424242"), "unexpected text: {text}");
    }

    #[test]
    fn descriptions_never_exceed_the_bound() {
        for code in [0, 1, 2, 13, 9999, -1] {
            assert!(describe_errno(code).len() <= ERROR_TEXT_LEN);
            assert!(describe_os_error(code).len() <= ERROR_TEXT_LEN);
        }
    }

    #[test]
    fn bounded_cuts_on_a_character_boundary() {
        let long = "é".repeat(ERROR_TEXT_LEN);
        let capped = bounded(&long);
        assert!(capped.len() <= ERROR_TEXT_LEN);
        assert!(capped.chars().all(|ch| ch == 'é'));
    }

    #[test]
    #[cfg(unix)]
    fn last_error_code_reflects_a_failed_operation() {
        let missing = std::fs::File::open("/packboot/definitely/not/here");
        let io_code = missing
            .expect_err("path must not exist")
            .raw_os_error()
            .expect("open failure carries an OS code");
        assert_eq!(io_code, libc::ENOENT);
    }
}
