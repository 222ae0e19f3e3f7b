//! Modal message boxes for windowed builds.
//!
//! Windowed builds have no console, so user-visible diagnostics surface
//! in a blocking message box. The call returns only after the user
//! dismisses the dialog; there is no timeout and nothing sits above this
//! sink, so a failed display call is swallowed.

use std::ffi::CString;

use windows::core::{PCSTR, PCWSTR};
use windows::Win32::UI::WindowsAndMessaging::{
    MessageBoxA, MessageBoxW, MB_ICONEXCLAMATION, MB_ICONWARNING, MB_OK, MESSAGEBOX_STYLE,
};

/// Icon style conveying the severity of a dialog.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DialogIcon {
    /// Non-fatal warning condition.
    Warning,
    /// Fatal condition.
    Exclamation,
}

impl DialogIcon {
    const fn style(self) -> MESSAGEBOX_STYLE {
        match self {
            Self::Warning => MB_ICONWARNING,
            Self::Exclamation => MB_ICONEXCLAMATION,
        }
    }
}

/// Upper bound, in UTF-16 units, of dialog text and captions. The final
/// slot is reserved for the terminator.
const WIDE_TEXT_LEN: usize = 1024;

/// Shows a modal message box and blocks until the user dismisses it.
///
/// Text and caption are converted to UTF-16 first. When the message
/// cannot be converted, the raw bytes go out through the narrow-string
/// API instead: not human-readable, but a hint at what the real
/// message was. Captions are hard-coded ASCII and always convert.
pub fn show_message_box(text: &str, caption: &str, icon: DialogIcon) {
    let style = MB_OK | icon.style();

    let mut wide_text = [0u16; WIDE_TEXT_LEN];
    let mut wide_caption = [0u16; WIDE_TEXT_LEN];
    let text_converted =
        encoding::utf8_to_wide(text, &mut wide_text[..WIDE_TEXT_LEN - 1]).is_ok();

    if text_converted
        && encoding::utf8_to_wide(caption, &mut wide_caption[..WIDE_TEXT_LEN - 1]).is_ok()
    {
        // SAFETY: both buffers are NUL-terminated; the reserved final
        // slot was never written.
        unsafe {
            MessageBoxW(
                None,
                PCWSTR(wide_text.as_ptr()),
                PCWSTR(wide_caption.as_ptr()),
                style,
            );
        }
        return;
    }

    let Ok(c_text) = CString::new(text) else {
        return;
    };
    let Ok(c_caption) = CString::new(caption) else {
        return;
    };
    // SAFETY: both pointers reference valid NUL-terminated strings for
    // the duration of the call.
    unsafe {
        MessageBoxA(
            None,
            PCSTR(c_text.as_ptr().cast()),
            PCSTR(c_caption.as_ptr().cast()),
            style,
        );
    }
}
