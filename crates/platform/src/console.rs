//! Active-code-page conversion for console streams.
//!
//! Console builds write diagnostics to the standard error stream, which
//! on Windows interprets narrow output in the console's active code
//! page rather than UTF-8. Text is converted before the write; when
//! conversion fails, the emitter degrades to the raw UTF-8 bytes so the
//! message is garbled at worst, never lost.

use encoding::ConvertError;
use windows::core::PCSTR;
use windows::Win32::Globalization::{WideCharToMultiByte, CP_ACP};

/// Upper bound, in UTF-16 units, of console text this module converts.
/// Matches the emitter's console message bound.
const WIDE_TEXT_LEN: usize = 2048;

/// Converts UTF-8 console text to the active code page.
///
/// Returns the number of bytes written into `dest`. Fails, without
/// writing past `dest`, when the text exceeds the conversion buffer or
/// the destination capacity.
pub fn to_active_code_page(text: &str, dest: &mut [u8]) -> Result<usize, ConvertError> {
    let mut wide = [0u16; WIDE_TEXT_LEN];
    let wide_len = encoding::utf8_to_wide(text, &mut wide)?;
    if wide_len == 0 {
        return Ok(0);
    }
    // SAFETY: both slices are valid for their lengths; the conversion
    // writes at most `dest.len()` bytes and reports the byte count.
    let written = unsafe {
        WideCharToMultiByte(
            CP_ACP,
            0,
            &wide[..wide_len],
            Some(dest),
            PCSTR::null(),
            None,
        )
    };
    if written <= 0 {
        return Err(ConvertError::CapacityExceeded {
            capacity: dest.len(),
        });
    }
    Ok(written as usize)
}
