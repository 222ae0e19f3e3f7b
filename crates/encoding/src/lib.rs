#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `encoding` bridges the bootstrapper's internal UTF-8 text and the
//! UTF-16 representation required by native dialog APIs. Conversions run
//! against caller-provided destination buffers with explicit capacities:
//! they either convert the whole input within the bound or report a typed
//! failure, and they never write past the destination.
//!
//! # Design
//!
//! Both directions are pure Rust over `core`'s UTF-16 iterators; no
//! platform facility is involved, so the crate compiles and is tested on
//! every target. The Win32 active-code-page leg used for console streams
//! is FFI and lives in the `platform` crate, layered on
//! [`utf8_to_wide`].
//!
//! # Errors
//!
//! Failures are reported as [`ConvertError`]. Diagnostic emission treats
//! any conversion failure as a signal to fall back to the raw UTF-8
//! bytes; a message is degraded, never dropped.
//!
//! # Examples
//!
//! Convert a message for a wide-character dialog API:
//!
//! ```
//! use encoding::utf8_to_wide;
//!
//! let mut wide = [0u16; 64];
//! let len = utf8_to_wide("archive damaged", &mut wide).expect("buffer is large enough");
//! assert_eq!(String::from_utf16(&wide[..len]).unwrap(), "archive damaged");
//! ```

use thiserror::Error;

/// Failure modes of a bounded text conversion.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum ConvertError {
    /// The destination buffer cannot hold the converted text.
    #[error("destination buffer too small for converted text ({capacity} units)")]
    CapacityExceeded {
        /// Capacity of the destination buffer, in destination units.
        capacity: usize,
    },
    /// The UTF-16 input contains an unpaired surrogate.
    #[error("input contains an unpaired UTF-16 surrogate")]
    InvalidUtf16,
}

/// Encodes UTF-8 text into a bounded UTF-16 buffer.
///
/// Returns the number of `u16` units written. The destination is filled
/// front-to-back; units past the returned length are untouched. When the
/// encoded form does not fit, the conversion stops with
/// [`ConvertError::CapacityExceeded`] without writing past `dest`;
/// callers must then degrade to the raw UTF-8 bytes instead of dropping
/// the message.
///
/// No terminator is written; callers interfacing with C APIs reserve the
/// final slot of their buffer themselves.
///
/// # Examples
///
/// ```
/// use encoding::{utf8_to_wide, ConvertError};
///
/// let mut wide = [0u16; 4];
/// assert_eq!(utf8_to_wide("ab", &mut wide), Ok(2));
/// assert_eq!(
///     utf8_to_wide("too long", &mut wide),
///     Err(ConvertError::CapacityExceeded { capacity: 4 })
/// );
/// ```
pub fn utf8_to_wide(input: &str, dest: &mut [u16]) -> Result<usize, ConvertError> {
    let mut written = 0;
    for unit in input.encode_utf16() {
        if written == dest.len() {
            return Err(ConvertError::CapacityExceeded {
                capacity: dest.len(),
            });
        }
        dest[written] = unit;
        written += 1;
    }
    Ok(written)
}

/// Decodes UTF-16 text into a bounded UTF-8 buffer.
///
/// Returns the number of bytes written. Characters are committed whole:
/// a scalar whose UTF-8 form does not fit in the remaining capacity
/// fails the conversion rather than leaving a partial sequence behind.
/// Unpaired surrogates fail with [`ConvertError::InvalidUtf16`].
///
/// # Examples
///
/// ```
/// use encoding::{wide_to_utf8, ConvertError};
///
/// let wide: Vec<u16> = "påth".encode_utf16().collect();
/// let mut utf8 = [0u8; 16];
/// let len = wide_to_utf8(&wide, &mut utf8).unwrap();
/// assert_eq!(core::str::from_utf8(&utf8[..len]).unwrap(), "påth");
///
/// // A lone high surrogate is rejected, not replaced.
/// assert_eq!(
///     wide_to_utf8(&[0xd800], &mut utf8),
///     Err(ConvertError::InvalidUtf16)
/// );
/// ```
pub fn wide_to_utf8(input: &[u16], dest: &mut [u8]) -> Result<usize, ConvertError> {
    let mut written: usize = 0;
    for decoded in char::decode_utf16(input.iter().copied()) {
        let ch = decoded.map_err(|_| ConvertError::InvalidUtf16)?;
        let mut scratch = [0u8; 4];
        let encoded = ch.encode_utf8(&mut scratch).as_bytes();
        let Some(end) = written.checked_add(encoded.len()).filter(|end| *end <= dest.len()) else {
            return Err(ConvertError::CapacityExceeded {
                capacity: dest.len(),
            });
        };
        dest[written..end].copy_from_slice(encoded);
        written = end;
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_round_trips_through_both_directions() {
        let mut wide = [0u16; 32];
        let wide_len = utf8_to_wide("Fatal error detected", &mut wide).unwrap();
        assert_eq!(wide_len, 20);

        let mut utf8 = [0u8; 32];
        let utf8_len = wide_to_utf8(&wide[..wide_len], &mut utf8).unwrap();
        assert_eq!(&utf8[..utf8_len], b"Fatal error detected");
    }

    #[test]
    fn supplementary_plane_characters_round_trip() {
        let input = "payload \u{1f980} ok";
        let mut wide = [0u16; 32];
        let wide_len = utf8_to_wide(input, &mut wide).unwrap();
        // The crab occupies a surrogate pair.
        assert_eq!(wide_len, input.chars().count() + 1);

        let mut utf8 = [0u8; 32];
        let utf8_len = wide_to_utf8(&wide[..wide_len], &mut utf8).unwrap();
        assert_eq!(core::str::from_utf8(&utf8[..utf8_len]).unwrap(), input);
    }

    #[test]
    fn encode_reports_exhaustion_without_writing_past_the_bound() {
        let mut wide = [0xffff_u16; 8];
        let result = utf8_to_wide("0123456789", &mut wide[..4]);
        assert_eq!(result, Err(ConvertError::CapacityExceeded { capacity: 4 }));
        // The slots beyond the bound keep their sentinel value.
        assert_eq!(&wide[4..], &[0xffff; 4]);
    }

    #[test]
    fn decode_reports_exhaustion_without_partial_sequences() {
        // "é" needs two UTF-8 bytes; give it one.
        let wide: Vec<u16> = "é".encode_utf16().collect();
        let mut utf8 = [0xaa_u8; 4];
        let result = wide_to_utf8(&wide, &mut utf8[..1]);
        assert_eq!(result, Err(ConvertError::CapacityExceeded { capacity: 1 }));
        // Nothing of the multi-byte sequence was committed.
        assert_eq!(utf8, [0xaa; 4]);
    }

    #[test]
    fn decode_rejects_unpaired_surrogates() {
        let mut utf8 = [0u8; 8];
        assert_eq!(
            wide_to_utf8(&[0x0041, 0xdc00], &mut utf8),
            Err(ConvertError::InvalidUtf16)
        );
        assert_eq!(
            wide_to_utf8(&[0xd83e, 0x0041], &mut utf8),
            Err(ConvertError::InvalidUtf16)
        );
    }

    #[test]
    fn empty_input_converts_to_empty_output() {
        let mut wide = [0u16; 1];
        assert_eq!(utf8_to_wide("", &mut wide), Ok(0));
        let mut utf8 = [0u8; 1];
        assert_eq!(wide_to_utf8(&[], &mut utf8), Ok(0));
        // A zero-capacity destination is fine for empty input.
        assert_eq!(utf8_to_wide("", &mut []), Ok(0));
    }

    #[test]
    fn exact_fit_succeeds() {
        let mut wide = [0u16; 2];
        assert_eq!(utf8_to_wide("ab", &mut wide), Ok(2));
        assert_eq!(wide, [b'a' as u16, b'b' as u16]);
    }
}
