//! Fixed-capacity message buffer.
//!
//! Every diagnostic is rendered into a [`MessageBuf`] before it reaches
//! an output channel. The buffer is the subsystem's overflow defense:
//! append operations check remaining capacity and truncate or skip
//! rather than grow, so a message can never exceed its channel bound no
//! matter how long the formatted text gets.

use std::fmt;

/// Byte bound of a dialog-destined message, including the slot reserved
/// for the terminator that C string conversion appends.
pub const DIALOG_TEXT_LEN: usize = 1024;

/// Byte bound of a console-destined message. Console text runs through
/// an encoding conversion on some platforms and gets the roomier bound.
pub const CONSOLE_TEXT_LEN: usize = 2 * DIALOG_TEXT_LEN;

const SEPARATOR: &str = ": ";

/// Fixed-capacity text buffer with tail-only, boundary-safe truncation.
///
/// The capacity is one byte short of the channel bound: the final slot
/// belongs to the NUL terminator added when the text crosses into a C
/// API. Truncation always drops the tail, never the head, and never
/// splits a UTF-8 sequence, so [`as_str`](Self::as_str) is total.
///
/// # Examples
///
/// ```
/// use std::fmt::Write as _;
///
/// use diag::MessageBuf;
///
/// let mut message = MessageBuf::for_dialog();
/// write!(message, "cannot open archive {}", "demo.pkg").unwrap();
/// assert_eq!(message.as_str(), "cannot open archive demo.pkg");
/// assert!(!message.is_truncated());
/// ```
#[derive(Clone)]
pub struct MessageBuf {
    bytes: [u8; CONSOLE_TEXT_LEN],
    len: usize,
    limit: usize,
    truncated: bool,
}

impl MessageBuf {
    const fn with_bound(bound: usize) -> Self {
        Self {
            bytes: [0; CONSOLE_TEXT_LEN],
            len: 0,
            limit: bound - 1,
            truncated: false,
        }
    }

    /// Creates a buffer bounded for the modal dialog channel.
    #[must_use]
    pub const fn for_dialog() -> Self {
        Self::with_bound(DIALOG_TEXT_LEN)
    }

    /// Creates a buffer bounded for the console channel.
    #[must_use]
    pub const fn for_console() -> Self {
        Self::with_bound(CONSOLE_TEXT_LEN)
    }

    /// Returns the number of text bytes the buffer can hold.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.limit
    }

    /// Returns the number of bytes currently held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Reports whether the buffer holds no text.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the unused capacity in bytes.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.limit - self.len
    }

    /// Reports whether any append so far dropped text.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Returns the buffered text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.bytes[..self.len])
            .expect("buffer only ever stores complete UTF-8 sequences")
    }

    /// Appends text, truncating the tail on a character boundary if it
    /// does not fit. Returns the number of bytes written.
    pub fn append(&mut self, text: &str) -> usize {
        let remaining = self.remaining();
        let take = if text.len() <= remaining {
            text.len()
        } else {
            self.truncated = true;
            let mut cut = remaining;
            while cut > 0 && !text.is_char_boundary(cut) {
                cut -= 1;
            }
            cut
        };
        self.bytes[self.len..self.len + take].copy_from_slice(&text.as_bytes()[..take]);
        self.len += take;
        take
    }

    /// Appends text only if all of it fits; otherwise writes nothing.
    ///
    /// Returns whether the text was written. A refused append marks the
    /// buffer truncated.
    pub fn try_append(&mut self, text: &str) -> bool {
        if text.len() > self.remaining() {
            self.truncated = true;
            return false;
        }
        self.append(text);
        true
    }

    /// Appends an error-context suffix: `": "`, the failed operation's
    /// name, `": "`, then the translated error description.
    ///
    /// The structural head (both separators and the operation name)
    /// is committed atomically: if it does not fit whole, the entire
    /// suffix is omitted so a dangling separator can never appear. The
    /// description then tail-truncates like ordinary text.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::fmt::Write as _;
    ///
    /// use diag::MessageBuf;
    ///
    /// let mut message = MessageBuf::for_dialog();
    /// write!(message, "cannot load payload").unwrap();
    /// message.append_error_context(
    ///     "open_archive",
    ///     "The system cannot find the file specified.",
    /// );
    /// assert_eq!(
    ///     message.as_str(),
    ///     "cannot load payload: open_archive: The system cannot find the file specified.",
    /// );
    /// ```
    pub fn append_error_context(&mut self, operation: &str, description: &str) {
        let head = SEPARATOR.len() + operation.len() + SEPARATOR.len();
        if head > self.remaining() {
            self.truncated = true;
            return;
        }
        self.append(SEPARATOR);
        self.append(operation);
        self.append(SEPARATOR);
        self.append(description);
    }
}

impl fmt::Write for MessageBuf {
    /// Formatting never fails; overflow truncates instead.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s);
        Ok(())
    }
}

impl fmt::Display for MessageBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for MessageBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageBuf")
            .field("text", &self.as_str())
            .field("capacity", &self.limit)
            .field("truncated", &self.truncated)
            .finish()
    }
}
