//! Message severity.

use std::fmt;

/// Severity of a diagnostic, implied by the entry point that produced
/// it. Severity selects the destination set; it is never rendered into
/// the message text.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Severity {
    /// Developer-facing trace output; compiled in on debug builds only.
    Debug,
    /// Non-fatal error the user should see.
    Error,
    /// Fatal condition; the caller is expected to terminate afterwards.
    Fatal,
}

impl Severity {
    /// Returns the lowercase label for the severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }

    /// Returns the caption a modal dialog carries for this severity.
    ///
    /// Debug messages never reach a dialog and have no caption.
    #[must_use]
    pub const fn dialog_caption(self) -> Option<&'static str> {
        match self {
            Self::Debug => None,
            Self::Error => Some("Error detected"),
            Self::Fatal => Some("Fatal error detected"),
        }
    }

    /// Reports whether this is the debug severity.
    #[must_use]
    pub const fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }

    /// Reports whether this is the fatal severity.
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::Fatal)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captions_distinguish_fatal_from_error() {
        assert_eq!(Severity::Fatal.dialog_caption(), Some("Fatal error detected"));
        assert_eq!(Severity::Error.dialog_caption(), Some("Error detected"));
        assert_eq!(Severity::Debug.dialog_caption(), None);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Severity::Debug.to_string(), "debug");
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Fatal.to_string(), "fatal");
    }
}
