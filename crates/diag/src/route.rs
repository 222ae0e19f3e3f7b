//! Destination routing.
//!
//! Which channels a message reaches is a pure function of three inputs:
//! the build variant, the target platform's channel inventory, and the
//! message severity. Nothing is persisted; the set is recomputed per
//! emission from compile-time constants, so the whole table is also
//! unit-testable cell by cell with explicit inputs.

use crate::severity::Severity;

/// Build-variant axes, fixed per compilation by cargo features.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BuildMode {
    /// No console is attached; user-visible diagnostics need a dialog.
    pub windowed: bool,
    /// Debug build; the debug entry point is compiled in.
    pub debug: bool,
}

impl BuildMode {
    /// The mode this crate was compiled with.
    pub const CURRENT: Self = Self {
        windowed: cfg!(feature = "windowed"),
        debug: cfg!(feature = "debug-messages"),
    };
}

/// Output channels the compilation target actually has.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlatformCaps {
    /// A native modal dialog exists (Win32 message box).
    pub dialog: bool,
    /// A debugger output stream exists (`OutputDebugString`).
    pub debugger_stream: bool,
    /// Graphical debug builds mirror debug text to the system log
    /// (macOS, where Console surfaces syslog entries).
    pub syslog_mirror: bool,
}

impl PlatformCaps {
    /// The channel inventory of the compilation target.
    pub const HOST: Self = Self {
        dialog: cfg!(windows),
        debugger_stream: cfg!(windows),
        syslog_mirror: cfg!(target_os = "macos"),
    };
}

/// The set of channels one message is sent to.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Destinations {
    /// Standard error stream.
    pub stream: bool,
    /// Modal dialog.
    pub dialog: bool,
    /// System log at notice level.
    pub syslog: bool,
    /// Debugger output stream.
    pub debugger: bool,
}

impl Destinations {
    /// The empty set.
    pub const NONE: Self = Self {
        stream: false,
        dialog: false,
        syslog: false,
        debugger: false,
    };

    /// Reports whether any channel is selected.
    #[must_use]
    pub const fn any(self) -> bool {
        self.stream || self.dialog || self.syslog || self.debugger
    }
}

/// Computes the destination set for one message.
///
/// Console builds write every severity to the error stream. Windowed
/// builds route error and fatal severities to the modal dialog where
/// the platform has one (and keep the stream where it does not), send
/// debug text to the debugger stream where one exists, and mirror debug
/// text to the system log on platforms whose log viewer stands in for
/// the missing console.
#[must_use]
pub const fn route(mode: BuildMode, caps: PlatformCaps, severity: Severity) -> Destinations {
    match severity {
        Severity::Debug => {
            if !mode.debug {
                return Destinations::NONE;
            }
            let debugger = mode.windowed && caps.debugger_stream;
            Destinations {
                stream: !debugger,
                dialog: false,
                syslog: mode.windowed && caps.syslog_mirror,
                debugger,
            }
        }
        Severity::Error | Severity::Fatal => {
            let dialog = mode.windowed && caps.dialog;
            Destinations {
                stream: !dialog,
                dialog,
                syslog: false,
                debugger: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONSOLE: BuildMode = BuildMode {
        windowed: false,
        debug: false,
    };
    const CONSOLE_DEBUG: BuildMode = BuildMode {
        windowed: false,
        debug: true,
    };
    const WINDOWED: BuildMode = BuildMode {
        windowed: true,
        debug: false,
    };
    const WINDOWED_DEBUG: BuildMode = BuildMode {
        windowed: true,
        debug: true,
    };

    const WIN32: PlatformCaps = PlatformCaps {
        dialog: true,
        debugger_stream: true,
        syslog_mirror: false,
    };
    const MAC: PlatformCaps = PlatformCaps {
        dialog: false,
        debugger_stream: false,
        syslog_mirror: true,
    };
    const PLAIN: PlatformCaps = PlatformCaps {
        dialog: false,
        debugger_stream: false,
        syslog_mirror: false,
    };

    #[test]
    fn console_builds_keep_every_severity_on_the_stream() {
        for caps in [WIN32, MAC, PLAIN] {
            for severity in [Severity::Error, Severity::Fatal] {
                let destinations = route(CONSOLE, caps, severity);
                assert!(destinations.stream);
                assert!(!destinations.dialog);
                assert!(!destinations.syslog);
                assert!(!destinations.debugger);
            }
        }
    }

    #[test]
    fn windowed_builds_prefer_the_dialog_where_one_exists() {
        for severity in [Severity::Error, Severity::Fatal] {
            let destinations = route(WINDOWED, WIN32, severity);
            assert!(destinations.dialog);
            assert!(!destinations.stream);
        }
        // No dialog backend: the stream stays.
        for severity in [Severity::Error, Severity::Fatal] {
            let destinations = route(WINDOWED, MAC, severity);
            assert!(!destinations.dialog);
            assert!(destinations.stream);
        }
    }

    #[test]
    fn debug_severity_is_silent_outside_debug_builds() {
        for mode in [CONSOLE, WINDOWED] {
            for caps in [WIN32, MAC, PLAIN] {
                assert_eq!(route(mode, caps, Severity::Debug), Destinations::NONE);
            }
        }
    }

    #[test]
    fn graphical_debug_builds_mirror_debug_text_to_the_system_log() {
        let destinations = route(WINDOWED_DEBUG, MAC, Severity::Debug);
        assert!(destinations.syslog);
        assert!(destinations.stream);
        assert!(!destinations.dialog);

        // The mirror needs the graphical variant.
        let destinations = route(CONSOLE_DEBUG, MAC, Severity::Debug);
        assert!(!destinations.syslog);
        assert!(destinations.stream);
    }

    #[test]
    fn windowed_debug_text_goes_to_the_debugger_stream_when_present() {
        let destinations = route(WINDOWED_DEBUG, WIN32, Severity::Debug);
        assert!(destinations.debugger);
        assert!(!destinations.stream);
        assert!(!destinations.syslog);

        // Console debug builds keep the stream even where a debugger
        // stream exists.
        let destinations = route(CONSOLE_DEBUG, WIN32, Severity::Debug);
        assert!(destinations.stream);
        assert!(!destinations.debugger);
    }
}
