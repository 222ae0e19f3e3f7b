//! Emission macros.
//!
//! Thin `format_args!` wrappers over the entry points in
//! [`crate::emit`]. `boot_debug!` follows the build flag: outside debug
//! builds it expands to nothing and its arguments are never evaluated.
//!
//! The emitter appends no newline; stream-destined messages carry their
//! own `\n` in the format string.

/// Emits a debug-severity message, prefixed with the process id.
///
/// # Example
///
/// ```ignore
/// boot_debug!("archive holds {} entries\n", count);
/// ```
#[cfg(feature = "debug-messages")]
#[macro_export]
macro_rules! boot_debug {
    ($($arg:tt)*) => {
        $crate::emit::debug(::core::format_args!($($arg)*))
    };
}

/// Emits a debug-severity message, prefixed with the process id.
///
/// Debug messages are compiled out of this build; the invocation
/// expands to nothing and its arguments are not evaluated.
#[cfg(not(feature = "debug-messages"))]
#[macro_export]
macro_rules! boot_debug {
    ($($arg:tt)*) => {{}};
}

/// Emits a non-fatal error message.
///
/// Windowed builds raise a warning-styled dialog where the platform has
/// one; console builds print to the error stream.
///
/// # Example
///
/// ```ignore
/// boot_error!("optional resource {} not found\n", name);
/// ```
#[macro_export]
macro_rules! boot_error {
    ($($arg:tt)*) => {
        $crate::emit::error(::core::format_args!($($arg)*))
    };
}

/// Emits a fatal error message.
///
/// Windowed builds block on a fatal-captioned dialog until the user
/// dismisses it. Termination stays with the caller.
///
/// # Example
///
/// ```ignore
/// boot_fatal!("cannot allocate archive status for {}\n", path);
/// ```
#[macro_export]
macro_rules! boot_fatal {
    ($($arg:tt)*) => {
        $crate::emit::fatal(::core::format_args!($($arg)*))
    };
}

/// Emits a fatal message suffixed with the OS last-error description.
///
/// The first argument names the call that failed; the ambient code is
/// read before anything else runs.
///
/// # Example
///
/// ```ignore
/// boot_fatal_os_error!("CreateProcessW", "cannot launch runtime");
/// ```
#[macro_export]
macro_rules! boot_fatal_os_error {
    ($operation:expr, $($arg:tt)*) => {
        $crate::emit::fatal_os_error($operation, ::core::format_args!($($arg)*))
    };
}

/// Emits a fatal message suffixed with the C-runtime error description.
///
/// # Example
///
/// ```ignore
/// boot_fatal_errno!("open", "cannot load payload");
/// ```
#[macro_export]
macro_rules! boot_fatal_errno {
    ($operation:expr, $($arg:tt)*) => {
        $crate::emit::fatal_errno($operation, ::core::format_args!($($arg)*))
    };
}

/// Reports a non-fatal failure with the OS last-error description,
/// always on the console stream.
///
/// # Example
///
/// ```ignore
/// boot_os_error!("GetModuleFileNameW", "cannot resolve executable path\n");
/// ```
#[macro_export]
macro_rules! boot_os_error {
    ($operation:expr, $($arg:tt)*) => {
        $crate::emit::os_error_report($operation, ::core::format_args!($($arg)*))
    };
}

/// Reports a non-fatal failure with the C-runtime error description,
/// always on the console stream.
///
/// # Example
///
/// ```ignore
/// boot_errno!("unlink", "cannot remove staged file {}\n", path);
/// ```
#[macro_export]
macro_rules! boot_errno {
    ($operation:expr, $($arg:tt)*) => {
        $crate::emit::errno_report($operation, ::core::format_args!($($arg)*))
    };
}
