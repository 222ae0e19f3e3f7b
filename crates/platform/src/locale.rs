//! Process locale capture and scoped restoration.
//!
//! The bootstrapper switches `LC_CTYPE` to the environment's native
//! locale once at startup so path and terminal text honor the user's
//! configuration, and puts the original value back exactly once,
//! immediately before control transfers to the hosted program. The swap
//! is modeled as an RAII guard so the restore happens on every exit
//! path, including early failure returns.
//!
//! `setlocale(3)` is process-global and unsynchronized; the bootstrap
//! sequence is single-threaded across the whole swapped window, and the
//! guard must not be used from anything else.

use std::ffi::{CStr, CString};

/// RAII guard holding the locale that was active before the swap.
///
/// Created by [`LocaleGuard::set_native`]; dropping the guard (or
/// calling [`restore`](LocaleGuard::restore)) reinstates the saved
/// locale.
#[derive(Debug)]
#[must_use = "dropping the guard restores the saved locale immediately"]
pub struct LocaleGuard {
    saved: Option<CString>,
}

impl LocaleGuard {
    /// Captures the current `LC_CTYPE` locale, then installs the
    /// environment's native locale in its place.
    pub fn set_native() -> Self {
        // SAFETY: setlocale returns a pointer into static storage that
        // the next setlocale call may invalidate; the value is copied out
        // before any further call.
        let saved = unsafe {
            let current = libc::setlocale(libc::LC_CTYPE, std::ptr::null());
            if current.is_null() {
                None
            } else {
                Some(CStr::from_ptr(current).to_owned())
            }
        };
        // SAFETY: the empty string is a valid locale name selecting the
        // environment's native locale.
        unsafe {
            libc::setlocale(libc::LC_CTYPE, c"".as_ptr());
        }
        Self { saved }
    }

    /// Returns the locale that will be reinstated on restore.
    ///
    /// `None` when the startup query itself failed; restore is then a
    /// no-op, leaving the native locale in place.
    #[must_use]
    pub fn saved(&self) -> Option<&CStr> {
        self.saved.as_deref()
    }

    /// Restores the saved locale now instead of at end of scope.
    ///
    /// The bootstrapper calls this at the fixed hand-off point before
    /// launching the hosted program.
    pub fn restore(self) {
        drop(self);
    }
}

impl Drop for LocaleGuard {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            // SAFETY: `saved` is a NUL-terminated locale name owned by
            // the guard for the duration of the call.
            unsafe {
                libc::setlocale(libc::LC_CTYPE, saved.as_ptr());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current_ctype() -> CString {
        // SAFETY: a null locale argument queries without modifying; the
        // returned static storage is copied before any other call.
        unsafe {
            let ptr = libc::setlocale(libc::LC_CTYPE, std::ptr::null());
            assert!(!ptr.is_null(), "LC_CTYPE query failed");
            CStr::from_ptr(ptr).to_owned()
        }
    }

    // Single test so no two locale mutations race across test threads.
    #[test]
    fn guard_captures_and_restores_the_startup_locale() {
        let before = current_ctype();

        let guard = LocaleGuard::set_native();
        assert_eq!(guard.saved(), Some(before.as_c_str()));
        guard.restore();

        assert_eq!(current_ctype(), before);

        // Dropping without an explicit restore behaves the same.
        {
            let _guard = LocaleGuard::set_native();
        }
        assert_eq!(current_ctype(), before);
    }
}
