#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `platform` isolates every `unsafe` platform call the bootstrapper's
//! diagnostics need: ambient last-error access and translation, the
//! modal message box and debugger stream on Windows, syslog notices on
//! Unix, and the process locale swap. The rest of the workspace stays
//! `#![deny(unsafe_code)]` and talks to the operating system only
//! through this crate.
//!
//! # Design
//!
//! Backends are selected with `cfg` at compile time: modules that only
//! exist on one platform are gated rather than stubbed, so a caller that
//! names `platform::dialog` on a non-Windows target fails to compile
//! instead of silently doing nothing. The diagnostic emitter owns the
//! routing decisions; this crate only performs the calls.
//!
//! # Concurrency
//!
//! The bootstrap sequence is single-threaded at every call site in this
//! crate. Several wrapped facilities (`strerror`, `setlocale`, the
//! last-error slot) rely on that; see the individual modules.

/// Ambient error-code access and translation to readable text.
pub mod error;

/// Process locale capture and scoped restoration.
#[cfg(unix)]
pub mod locale;

/// System log notices for graphical debug builds.
#[cfg(unix)]
pub mod syslog;

/// Active-code-page conversion for console streams.
#[cfg(windows)]
pub mod console;

/// Modal message boxes for windowed builds.
#[cfg(windows)]
pub mod dialog;

/// Debugger output stream for windowed debug builds.
#[cfg(windows)]
pub mod debugger;
