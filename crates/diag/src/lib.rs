#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `diag` is the packboot bootstrapper's diagnostic surface: bounded
//! message formatting plus routing to the output channel the current
//! platform and build variant call for: console stream, modal dialog,
//! system log, or debugger stream. Every other part of the bootstrapper
//! reports failures through the `boot_*!` macros defined here.
//!
//! # Design
//!
//! Messages render into a fixed-capacity [`MessageBuf`]; overflow
//! truncates the tail on a character boundary and can never spill past
//! the channel bound. Destination selection is the pure function
//! [`route`] over [`BuildMode`] (the `windowed` and `debug-messages`
//! cargo features), [`PlatformCaps`] (the target's channel inventory),
//! and [`Severity`], recomputed per emission from compile-time
//! constants with no persisted state. The platform calls behind each
//! channel live in the `platform` crate; this crate stays free of
//! `unsafe`.
//!
//! # Invariants
//!
//! - Emission never fails observably: encoding failures degrade to raw
//!   bytes, channel failures are swallowed, and no entry point ever
//!   terminates the process.
//! - A message's serialized length never exceeds its channel bound, and
//!   truncation drops the tail, never the head.
//! - The subsystem is single-threaded by contract: entry points are
//!   called from the bootstrap main sequence only.
//!
//! # Examples
//!
//! Report a fatal archive failure (in a console build this prints to
//! stderr; in a windowed build on Windows it blocks on a dialog):
//!
//! ```ignore
//! use diag::{boot_fatal, boot_fatal_errno};
//!
//! boot_fatal!("archive {} is damaged\n", path.display());
//! boot_fatal_errno!("open", "cannot load payload");
//! ```
//!
//! Compose a bounded message by hand:
//!
//! ```
//! use std::fmt::Write as _;
//!
//! use diag::MessageBuf;
//!
//! let mut message = MessageBuf::for_dialog();
//! write!(message, "cannot load payload").unwrap();
//! message.append_error_context("open_archive", "No such file or directory");
//! assert_eq!(
//!     message.as_str(),
//!     "cannot load payload: open_archive: No such file or directory",
//! );
//! ```

mod buffer;
/// Emission entry points backing the `boot_*!` macros.
pub mod emit;
mod macros;
mod route;
mod severity;

pub use buffer::{MessageBuf, CONSOLE_TEXT_LEN, DIALOG_TEXT_LEN};
pub use route::{route, BuildMode, Destinations, PlatformCaps};
pub use severity::Severity;

#[cfg(unix)]
pub use platform::locale::LocaleGuard;
