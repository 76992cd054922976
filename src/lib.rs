//! Bindings for the [POSIX syslog API] (`openlog`, `syslog`, `closelog`),
//! plus a fluent logger that formats structured context into messages.
//! The native layer is only available on Unix-like platforms.
//!
//! [POSIX syslog API]: https://pubs.opengroup.org/onlinepubs/9699919799/functions/closelog.html
//!
//! # Examples
//!
//! Fluent logging with per-call context:
//!
//! ```
//! use posix_syslog::{context, Build, Facility, SyslogBuilder};
//!
//! # fn main() -> Result<(), posix_syslog::Error> {
//! let logger = SyslogBuilder::new()
//!     .ident("example-app")
//!     .facility(Facility::Local0)
//!     .log_pid()
//!     .build()?;
//!
//! logger
//!     .error("disk full", &context! { "code" => 500 })
//!     .info("recovered", None);
//! # Ok(())
//! # }
//! ```
//!
//! Free functions on the process-wide default logger:
//!
//! ```
//! posix_syslog::info("service started", None);
//! ```
//!
//! # One connection per process
//!
//! POSIX supports a single syslog connection per process: the ident,
//! facility, and option flags passed to `openlog` live in libc globals, and
//! every `openlog` call overwrites them. Constructing a second [`Syslog`]
//! therefore redirects the shared connection to the new settings, and a
//! `close` on either instance closes it for both. The rules that follow:
//!
//! * Libraries should not open a syslog connection unless the main
//!   application asks them to.
//! * An application should keep at most one [`Syslog`] at a time, replacing
//!   it wholesale when reloading configuration.
//!
//! The crate serializes all native calls behind one lock, so breaking these
//! rules cannot corrupt memory; it only makes messages come out with an
//! unexpected ident or facility.

#![warn(missing_docs)]

#[macro_use]
extern crate trackable;

#[cfg(unix)]
mod build;
#[cfg(unix)]
mod builder;
#[cfg(unix)]
mod config;
#[cfg(unix)]
pub mod connection;
mod context;
#[cfg(unix)]
mod drain;
mod error;
#[cfg(unix)]
mod facility;
#[cfg(unix)]
mod global;
#[cfg(unix)]
mod level;
#[cfg(unix)]
mod logger;
#[cfg(unix)]
mod options;
#[cfg(unix)]
mod priority;
#[cfg(not(unix))]
mod unsupported;

#[cfg(all(test, unix))]
mod mock;
#[cfg(all(test, unix))]
mod tests;

#[cfg(unix)]
pub use crate::build::Build;
#[cfg(unix)]
pub use crate::builder::SyslogBuilder;
#[cfg(unix)]
pub use crate::config::{Config, SyslogConfig};
pub use crate::context::Context;
#[cfg(unix)]
pub use crate::drain::SyslogDrain;
pub use crate::error::{Error, ErrorKind};
#[cfg(unix)]
pub use crate::facility::{facilities, Facility};
#[cfg(unix)]
pub use crate::global::{
    alert, critical, debug, default_logger, emergency, error, info, notice, warning,
};
#[cfg(unix)]
pub use crate::level::{levels, Level};
#[cfg(unix)]
pub use crate::logger::Syslog;
#[cfg(unix)]
pub use crate::options::{options, Options};
#[cfg(unix)]
pub use crate::priority::Priority;
#[cfg(not(unix))]
pub use crate::unsupported::SyslogNotSupported;

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
