use crate::{connection, Build, Context, Facility, Level, Options};
use std::ffi::CString;
use std::sync::atomic::{AtomicBool, Ordering};

/// A fluent syslog logger.
///
/// A `Syslog` owns the open/closed lifecycle of the process-wide connection
/// (see the crate-level notes on the one-connection-per-process rule). It is
/// constructed through [`SyslogBuilder`], which opens the connection, and
/// provides one method per severity level. Every level method returns
/// `&Self`, so calls chain:
///
/// ```
/// use posix_syslog::{context, Build, Facility, SyslogBuilder};
///
/// # fn main() -> Result<(), posix_syslog::Error> {
/// let logger = SyslogBuilder::new()
///     .ident("svc")
///     .facility(Facility::Local0)
///     .build()?;
///
/// logger
///     .error("disk full", &context! { "code" => 500 })
///     .info("recovered", None);
/// # Ok(())
/// # }
/// ```
///
/// # Closing and reuse
///
/// [`close`] shuts the connection down. A closed logger is not dead: the
/// next level method transparently re-opens the connection with the same
/// ident, facility, and options before writing.
///
/// [`close`]: #method.close
/// [`SyslogBuilder`]: struct.SyslogBuilder.html
#[derive(Debug)]
pub struct Syslog {
    ident: String,
    c_ident: CString,
    facility: Facility,
    options: Options,
    open: AtomicBool,
}

impl Syslog {
    /// Creates a logger with default settings: ident resolved from the
    /// current executable, the `user` facility, and the PID flag.
    ///
    /// Equivalent to `SyslogBuilder::new().build()`.
    pub fn new() -> crate::Result<Self> {
        crate::SyslogBuilder::new().build()
    }

    /// Called by the builder once the ident has been validated.
    pub(crate) fn open(
        ident: String,
        c_ident: CString,
        facility: Facility,
        options: Options,
    ) -> Self {
        connection::open_raw(&c_ident, options, facility);
        Syslog {
            ident,
            c_ident,
            facility,
            options,
            open: AtomicBool::new(true),
        }
    }

    /// Logs a message at the given level, with optional context.
    ///
    /// Context entries are appended to the message as `key=value` tokens.
    /// This is the method behind all eight level methods; it never fails:
    /// NUL bytes in the message are stripped, and context values that can't
    /// be serialized were already replaced when the [`Context`] was built.
    ///
    /// [`Context`]: struct.Context.html
    pub fn log<'a>(
        &self,
        level: Level,
        message: &str,
        context: impl Into<Option<&'a Context>>,
    ) -> &Self {
        self.reopen_if_closed();

        match context.into() {
            Some(ctx) if !ctx.is_empty() => {
                connection::write_lossy(level.code(), &format!("{} {}", message, ctx));
            }
            _ => connection::write_lossy(level.code(), message),
        }
        self
    }

    /// Logs at the `emerg` level: the system is unusable.
    pub fn emergency<'a>(&self, message: &str, context: impl Into<Option<&'a Context>>) -> &Self {
        self.log(Level::Emerg, message, context)
    }

    /// Logs at the `alert` level: immediate action required.
    pub fn alert<'a>(&self, message: &str, context: impl Into<Option<&'a Context>>) -> &Self {
        self.log(Level::Alert, message, context)
    }

    /// Logs at the `crit` level.
    pub fn critical<'a>(&self, message: &str, context: impl Into<Option<&'a Context>>) -> &Self {
        self.log(Level::Crit, message, context)
    }

    /// Logs at the `err` level.
    pub fn error<'a>(&self, message: &str, context: impl Into<Option<&'a Context>>) -> &Self {
        self.log(Level::Err, message, context)
    }

    /// Logs at the `warning` level.
    pub fn warning<'a>(&self, message: &str, context: impl Into<Option<&'a Context>>) -> &Self {
        self.log(Level::Warning, message, context)
    }

    /// Logs at the `notice` level.
    pub fn notice<'a>(&self, message: &str, context: impl Into<Option<&'a Context>>) -> &Self {
        self.log(Level::Notice, message, context)
    }

    /// Logs at the `info` level.
    pub fn info<'a>(&self, message: &str, context: impl Into<Option<&'a Context>>) -> &Self {
        self.log(Level::Info, message, context)
    }

    /// Logs at the `debug` level.
    pub fn debug<'a>(&self, message: &str, context: impl Into<Option<&'a Context>>) -> &Self {
        self.log(Level::Debug, message, context)
    }

    /// Closes the connection. Idempotent; the logger re-opens on the next
    /// level method call.
    pub fn close(&self) {
        if self.open.swap(false, Ordering::SeqCst) {
            connection::close();
        }
    }

    /// The ident messages are tagged with.
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// The facility messages are sent to.
    pub fn facility(&self) -> Facility {
        self.facility
    }

    /// The option flags the connection was opened with.
    pub fn options(&self) -> Options {
        self.options
    }

    /// Whether this logger currently holds the connection open.
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    pub(crate) fn reopen_if_closed(&self) {
        if !self.open.swap(true, Ordering::SeqCst) {
            connection::open_raw(&self.c_ident, self.options, self.facility);
        }
    }
}
