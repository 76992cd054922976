use crate::{Build, ErrorKind, Facility, Options, Result, Syslog};
use std::env;
use std::ffi::CString;

/// A builder for [`Syslog`] loggers.
///
/// All settings have defaults matching what an unconfigured process wants:
/// the ident is the current executable's name, the facility is `user`, and
/// the PID flag is set. `SyslogBuilder::new().build()` yields a working
/// logger.
///
/// # Example
///
/// ```
/// use posix_syslog::{Build, Facility, SyslogBuilder};
///
/// # fn main() -> Result<(), posix_syslog::Error> {
/// let logger = SyslogBuilder::new()
///     .ident("web-server")
///     .facility(Facility::Daemon)
///     .log_pid()
///     .log_cons()
///     .build()?;
/// # Ok(())
/// # }
/// ```
///
/// [`Syslog`]: struct.Syslog.html
#[derive(Clone, Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub struct SyslogBuilder {
    ident: Option<String>,
    facility: Facility,
    options: Options,
}

impl Default for SyslogBuilder {
    fn default() -> Self {
        SyslogBuilder {
            ident: None,
            facility: Facility::default(),
            options: Options::PID,
        }
    }
}

impl SyslogBuilder {
    /// Makes a new `SyslogBuilder` instance.
    pub fn new() -> Self {
        SyslogBuilder::default()
    }

    /// Sets the name this program's messages are tagged with. (POSIX calls
    /// this the "tag".)
    ///
    /// The string must be non-empty and must not contain NUL bytes; `build`
    /// fails otherwise. When no ident is given, the current executable's
    /// file name is used.
    pub fn ident(&mut self, ident: impl Into<String>) -> &mut Self {
        self.ident = Some(ident.into());
        self
    }

    /// Sets the syslog facility to send logs to.
    ///
    /// By default, this is the `user` facility.
    pub fn facility(&mut self, facility: Facility) -> &mut Self {
        self.facility = facility;
        self
    }

    /// Replaces the option flags wholesale.
    ///
    /// The flag methods below are usually more convenient; this exists for
    /// callers that already hold a combined [`Options`] value.
    ///
    /// [`Options`]: struct.Options.html
    pub fn options(&mut self, options: Options) -> &mut Self {
        self.options = options;
        self
    }

    /// Include the process ID in log messages. Set by default.
    pub fn log_pid(&mut self) -> &mut Self {
        self.options |= Options::PID;
        self
    }

    /// Write directly to the system console if the log daemon is
    /// unreachable.
    pub fn log_cons(&mut self) -> &mut Self {
        self.options |= Options::CONS;
        self
    }

    /// Open the connection to the syslog server immediately, instead of
    /// waiting until the first message is sent.
    ///
    /// `log_ndelay` and `log_odelay` are mutually exclusive; setting one
    /// clears the other. Which is the default depends on the platform, but
    /// on most platforms it is `log_odelay`.
    pub fn log_ndelay(&mut self) -> &mut Self {
        self.options = self.options.without(Options::ODELAY) | Options::NDELAY;
        self
    }

    /// *Don't* open the connection until the first message is sent.
    ///
    /// `log_ndelay` and `log_odelay` are mutually exclusive; setting one
    /// clears the other.
    pub fn log_odelay(&mut self) -> &mut Self {
        self.options = self.options.without(Options::NDELAY) | Options::ODELAY;
        self
    }

    /// If a child process is created to send a log message, don't wait for
    /// it. A 2.11BSD-era workaround that POSIX still defines; it has no
    /// effect on modern systems.
    pub fn log_nowait(&mut self) -> &mut Self {
        self.options |= Options::NOWAIT;
        self
    }

    /// Also emit log messages on `stderr`.
    ///
    /// The libc `syslog` function writes to `stderr` outside the mutex Rust
    /// uses for it, so messages logged with this flag can interleave with
    /// other `stderr` output mid-line.
    pub fn log_perror(&mut self) -> &mut Self {
        self.options |= Options::PERROR;
        self
    }
}

impl Build for SyslogBuilder {
    fn build(&self) -> Result<Syslog> {
        let ident = match &self.ident {
            Some(ident) => ident.clone(),
            None => process_name(),
        };
        track_assert!(
            !ident.is_empty(),
            ErrorKind::Invalid,
            "syslog ident must not be empty"
        );
        let c_ident = track!(CString::new(ident.as_str()).map_err(crate::Error::from))?;
        Ok(Syslog::open(ident, c_ident, self.facility, self.options))
    }
}

/// The current executable's file name, used as the fallback ident.
fn process_name() -> String {
    env::current_exe()
        .ok()
        .and_then(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .map(|name| name.replace('\0', ""))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "rust".to_string())
}
