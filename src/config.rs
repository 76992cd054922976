use crate::{Build, Facility, Result, Syslog, SyslogBuilder};
use serde::{Deserialize, Serialize};

/// Configuration of a logger builder.
pub trait Config {
    /// Logger builder.
    type Builder: Build;

    /// Makes a logger builder associated with this configuration.
    fn try_to_builder(&self) -> Result<Self::Builder>;

    /// Builds a logger with this configuration.
    fn build_logger(&self) -> Result<Syslog> {
        let builder = track!(self.try_to_builder())?;
        let logger = track!(builder.build())?;
        Ok(logger)
    }
}

/// Deserializable configuration for a [`Syslog`] logger.
///
/// Every field is optional. Facility names are lowercase (`"daemon"`,
/// `"local0"`, …).
///
/// # Example
///
/// ```
/// use posix_syslog::{Config, SyslogConfig};
///
/// let toml = r#"
/// ident = "web-server"
/// facility = "daemon"
/// log_pid = true
/// log_perror = true
/// "#;
/// let config: SyslogConfig = toml::from_str(toml).unwrap();
/// let builder = config.try_to_builder().unwrap();
/// # let _ = builder;
/// ```
///
/// [`Syslog`]: struct.Syslog.html
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
#[serde(default)]
pub struct SyslogConfig {
    /// The name this program's messages are tagged with. Defaults to the
    /// current executable's name.
    pub ident: Option<String>,

    /// The syslog facility to send logs to.
    pub facility: Facility,

    /// Include the process ID in log messages.
    pub log_pid: bool,

    /// Write directly to the system console if the log daemon is
    /// unreachable.
    pub log_cons: bool,

    /// Whether to delay opening the connection until the first message
    /// (`true` maps to `ODELAY`, `false` to `NDELAY`). When absent the
    /// platform default applies.
    pub log_delay: Option<bool>,

    /// Don't wait for child processes forked to log a message.
    pub log_nowait: bool,

    /// Also emit log messages on `stderr`.
    pub log_perror: bool,
}

impl SyslogConfig {
    /// Creates a new `SyslogConfig` with default settings.
    pub fn new() -> Self {
        Default::default()
    }
}

impl Default for SyslogConfig {
    fn default() -> Self {
        SyslogConfig {
            ident: None,
            facility: Facility::default(),
            log_pid: true,
            log_cons: false,
            log_delay: None,
            log_nowait: false,
            log_perror: false,
        }
    }
}

impl Config for SyslogConfig {
    type Builder = SyslogBuilder;

    fn try_to_builder(&self) -> Result<SyslogBuilder> {
        let mut b = SyslogBuilder::new();

        b.facility(self.facility);

        if let Some(ident) = &self.ident {
            b.ident(ident.clone());
        }

        // The builder starts with PID set; clear it when the configuration
        // says so.
        if !self.log_pid {
            b.options(crate::Options::empty());
        }

        if self.log_cons {
            b.log_cons();
        }

        if let Some(log_delay) = self.log_delay {
            if log_delay {
                b.log_odelay();
            } else {
                b.log_ndelay();
            }
        }

        if self.log_nowait {
            b.log_nowait();
        }

        if self.log_perror {
            b.log_perror();
        }

        Ok(b)
    }
}
