use crate::{Result, Syslog};

/// A builder of [`Syslog`] loggers.
///
/// [`Syslog`]: struct.Syslog.html
pub trait Build {
    /// Builds a logger, opening the connection.
    fn build(&self) -> Result<Syslog>;
}
