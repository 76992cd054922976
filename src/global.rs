//! The process-wide default logger and its free-function front end.

use crate::{connection, Context, Syslog};
use once_cell::sync::Lazy;

static DEFAULT: Lazy<Syslog> = Lazy::new(|| {
    let logger = Syslog::new().expect("the default syslog configuration is always valid");
    // Close the connection at process exit instead of leaking the
    // descriptor.
    unsafe {
        libc::atexit(close_default);
    }
    logger
});

extern "C" fn close_default() {
    connection::close();
}

/// The process-wide default logger.
///
/// Built on first use with default settings (executable name as ident, the
/// `user` facility, PID flag). The free functions in this crate all log
/// through it, and its connection is closed automatically at process exit.
pub fn default_logger() -> &'static Syslog {
    &DEFAULT
}

/// Logs at the `emerg` level through the default logger.
pub fn emergency<'a>(message: &str, context: impl Into<Option<&'a Context>>) -> &'static Syslog {
    default_logger().emergency(message, context)
}

/// Logs at the `alert` level through the default logger.
pub fn alert<'a>(message: &str, context: impl Into<Option<&'a Context>>) -> &'static Syslog {
    default_logger().alert(message, context)
}

/// Logs at the `crit` level through the default logger.
pub fn critical<'a>(message: &str, context: impl Into<Option<&'a Context>>) -> &'static Syslog {
    default_logger().critical(message, context)
}

/// Logs at the `err` level through the default logger.
pub fn error<'a>(message: &str, context: impl Into<Option<&'a Context>>) -> &'static Syslog {
    default_logger().error(message, context)
}

/// Logs at the `warning` level through the default logger.
pub fn warning<'a>(message: &str, context: impl Into<Option<&'a Context>>) -> &'static Syslog {
    default_logger().warning(message, context)
}

/// Logs at the `notice` level through the default logger.
pub fn notice<'a>(message: &str, context: impl Into<Option<&'a Context>>) -> &'static Syslog {
    default_logger().notice(message, context)
}

/// Logs at the `info` level through the default logger.
pub fn info<'a>(message: &str, context: impl Into<Option<&'a Context>>) -> &'static Syslog {
    default_logger().info(message, context)
}

/// Logs at the `debug` level through the default logger.
pub fn debug<'a>(message: &str, context: impl Into<Option<&'a Context>>) -> &'static Syslog {
    default_logger().debug(message, context)
}
