use crate::{connection, Level, Priority, Syslog};
use slog::{Drain, OwnedKVList, Record, KV};
use std::fmt::Write;

/// An [`slog::Drain`] backed by a [`Syslog`] logger.
///
/// Lets the connection serve as the sink of an `slog` pipeline. Record
/// key-value pairs are rendered as the same `key=value` tokens the fluent
/// logger uses for [`Context`], and severities map as Critical→`crit`,
/// Error→`err`, Warning→`warning`, Info→`info`, Debug and Trace→`debug`.
///
/// Syslog delivery is fire-and-forget, so the drain never fails
/// (`Err = slog::Never`).
///
/// ```
/// use posix_syslog::{Build, Facility, SyslogBuilder, SyslogDrain};
/// use slog::{info, o, Drain, Logger};
///
/// # fn main() -> Result<(), posix_syslog::Error> {
/// let syslog = SyslogBuilder::new()
///     .ident("example-app")
///     .facility(Facility::Daemon)
///     .build()?;
///
/// let logger = Logger::root(SyslogDrain::new(syslog).fuse(), o!());
/// info!(logger, "listening"; "port" => 8080);
/// # Ok(())
/// # }
/// ```
///
/// [`Context`]: struct.Context.html
/// [`slog::Drain`]: https://docs.rs/slog/2/slog/trait.Drain.html
/// [`Syslog`]: struct.Syslog.html
#[derive(Debug)]
pub struct SyslogDrain {
    logger: Syslog,
}

impl SyslogDrain {
    /// Wraps a built [`Syslog`] logger.
    ///
    /// [`Syslog`]: struct.Syslog.html
    pub fn new(logger: Syslog) -> Self {
        SyslogDrain { logger }
    }

    /// Returns the wrapped logger, consuming the drain.
    pub fn into_inner(self) -> Syslog {
        self.logger
    }
}

impl Drain for SyslogDrain {
    type Ok = ();
    type Err = slog::Never;

    fn log(&self, record: &Record, values: &OwnedKVList) -> Result<(), slog::Never> {
        let mut message = record.msg().to_string();

        {
            let mut serializer = TokenSerializer { buf: &mut message };
            // Token rendering into a `String` cannot fail; if a KV's own
            // serialize method errs, the message simply goes out without
            // that pair.
            let _ = values.serialize(record, &mut serializer);
            let _ = record.kv().serialize(record, &mut serializer);
        }

        let level = match record.level() {
            slog::Level::Critical => Level::Crit,
            slog::Level::Error => Level::Err,
            slog::Level::Warning => Level::Warning,
            slog::Level::Debug | slog::Level::Trace => Level::Debug,
            _ => Level::Info,
        };

        self.logger.reopen_if_closed();
        let priority = Priority::new(level, Some(self.logger.facility()));
        connection::write_lossy(priority.into_raw(), &message);

        Ok(())
    }
}

/// Renders KV pairs as ` key=value` tokens, strings JSON-quoted and scalars
/// bare, matching [`Context`]'s output.
///
/// [`Context`]: struct.Context.html
struct TokenSerializer<'a> {
    buf: &'a mut String,
}

impl slog::Serializer for TokenSerializer<'_> {
    fn emit_arguments(&mut self, key: slog::Key, val: &std::fmt::Arguments) -> slog::Result {
        let quoted = serde_json::Value::from(val.to_string());
        write!(self.buf, " {}={}", key, quoted)?;
        Ok(())
    }

    fn emit_bool(&mut self, key: slog::Key, val: bool) -> slog::Result {
        write!(self.buf, " {}={}", key, val)?;
        Ok(())
    }

    fn emit_u64(&mut self, key: slog::Key, val: u64) -> slog::Result {
        write!(self.buf, " {}={}", key, val)?;
        Ok(())
    }

    fn emit_i64(&mut self, key: slog::Key, val: i64) -> slog::Result {
        write!(self.buf, " {}={}", key, val)?;
        Ok(())
    }

    fn emit_f64(&mut self, key: slog::Key, val: f64) -> slog::Result {
        write!(self.buf, " {}={}", key, val)?;
        Ok(())
    }

    fn emit_unit(&mut self, key: slog::Key) -> slog::Result {
        write!(self.buf, " {}=()", key)?;
        Ok(())
    }

    fn emit_none(&mut self, key: slog::Key) -> slog::Result {
        write!(self.buf, " {}=null", key)?;
        Ok(())
    }
}
