use std::ffi::NulError;
use std::io;
use trackable::error::{ErrorKind as TrackableErrorKind, ErrorKindExt, TrackableError};

/// The error type for this crate.
#[derive(Debug, Clone, TrackableError)]
pub struct Error(TrackableError<ErrorKind>);

/// A list of error kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid input: an empty ident, a string containing NUL bytes, or an
    /// unknown facility or level name/code. Detected before any native call.
    Invalid,

    /// An operating-system level failure. Per-message delivery failures are
    /// not reported by `syslog(3)` and never produce this.
    Io,

    /// Unknown error.
    Other,
}
impl TrackableErrorKind for ErrorKind {}

impl From<NulError> for Error {
    fn from(e: NulError) -> Self {
        ErrorKind::Invalid.cause(e).into()
    }
}
impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        ErrorKind::Io.cause(e).into()
    }
}
