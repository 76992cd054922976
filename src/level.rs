use crate::{Error, ErrorKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::os::raw::c_int;
use std::str::FromStr;

/// A syslog severity level, 0 (most severe) to 7 (least).
///
/// The discriminants are the level codes, which are also the native values
/// the OS expects. Levels were originally defined by BSD and are specified by
/// POSIX; the set is the same everywhere.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// The system is unusable. Kernel panics and similar system-wide
    /// failures.
    #[serde(alias = "panic")]
    Emerg = 0,

    /// Something has happened that requires immediate action.
    Alert = 1,

    /// Critical error. Hardware failures fall under this level.
    Crit = 2,

    /// Error. Something has definitely gone wrong.
    #[serde(alias = "error")]
    Err = 3,

    /// Warning. Something has probably gone wrong.
    #[serde(alias = "warn")]
    Warning = 4,

    /// The situation is not an error, but it probably needs attention.
    Notice = 5,

    /// Normal informational messages.
    Info = 6,

    /// Verbose debugging messages.
    Debug = 7,
}

impl Level {
    /// All levels, most severe first.
    pub const ALL: [Level; 8] = [
        Level::Emerg,
        Level::Alert,
        Level::Crit,
        Level::Err,
        Level::Warning,
        Level::Notice,
        Level::Info,
        Level::Debug,
    ];

    /// Gets the name of this `Level`, like `emerg` or `notice`.
    ///
    /// The `FromStr` implementation accepts the same names (plus the aliases
    /// `panic`, `error`, and `warn`), case-insensitively.
    pub fn name(&self) -> &'static str {
        match *self {
            Level::Emerg => "emerg",
            Level::Alert => "alert",
            Level::Crit => "crit",
            Level::Err => "err",
            Level::Warning => "warning",
            Level::Notice => "notice",
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }

    /// The level code (0–7). Identical to the native `LOG_*` value.
    pub fn code(self) -> c_int {
        self as c_int
    }

    /// Converts a level code to a `Level`.
    ///
    /// Returns `None` if the code does not name a level.
    pub fn from_code(code: c_int) -> Option<Level> {
        Level::ALL.iter().copied().find(|l| l.code() == code)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match &*s.to_ascii_lowercase() {
            "emerg" | "panic" => Ok(Level::Emerg),
            "alert" => Ok(Level::Alert),
            "crit" => Ok(Level::Crit),
            "err" | "error" => Ok(Level::Err),
            "warning" | "warn" => Ok(Level::Warning),
            "notice" => Ok(Level::Notice),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            _ => track_panic!(ErrorKind::Invalid, "Unknown syslog level: {:?}", s),
        }
    }
}

/// The level name table: lowercase name to level code.
pub fn levels() -> BTreeMap<&'static str, c_int> {
    Level::ALL.iter().map(|l| (l.name(), l.code())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_from_str() {
        assert_eq!("notice".parse::<Level>().ok(), Some(Level::Notice));
        assert_eq!("error".parse::<Level>().ok(), Some(Level::Err));
        assert_eq!("WARN".parse::<Level>().ok(), Some(Level::Warning));
        assert!("foobar".parse::<Level>().is_err());
    }

    #[test]
    fn level_ordering() {
        assert!(Level::Emerg < Level::Debug);
    }

    #[cfg(any(target_os = "linux", target_os = "macos"))]
    #[test]
    fn codes_match_libc() {
        assert_eq!(Level::Emerg.code(), libc::LOG_EMERG);
        assert_eq!(Level::Alert.code(), libc::LOG_ALERT);
        assert_eq!(Level::Crit.code(), libc::LOG_CRIT);
        assert_eq!(Level::Err.code(), libc::LOG_ERR);
        assert_eq!(Level::Warning.code(), libc::LOG_WARNING);
        assert_eq!(Level::Notice.code(), libc::LOG_NOTICE);
        assert_eq!(Level::Info.code(), libc::LOG_INFO);
        assert_eq!(Level::Debug.code(), libc::LOG_DEBUG);
    }
}
