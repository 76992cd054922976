use crate::{Facility, Level};
use std::os::raw::c_int;

/// A syslog priority: a severity [`Level`] plus an optional [`Facility`].
///
/// Each message submitted to `syslog` carries a priority. When the facility
/// part is absent, the OS falls back to the facility given to `openlog`.
///
/// [`Facility`]: enum.Facility.html
/// [`Level`]: enum.Level.html
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Priority {
    level: Level,
    facility: Option<Facility>,
}

impl Priority {
    /// Creates a new `Priority` from the given `Level` and optional
    /// `Facility`.
    pub fn new(level: Level, facility: Option<Facility>) -> Self {
        Priority { level, facility }
    }

    /// The `Level` part.
    pub fn level(self) -> Level {
        self.level
    }

    /// The `Facility` part, if any.
    pub fn facility(self) -> Option<Facility> {
        self.facility
    }

    /// Collapses to the raw numeric value accepted by `syslog`.
    pub fn into_raw(self) -> c_int {
        self.level.code() | self.facility.map(Facility::to_native).unwrap_or(0)
    }
}

impl From<Level> for Priority {
    fn from(level: Level) -> Self {
        Priority::new(level, None)
    }
}

impl From<(Level, Facility)> for Priority {
    fn from((level, facility): (Level, Facility)) -> Self {
        Priority::new(level, Some(facility))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_raw() {
        let prio = Priority::new(Level::Warning, Some(Facility::Local3));
        assert_eq!(prio.into_raw(), Level::Warning.code() | (19 << 3));

        let prio = Priority::new(Level::Alert, None);
        assert_eq!(prio.into_raw(), Level::Alert.code());
    }

    #[cfg(any(target_os = "linux", target_os = "macos"))]
    #[test]
    fn into_raw_matches_libc() {
        let prio = Priority::from((Level::Warning, Facility::Local3));
        assert_eq!(prio.into_raw(), libc::LOG_WARNING | libc::LOG_LOCAL3);
    }
}
