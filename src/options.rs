use std::collections::BTreeMap;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::os::raw::c_int;

/// Option flags for `openlog`, combinable with `|`.
///
/// Unknown bits are passed through to the OS untouched, matching the
/// tolerance of `openlog` itself.
///
/// # Example
///
/// ```
/// use posix_syslog::Options;
///
/// let opts = Options::PID | Options::CONS;
/// assert!(opts.contains(Options::PID));
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct Options(c_int);

impl Options {
    /// Include the process ID in log messages.
    pub const PID: Options = Options(0x01);

    /// Write directly to the system console if syslog is unavailable.
    pub const CONS: Options = Options(0x02);

    /// Delay opening the connection until the first message is sent. The
    /// default on most platforms.
    pub const ODELAY: Options = Options(0x04);

    /// Open the connection immediately instead of waiting for the first
    /// message.
    pub const NDELAY: Options = Options(0x08);

    /// Don't wait for child processes forked to log a message. Obsolete on
    /// modern systems; POSIX still defines it.
    pub const NOWAIT: Options = Options(0x10);

    /// Also emit log messages on `stderr`.
    pub const PERROR: Options = Options(0x20);

    /// No flags set.
    pub fn empty() -> Options {
        Options(0)
    }

    /// Wraps a raw flag value, keeping any unknown bits.
    pub fn from_bits(bits: c_int) -> Options {
        Options(bits)
    }

    /// The raw flag value passed to `openlog`.
    pub fn bits(self) -> c_int {
        self.0
    }

    /// Whether every bit of `other` is set in `self`.
    pub fn contains(self, other: Options) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `self` with the bits of `other` cleared.
    pub fn without(self, other: Options) -> Options {
        Options(self.0 & !other.0)
    }
}

impl BitOr for Options {
    type Output = Options;

    fn bitor(self, rhs: Options) -> Options {
        Options(self.0 | rhs.0)
    }
}

impl BitOrAssign for Options {
    fn bitor_assign(&mut self, rhs: Options) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Options({:#x})", self.0)
    }
}

/// The option flag table: lowercase name to flag value.
pub fn options() -> BTreeMap<&'static str, c_int> {
    let mut table = BTreeMap::new();
    table.insert("pid", Options::PID.bits());
    table.insert("cons", Options::CONS.bits());
    table.insert("odelay", Options::ODELAY.bits());
    table.insert("ndelay", Options::NDELAY.bits());
    table.insert("nowait", Options::NOWAIT.bits());
    table.insert("perror", Options::PERROR.bits());
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combination_and_containment() {
        let opts = Options::PID | Options::PERROR;
        assert_eq!(opts.bits(), 0x21);
        assert!(opts.contains(Options::PID));
        assert!(!opts.contains(Options::CONS));
        assert_eq!(opts.without(Options::PID), Options::PERROR);
    }

    #[test]
    fn unknown_bits_are_kept() {
        let opts = Options::from_bits(0x40 | 0x01);
        assert!(opts.contains(Options::PID));
        assert_eq!(opts.bits(), 0x41);
    }

    #[cfg(any(target_os = "linux", target_os = "macos"))]
    #[test]
    fn values_match_libc() {
        assert_eq!(Options::PID.bits(), libc::LOG_PID);
        assert_eq!(Options::CONS.bits(), libc::LOG_CONS);
        assert_eq!(Options::ODELAY.bits(), libc::LOG_ODELAY);
        assert_eq!(Options::NDELAY.bits(), libc::LOG_NDELAY);
        assert_eq!(Options::NOWAIT.bits(), libc::LOG_NOWAIT);
        assert_eq!(Options::PERROR.bits(), libc::LOG_PERROR);
    }
}
