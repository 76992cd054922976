use crate::{Error, ErrorKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::os::raw::c_int;
use std::str::FromStr;

/// A syslog facility: the category of the subsystem a message comes from.
///
/// The discriminants are the portable facility codes (0–23, non-contiguous).
/// `openlog` expects the code shifted left by three bits; [`to_native`] and
/// [`from_native`] convert between the two forms.
///
/// The default facility is [`User`].
///
/// [`from_native`]: #method.from_native
/// [`to_native`]: #method.to_native
/// [`User`]: #variant.User
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Facility {
    /// Operating system kernel. Programs other than the kernel are typically
    /// not allowed to use this facility.
    Kern = 0,

    /// General user processes. The default.
    User = 1,

    /// Mail transport and delivery agents.
    Mail = 2,

    /// Daemons that don't fall into a more specific category.
    Daemon = 3,

    /// Authentication, authorization, and other security-related matters.
    Auth = 4,

    /// Messages generated internally by the syslog daemon.
    Syslog = 5,

    /// Print server.
    Lpr = 6,

    /// Usenet news system.
    News = 7,

    /// Unix-to-Unix Copy system.
    Uucp = 8,

    /// Periodic task scheduling daemons like `cron`.
    Cron = 9,

    /// Log messages containing sensitive information.
    AuthPriv = 10,

    /// FTP server.
    Ftp = 11,

    /// Reserved for local use.
    Local0 = 16,
    /// Reserved for local use.
    Local1 = 17,
    /// Reserved for local use.
    Local2 = 18,
    /// Reserved for local use.
    Local3 = 19,
    /// Reserved for local use.
    Local4 = 20,
    /// Reserved for local use.
    Local5 = 21,
    /// Reserved for local use.
    Local6 = 22,
    /// Reserved for local use.
    Local7 = 23,
}

impl Facility {
    /// All facilities, in code order.
    pub const ALL: [Facility; 20] = [
        Facility::Kern,
        Facility::User,
        Facility::Mail,
        Facility::Daemon,
        Facility::Auth,
        Facility::Syslog,
        Facility::Lpr,
        Facility::News,
        Facility::Uucp,
        Facility::Cron,
        Facility::AuthPriv,
        Facility::Ftp,
        Facility::Local0,
        Facility::Local1,
        Facility::Local2,
        Facility::Local3,
        Facility::Local4,
        Facility::Local5,
        Facility::Local6,
        Facility::Local7,
    ];

    /// Gets the name of this `Facility`, in lowercase.
    ///
    /// The `FromStr` implementation accepts the same names, but it is
    /// case-insensitive.
    pub fn name(&self) -> &'static str {
        match *self {
            Facility::Kern => "kern",
            Facility::User => "user",
            Facility::Mail => "mail",
            Facility::Daemon => "daemon",
            Facility::Auth => "auth",
            Facility::Syslog => "syslog",
            Facility::Lpr => "lpr",
            Facility::News => "news",
            Facility::Uucp => "uucp",
            Facility::Cron => "cron",
            Facility::AuthPriv => "authpriv",
            Facility::Ftp => "ftp",
            Facility::Local0 => "local0",
            Facility::Local1 => "local1",
            Facility::Local2 => "local2",
            Facility::Local3 => "local3",
            Facility::Local4 => "local4",
            Facility::Local5 => "local5",
            Facility::Local6 => "local6",
            Facility::Local7 => "local7",
        }
    }

    /// The portable facility code (0–23).
    pub fn code(self) -> c_int {
        self as c_int
    }

    /// Converts a facility code to a `Facility`.
    ///
    /// Returns `None` if the code does not name a facility.
    pub fn from_code(code: c_int) -> Option<Facility> {
        Facility::ALL.iter().copied().find(|f| f.code() == code)
    }

    /// The value `openlog` expects: the facility code shifted into the
    /// priority facility field.
    pub fn to_native(self) -> c_int {
        self.code() << 3
    }

    /// Converts a native `LOG_*` facility value back to a `Facility`.
    pub fn from_native(value: c_int) -> Option<Facility> {
        if value & 0b111 != 0 {
            return None;
        }
        Facility::from_code(value >> 3)
    }
}

impl Default for Facility {
    fn default() -> Self {
        Facility::User
    }
}

impl Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Facility {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let lower = s.to_ascii_lowercase();
        match Facility::ALL.iter().find(|f| f.name() == lower) {
            Some(facility) => Ok(*facility),
            None => track_panic!(ErrorKind::Invalid, "Unknown syslog facility: {:?}", s),
        }
    }
}

/// The facility name table: lowercase name to facility code.
pub fn facilities() -> BTreeMap<&'static str, c_int> {
    Facility::ALL.iter().map(|f| (f.name(), f.code())).collect()
}
