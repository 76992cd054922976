use serde::{de::Error, Deserialize, Deserializer, Serialize};

/// Stand-in syslog configuration type for platforms without `syslog(3)`.
/// Cannot be constructed; deserializing it reports the missing platform
/// support.
#[derive(Clone, Debug, Serialize)]
pub enum SyslogNotSupported {}

impl<'de> Deserialize<'de> for SyslogNotSupported {
    fn deserialize<D: Deserializer<'de>>(_: D) -> Result<Self, D::Error> {
        Err(D::Error::custom("syslog(3) is not available on this platform"))
    }
}
