use std::fmt;

use serde::{Deserialize, Serialize};

/// Source category of a kernel message, the upper 5 bits of the prefix byte.
///
/// Only the first eight syslog facilities are known here. Anything above
/// (uucp, cron, local0..7 and friends) collapses into `Facility::Unknown`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Facility {
    #[serde(rename = "kern")]
    Kernel = 0,
    #[serde(rename = "user")]
    User = 1,
    #[serde(rename = "mail")]
    Mail = 2,
    #[serde(rename = "daemon")]
    Daemon = 3,
    #[serde(rename = "auth")]
    Auth = 4,
    #[serde(rename = "syslog")]
    Syslog = 5,
    #[serde(rename = "lpr")]
    Lpr = 6,
    #[serde(rename = "news")]
    News = 7,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Facility {
    /// Convert a facility number (the prefix shifted right by 3) into a `Facility`
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Facility::Kernel,
            1 => Facility::User,
            2 => Facility::Mail,
            3 => Facility::Daemon,
            4 => Facility::Auth,
            5 => Facility::Syslog,
            6 => Facility::Lpr,
            7 => Facility::News,
            _ => Facility::Unknown,
        }
    }

    /// The wire value, or `None` for `Facility::Unknown` whose original
    /// number is gone.
    pub fn code(self) -> Option<u8> {
        match self {
            Facility::Unknown => None,
            known => Some(known as u8),
        }
    }

    /// Convert a facility into a unique string representation
    pub fn as_str(self) -> &'static str {
        match self {
            Facility::Kernel => "kern",
            Facility::User => "user",
            Facility::Mail => "mail",
            Facility::Daemon => "daemon",
            Facility::Auth => "auth",
            Facility::Syslog => "syslog",
            Facility::Lpr => "lpr",
            Facility::News => "news",
            Facility::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Facility;

    #[test]
    fn test_deref() {
        assert_eq!(Facility::Kernel.as_str(), "kern");
        assert_eq!(Facility::Unknown.to_string(), "unknown");
    }

    #[test]
    fn known_codes() {
        for code in 0..8u8 {
            let facility = Facility::from_code(code);
            assert_ne!(facility, Facility::Unknown);
            assert_eq!(facility.code(), Some(code));
        }
    }

    #[test]
    fn out_of_range_is_unknown() {
        for code in 8..=31u8 {
            assert_eq!(Facility::from_code(code), Facility::Unknown);
        }
        assert_eq!(Facility::from_code(u8::MAX), Facility::Unknown);
        assert_eq!(Facility::Unknown.code(), None);
    }

    #[test]
    fn serde_uses_short_names() {
        for code in 0..=8u8 {
            let facility = Facility::from_code(code);
            let json = serde_json::to_value(facility).unwrap();
            assert_eq!(json, facility.to_string());

            let back: Facility = serde_json::from_value(json).unwrap();
            assert_eq!(back, facility);
        }

        let f: Facility = serde_json::from_str("\"kern\"").unwrap();
        assert_eq!(f, Facility::Kernel);
    }
}
