use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a kernel message, the lower 3 bits of the prefix byte.
///
/// Ordered from most to least severe, so `Priority::Emergency` compares
/// smallest.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "emerg")]
    Emergency = 0,
    #[serde(rename = "alert")]
    Alert = 1,
    #[serde(rename = "crit")]
    Critical = 2,
    #[serde(rename = "err")]
    Error = 3,
    #[serde(rename = "warning")]
    Warning = 4,
    #[serde(rename = "notice")]
    Notice = 5,
    #[serde(rename = "info")]
    Info = 6,
    #[serde(rename = "debug")]
    Debug = 7,
}

impl Priority {
    /// Take the lower 3 bits of `bits` as a priority. Every 3-bit pattern
    /// is a valid priority, so this can't fail.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x7 {
            0 => Priority::Emergency,
            1 => Priority::Alert,
            2 => Priority::Critical,
            3 => Priority::Error,
            4 => Priority::Warning,
            5 => Priority::Notice,
            6 => Priority::Info,
            _ => Priority::Debug,
        }
    }

    /// The wire value, 0..=7
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Convert a priority into a unique string representation
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Emergency => "emerg",
            Priority::Alert => "alert",
            Priority::Critical => "crit",
            Priority::Error => "err",
            Priority::Warning => "warning",
            Priority::Notice => "notice",
            Priority::Info => "info",
            Priority::Debug => "debug",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Priority;

    #[test]
    fn deref() {
        assert_eq!(Priority::Emergency.as_str(), "emerg");
        assert_eq!(Priority::Alert.as_str(), "alert");
        assert_eq!(Priority::Critical.as_str(), "crit");
        assert_eq!(Priority::Error.as_str(), "err");
        assert_eq!(Priority::Warning.as_str(), "warning");
        assert_eq!(Priority::Notice.as_str(), "notice");
        assert_eq!(Priority::Info.as_str(), "info");
        assert_eq!(Priority::Debug.as_str(), "debug");
    }

    #[test]
    fn from_bits_ignores_facility() {
        for code in 0..=u8::MAX {
            assert_eq!(Priority::from_bits(code).code(), code & 0x7);
        }
        assert_eq!(Priority::from_bits(14), Priority::Info);
    }

    #[test]
    fn most_severe_first() {
        assert!(Priority::Emergency < Priority::Alert);
        assert!(Priority::Warning < Priority::Debug);
        assert_eq!(
            [Priority::Debug, Priority::Emergency, Priority::Notice]
                .iter()
                .min(),
            Some(&Priority::Emergency)
        );
    }

    #[test]
    fn serde_uses_short_names() {
        for bits in 0..8u8 {
            let priority = Priority::from_bits(bits);
            let json = serde_json::to_value(priority).unwrap();
            assert_eq!(json, priority.as_str());

            let back: Priority = serde_json::from_value(json).unwrap();
            assert_eq!(back, priority);
        }

        let p: Priority = serde_json::from_str("\"crit\"").unwrap();
        assert_eq!(p, Priority::Critical);
        assert!(serde_json::from_str::<Priority>("\"critical\"").is_err());
    }
}
