//! In-memory representation of a single kernel log record.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::facility::Facility;
use crate::priority::Priority;

/// A decoded `/dev/kmsg` record.
///
/// `timestamp` is the offset reported by the kernel, relative to the
/// source's own reference point (boot time for `/dev/kmsg`), not the
/// Unix epoch. Use [`Record::wall_clock`] to place it on a calendar.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub priority: Priority,
    pub facility: Facility,
    pub sequence_number: i64,
    #[serde(with = "micros")]
    pub timestamp: Duration,
    pub message: String,
    // filled by continuation lines only
    pub metadata: BTreeMap<String, String>,
}

impl Record {
    /// Wall-clock time of this record given the instant the source's
    /// clock started at. `None` if the result is out of range.
    pub fn wall_clock(&self, reference: DateTime<Utc>) -> Option<DateTime<Utc>> {
        reference.checked_add_signed(self.timestamp)
    }

    /// Re-encode the prefix byte this record was decoded from. `None` when
    /// the facility was unknown.
    pub fn prefix(&self) -> Option<u8> {
        crate::parser::encode_prefix(self.priority, self.facility)
    }
}

/// Serialize the timestamp as integer microseconds, the way the kernel
/// hands it out.
mod micros {
    use chrono::Duration;
    use serde::{ser, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        match value.num_microseconds() {
            Some(us) => serializer.serialize_i64(us),
            None => Err(ser::Error::custom("timestamp overflows i64 microseconds")),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        i64::deserialize(deserializer).map(Duration::microseconds)
    }
}
