use std::collections::BTreeMap;

use chrono::Duration;

use crate::error::{Error, Result};
use crate::facility::Facility;
use crate::priority::Priority;
use crate::record::Record;

// A record line, as documented in Documentation/ABI/testing/dev-kmsg:
//
//                  INFO                              MSG
//   .-------------------------------------------. .--------.
//   prefix,seq,timestamp_us,flags[,...ignored...];<message>
//
// A continuation line carries one key/value pair for the record before it:
//
//   <marker>KEY=VALUE
//
// The marker is stripped by the decoder before the body reaches us.

/// At most this many comma separated fields are split out of the info
/// section, the last one is left untouched.
const MAX_INFO_FIELDS: usize = 5;
const REQUIRED_INFO_FIELDS: usize = 4;

/// Extract both priority and facility from a syslog(2) encoded prefix.
///
/// ```text
///   facility    priority
/// .-----------.  .-----.
/// |           |  |     |
/// 7  6  5  4  3  2  1  0    bits
/// ```
///
/// Total: facilities outside the known range decode to
/// `Facility::Unknown`, and every 3-bit priority is valid.
pub fn decode_prefix(code: u8) -> (Priority, Facility) {
    (Priority::from_bits(code), Facility::from_code(code >> 3))
}

/// Inverse of [`decode_prefix`]. `Facility::Unknown` has lost its number
/// and can't be encoded.
pub fn encode_prefix(priority: Priority, facility: Facility) -> Option<u8> {
    facility.code().map(|f| (f << 3) | priority.code())
}

/// Parse one primary record line into a `Record` with empty metadata.
///
/// Only the first `;` separates the info section from the message, so the
/// message may contain further semicolons. Fields are not trimmed.
///
/// # Example
///
/// ```
/// use kmsg::{parse, Facility, Priority};
///
/// let record = parse("30,5,1000,-;boot complete").unwrap();
///
/// assert_eq!(record.priority, Priority::Info);
/// assert_eq!(record.facility, Facility::Daemon);
/// assert_eq!(record.sequence_number, 5);
/// assert_eq!(record.message, "boot complete");
/// ```
pub fn parse(raw_line: &str) -> Result<Record> {
    if raw_line.is_empty() {
        return Err(Error::EmptyInput);
    }

    let (info, message) = raw_line
        .split_once(';')
        .ok_or(Error::MissingMessageField)?;

    let mut fields = [""; REQUIRED_INFO_FIELDS];
    let mut found = 0;
    for field in info.splitn(MAX_INFO_FIELDS, ',').take(REQUIRED_INFO_FIELDS) {
        fields[found] = field;
        found += 1;
    }
    if found < REQUIRED_INFO_FIELDS {
        return Err(Error::IncompleteInfoSection { found });
    }

    // the 4th field holds the flags, which nothing consumes yet
    let [prefix, sequence, timestamp, _flags] = fields;

    let code = prefix.parse::<u8>().map_err(|source| Error::InvalidPrefix {
        value: prefix.to_string(),
        source,
    })?;
    let (priority, facility) = decode_prefix(code);

    let sequence_number =
        sequence
            .parse::<i64>()
            .map_err(|source| Error::InvalidSequenceNumber {
                value: sequence.to_string(),
                source,
            })?;

    let timestamp_us = timestamp
        .parse::<i64>()
        .map_err(|source| Error::InvalidTimestamp {
            value: timestamp.to_string(),
            source,
        })?;

    Ok(Record {
        priority,
        facility,
        sequence_number,
        timestamp: Duration::microseconds(timestamp_us),
        message: message.to_string(),
        metadata: BTreeMap::new(),
    })
}

/// Fold one `KEY=VALUE` continuation body into `target`'s metadata.
///
/// The first `=` splits key from value, the value may contain more of
/// them. A repeated key overwrites the earlier value.
pub fn merge_continuation(body: &str, target: &mut Record) -> Result<()> {
    let (key, value) = match body.split_once('=') {
        Some((key, value)) if !key.is_empty() => (key, value),
        _ => {
            return Err(Error::MalformedContinuation {
                body: body.to_string(),
            })
        }
    };

    target.metadata.insert(key.to_string(), value.to_string());

    Ok(())
}
