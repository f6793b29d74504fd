use std::num::ParseIntError;

use thiserror::Error;

/// Everything that can go wrong while decoding a single kmsg line.
///
/// All of these are local to the offending line, the caller decides
/// whether to skip it and keep reading.
#[derive(Debug, Error)]
pub enum Error {
    #[error("empty input")]
    EmptyInput,
    #[error("message field not present")]
    MissingMessageField,
    #[error("info section has {found} fields, at least 4 required")]
    IncompleteInfoSection { found: usize },
    #[error("invalid prefix {value:?}: {source}")]
    InvalidPrefix {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid sequence number {value:?}: {source}")]
    InvalidSequenceNumber {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("continuation {body:?} is not a KEY=VALUE pair")]
    MalformedContinuation { body: String },
    #[error("continuation line without a preceding record")]
    NoActiveRecord,
    #[error("{0:?} cannot be used as continuation marker")]
    InvalidMarker(char),
}

pub type Result<T> = std::result::Result<T, Error>;
