use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// `/dev/kmsg` prefixes continuation lines with a single space.
pub const DEFAULT_CONTINUATION_MARKER: char = ' ';

/// Characters a primary record line may start with, or that split one.
/// A marker from this set would make the two kinds of line ambiguous.
const RESERVED_MARKERS: &[char] = &[',', ';', '=', '-', '+'];

/// Configuration for a [`Decoder`](crate::Decoder)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Leading character that marks a line as a `KEY=VALUE` continuation
    /// of the previous record rather than a record of its own.
    pub continuation_marker: char,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            continuation_marker: DEFAULT_CONTINUATION_MARKER,
        }
    }
}

impl DecoderConfig {
    /// Set a custom continuation marker, e.g. `'\x7f'`
    pub fn with_continuation_marker(mut self, marker: char) -> Self {
        self.continuation_marker = marker;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let marker = self.continuation_marker;
        if marker.is_ascii_digit() || RESERVED_MARKERS.contains(&marker) {
            return Err(Error::InvalidMarker(marker));
        }

        Ok(())
    }
}
