//! Per-source decoding session.

use tracing::{debug, trace};

use crate::config::DecoderConfig;
use crate::error::{Error, Result};
use crate::parser::{merge_continuation, parse};
use crate::record::Record;

/// Decodes the lines of one kmsg source, in the order they were read.
///
/// The decoder holds on to the most recently parsed record so that the
/// continuation lines that follow can be folded into it. A record is
/// handed back once the next primary line arrives, or on [`finish`].
/// Use one `Decoder` per source; nothing is shared between them.
///
/// [`finish`]: Decoder::finish
///
/// # Example
///
/// ```
/// use kmsg::Decoder;
///
/// let mut decoder = Decoder::new();
///
/// assert!(decoder.feed("6,1,0,-;usb 1-1: new device").unwrap().is_none());
/// assert!(decoder.feed(" SUBSYSTEM=usb").unwrap().is_none());
///
/// let record = decoder.feed("6,2,10,-;next").unwrap().unwrap();
/// assert_eq!(record.metadata["SUBSYSTEM"], "usb");
///
/// let last = decoder.finish().unwrap();
/// assert_eq!(last.sequence_number, 2);
/// ```
#[derive(Debug, Default)]
pub struct Decoder {
    config: DecoderConfig,
    current: Option<Record>,
}

impl Decoder {
    /// A decoder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DecoderConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            current: None,
        })
    }

    /// The configuration this decoder was built with
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode one raw line.
    ///
    /// A continuation line is merged into the pending record and yields
    /// `Ok(None)`. A primary line becomes the new pending record, and the
    /// one it replaces is returned. On error the pending record is left as
    /// it was, so the caller can skip the line and carry on.
    pub fn feed(&mut self, line: &str) -> Result<Option<Record>> {
        match line.strip_prefix(self.config.continuation_marker) {
            Some(body) => self.merge(body).map(|_| None),
            None => match parse(line) {
                Ok(record) => {
                    trace!(
                        sequence_number = record.sequence_number,
                        priority = record.priority.as_str(),
                        facility = record.facility.as_str(),
                        "decoded record"
                    );
                    Ok(self.current.replace(record))
                }
                Err(err) => {
                    debug!(%err, line, "rejected kmsg line");
                    Err(err)
                }
            },
        }
    }

    fn merge(&mut self, body: &str) -> Result<()> {
        let Some(record) = self.current.as_mut() else {
            debug!(line = body, "continuation without a record");
            return Err(Error::NoActiveRecord);
        };

        if let Err(err) = merge_continuation(body, record) {
            debug!(
                %err,
                sequence_number = record.sequence_number,
                "rejected continuation"
            );
            return Err(err);
        }

        trace!(
            sequence_number = record.sequence_number,
            "merged continuation"
        );

        Ok(())
    }

    /// The record continuation lines are currently merged into
    pub fn current(&self) -> Option<&Record> {
        self.current.as_ref()
    }

    /// Hand back the pending record, e.g. at end of stream. Continuation
    /// lines fed after this fail with `Error::NoActiveRecord` until the
    /// next primary line.
    pub fn finish(&mut self) -> Option<Record> {
        self.current.take()
    }
}
