//! Decoder for records read from the Linux kernel ring buffer through
//! [`/dev/kmsg`](https://www.kernel.org/doc/Documentation/ABI/testing/dev-kmsg).
//!
//! Every read of `/dev/kmsg` yields one record line, optionally followed by
//! continuation lines carrying `KEY=VALUE` metadata for that record:
//!
//! ```text
//! 6,339,5140900,-;NET: Registered protocol family 10
//!  SUBSYSTEM=net
//!  DEVICE=n1
//! ```
//!
//! Use [`parse`] for a single record line, or a [`Decoder`] to feed a whole
//! stream and get records back with their metadata attached. Reading the
//! device itself is left to the caller.
//!
//! # Example
//!
//! ```
//! use kmsg::{Decoder, Facility, Priority};
//!
//! let mut decoder = Decoder::new();
//! let mut records = Vec::new();
//!
//! for line in [
//!     "6,339,5140900,-;NET: Registered protocol family 10",
//!     " SUBSYSTEM=net",
//!     "3,340,5141000,-;oops",
//! ] {
//!     match decoder.feed(line) {
//!         Ok(Some(record)) => records.push(record),
//!         Ok(None) => {}
//!         Err(err) => eprintln!("skipping bad line: {err}"),
//!     }
//! }
//! records.extend(decoder.finish());
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].facility, Facility::Kernel);
//! assert_eq!(records[0].metadata["SUBSYSTEM"], "net");
//! assert_eq!(records[1].priority, Priority::Error);
//! ```
//!
//! # Unimplemented Features
//!
//!  * The flags field (`-`, `c`, `+`) is read but not exposed.
//!  * Message text is kept as the kernel escaped it (`\x0a` and friends
//!    are not unescaped).
//!

mod config;
mod decoder;
mod error;
mod facility;
mod parser;
mod priority;
mod record;

pub use config::{DecoderConfig, DEFAULT_CONTINUATION_MARKER};
pub use decoder::Decoder;
pub use error::{Error, Result};
pub use facility::Facility;
pub use parser::{decode_prefix, encode_prefix, merge_continuation, parse};
pub use priority::Priority;
pub use record::Record;
