//! Binary buffer utilities for cqp host payloads.
//!
//! This crate provides the two primitives every host record is built on:
//!
//! - [`Reader`] - Reads binary data from a byte slice with a checked cursor
//! - [`Writer`] - Writes binary data to an auto-growing buffer
//!
//! Both are parameterised by a [`ByteOrder`] so the wire byte order can be
//! configured instead of assumed.
//!
//! # Example
//!
//! ```
//! use cqp_buffers::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.i32(-2);
//! writer.buf(b"hello");
//! let data = writer.flush();
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.i32(), Ok(-2));
//! assert_eq!(reader.buf(5), Ok(&b"hello"[..]));
//! assert!(reader.buf(1).is_err());
//! ```

mod print_octets;
mod reader;
mod writer;

pub use print_octets::{print_octets, print_octets_default};
pub use reader::Reader;
pub use writer::Writer;

/// Byte order of multi-byte integers on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ByteOrder {
    /// Most significant byte first.
    #[default]
    BigEndian,
    /// Least significant byte first.
    LittleEndian,
}

/// Error type for buffer operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    EndOfBuffer {
        /// Bytes the read asked for.
        needed: usize,
        /// Bytes that were left.
        remaining: usize,
    },
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::EndOfBuffer { needed, remaining } => write!(
                f,
                "end of buffer: needed {needed} bytes, {remaining} remaining"
            ),
        }
    }
}

impl std::error::Error for BufferError {}
