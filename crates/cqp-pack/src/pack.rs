//! Record writer producing host payloads.

use cqp_buffers::Writer;

use crate::{TextEncoding, WireFormat};

/// Field writer for host records, the mirror of [`UnPack`](crate::UnPack).
///
/// Single pass and write-only: fields are appended in call order and
/// [`Pack::finish`] hands the bytes over, consuming the writer.
#[derive(Debug, Clone)]
pub struct Pack {
    writer: Writer,
    encoding: TextEncoding,
}

impl Pack {
    pub fn new(format: WireFormat) -> Self {
        Self {
            writer: Writer::with_order(format.byte_order),
            encoding: format.encoding,
        }
    }

    pub fn format(&self) -> WireFormat {
        WireFormat::new(self.writer.order(), self.encoding)
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.writer.len()
    }

    /// Returns `true` if no field has been written yet.
    pub fn is_empty(&self) -> bool {
        self.writer.is_empty()
    }

    /// Writes a 4-byte signed integer.
    pub fn write_int32(&mut self, val: i32) {
        self.writer.i32(val);
    }

    /// Writes an 8-byte signed integer.
    pub fn write_int64(&mut self, val: i64) {
        self.writer.i64(val);
    }

    /// Writes a string as a 4-byte length followed by its encoded bytes.
    pub fn write_string(&mut self, text: &str) {
        let bytes = self.encoding.encode(text);
        self.write_len_prefixed(&bytes);
    }

    /// Writes a nested record or opaque blob as a length-prefixed token.
    pub fn write_token(&mut self, data: &[u8]) {
        self.write_len_prefixed(data);
    }

    /// Fields longer than `i32::MAX` bytes cannot be described by the
    /// prefix; they are cut to that length so prefix and body still agree.
    fn write_len_prefixed(&mut self, data: &[u8]) {
        let len = i32::try_from(data.len()).unwrap_or(i32::MAX);
        self.writer.i32(len);
        self.writer.buf(&data[..len as usize]);
    }

    /// Returns the accumulated bytes.
    pub fn finish(mut self) -> Vec<u8> {
        self.writer.flush()
    }
}
