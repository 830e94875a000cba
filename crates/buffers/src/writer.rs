//! Auto-growing binary writer.

use crate::ByteOrder;

/// A binary writer that appends to an owned, growable buffer.
///
/// # Example
///
/// ```
/// use cqp_buffers::{ByteOrder, Writer};
///
/// let mut writer = Writer::with_order(ByteOrder::LittleEndian);
/// writer.i32(1);
/// assert_eq!(writer.flush(), vec![1, 0, 0, 0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Writer {
    uint8: Vec<u8>,
    order: ByteOrder,
}

impl Writer {
    /// Creates an empty big-endian writer.
    pub fn new() -> Self {
        Self::with_order(ByteOrder::BigEndian)
    }

    /// Creates an empty writer that encodes integers in the given byte order.
    pub fn with_order(order: ByteOrder) -> Self {
        Self {
            uint8: Vec::new(),
            order,
        }
    }

    /// Byte order used for multi-byte integers.
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.uint8.len()
    }

    /// Returns `true` if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.uint8.is_empty()
    }

    /// Takes the written bytes, leaving the writer empty.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.uint8)
    }

    /// Writes a signed 32-bit integer.
    #[inline]
    pub fn i32(&mut self, val: i32) {
        match self.order {
            ByteOrder::BigEndian => self.buf(&val.to_be_bytes()),
            ByteOrder::LittleEndian => self.buf(&val.to_le_bytes()),
        }
    }

    /// Writes a signed 64-bit integer.
    #[inline]
    pub fn i64(&mut self, val: i64) {
        match self.order {
            ByteOrder::BigEndian => self.buf(&val.to_be_bytes()),
            ByteOrder::LittleEndian => self.buf(&val.to_le_bytes()),
        }
    }

    /// Appends raw bytes.
    #[inline]
    pub fn buf(&mut self, data: &[u8]) {
        self.uint8.extend_from_slice(data);
    }
}
