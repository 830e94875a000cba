//! Binary buffer reader with cursor tracking.

use crate::{BufferError, ByteOrder};

/// A binary buffer reader over a borrowed byte slice.
///
/// Every read is bounds-checked. A read that asks for more bytes than remain
/// returns [`BufferError::EndOfBuffer`] and leaves the cursor where it was,
/// so a caller can abandon a whole record at its first failing field.
///
/// # Example
///
/// ```
/// use cqp_buffers::Reader;
///
/// let data = [0x00, 0x00, 0x01, 0x02, 0xff];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.i32(), Ok(0x0102));
/// assert_eq!(reader.size(), 1);
/// assert!(reader.i32().is_err());
/// assert_eq!(reader.size(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    uint8: &'a [u8],
    x: usize,
    order: ByteOrder,
}

impl<'a> Reader<'a> {
    /// Creates a big-endian reader for the given byte slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        Self::with_order(uint8, ByteOrder::BigEndian)
    }

    /// Creates a reader that decodes integers in the given byte order.
    pub fn with_order(uint8: &'a [u8], order: ByteOrder) -> Self {
        Self { uint8, x: 0, order }
    }

    /// Byte order used for multi-byte integers.
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Current cursor position. Never past the end of the data.
    pub fn position(&self) -> usize {
        self.x
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.uint8.len() - self.x
    }

    /// Moves the cursor to a position previously taken from
    /// [`Reader::position`]. Positions past the end clamp to the end.
    pub fn rewind(&mut self, x: usize) {
        self.x = x.min(self.uint8.len());
    }

    fn ensure(&self, size: usize) -> Result<(), BufferError> {
        let remaining = self.size();
        if size > remaining {
            return Err(BufferError::EndOfBuffer {
                needed: size,
                remaining,
            });
        }
        Ok(())
    }

    /// Returns a subarray of the given size and advances the cursor.
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.ensure(size)?;
        let x = self.x;
        let bin = &self.uint8[x..x + size];
        self.x = x + size;
        Ok(bin)
    }

    /// Creates a new reader over the next `size` bytes and advances past them.
    ///
    /// The nested reader inherits this reader's byte order.
    pub fn cut(&mut self, size: usize) -> Result<Reader<'a>, BufferError> {
        let bin = self.buf(size)?;
        Ok(Reader::with_order(bin, self.order))
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N], BufferError> {
        let bin = self.buf(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bin);
        Ok(out)
    }

    /// Reads a signed 32-bit integer.
    #[inline]
    pub fn i32(&mut self) -> Result<i32, BufferError> {
        let bytes = self.array::<4>()?;
        Ok(match self.order {
            ByteOrder::BigEndian => i32::from_be_bytes(bytes),
            ByteOrder::LittleEndian => i32::from_le_bytes(bytes),
        })
    }

    /// Reads a signed 64-bit integer.
    #[inline]
    pub fn i64(&mut self) -> Result<i64, BufferError> {
        let bytes = self.array::<8>()?;
        Ok(match self.order {
            ByteOrder::BigEndian => i64::from_be_bytes(bytes),
            ByteOrder::LittleEndian => i64::from_le_bytes(bytes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i32_big_endian() {
        let data = [0xff, 0xff, 0xff, 0xfe];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.i32(), Ok(-2));
    }

    #[test]
    fn test_i32_little_endian() {
        let data = [0x04, 0x03, 0x02, 0x01];
        let mut reader = Reader::with_order(&data, ByteOrder::LittleEndian);
        assert_eq!(reader.i32(), Ok(0x01020304));
    }

    #[test]
    fn test_short_read_keeps_cursor() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = Reader::new(&data);
        assert_eq!(
            reader.i32(),
            Err(BufferError::EndOfBuffer {
                needed: 4,
                remaining: 3
            })
        );
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.size(), 3);
    }

    #[test]
    fn test_cut() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05];
        let mut reader = Reader::new(&data);
        reader.buf(1).unwrap();
        let mut nested = reader.cut(2).unwrap();
        assert_eq!(nested.buf(2), Ok(&[0x02, 0x03][..]));
        assert_eq!(nested.size(), 0);
        assert_eq!(reader.buf(1), Ok(&[0x04][..]));
    }

    #[test]
    fn test_rewind() {
        let data = [0x0a, 0x0b];
        let mut reader = Reader::new(&data);
        let start = reader.position();
        reader.buf(1).unwrap();
        reader.rewind(start);
        assert_eq!(reader.buf(1), Ok(&[0x0a][..]));
    }

    #[test]
    fn test_rewind_past_end_clamps() {
        let data = [1, 2, 3];
        let mut reader = Reader::new(&data);
        reader.rewind(10);
        assert_eq!(reader.position(), 3);
        assert_eq!(reader.size(), 0);
        assert!(reader.buf(1).is_err());
    }
}
