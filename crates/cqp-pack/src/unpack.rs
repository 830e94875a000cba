//! Record reader over host payloads.
//!
//! The format is schema-driven: there are no tags or field names on the wire,
//! so callers read fields in exactly the order the host wrote them.

use cqp_buffers::{print_octets_default, BufferError, Reader};

use crate::{TextEncoding, UnpackError, WireFormat};

/// Field reader for host records.
///
/// Wraps a checked [`Reader`] and exposes the four field kinds the host uses:
/// `Int32`, `Int64`, length-prefixed strings and length-prefixed tokens.
/// Every read either consumes the whole field or fails without moving the
/// cursor.
///
/// # Example
///
/// ```
/// use cqp_pack::{Pack, UnPack, WireFormat};
///
/// let format = WireFormat::utf8();
/// let mut pack = Pack::new(format);
/// pack.write_int64(10001);
/// pack.write_string("Alpha");
/// let bytes = pack.finish();
///
/// let mut unpack = UnPack::new(&bytes, format);
/// assert_eq!(unpack.read_int64(), Ok(10001));
/// assert_eq!(unpack.read_string().as_deref(), Ok("Alpha"));
/// assert_eq!(unpack.remaining(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct UnPack<'a> {
    reader: Reader<'a>,
    encoding: TextEncoding,
}

impl<'a> UnPack<'a> {
    pub fn new(data: &'a [u8], format: WireFormat) -> Self {
        log::trace!(
            "unpack {} bytes: {}",
            data.len(),
            print_octets_default(data)
        );
        Self {
            reader: Reader::with_order(data, format.byte_order),
            encoding: format.encoding,
        }
    }

    pub fn format(&self) -> WireFormat {
        WireFormat::new(self.reader.order(), self.encoding)
    }

    /// Number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.reader.size()
    }

    /// Reads a 4-byte signed integer.
    pub fn read_int32(&mut self) -> Result<i32, UnpackError> {
        Ok(self.reader.i32()?)
    }

    /// Reads an 8-byte signed integer.
    pub fn read_int64(&mut self) -> Result<i64, UnpackError> {
        Ok(self.reader.i64()?)
    }

    /// Reads a length-prefixed string in the configured text encoding.
    pub fn read_string(&mut self) -> Result<String, UnpackError> {
        let start = self.reader.position();
        let bytes = self.read_len_prefixed("string length")?;
        match self.encoding.decode(bytes) {
            Some(text) => Ok(text),
            None => {
                self.reader.rewind(start);
                Err(UnpackError::InvalidEncoding {
                    encoding: self.encoding.name(),
                })
            }
        }
    }

    /// Reads a length-prefixed token and copies its bytes out.
    pub fn read_token(&mut self) -> Result<Vec<u8>, UnpackError> {
        Ok(self.read_len_prefixed("token length")?.to_vec())
    }

    /// Reads a length-prefixed token and opens a fresh reader over it.
    ///
    /// The nested reader shares this reader's wire format and is bounded by
    /// the token, so a short nested record can never read into its sibling.
    pub fn read_token_unpack(&mut self) -> Result<UnPack<'a>, UnpackError> {
        let reader = self.read_prefixed("token length", |reader, size| reader.cut(size))?;
        Ok(UnPack {
            reader,
            encoding: self.encoding,
        })
    }

    fn read_len_prefixed(&mut self, what: &'static str) -> Result<&'a [u8], UnpackError> {
        self.read_prefixed(what, |reader, size| reader.buf(size))
    }

    /// Reads a 4-byte length and hands it to `body`, rewinding past the
    /// length when either step fails.
    fn read_prefixed<T>(
        &mut self,
        what: &'static str,
        body: impl FnOnce(&mut Reader<'a>, usize) -> Result<T, BufferError>,
    ) -> Result<T, UnpackError> {
        let start = self.reader.position();
        let len = self.read_int32()?;
        let Ok(size) = usize::try_from(len) else {
            self.reader.rewind(start);
            return Err(UnpackError::Malformed {
                what,
                value: i64::from(len),
            });
        };
        body(&mut self.reader, size).map_err(|err| {
            self.reader.rewind(start);
            err.into()
        })
    }
}
