//! Wire format configuration shared by [`UnPack`](crate::UnPack) and
//! [`Pack`](crate::Pack).

use cqp_buffers::ByteOrder;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, TextEncoding};

/// How integers and strings are laid out in host payloads.
///
/// The default matches the Chinese-locale host: big-endian integers and
/// GB18030 strings. Both settings can be loaded from TOML:
///
/// ```
/// use cqp_pack::WireFormat;
///
/// let format = WireFormat::from_toml(r#"
///     byte_order = "little-endian"
///     encoding = "utf-8"
/// "#).unwrap();
/// assert_eq!(format.encoding.name(), "UTF-8");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WireFormat {
    pub byte_order: ByteOrder,
    pub encoding: TextEncoding,
}

impl WireFormat {
    pub fn new(byte_order: ByteOrder, encoding: TextEncoding) -> Self {
        Self {
            byte_order,
            encoding,
        }
    }

    /// Big-endian integers with UTF-8 strings.
    pub fn utf8() -> Self {
        Self::new(ByteOrder::BigEndian, TextEncoding::utf8())
    }

    /// Parses a format from a TOML document. Missing keys take their defaults.
    pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(src)?)
    }

    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let format = WireFormat::default();
        assert_eq!(format.byte_order, ByteOrder::BigEndian);
        assert_eq!(format.encoding, TextEncoding::gb18030());
        assert_eq!(WireFormat::from_toml("").unwrap(), format);
    }

    #[test]
    fn test_partial_toml() {
        let format = WireFormat::from_toml("encoding = \"gbk\"").unwrap();
        assert_eq!(format.byte_order, ByteOrder::BigEndian);
        assert_eq!(format.encoding.name(), "GBK");
    }

    #[test]
    fn test_bad_toml() {
        assert!(WireFormat::from_toml("encoding = \"nope\"").is_err());
        assert!(WireFormat::from_toml("byte_order = \"middle\"").is_err());
        assert!(WireFormat::from_toml("colour = 1").is_err());
        assert!(WireFormat::from_toml("encoding = \"utf-16le\"").is_err());
    }
}
