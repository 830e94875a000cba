//! Text encoding selector for length-prefixed strings.

use std::borrow::Cow;
use std::fmt;

use encoding_rs::Encoding;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ConfigError;

/// The text encoding the host uses for string fields.
///
/// The host writes strings in its native code page, which depends on the
/// platform and locale, so the encoding is always chosen by configuration.
/// Serialized as its WHATWG label (`"gb18030"`, `"utf-8"`, ...).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextEncoding(&'static Encoding);

impl TextEncoding {
    pub fn utf8() -> Self {
        Self(encoding_rs::UTF_8)
    }

    /// Simplified Chinese code page used by Chinese-locale hosts.
    pub fn gb18030() -> Self {
        Self(encoding_rs::GB18030)
    }

    /// Looks an encoding up by any of its WHATWG labels (`"gbk"`, `"cp936"`,
    /// `"latin1"`, ...).
    ///
    /// Encodings that `encoding_rs` can only decode (UTF-16 and
    /// `replacement`, which encode as UTF-8) are rejected, since strings
    /// written with them would not read back.
    pub fn for_label(label: &str) -> Result<Self, ConfigError> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| ConfigError::UnknownEncoding(label.to_owned()))?;
        if encoding.output_encoding() != encoding {
            return Err(ConfigError::DecodeOnlyEncoding(encoding.name()));
        }
        Ok(Self(encoding))
    }

    /// Canonical name of the encoding.
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Decodes `bytes`, returning `None` if they are not valid in this
    /// encoding. No replacement characters are ever substituted.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        self.0
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(Cow::into_owned)
    }

    /// Encodes `text`.
    ///
    /// Lossy for characters the encoding cannot represent: they are written
    /// as HTML numeric character references (`&#127881;`) and read back in
    /// that form. UTF-8 and GB18030 cover all of Unicode and never hit this.
    pub fn encode<'a>(&self, text: &'a str) -> Cow<'a, [u8]> {
        let (bytes, _, _) = self.0.encode(text);
        bytes
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self::gb18030()
    }
}

impl fmt::Debug for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextEncoding").field(&self.name()).finish()
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TextEncoding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for TextEncoding {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        TextEncoding::for_label(&label).map_err(serde::de::Error::custom)
    }
}
