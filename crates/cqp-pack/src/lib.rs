//! Record codec for cqp host payloads.
//!
//! The host hands plugins base64 text wrapping compact binary records:
//! big- or little-endian `Int32`/`Int64` fields, length-prefixed strings in
//! the host's code page, and length-prefixed tokens that hold nested
//! records. This crate reads ([`UnPack`]) and writes ([`Pack`]) those
//! records, maps them onto domain types ([`model`]) through fixed field
//! sequences ([`record`]), and builds the CQ code fragments used in message
//! text ([`cqcode`]).
//!
//! Base64 is left to the boundary crate; everything here works on bytes.
//!
//! ```
//! use cqp_pack::model::Group;
//! use cqp_pack::record::{decode_list, encode_list};
//! use cqp_pack::WireFormat;
//!
//! let groups = vec![
//!     Group { id: 10001, name: "Alpha".into() },
//!     Group { id: 10002, name: "Beta".into() },
//! ];
//! let bytes = encode_list(&groups, WireFormat::default());
//! assert_eq!(decode_list::<Group>(&bytes, WireFormat::default()).unwrap(), groups);
//! ```

mod encoding;
mod error;
mod format;
mod pack;
mod unpack;

pub mod cqcode;
pub mod model;
pub mod record;

pub use cqp_buffers::ByteOrder;
pub use encoding::TextEncoding;
pub use error::{ConfigError, UnpackError};
pub use format::WireFormat;
pub use pack::Pack;
pub use record::Record;
pub use unpack::UnPack;
