//! Fixed field sequences for every host record, and the list framing that
//! wraps them.
//!
//! The order of the reads in each [`Record::read`] is the wire contract.
//! Fields are read into locals and the value is only built once every read
//! has succeeded, so a failure never exposes a partial entity.

use crate::model::{
    AnonymousIdentity, FloatWindow, FloatWindowColor, Group, GroupFile, GroupMember,
    PermissionType, Sex, StrangerInfo,
};
use crate::{Pack, UnPack, UnpackError, WireFormat};

/// A value with a fixed on-wire field sequence.
pub trait Record: Sized {
    /// Reads one record, field by field, in wire order.
    fn read(unpack: &mut UnPack<'_>) -> Result<Self, UnpackError>;

    /// Writes the same fields in the same order.
    fn write(&self, pack: &mut Pack);
}

/// Decodes a single record from `data`.
///
/// Trailing bytes after the record are ignored, as the host may append
/// fields in newer versions.
pub fn decode<T: Record>(data: &[u8], format: WireFormat) -> Result<T, UnpackError> {
    let mut unpack = UnPack::new(data, format);
    T::read(&mut unpack)
}

/// Encodes a single record.
pub fn encode<T: Record>(record: &T, format: WireFormat) -> Vec<u8> {
    let mut pack = Pack::new(format);
    record.write(&mut pack);
    pack.finish()
}

/// Decodes an `Int32` count followed by that many record tokens.
///
/// The whole list fails if any element fails; elements come back in wire
/// order.
pub fn decode_list<T: Record>(data: &[u8], format: WireFormat) -> Result<Vec<T>, UnpackError> {
    let mut unpack = UnPack::new(data, format);
    read_list(&mut unpack)
}

/// Reads a counted list of record tokens from an open reader.
pub fn read_list<T: Record>(unpack: &mut UnPack<'_>) -> Result<Vec<T>, UnpackError> {
    let count = unpack.read_int32()?;
    let count = usize::try_from(count).map_err(|_| UnpackError::Malformed {
        what: "list count",
        value: i64::from(count),
    })?;
    // Every element costs at least its 4-byte prefix; don't trust the count
    // for the allocation.
    let mut items = Vec::with_capacity(count.min(unpack.remaining() / 4));
    for index in 0..count {
        if unpack.remaining() == 0 {
            log::debug!("list ended after {index} of {count} elements");
            return Err(UnpackError::Truncated {
                needed: 4,
                remaining: 0,
            });
        }
        let mut element = unpack.read_token_unpack()?;
        items.push(T::read(&mut element)?);
    }
    log::trace!("decoded list of {count} elements");
    Ok(items)
}

/// Encodes `records` as a count followed by one token per record.
pub fn encode_list<T: Record>(records: &[T], format: WireFormat) -> Vec<u8> {
    let mut pack = Pack::new(format);
    write_list(records, &mut pack);
    pack.finish()
}

/// Writes `records` as a count and one token each. The count is an `Int32`, so
/// at most `i32::MAX` records are written.
pub fn write_list<T: Record>(records: &[T], pack: &mut Pack) {
    let count = i32::try_from(records.len()).unwrap_or(i32::MAX);
    pack.write_int32(count);
    for record in &records[..count as usize] {
        let mut element = Pack::new(pack.format());
        record.write(&mut element);
        pack.write_token(&element.finish());
    }
}

fn read_flag(unpack: &mut UnPack<'_>) -> Result<bool, UnpackError> {
    Ok(unpack.read_int32()? == 1)
}

impl Record for StrangerInfo {
    fn read(unpack: &mut UnPack<'_>) -> Result<Self, UnpackError> {
        let id = unpack.read_int64()?;
        let nickname = unpack.read_string()?;
        let sex = Sex::from(unpack.read_int32()?);
        let age = unpack.read_int32()?;
        Ok(StrangerInfo {
            id,
            nickname,
            sex,
            age,
        })
    }

    fn write(&self, pack: &mut Pack) {
        pack.write_int64(self.id);
        pack.write_string(&self.nickname);
        pack.write_int32(self.sex.into());
        pack.write_int32(self.age);
    }
}

impl Record for GroupMember {
    fn read(unpack: &mut UnPack<'_>) -> Result<Self, UnpackError> {
        let group_id = unpack.read_int64()?;
        let qq_id = unpack.read_int64()?;
        let nickname = unpack.read_string()?;
        let card = unpack.read_string()?;
        let sex = Sex::from(unpack.read_int32()?);
        let age = unpack.read_int32()?;
        let region = unpack.read_string()?;
        let join_time = unpack.read_int32()?;
        let last_active_time = unpack.read_int32()?;
        let level = unpack.read_string()?;
        let permission = PermissionType::from(unpack.read_int32()?);
        let has_bad_record = read_flag(unpack)?;
        let special_title = unpack.read_string()?;
        let special_title_expiry = unpack.read_int32()?;
        let card_editable = read_flag(unpack)?;
        Ok(GroupMember {
            group_id,
            qq_id,
            nickname,
            card,
            sex,
            age,
            region,
            join_time,
            last_active_time,
            level,
            permission,
            has_bad_record,
            special_title,
            special_title_expiry,
            card_editable,
        })
    }

    fn write(&self, pack: &mut Pack) {
        pack.write_int64(self.group_id);
        pack.write_int64(self.qq_id);
        pack.write_string(&self.nickname);
        pack.write_string(&self.card);
        pack.write_int32(self.sex.into());
        pack.write_int32(self.age);
        pack.write_string(&self.region);
        pack.write_int32(self.join_time);
        pack.write_int32(self.last_active_time);
        pack.write_string(&self.level);
        pack.write_int32(self.permission.into());
        pack.write_int32(i32::from(self.has_bad_record));
        pack.write_string(&self.special_title);
        pack.write_int32(self.special_title_expiry);
        pack.write_int32(i32::from(self.card_editable));
    }
}

impl Record for Group {
    fn read(unpack: &mut UnPack<'_>) -> Result<Self, UnpackError> {
        let id = unpack.read_int64()?;
        let name = unpack.read_string()?;
        Ok(Group { id, name })
    }

    fn write(&self, pack: &mut Pack) {
        pack.write_int64(self.id);
        pack.write_string(&self.name);
    }
}

impl Record for GroupFile {
    fn read(unpack: &mut UnPack<'_>) -> Result<Self, UnpackError> {
        let id = unpack.read_string()?;
        let name = unpack.read_string()?;
        let size = unpack.read_int64()?;
        let raw_bus_id = unpack.read_int64()?;
        let bus_id = i32::try_from(raw_bus_id).map_err(|_| UnpackError::Malformed {
            what: "file bus id",
            value: raw_bus_id,
        })?;
        Ok(GroupFile {
            id,
            name,
            size,
            bus_id,
        })
    }

    fn write(&self, pack: &mut Pack) {
        pack.write_string(&self.id);
        pack.write_string(&self.name);
        pack.write_int64(self.size);
        pack.write_int64(i64::from(self.bus_id));
    }
}

impl Record for AnonymousIdentity {
    fn read(unpack: &mut UnPack<'_>) -> Result<Self, UnpackError> {
        let internal_id = unpack.read_int64()?;
        let display_name = unpack.read_string()?;
        let opaque_token = unpack.read_token()?;
        Ok(AnonymousIdentity {
            internal_id,
            display_name,
            opaque_token,
        })
    }

    fn write(&self, pack: &mut Pack) {
        pack.write_int64(self.internal_id);
        pack.write_string(&self.display_name);
        pack.write_token(&self.opaque_token);
    }
}

impl Record for FloatWindow {
    fn read(unpack: &mut UnPack<'_>) -> Result<Self, UnpackError> {
        let data = unpack.read_string()?;
        let unit = unpack.read_string()?;
        let code = unpack.read_int32()?;
        let color = FloatWindowColor::from_code(code).ok_or(UnpackError::Malformed {
            what: "float window color",
            value: i64::from(code),
        })?;
        Ok(FloatWindow { data, unit, color })
    }

    fn write(&self, pack: &mut Pack) {
        pack.write_string(&self.data);
        pack.write_string(&self.unit);
        pack.write_int32(self.color.code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_wire_layout() {
        let bytes = encode(
            &Group {
                id: 1,
                name: "a".into(),
            },
            WireFormat::utf8(),
        );
        assert_eq!(bytes, vec![0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, b'a']);
    }

    #[test]
    fn test_flag_is_one_only() {
        let mut pack = Pack::new(WireFormat::utf8());
        pack.write_int32(2);
        let bytes = pack.finish();
        let mut unpack = UnPack::new(&bytes, WireFormat::utf8());
        assert_eq!(read_flag(&mut unpack), Ok(false));
    }

    #[test]
    fn test_empty_list() {
        let bytes = encode_list::<Group>(&[], WireFormat::utf8());
        assert_eq!(bytes, vec![0, 0, 0, 0]);
        assert_eq!(decode_list::<Group>(&bytes, WireFormat::utf8()), Ok(vec![]));
    }

    #[test]
    fn test_negative_count() {
        let bytes = [0xff, 0xff, 0xff, 0xff];
        assert_eq!(
            decode_list::<Group>(&bytes, WireFormat::utf8()),
            Err(UnpackError::Malformed {
                what: "list count",
                value: -1
            })
        );
    }

    #[test]
    fn test_bus_id_out_of_range() {
        let mut pack = Pack::new(WireFormat::utf8());
        pack.write_string("/abc");
        pack.write_string("a.txt");
        pack.write_int64(10);
        pack.write_int64(i64::from(i32::MAX) + 1);
        let bytes = pack.finish();
        assert_eq!(
            decode::<GroupFile>(&bytes, WireFormat::utf8()),
            Err(UnpackError::Malformed {
                what: "file bus id",
                value: i64::from(i32::MAX) + 1
            })
        );
    }
}
