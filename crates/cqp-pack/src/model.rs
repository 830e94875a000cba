//! Domain values carried in host payloads.
//!
//! All of these are produced by decoding and never borrow the payload they
//! were read from.

use serde::Serialize;

/// Gender as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    /// Anything else; the host uses 255 for "not set".
    Unknown(i32),
}

impl From<i32> for Sex {
    fn from(raw: i32) -> Self {
        match raw {
            0 => Sex::Male,
            1 => Sex::Female,
            other => Sex::Unknown(other),
        }
    }
}

impl From<Sex> for i32 {
    fn from(sex: Sex) -> Self {
        match sex {
            Sex::Male => 0,
            Sex::Female => 1,
            Sex::Unknown(raw) => raw,
        }
    }
}

/// A member's role within a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionType {
    Member,
    Admin,
    Owner,
    Unknown(i32),
}

impl From<i32> for PermissionType {
    fn from(raw: i32) -> Self {
        match raw {
            1 => PermissionType::Member,
            2 => PermissionType::Admin,
            3 => PermissionType::Owner,
            other => PermissionType::Unknown(other),
        }
    }
}

impl From<PermissionType> for i32 {
    fn from(permission: PermissionType) -> Self {
        match permission {
            PermissionType::Member => 1,
            PermissionType::Admin => 2,
            PermissionType::Owner => 3,
            PermissionType::Unknown(raw) => raw,
        }
    }
}

/// Public profile of an arbitrary account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrangerInfo {
    pub id: i64,
    pub nickname: String,
    pub sex: Sex,
    pub age: i32,
}

/// One member of a group, as listed by the host.
///
/// Times are seconds since the Unix epoch. A negative
/// `special_title_expiry` means the title never expires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupMember {
    pub group_id: i64,
    pub qq_id: i64,
    pub nickname: String,
    pub card: String,
    pub sex: Sex,
    pub age: i32,
    pub region: String,
    pub join_time: i32,
    pub last_active_time: i32,
    pub level: String,
    pub permission: PermissionType,
    pub has_bad_record: bool,
    pub special_title: String,
    pub special_title_expiry: i32,
    pub card_editable: bool,
}

impl GroupMember {
    /// Group card if one is set, otherwise the nickname.
    pub fn display_name(&self) -> &str {
        if self.card.is_empty() {
            &self.nickname
        } else {
            &self.card
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
}

/// A file uploaded to a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupFile {
    pub id: String,
    pub name: String,
    pub size: i64,
    pub bus_id: i32,
}

/// Sender identity attached to an anonymous group message.
///
/// `opaque_token` must be handed back to the host verbatim (e.g. to ban the
/// sender) and is never interpreted locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnonymousIdentity {
    pub internal_id: i64,
    pub display_name: String,
    pub opaque_token: Vec<u8>,
}

/// Colour of a status floating window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatWindowColor {
    #[default]
    Green,
    Orange,
    Red,
    Crimson,
    Black,
    Gray,
}

impl FloatWindowColor {
    pub fn code(self) -> i32 {
        match self {
            FloatWindowColor::Green => 1,
            FloatWindowColor::Orange => 2,
            FloatWindowColor::Red => 3,
            FloatWindowColor::Crimson => 4,
            FloatWindowColor::Black => 5,
            FloatWindowColor::Gray => 6,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            1 => FloatWindowColor::Green,
            2 => FloatWindowColor::Orange,
            3 => FloatWindowColor::Red,
            4 => FloatWindowColor::Crimson,
            5 => FloatWindowColor::Black,
            6 => FloatWindowColor::Gray,
            _ => return None,
        })
    }
}

/// Payload for the plugin's status floating window: a value, its unit and a
/// colour, e.g. `"42"`, `"msgs"`, green.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FloatWindow {
    pub data: String,
    pub unit: String,
    pub color: FloatWindowColor,
}
