//! CQ code helpers: escaping and fragment construction.
//!
//! A CQ code is an inline tag of the form `[CQ:<tag>(,<key>=<value>)*]`
//! embedded in message text.

mod builder;
mod escape;

pub use builder::{
    anonymous, at, contact, custom_music, emoji, face, image, location, music, praise_count,
    record, shake, share_link, AtTarget, ContactKind, MusicSource, DEFAULT_LOCATION_ZOOM,
};
pub use escape::{escape, unescape};
