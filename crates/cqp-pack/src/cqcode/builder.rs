//! Builders for individual CQ code fragments.
//!
//! Every text value is escaped with the comma rule. Optional values that are
//! `None` or empty are left out of the fragment entirely. Builders never
//! fail; out-of-range numbers are clamped.

use std::fmt::{Display, Write};

use super::escape;

/// Zoom level used by [`location`] when none is given.
pub const DEFAULT_LOCATION_ZOOM: i32 = 15;

struct Fragment {
    buf: String,
}

impl Fragment {
    fn new(tag: &str) -> Self {
        let mut buf = String::with_capacity(32);
        buf.push_str("[CQ:");
        buf.push_str(tag);
        Self { buf }
    }

    fn num(mut self, key: &str, value: impl Display) -> Self {
        let _ = write!(self.buf, ",{key}={value}");
        self
    }

    fn text(mut self, key: &str, value: &str) -> Self {
        let _ = write!(self.buf, ",{key}={}", escape(value, true));
        self
    }

    fn opt_text(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.is_empty() => self.text(key, value),
            _ => self,
        }
    }

    fn finish(mut self) -> String {
        self.buf.push(']');
        self.buf
    }
}

/// Who an `at` fragment mentions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtTarget {
    All,
    Qq(i64),
}

impl From<i64> for AtTarget {
    /// `-1` is the host's spelling of "everyone".
    fn from(qq: i64) -> Self {
        if qq == -1 {
            AtTarget::All
        } else {
            AtTarget::Qq(qq)
        }
    }
}

/// Mentions an account, or everyone. With `spacing` a trailing space is
/// appended so following text doesn't run into the mention.
pub fn at(target: impl Into<AtTarget>, spacing: bool) -> String {
    let fragment = Fragment::new("at");
    let mut out = match target.into() {
        AtTarget::All => fragment.num("qq", "all"),
        AtTarget::Qq(qq) => fragment.num("qq", qq),
    }
    .finish();
    if spacing {
        out.push(' ');
    }
    out
}

pub fn emoji(id: i32) -> String {
    Fragment::new("emoji").num("id", id).finish()
}

pub fn face(id: i32) -> String {
    Fragment::new("face").num("id", id).finish()
}

/// Window shake (nudge).
pub fn shake() -> String {
    Fragment::new("shake").finish()
}

/// Link share card. `image` defaults to the host's placeholder when absent.
pub fn share_link(
    url: &str,
    title: Option<&str>,
    content: Option<&str>,
    image: Option<&str>,
) -> String {
    Fragment::new("share")
        .text("url", url)
        .opt_text("title", title)
        .opt_text("content", content)
        .opt_text("image", image)
        .finish()
}

/// What a [`contact`] card points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Qq,
    Group,
}

impl ContactKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContactKind::Qq => "qq",
            ContactKind::Group => "group",
        }
    }
}

/// Recommends an account or a group.
pub fn contact(kind: ContactKind, id: i64) -> String {
    Fragment::new("contact")
        .text("type", kind.as_str())
        .num("id", id)
        .finish()
}

/// Location share. `zoom` defaults to [`DEFAULT_LOCATION_ZOOM`].
pub fn location(site: &str, detail: &str, lat: f64, lon: f64, zoom: Option<i32>) -> String {
    Fragment::new("location")
        .num("lat", lat)
        .num("lon", lon)
        .num("zoom", zoom.unwrap_or(DEFAULT_LOCATION_ZOOM))
        .text("title", site)
        .text("content", detail)
        .finish()
}

/// Marks a group message as anonymous. With `forced`, the host sends the
/// message normally if anonymity is unavailable instead of dropping it.
pub fn anonymous(forced: bool) -> String {
    let fragment = Fragment::new("anonymous");
    if forced {
        fragment.num("ignore", "true").finish()
    } else {
        fragment.finish()
    }
}

/// Image stored under the host's `data/image` directory, by relative path.
pub fn image(path: &str) -> String {
    Fragment::new("image").text("file", path).finish()
}

/// Voice clip stored under the host's `data/record` directory.
pub fn record(path: &str) -> String {
    Fragment::new("record").text("file", path).finish()
}

/// Streaming service a [`music`] id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MusicSource {
    #[default]
    Qq,
    NetEase,
    Xiami,
}

impl MusicSource {
    pub fn as_str(self) -> &'static str {
        match self {
            MusicSource::Qq => "qq",
            MusicSource::NetEase => "163",
            MusicSource::Xiami => "xiami",
        }
    }
}

/// Song share by catalogue id. `new_style` adds `style=1` for any source, but
/// the host only renders the new card for [`MusicSource::Qq`].
pub fn music(id: i64, source: MusicSource, new_style: bool) -> String {
    let fragment = Fragment::new("music")
        .num("id", id)
        .text("type", source.as_str());
    if new_style {
        fragment.num("style", 1).finish()
    } else {
        fragment.finish()
    }
}

/// Song share with a custom page link and audio URL.
pub fn custom_music(
    url: &str,
    audio: &str,
    title: Option<&str>,
    content: Option<&str>,
    image: Option<&str>,
) -> String {
    Fragment::new("music")
        .text("type", "custom")
        .text("url", url)
        .text("audio", audio)
        .opt_text("title", title)
        .opt_text("content", content)
        .opt_text("image", image)
        .finish()
}

/// Normalises a like/praise count: anything outside `1..=10` becomes 1.
pub fn praise_count(count: i32) -> i32 {
    if (1..=10).contains(&count) {
        count
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at() {
        assert_eq!(at(-1i64, true), "[CQ:at,qq=all] ");
        assert_eq!(at(10001i64, false), "[CQ:at,qq=10001]");
        assert_eq!(at(AtTarget::All, false), "[CQ:at,qq=all]");
    }

    #[test]
    fn test_optional_fields_omitted() {
        assert_eq!(
            share_link("http://a/?x=1,2", Some(""), None, Some("http://i")),
            "[CQ:share,url=http://a/?x=1&#44;2,image=http://i]"
        );
    }

    #[test]
    fn test_music_style() {
        assert_eq!(
            music(42, MusicSource::Qq, true),
            "[CQ:music,id=42,type=qq,style=1]"
        );
        assert_eq!(
            music(42, MusicSource::NetEase, false),
            "[CQ:music,id=42,type=163]"
        );
    }

    #[test]
    fn test_praise_count() {
        for count in [0, 11, -5] {
            assert_eq!(praise_count(count), 1);
        }
        assert_eq!(praise_count(7), 7);
        assert_eq!(praise_count(10), 10);
    }
}
