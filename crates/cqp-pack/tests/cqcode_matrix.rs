//! CQ code escaping and fragment builders.

use cqp_pack::cqcode::{
    anonymous, at, contact, custom_music, emoji, escape, face, image, location, music,
    praise_count, record, shake, share_link, unescape, ContactKind, MusicSource,
};

#[test]
fn escape_scenario_without_comma_rule() {
    let escaped = escape("My [Team] & Co", false);
    assert_eq!(escaped, "My &#91;Team&#93; &amp; Co");
    assert_eq!(unescape(&escaped), "My [Team] & Co");
}

#[test]
fn escape_matrix() {
    let cases = [
        ("", false, ""),
        ("a,b", false, "a,b"),
        ("a,b", true, "a&#44;b"),
        ("&amp;", false, "&amp;amp;"),
        ("[[]]", true, "&#91;&#91;&#93;&#93;"),
        ("&#44;", true, "&amp;#44;"),
    ];
    for (input, comma, expected) in cases {
        assert_eq!(escape(input, comma), expected, "escape({input:?}, {comma})");
        assert_eq!(unescape(expected), input, "unescape({expected:?})");
    }
}

#[test]
fn simple_fragments() {
    assert_eq!(at(-1i64, false), "[CQ:at,qq=all]");
    assert_eq!(at(10001i64, true), "[CQ:at,qq=10001] ");
    assert_eq!(emoji(128_512), "[CQ:emoji,id=128512]");
    assert_eq!(face(14), "[CQ:face,id=14]");
    assert_eq!(shake(), "[CQ:shake]");
    assert_eq!(anonymous(false), "[CQ:anonymous]");
    assert_eq!(anonymous(true), "[CQ:anonymous,ignore=true]");
    assert_eq!(contact(ContactKind::Group, 555), "[CQ:contact,type=group,id=555]");
    assert_eq!(contact(ContactKind::Qq, 1), "[CQ:contact,type=qq,id=1]");
}

#[test]
fn file_fragments_escape_paths() {
    assert_eq!(image("1.jpg"), "[CQ:image,file=1.jpg]");
    assert_eq!(
        image("pics/[new],a&b.png"),
        "[CQ:image,file=pics/&#91;new&#93;&#44;a&amp;b.png]"
    );
    assert_eq!(record("voice/1.amr"), "[CQ:record,file=voice/1.amr]");
}

#[test]
fn share_link_omits_empty_optionals() {
    assert_eq!(
        share_link("https://example.com", Some("标题"), Some(""), None),
        "[CQ:share,url=https://example.com,title=标题]"
    );
    assert_eq!(
        share_link("u", Some("t"), Some("c"), Some("i")),
        "[CQ:share,url=u,title=t,content=c,image=i]"
    );
}

#[test]
fn location_defaults_zoom() {
    assert_eq!(
        location("West Lake", "Hangzhou, ZJ", 30.25, 120.5, None),
        "[CQ:location,lat=30.25,lon=120.5,zoom=15,title=West Lake,content=Hangzhou&#44; ZJ]"
    );
    assert!(location("a", "b", 0.0, 0.0, Some(3)).contains(",zoom=3,"));
}

#[test]
fn music_fragments() {
    assert_eq!(
        music(1, MusicSource::Xiami, false),
        "[CQ:music,id=1,type=xiami]"
    );
    assert_eq!(
        music(1, MusicSource::default(), true),
        "[CQ:music,id=1,type=qq,style=1]"
    );
    assert_eq!(
        custom_music("https://p", "https://a.mp3", Some("Song, live"), None, Some("https://c")),
        "[CQ:music,type=custom,url=https://p,audio=https://a.mp3,title=Song&#44; live,image=https://c]"
    );
}

#[test]
fn built_fragment_values_unescape_back() {
    let title = "a,[b]&c";
    let fragment = share_link("u", Some(title), None, None);
    let value = fragment
        .trim_end_matches(']')
        .split(',')
        .find_map(|kv| kv.strip_prefix("title="))
        .unwrap();
    assert_eq!(unescape(value), title);
}

#[test]
fn praise_count_is_clamped() {
    assert_eq!(praise_count(0), 1);
    assert_eq!(praise_count(11), 1);
    assert_eq!(praise_count(-5), 1);
    assert_eq!(praise_count(7), 7);
}
