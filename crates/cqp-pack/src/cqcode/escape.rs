//! Escaping of the CQ code reserved characters.

/// Escapes `text` for embedding in a CQ code or message body.
///
/// `&`, `[` and `]` are always escaped. `,` is escaped only when `comma` is
/// set, which is required for values inside a CQ code (where `,` separates
/// fields) and must be left off for plain message text.
///
/// ```
/// use cqp_pack::cqcode::escape;
///
/// assert_eq!(escape("My [Team] & Co", false), "My &#91;Team&#93; &amp; Co");
/// assert_eq!(escape("a,b", true), "a&#44;b");
/// ```
pub fn escape(text: &str, comma: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '[' => out.push_str("&#91;"),
            ']' => out.push_str("&#93;"),
            ',' if comma => out.push_str("&#44;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Reverses [`escape`], with or without the comma rule.
///
/// The bracket and comma entities are resolved before `&amp;`, so a literal
/// `&#91;` that was escaped to `&amp;#91;` comes back as text.
pub fn unescape(text: &str) -> String {
    if !text.contains('&') {
        return text.to_owned();
    }
    text.replace("&#91;", "[")
        .replace("&#93;", "]")
        .replace("&#44;", ",")
        .replace("&amp;", "&")
}
