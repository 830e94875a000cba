//! Hex previews of payloads for diagnostics.

use std::fmt::Write;

/// Formats at most `max` bytes of `octets` as space separated hex.
///
/// Anything past `max` is summarised as `... (N more)`.
///
/// # Example
///
/// ```
/// use cqp_buffers::print_octets;
///
/// assert_eq!(print_octets(&[0x00, 0x00, 0x27, 0x11], 16), "00 00 27 11");
/// assert_eq!(print_octets(&[1, 2, 3], 2), "01 02... (1 more)");
/// ```
pub fn print_octets(octets: &[u8], max: usize) -> String {
    let mut out = String::with_capacity(octets.len().min(max) * 3);
    for (i, byte) in octets.iter().take(max).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{byte:02x}");
    }
    if octets.len() > max {
        let _ = write!(out, "... ({} more)", octets.len() - max);
    }
    out
}

/// [`print_octets`] capped at 16 bytes.
pub fn print_octets_default(octets: &[u8]) -> String {
    print_octets(octets, 16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_octets_empty() {
        assert_eq!(print_octets(&[], 16), "");
    }

    #[test]
    fn test_print_octets_truncated() {
        let data: Vec<u8> = (0..20).collect();
        assert_eq!(print_octets(&data, 4), "00 01 02 03... (16 more)");
        assert!(print_octets_default(&data).ends_with("... (4 more)"));
    }
}
