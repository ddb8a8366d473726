//! Display width policies.
//!
//! Sizing and serialization never hard-code how wide a string is; they call
//! an injected [`WidthFn`] so callers can pick the measurement that matches
//! their output medium.

/// Measurement hook injected into the size calculator and the serializer.
pub type WidthFn = fn(&str) -> usize;

/// Byte-length measurement, the default policy.
///
/// Exact for ASCII and cheap everywhere else; swap in [`display_width`] when
/// the output is destined for a terminal.
pub fn byte_width(text: &str) -> usize {
    text.len()
}

/// Compute the display width of a string after stripping ANSI escapes.
pub fn display_width(text: &str) -> usize {
    let clean = strip_ansi_escapes::strip(text);
    let clean_str = String::from_utf8_lossy(&clean);
    unicode_width::UnicodeWidthStr::width(&*clean_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_width_counts_bytes() {
        assert_eq!(byte_width("plain"), 5);
        assert_eq!(byte_width("héllo"), 6);
    }

    #[test]
    fn display_width_ignores_ansi_and_counts_cells() {
        assert_eq!(display_width("\x1b[1mhéllo\x1b[0m"), 5);
        assert_eq!(display_width("wide：字"), 8);
    }
}
