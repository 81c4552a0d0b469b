//! Light markup cleanup that runs before layout.
//!
//! Heading markers are dropped and `- ` list items get a bullet glyph. No
//! other markup is interpreted.

/// Glyph that replaces the `-` of list items. Encodable in WinAnsi (0x95).
pub const BULLET: char = '\u{2022}';

const BOM: char = '\u{FEFF}';

/// Characters that end a line, besides `\r\n`.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0B}', '\u{0C}', '\u{1C}', '\u{1D}', '\u{1E}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Normalize one source line. The bullet rule also applies to what is left
/// of a heading.
pub fn normalize_line(raw: &str) -> String {
    let mut line = raw.trim_matches(BOM);
    if line.starts_with('#') {
        line = line.trim_start_matches('#').trim();
    }
    match line.strip_prefix("- ") {
        Some(item) => format!("{} {}", BULLET, item),
        None => line.to_string(),
    }
}

/// Split at every line break, `\r\n` counting as one. A trailing break does
/// not start another line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(&LINE_BREAKS[..]) {
            Some(i) => {
                lines.push(&rest[..i]);
                let tail = &rest[i..];
                let width = if tail.starts_with("\r\n") {
                    2
                } else {
                    tail.chars().next().map_or(1, char::len_utf8)
                };
                rest = &tail[width..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}

/// Split `text` into lines and normalize each of them.
pub fn normalize(text: &str) -> Vec<String> {
    split_lines(text).into_iter().map(normalize_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings() {
        assert_eq!(normalize_line("# Title"), "Title");
        assert_eq!(normalize_line("### Deep heading  "), "Deep heading");
        assert_eq!(normalize_line("#NoSpace"), "NoSpace");
    }

    #[test]
    fn bullets() {
        assert_eq!(normalize_line("- item one"), "• item one");
        assert_eq!(normalize_line("-not an item"), "-not an item");
        assert_eq!(normalize_line("  - indented"), "  - indented");
    }

    #[test]
    fn bullet_inside_heading() {
        assert_eq!(normalize_line("# - item"), "• item");
        assert_eq!(normalize_line("## -x"), "-x");
    }

    #[test]
    fn every_line_break_splits() {
        assert_eq!(normalize("a\rb"), vec!["a", "b"]);
        assert_eq!(normalize("a\r\nb\n"), vec!["a", "b"]);
        assert_eq!(normalize("a\u{0C}b\u{2028}c\u{85}d"), vec!["a", "b", "c", "d"]);
        assert_eq!(normalize("a\n\rb"), vec!["a", "", "b"]);
        assert!(normalize("").is_empty());
    }

    #[test]
    fn byte_order_mark() {
        assert_eq!(normalize_line("\u{FEFF}# Title"), "Title");
    }

    #[test]
    fn keeps_blank_lines() {
        assert_eq!(normalize("a\n\nb\r\n"), vec!["a", "", "b"]);
    }

    #[test]
    fn plain_text_untouched() {
        assert_eq!(normalize_line("  (x) \\ y"), "  (x) \\ y");
    }
}
