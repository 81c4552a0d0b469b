//! Line wrapping and pagination.

use std::ops::Deref;

use crate::config::DocumentConfig;

/// A line that fits the configured character limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine(String);

impl DisplayLine {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, the unit the wrap limit is measured in.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl Deref for DisplayLine {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for DisplayLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display lines of one physical page, in reading order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page(Vec<DisplayLine>);

impl Page {
    pub fn lines(&self) -> &[DisplayLine] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Byte index at which `line` has to be cut, or `None` if it already fits.
///
/// The cut goes at the last space within the first `limit` characters. If
/// there is none, or the only one is the very first character, the line is
/// cut hard at `limit` characters so that every step makes progress.
fn cut_position(line: &str, limit: usize) -> Option<usize> {
    let (limit_byte, _) = line.char_indices().nth(limit)?;
    match line[..limit_byte].rfind(' ') {
        Some(space) if space > 0 => Some(space),
        _ if limit_byte > 0 => Some(limit_byte),
        // limit is 0, take one character to make progress
        _ => line.char_indices().nth(1).map(|(i, _)| i),
    }
}

/// Wrap a single input line into display lines.
///
/// The remainder after each cut loses its leading whitespace. The last
/// segment is always emitted, so an empty input line gives one empty display
/// line.
pub fn wrap_line(line: &str, limit: usize) -> Vec<DisplayLine> {
    let mut segments = Vec::new();
    let mut rest = line;
    while let Some(cut) = cut_position(rest, limit) {
        log::trace!("wrap at byte {} of {}", cut, rest.len());
        segments.push(DisplayLine(rest[..cut].to_string()));
        rest = rest[cut..].trim_start();
    }
    segments.push(DisplayLine(rest.to_string()));
    segments
}

/// Wrap all lines and distribute the display lines over pages.
///
/// A page is sealed as soon as it holds `config.page_capacity()` lines, so a
/// page break can fall inside a wrapped input line. No input gives no pages.
pub fn paginate<I>(lines: I, config: &DocumentConfig) -> Vec<Page>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let capacity = config.page_capacity();
    let mut pages = Vec::new();
    let mut current = Vec::with_capacity(capacity);

    for line in lines {
        for segment in wrap_line(line.as_ref(), config.max_line_chars) {
            current.push(segment);
            if current.len() >= capacity {
                pages.push(Page(std::mem::replace(&mut current, Vec::with_capacity(capacity))));
            }
        }
    }
    if !current.is_empty() {
        pages.push(Page(current));
    }

    log::debug!("laid out {} pages with up to {} lines each", pages.len(), capacity);
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn lens(lines: &[DisplayLine]) -> Vec<usize> {
        lines.iter().map(DisplayLine::char_len).collect()
    }

    #[test]
    fn short_line_is_kept() {
        assert_eq!(wrap_line("hello", 100), vec![DisplayLine("hello".to_string())]);
    }

    #[test]
    fn empty_line_is_kept() {
        assert_eq!(wrap_line("", 100), vec![DisplayLine(String::new())]);
    }

    #[test]
    fn exactly_at_limit_is_not_wrapped() {
        let line = "x".repeat(100);
        assert_eq!(lens(&wrap_line(&line, 100)), vec![100]);
    }

    #[test]
    fn hard_cut_without_spaces() {
        let line = "a".repeat(250);
        assert_eq!(lens(&wrap_line(&line, 100)), vec![100, 100, 50]);
    }

    #[test]
    fn cut_at_last_space() {
        let line = format!("{} {}", "a".repeat(60), "b".repeat(60));
        let wrapped = wrap_line(&line, 100);
        assert_eq!(wrapped[0].as_str(), "a".repeat(60));
        assert_eq!(wrapped[1].as_str(), "b".repeat(60));
    }

    #[test]
    fn space_at_limit_is_outside_the_window() {
        // the space is character 100, the window holds characters 0..100
        let line = format!("{} {}", "a".repeat(100), "b".repeat(5));
        let wrapped = wrap_line(&line, 100);
        assert_eq!(wrapped[0].as_str(), "a".repeat(100));
        assert_eq!(wrapped[1].as_str(), "bbbbb");
    }

    #[test]
    fn leading_space_forces_hard_cut() {
        let line = format!(" {}", "a".repeat(150));
        assert_eq!(lens(&wrap_line(&line, 100)), vec![100, 51]);
    }

    #[test]
    fn remainder_is_trimmed() {
        let line = format!("{}     {}", "a".repeat(90), "b".repeat(20));
        let wrapped = wrap_line(&line, 100);
        assert_eq!(wrapped[1].as_str(), "b".repeat(20));
    }

    #[test]
    fn multibyte_characters_count_once() {
        let line = "ä".repeat(150);
        assert_eq!(lens(&wrap_line(&line, 100)), vec![100, 50]);
    }

    #[test]
    fn configured_wrap_limit() {
        let config = DocumentConfig::default().with_max_line_chars(10);
        let pages = paginate(["alpha beta gamma delta"], &config);
        let lines: Vec<&str> = pages[0].lines().iter().map(DisplayLine::as_str).collect();
        assert_eq!(lines, vec!["alpha", "beta", "gamma", "delta"]);
    }

    #[test]
    fn zero_lines_zero_pages() {
        let pages = paginate(Vec::<String>::new(), &DocumentConfig::default());
        assert!(pages.is_empty());
    }

    #[test]
    fn page_break_at_capacity() {
        let config = DocumentConfig::default();
        let lines = vec!["line"; 54];
        let pages = paginate(&lines, &config);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].len(), 53);
        assert_eq!(pages[1].len(), 1);
    }

    #[test]
    fn full_last_page_adds_no_empty_page() {
        let config = DocumentConfig::default();
        let pages = paginate(vec!["line"; 106], &config);
        assert_eq!(pages.len(), 2);
        assert!(pages.iter().all(|p| p.len() == 53));
    }

    #[test]
    fn page_break_inside_wrapped_line() {
        let config = DocumentConfig::default();
        let mut lines = vec!["x".to_string(); 52];
        lines.push("y".repeat(250));
        let pages = paginate(&lines, &config);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].lines()[52].char_len(), 100);
        assert_eq!(lens(pages[1].lines()), vec![100, 50]);
    }

    proptest! {
        #[test]
        fn display_lines_fit(lines in prop::collection::vec("[a-z äö]{0,300}", 0..20)) {
            let config = DocumentConfig::default();
            for page in paginate(&lines, &config) {
                prop_assert!(!page.is_empty());
                prop_assert!(page.len() <= config.page_capacity());
                for line in page.lines() {
                    prop_assert!(line.char_len() <= 100);
                }
            }
        }

        #[test]
        fn no_text_is_lost(line in "[a-z ]{0,400}") {
            let wrapped = wrap_line(&line, 100);
            let original: String = line.split_whitespace().collect();
            let joined: String = wrapped.iter().flat_map(|l| l.split_whitespace()).collect();
            prop_assert_eq!(original, joined);
        }
    }
}
