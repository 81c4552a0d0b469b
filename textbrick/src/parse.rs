//! Reader for the documents this crate writes.
//!
//! Only the subset of PDF produced by [`crate::simple_encode`] is understood:
//! a header, uncompressed indirect objects, a classic xref table and a
//! trailer.

use nom::{bytes, character, combinator};
use nom_locate::LocatedSpan;
use nom_tracable::{tracable_parser, TracableInfo};

pub use self::{
    object::{indirect_object, literal_string, object},
    trailer::trailer,
    xref::{startxref_tail, xref_table},
};
use self::error::{TbParseError, TbParseErrorKind};

pub mod error;
pub(crate) mod object;
mod trailer;
mod xref;

pub type Span<'a> = LocatedSpan<&'a [u8], TracableInfo>;
pub type TbParseResult<'a, O> = nom::IResult<Span<'a>, O, TbParseError<Span<'a>>>;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Wrap a buffer for parsing. Tracing is only active with the `trace` feature.
pub fn span(buf: &[u8]) -> Span<'_> {
    let info = TracableInfo::new().forward(true).backward(true);
    LocatedSpan::new_extra(buf, info)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub version: (u8, u8),
    /// The second line is a comment of non-ASCII bytes.
    pub announced_binary: bool,
}

fn line_ending(input: Span) -> TbParseResult<()> {
    combinator::value(
        (),
        nom::branch::alt((bytes::complete::tag(&b"\r\n"[..]), bytes::complete::tag(&b"\n"[..]))),
    )(input)
}

fn version(input: Span) -> TbParseResult<(u8, u8)> {
    let (remainder, _) = bytes::complete::tag_no_case(PDF_MAGIC)(input)?;
    let (remainder, major) = character::complete::u8(remainder)?;
    let (remainder, _) = character::complete::char('.')(remainder)?;
    let (remainder, minor) = character::complete::u8(remainder)?;
    let (remainder, _) = line_ending(remainder)?;

    Ok((remainder, (major, minor)))
}

fn comment(input: Span) -> TbParseResult<Span> {
    let (remainder, _) = character::complete::char('%')(input)?;
    let (remainder, comment) = bytes::complete::take_till(|c| c == b'\n' || c == b'\r')(remainder)?;
    let (remainder, _) = line_ending(remainder)?;

    Ok((remainder, comment))
}

fn binary_indicator(input: Span) -> TbParseResult<bool> {
    if let Ok((r, comment)) = comment(input) {
        if comment.fragment().len() > 3 && comment.fragment().iter().all(|&d| d >= 128) {
            return Ok((r, true));
        }
    }
    Ok((input, false))
}

#[tracable_parser]
pub fn header(input: Span) -> TbParseResult<Header> {
    let (remainder, version) = version(input)?;
    let (remainder, announced_binary) = binary_indicator(remainder)?;

    Ok((
        remainder,
        Header {
            version,
            announced_binary,
        },
    ))
}

/// Position of the last occurrence of `needle` within the last `limit` bytes.
pub(crate) fn backward_search<'a>(input: Span<'a>, needle: &[u8], limit: usize) -> TbParseResult<'a, Span<'a>> {
    let haystack = *input.fragment();
    let window_start = haystack.len().saturating_sub(limit);
    let position = haystack[window_start..]
        .windows(needle.len())
        .rposition(|w| w == needle)
        .map(|p| p + window_start)
        .ok_or_else(|| nom::Err::Error(TbParseError::new(input, TbParseErrorKind::BackwardSearchNotFound)))?;

    let (found, _) = bytes::complete::take(position)(input)?;
    Ok((found, found))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version() {
        let (rest, v) = version(span(b"%PDF-1.4\n")).unwrap();
        assert_eq!(v, (1, 4));
        assert!(rest.fragment().is_empty());
    }

    #[test]
    fn test_parse_binary_indicator() {
        let (rest, binary) = binary_indicator(span(b"%\xE2\xE3\xCF\xD3\n1 0 obj")).unwrap();
        assert!(binary);
        assert_eq!(*rest.fragment(), b"1 0 obj");
    }

    #[test]
    fn test_ascii_comment_is_not_binary_indicator() {
        let (rest, binary) = binary_indicator(span(b"%comment\n")).unwrap();
        assert!(!binary);
        assert_eq!(rest.location_offset(), 0);
    }

    #[test]
    fn test_header() {
        let (rest, h) = header(span(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n")).unwrap();
        assert_eq!(
            h,
            Header {
                version: (1, 4),
                announced_binary: true
            }
        );
        assert_eq!(rest.location_offset(), 15);
    }

    #[test]
    fn test_backward_search() {
        let input = span(b"abc startxref 1 startxref 2");
        let (found, _) = backward_search(input, b"startxref", 100).unwrap();
        assert_eq!(found.location_offset(), 16);

        assert!(backward_search(input, b"startxref", 5).is_err());
    }
}
