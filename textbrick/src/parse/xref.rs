use nom::{branch, bytes, character, combinator, multi};
use nom_tracable::tracable_parser;

use super::{
    backward_search,
    error::{TbParseError, TbParseErrorKind},
    Span, TbParseResult,
};
use crate::{
    pdf::{FreeObject, UsedObject, Xref, XrefEntry},
    simple_encode::{
        section::{STARTXREF, XREF},
        EOF_MARKER,
    },
};

/// The `startxref` line is searched for within this many bytes from the end.
const TAIL_WINDOW: usize = 1024;

fn invalid_startxref(input: Span) -> nom::Err<TbParseError<Span>> {
    nom::Err::Error(TbParseError::new(input, TbParseErrorKind::StartxrefInvalid))
}

/// Offset of the xref table, read from the `startxref` line at the end of
/// the file. The remainder starts at the `startxref` keyword.
#[tracable_parser]
pub fn startxref_tail(input: Span) -> TbParseResult<usize> {
    let (remainder, found) = backward_search(input, STARTXREF, TAIL_WINDOW)?;
    let (trailing, _) = bytes::complete::tag(STARTXREF)(found)?;
    let (trailing, _) = character::complete::multispace0(trailing)?;
    let (trailing, xref_pos) =
        character::complete::u64::<_, TbParseError<Span>>(trailing).map_err(|_| invalid_startxref(input))?;
    let (trailing, _) = character::complete::multispace0(trailing)?;
    bytes::complete::tag::<_, _, TbParseError<Span>>(EOF_MARKER)(trailing)
        .map_err(|_| invalid_startxref(input))?;

    let xref_pos = usize::try_from(xref_pos).map_err(|_| invalid_startxref(input))?;

    Ok((remainder, xref_pos))
}

fn xref_entry(number: usize, input: Span) -> TbParseResult<XrefEntry> {
    let (remainder, offset) = character::complete::u64(input)?;
    let (remainder, _) = character::complete::space1(remainder)?;
    let (remainder, generation) = character::complete::u32(remainder)?;
    let (remainder, _) = character::complete::space1(remainder)?;
    let (remainder, in_use) = branch::alt((
        combinator::value(true, bytes::complete::tag(&b"n"[..])),
        combinator::value(false, bytes::complete::tag(&b"f"[..])),
    ))(remainder)?;
    let (remainder, _) = character::complete::multispace0(remainder)?;

    let offset = usize::try_from(offset)
        .map_err(|_| nom::Err::Error(TbParseError::new(input, TbParseErrorKind::InvalidNumber)))?;
    let generation = generation as usize;
    let entry = if in_use {
        XrefEntry::from(UsedObject {
            number,
            byte_offset: offset,
            generation,
        })
    } else {
        XrefEntry::from(FreeObject {
            number,
            generation,
            next_free: offset,
        })
    };
    Ok((remainder, entry))
}

#[tracable_parser]
fn xref_subsection(input: Span) -> TbParseResult<Vec<XrefEntry>> {
    let (remainder, first) = character::complete::u32(input)?;
    let (remainder, _) = character::complete::space1(remainder)?;
    let (remainder, count) = character::complete::u32(remainder)?;
    let (mut remainder, _) = character::complete::multispace0(remainder)?;

    // the count is not trusted for preallocation
    let mut entries = Vec::new();
    for i in 0..count {
        let number = first as usize + i as usize;
        let (r, entry) = xref_entry(number, remainder)?;
        entries.push(entry);
        remainder = r;
    }

    Ok((remainder, entries))
}

#[tracable_parser]
pub fn xref_table(input: Span) -> TbParseResult<Xref> {
    let (remainder, _) = character::complete::multispace0(input)?;
    let (remainder, _) = bytes::complete::tag(XREF)(remainder)?;
    let (remainder, _) = character::complete::multispace0(remainder)?;
    let (remainder, subsections) = multi::many1(xref_subsection)(remainder)?;

    Ok((remainder, Xref::from(subsections.into_iter().flatten().collect::<Vec<_>>())))
}
