use nom::{branch, bytes, character, combinator, multi, sequence};
use nom_tracable::tracable_parser;

use super::{
    error::{TbParseError, TbParseErrorKind},
    Span, TbParseResult,
};
use crate::pdf::{
    document::K_LENGTH, Array, Dictionary, IndirectObject, Name, Object, Reference, Stream, TbString,
};

const TRUE_OBJECT: &[u8] = b"true";
const FALSE_OBJECT: &[u8] = b"false";
const NULL_OBJECT: &[u8] = b"null";
pub(crate) const START_OBJ: &[u8] = b"obj";
pub(crate) const END_OBJ: &[u8] = b"endobj";
pub(crate) const START_STREAM: &[u8] = b"stream";
pub(crate) const END_STREAM: &[u8] = b"endstream";

pub(crate) fn is_delimiter(chr: u8) -> bool {
    matches!(
        chr,
        b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
    )
}

pub(crate) fn is_regular(chr: u8) -> bool {
    !is_delimiter(chr) && !chr.is_ascii_whitespace()
}

fn fail<O>(input: Span, kind: TbParseErrorKind) -> TbParseResult<O> {
    Err(nom::Err::Error(TbParseError::new(input, kind)))
}

/// Consume all whitespace. If input doesn't start with a whitespace, peek the
/// next char and require it to be a delimiter.
fn require_termination(input: Span) -> TbParseResult<()> {
    let (remainder, whitespace) = character::complete::multispace0(input)?;
    if whitespace.fragment().is_empty() && !remainder.fragment().is_empty() {
        combinator::peek(bytes::complete::take_while_m_n(1, 1, is_delimiter))(remainder)?;
    }
    Ok((remainder, ()))
}

/// Decode the body of a literal string starting at its opening parenthesis.
///
/// Returns the number of bytes consumed, closing parenthesis included, and
/// the unescaped content. Unbalanced input gives `None`.
pub fn literal_string(buf: &[u8]) -> Option<(usize, Vec<u8>)> {
    if buf.first() != Some(&b'(') {
        return None;
    }
    let mut content = Vec::new();
    let mut depth = 1usize;
    let mut i = 1;
    while i < buf.len() {
        match buf[i] {
            b'\\' => {
                let escaped = *buf.get(i + 1)?;
                i += 2;
                match escaped {
                    b'n' => content.push(b'\n'),
                    b'r' => content.push(b'\r'),
                    b't' => content.push(b'\t'),
                    b'b' => content.push(0x08),
                    b'f' => content.push(0x0c),
                    b'0'..=b'7' => {
                        let mut value = u32::from(escaped - b'0');
                        let mut digits = 1;
                        while digits < 3 {
                            match buf.get(i) {
                                Some(d @ b'0'..=b'7') => {
                                    value = value * 8 + u32::from(d - b'0');
                                    i += 1;
                                    digits += 1;
                                }
                                _ => break,
                            }
                        }
                        content.push((value & 0xff) as u8);
                    }
                    // line continuation
                    b'\n' => {}
                    b'\r' => {
                        if buf.get(i) == Some(&b'\n') {
                            i += 1;
                        }
                    }
                    other => content.push(other),
                }
                continue;
            }
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some((i + 1, content));
                }
            }
            _ => {}
        }
        content.push(buf[i]);
        i += 1;
    }
    None
}

pub(crate) fn string_object(input: Span) -> TbParseResult<Object> {
    let (consumed, content) = match literal_string(input.fragment()) {
        Some(found) => found,
        None => return fail(input, TbParseErrorKind::InvalidString),
    };
    let (remainder, _) = bytes::complete::take(consumed)(input)?;

    Ok((remainder, Object::String(TbString::from(content))))
}

pub(crate) fn bool_object(input: Span) -> TbParseResult<Object> {
    let (remainder, obj) = branch::alt((
        combinator::value(Object::Bool(true), bytes::complete::tag(TRUE_OBJECT)),
        combinator::value(Object::Bool(false), bytes::complete::tag(FALSE_OBJECT)),
    ))(input)?;

    let (remainder, _) = require_termination(remainder)?;

    Ok((remainder, obj))
}

pub(crate) fn number_object(input: Span) -> TbParseResult<Object> {
    let (remainder, digits) = combinator::recognize(sequence::pair(
        combinator::opt(character::complete::one_of("+-")),
        bytes::complete::take_while1(|c: u8| c.is_ascii_digit() || c == b'.'),
    ))(input)?;
    let (remainder, _) = require_termination(remainder)?;

    let text = match std::str::from_utf8(digits.fragment()) {
        Ok(text) => text,
        Err(_) => return fail(input, TbParseErrorKind::InvalidNumber),
    };
    let obj = if text.contains('.') {
        text.parse::<f32>().ok().map(Object::Real)
    } else {
        text.parse::<i32>().ok().map(Object::Integer)
    };

    match obj {
        Some(obj) => Ok((remainder, obj)),
        None => fail(input, TbParseErrorKind::InvalidNumber),
    }
}

pub(crate) fn null_object(input: Span) -> TbParseResult<Object> {
    let (remainder, _) = bytes::complete::tag(NULL_OBJECT)(input)?;
    let (remainder, _) = require_termination(remainder)?;

    Ok((remainder, Object::Null))
}

/// Replace every `#XX` with the byte it encodes.
fn decode_name(raw: &[u8]) -> Option<Vec<u8>> {
    let mut name = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        if raw[i] == b'#' {
            let encoded = raw.get(i + 1..i + 3)?;
            name.extend(hex::decode(encoded).ok()?);
            i += 3;
        } else {
            name.push(raw[i]);
            i += 1;
        }
    }
    Some(name)
}

pub(crate) fn name(input: Span) -> TbParseResult<Name> {
    let (remainder, _) = character::complete::char('/')(input)?;
    let (remainder, raw) = bytes::complete::take_while(is_regular)(remainder)?;
    let (remainder, _) = require_termination(remainder)?;

    match decode_name(raw.fragment()) {
        Some(name) => Ok((remainder, Name::from(name))),
        None => fail(input, TbParseErrorKind::InvalidName),
    }
}

pub(crate) fn name_object(input: Span) -> TbParseResult<Object> {
    combinator::map(name, Object::from)(input)
}

pub(crate) fn dictionary_entry(input: Span) -> TbParseResult<(Name, Object)> {
    let (remainder, name) = name(input)?;
    let (remainder, obj) = object(remainder)?;
    let (remainder, _) = character::complete::multispace0(remainder)?;

    Ok((remainder, (name, obj)))
}

pub(crate) fn dictionary(input: Span) -> TbParseResult<Dictionary> {
    sequence::delimited(
        sequence::terminated(bytes::complete::tag(&b"<<"[..]), character::complete::multispace0),
        multi::fold_many0(dictionary_entry, Dictionary::new, |mut acc, (name, obj)| {
            acc.insert(name, obj);
            acc
        }),
        bytes::complete::tag(&b">>"[..]),
    )(input)
}

pub(crate) fn dictionary_object(input: Span) -> TbParseResult<Object> {
    combinator::map(dictionary, Object::Dictionary)(input)
}

pub(crate) fn array_object(input: Span) -> TbParseResult<Object> {
    let (remainder, array) = sequence::delimited(
        sequence::terminated(character::complete::char('['), character::complete::multispace0),
        multi::fold_many0(
            sequence::terminated(object, character::complete::multispace0),
            Array::new,
            |mut acc, obj| {
                acc.push(obj);
                acc
            },
        ),
        character::complete::char(']'),
    )(input)?;

    Ok((remainder, Object::Array(array)))
}

pub(crate) fn reference_object(input: Span) -> TbParseResult<Object> {
    let (remainder, index) = character::complete::u32(input)?;
    let (remainder, _) = character::complete::multispace1(remainder)?;
    let (remainder, generation) = character::complete::u32(remainder)?;
    let (remainder, _) = character::complete::multispace1(remainder)?;
    let (remainder, _) = character::complete::char('R')(remainder)?;
    let (remainder, _) = require_termination(remainder)?;

    Ok((remainder, Object::Reference(Reference { index, generation })))
}

pub fn object(input: Span) -> TbParseResult<Object> {
    // The order is important!
    branch::alt((
        dictionary_object,
        array_object,
        string_object,
        // `0 0 R` is a reference while `0 0` are two integers.
        reference_object,
        number_object,
        bool_object,
        null_object,
        name_object,
    ))(input)
}

/// Data of a stream whose dictionary was just parsed. `input` starts right
/// after the `stream` keyword's line ending.
fn stream_data(dictionary: Dictionary, input: Span) -> TbParseResult<Stream> {
    let invalid_length = |_: nom::Err<TbParseError<Span>>| {
        nom::Err::Failure(TbParseError::new(input, TbParseErrorKind::InvalidStreamLength))
    };

    let length = match dictionary.get(K_LENGTH).and_then(Object::integer).map(usize::try_from) {
        Some(Ok(length)) => length,
        _ => {
            return Err(nom::Err::Failure(TbParseError::new(
                input,
                TbParseErrorKind::MissingStreamLength,
            )))
        }
    };
    let (remainder, data) = bytes::complete::take(length)(input).map_err(invalid_length)?;
    // exactly one end of line, then the keyword
    let (remainder, _) = end_of_line(remainder).map_err(invalid_length)?;
    let (remainder, _) = bytes::complete::tag(END_STREAM)(remainder).map_err(invalid_length)?;

    Ok((remainder, Stream::new(dictionary, data.fragment().to_vec())))
}

fn end_of_line(input: Span) -> TbParseResult<Span> {
    branch::alt((
        bytes::complete::tag(&b"\r\n"[..]),
        bytes::complete::tag(&b"\n"[..]),
        bytes::complete::tag(&b"\r"[..]),
    ))(input)
}

fn stream_start(input: Span) -> TbParseResult<()> {
    let (remainder, _) = character::complete::multispace0(input)?;
    let (remainder, _) = bytes::complete::tag(START_STREAM)(remainder)?;
    let (remainder, _) = end_of_line(remainder)?;

    Ok((remainder, ()))
}

#[tracable_parser]
pub fn indirect_object(input: Span) -> TbParseResult<IndirectObject> {
    let (remainder, index) = character::complete::u32(input)?;
    let (remainder, _) = character::complete::multispace1(remainder)?;
    let (remainder, generation) = character::complete::u32(remainder)?;
    let (remainder, _) = character::complete::multispace1(remainder)?;
    let (remainder, _) = bytes::complete::tag(START_OBJ)(remainder)?;
    let (remainder, _) = character::complete::multispace0(remainder)?;
    let (remainder, obj) = object(remainder)?;

    let (remainder, obj) = match obj {
        Object::Dictionary(dictionary) => match stream_start(remainder) {
            Ok((data, _)) => {
                let (remainder, stream) = stream_data(dictionary, data)?;
                (remainder, Object::Stream(stream))
            }
            Err(_) => (remainder, Object::Dictionary(dictionary)),
        },
        obj => (remainder, obj),
    };

    let (remainder, _) = character::complete::multispace0(remainder)?;
    let (remainder, _) = bytes::complete::tag(END_OBJ)(remainder)?;
    let (remainder, _) = character::complete::multispace0(remainder)?;

    Ok((
        remainder,
        IndirectObject {
            index,
            generation,
            object: Box::new(obj),
        },
    ))
}
