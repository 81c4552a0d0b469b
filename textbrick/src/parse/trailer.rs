use nom::{bytes, character};
use nom_tracable::tracable_parser;

use super::{error::TbParseError, object::dictionary, Span, TbParseResult};
use crate::pdf::{trailer::TRAILER, Trailer};

#[tracable_parser]
pub fn trailer(input: Span) -> TbParseResult<Trailer> {
    let (remainder, _) = character::complete::multispace0(input)?;
    let (remainder, _) = bytes::complete::tag(TRAILER)(remainder)?;
    let (remainder, _) = character::complete::multispace0(remainder)?;
    let (remainder, dict) = dictionary(remainder)?;
    let (remainder, _) = character::complete::multispace0(remainder)?;

    let trailer =
        Trailer::try_from(&dict).map_err(|err| nom::Err::Failure(TbParseError::new(input, err.into())))?;

    Ok((remainder, trailer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        parse::{error::TbParseErrorKind, span},
        pdf::{trailer::TrailerError, Reference},
    };

    #[test]
    fn test_trailer() {
        let (remainder, t) = trailer(span(b"trailer\n<< /Size 8 /Root 1 0 R >>\nstartxref")).unwrap();
        assert_eq!(
            t,
            Trailer {
                size: 8,
                root: Reference::new(1)
            }
        );
        assert_eq!(*remainder.fragment(), b"startxref");
    }

    #[test]
    fn test_trailer_without_root() {
        let err = trailer(span(b"trailer\n<< /Size 8 >>\n")).unwrap_err();
        assert!(matches!(
            err,
            nom::Err::Failure(TbParseError {
                kind: TbParseErrorKind::InvalidTrailer(TrailerError::MissingRoot),
                ..
            })
        ));
    }
}
