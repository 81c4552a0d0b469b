use nom::error::{ErrorKind, ParseError};

use crate::pdf::trailer::TrailerError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TbParseErrorKind {
    InvalidTrailer(TrailerError),
    StartxrefInvalid,
    BackwardSearchNotFound,
    InvalidNumber,
    InvalidName,
    InvalidString,
    MissingStreamLength,
    /// `endstream` does not follow `/Length` bytes of data.
    InvalidStreamLength,
    Incomplete,
    Nom(ErrorKind),
}

impl From<TrailerError> for TbParseErrorKind {
    fn from(err: TrailerError) -> Self {
        TbParseErrorKind::InvalidTrailer(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TbParseError<I> {
    pub input: I,
    pub kind: TbParseErrorKind,
    pub from: Option<Box<Self>>,
}

impl<I> TbParseError<I> {
    pub fn new(input: I, kind: TbParseErrorKind) -> Self {
        Self {
            input,
            kind,
            from: None,
        }
    }
}

impl<I> ParseError<I> for TbParseError<I> {
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        Self {
            input,
            kind: TbParseErrorKind::Nom(kind),
            from: None,
        }
    }

    fn append(input: I, kind: ErrorKind, other: Self) -> Self {
        Self {
            input,
            kind: TbParseErrorKind::Nom(kind),
            from: Some(other.into()),
        }
    }
}
