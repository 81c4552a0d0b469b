use crate::{parse::error::TbParseError, parse::error::TbParseErrorKind, pdf::Reference};

pub type Result<T> = std::result::Result<T, TbError>;

#[derive(Debug, thiserror::Error)]
pub enum TbError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record refers to a position that is not part of the finished graph.
    #[error("object {from} refers to {reference}, but the document has only {len} objects")]
    UnresolvedReference { from: u32, reference: Reference, len: usize },

    /// A reserved position never received its record.
    #[error("reserved object {0} was never filled")]
    UnfilledReservation(u32),

    #[error("object {0} is not an open reservation")]
    NotReserved(u32),

    #[error("font record landed at object {actual}, pages refer to {expected}")]
    FontPosition { expected: u32, actual: u32 },

    #[error("{0} does not fit into a PDF integer")]
    IntegerOverflow(usize),

    #[error("parse error: {0:?}")]
    Parse(TbParseErrorKind),

    #[error("inspection failed: {0}")]
    Inspection(String),
}

impl<I> From<nom::Err<TbParseError<I>>> for TbError {
    fn from(err: nom::Err<TbParseError<I>>) -> Self {
        match err {
            nom::Err::Incomplete(_) => TbError::Parse(TbParseErrorKind::Incomplete),
            nom::Err::Error(e) | nom::Err::Failure(e) => TbError::Parse(e.kind),
        }
    }
}
