use super::{Dictionary, Object, Reference};

pub const TRAILER: &[u8] = b"trailer";
pub const K_SIZE: &[u8] = b"Size";
pub const K_ROOT: &[u8] = b"Root";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrailerError {
    InvalidSize,
    MissingSize,
    InvalidRoot,
    MissingRoot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trailer {
    /// Number of entries in the xref table, including object 0.
    pub size: usize,

    /// Reference to the document catalog.
    pub root: Reference,
}

impl TryFrom<&Dictionary> for Trailer {
    type Error = TrailerError;

    fn try_from(dict: &Dictionary) -> Result<Self, Self::Error> {
        Ok(Trailer {
            size: dict
                .get(K_SIZE)
                .ok_or(TrailerError::MissingSize)?
                .integer()
                .ok_or(TrailerError::InvalidSize)?
                .try_into()
                .map_err(|_| TrailerError::InvalidSize)?,

            root: dict
                .get(K_ROOT)
                .ok_or(TrailerError::MissingRoot)?
                .reference()
                .copied()
                .ok_or(TrailerError::InvalidRoot)?,
        })
    }
}
