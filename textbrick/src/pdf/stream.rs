use super::{Bytes, Dictionary};

#[derive(Clone, Debug, PartialEq)]
pub struct Stream {
    pub dictionary: Dictionary,
    pub data: Bytes,
}

impl Stream {
    pub fn new(dictionary: Dictionary, data: impl Into<Bytes>) -> Self {
        Self {
            dictionary,
            data: data.into(),
        }
    }
}
