use std::ops::Deref;

/// Literal string. Holds the raw, unescaped bytes.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TbString(Vec<u8>);

impl From<Vec<u8>> for TbString {
    fn from(v: Vec<u8>) -> Self {
        TbString(v)
    }
}

impl From<&[u8]> for TbString {
    fn from(v: &[u8]) -> Self {
        TbString(v.to_vec())
    }
}

impl From<&str> for TbString {
    fn from(v: &str) -> Self {
        TbString(v.as_bytes().to_vec())
    }
}

impl Deref for TbString {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Debug for TbString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("TbString")
            .field(&String::from_utf8_lossy(&self.0[..]))
            .finish()
    }
}

impl std::fmt::Display for TbString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", &String::from_utf8_lossy(&self.0[..]))
    }
}
