//! Straightforward encoding: no object streams, no xref streams, classic
//! xref table.

pub use section::{to_bytes, write_document, BINARY_MARKER, EOF_MARKER};

pub(crate) mod object;
pub(crate) mod section;

pub struct SimpleEncoder;
