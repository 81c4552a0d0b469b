use std::fmt::Display;

use super::Object;

/// An object together with the number it was declared under (`N G obj`).
#[derive(Debug, Clone, PartialEq)]
pub struct IndirectObject {
    pub index: u32,
    pub generation: u32,
    pub object: Box<Object>,
}

impl Display for IndirectObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Indirect {} {} {{ {} }}", self.index, self.generation, self.object)
    }
}

/// Points to the record at the 1-based position `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Reference {
    pub index: u32,
    pub generation: u32,
}

impl Reference {
    /// Reference with generation 0, the only generation this crate writes.
    pub fn new(index: u32) -> Self {
        Self { index, generation: 0 }
    }
}

impl Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} R", self.index, self.generation)
    }
}
