/// The offset index of a written document.
///
/// One entry per object number, starting at the free entry for object 0. Used
/// entries carry the byte offset, counted from the first byte of the file, at
/// which the object's `N G obj` line starts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Xref(Vec<XrefEntry>);

impl Xref {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, entry: impl Into<XrefEntry>) {
        self.0.push(entry.into())
    }

    pub fn entries(&self) -> impl Iterator<Item = &XrefEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn used_objects(&self) -> impl Iterator<Item = &UsedObject> {
        self.0
            .iter()
            .filter_map(|entry| if let XrefEntry::Used(u) = entry { Some(u) } else { None })
    }

    pub fn free_objects(&self) -> impl Iterator<Item = &FreeObject> {
        self.0
            .iter()
            .filter_map(|entry| if let XrefEntry::Free(u) = entry { Some(u) } else { None })
    }

    /// Byte offset of the given object, if it is in use.
    pub fn offset_of(&self, number: usize) -> Option<usize> {
        self.used_objects()
            .find(|used| used.number == number)
            .map(|used| used.byte_offset)
    }

    pub fn highest_index(&self) -> usize {
        self.0.iter().map(XrefEntry::number).max().unwrap_or(0)
    }
}

impl From<Vec<XrefEntry>> for Xref {
    fn from(v: Vec<XrefEntry>) -> Self {
        Xref(v)
    }
}

/// Generation written for the free head of the list (object 0).
pub const FREE_HEAD_GENERATION: usize = 65535;

#[derive(Debug, Clone, PartialEq)]
pub struct FreeObject {
    /// Number of this object
    pub number: usize,
    /// Next generation number that should be used
    pub generation: usize,
    /// Next free object number
    pub next_free: usize,
}

impl FreeObject {
    /// Entry for object 0, the head of the free list.
    pub fn head() -> Self {
        Self {
            number: 0,
            generation: FREE_HEAD_GENERATION,
            next_free: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UsedObject {
    /// Number of this object
    pub number: usize,
    /// The position of this object in the pdf file in bytes, starting from the
    /// beginning of the PDF.
    pub byte_offset: usize,
    pub generation: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum XrefEntry {
    Free(FreeObject),
    Used(UsedObject),
}

impl XrefEntry {
    pub fn number(&self) -> usize {
        match self {
            XrefEntry::Free(FreeObject { number, .. }) => *number,
            XrefEntry::Used(UsedObject { number, .. }) => *number,
        }
    }
}

impl From<UsedObject> for XrefEntry {
    fn from(v: UsedObject) -> Self {
        Self::Used(v)
    }
}

impl From<FreeObject> for XrefEntry {
    fn from(v: FreeObject) -> Self {
        Self::Free(v)
    }
}
