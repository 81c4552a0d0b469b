use std::{fmt::Display, ops::Deref};

pub use self::{
    array::Array,
    dictionary::Dictionary,
    indirect::{IndirectObject, Reference},
    name::Name,
    stream::Stream,
    string::TbString,
    trailer::Trailer,
    xref::{FreeObject, UsedObject, Xref, XrefEntry},
};

mod array;
mod dictionary;
pub mod document;
mod indirect;
mod name;
mod stream;
mod string;
pub mod trailer;
pub mod xref;

/// Version written into the header line.
pub const PDF_VERSION: (u8, u8) = (1, 4);

#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    String(TbString),
    Real(f32),
    Integer(i32),
    Bool(bool),
    Name(Name),
    Array(Array),
    Dictionary(Dictionary),
    Stream(Stream),
    Null,
    Reference(Reference),
}

impl Object {
    pub fn integer(&self) -> Option<i32> {
        if let Object::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    pub fn name(&self) -> Option<&Name> {
        if let Object::Name(n) = self {
            Some(n)
        } else {
            None
        }
    }

    pub fn array(&self) -> Option<&Array> {
        if let Object::Array(a) = self {
            Some(a)
        } else {
            None
        }
    }

    pub fn dictionary(&self) -> Option<&Dictionary> {
        match self {
            Object::Dictionary(d) => Some(d),
            Object::Stream(s) => Some(&s.dictionary),
            _ => None,
        }
    }

    pub fn stream(&self) -> Option<&Stream> {
        if let Object::Stream(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn reference(&self) -> Option<&Reference> {
        if let Object::Reference(r) = self {
            Some(r)
        } else {
            None
        }
    }

    /// Visit every reference contained in this object, depth first.
    pub fn for_each_reference<F: FnMut(&Reference)>(&self, f: &mut F) {
        match self {
            Object::Reference(r) => f(r),
            Object::Array(a) => a.iter().for_each(|o| o.for_each_reference(f)),
            Object::Dictionary(d) => d.values().for_each(|o| o.for_each_reference(f)),
            Object::Stream(s) => s.dictionary.values().for_each(|o| o.for_each_reference(f)),
            Object::String(_)
            | Object::Real(_)
            | Object::Integer(_)
            | Object::Bool(_)
            | Object::Name(_)
            | Object::Null => {}
        }
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Object::String(obj) => obj.fmt(f),
            Object::Real(obj) => obj.fmt(f),
            Object::Integer(obj) => obj.fmt(f),
            Object::Bool(obj) => obj.fmt(f),
            Object::Name(obj) => write!(f, "/{}", obj),
            Object::Array(obj) => obj.fmt(f),
            Object::Dictionary(obj) => obj.fmt(f),
            Object::Stream(obj) => write!(f, "Stream {{ {}, {} bytes }}", obj.dictionary, obj.data.len()),
            Object::Null => write!(f, "null"),
            Object::Reference(obj) => obj.fmt(f),
        }
    }
}

impl From<bool> for Object {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Object {
    fn from(v: i32) -> Self {
        Self::Integer(v)
    }
}

impl From<f32> for Object {
    fn from(v: f32) -> Self {
        Self::Real(v)
    }
}

impl From<TbString> for Object {
    fn from(v: TbString) -> Self {
        Self::String(v)
    }
}

impl From<Name> for Object {
    fn from(n: Name) -> Self {
        Self::Name(n)
    }
}

impl From<Vec<Object>> for Object {
    fn from(a: Vec<Object>) -> Self {
        Self::Array(a.into())
    }
}

impl From<Array> for Object {
    fn from(a: Array) -> Self {
        Self::Array(a)
    }
}

impl From<Dictionary> for Object {
    fn from(d: Dictionary) -> Self {
        Self::Dictionary(d)
    }
}

impl From<Stream> for Object {
    fn from(s: Stream) -> Self {
        Self::Stream(s)
    }
}

impl From<Reference> for Object {
    fn from(r: Reference) -> Self {
        Self::Reference(r)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Bytes(Vec<u8>);

impl From<Vec<u8>> for Bytes {
    fn from(v: Vec<u8>) -> Self {
        Bytes(v)
    }
}

impl Deref for Bytes {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Bytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let limited_length = self.len().min(15);
        write!(f, "{}", &String::from_utf8_lossy(&self.0[..limited_length]))
    }
}
