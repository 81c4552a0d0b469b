//! Typed views of the records that make up a document.
//!
//! Each record converts into the [`Dictionary`] the serializer writes, and
//! back from a parsed dictionary for inspection.

pub use catalog::{Catalog, CatalogError};
pub use font::{Font, FontError};
pub use page::{Page, PageError};
pub use pages::{PageTree, PagesError};

use crate::pdf::{Dictionary, Object};

pub mod catalog;
pub mod font;
pub mod page;
pub mod pages;

/// Dictionary type names
pub(crate) mod dict_types {
    pub const CATALOG: &[u8] = b"Catalog";
    pub const PAGES: &[u8] = b"Pages";
    pub const PAGE: &[u8] = b"Page";
    pub const FONT: &[u8] = b"Font";
}

pub(crate) const K_TYPE: &[u8] = b"Type";
pub(crate) const K_SUBTYPE: &[u8] = b"Subtype";
pub(crate) const K_PAGES: &[u8] = b"Pages";
pub(crate) const K_PARENT: &[u8] = b"Parent";
pub(crate) const K_KIDS: &[u8] = b"Kids";
pub(crate) const K_COUNT: &[u8] = b"Count";
pub(crate) const K_MEDIA_BOX: &[u8] = b"MediaBox";
pub(crate) const K_RESOURCES: &[u8] = b"Resources";
pub(crate) const K_FONT: &[u8] = b"Font";
pub(crate) const K_CONTENTS: &[u8] = b"Contents";
pub(crate) const K_BASE_FONT: &[u8] = b"BaseFont";
pub(crate) const K_ENCODING: &[u8] = b"Encoding";
pub(crate) const K_LENGTH: &[u8] = b"Length";
pub(crate) const K_FILTER: &[u8] = b"Filter";

pub(crate) const FLATE_DECODE: &[u8] = b"FlateDecode";
pub(crate) const TYPE1: &[u8] = b"Type1";
pub(crate) const WIN_ANSI_ENCODING: &[u8] = b"WinAnsiEncoding";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    Missing,
    Wrong(String),
}

fn require_type(dict: &Dictionary, t: &[u8]) -> Result<(), TypeError> {
    if let Some(k) = dict.get(K_TYPE).and_then(Object::name) {
        if &k[..] != t {
            log::warn!("Wrong dictionary type `{}`", k);
            Err(TypeError::Wrong(k.to_string()))
        } else {
            Ok(())
        }
    } else {
        log::warn!("Missing dictionary type");
        Err(TypeError::Missing)
    }
}
