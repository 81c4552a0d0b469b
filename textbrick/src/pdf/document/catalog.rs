use crate::pdf::{Dictionary, Name, Object, Reference};

use super::{dict_types::CATALOG, require_type, TypeError, K_PAGES, K_TYPE};

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    Type(TypeError),
    MissingPages,
}

/// Document root. Only the page tree root is written.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub pages: Reference,
}

impl From<&Catalog> for Dictionary {
    fn from(catalog: &Catalog) -> Self {
        Dictionary::from([
            (Name::from(K_TYPE), Object::from(Name::from(CATALOG))),
            (Name::from(K_PAGES), Object::from(catalog.pages)),
        ])
    }
}

impl TryFrom<&Dictionary> for Catalog {
    type Error = CatalogError;

    fn try_from(dict: &Dictionary) -> Result<Self, Self::Error> {
        require_type(dict, CATALOG).map_err(CatalogError::Type)?;
        Ok(Self {
            pages: dict
                .get(K_PAGES)
                .and_then(Object::reference)
                .copied()
                .ok_or(CatalogError::MissingPages)?,
        })
    }
}
