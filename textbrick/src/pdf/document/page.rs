use crate::pdf::{Dictionary, Name, Object, Reference};

use super::{
    dict_types::PAGE, require_type, TypeError, K_CONTENTS, K_FONT, K_MEDIA_BOX, K_PARENT, K_RESOURCES, K_TYPE,
};

#[derive(Debug, Clone, PartialEq)]
pub enum PageError {
    Type(TypeError),
    MissingParent,
    InvalidMediaBox,
    MissingContents,
    InvalidResources,
}

/// Leaf of the page tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub parent: Reference,
    /// `[llx lly urx ury]` in user space units.
    pub media_box: [i32; 4],
    /// Font resources as `(local name, font record)`.
    pub fonts: Vec<(Name, Reference)>,
    pub contents: Reference,
}

impl From<&Page> for Dictionary {
    fn from(page: &Page) -> Self {
        let fonts: Dictionary = page
            .fonts
            .iter()
            .map(|(name, font)| (name.clone(), Object::from(*font)))
            .collect();

        Dictionary::from([
            (Name::from(K_TYPE), Object::from(Name::from(PAGE))),
            (Name::from(K_PARENT), Object::from(page.parent)),
            (
                Name::from(K_MEDIA_BOX),
                Object::from(page.media_box.iter().copied().map(Object::from).collect::<Vec<_>>()),
            ),
            (
                Name::from(K_RESOURCES),
                Object::from(Dictionary::from([(Name::from(K_FONT), Object::from(fonts))])),
            ),
            (Name::from(K_CONTENTS), Object::from(page.contents)),
        ])
    }
}

impl TryFrom<&Dictionary> for Page {
    type Error = PageError;

    fn try_from(dict: &Dictionary) -> Result<Self, Self::Error> {
        require_type(dict, PAGE).map_err(PageError::Type)?;

        let media_box = dict
            .get(K_MEDIA_BOX)
            .and_then(Object::array)
            .filter(|a| a.len() == 4)
            .ok_or(PageError::InvalidMediaBox)?;
        let mut rect = [0; 4];
        for (dst, src) in rect.iter_mut().zip(media_box.iter()) {
            *dst = src.integer().ok_or(PageError::InvalidMediaBox)?;
        }

        let fonts = dict
            .get(K_RESOURCES)
            .and_then(Object::dictionary)
            .and_then(|res| res.get(K_FONT))
            .and_then(Object::dictionary)
            .ok_or(PageError::InvalidResources)?
            .iter()
            .map(|(name, font)| {
                font.reference()
                    .map(|r| (name.clone(), *r))
                    .ok_or(PageError::InvalidResources)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            parent: dict
                .get(K_PARENT)
                .and_then(Object::reference)
                .copied()
                .ok_or(PageError::MissingParent)?,
            media_box: rect,
            fonts,
            contents: dict
                .get(K_CONTENTS)
                .and_then(Object::reference)
                .copied()
                .ok_or(PageError::MissingContents)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Page {
        Page {
            parent: Reference::new(2),
            media_box: [0, 0, 595, 842],
            fonts: vec![(Name::from("F1"), Reference::new(5))],
            contents: Reference::new(3),
        }
    }

    #[test]
    fn entry_order() {
        let dict = Dictionary::from(&page());
        let keys: Vec<String> = dict.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["Type", "Parent", "MediaBox", "Resources", "Contents"]);
    }

    #[test]
    fn round_trip() {
        let dict = Dictionary::from(&page());
        assert_eq!(Page::try_from(&dict), Ok(page()));
    }
}
