use crate::pdf::{Dictionary, Name, Object};

use super::{dict_types::FONT, require_type, TypeError, K_BASE_FONT, K_ENCODING, K_SUBTYPE, K_TYPE, TYPE1};

#[derive(Debug, Clone, PartialEq)]
pub enum FontError {
    Type(TypeError),
    MissingBaseFont,
}

/// One of the standard 14 Type1 fonts, referenced by name only. Viewers use
/// their built-in metrics for it, so no widths or font program are written.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub base_font: Name,
    pub encoding: Option<Name>,
}

impl From<&Font> for Dictionary {
    fn from(font: &Font) -> Self {
        let mut dict = Dictionary::from([
            (Name::from(K_TYPE), Object::from(Name::from(FONT))),
            (Name::from(K_SUBTYPE), Object::from(Name::from(TYPE1))),
            (Name::from(K_BASE_FONT), Object::from(font.base_font.clone())),
        ]);
        if let Some(encoding) = &font.encoding {
            dict.insert(K_ENCODING, encoding.clone());
        }
        dict
    }
}

impl TryFrom<&Dictionary> for Font {
    type Error = FontError;

    fn try_from(dict: &Dictionary) -> Result<Self, Self::Error> {
        require_type(dict, FONT).map_err(FontError::Type)?;
        Ok(Self {
            base_font: dict
                .get(K_BASE_FONT)
                .and_then(Object::name)
                .cloned()
                .ok_or(FontError::MissingBaseFont)?,
            encoding: dict.get(K_ENCODING).and_then(Object::name).cloned(),
        })
    }
}
