use crate::pdf::{Dictionary, Name, Object, Reference};

use super::{dict_types::PAGES, require_type, TypeError, K_COUNT, K_KIDS, K_TYPE};

#[derive(Debug, Clone, PartialEq)]
pub enum PagesError {
    Type(TypeError),
    MissingKids,
    InvalidKids,
    MissingCount,
    InvalidCount,
}

/// Root of the page tree. All pages are direct children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageTree {
    /// Page records in layout order.
    pub kids: Vec<Reference>,
}

impl PageTree {
    pub fn count(&self) -> usize {
        self.kids.len()
    }
}

impl TryFrom<&PageTree> for Dictionary {
    type Error = PagesError;

    fn try_from(tree: &PageTree) -> Result<Self, Self::Error> {
        let count = i32::try_from(tree.count()).map_err(|_| PagesError::InvalidCount)?;
        Ok(Dictionary::from([
            (Name::from(K_TYPE), Object::from(Name::from(PAGES))),
            (
                Name::from(K_KIDS),
                Object::from(tree.kids.iter().copied().map(Object::from).collect::<Vec<_>>()),
            ),
            (Name::from(K_COUNT), Object::from(count)),
        ]))
    }
}

impl TryFrom<&Dictionary> for PageTree {
    type Error = PagesError;

    fn try_from(dict: &Dictionary) -> Result<Self, Self::Error> {
        require_type(dict, PAGES).map_err(PagesError::Type)?;

        let kids = dict
            .get(K_KIDS)
            .ok_or(PagesError::MissingKids)?
            .array()
            .ok_or(PagesError::InvalidKids)?
            .iter()
            .map(|kid| kid.reference().copied().ok_or(PagesError::InvalidKids))
            .collect::<Result<Vec<_>, _>>()?;

        let count: usize = dict
            .get(K_COUNT)
            .ok_or(PagesError::MissingCount)?
            .integer()
            .ok_or(PagesError::InvalidCount)?
            .try_into()
            .map_err(|_| PagesError::InvalidCount)?;

        if count != kids.len() {
            log::error!(
                "Invalid child count. Got {} children but count is {}",
                kids.len(),
                count
            );
            return Err(PagesError::InvalidCount);
        }

        Ok(Self { kids })
    }
}
