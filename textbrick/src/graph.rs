//! The object graph of a document.
//!
//! Records are appended to an ordered list; a record's number is its 1-based
//! position in that list. Forward references are handled by reserving a
//! position first and filling it once everything it points to is known.

use crate::{
    config::DocumentConfig,
    error::{Result, TbError},
    pdf::{
        document::{Catalog, Font, Page, PageTree, FLATE_DECODE, K_FILTER, K_LENGTH, WIN_ANSI_ENCODING},
        Dictionary, Name, Object, Reference, Stream,
    },
};

/// A finished object graph. All reservations are filled and every
/// reference points to one of its objects.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectGraph {
    objects: Vec<Object>,
    root: Reference,
}

impl ObjectGraph {
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Document catalog.
    pub fn root(&self) -> Reference {
        self.root
    }

    pub fn get(&self, reference: Reference) -> Option<&Object> {
        let index = usize::try_from(reference.index).ok()?.checked_sub(1)?;
        self.objects.get(index)
    }

    /// Objects with their references, in position order.
    pub fn iter(&self) -> impl Iterator<Item = (Reference, &Object)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(i, object)| (Reference::new(i as u32 + 1), object))
    }
}

#[derive(Debug, Default)]
pub struct ObjectGraphBuilder {
    slots: Vec<Option<Object>>,
}

impl ObjectGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reference the next reserved or pushed object will get.
    pub fn next_reference(&self) -> Result<Reference> {
        let next = self.slots.len() + 1;
        u32::try_from(next)
            .map(Reference::new)
            .map_err(|_| TbError::IntegerOverflow(next))
    }

    /// Claim the next position without a body.
    pub fn reserve(&mut self) -> Result<Reference> {
        let reference = self.next_reference()?;
        log::trace!("reserve object {}", reference.index);
        self.slots.push(None);
        Ok(reference)
    }

    pub fn push(&mut self, object: impl Into<Object>) -> Result<Reference> {
        let reference = self.next_reference()?;
        log::trace!("allocate object {}", reference.index);
        self.slots.push(Some(object.into()));
        Ok(reference)
    }

    /// Give a reserved position its body. Each reservation is filled once.
    pub fn fill(&mut self, reference: Reference, object: impl Into<Object>) -> Result<()> {
        let slot = usize::try_from(reference.index)
            .ok()
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| self.slots.get_mut(i))
            .filter(|slot| slot.is_none())
            .ok_or(TbError::NotReserved(reference.index))?;
        *slot = Some(object.into());
        Ok(())
    }

    /// Check that every reservation is filled and every reference resolves.
    /// The root is the object at position 1.
    pub fn finish(self) -> Result<ObjectGraph> {
        let len = self.slots.len();
        let mut objects = Vec::with_capacity(len);
        for (i, slot) in self.slots.into_iter().enumerate() {
            let index = i as u32 + 1;
            let object = slot.ok_or(TbError::UnfilledReservation(index))?;
            objects.push(object);
        }

        for (i, object) in objects.iter().enumerate() {
            let mut unresolved = None;
            object.for_each_reference(&mut |r| {
                let in_range = r.index >= 1 && (r.index as usize) <= len && r.generation == 0;
                if !in_range && unresolved.is_none() {
                    unresolved = Some(*r);
                }
            });
            if let Some(reference) = unresolved {
                return Err(TbError::UnresolvedReference {
                    from: i as u32 + 1,
                    reference,
                    len,
                });
            }
        }

        if objects.is_empty() {
            return Err(TbError::UnfilledReservation(1));
        }

        Ok(ObjectGraph {
            objects,
            root: Reference::new(1),
        })
    }
}

/// Position of the font record for a document with `page_count` pages.
///
/// Catalog and page tree take positions 1 and 2, every page takes two more
/// (content stream and page), the font comes right after.
pub fn font_position(page_count: usize) -> Result<u32> {
    page_count
        .checked_mul(2)
        .and_then(|n| n.checked_add(3))
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(TbError::IntegerOverflow(page_count))
}

/// Assemble catalog, page tree, per page content stream and page record, and
/// the font record. `contents` holds the compressed content stream of every
/// page in layout order.
pub fn build_document(contents: Vec<Vec<u8>>, config: &DocumentConfig) -> Result<ObjectGraph> {
    let page_count = contents.len();
    log::debug!("build object graph for {} pages", page_count);

    let mut builder = ObjectGraphBuilder::new();
    let catalog = builder.reserve()?;
    let pages_root = builder.reserve()?;
    builder.fill(catalog, Dictionary::from(&Catalog { pages: pages_root }))?;

    let font = Reference::new(font_position(page_count)?);
    let font_resource = Name::from(config.font_resource.as_str());
    let mut tree = PageTree::default();

    for data in contents {
        let length = i32::try_from(data.len()).map_err(|_| TbError::IntegerOverflow(data.len()))?;
        let stream = builder.push(Stream::new(
            Dictionary::from([
                (Name::from(K_LENGTH), Object::from(length)),
                (Name::from(K_FILTER), Object::from(Name::from(FLATE_DECODE))),
            ]),
            data,
        ))?;
        let page = builder.push(Dictionary::from(&Page {
            parent: pages_root,
            media_box: config.media_box(),
            fonts: vec![(font_resource.clone(), font)],
            contents: stream,
        }))?;
        tree.kids.push(page);
    }

    let allocated_font = builder.push(Dictionary::from(&Font {
        base_font: Name::from(config.base_font.as_str()),
        encoding: Some(Name::from(WIN_ANSI_ENCODING)),
    }))?;
    if allocated_font != font {
        return Err(TbError::FontPosition {
            expected: font.index,
            actual: allocated_font.index,
        });
    }

    let tree_dict = Dictionary::try_from(&tree).map_err(|_| TbError::IntegerOverflow(tree.count()))?;
    builder.fill(pages_root, tree_dict)?;

    builder.finish()
}
