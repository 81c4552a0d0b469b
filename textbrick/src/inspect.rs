//! Read back a written document and check its structure.

use std::io::Read;

use flate2::read::ZlibDecoder;
use fnv::FnvHashMap;
use nom::bytes;

use crate::{
    error::{Result, TbError},
    parse::{self, error::TbParseError, Header, Span},
    pdf::{
        document::{Catalog, Page, PageTree, FLATE_DECODE, K_FILTER},
        Dictionary, IndirectObject, Object, Reference, Trailer, Xref,
    },
};

#[derive(Debug)]
pub struct Inspection {
    pub header: Header,
    pub xref: Xref,
    pub trailer: Trailer,
    /// Offset of the xref table as announced by `startxref`.
    pub start_xref: usize,
    objects: FnvHashMap<u32, IndirectObject>,
}

fn inspection_error(msg: impl Into<String>) -> TbError {
    let msg = msg.into();
    log::error!("{}", msg);
    TbError::Inspection(msg)
}

fn skip(input: Span, count: usize) -> Result<Span> {
    let (at, _) = bytes::complete::take::<_, _, TbParseError<Span>>(count)(input)?;
    Ok(at)
}

impl Inspection {
    /// Parse a complete document and verify its offsets and references.
    pub fn from_bytes(buf: &[u8]) -> Result<Self> {
        let input = parse::span(buf);
        let (_, header) = parse::header(input)?;
        let (_, start_xref) = parse::startxref_tail(input)?;
        let (rest, xref) = parse::xref_table(skip(input, start_xref)?)?;
        let (_, trailer) = parse::trailer(rest)?;
        log::debug!("xref at {} with {} entries", start_xref, xref.len());

        if trailer.size != xref.len() {
            return Err(inspection_error(format!(
                "trailer size {} does not match {} xref entries",
                trailer.size,
                xref.len()
            )));
        }

        let mut objects = FnvHashMap::default();
        for used in xref.used_objects() {
            let (_, obj) = parse::indirect_object(skip(input, used.byte_offset)?)?;
            if obj.index as usize != used.number || obj.generation as usize != used.generation {
                return Err(inspection_error(format!(
                    "offset {} of object {} points at object {} {}",
                    used.byte_offset, used.number, obj.index, obj.generation
                )));
            }
            log::trace!("object {} at {}", obj.index, used.byte_offset);
            objects.insert(obj.index, obj);
        }

        let inspection = Inspection {
            header,
            xref,
            trailer,
            start_xref,
            objects,
        };
        inspection.check_references()?;
        inspection.check_page_tree()?;
        Ok(inspection)
    }

    fn check_references(&self) -> Result<()> {
        self.resolve(self.trailer.root)?;
        for (number, obj) in self.objects.iter() {
            let mut dangling = None;
            obj.object.for_each_reference(&mut |r| {
                if !self.objects.contains_key(&r.index) && dangling.is_none() {
                    dangling = Some(*r);
                }
            });
            if let Some(r) = dangling {
                return Err(inspection_error(format!("object {} refers to missing {}", number, r)));
            }
        }
        Ok(())
    }

    fn check_page_tree(&self) -> Result<()> {
        // PageTree rejects a Count that differs from the number of kids
        let tree = self.page_tree()?;
        for kid in &tree.kids {
            let page = self.page_at(*kid)?;
            if self.resolve(page.contents)?.stream().is_none() {
                return Err(inspection_error(format!(
                    "contents {} of page {} is not a stream",
                    page.contents, kid
                )));
            }
        }
        Ok(())
    }

    pub fn object(&self, reference: Reference) -> Option<&Object> {
        self.objects
            .get(&reference.index)
            .filter(|obj| obj.generation == reference.generation)
            .map(|obj| obj.object.as_ref())
    }

    fn resolve(&self, reference: Reference) -> Result<&Object> {
        self.object(reference)
            .ok_or_else(|| inspection_error(format!("unresolved reference {}", reference)))
    }

    fn dictionary_at(&self, reference: Reference) -> Result<&Dictionary> {
        self.resolve(reference)?
            .dictionary()
            .ok_or_else(|| inspection_error(format!("{} is not a dictionary", reference)))
    }

    pub fn catalog(&self) -> Result<Catalog> {
        Catalog::try_from(self.dictionary_at(self.trailer.root)?)
            .map_err(|e| inspection_error(format!("invalid catalog: {:?}", e)))
    }

    pub fn page_tree(&self) -> Result<PageTree> {
        let catalog = self.catalog()?;
        PageTree::try_from(self.dictionary_at(catalog.pages)?)
            .map_err(|e| inspection_error(format!("invalid page tree: {:?}", e)))
    }

    fn page_at(&self, reference: Reference) -> Result<Page> {
        Page::try_from(self.dictionary_at(reference)?)
            .map_err(|e| inspection_error(format!("invalid page {}: {:?}", reference, e)))
    }

    pub fn page_count(&self) -> Result<usize> {
        Ok(self.page_tree()?.count())
    }

    /// Page records in page tree order.
    pub fn pages(&self) -> Result<Vec<Page>> {
        self.page_tree()?.kids.iter().map(|kid| self.page_at(*kid)).collect()
    }

    /// Decoded operator bytes of the page's content stream.
    pub fn page_content(&self, index: usize) -> Result<Vec<u8>> {
        let tree = self.page_tree()?;
        let kid = tree
            .kids
            .get(index)
            .ok_or_else(|| inspection_error(format!("page {} out of {}", index, tree.count())))?;
        let page = self.page_at(*kid)?;
        let stream = self
            .resolve(page.contents)?
            .stream()
            .ok_or_else(|| inspection_error(format!("contents of page {} is not a stream", index)))?;

        let filter = stream.dictionary.get(K_FILTER).and_then(Object::name);
        match filter {
            None => Ok(stream.data.to_vec()),
            Some(name) if &name[..] == FLATE_DECODE => {
                let mut inflated = Vec::new();
                ZlibDecoder::new(&stream.data[..]).read_to_end(&mut inflated)?;
                Ok(inflated)
            }
            Some(name) => Err(inspection_error(format!("unsupported filter {}", name))),
        }
    }

    /// The strings shown on a page, decoded from WinAnsi, in stream order.
    pub fn page_lines(&self, index: usize) -> Result<Vec<String>> {
        let content = self.page_content(index)?;
        let mut lines = Vec::new();
        let mut pos = 0;
        while let Some(start) = content[pos..].iter().position(|&c| c == b'(') {
            let start = pos + start;
            let (consumed, text) = parse::literal_string(&content[start..])
                .ok_or_else(|| inspection_error(format!("unterminated string at {} on page {}", start, index)))?;
            lines.push(aw_winansi::decode(&text));
            pos = start + consumed;
        }
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::DocumentConfig, parse::error::TbParseErrorKind, render_lines};
    use proptest::prelude::*;

    #[test]
    fn reads_back_a_rendered_document() {
        let pdf = render_lines(["first", "second (with parens)", "• bullet"], &DocumentConfig::default()).unwrap();
        let inspection = Inspection::from_bytes(&pdf).unwrap();

        assert_eq!(inspection.header.version, (1, 4));
        assert!(inspection.header.announced_binary);
        assert_eq!(inspection.trailer.root, Reference::new(1));
        assert_eq!(inspection.page_count().unwrap(), 1);
        assert_eq!(
            inspection.page_lines(0).unwrap(),
            vec!["first", "second (with parens)", "• bullet"]
        );
    }

    #[test]
    fn wrong_offset_is_detected() {
        let mut pdf = render_lines(["x"], &DocumentConfig::default()).unwrap();
        // shift everything after the header by one byte
        pdf.insert(15, b'\n');
        assert!(Inspection::from_bytes(&pdf).is_err());
    }

    /// Replace the declared `/Length` of the first stream, keeping its width.
    fn with_declared_length(pdf: &[u8], delta: isize) -> Vec<u8> {
        let key = b"/Length ";
        let start = pdf.windows(key.len()).position(|w| w == key).unwrap() + key.len();
        let end = start + pdf[start..].iter().position(|&c| c == b' ').unwrap();
        let length: isize = std::str::from_utf8(&pdf[start..end]).unwrap().parse().unwrap();

        let replaced = (length + delta).to_string();
        assert_eq!(replaced.len(), end - start);
        let mut broken = pdf[..start].to_vec();
        broken.extend(replaced.as_bytes());
        broken.extend(&pdf[end..]);
        broken
    }

    #[test]
    fn wrong_stream_length_is_detected() {
        let pdf = render_lines(["x"], &DocumentConfig::default()).unwrap();
        assert!(Inspection::from_bytes(&with_declared_length(&pdf, 0)).is_ok());

        for delta in [-1, 1, 2] {
            let broken = with_declared_length(&pdf, delta);
            assert!(
                matches!(
                    Inspection::from_bytes(&broken),
                    Err(TbError::Parse(TbParseErrorKind::InvalidStreamLength))
                ),
                "length off by {} was accepted",
                delta
            );
        }
    }

    #[test]
    fn page_out_of_range() {
        let pdf = render_lines(["x"], &DocumentConfig::default()).unwrap();
        let inspection = Inspection::from_bytes(&pdf).unwrap();
        assert!(inspection.page_lines(1).is_err());
    }

    #[test]
    fn empty_document() {
        let pdf = render_lines(Vec::<String>::new(), &DocumentConfig::default()).unwrap();
        let inspection = Inspection::from_bytes(&pdf).unwrap();
        assert_eq!(inspection.page_count().unwrap(), 0);
        assert!(inspection.pages().unwrap().is_empty());
        assert_eq!(inspection.xref.len(), 4);
    }

    proptest! {
        #[test]
        fn every_rendered_document_inspects(lines in prop::collection::vec("[ -~äé•]{0,150}", 0..80)) {
            let pdf = render_lines(&lines, &DocumentConfig::default()).unwrap();
            let inspection = Inspection::from_bytes(&pdf).unwrap();

            let config = DocumentConfig::default();
            let expected = crate::layout::paginate(&lines, &config);
            prop_assert_eq!(inspection.page_count().unwrap(), expected.len());
            for (i, page) in expected.iter().enumerate() {
                let shown = inspection.page_lines(i).unwrap();
                let laid_out: Vec<&str> = page.lines().iter().map(|l| l.as_str()).collect();
                prop_assert_eq!(shown, laid_out);
            }
        }
    }
}
