use crate::{
    graph::ObjectGraph,
    pdf::{
        trailer::{K_ROOT, K_SIZE, TRAILER},
        FreeObject, Trailer, UsedObject, Xref, XrefEntry, PDF_VERSION,
    },
    simple_encode::{object::indirect::write_indirect, SimpleEncoder},
    writer::{Encoder, Writer},
};

/// Comment line of non-ASCII bytes that tells readers the file is binary.
pub const BINARY_MARKER: &[u8] = b"%\xE2\xE3\xCF\xD3\n";
pub const EOF_MARKER: &[u8] = b"%%EOF";
pub(crate) const XREF: &[u8] = b"xref";
pub(crate) const STARTXREF: &[u8] = b"startxref";

/// Write header, all records, the xref table and the trailer.
///
/// Returns the offset index that was written. Offsets are taken from
/// `writer.position()` right before each `N 0 obj` line, so the writer has to
/// start at the beginning of the file.
pub fn write_document(graph: &ObjectGraph, writer: &mut dyn Writer) -> Xref {
    log::debug!("write document with {} objects", graph.len());

    writer.write(format!("%PDF-{}.{}\n", PDF_VERSION.0, PDF_VERSION.1).as_bytes());
    writer.write(BINARY_MARKER);

    let mut xref = Xref::new();
    xref.push(FreeObject::head());

    for (reference, object) in graph.iter() {
        log::trace!("write object {} at {}", reference.index, writer.position());
        xref.push(UsedObject {
            number: reference.index as usize,
            byte_offset: writer.position(),
            generation: reference.generation as usize,
        });
        write_indirect(reference.index, reference.generation, object, writer);
    }

    let start_xref = writer.position();
    SimpleEncoder::write_to(&xref, writer);
    SimpleEncoder::write_to(
        &Trailer {
            size: xref.len(),
            root: graph.root(),
        },
        writer,
    );

    writer.write(STARTXREF);
    writer.write(b"\n");
    writer.write(start_xref.to_string().as_bytes());
    writer.write(b"\n");
    writer.write(EOF_MARKER);
    writer.write(b"\n");

    xref
}

/// Serialize the graph into a fresh buffer.
pub fn to_bytes(graph: &ObjectGraph) -> Vec<u8> {
    let mut out = Vec::new();
    write_document(graph, &mut out);
    out
}

impl Encoder<ObjectGraph> for SimpleEncoder {
    fn write_to(graph: &ObjectGraph, writer: &mut dyn Writer) {
        write_document(graph, writer);
    }
}

impl Encoder<Xref> for SimpleEncoder {
    /// Classic table with a single subsection starting at object 0. Every
    /// entry is exactly 20 bytes.
    fn write_to(o: &Xref, writer: &mut dyn Writer) {
        log::trace!("write XRef with {} entries", o.len());

        writer.write(XREF);
        writer.write(b"\n");
        writer.write(format!("0 {}\n", o.len()).as_bytes());
        for entry in o.entries() {
            let line = match entry {
                XrefEntry::Free(free) => format!("{:010} {:05} f \n", free.next_free, free.generation),
                XrefEntry::Used(used) => format!("{:010} {:05} n \n", used.byte_offset, used.generation),
            };
            writer.write(line.as_bytes());
        }
    }
}

impl Encoder<Trailer> for SimpleEncoder {
    fn write_to(trailer: &Trailer, writer: &mut dyn Writer) {
        log::trace!("write Trailer");

        writer.write(TRAILER);
        writer.write(b"\n<< /");
        writer.write(K_SIZE);
        writer.write(b" ");
        writer.write(trailer.size.to_string().as_bytes());
        writer.write(b" /");
        writer.write(K_ROOT);
        writer.write(b" ");
        writer.write(trailer.root.to_string().as_bytes());
        writer.write(b" >>\n");
    }
}
