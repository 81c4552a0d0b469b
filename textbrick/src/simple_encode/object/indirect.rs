use crate::{
    pdf::{IndirectObject, Object},
    writer::{Encoder, Writer},
};

use crate::simple_encode::SimpleEncoder;

pub(crate) const START_OBJ: &[u8] = b"obj\n";
pub(crate) const END_OBJ: &[u8] = b"\nendobj\n";

/// Write `N G obj`, the object and `endobj`.
pub(crate) fn write_indirect(index: u32, generation: u32, object: &Object, writer: &mut dyn Writer) {
    writer.write(index.to_string().as_bytes());
    writer.write(b" ");
    writer.write(generation.to_string().as_bytes());
    writer.write(b" ");
    writer.write(START_OBJ);
    SimpleEncoder::write_to(object, writer);
    writer.write(END_OBJ);
}

impl Encoder<IndirectObject> for SimpleEncoder {
    fn write_to(o: &IndirectObject, writer: &mut dyn Writer) {
        write_indirect(o.index, o.generation, &o.object, writer);
    }
}
