use crate::{
    pdf::TbString,
    writer::{Encoder, Writer},
};

use crate::simple_encode::SimpleEncoder;

/// Bytes that would end or corrupt a literal string.
fn needs_escape(c: u8) -> bool {
    matches!(c, b'\\' | b'(' | b')')
}

impl Encoder<TbString> for SimpleEncoder {
    fn write_to(s: &TbString, writer: &mut dyn Writer) {
        writer.write(b"(");
        let mut last_written_index = 0;
        for (index, &c) in s.iter().enumerate() {
            if needs_escape(c) {
                writer.write(&s[last_written_index..index]);
                writer.write(br"\");
                last_written_index = index;
            }
        }
        writer.write(&s[last_written_index..]);
        writer.write(b")");
    }
}
