use crate::{
    parse::object::is_regular,
    pdf::Name,
    writer::{Encoder, Writer},
};

use crate::simple_encode::SimpleEncoder;

/// Bytes that have to be written as `#XX` inside a name.
fn needs_escape(c: u8) -> bool {
    !is_regular(c) || c == b'#' || !(0x21..=0x7E).contains(&c)
}

impl Encoder<Name> for SimpleEncoder {
    fn write_to(n: &Name, writer: &mut dyn Writer) {
        let mut last_write = 0;
        writer.write(b"/");
        for (index, &c) in n.iter().enumerate() {
            if needs_escape(c) {
                writer.write(&n[last_write..index]);
                last_write = index + 1;
                writer.write(b"#");
                writer.write(hex::encode_upper([c]).as_bytes())
            }
        }
        writer.write(&n[last_write..]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(name: &[u8], expected: &[u8]) {
        let name = Name::from(name.to_vec());
        let encoded_len = SimpleEncoder::encoded_len(&name);
        let mut out = Vec::new();
        SimpleEncoder::write_to(&name, &mut out);
        assert_eq!(
            out,
            expected,
            "Expected {}, got {}",
            String::from_utf8_lossy(expected),
            String::from_utf8_lossy(&out)
        );
        assert_eq!(encoded_len, out.len());
    }

    #[test]
    fn no_delimiters() {
        check(b"FlateDecode", b"/FlateDecode");
    }

    #[test]
    fn delimiter_in_the_middle() {
        check(b"Hello World!", b"/Hello#20World!");
    }

    #[test]
    fn delimiter_start() {
        check(b" HelloWorld!", b"/#20HelloWorld!");
    }

    #[test]
    fn delimiter_end() {
        check(b"HelloWorld! ", b"/HelloWorld!#20");
    }

    #[test]
    fn only_delimiters() {
        check(b"   ", b"/#20#20#20");
    }

    #[test]
    fn number_sign_and_high_bytes() {
        check(b"A#B", b"/A#23B");
        check(b"Caf\xE9", b"/Caf#E9");
    }
}
