use crate::{
    pdf::{document::K_LENGTH, Stream},
    writer::{Encoder, Writer},
};

use crate::simple_encode::SimpleEncoder;

const START_STREAM: &[u8] = b"\nstream\n";
const END_STREAM: &[u8] = b"\nendstream";

impl Encoder<Stream> for SimpleEncoder {
    /// `/Length` is always written from the data that follows, whatever the
    /// dictionary holds. A missing `/Length` is written first.
    fn write_to(s: &Stream, writer: &mut dyn Writer) {
        let length = s.data.len().to_string();

        writer.write(b"<<");
        if !s.dictionary.contains_key(K_LENGTH) {
            writer.write(b" /Length ");
            writer.write(length.as_bytes());
        }
        for (key, value) in s.dictionary.iter() {
            writer.write(b" ");
            Self::write_to(key, writer);
            writer.write(b" ");
            if &key[..] == K_LENGTH {
                writer.write(length.as_bytes());
            } else {
                Self::write_to(value, writer);
            }
        }
        writer.write(b" >>");

        writer.write(START_STREAM);
        writer.write(&s.data);
        writer.write(END_STREAM);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::{Dictionary, Name, Object};

    fn encode(s: &Stream) -> Vec<u8> {
        let mut out = Vec::new();
        SimpleEncoder::write_to(s, &mut out);
        assert_eq!(SimpleEncoder::encoded_len(s), out.len());
        out
    }

    #[test]
    fn stale_length_is_corrected() {
        let stream = Stream::new(
            Dictionary::from([
                (Name::from("Length"), Object::Integer(999)),
                (Name::from("Filter"), Object::from(Name::from("FlateDecode"))),
            ]),
            b"abc".to_vec(),
        );
        assert_eq!(
            encode(&stream),
            b"<< /Length 3 /Filter /FlateDecode >>\nstream\nabc\nendstream".to_vec()
        );
    }

    #[test]
    fn missing_length_is_added() {
        let stream = Stream::new(Dictionary::new(), b"\x00\n\x01".to_vec());
        assert_eq!(encode(&stream), b"<< /Length 3 >>\nstream\n\x00\n\x01\nendstream".to_vec());
    }
}
