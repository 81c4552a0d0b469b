use crate::{
    pdf::Array,
    writer::{Encoder, Writer},
};

use crate::simple_encode::SimpleEncoder;

impl Encoder<Array> for SimpleEncoder {
    fn write_to(array: &Array, writer: &mut dyn Writer) {
        writer.write(b"[");
        for (i, item) in array.iter().enumerate() {
            if i != 0 {
                writer.write(b" ");
            }
            Self::write_to(item, writer);
        }
        writer.write(b"]");
    }
}

#[cfg(test)]
mod tests {
    use crate::pdf::{Object, Reference};

    use super::*;

    #[test]
    fn empty_array() {
        let array = Array::from(vec![]);
        let encoded_len = SimpleEncoder::encoded_len(&array);
        assert_eq!(encoded_len, 2);

        let mut out = Vec::new();
        SimpleEncoder::write_to(&array, &mut out);
        assert_eq!(b"[]", &out[..]);
    }

    #[test]
    fn media_box() {
        let array = Array::from(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(595),
            Object::Integer(842),
        ]);
        let mut out = Vec::new();
        SimpleEncoder::write_to(&array, &mut out);
        assert_eq!(b"[0 0 595 842]", &out[..]);
        assert_eq!(SimpleEncoder::encoded_len(&array), out.len())
    }

    #[test]
    fn kids() {
        let array = Array::from(vec![Object::from(Reference::new(4)), Object::from(Reference::new(6))]);
        let mut out = Vec::new();
        SimpleEncoder::write_to(&array, &mut out);
        assert_eq!(b"[4 0 R 6 0 R]", &out[..]);
    }
}
