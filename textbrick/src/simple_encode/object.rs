use crate::{
    pdf::Object,
    writer::{Encoder, Writer},
};

use super::SimpleEncoder;

pub(crate) mod array;
pub(crate) mod dictionary;
pub(crate) mod indirect;
pub(crate) mod name;
pub(crate) mod stream;
pub(crate) mod string;

pub(crate) const TRUE_OBJECT: &str = "true";
pub(crate) const FALSE_OBJECT: &str = "false";
pub(crate) const NULL_OBJECT: &str = "null";

impl Encoder<Object> for SimpleEncoder {
    fn write_to(obj: &Object, writer: &mut dyn Writer) {
        match obj {
            Object::String(s) => Self::write_to(s, writer),
            Object::Real(f) => writer.write(f.to_string().as_bytes()),
            Object::Integer(i) => writer.write(i.to_string().as_bytes()),
            Object::Bool(true) => writer.write(TRUE_OBJECT.as_bytes()),
            Object::Bool(false) => writer.write(FALSE_OBJECT.as_bytes()),
            Object::Name(n) => Self::write_to(n, writer),
            Object::Array(a) => Self::write_to(a, writer),
            Object::Dictionary(d) => Self::write_to(d, writer),
            Object::Stream(s) => Self::write_to(s, writer),
            Object::Null => writer.write(NULL_OBJECT.as_bytes()),
            Object::Reference(r) => writer.write(r.to_string().as_bytes()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::Reference;

    fn encode(obj: &Object) -> Vec<u8> {
        let mut out = Vec::new();
        SimpleEncoder::write_to(obj, &mut out);
        assert_eq!(SimpleEncoder::encoded_len(obj), out.len());
        out
    }

    #[test]
    fn scalars() {
        assert_eq!(encode(&Object::Integer(-14)), b"-14".to_vec());
        assert_eq!(encode(&Object::Real(0.5)), b"0.5".to_vec());
        assert_eq!(encode(&Object::Bool(true)), b"true".to_vec());
        assert_eq!(encode(&Object::Null), b"null".to_vec());
    }

    #[test]
    fn reference() {
        assert_eq!(encode(&Object::Reference(Reference::new(12))), b"12 0 R".to_vec());
    }
}
