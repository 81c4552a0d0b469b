//! Output side of the serializer.
//!
//! Encoders never fail: everything that could go wrong (unresolved
//! references, integers out of range) is rejected while the object graph is
//! built, so writing is plain byte pushing with position tracking.

pub trait Writer {
    fn write(&mut self, buf: &[u8]);

    /// Number of bytes written so far.
    fn position(&self) -> usize;
}

impl Writer for Vec<u8> {
    fn write(&mut self, buf: &[u8]) {
        self.extend_from_slice(buf);
    }

    fn position(&self) -> usize {
        self.len()
    }
}

/// A writer that only counts.
#[derive(Debug, Default)]
pub struct LenCounter(usize);

impl Writer for LenCounter {
    fn write(&mut self, buf: &[u8]) {
        self.0 += buf.len();
    }

    fn position(&self) -> usize {
        self.0
    }
}

pub trait Encoder<T: ?Sized> {
    fn write_to(obj: &T, writer: &mut dyn Writer);

    fn encoded_len(obj: &T) -> usize {
        let mut counter = LenCounter::default();
        Self::write_to(obj, &mut counter);
        counter.position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_position_follows_length() {
        let mut out = Vec::new();
        out.write(b"%PDF-1.4\n");
        assert_eq!(out.position(), 9);
        out.write(b"");
        assert_eq!(out.position(), 9);
    }

    #[test]
    fn counter_counts() {
        let mut counter = LenCounter::default();
        counter.write(b"abc");
        counter.write(b"de");
        assert_eq!(counter.position(), 5);
    }
}
