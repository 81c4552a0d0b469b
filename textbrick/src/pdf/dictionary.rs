use super::{Name, Object};

/// Dictionary that keeps its entries in insertion order.
///
/// The serializer writes entries in this order, so the output for a given
/// dictionary is always the same bytes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dictionary(Vec<(Name, Object)>);

impl Dictionary {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert a value. An existing entry with the same key keeps its position
    /// and gets its value replaced.
    pub fn insert(&mut self, key: impl Into<Name>, value: impl Into<Object>) -> Option<Object> {
        let key = key.into();
        let value = value.into();
        if let Some((_, old)) = self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(std::mem::replace(old, value))
        } else {
            self.0.push((key, value));
            None
        }
    }

    pub fn get(&self, key: &[u8]) -> Option<&Object> {
        self.0.iter().find(|(k, _)| &k[..] == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Object)> {
        self.0.iter().map(|(k, v)| (k, v))
    }

    pub fn values(&self) -> impl Iterator<Item = &Object> {
        self.0.iter().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(Name, Object); N]> for Dictionary {
    fn from(entries: [(Name, Object); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl FromIterator<(Name, Object)> for Dictionary {
    fn from_iter<T: IntoIterator<Item = (Name, Object)>>(iter: T) -> Self {
        let mut dict = Dictionary::new();
        for (k, v) in iter {
            dict.insert(k, v);
        }
        dict
    }
}

impl std::fmt::Display for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<<")?;
        for (k, v) in self.iter() {
            write!(f, " /{} {}", k, v)?;
        }
        write!(f, " >>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut d = Dictionary::new();
        d.insert("Type", Name::from("Page"));
        d.insert("Parent", Object::Integer(2));
        d.insert("Contents", Object::Integer(3));
        let keys: Vec<String> = d.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["Type", "Parent", "Contents"]);
    }

    #[test]
    fn replace_keeps_position() {
        let mut d = Dictionary::new();
        d.insert("Length", Object::Integer(0));
        d.insert("Filter", Name::from("FlateDecode"));
        let old = d.insert("Length", Object::Integer(42));

        assert_eq!(old, Some(Object::Integer(0)));
        assert_eq!(d.len(), 2);
        assert_eq!(d.iter().next().map(|(_, v)| v), Some(&Object::Integer(42)));
    }

    #[test]
    fn lookup_by_bytes() {
        let d = Dictionary::from([(Name::from("Count"), Object::Integer(3))]);
        assert_eq!(d.get(b"Count").and_then(Object::integer), Some(3));
        assert!(d.get(b"Kids").is_none());
    }
}
