//! The Entry type: one flat key paired with opaque bytes.

use bytes::Bytes;

/// A single backend entry.
///
/// The key is the flat external identifier; the value is stored and
/// returned unmodified. No metadata (version, timestamp) is carried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Flat key, byte-string-safe text. May contain `/` separators that
    /// backends are free to interpret as hierarchy.
    pub key: String,
    /// Opaque value bytes. Zero-length is a valid, present value.
    pub value: Bytes,
}

impl Entry {
    /// Build an entry from anything key-like and value-like.
    pub fn new(key: impl Into<String>, value: impl Into<Bytes>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_from_convertibles() {
        let entry = Entry::new("a/b", vec![1u8, 2, 3]);
        assert_eq!(entry.key, "a/b");
        assert_eq!(entry.value, Bytes::from_static(&[1, 2, 3]));
    }

    #[test]
    fn empty_value_is_distinct_from_nothing() {
        let entry = Entry::new("k", Bytes::new());
        assert!(entry.value.is_empty());
    }
}
