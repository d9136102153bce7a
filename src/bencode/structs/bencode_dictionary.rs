use indexmap::IndexMap;
use crate::bencode::enums::bencode_value::BencodeValue;

/// A bencode dictionary.
///
/// Keeps entries in the order they were first inserted, which is the order
/// they appeared in decoded input. Keys are unique: inserting an existing key
/// replaces its value in place.
///
/// Equality ignores entry order, two dictionaries are equal when they map the
/// same keys to equal values. Encoding sorts the keys, see
/// [`BencodeDictionary::sorted_entries`].
#[derive(Clone, Debug, Default)]
pub struct BencodeDictionary {
    pub(crate) entries: IndexMap<Vec<u8>, BencodeValue>,
}
