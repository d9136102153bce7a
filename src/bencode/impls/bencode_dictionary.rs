use indexmap::IndexMap;
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::bencode::structs::bencode_dictionary::BencodeDictionary;

impl BencodeDictionary {
    pub fn new() -> BencodeDictionary {
        BencodeDictionary {
            entries: IndexMap::new(),
        }
    }

    /// Inserts `value` under `key`, returning the value it replaced.
    ///
    /// A replaced key keeps its original position.
    pub fn insert<K: Into<Vec<u8>>>(&mut self, key: K, value: BencodeValue) -> Option<BencodeValue>
    {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: &[u8]) -> Option<&BencodeValue>
    {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &[u8]) -> Option<&mut BencodeValue>
    {
        self.entries.get_mut(key)
    }

    /// Removes `key`, keeping the remaining entries in order.
    pub fn remove(&mut self, key: &[u8]) -> Option<BencodeValue>
    {
        self.entries.shift_remove(key)
    }

    pub fn contains_key(&self, key: &[u8]) -> bool
    {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize
    {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &BencodeValue)>
    {
        self.entries.iter().map(|(key, value)| (key.as_slice(), value))
    }

    /// Entries in ascending byte-wise key order, as they must be encoded.
    pub fn sorted_entries(&self) -> Vec<(&[u8], &BencodeValue)>
    {
        let mut sorted: Vec<(&[u8], &BencodeValue)> = self.iter().collect();
        sorted.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        sorted
    }

    pub(crate) fn take_values(&mut self) -> impl Iterator<Item = BencodeValue>
    {
        std::mem::take(&mut self.entries).into_values()
    }
}

impl PartialEq for BencodeDictionary {
    fn eq(&self, other: &Self) -> bool
    {
        self.len() == other.len()
            && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl Eq for BencodeDictionary {}

impl<K: Into<Vec<u8>>> FromIterator<(K, BencodeValue)> for BencodeDictionary {
    fn from_iter<T: IntoIterator<Item = (K, BencodeValue)>>(iter: T) -> Self
    {
        let mut dictionary = BencodeDictionary::new();
        for (key, value) in iter {
            dictionary.insert(key, value);
        }
        dictionary
    }
}
