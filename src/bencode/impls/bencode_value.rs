use crate::bencode::bencode::encode;
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::bencode::structs::bencode_dictionary::BencodeDictionary;
use crate::bencode::structs::bencode_integer::BencodeInteger;

impl BencodeValue {
    pub fn as_bytes(&self) -> Option<&[u8]>
    {
        match self {
            BencodeValue::ByteString(bytes) => Some(bytes.as_slice()),
            _ => None
        }
    }

    pub fn as_str(&self) -> Option<&str>
    {
        self.as_bytes().and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    /// The integer as `i64`. `None` for other variants and for integers
    /// outside the `i64` range, see [`BencodeValue::as_big_integer`].
    pub fn as_integer(&self) -> Option<i64>
    {
        self.as_big_integer().and_then(BencodeInteger::as_i64)
    }

    pub fn as_big_integer(&self) -> Option<&BencodeInteger>
    {
        match self {
            BencodeValue::Integer(number) => Some(number),
            _ => None
        }
    }

    pub fn as_list(&self) -> Option<&[BencodeValue]>
    {
        match self {
            BencodeValue::List(items) => Some(items.as_slice()),
            _ => None
        }
    }

    pub fn as_dictionary(&self) -> Option<&BencodeDictionary>
    {
        match self {
            BencodeValue::Dictionary(dictionary) => Some(dictionary),
            _ => None
        }
    }

    pub fn as_dictionary_mut(&mut self) -> Option<&mut BencodeDictionary>
    {
        match self {
            BencodeValue::Dictionary(dictionary) => Some(dictionary),
            _ => None
        }
    }

    /// Looks up `key` when this value is a dictionary.
    pub fn get(&self, key: &[u8]) -> Option<&BencodeValue>
    {
        self.as_dictionary().and_then(|dictionary| dictionary.get(key))
    }

    pub fn encode(&self) -> Vec<u8>
    {
        encode(self)
    }
}

impl Drop for BencodeValue {
    fn drop(&mut self)
    {
        let mut pending: Vec<BencodeValue> = match self {
            BencodeValue::List(items) if !items.is_empty() => std::mem::take(items),
            BencodeValue::Dictionary(dictionary) if !dictionary.is_empty() => dictionary.take_values().collect(),
            _ => return
        };
        // Children are emptied before they drop, so every nested drop returns early.
        while let Some(mut value) = pending.pop() {
            match &mut value {
                BencodeValue::List(items) => pending.append(items),
                BencodeValue::Dictionary(dictionary) => pending.extend(dictionary.take_values()),
                _ => {}
            }
        }
    }
}

impl From<&str> for BencodeValue {
    fn from(data: &str) -> Self {
        BencodeValue::ByteString(data.as_bytes().to_vec())
    }
}

impl From<String> for BencodeValue {
    fn from(data: String) -> Self {
        BencodeValue::ByteString(data.into_bytes())
    }
}

impl From<&[u8]> for BencodeValue {
    fn from(data: &[u8]) -> Self {
        BencodeValue::ByteString(data.to_vec())
    }
}

impl From<Vec<u8>> for BencodeValue {
    fn from(data: Vec<u8>) -> Self {
        BencodeValue::ByteString(data)
    }
}

impl From<i64> for BencodeValue {
    fn from(data: i64) -> Self {
        BencodeValue::Integer(BencodeInteger::from(data))
    }
}

impl From<BencodeInteger> for BencodeValue {
    fn from(data: BencodeInteger) -> Self {
        BencodeValue::Integer(data)
    }
}

impl From<Vec<BencodeValue>> for BencodeValue {
    fn from(data: Vec<BencodeValue>) -> Self {
        BencodeValue::List(data)
    }
}

impl From<BencodeDictionary> for BencodeValue {
    fn from(data: BencodeDictionary) -> Self {
        BencodeValue::Dictionary(data)
    }
}
