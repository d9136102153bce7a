use crate::bencode::structs::bencode_dictionary::BencodeDictionary;
use crate::bencode::structs::bencode_integer::BencodeInteger;

/// A single bencoded value.
///
/// # Variants
///
/// - **ByteString**: raw bytes, not necessarily UTF-8
/// - **Integer**: signed integer of any size, see [`BencodeInteger`]
/// - **List**: ordered sequence of values
/// - **Dictionary**: byte-string keyed map, see [`BencodeDictionary`]
///
/// Dropping a value releases nested lists and dictionaries iteratively, so
/// an adversarially deep value cannot exhaust the call stack on drop. The
/// derived `Clone`, `Debug` and `PartialEq` still recurse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BencodeValue {
    ByteString(Vec<u8>),
    Integer(BencodeInteger),
    List(Vec<BencodeValue>),
    Dictionary(BencodeDictionary),
}
