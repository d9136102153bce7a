//! Implementation blocks for the bencode data types.

/// BencodeValue implementation: constructors, accessors, iterative drop.
pub mod bencode_value;

/// BencodeDictionary implementation: insert, lookup, canonical ordering.
pub mod bencode_dictionary;

/// BencodeInteger implementation: parsing, normalisation, narrowing.
pub mod bencode_integer;
