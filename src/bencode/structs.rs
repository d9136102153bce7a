//! Data structures for the bencode codec.

/// Insertion-ordered dictionary with byte-string keys.
pub mod bencode_dictionary;

/// Arbitrary-precision integer in canonical decimal form.
pub mod bencode_integer;
