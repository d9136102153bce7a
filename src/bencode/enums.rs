//! Enumerations for the bencode codec.

/// A decoded bencode value.
///
/// Closed over the four bencode kinds: byte string, integer, list and
/// dictionary.
pub mod bencode_value;

/// Errors raised while decoding bencoded bytes.
pub mod bencode_error;
