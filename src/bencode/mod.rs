//! Bencode codec.
//!
//! Bencoding is the serialization used by BitTorrent metafiles and tracker
//! responses. It knows four kinds of values:
//!
//! ```text
//!   <len>:<bytes>        byte string
//!   i<int>e              integer
//!   l<value>...e         list
//!   d<key><value>...e    dictionary (keys are byte strings)
//! ```
//!
//! Decoding tolerates non-canonical input (unsorted dictionary keys, leading
//! zeros, `-0`). Encoding always produces canonical output, with dictionary
//! keys emitted in ascending byte order.
//!
//! Decoding, encoding and dropping run on an explicit work-stack, so for
//! those nesting depth is only bounded by available memory. The derived
//! `Clone`, `Debug` and `PartialEq` of values still recurse.
//!
//! # Example
//!
//! ```rust
//! use warp_tracker::bencode::bencode::{decode, encode};
//! use warp_tracker::bencode::enums::bencode_value::BencodeValue;
//!
//! let value = decode(b"l5:hello5:worlde").unwrap();
//! assert_eq!(value, BencodeValue::from(vec![
//!     BencodeValue::from("hello"),
//!     BencodeValue::from("world"),
//! ]));
//! assert_eq!(encode(&value), b"l5:hello5:worlde".to_vec());
//! ```

/// `bencode_map!` and friends for building values inline.
pub mod macros;

/// Enumerations for the codec: the value type and its error type.
pub mod enums;

/// Data structures used by bencoded values.
pub mod structs;

/// Implementation blocks for the codec data types.
pub mod impls;

/// The `decode`/`encode` functions.
#[allow(clippy::module_inception)]
pub mod bencode;
