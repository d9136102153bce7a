//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash.
///
/// The info hash is the SHA-1 hash of the bencoded "info" value of a torrent
/// file. It uniquely identifies a torrent to the tracker.
///
/// # Example
///
/// ```rust
/// use warp_tracker::tracker::structs::info_hash::InfoHash;
///
/// let hash = InfoHash([0u8; 20]);
/// let bytes: &[u8; 20] = &hash.0;
/// assert_eq!(hash.to_string(), "0000000000000000000000000000000000000000");
/// ```
///
/// # Representation
///
/// Displayed as a 40-character lowercase hexadecimal string, received raw
/// (percent-encoded) in announce requests.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct InfoHash(pub [u8; 20]);
