//! Data structures for the tracker core.
//!
//! Identifier types, the torrent and peer model, the registry holding every
//! loaded torrent and the tracker instance tying them to the configuration.

/// Main tracker instance struct.
///
/// Holds the configuration and the torrent registry, and answers announces.
pub mod torrent_tracker;

/// Announce request parameters.
///
/// The already-validated values the announce handler works on.
pub mod announce_query_request;

/// 20-byte torrent info hash identifier.
///
/// A wrapper around `[u8; 20]` usable as a map key.
pub mod info_hash;

/// Opaque peer identifier as sent by the client.
pub mod peer_id;

/// A loaded torrent: metadata, info hash and swarm.
pub mod torrent;

/// A single announcing peer.
///
/// Identity is the `(host, port)` pair, the peer id is not part of it.
pub mod torrent_peer;

/// Registry of loaded torrents.
///
/// Info hash map plus an insertion-ordered list used for file name lookups.
pub mod torrent_registry;
