//! Torrent model, registry and announce handling.
//!
//! A [`TorrentTracker`](structs::torrent_tracker::TorrentTracker) owns a
//! [`TorrentRegistry`](structs::torrent_registry::TorrentRegistry) of every
//! torrent loaded at startup. The registry itself never changes once the
//! tracker is shared; announces only touch the swarm of one torrent, each
//! behind its own lock.
//!
//! # Announce flow
//!
//! 1. `validate_announce` turns query parameters into an `AnnounceQueryRequest`
//! 2. `announce` looks the torrent up, upserts the peer keyed by `(host, port)`
//! 3. the swarm snapshot is encoded, compact or as a list of dictionaries
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use warp_tracker::bencode::bencode::decode;
//! use warp_tracker::bencode_map;
//! use warp_tracker::config::structs::configuration::Configuration;
//! use warp_tracker::tracker::structs::announce_query_request::AnnounceQueryRequest;
//! use warp_tracker::tracker::structs::peer_id::PeerId;
//! use warp_tracker::tracker::structs::torrent::Torrent;
//! use warp_tracker::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let mut tracker = TorrentTracker::new(Arc::new(Configuration::init()));
//! let torrent = Torrent::from_metadata(bencode_map! { "info" => bencode_map! {} }, "empty.torrent").unwrap();
//! let info_hash = torrent.info_hash();
//! tracker.torrents.register(torrent);
//!
//! let response = tracker.announce(&AnnounceQueryRequest {
//!     info_hash,
//!     peer_id: PeerId(b"-WT0300-000000000000".to_vec()),
//!     host: String::from("10.0.0.1"),
//!     port: 6881,
//!     left: 0,
//!     compact: true,
//! });
//! let response = decode(&response).unwrap();
//! assert_eq!(response.get(b"complete").and_then(|v| v.as_integer()), Some(1));
//! assert_eq!(response.get(b"peers").and_then(|v| v.as_bytes()), Some(&[10, 0, 0, 1, 0x1a, 0xe1][..]));
//! ```

/// Enumerations for tracker operations.
///
/// Contains the tracker error type.
pub mod enums;

/// Implementation blocks for tracker structs.
///
/// Contains the method implementations for the torrent model, the registry
/// and the `TorrentTracker` itself.
pub mod impls;

/// Data structures for tracker operations.
///
/// Contains struct definitions for torrents, peers and request types.
pub mod structs;

/// Unit tests for tracker functionality.
pub mod tests;
