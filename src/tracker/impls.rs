//! Implementation blocks for tracker data structures.
//!
//! Implementations are organized by the struct they extend. The
//! `torrent_tracker_*` files split `TorrentTracker` by concern.

/// InfoHash implementation: Display, FromStr, conversions.
pub mod info_hash;

/// PeerId implementation: Display, conversions.
pub mod peer_id;

/// TorrentPeer implementation: identity, liveness and wire forms.
pub mod torrent_peer;

/// Torrent implementation: info-hash derivation and swarm access.
pub mod torrent;

/// TorrentRegistry implementation: registration and lookups.
pub mod torrent_registry;

/// TorrentTracker core implementation.
pub mod torrent_tracker;

/// TorrentTracker announce request validation and handling.
pub mod torrent_tracker_handlers;

/// TorrentTracker metafile loading.
pub mod torrent_tracker_loader;

/// TorrentTracker expired peer cleanup.
pub mod torrent_tracker_peers;
