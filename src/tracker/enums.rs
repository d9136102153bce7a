//! Enumerations for tracker operations.

/// Errors raised by the torrent model, the registry and the loader.
///
/// - `InfoHashNotFound` / `TorrentNotFound` - registry lookups that missed
/// - `InvalidAddress` / `PortOutOfRange` - a peer that cannot be served
/// - `InvalidMetadata` - a metafile without the structure a torrent needs
pub mod tracker_error;
