use std::collections::BTreeSet;
use parking_lot::RwLock;
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent_peer::TorrentPeer;

/// A torrent served by the tracker.
///
/// `info_hash` is derived from the metadata once, at construction, and is
/// never recomputed: rewriting the metadata afterwards (for instance its
/// `announce` URL) leaves the identity of the torrent untouched.
///
/// The swarm sits behind its own lock so announces for different torrents
/// never contend.
#[derive(Debug)]
pub struct Torrent {
    pub(crate) info_hash: InfoHash,
    pub(crate) file_name: String,
    pub(crate) metadata: BencodeValue,
    pub(crate) swarm: RwLock<BTreeSet<TorrentPeer>>,
}
