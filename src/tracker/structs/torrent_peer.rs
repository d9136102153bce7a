use std::time::Instant;
use crate::tracker::structs::peer_id::PeerId;

/// One peer of a swarm.
///
/// Two peers are equal when `host` and `port` match, whatever their
/// `peer_id`, `left` or `last_seen`. Ordering and hashing follow the same
/// pair, so a swarm stored as a set holds at most one entry per address.
#[derive(Clone, Debug)]
pub struct TorrentPeer {
    pub peer_id: PeerId,
    pub host: String,
    pub port: u16,
    pub left: u64,
    pub compact: bool,
    pub last_seen: Instant,
}
