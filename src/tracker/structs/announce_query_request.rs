use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

/// A normalized announce request.
///
/// Produced by [`TorrentTracker::validate_announce`] from the HTTP query, or
/// built directly by any other caller. `port` is kept wide so an out-of-range
/// value reaches the announce handler and is rejected there.
///
/// [`TorrentTracker::validate_announce`]: crate::tracker::structs::torrent_tracker::TorrentTracker::validate_announce
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnounceQueryRequest {
    pub info_hash: InfoHash,
    pub peer_id: PeerId,
    pub host: String,
    pub port: i64,
    pub left: u64,
    pub compact: bool,
}
