use std::collections::BTreeMap;
use std::sync::Arc;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent::Torrent;

/// Every torrent the tracker serves.
///
/// Filled once at startup and read-only afterwards, only the swarms inside
/// the torrents change while serving announces.
#[derive(Debug, Default)]
pub struct TorrentRegistry {
    pub(crate) torrents_map: BTreeMap<InfoHash, Arc<Torrent>>,
    pub(crate) torrents: Vec<Arc<Torrent>>,
}
