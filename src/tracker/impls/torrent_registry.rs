use std::collections::btree_map::Entry;
use std::sync::Arc;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent::Torrent;
use crate::tracker::structs::torrent_registry::TorrentRegistry;

impl TorrentRegistry {
    pub fn new() -> TorrentRegistry
    {
        TorrentRegistry::default()
    }

    /// Adds `torrent` unless its info-hash is already known.
    ///
    /// The first registration wins, a duplicate is dropped and `false` returned.
    pub fn register(&mut self, torrent: Torrent) -> bool
    {
        match self.torrents_map.entry(torrent.info_hash()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                let torrent = Arc::new(torrent);
                entry.insert(torrent.clone());
                self.torrents.push(torrent);
                true
            }
        }
    }

    pub fn by_info_hash(&self, info_hash: &InfoHash) -> Result<Arc<Torrent>, TrackerError>
    {
        self.torrents_map.get(info_hash)
            .cloned()
            .ok_or(TrackerError::InfoHashNotFound(*info_hash))
    }

    pub fn by_file_name(&self, file_name: &str) -> Result<Arc<Torrent>, TrackerError>
    {
        self.torrents.iter()
            .find(|torrent| torrent.file_name() == file_name)
            .cloned()
            .ok_or_else(|| TrackerError::TorrentNotFound(file_name.to_string()))
    }

    /// Registered torrents in the order they were added.
    pub fn all(&self) -> &[Arc<Torrent>]
    {
        &self.torrents
    }

    pub fn len(&self) -> usize
    {
        self.torrents.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.torrents.is_empty()
    }
}
