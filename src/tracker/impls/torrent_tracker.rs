use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::tracker::structs::torrent_registry::TorrentRegistry;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    /// Creates a tracker with an empty registry.
    ///
    /// Torrents are registered through [`TorrentTracker::load_torrents`] before
    /// the tracker is shared with the HTTP workers.
    pub fn new(config: Arc<Configuration>) -> TorrentTracker
    {
        TorrentTracker {
            config,
            torrents: TorrentRegistry::new(),
        }
    }
}
