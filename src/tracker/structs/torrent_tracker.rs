use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::tracker::structs::torrent_registry::TorrentRegistry;

#[derive(Debug)]
pub struct TorrentTracker {
    pub config: Arc<Configuration>,
    pub torrents: TorrentRegistry,
}
