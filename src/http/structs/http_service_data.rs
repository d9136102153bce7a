use std::sync::Arc;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

/// State handed to every handler of one HTTP listener.
///
/// The tracker is shared by all listeners, the listener config is not, so
/// each bind address can trust its own real-IP header.
#[derive(Debug)]
pub struct HttpServiceData {
    pub torrent_tracker: Arc<TorrentTracker>,
    pub http_trackers_config: Arc<HttpTrackersConfig>
}
