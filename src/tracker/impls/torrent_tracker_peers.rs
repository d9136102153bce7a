use std::sync::Arc;
use std::time::{Duration, Instant};
use log::{debug, info};
use tokio_shutdown::Shutdown;
use crate::common::common::shutdown_waiting;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    /// Removes peers that have not announced within `peer_timeout` from every swarm.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn cleanup_peers(&self, peer_timeout: Duration) -> u64
    {
        let now = Instant::now();
        let mut removed = 0u64;
        for torrent in self.torrents.all() {
            let expired = torrent.remove_expired_peers(now, peer_timeout);
            if expired > 0 {
                debug!("[CLEANUP] Removed {} peers from {}", expired, torrent.info_hash());
            }
            removed += expired;
        }
        info!("[CLEANUP] Removed {} expired peers", removed);
        removed
    }

    /// Sweeps expired peers every `peers_cleanup_interval` seconds until shutdown.
    pub async fn peers_cleanup_task(torrent_tracker: Arc<TorrentTracker>, shutdown: Shutdown)
    {
        let tracker_config = &torrent_tracker.config.tracker_config;
        let cleanup_interval = Duration::from_secs(tracker_config.peers_cleanup_interval);
        let peer_timeout = Duration::from_secs(tracker_config.peers_timeout);

        loop {
            if shutdown_waiting(cleanup_interval, shutdown.clone()).await {
                info!("[CLEANUP] Shutting down the peer cleanup");
                break;
            }
            torrent_tracker.cleanup_peers(peer_timeout);
        }
    }
}
