use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub torrents_dir: String,
    /// Replaces the `announce` URL of every loaded metafile. Empty keeps it.
    #[serde(default)]
    pub announce_url: String,
    pub request_interval: u64,
    pub peers_timeout: u64,
    /// Seconds between expired peer sweeps, `0` disables them.
    pub peers_cleanup_interval: u64,
}
