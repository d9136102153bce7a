use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HttpTrackersConfig {
    pub enabled: bool,
    pub bind_address: String,
    /// Header carrying the client address behind a proxy. Empty uses the socket address.
    ///
    /// Only set this when the listener is reachable solely through a proxy
    /// that overwrites the header, otherwise clients can announce any address.
    #[serde(default)]
    pub real_ip: String,
    pub keep_alive: u64,
    pub request_timeout: u64,
    pub disconnect_timeout: u64,
    pub threads: u64,
}
