use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant};
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::bencode::structs::bencode_dictionary::BencodeDictionary;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::torrent_peer::TorrentPeer;

impl TorrentPeer {
    /// Builds the peer described by an announce, stamped with the current time.
    ///
    /// Rejects a host that is not a dotted-quad IPv4 address and a port
    /// outside `0..=65535`, so nothing that cannot be served enters a swarm.
    pub fn from_announce_request(request: &AnnounceQueryRequest) -> Result<TorrentPeer, TrackerError>
    {
        TorrentPeer::ip4_to_bytes(&request.host)?;
        let port = u16::from_be_bytes(TorrentPeer::port_to_bytes(request.port)?);
        Ok(TorrentPeer {
            peer_id: request.peer_id.clone(),
            host: request.host.clone(),
            port,
            left: request.left,
            compact: request.compact,
            last_seen: Instant::now(),
        })
    }

    pub fn is_seeder(&self) -> bool
    {
        self.left == 0
    }

    pub fn is_leecher(&self) -> bool
    {
        !self.is_seeder()
    }

    /// Whether the peer announced within `timeout` before `now`.
    pub fn alive(&self, now: Instant, timeout: Duration) -> bool
    {
        now.saturating_duration_since(self.last_seen) <= timeout
    }

    /// Converts a dotted-quad IPv4 address into its four octets.
    pub fn ip4_to_bytes(host: &str) -> Result<[u8; 4], TrackerError>
    {
        let invalid = || TrackerError::InvalidAddress(host.to_string());
        let mut octets = [0u8; 4];
        let mut parts = host.split('.');
        for octet in octets.iter_mut() {
            let part = parts.next().ok_or_else(invalid)?;
            if part.is_empty() || !part.bytes().all(|byte| byte.is_ascii_digit()) {
                return Err(invalid());
            }
            *octet = part.parse::<u8>().map_err(|_| invalid())?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(octets)
    }

    /// Converts a port into two big-endian bytes.
    pub fn port_to_bytes(port: i64) -> Result<[u8; 2], TrackerError>
    {
        u16::try_from(port)
            .map(u16::to_be_bytes)
            .map_err(|_| TrackerError::PortOutOfRange(port))
    }

    /// The 6-byte compact form: IPv4 octets followed by the big-endian port.
    pub fn to_compact(&self) -> Result<[u8; 6], TrackerError>
    {
        let ip = TorrentPeer::ip4_to_bytes(&self.host)?;
        let port = self.port.to_be_bytes();
        Ok([ip[0], ip[1], ip[2], ip[3], port[0], port[1]])
    }

    /// The dictionary form used for non-compact peer lists.
    pub fn to_bencode(&self) -> BencodeValue
    {
        let mut peer = BencodeDictionary::new();
        peer.insert("peer id", BencodeValue::from(self.peer_id.as_bytes()));
        peer.insert("ip", BencodeValue::from(self.host.as_str()));
        peer.insert("port", BencodeValue::from(self.port as i64));
        BencodeValue::Dictionary(peer)
    }
}

impl PartialEq for TorrentPeer {
    fn eq(&self, other: &Self) -> bool {
        self.host == other.host && self.port == other.port
    }
}

impl Eq for TorrentPeer {}

impl Ord for TorrentPeer {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.host.as_str(), self.port).cmp(&(other.host.as_str(), other.port))
    }
}

impl PartialOrd for TorrentPeer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for TorrentPeer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.host.hash(state);
        self.port.hash(state);
    }
}
