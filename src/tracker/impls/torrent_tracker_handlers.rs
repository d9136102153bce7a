use std::collections::HashMap;
use std::net::IpAddr;
use log::debug;
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::common::structs::custom_error::CustomError;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_peer::TorrentPeer;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::{bencode_bytes, bencode_int, bencode_map};

impl TorrentTracker {
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn validate_announce(&self, remote_addr: IpAddr, query: HashMap<String, Vec<Vec<u8>>>) -> Result<AnnounceQueryRequest, CustomError>
    {
        fn get_required_bytes<'a>(query: &'a HashMap<String, Vec<Vec<u8>>>, field: &str, expected_len: Option<usize>) -> Result<&'a [u8], CustomError> {
            let value = query.get(field)
                .ok_or_else(|| CustomError::new(&format!("missing {}", field)))?
                .first()
                .ok_or_else(|| CustomError::new(&format!("no {} given", field)))?;

            if let Some(len) = expected_len {
                if value.len() != len {
                    return Err(CustomError::new(&format!("invalid {} size", field)));
                }
            }
            if value.is_empty() {
                return Err(CustomError::new(&format!("no {} given", field)));
            }

            Ok(value.as_slice())
        }

        fn parse_integer<T: std::str::FromStr>(query: &HashMap<String, Vec<Vec<u8>>>, field: &str) -> Result<T, CustomError> {
            let bytes = get_required_bytes(query, field, None)?;
            let str_value = std::str::from_utf8(bytes)
                .map_err(|_| CustomError::new(&format!("invalid {}", field)))?;
            str_value.parse::<T>()
                .map_err(|_| CustomError::new(&format!("missing or invalid {}", field)))
        }

        let info_hash = get_required_bytes(&query, "info_hash", Some(20))?;
        let peer_id = get_required_bytes(&query, "peer_id", None)?;
        let port_integer = parse_integer::<i64>(&query, "port")?;
        let left_integer = parse_integer::<u64>(&query, "left")?;

        let compact_bool = query.get("compact")
            .and_then(|v| v.first())
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .and_then(|s| s.parse::<u8>().ok())
            .map(|v| v == 1)
            .unwrap_or(false);

        let info_hash = InfoHash::try_from(info_hash)
            .map_err(|_| CustomError::new("invalid info_hash size"))?;

        Ok(AnnounceQueryRequest {
            info_hash,
            peer_id: PeerId::from(peer_id),
            host: remote_addr.to_canonical().to_string(),
            port: port_integer,
            left: left_integer,
            compact: compact_bool,
        })
    }

    /// Runs one announce against the registry and returns the bencoded reply.
    ///
    /// Every outcome is a tracker response: an unknown torrent or an
    /// unusable peer address yields a failure dictionary, never an error.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn announce(&self, request: &AnnounceQueryRequest) -> Vec<u8>
    {
        let torrent = match self.torrents.by_info_hash(&request.info_hash) {
            Ok(torrent) => torrent,
            Err(_) => {
                debug!("[ANNOUNCE] Unknown info_hash {}", request.info_hash);
                return TorrentTracker::announce_failure("Torrent not registered", Some(200));
            }
        };

        let peer = match TorrentPeer::from_announce_request(request) {
            Ok(peer) => peer,
            Err(error) => {
                debug!("[ANNOUNCE] Rejected peer {}:{} for {}: {}", request.host, request.port, request.info_hash, error);
                return TorrentTracker::announce_failure(&error.to_string(), None);
            }
        };

        debug!("[ANNOUNCE] Adding to info_hash {} peer_id {} at {}:{}", request.info_hash, request.peer_id, peer.host, peer.port);
        torrent.add_peer(peer);

        // Counts come from the same snapshot as the peer list.
        let peers = torrent.get_peers();
        let complete = peers.iter().filter(|peer| peer.is_seeder()).count();
        let incomplete = peers.len() - complete;

        let peers_value = if request.compact {
            let mut blob: Vec<u8> = Vec::with_capacity(peers.len() * 6);
            for peer in peers.iter() {
                // Swarm members were validated on the way in.
                if let Ok(compact) = peer.to_compact() {
                    blob.extend_from_slice(&compact);
                }
            }
            bencode_bytes!(blob)
        } else {
            BencodeValue::List(peers.iter().map(TorrentPeer::to_bencode).collect())
        };

        bencode_map! {
            "interval" => bencode_int!(self.config.tracker_config.request_interval),
            "complete" => bencode_int!(complete),
            "incomplete" => bencode_int!(incomplete),
            "peers" => peers_value
        }.encode()
    }

    /// A bencoded `failure reason` dictionary, with a `failure code` when given.
    pub fn announce_failure(reason: &str, code: Option<i64>) -> Vec<u8>
    {
        let mut response = bencode_map! {
            "failure reason" => bencode_bytes!(reason)
        };
        if let (Some(code), Some(dictionary)) = (code, response.as_dictionary_mut()) {
            dictionary.insert("failure code", bencode_int!(code));
        }
        response.encode()
    }
}
