#[cfg(test)]
mod tracker_tests {
    use std::collections::HashMap;
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
    use std::sync::Arc;
    use std::time::{Duration, Instant};
    use crate::bencode::bencode::{decode, encode};
    use crate::bencode::enums::bencode_value::BencodeValue;
    use crate::config::structs::configuration::Configuration;
    use crate::tracker::enums::tracker_error::TrackerError;
    use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
    use crate::tracker::structs::info_hash::InfoHash;
    use crate::tracker::structs::peer_id::PeerId;
    use crate::tracker::structs::torrent::Torrent;
    use crate::tracker::structs::torrent_peer::TorrentPeer;
    use crate::tracker::structs::torrent_registry::TorrentRegistry;
    use crate::tracker::structs::torrent_tracker::TorrentTracker;
    use crate::{bencode_bytes, bencode_int, bencode_map};

    fn test_torrent(name: &str) -> Torrent {
        let metadata = bencode_map! {
            "announce" => bencode_bytes!("http://localhost:1717/announce"),
            "info" => bencode_map! {
                "name" => bencode_bytes!(name),
                "piece length" => bencode_int!(16384),
                "length" => bencode_int!(1024)
            }
        };
        Torrent::from_metadata(metadata, &format!("{name}.torrent")).unwrap()
    }

    fn test_peer(host: &str, port: u16, peer_id: &[u8], left: u64) -> TorrentPeer {
        TorrentPeer {
            peer_id: PeerId::from(peer_id),
            host: host.to_string(),
            port,
            left,
            compact: false,
            last_seen: Instant::now(),
        }
    }

    fn test_request(info_hash: InfoHash, host: &str, port: i64, compact: bool) -> AnnounceQueryRequest {
        AnnounceQueryRequest {
            info_hash,
            peer_id: PeerId::from(&b"-WT0300-abcdefghijkl"[..]),
            host: host.to_string(),
            port,
            left: 100,
            compact,
        }
    }

    fn test_tracker(torrents: Vec<Torrent>) -> TorrentTracker {
        let mut tracker = TorrentTracker::new(Arc::new(Configuration::init()));
        for torrent in torrents {
            tracker.torrents.register(torrent);
        }
        tracker
    }

    #[test]
    fn test_info_hash_of_byte_string_info() {
        let metadata = bencode_map! { "info" => bencode_bytes!("info") };
        let torrent = Torrent::from_metadata(metadata, "info.torrent").unwrap();
        assert_eq!(torrent.info_hash().to_string(), "59bd0a3ff43b32849b319e645d4798d8a5d1e889");
    }

    #[test]
    fn test_info_hash_matches_sha1_of_encoded_info() {
        let torrent = test_torrent("alpha");
        let info = torrent.info().unwrap();
        let expected = {
            use sha1::{Digest, Sha1};
            let mut hasher = Sha1::new();
            hasher.update(encode(info));
            <[u8; 20]>::try_from(hasher.finalize().as_slice()).unwrap()
        };
        assert_eq!(torrent.info_hash(), InfoHash(expected));
    }

    #[test]
    fn test_from_metadata_rejects_bad_metadata() {
        assert!(matches!(
            Torrent::from_metadata(bencode_int!(1), "x.torrent"),
            Err(TrackerError::InvalidMetadata(_))
        ));
        assert!(matches!(
            Torrent::from_metadata(bencode_map! { "announce" => bencode_bytes!("x") }, "x.torrent"),
            Err(TrackerError::InvalidMetadata(_))
        ));
    }

    #[test]
    fn test_set_announce_keeps_info_hash() {
        let mut torrent = test_torrent("alpha");
        let before = torrent.info_hash();
        torrent.set_announce("http://tracker.example:1717/announce");
        assert_eq!(torrent.info_hash(), before);
        let reencoded = decode(&torrent.to_bytes()).unwrap();
        assert_eq!(reencoded.get(b"announce").and_then(|v| v.as_str()), Some("http://tracker.example:1717/announce"));
        assert_eq!(Torrent::from_metadata(reencoded, "alpha.torrent").unwrap().info_hash(), before);
    }

    #[test]
    fn test_info_hash_parse_and_display() {
        let hash: InfoHash = "59bd0a3ff43b32849b319e645d4798d8a5d1e889".parse().unwrap();
        assert_eq!(hash.0[0], 0x59);
        assert_eq!(hash.to_string(), "59bd0a3ff43b32849b319e645d4798d8a5d1e889");
        assert!("59bd".parse::<InfoHash>().is_err());
        assert!(InfoHash::try_from(&[0u8; 19][..]).is_err());
    }

    #[test]
    fn test_ip4_to_bytes() {
        assert_eq!(TorrentPeer::ip4_to_bytes("46.163.130.47").unwrap(), [0x2e, 0xa3, 0x82, 0x2f]);
        assert_eq!(TorrentPeer::ip4_to_bytes("0.0.0.0").unwrap(), [0, 0, 0, 0]);
        for host in ["256.1.1.1", "1.2.3", "1.2.3.4.5", "a.b.c.d", "::1", "", "1..2.3", "+1.2.3.4"] {
            assert!(matches!(TorrentPeer::ip4_to_bytes(host), Err(TrackerError::InvalidAddress(_))), "{host}");
        }
    }

    #[test]
    fn test_port_to_bytes() {
        assert_eq!(TorrentPeer::port_to_bytes(59568).unwrap(), [0xe8, 0xb0]);
        assert_eq!(TorrentPeer::port_to_bytes(0).unwrap(), [0, 0]);
        assert_eq!(TorrentPeer::port_to_bytes(65535).unwrap(), [0xff, 0xff]);
        assert!(matches!(TorrentPeer::port_to_bytes(65536), Err(TrackerError::PortOutOfRange(65536))));
        assert!(matches!(TorrentPeer::port_to_bytes(-1), Err(TrackerError::PortOutOfRange(-1))));
    }

    #[test]
    fn test_peer_identity_ignores_peer_id() {
        let first = test_peer("10.0.0.1", 6881, b"first", 10);
        let second = test_peer("10.0.0.1", 6881, b"second", 0);
        let other_port = test_peer("10.0.0.1", 6882, b"first", 10);
        assert_eq!(first, second);
        assert_ne!(first, other_port);
    }

    #[test]
    fn test_peer_wire_forms() {
        let peer = test_peer("46.163.130.47", 59568, b"abc", 0);
        assert_eq!(peer.to_compact().unwrap(), [0x2e, 0xa3, 0x82, 0x2f, 0xe8, 0xb0]);
        assert_eq!(encode(&peer.to_bencode()), b"d2:ip13:46.163.130.477:peer id3:abc4:porti59568ee".to_vec());
        assert!(peer.is_seeder());
        assert!(!peer.is_leecher());
    }

    #[test]
    fn test_peer_alive() {
        let peer = test_peer("10.0.0.1", 6881, b"a", 1);
        let timeout = Duration::from_secs(60);
        assert!(peer.alive(peer.last_seen, timeout));
        assert!(peer.alive(peer.last_seen + timeout, timeout));
        assert!(!peer.alive(peer.last_seen + timeout + Duration::from_secs(1), timeout));
    }

    #[test]
    fn test_add_peer_upserts_by_address() {
        let torrent = test_torrent("alpha");
        torrent.add_peer(test_peer("10.0.0.1", 6881, b"first", 10));
        torrent.add_peer(test_peer("10.0.0.1", 6881, b"second", 0));
        let peers = torrent.get_peers();
        assert_eq!(peers.len(), 1);
        assert_eq!(peers[0].peer_id, PeerId::from(&b"second"[..]));
        assert_eq!(torrent.swarm_counts(), (1, 0));

        torrent.add_peer(test_peer("10.0.0.2", 6881, b"third", 5));
        assert_eq!(torrent.swarm_len(), 2);
        assert_eq!(torrent.swarm_counts(), (1, 1));
    }

    #[test]
    fn test_get_peers_is_a_snapshot() {
        let torrent = test_torrent("alpha");
        torrent.add_peer(test_peer("10.0.0.1", 6881, b"a", 1));
        let snapshot = torrent.get_peers();
        torrent.add_peer(test_peer("10.0.0.2", 6881, b"b", 1));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(torrent.swarm_len(), 2);
    }

    #[test]
    fn test_remove_expired_peers() {
        let torrent = test_torrent("alpha");
        let stale = test_peer("10.0.0.1", 6881, b"a", 1);
        let mut fresh = test_peer("10.0.0.2", 6881, b"b", 1);
        let now = stale.last_seen + Duration::from_secs(120);
        fresh.last_seen = now;
        torrent.add_peer(stale);
        torrent.add_peer(fresh);

        assert_eq!(torrent.remove_expired_peers(now, Duration::from_secs(60)), 1);
        let peers = torrent.get_peers();
        assert_eq!(peers.len(), 1);
        assert_eq!(peers[0].host, "10.0.0.2");
    }

    #[test]
    fn test_registry_first_registration_wins() {
        let mut registry = TorrentRegistry::new();
        assert!(registry.register(test_torrent("alpha")));
        let mut duplicate = test_torrent("alpha");
        duplicate.file_name = String::from("copy.torrent");
        assert!(!registry.register(duplicate));
        assert!(registry.register(test_torrent("beta")));

        assert_eq!(registry.len(), 2);
        let info_hash = test_torrent("alpha").info_hash();
        assert_eq!(registry.by_info_hash(&info_hash).unwrap().file_name(), "alpha.torrent");
        assert!(matches!(registry.by_file_name("copy.torrent"), Err(TrackerError::TorrentNotFound(_))));
        assert_eq!(registry.by_file_name("beta.torrent").unwrap().file_name(), "beta.torrent");
        let names: Vec<&str> = registry.all().iter().map(|torrent| torrent.file_name()).collect();
        assert_eq!(names, vec!["alpha.torrent", "beta.torrent"]);
    }

    #[test]
    fn test_registry_unknown_info_hash() {
        let registry = TorrentRegistry::new();
        assert!(registry.is_empty());
        assert!(matches!(registry.by_info_hash(&InfoHash([1u8; 20])), Err(TrackerError::InfoHashNotFound(_))));
    }

    #[test]
    fn test_announce_unknown_info_hash() {
        let tracker = test_tracker(vec![test_torrent("alpha")]);
        let response = tracker.announce(&test_request(InfoHash([7u8; 20]), "10.0.0.1", 6881, true));
        assert_eq!(response, b"d12:failure codei200e14:failure reason22:Torrent not registerede".to_vec());
        assert_eq!(tracker.torrents.all()[0].swarm_len(), 0);
    }

    #[test]
    fn test_announce_compact() {
        let torrent = test_torrent("alpha");
        let info_hash = torrent.info_hash();
        let tracker = test_tracker(vec![torrent]);

        tracker.announce(&test_request(info_hash, "46.163.130.47", 59568, true));
        let response = decode(&tracker.announce(&test_request(info_hash, "10.0.0.1", 6881, true))).unwrap();

        assert_eq!(response.get(b"interval"), Some(&bencode_int!(60)));
        assert_eq!(response.get(b"complete"), Some(&bencode_int!(0)));
        assert_eq!(response.get(b"incomplete"), Some(&bencode_int!(2)));
        assert_eq!(
            response.get(b"peers").and_then(|v| v.as_bytes()),
            Some(&[10, 0, 0, 1, 0x1a, 0xe1, 0x2e, 0xa3, 0x82, 0x2f, 0xe8, 0xb0][..])
        );
    }

    #[test]
    fn test_announce_non_compact_includes_self() {
        let torrent = test_torrent("alpha");
        let info_hash = torrent.info_hash();
        let tracker = test_tracker(vec![torrent]);

        let response = decode(&tracker.announce(&test_request(info_hash, "10.0.0.1", 6881, false))).unwrap();
        let peers = response.get(b"peers").and_then(|v| v.as_list()).unwrap();
        assert_eq!(peers.len(), 1);
        assert_eq!(peers[0].get(b"ip").and_then(|v| v.as_str()), Some("10.0.0.1"));
        assert_eq!(peers[0].get(b"port").and_then(|v| v.as_integer()), Some(6881));
        assert_eq!(peers[0].get(b"peer id").and_then(|v| v.as_bytes()), Some(&b"-WT0300-abcdefghijkl"[..]));
    }

    #[test]
    fn test_announce_repeat_keeps_swarm_size() {
        let torrent = test_torrent("alpha");
        let info_hash = torrent.info_hash();
        let tracker = test_tracker(vec![torrent]);

        tracker.announce(&test_request(info_hash, "10.0.0.1", 6881, true));
        tracker.announce(&test_request(info_hash, "10.0.0.1", 6881, true));
        assert_eq!(tracker.torrents.by_info_hash(&info_hash).unwrap().swarm_len(), 1);
        tracker.announce(&test_request(info_hash, "10.0.0.2", 6881, true));
        assert_eq!(tracker.torrents.by_info_hash(&info_hash).unwrap().swarm_len(), 2);
    }

    #[test]
    fn test_announce_rejects_bad_peer_without_mutation() {
        let torrent = test_torrent("alpha");
        let info_hash = torrent.info_hash();
        let tracker = test_tracker(vec![torrent]);

        let response = decode(&tracker.announce(&test_request(info_hash, "10.0.0.1", 70000, true))).unwrap();
        assert_eq!(response.get(b"failure reason").and_then(|v| v.as_str()), Some("peer port 70000 out of range"));
        let response = decode(&tracker.announce(&test_request(info_hash, "::1", 6881, true))).unwrap();
        assert_eq!(response.get(b"failure reason").and_then(|v| v.as_str()), Some("invalid peer address ::1"));
        assert_eq!(tracker.torrents.by_info_hash(&info_hash).unwrap().swarm_len(), 0);
    }

    #[test]
    fn test_validate_announce() {
        let tracker = test_tracker(Vec::new());
        let mut query: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
        query.insert(String::from("info_hash"), vec![vec![0xaa; 20]]);
        query.insert(String::from("peer_id"), vec![b"-WT0300-abcdefghijkl".to_vec()]);
        query.insert(String::from("port"), vec![b"6881".to_vec()]);
        query.insert(String::from("left"), vec![b"0".to_vec()]);
        query.insert(String::from("compact"), vec![b"1".to_vec()]);

        let remote = IpAddr::V6(Ipv4Addr::new(192, 168, 1, 5).to_ipv6_mapped());
        let request = tracker.validate_announce(remote, query.clone()).unwrap();
        assert_eq!(request.info_hash, InfoHash([0xaa; 20]));
        assert_eq!(request.host, "192.168.1.5");
        assert_eq!(request.port, 6881);
        assert_eq!(request.left, 0);
        assert!(request.compact);

        let mut short_hash = query.clone();
        short_hash.insert(String::from("info_hash"), vec![vec![0xaa; 19]]);
        assert_eq!(tracker.validate_announce(remote, short_hash).unwrap_err().to_string(), "invalid info_hash size");

        let mut no_port = query.clone();
        no_port.remove("port");
        assert_eq!(tracker.validate_announce(remote, no_port).unwrap_err().to_string(), "missing port");

        let mut bad_left = query.clone();
        bad_left.insert(String::from("left"), vec![b"lots".to_vec()]);
        assert_eq!(tracker.validate_announce(remote, bad_left).unwrap_err().to_string(), "missing or invalid left");

        let mut no_compact = query;
        no_compact.remove("compact");
        let ipv6 = IpAddr::V6(Ipv6Addr::LOCALHOST);
        let request = tracker.validate_announce(ipv6, no_compact).unwrap();
        assert!(!request.compact);
        assert_eq!(request.host, "::1");
    }

    #[test]
    fn test_cleanup_peers() {
        let torrent = test_torrent("alpha");
        let info_hash = torrent.info_hash();
        let tracker = test_tracker(vec![torrent]);
        tracker.announce(&test_request(info_hash, "10.0.0.1", 6881, true));
        assert_eq!(tracker.cleanup_peers(Duration::from_secs(3600)), 0);
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(tracker.cleanup_peers(Duration::from_millis(1)), 1);
        assert_eq!(tracker.torrents.by_info_hash(&info_hash).unwrap().swarm_len(), 0);
    }
}
