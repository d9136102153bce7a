#![allow(dead_code)]
use rand::RngExt;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use warp_tracker::bencode::enums::bencode_value::BencodeValue;
use warp_tracker::config::structs::configuration::Configuration;
use warp_tracker::config::structs::http_trackers_config::HttpTrackersConfig;
use warp_tracker::tracker::structs::info_hash::InfoHash;
use warp_tracker::tracker::structs::peer_id::PeerId;
use warp_tracker::tracker::structs::torrent_tracker::TorrentTracker;
use warp_tracker::{bencode_bytes, bencode_int, bencode_map};

pub type TestTracker = Arc<TorrentTracker>;
pub type TestConfig = Arc<Configuration>;

pub fn create_test_config() -> TestConfig {
    let mut config: Configuration = Configuration::init();
    config.tracker_config.announce_url = String::new();
    config.http_server[0].bind_address = "127.0.0.1:1717".to_string();
    config.http_server[0].real_ip = String::new();
    Arc::new(config)
}

pub fn create_test_http_config() -> Arc<HttpTrackersConfig> {
    Arc::new(HttpTrackersConfig {
        enabled: true,
        bind_address: "127.0.0.1:1717".to_string(),
        real_ip: String::from("X-Real-IP"),
        keep_alive: 5,
        request_timeout: 10,
        disconnect_timeout: 5,
        threads: 1,
    })
}

/// A tracker with the given torrent names registered.
pub fn create_test_tracker(names: &[&str]) -> TestTracker {
    let mut tracker = TorrentTracker::new(create_test_config());
    for name in names {
        let torrent = warp_tracker::tracker::structs::torrent::Torrent::from_metadata(
            test_metadata(name),
            &format!("{name}.torrent")
        ).expect("Failed to build test torrent");
        tracker.torrents.register(torrent);
    }
    Arc::new(tracker)
}

pub fn test_metadata(name: &str) -> BencodeValue {
    bencode_map! {
        "announce" => bencode_bytes!("http://localhost:1717/announce"),
        "created by" => bencode_bytes!("warp-tracker tests"),
        "info" => bencode_map! {
            "name" => bencode_bytes!(name),
            "piece length" => bencode_int!(262144),
            "length" => bencode_int!(1048576),
            "pieces" => bencode_bytes!(vec![0u8; 80])
        }
    }
}

pub fn write_torrent_file(dir: &Path, name: &str) -> InfoHash {
    let metadata = test_metadata(name);
    let info_hash = warp_tracker::tracker::structs::torrent::Torrent::from_metadata(metadata.clone(), name)
        .expect("Failed to build test torrent")
        .info_hash();
    std::fs::write(dir.join(format!("{name}.torrent")), metadata.encode()).expect("Failed to write torrent file");
    info_hash
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn random_info_hash() -> InfoHash {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    InfoHash(bytes)
}

pub fn random_peer_id() -> PeerId {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    PeerId(bytes.to_vec())
}

pub fn percent_encode_bytes(data: &[u8]) -> String {
    percent_encoding::percent_encode(data, percent_encoding::NON_ALPHANUMERIC).to_string()
}
