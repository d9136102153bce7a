use std::collections::BTreeSet;
use std::time::{Duration, Instant};
use parking_lot::RwLock;
use sha1::{Digest, Sha1};
use crate::bencode::bencode::encode;
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent::Torrent;
use crate::tracker::structs::torrent_peer::TorrentPeer;

impl Torrent {
    /// Builds a torrent from a decoded metafile.
    ///
    /// The info-hash is the SHA-1 of the bencoded `info` value and is fixed
    /// from here on.
    pub fn from_metadata(metadata: BencodeValue, file_name: &str) -> Result<Torrent, TrackerError>
    {
        let dictionary = metadata.as_dictionary()
            .ok_or_else(|| TrackerError::InvalidMetadata(format!("{file_name}: metadata is not a dictionary")))?;
        let info = dictionary.get(b"info")
            .ok_or_else(|| TrackerError::InvalidMetadata(format!("{file_name}: missing info key")))?;

        let mut hasher = Sha1::new();
        hasher.update(encode(info));
        let mut info_hash = [0u8; 20];
        info_hash.copy_from_slice(hasher.finalize().as_slice());

        Ok(Torrent {
            info_hash: InfoHash(info_hash),
            file_name: file_name.to_string(),
            metadata,
            swarm: RwLock::new(BTreeSet::new()),
        })
    }

    pub fn info_hash(&self) -> InfoHash
    {
        self.info_hash
    }

    pub fn file_name(&self) -> &str
    {
        &self.file_name
    }

    pub fn metadata(&self) -> &BencodeValue
    {
        &self.metadata
    }

    pub fn info(&self) -> Option<&BencodeValue>
    {
        self.metadata.get(b"info")
    }

    /// Points the metafile at another tracker. The info-hash is untouched.
    pub fn set_announce(&mut self, url: &str)
    {
        if let Some(dictionary) = self.metadata.as_dictionary_mut() {
            dictionary.insert("announce", BencodeValue::from(url));
        }
    }

    /// The metafile as it would be served, including any rewritten announce URL.
    pub fn to_bytes(&self) -> Vec<u8>
    {
        encode(&self.metadata)
    }

    /// Inserts `peer`, replacing the swarm member with the same address.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn add_peer(&self, peer: TorrentPeer)
    {
        self.swarm.write().replace(peer);
    }

    /// A copy of the swarm at the time of the call.
    pub fn get_peers(&self) -> Vec<TorrentPeer>
    {
        self.swarm.read().iter().cloned().collect()
    }

    pub fn swarm_len(&self) -> usize
    {
        self.swarm.read().len()
    }

    /// Returns `(seeders, leechers)`.
    pub fn swarm_counts(&self) -> (u64, u64)
    {
        let swarm = self.swarm.read();
        let seeders = swarm.iter().filter(|peer| peer.is_seeder()).count() as u64;
        (seeders, swarm.len() as u64 - seeders)
    }

    /// Drops every peer that has not announced within `timeout`, returning how many went.
    pub fn remove_expired_peers(&self, now: Instant, timeout: Duration) -> u64
    {
        let mut swarm = self.swarm.write();
        let before = swarm.len();
        swarm.retain(|peer| peer.alive(now, timeout));
        (before - swarm.len()) as u64
    }
}
