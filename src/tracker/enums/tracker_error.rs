use thiserror::Error;
use crate::bencode::enums::bencode_error::BencodeError;
use crate::tracker::structs::info_hash::InfoHash;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("unknown info_hash {0}")]
    InfoHashNotFound(InfoHash),

    #[error("unknown torrent file {0}")]
    TorrentNotFound(String),

    #[error("invalid peer address {0}")]
    InvalidAddress(String),

    #[error("peer port {0} out of range")]
    PortOutOfRange(i64),

    #[error("invalid torrent metadata: {0}")]
    InvalidMetadata(String),

    #[error("bencode error: {0}")]
    Bencode(#[from] BencodeError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
