use thiserror::Error;

/// Failure while decoding bencoded input.
///
/// Every variant carries the byte offset at which decoding stopped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BencodeError {
    #[error("malformed byte string length at offset {0}")]
    MalformedLength(usize),

    #[error("malformed integer at offset {0}")]
    MalformedInteger(usize),

    #[error("truncated input at offset {0}")]
    TruncatedInput(usize),

    #[error("unexpected token at offset {0}")]
    UnexpectedToken(usize),

    #[error("dictionary key is not a byte string at offset {0}")]
    InvalidKeyType(usize),

    #[error("trailing data after value at offset {0}")]
    TrailingData(usize),
}
