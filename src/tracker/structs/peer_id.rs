/// Peer identifier supplied by the client in its announce.
///
/// Treated as opaque bytes. Most clients send 20 bytes, nothing here relies
/// on that.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug, Default)]
pub struct PeerId(pub Vec<u8>);
