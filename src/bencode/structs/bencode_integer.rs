/// A bencode integer of any magnitude.
///
/// Held as canonical decimal text: an optional `-`, no leading zeros, and
/// never `-0`. Values that fit are read back with
/// [`BencodeInteger::as_i64`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BencodeInteger {
    pub(crate) digits: String,
}
