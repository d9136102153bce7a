/// A validation failure on an incoming request.
///
/// The message is sent back to the client verbatim as the
/// `failure reason` of a bencoded response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomError {
    pub(crate) message: String,
}
