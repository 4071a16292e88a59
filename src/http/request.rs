/// A request extracted from the first line of the header block.
///
/// Only the request line is interpreted. Any further bytes the peer sends
/// before the header delimiter (headers, body fragments) are discarded
/// unread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The method token (always "GET" after a successful parse)
    pub method: String,
    /// The path token, exactly as sent (not decoded, not normalized)
    pub path: String,
    /// The version token (e.g. "HTTP/1.0")
    pub version: String,
}
