use crate::http::request::Request;

/// Protocol-level rejections. Every variant is answered with 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    UnsupportedMethod,
    UnsupportedVersion,
    EmptyPath,
    PathTraversal,
}

/// Locates the end of the header block.
///
/// Returns the offset of the `\r\n\r\n` delimiter, or `None` while the
/// buffer is still incomplete.
pub fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|w| w == b"\r\n\r\n")
}

/// Parses the request line into its three tokens.
///
/// Tokenizes by whitespace; missing tokens behave as empty strings, so
/// short or garbled lines fall through the same checks as well-formed
/// ones. The method must be exactly `GET` (case-sensitive) and the version
/// must start with `HTTP/1.`. The path comes back exactly as the client
/// sent it.
pub fn parse_request_line(line: &str) -> Result<Request, RequestError> {
    let mut parts = line.split_whitespace();

    let method = parts.next().unwrap_or("");
    if method != "GET" {
        return Err(RequestError::UnsupportedMethod);
    }

    let path = parts.next().unwrap_or("");

    let version = parts.next().unwrap_or("");
    if !version.starts_with("HTTP/1.") {
        return Err(RequestError::UnsupportedVersion);
    }

    Ok(Request {
        method: method.to_string(),
        path: path.to_string(),
        version: version.to_string(),
    })
}

/// Rejects paths the file loader must never see: empty ones, and anything
/// containing `..`.
///
/// The guard is a plain substring check. It does not canonicalize, so
/// absolute paths and percent-encoded variants pass through it.
pub fn validate_path(path: &str) -> Result<(), RequestError> {
    if path.is_empty() {
        return Err(RequestError::EmptyPath);
    }
    if path.contains("..") {
        return Err(RequestError::PathTraversal);
    }
    Ok(())
}
