/// HTTP status codes the server can produce. There are exactly three:
/// - `Ok` (200): file found and loaded
/// - `BadRequest` (400): the request failed a protocol or path check
/// - `NotFound` (404): the file could not be opened or sized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use minihttpd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use minihttpd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// A composed response, ready for serialization.
///
/// Error responses carry no body and no headers; only a 200 gets the file
/// contents plus `Content-Type` and `Content-Length` on the wire.
#[derive(Debug, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Response body as bytes (empty for non-200)
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a 200 OK response carrying the loaded file.
    pub fn ok(body: Vec<u8>) -> Self {
        Self {
            status: StatusCode::Ok,
            body,
        }
    }

    /// Creates a 400 Bad Request response.
    pub fn bad_request() -> Self {
        Self {
            status: StatusCode::BadRequest,
            body: Vec::new(),
        }
    }

    /// Creates a 404 Not Found response.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NotFound,
            body: Vec::new(),
        }
    }
}
