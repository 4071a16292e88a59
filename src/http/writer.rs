use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::response::{Response, StatusCode};

const HTTP_VERSION: &str = "HTTP/1.0";

fn serialize_response(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::with_capacity(64 + resp.body.len());

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers exist only on a 200
    if resp.status == StatusCode::Ok {
        buf.extend_from_slice(b"Content-Type: text/html\r\n");
        buf.extend_from_slice(format!("Content-Length: {}\r\n", resp.body.len()).as_bytes());
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    // Body (empty for non-200)
    buf.extend_from_slice(&resp.body);

    buf
}

/// Owns the serialized response and tracks partial-write progress, so
/// header and body leave as one logical write.
pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    pub async fn write_to_stream(
        &mut self,
        stream: &mut TcpStream,
    ) -> anyhow::Result<()> {
        while self.written < self.buffer.len() {
            let n = stream
                .write(&self.buffer[self.written..])
                .await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_ok_with_body() {
        let bytes = serialize_response(&Response::ok(b"hi".to_vec()));

        assert_eq!(
            bytes,
            b"HTTP/1.0 200 OK\r\nContent-Type: text/html\r\nContent-Length: 2\r\n\r\nhi"
        );
    }

    #[test]
    fn serialize_bad_request_is_bare() {
        let bytes = serialize_response(&Response::bad_request());

        assert_eq!(bytes, b"HTTP/1.0 400 Bad Request\r\n\r\n");
    }

    #[test]
    fn serialize_not_found_is_bare() {
        let bytes = serialize_response(&Response::not_found());

        assert_eq!(bytes, b"HTTP/1.0 404 Not Found\r\n\r\n");
    }

    #[test]
    fn serialize_ok_empty_file() {
        let bytes = serialize_response(&Response::ok(Vec::new()));

        assert_eq!(
            bytes,
            b"HTTP/1.0 200 OK\r\nContent-Type: text/html\r\nContent-Length: 0\r\n\r\n"
        );
    }
}
