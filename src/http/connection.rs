use std::rc::Rc;

use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

use crate::files;
use crate::http::parser;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Handler owning one accepted connection.
///
/// The socket and every per-connection buffer belong to this connection
/// alone; nothing is shared with other connections except the read-only
/// root directory. The handler serves exactly one request and always ends
/// with the socket closed.
pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    root: Rc<str>,
    state: ConnectionState,
}

/// Per-connection lifecycle. Every path through the machine ends in
/// `Closed`; there is no keep-alive edge back to `ReadingHeader`.
enum ConnectionState {
    /// Accumulating bytes until the header delimiter shows up.
    ReadingHeader,
    /// Header complete; check the request line.
    Parsing,
    /// Request line accepted; vet the path before it reaches the filesystem.
    ValidatingPath(Request),
    /// Path accepted; pull the file into memory.
    LoadingFile(String),
    /// Response composed; flush it to the peer.
    WritingResponse(ResponseWriter),
    /// Socket torn down.
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, root: Rc<str>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            root,
            state: ConnectionState::ReadingHeader,
        }
    }

    /// Drives the state machine until the socket is closed.
    ///
    /// Protocol and file errors are answered on the wire (400/404) and are
    /// not errors of this function. A transport failure is returned to the
    /// caller after teardown, for logging; it never affects any other
    /// connection.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut failure = None;

        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::ReadingHeader => match self.read_header().await {
                    Ok(()) => self.state = ConnectionState::Parsing,
                    // No response once the read has failed; just tear down.
                    Err(e) => failure = Some(e),
                },

                ConnectionState::Parsing => {
                    let line = {
                        let head = String::from_utf8_lossy(&self.buffer);
                        head.lines().next().unwrap_or("").to_owned()
                    };

                    match parser::parse_request_line(&line) {
                        Ok(req) => self.state = ConnectionState::ValidatingPath(req),
                        Err(e) => {
                            debug!(error = ?e, "rejecting request line");
                            self.respond(Response::bad_request());
                        }
                    }
                }

                ConnectionState::ValidatingPath(req) => {
                    match parser::validate_path(&req.path) {
                        Ok(()) => {
                            debug!(method = %req.method, path = %req.path, "request accepted");
                            self.state = ConnectionState::LoadingFile(req.path);
                        }
                        Err(e) => {
                            debug!(path = %req.path, error = ?e, "rejecting path");
                            self.respond(Response::bad_request());
                        }
                    }
                }

                ConnectionState::LoadingFile(path) => {
                    // Blocking read: the event loop stalls until the file
                    // is in memory.
                    match files::load(&self.root, &path) {
                        Ok(contents) => self.respond(Response::ok(contents)),
                        Err(e) => {
                            debug!(path = %path, error = %e, "file load failed");
                            self.respond(Response::not_found());
                        }
                    }
                }

                ConnectionState::WritingResponse(mut writer) => {
                    // A failed write still falls through to teardown.
                    if let Err(e) = writer.write_to_stream(&mut self.stream).await {
                        failure = Some(e);
                    }
                }

                ConnectionState::Closed => {
                    // Teardown errors are ignored.
                    let _ = self.stream.shutdown().await;
                    break;
                }
            }
        }

        match failure {
            None => Ok(()),
            Some(e) => Err(e),
        }
    }

    /// Accumulates bytes until the header delimiter is in the buffer.
    ///
    /// The buffer is unbounded: a peer that trickles bytes without ever
    /// finishing its header holds the handler (and the buffer) open
    /// indefinitely. EOF or a socket error before the delimiter means no
    /// response is sent at all.
    async fn read_header(&mut self) -> anyhow::Result<()> {
        loop {
            if parser::find_header_end(&self.buffer).is_some() {
                return Ok(());
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                anyhow::bail!("connection closed before end of header");
            }
        }
    }

    /// Queues the single response this connection will ever send.
    fn respond(&mut self, response: Response) {
        self.state = ConnectionState::WritingResponse(ResponseWriter::new(&response));
    }
}
