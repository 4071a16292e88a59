//! HTTP protocol implementation.
//!
//! This module implements the one-request-per-connection HTTP/1.0 subset
//! the server speaks: read a single request, answer it once, close.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The main connection handler implementing the request-response state machine
//! - **`parser`**: Extracts and vets the request line from the buffered header
//! - **`request`**: Parsed request representation
//! - **`response`**: HTTP response representation
//! - **`writer`**: Serializes and writes HTTP responses to the client
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌───────────────┐
//!        │ ReadingHeader │ ← Accumulate bytes until \r\n\r\n
//!        └───────┬───────┘
//!                │ delimiter found        (read error → Closed, no response)
//!                ▼
//!        ┌───────────────┐
//!        │    Parsing    │ ← Request line checks (method, version)
//!        └───────┬───────┘
//!                │ ok                     (failure → 400)
//!                ▼
//!        ┌────────────────┐
//!        │ ValidatingPath │ ← Traversal guard on the raw path
//!        └───────┬────────┘
//!                │ ok                     (failure → 400)
//!                ▼
//!        ┌───────────────┐
//!        │  LoadingFile  │ ← root + path, whole file into memory
//!        └───────┬───────┘
//!                │ 200 with contents      (failure → 404)
//!                ▼
//!        ┌─────────────────┐
//!        │ WritingResponse │ ← One logical write: header + body
//!        └───────┬─────────┘
//!                │ write done (success or error)
//!                ▼
//!        ┌───────────────┐
//!        │    Closed     │ ← Socket shut down, handler freed
//!        └───────────────┘
//! ```
//!
//! There is no keep-alive edge: every connection makes exactly one pass.

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
