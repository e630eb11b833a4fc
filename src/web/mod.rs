//! HTTP interface for clause location.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080
//! clause-locator serve
//!
//! # Custom port, bound to all interfaces
//! clause-locator serve --port 3000 --address 0.0.0.0
//! ```
//!
//! ## API Endpoints
//!
//! - `POST /contract-query` - Locate a sentence's clause in a text. The body
//!   is a JSON object with exactly the string keys `"text"` and `"sentence"`.
//!   Malformed bodies get `400` with `{"message": ...}`.

pub mod server;
