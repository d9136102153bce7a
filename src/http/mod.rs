//! HTTP tracker transport.
//!
//! Serves `GET /announce` over actix-web and answers every other path with
//! a bencoded 404. Query values are percent-decoded to raw bytes before
//! validation, so binary `info_hash` and `peer_id` values survive.
//!
//! # Response Format
//!
//! Responses are bencoded dictionaries sent as `text/plain`. Protocol
//! failures (unknown torrent, bad parameters) still answer `200 OK` with a
//! `failure reason` entry.

/// Data structures for HTTP request handling.
pub mod structs;

/// Type aliases for HTTP module.
pub mod types;

/// Core HTTP service implementation.
#[allow(clippy::module_inception)]
pub mod http;
