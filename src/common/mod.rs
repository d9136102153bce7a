//! Common utilities and shared functionality.
//!
//! Helpers used across the tracker: query string parsing, logging setup and
//! shutdown-aware waiting, plus the `CustomError` type for request
//! validation failures.
//!
//! # Example
//!
//! ```rust
//! use warp_tracker::common::common::parse_query;
//!
//! let params = parse_query(Some(String::from("info_hash=%ab%cd&compact=1"))).unwrap();
//! assert_eq!(params["info_hash"], vec![vec![0xab, 0xcd]]);
//! assert_eq!(params["compact"], vec![b"1".to_vec()]);
//! ```

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
