//! Configuration management module.
//!
//! Loads the tracker configuration from a TOML file, writes out a default
//! one on request and validates the values the rest of the tracker relies on.
//!
//! # Configuration Structure
//!
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **tracker_config**: torrents directory, announce URL rewrite, announce
//!   interval and peer expiry
//! - **http_server**: one entry per HTTP listener
//!
//! # Example
//!
//! ```rust,no_run
//! use warp_tracker::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false).unwrap();
//! println!("serving torrents from {}", config.tracker_config.torrents_dir);
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
