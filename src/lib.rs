//! # Warp Tracker
//!
//! A small, in-memory BitTorrent tracker built on actix-web.
//!
//! ## Overview
//!
//! At startup the tracker reads every `.torrent` file of a directory, derives
//! each info-hash from the bencoded `info` value and serves HTTP announces
//! for those torrents only. Swarms live in memory and are swept for peers
//! that stopped announcing.
//!
//! ## BEP Compliance
//!
//! - BEP 3: The BitTorrent Protocol Specification (bencoding, announce)
//! - BEP 23: Tracker Returns Compact Peer Lists
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use warp_tracker::config::structs::configuration::Configuration;
//! use warp_tracker::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let config = Arc::new(Configuration::init());
//! let mut tracker = TorrentTracker::new(config.clone());
//! tracker.load_torrents(&config.tracker_config.torrents_dir);
//! let tracker = Arc::new(tracker);
//! ```
//!
//! ## Modules
//!
//! - [`bencode`] - Bencode codec
//! - [`common`] - Query parsing, logging setup and shared helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`http`] - HTTP tracker transport
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - Torrent model, registry and announce handling

/// Bencode codec.
///
/// Decodes and encodes the four bencode value kinds. Decoding tolerates
/// non-canonical input, encoding always sorts dictionary keys.
pub mod bencode;

/// Common utilities and shared functionality.
///
/// Contains helper functions for query parsing, logging setup, shutdown-aware
/// waiting and request error handling.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
pub mod config;

/// HTTP tracker transport.
///
/// Serves announce requests over HTTP and renders tracker failures as
/// bencoded dictionaries.
pub mod http;

/// CLI argument parsing.
pub mod structs;

/// Core tracker logic module.
///
/// Contains the torrent and peer model, the registry of loaded torrents,
/// metafile loading, peer expiry and the announce handling logic.
pub mod tracker;
