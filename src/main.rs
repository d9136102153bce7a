use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info};
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use warp_tracker::common::common::setup_logging;
use warp_tracker::config::structs::configuration::Configuration;
use warp_tracker::http::http::http_service;
use warp_tracker::structs::Cli;
use warp_tracker::tracker::structs::torrent_tracker::TorrentTracker;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let mut config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };
    if let Some(torrents_dir) = args.torrents_dir.clone() {
        config.tracker_config.torrents_dir = torrents_dir;
    }
    let config = Arc::new(config);

    if let Err(error) = setup_logging(&config) {
        eprintln!("{error}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let mut tracker = TorrentTracker::new(config.clone());
            let loaded = tracker.load_torrents(&config.tracker_config.torrents_dir);
            if loaded == 0 {
                error!("[BOOT] No torrents loaded from {}, every announce will fail", config.tracker_config.torrents_dir);
            }
            let tracker = Arc::new(tracker);

            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(_) => {
                    error!("[BOOT] Unable to install the shutdown handler");
                    exit(1);
                }
            };

            let mut http_handles = Vec::new();
            let mut http_futures = Vec::new();
            for http_server_object in &config.http_server {
                if !http_server_object.enabled {
                    continue;
                }
                let address: SocketAddr = match http_server_object.bind_address.parse() {
                    Ok(address) => address,
                    Err(_) => {
                        error!("[BOOT] Invalid bind address {}", http_server_object.bind_address);
                        exit(1);
                    }
                };
                match http_service(address, tracker.clone(), http_server_object.clone()) {
                    Ok((handle, future)) => {
                        http_handles.push(handle);
                        http_futures.push(future);
                    }
                    Err(error) => {
                        error!("[BOOT] Unable to bind to {}: {}", address, error);
                        exit(1);
                    }
                }
            }

            if !http_futures.is_empty() {
                tokio::spawn(async move {
                    if let Err(error) = try_join_all(http_futures).await {
                        error!("[HTTP] Server error: {error}");
                    }
                });
            }

            let cleanup_interval = config.tracker_config.peers_cleanup_interval;
            if cleanup_interval > 0 {
                info!("[BOOT] Starting thread for peers cleanup with {cleanup_interval} seconds delay...");
                tokio::spawn(TorrentTracker::peers_cleanup_task(tracker.clone(), tokio_shutdown.clone()));
            }

            tokio::signal::ctrl_c().await?;
            info!("Shutdown request received, shutting down...");

            for handle in http_handles {
                handle.stop(true).await;
            }
            tokio_shutdown.handle().await;

            info!("Server shutting down completed");
            Ok::<(), std::io::Error>(())
        })
}
