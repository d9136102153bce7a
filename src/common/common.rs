use std::collections::HashMap;
use std::time::Duration;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use tokio_shutdown::Shutdown;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

/// Splits a raw query string into its parameters.
///
/// Keys are percent-decoded and lowercased. Values are percent-decoded to raw
/// bytes so binary `info_hash` and `peer_id` values survive. A repeated key
/// collects every value in order, a key without `=` maps to an empty list.
pub fn parse_query(query: Option<String>) -> Result<HashMap<String, Vec<Vec<u8>>>, CustomError> {
    let mut queries: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
    let Some(raw_query) = query else {
        return Ok(queries);
    };

    for query_item in raw_query.split('&') {
        if query_item.is_empty() {
            continue;
        }
        match query_item.split_once('=') {
            Some((key_name_raw, value_data_raw)) => {
                let key_name = percent_encoding::percent_decode_str(key_name_raw).decode_utf8_lossy().to_lowercase();
                if key_name.is_empty() {
                    continue;
                }
                let value_data = percent_encoding::percent_decode_str(value_data_raw).collect::<Vec<u8>>();
                queries.entry(key_name).or_default().push(value_data);
            }
            None => {
                let key_name = percent_encoding::percent_decode_str(query_item).decode_utf8_lossy().to_lowercase();
                if !key_name.is_empty() {
                    queries.entry(key_name).or_default();
                }
            }
        }
    }

    Ok(queries)
}

/// Maps a configured `log_level` onto a filter, `None` when it is unknown.
pub fn log_level_filter(log_level: &str) -> Option<log::LevelFilter> {
    match log_level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), CustomError>
{
    let level = log_level_filter(config.log_level.as_str())
        .ok_or_else(|| CustomError::new(&format!("Unknown log level encountered: '{}'", config.log_level)))?;

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
        .map_err(|_| CustomError::new("Failed to initialize logging."))?;

    info!("logging initialized.");
    Ok(())
}

/// Sleeps for `duration` unless shutdown is signalled first.
///
/// Returns `true` when the wait ended because of the shutdown.
pub async fn shutdown_waiting(duration: Duration, shutdown: Shutdown) -> bool
{
    tokio::select! {
        _ = tokio::time::sleep(duration) => false,
        _ = shutdown.handle() => true,
    }
}
