use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::path::Path;
use std::thread::available_parallelism;
use crate::common::common::log_level_filter;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::tracker_config::TrackerConfig;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            tracker_config: TrackerConfig {
                torrents_dir: String::from("torrents"),
                announce_url: String::new(),
                request_interval: 60,
                peers_timeout: 7200,
                peers_cleanup_interval: 900,
            },
            http_server: vec!(
                HttpTrackersConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:1717"),
                    real_ip: String::new(),
                    keep_alive: 60,
                    request_timeout: 15,
                    disconnect_timeout: 15,
                    threads: available_parallelism().map(|threads| threads.get() as u64).unwrap_or(1),
                }
            ),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file<P: AsRef<Path>>(path: P, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    /// Loads and validates `path`.
    ///
    /// With `create` set, a missing or unreadable file is replaced by the
    /// defaults and an error is still returned so the operator can review it
    /// before starting the tracker.
    pub fn load_from_file<P: AsRef<Path>>(path: P, create: bool) -> Result<Configuration, CustomError> {
        let path = path.as_ref();
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path.display());
                    return Err(CustomError::new(&format!("will not create automatically {} file", path.display())));
                }
                eprintln!("Creating config file..");

                let save_file = toml::to_string(&Configuration::init())
                    .map_err(ConfigurationError::from)
                    .and_then(|config_toml| Configuration::save_file(path, config_toml));
                return match save_file {
                    Ok(_) => {
                        eprintln!("Please edit {} and start the tracker again, exiting now...", path.display());
                        Err(CustomError::new(&format!("created {} file", path.display())))
                    }
                    Err(e) => {
                        eprintln!("{} file could not be created, check permissions...", path.display());
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {} file", path.display())))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate().map_err(|error| CustomError::new(&error.to_string()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if log_level_filter(&self.log_level).is_none() {
            return Err(ConfigurationError::ValidationError(format!("unknown log_level '{}'", self.log_level)));
        }
        if self.tracker_config.torrents_dir.is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("tracker_config.torrents_dir is empty")));
        }
        for http_server in self.http_server.iter() {
            if http_server.bind_address.parse::<SocketAddr>().is_err() {
                return Err(ConfigurationError::ValidationError(format!("invalid http_server bind_address '{}'", http_server.bind_address)));
            }
            if http_server.threads == 0 {
                return Err(ConfigurationError::ValidationError(format!("http_server {} needs at least one thread", http_server.bind_address)));
            }
        }
        Ok(())
    }
}
