use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// Path of the config file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Directory holding the .torrent files, overrides `tracker_config.torrents_dir`.
    #[arg(long)]
    pub torrents_dir: Option<String>,
}
