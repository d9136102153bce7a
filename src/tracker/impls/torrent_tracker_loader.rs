use std::fs;
use std::path::Path;
use log::{debug, error, info, warn};
use crate::bencode::bencode::decode;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::torrent::Torrent;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    /// Registers every regular file directly inside `dir` as a metafile,
    /// whatever its extension.
    ///
    /// Files that cannot be read or decoded are skipped with a warning, as is
    /// a torrent whose info-hash is already registered. Returns how many
    /// torrents were added.
    pub fn load_torrents<P: AsRef<Path>>(&mut self, dir: P) -> usize
    {
        let dir = dir.as_ref();
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(error) => {
                error!("[LOADER] Unable to read torrents directory {}: {}", dir.display(), error);
                return 0;
            }
        };

        let mut paths: Vec<_> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        paths.sort();

        let mut loaded = 0usize;
        for path in paths {
            match self.load_torrent_file(&path) {
                Ok(torrent) => {
                    let info_hash = torrent.info_hash();
                    if self.torrents.register(torrent) {
                        debug!("[LOADER] Registered {} as {}", path.display(), info_hash);
                        loaded += 1;
                    } else {
                        debug!("[LOADER] Ignoring {}, info_hash {} already registered", path.display(), info_hash);
                    }
                }
                Err(error) => {
                    warn!("[LOADER] Skipping {}: {}", path.display(), error);
                }
            }
        }

        info!("[LOADER] Loaded {} torrents from {}", loaded, dir.display());
        loaded
    }

    /// Reads and decodes one metafile, rewriting its announce URL when one is configured.
    pub fn load_torrent_file<P: AsRef<Path>>(&self, path: P) -> Result<Torrent, TrackerError>
    {
        let path = path.as_ref();
        let data = fs::read(path)?;
        let metadata = decode(&data)?;
        let file_name = path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut torrent = Torrent::from_metadata(metadata, &file_name)?;
        let announce_url = &self.config.tracker_config.announce_url;
        if !announce_url.is_empty() {
            torrent.set_announce(announce_url);
        }
        Ok(torrent)
    }
}
