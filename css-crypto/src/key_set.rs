//! Player-key management for the disc-key trial loop.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::keys::{PLAYER_KEYS, parse_player_key};
use crate::{Key, Result};

/// Environment variable naming an extra player-key file to load.
pub const KEY_FILE_ENV: &str = "DISCUS_PLAYER_KEYS";

/// Ordered set of player keys tried against the encrypted disc-key
/// block.
///
/// The block carries 409 candidate slots but only the keys present in
/// the set are consulted, so leaked keys beyond the built-in 32 can be
/// added without touching the recovery loop.
pub struct PlayerKeySet {
    keys: Vec<Key>,
}

impl PlayerKeySet {
    /// Create a key set seeded with the built-in player keys.
    pub fn new() -> Self {
        let keys = PLAYER_KEYS.to_vec();
        debug!("loaded {} built-in player keys", keys.len());
        Self { keys }
    }

    /// Create a key set with no keys.
    pub fn empty() -> Self {
        Self { keys: Vec::new() }
    }

    /// Append a key to the trial order.
    pub fn add_key(&mut self, key: Key) {
        self.keys.push(key);
    }

    /// Number of keys in the set.
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Iterate the keys in trial order.
    pub fn iter(&self) -> impl Iterator<Item = &Key> {
        self.keys.iter()
    }

    /// Load extra player keys from a text file.
    ///
    /// One key per line as 10 hex digits, optionally followed by a
    /// description; empty lines and `#`/`//` comments are skipped.
    /// Malformed lines are logged and skipped. Returns the number of
    /// keys loaded.
    pub fn load_key_file(&mut self, path: &Path) -> Result<usize> {
        let content = fs::read_to_string(path)?;
        let mut loaded = 0;

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
                continue;
            }

            let Some(field) = line.split_whitespace().next() else {
                continue;
            };
            match parse_player_key(field) {
                Ok(key) => {
                    self.add_key(key);
                    loaded += 1;
                }
                Err(e) => {
                    warn!("skipping invalid key on line {}: {}", line_num + 1, e);
                }
            }
        }

        info!("loaded {} player keys from {}", loaded, path.display());
        Ok(loaded)
    }

    /// Load key files from the environment override and the user config
    /// directory.
    ///
    /// Checks the file named by `DISCUS_PLAYER_KEYS` first, then every
    /// regular file in `~/.config/discus/`.
    pub fn load_from_standard_dirs(&mut self) -> Result<usize> {
        let mut total = 0;

        if let Ok(path) = std::env::var(KEY_FILE_ENV) {
            let path = PathBuf::from(path);
            if path.is_file() {
                match self.load_key_file(&path) {
                    Ok(count) => total += count,
                    Err(e) => warn!("failed to load {KEY_FILE_ENV}: {e}"),
                }
            }
        }

        if let Some(home) = dirs::home_dir() {
            let config_dir = home.join(".config").join("discus");
            if config_dir.is_dir() {
                for entry in fs::read_dir(&config_dir)? {
                    let path = entry?.path();
                    if !path.is_file() {
                        continue;
                    }
                    match self.load_key_file(&path) {
                        Ok(count) => total += count,
                        Err(e) => warn!("failed to load {}: {}", path.display(), e),
                    }
                }
            }
        }

        Ok(total)
    }
}

impl Default for PlayerKeySet {
    fn default() -> Self {
        Self::new()
    }
}
