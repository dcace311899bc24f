use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;
use crate::quiz::Delays;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// feedback dwell before advancing to the next question (100ms ticks)
    pub advance_delay_ticks: u32,
    /// feedback dwell before a retry of the same question
    pub retry_delay_ticks: u32,
    /// shorter ack used for matching locks and accepted corrections
    pub correction_delay_ticks: u32,
    pub sound: bool,
    pub backdrop: bool,
    /// overrides the per-theme backdrop seed when set
    pub backdrop_seed: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        let delays = Delays::default();
        Self {
            advance_delay_ticks: delays.advance_ticks,
            retry_delay_ticks: delays.retry_ticks,
            correction_delay_ticks: delays.correction_ticks,
            sound: true,
            backdrop: true,
            backdrop_seed: None,
        }
    }
}

impl Config {
    pub fn delays(&self) -> Delays {
        Delays {
            advance_ticks: self.advance_delay_ticks.max(1),
            retry_ticks: self.retry_delay_ticks.max(1),
            correction_ticks: self.correction_delay_ticks.max(1),
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path =
            AppDirs::config_path().unwrap_or_else(|| PathBuf::from("numo_config.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        if let Ok(bytes) = fs::read(&self.path) {
            if let Ok(cfg) = serde_json::from_slice::<Config>(&bytes) {
                return cfg;
            }
        }
        Config::default()
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).unwrap_or_default();
        fs::write(&self.path, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn roundtrip_default_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config::default();
        store.save(&cfg).unwrap();
        let loaded = store.load();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn save_and_load_custom_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config {
            advance_delay_ticks: 5,
            retry_delay_ticks: 3,
            correction_delay_ticks: 2,
            sound: false,
            backdrop: false,
            backdrop_seed: Some(777),
        };
        store.save(&cfg).unwrap();
        let loaded = store.load();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn load_missing_file_falls_back_to_default() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("nope.json"));
        assert_eq!(store.load(), Config::default());
    }

    #[test]
    fn delays_are_clamped_to_at_least_one_tick() {
        let cfg = Config {
            advance_delay_ticks: 0,
            retry_delay_ticks: 0,
            correction_delay_ticks: 0,
            ..Config::default()
        };
        let delays = cfg.delays();
        assert_eq!(delays.advance_ticks, 1);
        assert_eq!(delays.retry_ticks, 1);
        assert_eq!(delays.correction_ticks, 1);
    }
}
