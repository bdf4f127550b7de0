//! Persistence for the three fortune datasets.
//!
//! Layout under the data directory (all JSON, pretty-printed, 2-space indent):
//!
//! - `config.json` — [`GlobalSettings`]
//! - `player.json` — per-player draw records keyed by stable player id
//! - `fortune.json` — the fortune catalog array
//! - `dumped/` — single-item descriptor files captured by the dump command
//!
//! Loading is self-healing: a missing or unreadable file yields the defaults
//! ("first run"), keys present in the defaults but absent on disk are merged
//! in (shallow, objects only), and the result is always written back so the
//! on-disk copy stays complete. Write failures are logged and swallowed; the
//! in-memory state stays authoritative for the rest of the session.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::{FortuneCatalog, FortuneEntry};

pub const SETTINGS_FILE: &str = "config.json";
pub const PLAYERS_FILE: &str = "player.json";
pub const CATALOG_FILE: &str = "fortune.json";
pub const DUMPED_DIR: &str = "dumped";

/// Process-wide feature switches, reloadable on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSettings {
    /// Announce fresh draws to the whole server instead of whispering.
    #[serde(default = "default_true")]
    pub broadcast: bool,
    /// Grant catalog rewards on a fresh draw.
    #[serde(default = "default_true")]
    pub enable_award: bool,
}

fn default_true() -> bool {
    true
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            broadcast: true,
            enable_award: true,
        }
    }
}

/// The fortune a player rolled on their last fresh draw.
///
/// `content_index` is always present and an index of 0 is valid; "no stored
/// draw" is expressed by the record being absent from the map, never by a
/// sentinel index value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastFortune {
    pub id: i64,
    pub content_index: usize,
}

/// Per-player draw record. Overwritten on every fresh draw, never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDrawRecord {
    pub last_date: DateTime<Utc>,
    pub last_fortune: LastFortune,
}

/// Draw records keyed by stable player id.
pub type PlayerRecords = HashMap<String, PlayerDrawRecord>;

/// Read a JSON dataset from `path`, falling back to `defaults` when the file
/// is absent or unreadable. When both the loaded value and the defaults are
/// JSON objects, keys present in the defaults but missing from the loaded
/// object are merged in (one level deep; sequences are never merged). The
/// result is written back immediately so the file self-heals.
pub fn load_or_init(path: &Path, defaults: Value) -> Value {
    let mut value = match fs::read_to_string(path) {
        Ok(raw) if !raw.trim().is_empty() => match serde_json::from_str::<Value>(&raw) {
            Ok(v) => v,
            Err(e) => {
                log::warn!(
                    "{} is not valid JSON ({}), falling back to defaults",
                    path.display(),
                    e
                );
                defaults.clone()
            }
        },
        Ok(_) => defaults.clone(),
        Err(_) => defaults.clone(),
    };

    if let (Value::Object(loaded), Value::Object(defs)) = (&mut value, &defaults) {
        for (key, default) in defs {
            if !loaded.contains_key(key) {
                loaded.insert(key.clone(), default.clone());
            }
        }
    }

    if let Err(e) = save_json(path, &value) {
        log::warn!("failed to write back {}: {:#}", path.display(), e);
    }
    value
}

/// Serialize `value` as pretty-printed JSON at `path`, creating parent
/// directories as needed.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    let data = serde_json::to_string_pretty(value).context("serializing dataset")?;
    fs::write(path, data).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Owner of the three in-memory datasets and the data directory layout.
///
/// Loading never fails: every dataset degrades to its default on error. The
/// store is mutated only on the invoking thread, either by an explicit
/// [`reload`](ConfigStore::reload) or by a draw's record update.
#[derive(Debug)]
pub struct ConfigStore {
    dir: PathBuf,
    pub settings: GlobalSettings,
    pub players: PlayerRecords,
    pub catalog: FortuneCatalog,
}

impl ConfigStore {
    /// Load all three datasets from `dir`, creating default files on first run.
    pub fn load(dir: impl Into<PathBuf>) -> Self {
        let mut store = ConfigStore {
            dir: dir.into(),
            settings: GlobalSettings::default(),
            players: PlayerRecords::new(),
            catalog: FortuneCatalog::default(),
        };
        store.reload();
        store
    }

    /// Re-read all three datasets, discarding in-memory state.
    pub fn reload(&mut self) {
        let defaults = serde_json::to_value(GlobalSettings::default()).unwrap_or_default();
        let raw = load_or_init(&self.settings_path(), defaults);
        self.settings = serde_json::from_value(raw).unwrap_or_default();

        let raw = load_or_init(&self.players_path(), Value::Object(Default::default()));
        self.players = serde_json::from_value(raw).unwrap_or_else(|e| {
            log::error!("player records are malformed ({}), starting empty", e);
            PlayerRecords::new()
        });

        let raw = load_or_init(&self.catalog_path(), Value::Array(Vec::new()));
        let entries: Vec<FortuneEntry> = serde_json::from_value(raw).unwrap_or_else(|e| {
            log::error!("fortune catalog is malformed ({}), starting empty", e);
            Vec::new()
        });
        self.catalog = FortuneCatalog::new(entries);
    }

    /// Persist the player record map. Failure is logged, not propagated: the
    /// in-memory records stay authoritative until the next restart.
    pub fn save_players(&self) {
        if let Err(e) = save_json(&self.players_path(), &self.players) {
            log::error!("failed to persist player records: {:#}", e);
        }
    }

    pub fn settings_path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE)
    }

    pub fn players_path(&self) -> PathBuf {
        self.dir.join(PLAYERS_FILE)
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.dir.join(CATALOG_FILE)
    }

    /// Directory holding dumped item descriptor files.
    pub fn dumped_dir(&self) -> PathBuf {
        self.dir.join(DUMPED_DIR)
    }
}
