use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use newsbuddy_progress::{DailyStreak, ProgressStore};
use newsbuddy_types::{ProgressRules, UserProgress};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::StorageConfig;
use crate::error::StorageError;

/// Envelope version written by this crate.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct Envelope<'a> {
    version: u32,
    progress: &'a UserProgress,
    clock: &'a DailyStreak,
}

/// Read side of [`Envelope`]. The body stays untyped until the version is
/// known to be supported. Envelopes written before the clock was saved
/// have no `clock` field.
#[derive(Deserialize)]
struct RawEnvelope {
    version: u32,
    progress: serde_json::Value,
    #[serde(default)]
    clock: Option<serde_json::Value>,
}

/// Everything persisted for one reader: the progress snapshot and the
/// calendar clock that decides when the streak breaks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SavedProgress {
    pub progress: UserProgress,
    pub clock: DailyStreak,
}

/// A restored reader session, ready for the next completion.
#[derive(Debug)]
pub struct ReaderSession {
    pub store: ProgressStore,
    pub clock: DailyStreak,
}

/// Durable home for one reader's progress snapshot.
pub trait SnapshotStore {
    /// The saved state, or `None` if nothing was saved yet.
    fn load(&self) -> Result<Option<SavedProgress>, StorageError>;

    fn save(&mut self, progress: &UserProgress, clock: &DailyStreak) -> Result<(), StorageError>;
}

/// Restore a session from `store`, or start fresh when nothing was saved.
/// Inconsistent snapshots are refused rather than adopted. The clock comes
/// back with its last active day, so a day missed between sessions still
/// resets the streak.
pub fn open_store(
    store: &impl SnapshotStore,
    rules: Arc<ProgressRules>,
) -> Result<ReaderSession, StorageError> {
    match store.load()? {
        Some(saved) => Ok(ReaderSession {
            store: ProgressStore::from_snapshot(saved.progress, rules)?,
            clock: saved.clock,
        }),
        None => {
            debug!("no saved progress, starting fresh");
            Ok(ReaderSession {
                store: ProgressStore::with_rules(rules),
                clock: DailyStreak::new(),
            })
        }
    }
}

fn encode(
    progress: &UserProgress,
    clock: &DailyStreak,
    pretty: bool,
) -> Result<String, StorageError> {
    let envelope = Envelope {
        version: SNAPSHOT_VERSION,
        progress,
        clock,
    };
    let json = if pretty {
        serde_json::to_string_pretty(&envelope)?
    } else {
        serde_json::to_string(&envelope)?
    };
    Ok(json)
}

fn decode(json: &str) -> Result<SavedProgress, StorageError> {
    let raw: RawEnvelope = serde_json::from_str(json)?;
    if raw.version != SNAPSHOT_VERSION {
        return Err(StorageError::UnsupportedVersion {
            found: raw.version,
            expected: SNAPSHOT_VERSION,
        });
    }
    let clock = match raw.clock {
        Some(clock) => serde_json::from_value(clock)?,
        None => DailyStreak::new(),
    };
    Ok(SavedProgress {
        progress: serde_json::from_value(raw.progress)?,
        clock,
    })
}

/// Snapshot kept as a JSON file.
///
/// Saves write a sibling temp file and rename it over the target, so a
/// crash mid-save leaves the previous snapshot intact. A failed rename
/// removes the temp file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    config: StorageConfig,
}

impl JsonFileStore {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.config.path().as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Option<SavedProgress>, StorageError> {
        let path = self.config.path();
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::io(path, e)),
        };
        let saved = decode(&json).inspect_err(|err| {
            warn!(path = %path.display(), %err, "unreadable progress snapshot");
        })?;
        info!(path = %path.display(), xp = saved.progress.xp, "loaded progress");
        Ok(Some(saved))
    }

    fn save(&mut self, progress: &UserProgress, clock: &DailyStreak) -> Result<(), StorageError> {
        let path = self.config.path();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
        }
        let json = encode(progress, clock, self.config.is_pretty())?;
        let temp = self.temp_path();
        fs::write(&temp, json).map_err(|e| StorageError::io(&temp, e))?;
        if let Err(e) = fs::rename(&temp, path) {
            if let Err(cleanup) = fs::remove_file(&temp) {
                warn!(path = %temp.display(), %cleanup, "could not remove temp snapshot");
            }
            return Err(StorageError::io(path, e));
        }
        debug!(path = %path.display(), xp = progress.xp, "saved progress");
        Ok(())
    }
}

/// In-memory store holding the encoded snapshot, for tests and for hosts
/// that provide their own key-value storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    json: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-encoded JSON, e.g. read from browser-style local storage.
    pub fn from_json(json: impl Into<String>) -> Self {
        Self {
            json: Some(json.into()),
        }
    }

    pub fn json(&self) -> Option<&str> {
        self.json.as_deref()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<SavedProgress>, StorageError> {
        self.json.as_deref().map(decode).transpose()
    }

    fn save(&mut self, progress: &UserProgress, clock: &DailyStreak) -> Result<(), StorageError> {
        self.json = Some(encode(progress, clock, false)?);
        Ok(())
    }
}
