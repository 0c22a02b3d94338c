use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::state::QuizState;

use super::{SnapshotStore, StoreResult};

/// JSON snapshot file at a fixed path. A snapshot that is missing, unreadable
/// as JSON, or partially garbage never blocks startup: unusable fields fall
/// back to their fresh-session defaults one by one.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> StoreResult<Option<QuizState>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Value>(&json) {
            Ok(value) => Ok(Some(decode_snapshot(&value))),
            Err(e) => {
                log::warn!("snapshot at {:?} is not valid JSON, starting fresh: {e}", self.path);
                Ok(None)
            }
        }
    }

    fn save(&self, state: &QuizState) -> StoreResult<()> {
        let json = serde_json::to_string(state)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Each field is decoded independently; anything absent or of the wrong type
/// takes its fresh-session default.
fn decode_snapshot(value: &Value) -> QuizState {
    let index = value
        .get("index")
        .and_then(Value::as_u64)
        .unwrap_or(0) as usize;
    let completed = value
        .get("completed")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let elapsed_seconds = value
        .get("elapsed_seconds")
        .and_then(Value::as_u64)
        .unwrap_or(0);

    let mut answered = HashMap::new();
    if let Some(entries) = value.get("answered").and_then(Value::as_object) {
        for (key, choice) in entries {
            if let (Ok(index), Some(text)) = (key.parse::<usize>(), choice.as_str()) {
                answered.insert(index, text.to_string());
            }
        }
    }

    QuizState {
        index,
        answered,
        completed,
        elapsed_seconds,
    }
}
