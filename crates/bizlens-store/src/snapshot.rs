//! Whole-store persistence to a single versioned JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::app_store::AppStore;
use crate::StoreError;

/// Bump whenever the serialized shape of [`AppStore`] changes.
pub const SCHEMA_VERSION: u32 = 1;

/// Fixed storage key; the snapshot file is `<dir>/<key>.json`.
pub const STORAGE_KEY: &str = "bizlens-store";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Snapshot {
    pub schema_version: u32,
    pub saved_at: DateTime<Utc>,
    pub state: AppStore,
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    schema_version: u32,
    saved_at: DateTime<Utc>,
    state: &'a AppStore,
}

#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{STORAGE_KEY}.json"))
    }

    /// Write `store` to a temp file beside the snapshot, then rename it
    /// into place so readers never see a partial file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory or file cannot be written,
    /// or [`StoreError::Encode`] if serialization fails.
    pub fn save(&self, store: &AppStore) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| io_error(&self.dir, e))?;

        let body = serde_json::to_vec_pretty(&SnapshotRef {
            schema_version: SCHEMA_VERSION,
            saved_at: Utc::now(),
            state: store,
        })
        .map_err(StoreError::Encode)?;

        let target = self.path();
        let tmp = target.with_extension("json.tmp");
        fs::write(&tmp, body).map_err(|e| io_error(&tmp, e))?;
        fs::rename(&tmp, &target).map_err(|e| io_error(&target, e))?;

        tracing::debug!(path = %target.display(), "store snapshot saved");
        Ok(())
    }

    /// Read the snapshot if one exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::SchemaMismatch`] when the stored version differs
    /// from [`SCHEMA_VERSION`], [`StoreError::Decode`] for malformed content,
    /// and [`StoreError::Io`] for read failures other than a missing file.
    pub fn load(&self) -> Result<Option<Snapshot>, StoreError> {
        let path = self.path();
        let raw = match fs::read(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(&path, e)),
        };

        let value: serde_json::Value = serde_json::from_slice(&raw).map_err(StoreError::Decode)?;
        let found = value
            .get("schema_version")
            .and_then(serde_json::Value::as_u64)
            .ok_or_else(|| {
                StoreError::Decode(serde::de::Error::custom(
                    "snapshot has no numeric schema_version",
                ))
            })?;
        if found != u64::from(SCHEMA_VERSION) {
            return Err(StoreError::SchemaMismatch {
                found,
                expected: SCHEMA_VERSION,
            });
        }

        let snapshot: Snapshot = serde_json::from_value(value).map_err(StoreError::Decode)?;
        Ok(Some(snapshot))
    }

    /// Remove the snapshot; a missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), StoreError> {
        let path = self.path();
        match fs::remove_file(&path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(io_error(&path, e)),
            _ => Ok(()),
        }
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.display().to_string(),
        source,
    }
}
