//! Snapshot persistence for the user list
//!
//! This module handles serialization and file I/O for saving/loading the
//! complete user graph to/from a single JSON file. Writes go to a temporary
//! file in the same directory which is then renamed over the snapshot, so a
//! crash mid-write leaves the previous snapshot intact.

use std::{fs, io::Write, path::Path};

use serde::{Deserialize, Deserializer, Serialize};

use super::errors::StoreError;
use crate::{Result, User};

/// The current snapshot file format version.
/// v0 indicates this is an unstable format subject to breaking changes.
const SNAPSHOT_VERSION: u8 = 0;

/// Helper to check if version is default (0) for serde skip_serializing_if
fn is_v0(v: &u8) -> bool {
    *v == 0
}

/// Validates the snapshot version during deserialization.
fn validate_snapshot_version<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let version = u8::deserialize(deserializer)?;
    if version != SNAPSHOT_VERSION {
        return Err(serde::de::Error::custom(format!(
            "unsupported snapshot version {version}; only version {SNAPSHOT_VERSION} is supported"
        )));
    }
    Ok(version)
}

/// Borrowed view written to disk.
#[derive(Serialize)]
struct SnapshotRef<'a> {
    #[serde(rename = "_v", skip_serializing_if = "is_v0")]
    version: u8,
    users: &'a [User],
}

/// Owned form read back from disk.
#[derive(Deserialize)]
struct Snapshot {
    /// File format version for compatibility checking
    #[serde(
        rename = "_v",
        default,
        deserialize_with = "validate_snapshot_version"
    )]
    #[allow(dead_code)]
    version: u8,
    users: Vec<User>,
}

/// Saves the complete user list to `path`, replacing any previous snapshot.
pub(crate) fn save_to_file(users: &[User], path: &Path) -> Result<()> {
    let snapshot = SnapshotRef {
        version: SNAPSHOT_VERSION,
        users,
    };
    let json = serde_json::to_vec_pretty(&snapshot)
        .map_err(|source| StoreError::SerializationFailed { source })?;

    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
    }

    let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
    temp.write_all(&json)
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| StoreError::io(temp.path(), e))?;
    temp.persist(path)
        .map_err(|e| StoreError::io(path, e.error))?;
    Ok(())
}

/// Loads the user list from `path`.
///
/// A missing or empty file yields an empty list. A file that exists but
/// cannot be parsed is an error; the store decides what to do with it.
pub(crate) fn load_from_file(path: &Path) -> Result<Vec<User>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(StoreError::io(path, e).into()),
    };
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    let snapshot: Snapshot = serde_json::from_slice(&bytes)
        .map_err(|source| StoreError::DeserializationFailed { source })?;
    Ok(snapshot.users)
}
