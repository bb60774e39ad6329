//! Versioned JSON envelope on disk

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current on-disk format version
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed save data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported save format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Wrapper written around every payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub version: u32,
    pub payload: T,
}

impl<T> Envelope<T> {
    pub fn new(payload: T) -> Self {
        Self {
            version: FORMAT_VERSION,
            payload,
        }
    }
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Parse and version-check an envelope
    pub fn from_json(json: &str) -> Result<T, PersistenceError> {
        let envelope: Envelope<T> = serde_json::from_str(json)?;
        if envelope.version != FORMAT_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                found: envelope.version,
                expected: FORMAT_VERSION,
            });
        }
        Ok(envelope.payload)
    }
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> PersistenceError + '_ {
    move |source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn sibling(path: &Path, ext: &str) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(ext);
    path.with_file_name(name)
}

/// Backup file kept next to `path`
pub fn backup_path(path: &Path) -> PathBuf {
    sibling(path, ".bak")
}

/// Write `payload` to `path`: tmp file first, previous save rotated to `.bak`
pub fn save_json<T: Serialize>(path: &Path, payload: &T) -> Result<(), PersistenceError> {
    let json = serde_json::to_string_pretty(&Envelope::new(payload))?;

    let tmp = sibling(path, ".tmp");
    fs::write(&tmp, json).map_err(io_err(&tmp))?;

    if path.exists() {
        let backup = backup_path(path);
        fs::rename(path, &backup).map_err(io_err(&backup))?;
    }
    fs::rename(&tmp, path).map_err(io_err(path))?;

    log::debug!("Saved {}", path.display());
    Ok(())
}

/// Read `path`, falling back to its backup if the main file is corrupt
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, PersistenceError> {
    let primary = read_envelope(path);
    match primary {
        Ok(payload) => Ok(payload),
        Err(err) => {
            let backup = backup_path(path);
            if !backup.exists() {
                return Err(err);
            }
            log::warn!("{} unreadable ({}), trying backup", path.display(), err);
            read_envelope(&backup)
        }
    }
}

fn read_envelope<T: DeserializeOwned>(path: &Path) -> Result<T, PersistenceError> {
    let json = fs::read_to_string(path).map_err(io_err(path))?;
    Envelope::<T>::from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("ptero-run-{}-{}", std::process::id(), name));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir.join("save.json")
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch("roundtrip");
        save_json(&path, &vec![3u64, 1, 4]).unwrap();
        let back: Vec<u64> = load_json(&path).unwrap();
        assert_eq!(back, vec![3, 1, 4]);
    }

    #[test]
    fn test_second_save_rotates_backup() {
        let path = scratch("rotate");
        save_json(&path, &1u32).unwrap();
        save_json(&path, &2u32).unwrap();
        assert!(backup_path(&path).exists());
        assert_eq!(load_json::<u32>(&path).unwrap(), 2);
    }

    #[test]
    fn test_corrupt_save_falls_back() {
        let path = scratch("corrupt");
        save_json(&path, &"first".to_string()).unwrap();
        save_json(&path, &"second".to_string()).unwrap();
        fs::write(&path, "{ truncated").unwrap();
        assert_eq!(load_json::<String>(&path).unwrap(), "first");
    }

    #[test]
    fn test_rejects_future_version() {
        let json = r#"{ "version": 99, "payload": 5 }"#;
        assert!(matches!(
            Envelope::<u32>::from_json(json),
            Err(PersistenceError::UnsupportedVersion { found: 99, .. })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = scratch("missing");
        assert!(matches!(
            load_json::<u32>(&path),
            Err(PersistenceError::Io { .. })
        ));
    }
}
