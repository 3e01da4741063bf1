//! On-disk snapshot handling.
//!
//! Every save rewrites the whole data set: the snapshot is serialized to a
//! sibling temp file and renamed over the backing file, so a crash mid-write
//! never leaves a torn snapshot behind.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub(crate) enum SnapshotError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize `data` as JSON and atomically replace the file at `path`.
pub(crate) fn write<D: Serialize>(path: &Path, data: &D) -> Result<(), SnapshotError> {
    let serialized = serde_json::to_string(data)?;
    let tmp = tmp_path(path);
    fs::write(&tmp, serialized.as_bytes())?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Read and decode the snapshot at `path`.
///
/// A missing file is `Ok(None)`; any other failure is an error for the
/// caller to report.
pub(crate) fn read<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, SnapshotError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    Ok(Some(serde_json::from_str(&contents)?))
}

// The temp file must live on the same filesystem as the backing file for
// the rename to be atomic, so it sits next to it rather than in a tmpdir.
fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("snapshot"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        let mut data = HashMap::new();
        data.insert("alpha".to_string(), "1".to_string());
        data.insert("beta".to_string(), "2".to_string());

        write(&path, &data).unwrap();
        let loaded: HashMap<String, String> = read(&path).unwrap().unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn read_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded: Option<HashMap<String, String>> =
            read(&dir.path().join("absent.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn read_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, b"{not json").unwrap();

        let result: Result<Option<HashMap<String, String>>, _> = read(&path);
        assert!(matches!(result, Err(SnapshotError::Json(_))));
    }

    #[test]
    fn write_replaces_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        let mut data = HashMap::new();
        data.insert("key".to_string(), "first".to_string());
        write(&path, &data).unwrap();

        data.insert("key".to_string(), "second".to_string());
        write(&path, &data).unwrap();

        let loaded: HashMap<String, String> = read(&path).unwrap().unwrap();
        assert_eq!(loaded.get("key").map(String::as_str), Some("second"));
    }

    #[test]
    fn write_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        let data: HashMap<String, String> = HashMap::new();
        write(&path, &data).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![OsString::from("data.json")]);
    }
}
