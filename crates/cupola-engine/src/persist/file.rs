//! File-backed progress store for native builds (tests, tools).
//!
//! One JSON object mapping level numbers to percentages, written through a
//! temp file and renamed into place so a crash mid-write cannot corrupt
//! the record.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::api::types::MissionId;
use crate::persist::{ratchet, ProgressStore, StoreError};

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<u8, u8>,
}

impl FileStore {
    /// Open (or create) the store at `path`. A missing file is an empty
    /// record; a corrupt file is an error so the caller can decide to
    /// degrade.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, values })
    }

    fn flush(&self) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(&self.values)?;
        write_text_atomic(&self.path, &text)?;
        Ok(())
    }
}

impl ProgressStore for FileStore {
    fn read(&self, mission: MissionId) -> Result<Option<u8>, StoreError> {
        Ok(self.values.get(&mission.level()).copied())
    }

    fn write(&mut self, mission: MissionId, percentage: u8) -> Result<(), StoreError> {
        let level = mission.level();
        let merged = ratchet(self.values.get(&level).copied(), percentage);
        self.values.insert(level, merged);
        self.flush()
    }
}

fn write_text_atomic(path: &Path, text: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = temp_path_for(path);
    fs::write(&tmp_path, text)?;
    replace_file(&tmp_path, path)
}

fn replace_file(tmp_path: &Path, final_path: &Path) -> io::Result<()> {
    match fs::remove_file(final_path) {
        Ok(()) => {}
        Err(error) if error.kind() == io::ErrorKind::NotFound => {}
        Err(error) => {
            let _ = fs::remove_file(tmp_path);
            return Err(error);
        }
    }
    if let Err(error) = fs::rename(tmp_path, final_path) {
        let _ = fs::remove_file(tmp_path);
        return Err(error);
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("progress.tmp");
    let tmp_name = format!("{file_name}.tmp");
    match path.parent() {
        Some(parent) => parent.join(tmp_name),
        None => PathBuf::from(tmp_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");

        let mut store = FileStore::open(&path).unwrap();
        store.write(MissionId::NblTraining, 75).unwrap();
        drop(store);

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.read(MissionId::NblTraining).unwrap(), Some(75));
        assert_eq!(store.read(MissionId::Spacewalk).unwrap(), None);
    }

    #[test]
    fn ratchet_holds_across_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");

        let mut store = FileStore::open(&path).unwrap();
        store.write(MissionId::EarthObservation, 80).unwrap();
        drop(store);

        // A later, worse session must not regress the stored best.
        let mut store = FileStore::open(&path).unwrap();
        store.write(MissionId::EarthObservation, 40).unwrap();
        drop(store);

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.read(MissionId::EarthObservation).unwrap(), Some(80));
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("nope.json")).unwrap();
        assert_eq!(store.read(MissionId::WeatherWatch).unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(FileStore::open(&path), Err(StoreError::Corrupt(_))));
    }
}
