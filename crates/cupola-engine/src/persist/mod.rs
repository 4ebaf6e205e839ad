//! Durable per-mission progress.
//!
//! The store is a ratchet, not a snapshot: `write` never lowers a stored
//! percentage, so a poor replay session cannot regress a previous best.
//! A failing store is never fatal — callers degrade to in-memory progress
//! for the session.

pub mod aggregate;
pub mod file;

use std::collections::HashMap;

use thiserror::Error;

use crate::api::types::MissionId;

/// Durable key for one mission's progress, as the front-end stores it.
pub fn progress_key(mission: MissionId) -> String {
    format!("levelProgress_{}", mission.level())
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("durable storage unavailable")]
    Unavailable,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt progress record: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Key/value durable store for completion percentages.
///
/// `read` serves only the mission-list aggregator; missions start each
/// session from zero regardless of what is stored.
pub trait ProgressStore {
    fn read(&self, mission: MissionId) -> Result<Option<u8>, StoreError>;

    /// Persist a percentage, ratcheted against the stored value.
    fn write(&mut self, mission: MissionId, percentage: u8) -> Result<(), StoreError>;
}

/// Ratchet helper shared by store implementations.
pub(crate) fn ratchet(previous: Option<u8>, new: u8) -> u8 {
    previous.unwrap_or(0).max(new.min(100))
}

/// In-memory store: the session-only fallback when durable storage is
/// unavailable, and the test double.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<MissionId, u8>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryStore {
    fn read(&self, mission: MissionId) -> Result<Option<u8>, StoreError> {
        Ok(self.values.get(&mission).copied())
    }

    fn write(&mut self, mission: MissionId, percentage: u8) -> Result<(), StoreError> {
        let merged = ratchet(self.values.get(&mission).copied(), percentage);
        self.values.insert(mission, merged);
        Ok(())
    }
}

/// A store that always fails. Exercises the degraded-persistence path in
/// tests.
#[derive(Debug, Default)]
pub struct UnavailableStore;

impl ProgressStore for UnavailableStore {
    fn read(&self, _mission: MissionId) -> Result<Option<u8>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn write(&mut self, _mission: MissionId, _percentage: u8) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_scheme_matches_front_end() {
        assert_eq!(progress_key(MissionId::EarthObservation), "levelProgress_1");
        assert_eq!(progress_key(MissionId::Spacewalk), "levelProgress_6");
    }

    #[test]
    fn memory_store_ratchets() {
        let mut store = MemoryStore::new();
        store.write(MissionId::EarthObservation, 80).unwrap();
        store.write(MissionId::EarthObservation, 40).unwrap();
        assert_eq!(store.read(MissionId::EarthObservation).unwrap(), Some(80));
        store.write(MissionId::EarthObservation, 100).unwrap();
        assert_eq!(store.read(MissionId::EarthObservation).unwrap(), Some(100));
    }

    #[test]
    fn ratchet_clamps_over_100() {
        assert_eq!(ratchet(None, 150), 100);
        assert_eq!(ratchet(Some(20), 7), 20);
    }

    #[test]
    fn missing_mission_reads_none() {
        let store = MemoryStore::new();
        assert_eq!(store.read(MissionId::WeatherWatch).unwrap(), None);
    }
}
