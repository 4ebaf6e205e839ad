//! Mission-list overview.
//!
//! The menu screen shows one best-ever percentage per mission. The
//! overview max-merges whatever the durable store has with any live
//! session value, so a mission being replayed right now never *displays*
//! below its historical best either.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::api::types::MissionId;
use crate::persist::ProgressStore;

/// Read-only snapshot `{level number -> percentage}` for the menu.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MissionOverview {
    percentages: BTreeMap<u8, u8>,
}

impl MissionOverview {
    /// Load best percentages for all six missions. Unreadable or missing
    /// entries count as 0% — the menu stays renderable with a dead store.
    pub fn load(store: &dyn ProgressStore) -> Self {
        let mut percentages = BTreeMap::new();
        for mission in MissionId::ALL {
            let stored = store.read(mission).unwrap_or_default().unwrap_or(0);
            percentages.insert(mission.level(), stored);
        }
        Self { percentages }
    }

    /// Fold a live session value in (max-merge).
    pub fn merge_session(&mut self, mission: MissionId, percentage: u8) {
        let entry = self.percentages.entry(mission.level()).or_insert(0);
        *entry = (*entry).max(percentage.min(100));
    }

    pub fn percentage(&self, mission: MissionId) -> u8 {
        self.percentages.get(&mission.level()).copied().unwrap_or(0)
    }

    /// JSON for the menu screen.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.percentages).unwrap_or_else(|_| "{}".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::{MemoryStore, UnavailableStore};

    #[test]
    fn loads_all_missions_with_zero_default() {
        let mut store = MemoryStore::new();
        store.write(MissionId::WeatherWatch, 60).unwrap();

        let overview = MissionOverview::load(&store);
        assert_eq!(overview.percentage(MissionId::WeatherWatch), 60);
        assert_eq!(overview.percentage(MissionId::Spacewalk), 0);
    }

    #[test]
    fn session_merge_is_a_max() {
        let mut store = MemoryStore::new();
        store.write(MissionId::EarthObservation, 80).unwrap();

        let mut overview = MissionOverview::load(&store);
        overview.merge_session(MissionId::EarthObservation, 40);
        assert_eq!(overview.percentage(MissionId::EarthObservation), 80);
        overview.merge_session(MissionId::EarthObservation, 100);
        assert_eq!(overview.percentage(MissionId::EarthObservation), 100);
    }

    #[test]
    fn dead_store_degrades_to_zeros() {
        let overview = MissionOverview::load(&UnavailableStore);
        for mission in MissionId::ALL {
            assert_eq!(overview.percentage(mission), 0);
        }
    }

    #[test]
    fn json_uses_level_numbers() {
        let mut store = MemoryStore::new();
        store.write(MissionId::DayNightCycle, 50).unwrap();
        let json = MissionOverview::load(&store).to_json();
        assert!(json.contains("\"2\":50"), "{json}");
    }
}
