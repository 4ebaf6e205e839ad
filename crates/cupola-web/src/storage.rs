//! `localStorage`-backed progress store.
//!
//! Keys follow the front-end's historical scheme (`levelProgress_<1..6>`,
//! integer percentage as text). Storage can be absent or disabled
//! (private browsing, sandboxed iframes); every failure degrades to
//! session-only progress without surfacing an error to the player.

use cupola_engine::persist::{progress_key, ProgressStore, StoreError};
use cupola_engine::MissionId;
use web_sys::Storage;

pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    /// Grab `window.localStorage` if the browser allows it.
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable, progress will not persist");
        }
        Self { storage }
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressStore for LocalStorageStore {
    fn read(&self, mission: MissionId) -> Result<Option<u8>, StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        let value = storage
            .get_item(&progress_key(mission))
            .map_err(|_| StoreError::Unavailable)?;
        // A mangled value reads as absent (0%) rather than an error:
        // the record is display-only and self-heals on the next write.
        Ok(value.and_then(|v| v.trim().parse::<u8>().ok()))
    }

    fn write(&mut self, mission: MissionId, percentage: u8) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        let key = progress_key(mission);
        let previous = self.read(mission)?.unwrap_or(0);
        let merged = previous.max(percentage.min(100));
        storage
            .set_item(&key, &merged.to_string())
            .map_err(|_| StoreError::Unavailable)
    }
}
