//! The six built-in Cupola Dash missions as declarative descriptors.
//!
//! Everything that used to differ between the mini-games — activation
//! mode, scoring, counters, avatar tuning — is configuration here;
//! the engine code is shared.

mod day_night;
mod disaster;
mod earth_observation;
mod nbl_training;
mod spacewalk;
mod weather;

use crate::api::descriptor::MissionDescriptor;
use crate::api::types::MissionId;

pub use day_night::{COUNTER_ORBITS, COUNTER_SUNRISES};

/// Build the descriptor for a mission. Descriptors are cheap to build and
/// immutable once handed to the engine.
pub fn descriptor(id: MissionId) -> MissionDescriptor {
    match id {
        MissionId::EarthObservation => earth_observation::descriptor(),
        MissionId::DayNightCycle => day_night::descriptor(),
        MissionId::WeatherWatch => weather::descriptor(),
        MissionId::DisasterResponse => disaster::descriptor(),
        MissionId::NblTraining => nbl_training::descriptor(),
        MissionId::Spacewalk => spacewalk::descriptor(),
    }
}
