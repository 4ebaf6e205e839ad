//! Mission 2 — the day/night cycle.
//!
//! No discoverable entities: the shell animates the ISS around the globe
//! and reports orbit completions and terminator crossings as counter
//! events. One full orbit is half the mission, five sunrises the other
//! half.

use crate::api::descriptor::{
    ActivationMode, CompletionRule, CounterGoal, MissionDescriptor, ScoreRule,
};
use crate::api::types::{CounterId, MissionId};
use crate::registry::EntityRegistry;

pub const COUNTER_ORBITS: CounterId = CounterId(1);
pub const COUNTER_SUNRISES: CounterId = CounterId(2);

pub fn descriptor() -> MissionDescriptor {
    MissionDescriptor {
        id: MissionId::DayNightCycle,
        name: "Day/Night Cycle",
        registry: EntityRegistry::new(Vec::new()),
        activation: ActivationMode::DirectClick,
        score: ScoreRule::Flat(0),
        time_bonus: None,
        completion: CompletionRule::Counters(vec![
            CounterGoal {
                id: COUNTER_ORBITS,
                label: "Complete one full orbit",
                target: 1,
                weight_percent: 50,
            },
            CounterGoal {
                id: COUNTER_SUNRISES,
                label: "Witness five sunrises",
                target: 5,
                weight_percent: 50,
            },
        ]),
        avatar: None,
        oxygen: None,
    }
}
