use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique identifier for an entity within a mission's registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// The six Cupola Dash missions. Discriminants match the level numbers
/// used by the front-end and the persisted `levelProgress_<n>` keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum MissionId {
    EarthObservation = 1,
    DayNightCycle = 2,
    WeatherWatch = 3,
    DisasterResponse = 4,
    NblTraining = 5,
    Spacewalk = 6,
}

impl MissionId {
    pub const ALL: [MissionId; 6] = [
        MissionId::EarthObservation,
        MissionId::DayNightCycle,
        MissionId::WeatherWatch,
        MissionId::DisasterResponse,
        MissionId::NblTraining,
        MissionId::Spacewalk,
    ];

    /// Level number as used in durable keys and the menu screen (1..=6).
    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn from_level(level: u8) -> Option<MissionId> {
        MissionId::ALL.get((level.checked_sub(1)?) as usize).copied()
    }
}

/// Classification affecting score weight. Missions with flat scoring
/// leave every entity at `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// A counter tracked by goal-based missions (e.g. orbits, sunrises).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CounterId(pub u32);

/// Events emitted by the engine for the mission shell to reflect in its
/// overlay UI. Drained once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressEvent {
    /// A previously undiscovered entity was activated. `delta` is the
    /// score awarded, including any time bonus.
    EntityDiscovered { id: EntityId, delta: u32 },
    /// A counter goal crossed its target.
    GoalReached { counter: CounterId },
    /// Aggregate state after any change. Always follows a discovery,
    /// goal crossing, or reset.
    StateChanged {
        score: u32,
        discovered: u32,
        percentage: u8,
        complete: bool,
    },
    /// An interaction referenced an unknown entity and was discarded.
    InteractionRejected { raw_id: u32 },
    /// Oxygen hit zero (spacewalk). Informational; the mission stays
    /// playable.
    OxygenDepleted,
}

/// A progress event packed for SharedArrayBuffer reads from TypeScript.
/// Generic container: `kind` identifies the event, `a/b/c/d` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct WireEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
}

impl WireEvent {
    pub const FLOATS: usize = 5;

    pub const KIND_DISCOVERED: f32 = 1.0;
    pub const KIND_GOAL: f32 = 2.0;
    pub const KIND_STATE: f32 = 3.0;
    pub const KIND_REJECTED: f32 = 4.0;
    pub const KIND_OXYGEN: f32 = 5.0;
}

impl From<ProgressEvent> for WireEvent {
    fn from(event: ProgressEvent) -> Self {
        match event {
            ProgressEvent::EntityDiscovered { id, delta } => WireEvent {
                kind: WireEvent::KIND_DISCOVERED,
                a: id.0 as f32,
                b: delta as f32,
                ..WireEvent::default()
            },
            ProgressEvent::GoalReached { counter } => WireEvent {
                kind: WireEvent::KIND_GOAL,
                a: counter.0 as f32,
                ..WireEvent::default()
            },
            ProgressEvent::StateChanged {
                score,
                discovered,
                percentage,
                complete,
            } => WireEvent {
                kind: WireEvent::KIND_STATE,
                a: score as f32,
                b: discovered as f32,
                c: percentage as f32,
                d: if complete { 1.0 } else { 0.0 },
            },
            ProgressEvent::InteractionRejected { raw_id } => WireEvent {
                kind: WireEvent::KIND_REJECTED,
                a: raw_id as f32,
                ..WireEvent::default()
            },
            ProgressEvent::OxygenDepleted => WireEvent {
                kind: WireEvent::KIND_OXYGEN,
                ..WireEvent::default()
            },
        }
    }
}

/// Errors surfaced by engine operations. None are fatal: the engine
/// discards the offending event and keeps serving subsequent ones.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown entity id {0}")]
    UnknownEntity(u32),
    #[error("unknown counter id {0}")]
    UnknownCounter(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mission_level_round_trip() {
        for mission in MissionId::ALL {
            assert_eq!(MissionId::from_level(mission.level()), Some(mission));
        }
        assert_eq!(MissionId::from_level(0), None);
        assert_eq!(MissionId::from_level(7), None);
    }

    #[test]
    fn state_event_packs_flags() {
        let wire: WireEvent = ProgressEvent::StateChanged {
            score: 500,
            discovered: 5,
            percentage: 100,
            complete: true,
        }
        .into();
        assert_eq!(wire.kind, WireEvent::KIND_STATE);
        assert_eq!(wire.a, 500.0);
        assert_eq!(wire.c, 100.0);
        assert_eq!(wire.d, 1.0);
    }
}
