//! Mission 5 — Neutral Buoyancy Laboratory training.
//!
//! Four stations in the pool; floating the avatar within one unit of a
//! station completes it immediately for 250 points.

use crate::api::descriptor::{
    ActivationMode, AvatarConfig, CompletionRule, MissionDescriptor, ScoreRule,
};
use crate::api::types::MissionId;
use crate::registry::{Entity, EntityRegistry, Placement};

const POINTS: u32 = 250;
const RADIUS: f32 = 1.0;

fn objectives() -> Vec<Entity> {
    vec![
        Entity::new(1, "Navigate to Tool Station", Placement::Point { x: 3.0, y: 2.0, z: 0.0 }),
        Entity::new(2, "Collect Wrench", Placement::Point { x: -2.0, y: 3.0, z: 1.0 }),
        Entity::new(3, "Reach Solar Panel", Placement::Point { x: 0.0, y: -2.0, z: 2.0 }),
        Entity::new(4, "Return to Airlock", Placement::Point { x: 0.0, y: 0.0, z: 0.0 }),
    ]
}

pub fn descriptor() -> MissionDescriptor {
    MissionDescriptor {
        id: MissionId::NblTraining,
        name: "NBL Training",
        registry: EntityRegistry::new(objectives()),
        activation: ActivationMode::Proximity {
            radius: RADIUS,
            dwell_seconds: 0.0,
        },
        score: ScoreRule::Flat(POINTS),
        time_bonus: None,
        completion: CompletionRule::Discovery,
        avatar: Some(AvatarConfig::default()),
        oxygen: None,
    }
}
