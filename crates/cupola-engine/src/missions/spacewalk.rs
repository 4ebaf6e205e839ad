//! Mission 6 — EVA repair spacewalk.
//!
//! Four repair tasks around the station. Working at a task means holding
//! position inside 1.2 units for three continuous seconds; points scale
//! with difficulty plus a time bonus for finishing under the task's
//! budget. Oxygen depletes for the whole EVA.

use crate::api::descriptor::{
    ActivationMode, AvatarConfig, CompletionRule, MissionDescriptor, OxygenConfig, ScoreRule,
    TimeBonus,
};
use crate::api::types::{MissionId, Severity};
use crate::registry::{Entity, EntityRegistry, Placement};

const RADIUS: f32 = 1.2;
const DWELL_SECONDS: f32 = 3.0;
const BONUS_RATE: u32 = 5;

/// Thrust is slightly weaker than in the NBL: the tool harness adds mass.
const THRUST_POWER: f32 = 0.06;

fn tasks() -> Vec<Entity> {
    vec![
        Entity::new(1, "Replace Solar Panel Battery", Placement::Point { x: 4.0, y: 2.0, z: -1.0 })
            .with_severity(Severity::High)
            .with_time_limit(120)
            .with_detail("Carefully remove old battery and install new one"),
        Entity::new(2, "Repair Communication Array", Placement::Point { x: -3.0, y: 1.0, z: 2.0 })
            .with_severity(Severity::Medium)
            .with_time_limit(90)
            .with_detail("Realign the antenna and secure loose connections"),
        Entity::new(3, "Install Science Experiment", Placement::Point { x: 1.0, y: -2.0, z: 3.0 })
            .with_severity(Severity::High)
            .with_time_limit(150)
            .with_detail("Mount delicate equipment to external platform"),
        Entity::new(4, "Emergency Coolant Leak Fix", Placement::Point { x: -2.0, y: -1.0, z: -2.0 })
            .with_severity(Severity::Critical)
            .with_time_limit(60)
            .with_detail("Stop coolant leak before system failure"),
    ]
}

pub fn descriptor() -> MissionDescriptor {
    MissionDescriptor {
        id: MissionId::Spacewalk,
        name: "Spacewalk Repair",
        registry: EntityRegistry::new(tasks()),
        activation: ActivationMode::Proximity {
            radius: RADIUS,
            dwell_seconds: DWELL_SECONDS,
        },
        score: ScoreRule::BySeverity {
            medium: 500,
            high: 750,
            critical: 1000,
        },
        time_bonus: Some(TimeBonus { rate: BONUS_RATE }),
        completion: CompletionRule::Discovery,
        avatar: Some(AvatarConfig {
            thrust_power: THRUST_POWER,
            ..AvatarConfig::default()
        }),
        oxygen: Some(OxygenConfig {
            initial: 100.0,
            depletion_per_second: 0.1,
        }),
    }
}
