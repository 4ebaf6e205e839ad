//! Mission 4 — disaster response monitoring.
//!
//! Five active disasters, 300 points per response. Severity is carried as
//! classification metadata for the shell's priority badges; scoring stays
//! flat.

use crate::api::descriptor::MissionDescriptor;
use crate::api::types::{MissionId, Severity};
use crate::registry::{Entity, EntityRegistry, Placement};

const POINTS: u32 = 300;

fn disasters() -> Vec<Entity> {
    vec![
        Entity::new(1, "Wildfire - California", Placement::Geo { lon: -120.0, lat: 35.0 })
            .with_severity(Severity::Critical)
            .with_detail("Fast-moving wildfire visible as a smoke plume from orbit."),
        Entity::new(2, "Flooding - Bangladesh", Placement::Geo { lon: 90.0, lat: 24.0 })
            .with_severity(Severity::High)
            .with_detail("Monsoon flooding across the Ganges delta."),
        Entity::new(3, "Earthquake - Turkey", Placement::Geo { lon: 35.0, lat: 39.0 })
            .with_severity(Severity::Critical)
            .with_detail("Major earthquake; imagery requested for damage assessment."),
        Entity::new(4, "Hurricane - Florida", Placement::Geo { lon: -80.0, lat: 25.0 })
            .with_severity(Severity::High)
            .with_detail("Hurricane making landfall on the Atlantic coast."),
        Entity::new(5, "Drought - Ethiopia", Placement::Geo { lon: 40.0, lat: 9.0 })
            .with_severity(Severity::Medium)
            .with_detail("Prolonged drought; vegetation indices falling."),
    ]
}

pub fn descriptor() -> MissionDescriptor {
    MissionDescriptor::direct_click(
        MissionId::DisasterResponse,
        "Disaster Response",
        EntityRegistry::new(disasters()),
        POINTS,
    )
}
