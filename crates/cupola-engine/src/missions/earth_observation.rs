//! Mission 1 — Earth observation from the Cupola.
//!
//! Five landmarks on the rotating globe; tapping a marker discovers it
//! for 100 points flat.

use crate::api::descriptor::MissionDescriptor;
use crate::api::types::MissionId;
use crate::registry::{Entity, EntityRegistry, Placement};

const POINTS: u32 = 100;

fn landmarks() -> Vec<Entity> {
    vec![
        Entity::new(1, "Amazon Rainforest", Placement::Geo { lon: -60.0, lat: -5.0 })
            .with_detail(
                "The Amazon produces 20% of Earth's oxygen and is visible from space as a vast green carpet.",
            ),
        Entity::new(2, "Sahara Desert", Placement::Geo { lon: 15.0, lat: 25.0 })
            .with_detail(
                "Sahara dust travels across the Atlantic, fertilizing Amazon rainforests with nutrients.",
            ),
        Entity::new(3, "Great Barrier Reef", Placement::Geo { lon: 145.0, lat: -18.0 })
            .with_detail(
                "The Great Barrier Reef is the only living structure visible from space, stretching over 2,300 km.",
            ),
        Entity::new(4, "Himalayas", Placement::Geo { lon: 85.0, lat: 28.0 })
            .with_detail(
                "The Himalayas create their own weather patterns and can be seen creating cloud formations from orbit.",
            ),
        Entity::new(5, "Nile River", Placement::Geo { lon: 32.0, lat: 26.0 })
            .with_detail(
                "The Nile appears as a green ribbon through the desert, supporting 95% of Egypt's population.",
            ),
    ]
}

pub fn descriptor() -> MissionDescriptor {
    MissionDescriptor::direct_click(
        MissionId::EarthObservation,
        "Cupola Earth Observation",
        EntityRegistry::new(landmarks()),
        POINTS,
    )
}
