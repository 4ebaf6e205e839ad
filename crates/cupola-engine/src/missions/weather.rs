//! Mission 3 — severe weather tracking.
//!
//! Five active weather systems on the globe, 200 points per
//! identification.

use crate::api::descriptor::MissionDescriptor;
use crate::api::types::MissionId;
use crate::registry::{Entity, EntityRegistry, Placement};

const POINTS: u32 = 200;

fn systems() -> Vec<Entity> {
    vec![
        Entity::new(1, "Hurricane Maria", Placement::Geo { lon: -60.0, lat: 15.0 })
            .with_detail("A category-4 hurricane tracked across the Atlantic basin."),
        Entity::new(2, "Typhoon Haima", Placement::Geo { lon: 140.0, lat: 20.0 })
            .with_detail("A western Pacific typhoon approaching the Philippine Sea."),
        Entity::new(3, "Storm System Alpha", Placement::Geo { lon: -80.0, lat: 45.0 })
            .with_detail("A mid-latitude storm front sweeping the Great Lakes."),
        Entity::new(4, "Monsoon System", Placement::Geo { lon: 80.0, lat: 10.0 })
            .with_detail("Seasonal monsoon rains over the Indian subcontinent."),
        Entity::new(5, "Polar Vortex", Placement::Geo { lon: 0.0, lat: 70.0 })
            .with_detail("A lobe of the polar vortex dipping toward northern Europe."),
    ]
}

pub fn descriptor() -> MissionDescriptor {
    MissionDescriptor::direct_click(
        MissionId::WeatherWatch,
        "Weather Watch",
        EntityRegistry::new(systems()),
        POINTS,
    )
}
