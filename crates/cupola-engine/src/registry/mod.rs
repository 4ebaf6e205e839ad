//! Static points of interest for a mission.
//!
//! The registry is fixed at build time and never mutated: completion is
//! tracked in the parallel progress state, so entity identity stays stable
//! across resets.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::api::types::{EntityId, Severity};

/// Where an entity sits in the mission scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Placement {
    /// Degrees of longitude/latitude, projected onto a sphere around the
    /// rendered Earth. Used by the globe missions.
    Geo { lon: f32, lat: f32 },
    /// Raw point in scene space. Used by the free-flight missions.
    Point { x: f32, y: f32, z: f32 },
}

/// Marker sphere radius used by the globe missions: slightly outside the
/// Earth surface so markers stay visible.
pub const GEO_MARKER_RADIUS: f32 = 2.05;

impl Placement {
    /// Resolve to a scene-space position.
    ///
    /// Geo placements use the standard spherical mapping: polar angle from
    /// latitude, azimuth from longitude shifted so lon = -180 maps to
    /// theta = 0.
    pub fn to_vec3(self) -> Vec3 {
        match self {
            Placement::Point { x, y, z } => Vec3::new(x, y, z),
            Placement::Geo { lon, lat } => {
                let phi = (90.0 - lat).to_radians();
                let theta = (lon + 180.0).to_radians();
                Vec3::new(
                    GEO_MARKER_RADIUS * phi.sin() * theta.cos(),
                    GEO_MARKER_RADIUS * phi.cos(),
                    GEO_MARKER_RADIUS * phi.sin() * theta.sin(),
                )
            }
        }
    }
}

/// One discoverable/actionable point of interest.
///
/// Immutable mission content: the "completed" flag the original UI kept on
/// these lives in [`crate::core::progress::ProgressTracker`] instead.
#[derive(Debug, Clone, Serialize)]
pub struct Entity {
    pub id: EntityId,
    /// Display label.
    pub name: &'static str,
    pub placement: Placement,
    pub severity: Severity,
    /// Time budget in seconds for time-boxed scoring, if any.
    pub time_limit: Option<u32>,
    /// Educational blurb shown by the shell on discovery.
    pub detail: &'static str,
}

impl Entity {
    pub fn new(id: u32, name: &'static str, placement: Placement) -> Self {
        Self {
            id: EntityId(id),
            name,
            placement,
            severity: Severity::Low,
            time_limit: None,
            detail: "",
        }
    }

    // -- Builder pattern --

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_time_limit(mut self, seconds: u32) -> Self {
        self.time_limit = Some(seconds);
        self
    }

    pub fn with_detail(mut self, detail: &'static str) -> Self {
        self.detail = detail;
        self
    }

    /// Scene-space position of this entity.
    pub fn position(&self) -> Vec3 {
        self.placement.to_vec3()
    }
}

/// Immutable ordered entity sequence for one mission.
/// Flat Vec storage — entity counts are single digits, not millions.
#[derive(Debug, Clone)]
pub struct EntityRegistry {
    entities: Vec<Entity>,
}

impl EntityRegistry {
    pub fn new(entities: Vec<Entity>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<u32> = entities.iter().map(|e| e.id.0).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "duplicate entity ids in registry"
        );
        Self { entities }
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
