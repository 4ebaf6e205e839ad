//! Proximity activation detection.
//!
//! Direct-click missions never reach this module — the shell hit-tests the
//! pointer and forwards the entity id straight to the engine. Proximity
//! missions scan every incomplete entity once per tick: inside the radius
//! the dwell clock accumulates, outside it resets to zero, and activation
//! fires the tick the accumulated dwell reaches the requirement.

use glam::Vec3;

use crate::api::types::EntityId;
use crate::registry::EntityRegistry;

/// Dwell bookkeeping for one entity.
#[derive(Debug, Clone, Copy)]
struct DwellState {
    id: EntityId,
    /// Continuous seconds the avatar has been inside the radius.
    held: f32,
}

/// Per-tick proximity scanner with optional dwell requirement.
#[derive(Debug, Clone)]
pub struct ProximityDetector {
    radius: f32,
    dwell_seconds: f32,
    dwell: Vec<DwellState>,
}

impl ProximityDetector {
    pub fn new(radius: f32, dwell_seconds: f32, registry: &EntityRegistry) -> Self {
        Self {
            radius,
            dwell_seconds,
            dwell: registry
                .iter()
                .map(|e| DwellState { id: e.id, held: 0.0 })
                .collect(),
        }
    }

    /// Seconds of continuous proximity accrued at a given entity.
    /// Also the task clock the time bonus measures against.
    pub fn held_seconds(&self, id: EntityId) -> f32 {
        self.dwell
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.held)
            .unwrap_or(0.0)
    }

    /// Scan one tick. `is_complete` filters entities that no longer need
    /// checking. Every qualifying entity activates independently in the
    /// same tick; there is no single-winner rule.
    pub fn tick(
        &mut self,
        avatar: Vec3,
        dt: f32,
        registry: &EntityRegistry,
        is_complete: impl Fn(EntityId) -> bool,
        mut activate: impl FnMut(EntityId, f32),
    ) {
        for state in &mut self.dwell {
            if is_complete(state.id) {
                state.held = 0.0;
                continue;
            }
            let Some(entity) = registry.get(state.id) else {
                continue;
            };
            if avatar.distance(entity.position()) < self.radius {
                state.held += dt;
                if state.held >= self.dwell_seconds {
                    activate(state.id, state.held);
                }
            } else {
                state.held = 0.0;
            }
        }
    }

    /// Forget all dwell progress (session reset).
    pub fn reset(&mut self) {
        for state in &mut self.dwell {
            state.held = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Entity, Placement};
    use std::collections::HashSet;

    fn registry() -> EntityRegistry {
        EntityRegistry::new(vec![
            Entity::new(1, "near", Placement::Point { x: 0.0, y: 0.0, z: 0.0 }),
            Entity::new(2, "far", Placement::Point { x: 10.0, y: 0.0, z: 0.0 }),
        ])
    }

    fn run_tick(
        det: &mut ProximityDetector,
        reg: &EntityRegistry,
        avatar: Vec3,
        done: &HashSet<EntityId>,
    ) -> Vec<EntityId> {
        let mut fired = Vec::new();
        det.tick(avatar, 1.0, reg, |id| done.contains(&id), |id, _| fired.push(id));
        fired
    }

    #[test]
    fn immediate_activation_without_dwell() {
        let reg = registry();
        let mut det = ProximityDetector::new(1.0, 0.0, &reg);
        let fired = run_tick(&mut det, &reg, Vec3::new(0.5, 0.0, 0.0), &HashSet::new());
        assert_eq!(fired, vec![EntityId(1)]);
    }

    #[test]
    fn dwell_fires_on_third_one_second_tick() {
        let reg = registry();
        let mut det = ProximityDetector::new(1.0, 3.0, &reg);
        let at_entity = Vec3::ZERO;
        let none = HashSet::new();

        // Tick 0 and 1: inside the radius but dwell not yet met.
        assert!(run_tick(&mut det, &reg, at_entity, &none).is_empty());
        assert!(run_tick(&mut det, &reg, at_entity, &none).is_empty());
        // Tick 2: three accumulated seconds — fires now, not before.
        assert_eq!(run_tick(&mut det, &reg, at_entity, &none), vec![EntityId(1)]);
    }

    #[test]
    fn leaving_radius_restarts_dwell() {
        let reg = registry();
        let mut det = ProximityDetector::new(1.0, 3.0, &reg);
        let at_entity = Vec3::ZERO;
        let away = Vec3::new(5.0, 0.0, 0.0);
        let none = HashSet::new();

        run_tick(&mut det, &reg, at_entity, &none);
        run_tick(&mut det, &reg, at_entity, &none);
        // Leave at tick 2: dwell resets to zero.
        run_tick(&mut det, &reg, away, &none);
        assert_eq!(det.held_seconds(EntityId(1)), 0.0);
        // Re-enter: takes three full ticks again.
        assert!(run_tick(&mut det, &reg, at_entity, &none).is_empty());
        assert!(run_tick(&mut det, &reg, at_entity, &none).is_empty());
        assert_eq!(run_tick(&mut det, &reg, at_entity, &none), vec![EntityId(1)]);
    }

    #[test]
    fn multiple_entities_activate_in_the_same_tick() {
        let reg = EntityRegistry::new(vec![
            Entity::new(1, "a", Placement::Point { x: 0.3, y: 0.0, z: 0.0 }),
            Entity::new(2, "b", Placement::Point { x: -0.3, y: 0.0, z: 0.0 }),
        ]);
        let mut det = ProximityDetector::new(1.0, 0.0, &reg);
        let fired = run_tick(&mut det, &reg, Vec3::ZERO, &HashSet::new());
        assert_eq!(fired.len(), 2);
    }

    #[test]
    fn completed_entities_are_skipped() {
        let reg = registry();
        let mut det = ProximityDetector::new(1.0, 0.0, &reg);
        let done: HashSet<EntityId> = [EntityId(1)].into_iter().collect();
        assert!(run_tick(&mut det, &reg, Vec3::ZERO, &done).is_empty());
    }
}
