use glam::Vec3;
use serde::Serialize;

use crate::api::descriptor::{ActivationMode, MissionDescriptor};
use crate::api::types::{CounterId, EngineError, EntityId, ProgressEvent};
use crate::core::avatar::AvatarBody;
use crate::core::detector::ProximityDetector;
use crate::core::progress::ProgressTracker;
use crate::core::time::WallClock;
use crate::input::queue::{InputEvent, InputQueue};
use crate::persist::ProgressStore;

/// Snapshot of mission state for the shell's overlay UI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MissionState {
    pub score: u32,
    pub discovered: u32,
    pub total_entities: u32,
    pub percentage: u8,
    pub complete: bool,
    pub elapsed_seconds: u32,
    pub oxygen: Option<f32>,
}

/// The mission progress engine: one instance per running mission.
///
/// Single-threaded and tick-driven. All state transitions (`interact`,
/// `tick`, `reset`) are synchronous and complete within one call; the only
/// discipline required of callers is that re-activating a completed entity
/// is a safe no-op, which the engine guarantees.
pub struct MissionEngine {
    descriptor: MissionDescriptor,
    progress: ProgressTracker,
    detector: Option<ProximityDetector>,
    avatar: Option<AvatarBody>,
    clock: WallClock,
    oxygen: Option<f32>,
    events: Vec<ProgressEvent>,
    store: Box<dyn ProgressStore>,
    store_degraded: bool,
}

impl MissionEngine {
    pub fn new(descriptor: MissionDescriptor, store: Box<dyn ProgressStore>) -> Self {
        let progress =
            ProgressTracker::new(descriptor.registry.len(), &descriptor.completion);
        let detector = match descriptor.activation {
            ActivationMode::Proximity {
                radius,
                dwell_seconds,
            } => Some(ProximityDetector::new(
                radius,
                dwell_seconds,
                &descriptor.registry,
            )),
            ActivationMode::DirectClick => None,
        };
        let avatar = descriptor.avatar.map(AvatarBody::new);
        let oxygen = descriptor.oxygen.map(|o| o.initial);

        Self {
            descriptor,
            progress,
            detector,
            avatar,
            clock: WallClock::new(),
            oxygen,
            events: Vec::with_capacity(8),
            store,
            store_degraded: false,
        }
    }

    pub fn descriptor(&self) -> &MissionDescriptor {
        &self.descriptor
    }

    pub fn state(&self) -> MissionState {
        MissionState {
            score: self.progress.score(),
            discovered: self.progress.discovered_count(),
            total_entities: self.descriptor.registry.len() as u32,
            percentage: self.progress.percentage(),
            complete: self.progress.is_complete(),
            elapsed_seconds: self.clock.elapsed_seconds(),
            oxygen: self.oxygen,
        }
    }

    pub fn avatar_position(&self) -> Option<Vec3> {
        self.avatar.as_ref().map(|a| a.position())
    }

    /// Live value of a mission counter, for HUD tallies (orbits seen,
    /// sunrises crossed). `None` when the mission does not track it.
    pub fn counter_value(&self, raw_id: u32) -> Option<u32> {
        self.progress.counter_value(CounterId(raw_id))
    }

    /// Ids discovered so far, sorted (for marker highlighting in the shell).
    pub fn discovered_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.progress.discovered_ids().map(|id| id.0).collect();
        ids.sort_unstable();
        ids
    }

    /// Events emitted since the last [`Self::clear_frame_events`].
    pub fn events(&self) -> &[ProgressEvent] {
        &self.events
    }

    /// Clear per-frame transient data. The runner calls this at the top of
    /// each frame.
    pub fn clear_frame_events(&mut self) {
        self.events.clear();
    }

    /// Direct activation from a pointer event the shell already hit-tested.
    ///
    /// Unknown ids are rejected and reported through the event queue; the
    /// engine state is untouched and subsequent interactions keep working.
    /// Re-activating a discovered entity is an idempotent no-op.
    pub fn interact(&mut self, raw_id: u32) -> Result<(), EngineError> {
        let id = EntityId(raw_id);
        if !self.descriptor.registry.contains(id) {
            self.events.push(ProgressEvent::InteractionRejected { raw_id });
            return Err(EngineError::UnknownEntity(raw_id));
        }
        self.activate(id, 0.0);
        Ok(())
    }

    /// Thrust impulse for the avatar. Ignored for missions without one.
    pub fn thrust(&mut self, direction: Vec3) {
        if let Some(avatar) = &mut self.avatar {
            avatar.thrust(direction);
        }
    }

    /// Advance a mission counter (shell-detected orbit, sunrise, ...).
    pub fn advance_counter(&mut self, raw_id: u32, amount: u32) -> Result<(), EngineError> {
        let id = CounterId(raw_id);
        if !self.progress.has_counter(id) {
            self.events.push(ProgressEvent::InteractionRejected { raw_id });
            return Err(EngineError::UnknownCounter(raw_id));
        }
        if let Some(goal) = self.progress.advance_counter(id, amount) {
            self.events.push(ProgressEvent::GoalReached { counter: goal.id });
            self.emit_state_changed();
            self.persist();
        }
        Ok(())
    }

    /// One simulation tick: integrate the avatar, run proximity
    /// detection, advance wall timers.
    pub fn tick(&mut self, dt: f32) {
        if let Some(avatar) = &mut self.avatar {
            avatar.step(dt);
        }

        let mut fired: Vec<(EntityId, f32)> = Vec::new();
        if let Some(pos) = self.avatar.as_ref().map(|a| a.position()) {
            if let Some(detector) = &mut self.detector {
                let progress = &self.progress;
                detector.tick(
                    pos,
                    dt,
                    &self.descriptor.registry,
                    |id| progress.is_discovered(id),
                    |id, held| fired.push((id, held)),
                );
            }
        }
        for (id, held) in fired {
            self.activate(id, held);
        }

        let seconds = self.clock.advance(dt);
        if seconds > 0 {
            self.deplete_oxygen(seconds);
        }
    }

    /// Apply every queued input event. The caller drains the queue
    /// afterwards (same contract as the frame loop in the web runner).
    pub fn apply_input(&mut self, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::Interact { raw_id } => {
                    // Rejection is already reported via the event queue.
                    let _ = self.interact(raw_id);
                }
                InputEvent::Thrust { x, y, z } => self.thrust(Vec3::new(x, y, z)),
                InputEvent::Counter { raw_id, amount } => {
                    let _ = self.advance_counter(raw_id, amount);
                }
                InputEvent::Reset => self.reset(),
            }
        }
    }

    /// Restart the session: score, discoveries, counters, dwell progress,
    /// avatar, timers, and oxygen all return to initial values in one
    /// step. The persisted best is deliberately left alone.
    pub fn reset(&mut self) {
        self.progress.reset();
        if let Some(detector) = &mut self.detector {
            detector.reset();
        }
        if let Some(avatar) = &mut self.avatar {
            avatar.reset();
        }
        self.clock.reset();
        self.oxygen = self.descriptor.oxygen.map(|o| o.initial);
        self.emit_state_changed();
    }

    // -- internals --

    fn activate(&mut self, id: EntityId, task_elapsed: f32) {
        let Some(entity) = self.descriptor.registry.get(id) else {
            return;
        };
        let mut delta = self.descriptor.score.base_points(entity.severity);
        if let (Some(bonus), Some(limit)) = (self.descriptor.time_bonus, entity.time_limit) {
            let remaining = (limit as f32 - task_elapsed).max(0.0);
            delta += remaining as u32 * bonus.rate;
        }

        if !self.progress.record_discovery(id, delta) {
            return;
        }
        self.events.push(ProgressEvent::EntityDiscovered { id, delta });
        self.emit_state_changed();
        self.persist();
    }

    fn emit_state_changed(&mut self) {
        let state = self.state();
        self.events.push(ProgressEvent::StateChanged {
            score: state.score,
            discovered: state.discovered,
            percentage: state.percentage,
            complete: state.complete,
        });
    }

    /// Write-through of the current percentage. A failing store degrades
    /// to in-memory progress for the rest of the session.
    fn persist(&mut self) {
        let percentage = self.progress.percentage();
        if let Err(err) = self.store.write(self.descriptor.id, percentage) {
            if !self.store_degraded {
                log::warn!(
                    "progress store unavailable, continuing in-memory: {err}"
                );
                self.store_degraded = true;
            }
        }
    }

    fn deplete_oxygen(&mut self, seconds: u32) {
        let Some(config) = self.descriptor.oxygen else {
            return;
        };
        let Some(level) = &mut self.oxygen else {
            return;
        };
        let before = *level;
        *level = (*level - config.depletion_per_second * seconds as f32).max(0.0);
        if before > 0.0 && *level == 0.0 {
            self.events.push(ProgressEvent::OxygenDepleted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::descriptor::{CompletionRule, CounterGoal, OxygenConfig, ScoreRule};
    use crate::api::types::MissionId;
    use crate::persist::{MemoryStore, UnavailableStore};
    use crate::registry::{Entity, EntityRegistry, Placement};

    fn click_mission(points: u32, count: u32) -> MissionDescriptor {
        let entities = (1..=count)
            .map(|i| {
                Entity::new(i, "poi", Placement::Point {
                    x: i as f32,
                    y: 0.0,
                    z: 0.0,
                })
            })
            .collect();
        MissionDescriptor::direct_click(
            MissionId::EarthObservation,
            "test",
            EntityRegistry::new(entities),
            points,
        )
    }

    fn engine(descriptor: MissionDescriptor) -> MissionEngine {
        MissionEngine::new(descriptor, Box::new(MemoryStore::new()))
    }

    #[test]
    fn five_flat_discoveries_scenario() {
        let mut e = engine(click_mission(100, 5));
        let scores = [100, 200, 300, 400, 500];
        let pcts = [20, 40, 60, 80, 100];
        for i in 0..5u32 {
            e.interact(i + 1).unwrap();
            let state = e.state();
            assert_eq!(state.score, scores[i as usize]);
            assert_eq!(state.percentage, pcts[i as usize]);
            assert_eq!(state.complete, i == 4);
        }
    }

    #[test]
    fn repeat_interaction_is_idempotent() {
        let mut e = engine(click_mission(100, 5));
        e.interact(1).unwrap();
        let before = e.state();
        e.clear_frame_events();
        e.interact(1).unwrap();
        assert_eq!(e.state(), before);
        assert!(e.events().is_empty());
    }

    #[test]
    fn unknown_entity_is_rejected_without_corruption() {
        let mut e = engine(click_mission(100, 5));
        e.interact(2).unwrap();
        assert!(matches!(
            e.interact(99),
            Err(EngineError::UnknownEntity(99))
        ));
        assert!(e
            .events()
            .contains(&ProgressEvent::InteractionRejected { raw_id: 99 }));
        // Still serving subsequent events.
        e.interact(3).unwrap();
        assert_eq!(e.state().score, 200);
    }

    #[test]
    fn dead_store_keeps_mission_playable() {
        let mut e = MissionEngine::new(click_mission(100, 5), Box::new(UnavailableStore));
        for id in 1..=5 {
            e.interact(id).unwrap();
        }
        let state = e.state();
        assert_eq!(state.score, 500);
        assert_eq!(state.percentage, 100);
        assert!(state.complete);
    }

    #[test]
    fn reset_restores_everything() {
        let mut e = engine(click_mission(100, 5));
        e.interact(1).unwrap();
        e.tick(4.0);
        e.reset();
        let state = e.state();
        assert_eq!(state.score, 0);
        assert_eq!(state.discovered, 0);
        assert_eq!(state.percentage, 0);
        assert_eq!(state.elapsed_seconds, 0);
    }

    #[test]
    fn counter_goals_drive_percentage() {
        let descriptor = MissionDescriptor {
            completion: CompletionRule::Counters(vec![
                CounterGoal {
                    id: CounterId(1),
                    label: "orbits",
                    target: 1,
                    weight_percent: 50,
                },
                CounterGoal {
                    id: CounterId(2),
                    label: "sunrises",
                    target: 5,
                    weight_percent: 50,
                },
            ]),
            registry: EntityRegistry::new(Vec::new()),
            score: ScoreRule::Flat(0),
            ..click_mission(0, 0)
        };
        let mut e = engine(descriptor);
        e.advance_counter(1, 1).unwrap();
        assert_eq!(e.state().percentage, 50);
        assert!(e
            .events()
            .contains(&ProgressEvent::GoalReached { counter: CounterId(1) }));
        e.advance_counter(2, 5).unwrap();
        assert_eq!(e.state().percentage, 100);
        assert!(e.state().complete);

        assert!(matches!(
            e.advance_counter(9, 1),
            Err(EngineError::UnknownCounter(9))
        ));
    }

    #[test]
    fn counter_values_readable_for_hud() {
        let descriptor = MissionDescriptor {
            completion: CompletionRule::Counters(vec![CounterGoal {
                id: CounterId(2),
                label: "sunrises",
                target: 5,
                weight_percent: 100,
            }]),
            registry: EntityRegistry::new(Vec::new()),
            score: ScoreRule::Flat(0),
            ..click_mission(0, 0)
        };
        let mut e = engine(descriptor);
        assert_eq!(e.counter_value(2), Some(0));

        e.advance_counter(2, 1).unwrap();
        e.advance_counter(2, 2).unwrap();
        assert_eq!(e.counter_value(2), Some(3));

        // Untracked counters read as absent, and discovery missions track
        // none at all.
        assert_eq!(e.counter_value(9), None);
        assert_eq!(engine(click_mission(100, 5)).counter_value(2), None);

        e.reset();
        assert_eq!(e.counter_value(2), Some(0));
    }

    #[test]
    fn oxygen_depletes_once_per_second_and_clamps() {
        let mut descriptor = click_mission(0, 1);
        descriptor.oxygen = Some(OxygenConfig {
            initial: 0.3,
            depletion_per_second: 0.1,
        });
        let mut e = engine(descriptor);

        // Sixty 1/60 s frames: exactly one wall second.
        for _ in 0..60 {
            e.tick(1.0 / 60.0);
        }
        let oxygen = e.state().oxygen.unwrap();
        assert!((oxygen - 0.2).abs() < 1e-5, "oxygen {oxygen}");

        for _ in 0..300 {
            e.tick(1.0 / 60.0);
        }
        assert_eq!(e.state().oxygen, Some(0.0));
        assert!(e.events().contains(&ProgressEvent::OxygenDepleted));
    }

    #[test]
    fn input_queue_round_trip() {
        let mut e = engine(click_mission(100, 5));
        let mut input = InputQueue::new();
        input.push(InputEvent::Interact { raw_id: 1 });
        input.push(InputEvent::Interact { raw_id: 77 });
        input.push(InputEvent::Interact { raw_id: 2 });
        e.apply_input(&input);
        input.drain();
        assert_eq!(e.state().score, 200);
    }
}
