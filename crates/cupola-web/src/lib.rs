//! `#[wasm_bindgen]` export surface for the Cupola Dash front-end.
//!
//! The engine is data-driven, so one bridge serves all six missions: the
//! shell calls `mission_init(level)` with the level number it is
//! presenting, pushes input events as they happen, ticks once per
//! animation frame, and reads state scalars plus the packed event buffer.

use std::cell::RefCell;

use js_sys::Float32Array;
use wasm_bindgen::prelude::*;

use cupola_engine::{missions, InputEvent, MissionEngine, MissionId, MissionOverview, WireEvent};

mod runner;
mod storage;

pub use runner::MissionRunner;
pub use storage::LocalStorageStore;

thread_local! {
    static RUNNER: RefCell<Option<MissionRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut MissionRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Mission not initialized. Call mission_init() first.");
        f(runner)
    })
}

/// Start (or restart) a mission by level number (1..=6).
/// Returns false for an unknown level.
#[wasm_bindgen]
pub fn mission_init(level: u8) -> bool {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(id) = MissionId::from_level(level) else {
        log::error!("mission_init: unknown level {level}");
        return false;
    };

    let engine = MissionEngine::new(missions::descriptor(id), Box::new(LocalStorageStore::new()));
    let runner = MissionRunner::new(engine);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("cupola-web: mission {level} initialized");
    true
}

#[wasm_bindgen]
pub fn mission_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

/// Pointer activation of an entity marker (already hit-tested by the shell).
#[wasm_bindgen]
pub fn mission_interact(entity_id: u32) {
    with_runner(|r| r.push_input(InputEvent::Interact { raw_id: entity_id }));
}

/// Thrust impulse from the on-screen controls.
#[wasm_bindgen]
pub fn mission_thrust(x: f32, y: f32, z: f32) {
    with_runner(|r| r.push_input(InputEvent::Thrust { x, y, z }));
}

/// Advance a mission counter (orbit completed, sunrise crossed, ...).
#[wasm_bindgen]
pub fn mission_counter(counter_id: u32, amount: u32) {
    with_runner(|r| r.push_input(InputEvent::Counter { raw_id: counter_id, amount }));
}

#[wasm_bindgen]
pub fn mission_reset() {
    with_runner(|r| r.push_input(InputEvent::Reset));
}

// ---- State scalars for the overlay UI ----

#[wasm_bindgen]
pub fn get_score() -> u32 {
    with_runner(|r| r.state().score)
}

#[wasm_bindgen]
pub fn get_discovered() -> u32 {
    with_runner(|r| r.state().discovered)
}

#[wasm_bindgen]
pub fn get_total_entities() -> u32 {
    with_runner(|r| r.state().total_entities)
}

#[wasm_bindgen]
pub fn get_percentage() -> u8 {
    with_runner(|r| r.state().percentage)
}

#[wasm_bindgen]
pub fn get_complete() -> bool {
    with_runner(|r| r.state().complete)
}

/// Sorted discovered entity ids (Uint32Array on the JS side).
#[wasm_bindgen]
pub fn get_discovered_ids() -> Vec<u32> {
    with_runner(|r| r.engine().discovered_ids())
}

/// Live counter tally (orbits, sunrises, ...) for the HUD. Returns 0 for
/// counters the current mission does not track.
#[wasm_bindgen]
pub fn get_counter_value(counter_id: u32) -> u32 {
    with_runner(|r| r.engine().counter_value(counter_id).unwrap_or(0))
}

#[wasm_bindgen]
pub fn get_elapsed_seconds() -> u32 {
    with_runner(|r| r.state().elapsed_seconds)
}

/// Oxygen level, or -1 for missions without a supply.
#[wasm_bindgen]
pub fn get_oxygen() -> f32 {
    with_runner(|r| r.state().oxygen.unwrap_or(-1.0))
}

#[wasm_bindgen]
pub fn get_avatar_x() -> f32 {
    with_runner(|r| r.avatar_position()[0])
}

#[wasm_bindgen]
pub fn get_avatar_y() -> f32 {
    with_runner(|r| r.avatar_position()[1])
}

#[wasm_bindgen]
pub fn get_avatar_z() -> f32 {
    with_runner(|r| r.avatar_position()[2])
}

// ---- Packed event buffer ----

/// This frame's events copied out as a `Float32Array`:
/// [`get_events_len`] events of [`get_event_floats`] floats each.
#[wasm_bindgen]
pub fn get_events() -> Float32Array {
    with_runner(|r| Float32Array::from(r.packed_events()))
}

#[wasm_bindgen]
pub fn get_events_len() -> u32 {
    with_runner(|r| r.events_len())
}

#[wasm_bindgen]
pub fn get_event_floats() -> u32 {
    WireEvent::FLOATS as u32
}

// ---- Mission list ----

/// Best-ever percentages for all six missions as a JSON object keyed by
/// level number. Folds in the live session when a mission is running.
#[wasm_bindgen]
pub fn overview_json() -> String {
    let store = LocalStorageStore::new();
    let mut overview = MissionOverview::load(&store);
    RUNNER.with(|cell| {
        if let Some(runner) = cell.borrow().as_ref() {
            let state = runner.state();
            overview.merge_session(runner.engine().descriptor().id, state.percentage);
        }
    });
    overview.to_json()
}
