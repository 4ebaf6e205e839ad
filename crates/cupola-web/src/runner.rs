use cupola_engine::{
    FixedTimestep, InputEvent, InputQueue, MissionEngine, MissionState, WireEvent,
};

/// Simulation rate for mission logic. The render loop feeds real frame
/// deltas; the engine steps at this fixed rate.
const FIXED_DT: f32 = 1.0 / 60.0;

/// Frame-loop runner that wires the mission engine to the browser.
///
/// The shell pushes input events between frames; `tick` applies them,
/// steps the engine at a fixed rate, and packs emitted progress events
/// into a flat f32 buffer for SharedArrayBuffer-style reads from
/// TypeScript.
pub struct MissionRunner {
    engine: MissionEngine,
    input: InputQueue,
    timestep: FixedTimestep,
    /// Packed events from the most recent frame.
    wire_events: Vec<WireEvent>,
}

impl MissionRunner {
    pub fn new(engine: MissionEngine) -> Self {
        Self {
            engine,
            input: InputQueue::new(),
            timestep: FixedTimestep::new(FIXED_DT),
            wire_events: Vec::with_capacity(16),
        }
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: apply queued input, step the engine, pack events.
    pub fn tick(&mut self, dt: f32) {
        self.engine.clear_frame_events();

        // Input applies once per frame, not once per fixed step — a
        // thrust impulse must not multiply on slow frames.
        self.engine.apply_input(&self.input);
        self.input.drain();

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.engine.tick(self.timestep.dt());
        }

        self.wire_events.clear();
        for event in self.engine.events() {
            self.wire_events.push((*event).into());
        }
    }

    pub fn state(&self) -> MissionState {
        self.engine.state()
    }

    pub fn engine(&self) -> &MissionEngine {
        &self.engine
    }

    /// This frame's events as a flat float slice, ready to copy to the
    /// JS side ([`WireEvent::FLOATS`] floats per event).
    pub fn packed_events(&self) -> &[f32] {
        bytemuck::cast_slice::<WireEvent, f32>(&self.wire_events)
    }

    /// Number of packed events (each [`WireEvent::FLOATS`] floats wide).
    pub fn events_len(&self) -> u32 {
        self.wire_events.len() as u32
    }

    pub fn avatar_position(&self) -> [f32; 3] {
        self.engine
            .avatar_position()
            .map(|p| [p.x, p.y, p.z])
            .unwrap_or([0.0; 3])
    }
}
