/// Fixed timestep accumulator.
/// Keeps mission logic running at a consistent rate regardless of frame time.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        // Cap to prevent spiral of death (max 10 steps per frame)
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Wall-second clock driven by frame deltas.
///
/// Session timers in the missions tick once per real second (task clocks,
/// oxygen depletion). A hidden tab simply stops feeding deltas — there is
/// no catch-up or drift correction.
#[derive(Debug, Clone)]
pub struct WallClock {
    elapsed_seconds: u32,
    fraction: f32,
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            elapsed_seconds: 0,
            fraction: 0.0,
        }
    }

    /// Feed a frame delta. Returns how many whole seconds elapsed.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.fraction += dt;
        let whole = self.fraction as u32;
        self.fraction -= whole as f32;
        self.elapsed_seconds += whole;
        whole
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn reset(&mut self) {
        self.elapsed_seconds = 0;
        self.fraction = 0.0;
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}
