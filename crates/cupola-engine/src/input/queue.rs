/// Input event types the mission engine understands.
/// The shell owns pointer hit-testing and control mapping; by the time an
/// event reaches this queue it is already in mission terms.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// The user's pointer activated the rendered marker for an entity.
    /// Carries the raw id so malformed shell events can be rejected
    /// instead of panicking.
    Interact { raw_id: u32 },
    /// A thrust impulse for the avatar (free-flight missions). Replaces
    /// the window-attached thrust callback of the original front-end.
    Thrust { x: f32, y: f32, z: f32 },
    /// Advance a mission counter (e.g. the shell detected a completed
    /// orbit or a terminator crossing).
    Counter { raw_id: u32, amount: u32 },
    /// Restart the session.
    Reset,
}

/// A queue of input events.
/// JS writes events into the queue; the engine reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Interact { raw_id: 3 });
        q.push(InputEvent::Thrust { x: 0.0, y: 1.0, z: 0.0 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }
}
