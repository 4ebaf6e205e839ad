//! Score and completion accumulation.
//!
//! The tracker owns everything that resets between sessions: the score,
//! the discovered-id set, and counter values. Completion percentage is
//! always recomputed from those — it is never stored as mutable state.

use std::collections::HashSet;

use crate::api::descriptor::{CompletionRule, CounterGoal};
use crate::api::types::{CounterId, EntityId};

/// Per-session progress state for one mission.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    score: u32,
    discovered: HashSet<EntityId>,
    /// (goal, current value) pairs for counter-goal missions; empty for
    /// discovery missions.
    counters: Vec<(CounterGoal, u32)>,
    total_entities: usize,
    use_counters: bool,
}

impl ProgressTracker {
    pub fn new(total_entities: usize, completion: &CompletionRule) -> Self {
        let (counters, use_counters) = match completion {
            CompletionRule::Discovery => (Vec::new(), false),
            CompletionRule::Counters(goals) => {
                (goals.iter().map(|g| (*g, 0)).collect(), true)
            }
        };
        Self {
            score: 0,
            discovered: HashSet::new(),
            counters,
            total_entities,
            use_counters,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn discovered_count(&self) -> u32 {
        self.discovered.len() as u32
    }

    pub fn is_discovered(&self, id: EntityId) -> bool {
        self.discovered.contains(&id)
    }

    /// Discovered ids in unspecified order (insertion order is irrelevant
    /// to every derived value).
    pub fn discovered_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.discovered.iter().copied()
    }

    /// Record a first-time discovery and award points. Returns false if
    /// the id was already discovered (idempotent no-op).
    pub fn record_discovery(&mut self, id: EntityId, points: u32) -> bool {
        if !self.discovered.insert(id) {
            return false;
        }
        self.score += points;
        true
    }

    /// Current value of a counter, if the mission tracks it.
    pub fn counter_value(&self, id: CounterId) -> Option<u32> {
        self.counters
            .iter()
            .find(|(g, _)| g.id == id)
            .map(|(_, v)| *v)
    }

    /// Advance a counter. Returns `Some(goal)` when this advance crossed
    /// the goal's target, `None` otherwise (including unknown counters —
    /// the caller decides whether that is an error).
    pub fn advance_counter(&mut self, id: CounterId, amount: u32) -> Option<CounterGoal> {
        let (goal, value) = self.counters.iter_mut().find(|(g, _)| g.id == id)?;
        let before = *value;
        *value = value.saturating_add(amount);
        if before < goal.target && *value >= goal.target {
            Some(*goal)
        } else {
            None
        }
    }

    pub fn has_counter(&self, id: CounterId) -> bool {
        self.counters.iter().any(|(g, _)| g.id == id)
    }

    /// Derived completion percentage, 0–100.
    pub fn percentage(&self) -> u8 {
        if self.use_counters {
            let sum: u32 = self
                .counters
                .iter()
                .filter(|(g, v)| *v >= g.target)
                .map(|(g, _)| g.weight_percent as u32)
                .sum();
            sum.min(100) as u8
        } else if self.total_entities == 0 {
            0
        } else {
            let pct =
                (100.0 * self.discovered.len() as f64 / self.total_entities as f64).round();
            (pct as u32).min(100) as u8
        }
    }

    /// Mission-complete condition: every entity discovered, or every
    /// counter goal reached. Pure derived boolean — there is no separate
    /// state machine.
    pub fn is_complete(&self) -> bool {
        if self.use_counters {
            self.counters.iter().all(|(g, v)| *v >= g.target)
        } else {
            self.total_entities > 0 && self.discovered.len() == self.total_entities
        }
    }

    /// Clear score, discoveries, and counters back to initial values.
    pub fn reset(&mut self) {
        self.score = 0;
        self.discovered.clear();
        for (_, value) in &mut self.counters {
            *value = 0;
        }
    }
}
