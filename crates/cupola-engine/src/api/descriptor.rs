use glam::Vec3;

use crate::api::types::{CounterId, MissionId, Severity};
use crate::registry::EntityRegistry;

/// How a mission's entities are activated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActivationMode {
    /// The shell hit-tests pointer events and forwards the target entity.
    DirectClick,
    /// The engine measures avatar-to-entity distance every tick.
    Proximity {
        /// Activation radius in scene units.
        radius: f32,
        /// Continuous seconds inside the radius before activation fires.
        /// Zero activates on touch.
        dwell_seconds: f32,
    },
}

/// Points awarded when an entity is discovered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreRule {
    /// Same base points for every entity.
    Flat(u32),
    /// Base points chosen by the entity's severity classification.
    BySeverity {
        medium: u32,
        high: u32,
        critical: u32,
    },
}

impl ScoreRule {
    /// Base points for an entity of the given severity.
    pub fn base_points(&self, severity: Severity) -> u32 {
        match *self {
            ScoreRule::Flat(points) => points,
            ScoreRule::BySeverity {
                medium,
                high,
                critical,
            } => match severity {
                Severity::Low | Severity::Medium => medium,
                Severity::High => high,
                Severity::Critical => critical,
            },
        }
    }
}

/// A threshold on a counter that contributes a fixed share of the
/// mission's completion percentage (e.g. "1 full orbit = 50%").
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterGoal {
    pub id: CounterId,
    pub label: &'static str,
    /// Counter value at which the goal is reached.
    pub target: u32,
    /// Share of the completion percentage this goal is worth.
    pub weight_percent: u8,
}

/// How the mission's completion percentage is derived.
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionRule {
    /// Percentage of registry entities discovered.
    Discovery,
    /// Sum of the weights of reached counter goals.
    Counters(Vec<CounterGoal>),
}

/// Kinematics for the user-controlled avatar in proximity missions.
///
/// Matches the spacewalk free-flight model: thrust impulses accumulate
/// into velocity, positions integrate with per-step damping and clamp to
/// an axis-aligned box around the station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvatarConfig {
    pub start: Vec3,
    /// Symmetric position bounds per axis.
    pub bounds: Vec3,
    /// Velocity gained per thrust impulse unit.
    pub thrust_power: f32,
    /// Velocity retained per integration step.
    pub damping: f32,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            start: Vec3::new(0.0, 3.0, 0.0),
            bounds: Vec3::new(8.0, 5.0, 6.0),
            thrust_power: 0.08,
            damping: 0.995,
        }
    }
}

/// Consumable oxygen supply for EVA missions. Depletes once per wall
/// second and clamps at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OxygenConfig {
    pub initial: f32,
    pub depletion_per_second: f32,
}

/// Extra points for finishing a task under its time limit:
/// `max(0, time_limit - task_elapsed) * rate`, measured from the moment
/// work at the task began.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeBonus {
    pub rate: u32,
}

/// Declarative description of one mission. The engine interprets this;
/// per-mission behavior differences are configuration, not code forks.
#[derive(Debug, Clone)]
pub struct MissionDescriptor {
    pub id: MissionId,
    pub name: &'static str,
    pub registry: EntityRegistry,
    pub activation: ActivationMode,
    pub score: ScoreRule,
    pub time_bonus: Option<TimeBonus>,
    pub completion: CompletionRule,
    pub avatar: Option<AvatarConfig>,
    pub oxygen: Option<OxygenConfig>,
}

impl MissionDescriptor {
    /// A click-to-discover mission with flat scoring — the common case.
    pub fn direct_click(
        id: MissionId,
        name: &'static str,
        registry: EntityRegistry,
        points: u32,
    ) -> Self {
        Self {
            id,
            name,
            registry,
            activation: ActivationMode::DirectClick,
            score: ScoreRule::Flat(points),
            time_bonus: None,
            completion: CompletionRule::Discovery,
            avatar: None,
            oxygen: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_table_falls_back_to_medium_for_low() {
        let rule = ScoreRule::BySeverity {
            medium: 500,
            high: 750,
            critical: 1000,
        };
        assert_eq!(rule.base_points(Severity::Low), 500);
        assert_eq!(rule.base_points(Severity::Medium), 500);
        assert_eq!(rule.base_points(Severity::High), 750);
        assert_eq!(rule.base_points(Severity::Critical), 1000);
    }

    #[test]
    fn flat_rule_ignores_severity() {
        assert_eq!(ScoreRule::Flat(100).base_points(Severity::Critical), 100);
    }
}
