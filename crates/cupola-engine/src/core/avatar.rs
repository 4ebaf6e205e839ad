//! Kinematic avatar body for the free-flight missions.
//!
//! Thrust arrives as explicit input events (no ambient globals): each
//! impulse adds `direction * thrust_power` to the velocity, integration
//! applies per-step damping, and positions clamp to an axis-aligned box
//! around the station.

use glam::Vec3;

use crate::api::descriptor::AvatarConfig;

#[derive(Debug, Clone)]
pub struct AvatarBody {
    config: AvatarConfig,
    pos: Vec3,
    vel: Vec3,
}

impl AvatarBody {
    pub fn new(config: AvatarConfig) -> Self {
        Self {
            config,
            pos: config.start,
            vel: Vec3::ZERO,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.pos
    }

    pub fn velocity(&self) -> Vec3 {
        self.vel
    }

    /// Apply a thrust impulse. `direction` need not be normalized; the
    /// shell sends unit axis vectors scaled by its own control weighting.
    pub fn thrust(&mut self, direction: Vec3) {
        self.vel += direction * self.config.thrust_power;
    }

    /// Integrate one step: drift by velocity, damp, clamp to bounds.
    pub fn step(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        let b = self.config.bounds;
        self.pos = self.pos.clamp(-b, b);
        self.vel *= self.config.damping;
    }

    /// Back to the start position, at rest.
    pub fn reset(&mut self) {
        self.pos = self.config.start;
        self.vel = Vec3::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> AvatarBody {
        AvatarBody::new(AvatarConfig::default())
    }

    #[test]
    fn thrust_accumulates_velocity() {
        let mut b = body();
        b.thrust(Vec3::X);
        b.thrust(Vec3::X);
        assert!((b.velocity().x - 0.16).abs() < 1e-6);
    }

    #[test]
    fn step_moves_and_damps() {
        let mut b = body();
        b.thrust(Vec3::new(10.0, 0.0, 0.0));
        let v0 = b.velocity().x;
        b.step(1.0);
        assert!(b.position().x > 0.0);
        assert!(b.velocity().x < v0);
    }

    #[test]
    fn position_clamps_to_bounds() {
        let mut b = body();
        b.thrust(Vec3::new(1000.0, 1000.0, 1000.0));
        for _ in 0..600 {
            b.step(1.0 / 60.0);
        }
        let p = b.position();
        assert!(p.x <= 8.0 && p.y <= 5.0 && p.z <= 6.0, "escaped bounds: {p:?}");
    }

    #[test]
    fn reset_returns_to_start_at_rest() {
        let mut b = body();
        b.thrust(Vec3::ONE);
        b.step(1.0);
        b.reset();
        assert_eq!(b.position(), Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(b.velocity(), Vec3::ZERO);
    }
}
