//! Explosion particles (cosmetic, never collide)

use glam::Vec2;

use super::entity::{Body, Bounds, Entity};
use super::rng::RandomSource;
use crate::consts::*;
use crate::heading;

/// A fading spark
///
/// Damping is applied per update call, not per second, so faster frame rates
/// slow particles sooner. Visual tuning relies on this; keep it call-rate based.
#[derive(Debug, Clone)]
pub struct Particle {
    pub body: Body,
    lifetime: f32,
    max_lifetime: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, max_lifetime: f32) -> Self {
        Self {
            body: Body::new(pos, vel, 0.0, PARTICLE_RADIUS),
            lifetime: max_lifetime,
            max_lifetime,
        }
    }

    /// Spawn `count` sparks flying out of `pos` in random directions
    pub fn burst(pos: Vec2, count: usize, rng: &mut impl RandomSource) -> Vec<Particle> {
        (0..count)
            .map(|_| {
                let dir = heading(rng.angle());
                let speed = rng.range(PARTICLE_MIN_SPEED, PARTICLE_MIN_SPEED + PARTICLE_SPEED_RANGE);
                let lifetime = rng.range(
                    PARTICLE_MIN_LIFETIME,
                    PARTICLE_MIN_LIFETIME + PARTICLE_LIFETIME_RANGE,
                );
                Particle::new(pos, dir * speed, lifetime)
            })
            .collect()
    }

    pub fn lifetime(&self) -> f32 {
        self.lifetime
    }

    pub fn max_lifetime(&self) -> f32 {
        self.max_lifetime
    }

    /// Remaining life as opacity in `[0, 1]`
    pub fn alpha(&self) -> f32 {
        if self.max_lifetime <= 0.0 {
            return 0.0;
        }
        (self.lifetime / self.max_lifetime).clamp(0.0, 1.0)
    }
}

impl Entity for Particle {
    fn body(&self) -> &Body {
        &self.body
    }

    /// Move (no wrap), age, and damp
    fn update(&mut self, dt: f32, _bounds: Bounds) {
        self.body.integrate(dt);
        self.lifetime -= dt;
        self.body.vel *= PARTICLE_DAMPING;
    }

    fn is_expired(&self) -> bool {
        self.lifetime <= 0.0
    }
}
