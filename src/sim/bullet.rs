//! Ship projectiles

use glam::Vec2;

use super::entity::{Body, Bounds, Entity};
use crate::consts::*;

/// A bullet; expires by age, wraps at the edges while alive
#[derive(Debug, Clone)]
pub struct Bullet {
    pub body: Body,
    time_alive: f32,
}

impl Bullet {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            body: Body::new(pos, vel, 0.0, BULLET_RADIUS),
            time_alive: 0.0,
        }
    }

    pub fn time_alive(&self) -> f32 {
        self.time_alive
    }
}

impl Entity for Bullet {
    fn body(&self) -> &Body {
        &self.body
    }

    fn update(&mut self, dt: f32, bounds: Bounds) {
        self.body.advance(dt, bounds);
        self.time_alive += dt;
    }

    fn is_expired(&self) -> bool {
        self.time_alive >= BULLET_LIFETIME
    }
}
