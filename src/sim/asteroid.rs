//! Asteroids and fragmentation
//!
//! Size tiers fix both the collision radius and the score. Collision only ever
//! uses the circle radius; the outline is cosmetic.

use glam::Vec2;

use super::entity::{Body, Bounds, Entity};
use super::rng::RandomSource;
use crate::consts::*;
use crate::{heading, rotated};

/// Size tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsteroidSize {
    Large,
    Medium,
    Small,
}

impl AsteroidSize {
    pub fn radius(&self) -> f32 {
        match self {
            AsteroidSize::Large => 40.0,
            AsteroidSize::Medium => 20.0,
            AsteroidSize::Small => 10.0,
        }
    }

    /// Points awarded for destroying one asteroid of this tier
    pub fn score(&self) -> u64 {
        match self {
            AsteroidSize::Large => 20,
            AsteroidSize::Medium => 50,
            AsteroidSize::Small => 100,
        }
    }

    /// Tier of the fragments, `None` for the smallest tier
    pub fn smaller(&self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }

    /// Outline jitter as a fraction of the radius
    fn jitter(&self) -> f32 {
        match self {
            AsteroidSize::Large => 0.15,
            AsteroidSize::Medium => 0.1,
            AsteroidSize::Small => 0.0,
        }
    }
}

/// Unit outline: two lobes with a notch at the bottom. Closed (last == first).
const OUTLINE: [(f32, f32); 15] = [
    (0.0, -0.7),
    (-0.6, -0.5),
    (-0.8, -0.2),
    (-0.9, 0.0),
    (-0.8, 0.4),
    (-0.5, 0.8),
    (-0.2, 0.9),
    (0.0, 0.7),
    (0.2, 0.9),
    (0.5, 0.8),
    (0.8, 0.4),
    (0.9, 0.0),
    (0.8, -0.2),
    (0.6, -0.5),
    (0.0, -0.7),
];

/// Notch vertices keep most of their shape
const NOTCH: std::ops::RangeInclusive<usize> = 6..=8;

#[derive(Debug, Clone)]
pub struct Asteroid {
    pub body: Body,
    size: AsteroidSize,
    rotation_speed: f32,
    /// Unrotated outline, relative to the center
    outline: Vec<Vec2>,
}

impl Asteroid {
    pub fn new(
        pos: Vec2,
        vel: Vec2,
        rotation: f32,
        rotation_speed: f32,
        size: AsteroidSize,
        rng: &mut impl RandomSource,
    ) -> Self {
        Self {
            body: Body::new(pos, vel, rotation, size.radius()),
            size,
            rotation_speed,
            outline: build_outline(size, rng),
        }
    }

    /// Two fragments one tier down; empty for small asteroids
    pub fn split(&self, rng: &mut impl RandomSource) -> Vec<Asteroid> {
        let Some(child_size) = self.size.smaller() else {
            return Vec::new();
        };

        let parent_speed = self.body.vel.length();
        let half = self.body.radius / 2.0;
        let (min_factor, max_factor) = SPLIT_SPEED_FACTOR;

        (0..2)
            .map(|_| {
                let dir = heading(rng.angle());
                let speed = parent_speed * rng.range(min_factor, max_factor);
                let rotation = rng.angle();
                let rotation_speed = rng.centered(SPLIT_SPIN);
                let offset = Vec2::new(rng.centered(half), rng.centered(half));
                Asteroid::new(
                    self.body.pos + offset,
                    dir * speed,
                    rotation,
                    rotation_speed,
                    child_size,
                    rng,
                )
            })
            .collect()
    }

    pub fn size(&self) -> AsteroidSize {
        self.size
    }

    pub fn score_value(&self) -> u64 {
        self.size.score()
    }

    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    /// Outline rotated to the current heading, relative to the center
    pub fn outline(&self) -> Vec<Vec2> {
        self.outline
            .iter()
            .map(|v| rotated(*v, self.body.rotation))
            .collect()
    }
}

impl Entity for Asteroid {
    fn body(&self) -> &Body {
        &self.body
    }

    /// Spin, then move with wrap
    fn update(&mut self, dt: f32, bounds: Bounds) {
        self.body.rotation += self.rotation_speed * dt;
        self.body.advance(dt, bounds);
    }
}

fn build_outline(size: AsteroidSize, rng: &mut impl RandomSource) -> Vec<Vec2> {
    let radius = size.radius();
    let jitter = size.jitter();
    OUTLINE
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            let base = Vec2::new(x, y) * radius;
            if jitter == 0.0 {
                return base;
            }
            let factor = if NOTCH.contains(&i) { jitter * 0.3 } else { jitter };
            let half = factor * radius / 2.0;
            base + Vec2::new(rng.centered(half), rng.centered(half))
        })
        .collect()
}
