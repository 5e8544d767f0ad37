//! Circle-circle collision
//!
//! Entity counts stay small, so the tick checks every relevant pair directly.

use glam::Vec2;

use super::entity::Entity;

/// True iff two circles overlap; touching exactly is not a hit
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    a_pos.distance(b_pos) < a_radius + b_radius
}

/// Collision test between any two entities by their bounding circles
#[inline]
pub fn check_collision(a: &impl Entity, b: &impl Entity) -> bool {
    circles_overlap(a.pos(), a.radius(), b.pos(), b.radius())
}
