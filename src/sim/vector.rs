//! 2D vector value type
//!
//! The simulation works in `glam::Vec2`. It is `Copy`, so every operation
//! yields a fresh value; the helpers here cover what glam names differently.

use glam::Vec2;

pub use crate::{heading, rotated};

/// Immutable 2D vector used for positions and velocities
pub type Vector2 = Vec2;

/// Unit-length copy of `v`, or zero for a zero-length vector
#[inline]
pub fn normalized(v: Vector2) -> Vector2 {
    v.normalize_or_zero()
}
