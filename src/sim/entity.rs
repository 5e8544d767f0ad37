//! Shared kinematic record and the toroidal board

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::asteroid::Asteroid;
use super::bullet::Bullet;
use super::particle::Particle;
use super::ship::Ship;

/// Board dimensions, passed into every tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Position, velocity, heading and collision radius of one entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading in radians
    pub rotation: f32,
    pub radius: f32,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, rotation: f32, radius: f32) -> Self {
        Self {
            pos,
            vel,
            rotation,
            radius: radius.max(0.0),
        }
    }

    /// Move along velocity without wrapping
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Move along velocity, then wrap to the opposite edge
    pub fn advance(&mut self, dt: f32, bounds: Bounds) {
        self.integrate(dt);
        self.wrap(bounds);
    }

    /// Toroidal wrap; the entity re-enters with its radius fully outside the edge
    pub fn wrap(&mut self, bounds: Bounds) {
        self.pos.x = wrap_axis(self.pos.x, self.radius, bounds.width);
        self.pos.y = wrap_axis(self.pos.y, self.radius, bounds.height);
    }
}

#[inline]
fn wrap_axis(value: f32, radius: f32, extent: f32) -> f32 {
    if value < -radius {
        extent + radius
    } else if value > extent + radius {
        -radius
    } else {
        value
    }
}

/// Capability shared by every simulated entity
///
/// Each variant supplies its own `update`; the tick drives all of them
/// through this trait. Entities with a finite lifetime report it through
/// `is_expired` and are dropped after their update.
pub trait Entity {
    fn body(&self) -> &Body;

    /// Advance one frame
    fn update(&mut self, dt: f32, bounds: Bounds);

    fn is_expired(&self) -> bool {
        false
    }


    fn pos(&self) -> Vec2 {
        self.body().pos
    }

    fn radius(&self) -> f32 {
        self.body().radius
    }
}

/// Update every entity in `items`, then drop the expired ones
pub fn update_all<E: Entity>(items: &mut Vec<E>, dt: f32, bounds: Bounds) {
    for item in items.iter_mut() {
        item.update(dt, bounds);
    }
    items.retain(|item| !item.is_expired());
}

/// Read-only snapshot handed to a renderer
#[derive(Debug, Clone, Copy)]
pub enum EntityView<'a> {
    Ship(&'a Ship),
    Asteroid(&'a Asteroid),
    Bullet(&'a Bullet),
    Particle(&'a Particle),
}

impl EntityView<'_> {
    pub fn body(&self) -> &Body {
        match self {
            EntityView::Ship(s) => s.body(),
            EntityView::Asteroid(a) => a.body(),
            EntityView::Bullet(b) => b.body(),
            EntityView::Particle(p) => p.body(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drifts and expires after a fixed number of updates
    struct Mote {
        body: Body,
        updates_left: u32,
    }

    impl Entity for Mote {
        fn body(&self) -> &Body {
            &self.body
        }

        fn update(&mut self, dt: f32, bounds: Bounds) {
            self.body.advance(dt, bounds);
            self.updates_left = self.updates_left.saturating_sub(1);
        }

        fn is_expired(&self) -> bool {
            self.updates_left == 0
        }
    }

    fn body_at(x: f32, y: f32, vel: Vec2) -> Body {
        Body::new(Vec2::new(x, y), vel, 0.0, 10.0)
    }

    #[test]
    fn test_advance_moves_by_velocity() {
        let bounds = Bounds::new(800.0, 600.0);
        let mut body = body_at(100.0, 100.0, Vec2::new(50.0, -20.0));
        body.advance(0.5, bounds);
        assert_eq!(body.pos, Vec2::new(125.0, 90.0));
    }

    #[test]
    fn test_wrap_left_edge() {
        let bounds = Bounds::new(800.0, 600.0);
        let mut body = body_at(-9.0, 300.0, Vec2::new(-100.0, 0.0));
        body.advance(0.1, bounds); // x = -19 < -10
        assert_eq!(body.pos.x, 810.0);
        assert_eq!(body.pos.y, 300.0);
    }

    #[test]
    fn test_wrap_right_edge() {
        let bounds = Bounds::new(800.0, 600.0);
        let mut body = body_at(805.0, 300.0, Vec2::new(100.0, 0.0));
        body.advance(0.1, bounds); // x = 815 > 810
        assert_eq!(body.pos.x, -10.0);
    }

    #[test]
    fn test_wrap_vertical_edges() {
        let bounds = Bounds::new(800.0, 600.0);

        let mut body = body_at(400.0, -5.0, Vec2::new(0.0, -100.0));
        body.advance(0.1, bounds);
        assert_eq!(body.pos.y, 610.0);

        let mut body = body_at(400.0, 605.0, Vec2::new(0.0, 100.0));
        body.advance(0.1, bounds);
        assert_eq!(body.pos.y, -10.0);
    }

    #[test]
    fn test_no_wrap_inside_margin() {
        let bounds = Bounds::new(800.0, 600.0);
        let mut body = body_at(-5.0, 605.0, Vec2::ZERO);
        body.advance(0.1, bounds);
        assert_eq!(body.pos, Vec2::new(-5.0, 605.0));
    }

    #[test]
    fn test_integrate_does_not_wrap() {
        let mut body = body_at(-50.0, -50.0, Vec2::new(-100.0, -100.0));
        body.integrate(1.0);
        assert_eq!(body.pos, Vec2::new(-150.0, -150.0));
    }

    #[test]
    fn test_update_all_moves_then_drops_expired() {
        let bounds = Bounds::new(800.0, 600.0);
        let mut motes = vec![
            Mote {
                body: body_at(100.0, 100.0, Vec2::new(10.0, 0.0)),
                updates_left: 1,
            },
            Mote {
                body: body_at(200.0, 100.0, Vec2::new(10.0, 0.0)),
                updates_left: 2,
            },
        ];

        update_all(&mut motes, 1.0, bounds);
        assert_eq!(motes.len(), 1);
        assert_eq!(motes[0].pos(), Vec2::new(210.0, 100.0));

        update_all(&mut motes, 1.0, bounds);
        assert!(motes.is_empty());
    }
}
