//! The player ship
//!
//! Lifecycle: `Active -> Destroyed -> Respawning -> Active`. A destroyed ship
//! ignores updates and fire requests until `respawn` is called; a respawning
//! ship blinks and cannot be hit until its invulnerability window runs out.

use glam::Vec2;

use super::bullet::Bullet;
use super::entity::{Body, Bounds, Entity};
use super::tick::TickInput;
use crate::consts::*;
use crate::heading;

/// Ship lifecycle phase as seen from outside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipPhase {
    Active,
    Destroyed,
    Respawning,
}

#[derive(Debug, Clone)]
pub struct Ship {
    pub body: Body,
    destroyed: bool,
    respawning: bool,
    respawn_blink_timer: f32,
    time_since_last_shot: f32,
    thrusting: bool,
    /// Controls applied by the next `update`
    controls: TickInput,
}

impl Ship {
    pub fn new(pos: Vec2, vel: Vec2, rotation: f32) -> Self {
        Self {
            body: Body::new(pos, vel, rotation, SHIP_RADIUS),
            destroyed: false,
            respawning: false,
            respawn_blink_timer: 0.0,
            time_since_last_shot: 0.0,
            thrusting: false,
            controls: TickInput::default(),
        }
    }

    /// Latch the controls for the next update
    pub fn steer(&mut self, controls: &TickInput) {
        self.controls = *controls;
    }

    /// Spawn a bullet at the nose; callers gate on `can_fire`
    pub fn fire(&mut self) -> Bullet {
        self.time_since_last_shot = 0.0;
        let dir = heading(self.body.rotation);
        Bullet::new(
            self.body.pos + dir * self.body.radius,
            dir * BULLET_SPEED + self.body.vel,
        )
    }

    pub fn can_fire(&self) -> bool {
        !self.destroyed && self.time_since_last_shot >= SHIP_FIRE_RATE
    }

    pub fn destroy(&mut self) {
        self.destroyed = true;
        self.thrusting = false;
        self.controls = TickInput::default();
    }

    /// Bring the ship back with a fresh invulnerability window
    pub fn respawn(&mut self, pos: Vec2, vel: Vec2, rotation: f32) {
        self.body.pos = pos;
        self.body.vel = vel;
        self.body.rotation = rotation;
        self.destroyed = false;
        self.respawning = true;
        self.respawn_blink_timer = 0.0;
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn is_respawning(&self) -> bool {
        self.respawning
    }

    /// Can collide with asteroids
    pub fn is_vulnerable(&self) -> bool {
        !self.destroyed && !self.respawning
    }

    pub fn is_thrusting(&self) -> bool {
        self.thrusting
    }

    pub fn phase(&self) -> ShipPhase {
        if self.destroyed {
            ShipPhase::Destroyed
        } else if self.respawning {
            ShipPhase::Respawning
        } else {
            ShipPhase::Active
        }
    }

    /// Blink state: visible on even-numbered blink intervals
    pub fn is_visible_during_respawn(&self) -> bool {
        if !self.respawning {
            return true;
        }
        ((self.respawn_blink_timer / RESPAWN_BLINK_INTERVAL).floor() as u32) % 2 == 0
    }

    /// Whether a renderer should draw the ship this frame
    pub fn is_visible(&self) -> bool {
        !self.destroyed && self.is_visible_during_respawn()
    }

    pub fn time_since_last_shot(&self) -> f32 {
        self.time_since_last_shot
    }
}

impl Entity for Ship {
    fn body(&self) -> &Body {
        &self.body
    }

    /// Apply the latched controls and physics for one frame (no-op while destroyed)
    fn update(&mut self, dt: f32, bounds: Bounds) {
        if self.destroyed {
            return;
        }
        let controls = self.controls;

        if self.respawning {
            self.respawn_blink_timer += dt;
            if self.respawn_blink_timer >= RESPAWN_DURATION {
                self.respawning = false;
                self.respawn_blink_timer = 0.0;
            }
        }

        self.time_since_last_shot += dt;

        if controls.rotate_left {
            self.body.rotation -= SHIP_ROTATION_SPEED * dt;
        }
        if controls.rotate_right {
            self.body.rotation += SHIP_ROTATION_SPEED * dt;
        }

        self.thrusting = controls.thrust;
        if self.thrusting {
            self.body.vel += heading(self.body.rotation) * SHIP_ACCELERATION * dt;
            self.body.vel = self.body.vel.clamp_length_max(SHIP_MAX_SPEED);
        }

        // Drag normalized to a 60 fps frame
        self.body.vel *= SHIP_DRAG_BASE.powf(dt * 60.0);

        self.body.advance(dt, bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const BOUNDS: Bounds = Bounds {
        width: 800.0,
        height: 600.0,
    };

    fn ship() -> Ship {
        Ship::new(Vec2::new(400.0, 300.0), Vec2::ZERO, 0.0)
    }

    fn fly(ship: &mut Ship, dt: f32, controls: &TickInput) {
        ship.steer(controls);
        ship.update(dt, BOUNDS);
    }

    #[test]
    fn test_fire_cooldown() {
        let mut ship = ship();
        let idle = TickInput::default();
        assert!(!ship.can_fire());
        fly(&mut ship, 0.2, &idle);
        assert!(!ship.can_fire());
        fly(&mut ship, 0.06, &idle);
        assert!(ship.can_fire());

        let _ = ship.fire();
        assert!(!ship.can_fire());
        fly(&mut ship, 0.1, &idle);
        fly(&mut ship, 0.1, &idle);
        assert!(!ship.can_fire());
        fly(&mut ship, 0.06, &idle);
        assert!(ship.can_fire());
    }

    #[test]
    fn test_fire_from_nose_with_momentum() {
        let mut ship = Ship::new(Vec2::new(100.0, 100.0), Vec2::new(10.0, 20.0), FRAC_PI_2);
        let bullet = ship.fire();
        assert!((bullet.body.pos.x - 100.0).abs() < 1e-4);
        assert!((bullet.body.pos.y - 115.0).abs() < 1e-4);
        assert!((bullet.body.vel.x - 10.0).abs() < 1e-3);
        assert!((bullet.body.vel.y - 420.0).abs() < 1e-3);
        assert_eq!(bullet.body.radius, BULLET_RADIUS);
    }

    #[test]
    fn test_rotation_controls() {
        let mut ship = ship();
        let left = TickInput {
            rotate_left: true,
            ..Default::default()
        };
        fly(&mut ship, 0.5, &left);
        assert!((ship.body.rotation + 2.0).abs() < 1e-5);

        let right = TickInput {
            rotate_right: true,
            ..Default::default()
        };
        fly(&mut ship, 1.0, &right);
        assert!((ship.body.rotation - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_thrust_and_speed_clamp() {
        let mut ship = ship();
        let thrust = TickInput {
            thrust: true,
            ..Default::default()
        };
        fly(&mut ship, 0.1, &thrust);
        assert!(ship.is_thrusting());
        // 200 * 0.1 = 20 along +x, then drag 0.99^6
        let expected = 20.0 * 0.99f32.powf(6.0);
        assert!((ship.body.vel.x - expected).abs() < 1e-3);
        assert!(ship.body.vel.y.abs() < 1e-5);

        for _ in 0..100 {
            fly(&mut ship, 0.1, &thrust);
            assert!(ship.body.vel.length() <= SHIP_MAX_SPEED + 1e-3);
        }
    }

    #[test]
    fn test_drag_is_frame_rate_normalized() {
        let idle = TickInput::default();
        let mut a = Ship::new(Vec2::new(400.0, 300.0), Vec2::new(100.0, 0.0), 0.0);
        let mut b = a.clone();

        fly(&mut a, 1.0 / 30.0, &idle);
        fly(&mut b, 1.0 / 60.0, &idle);
        fly(&mut b, 1.0 / 60.0, &idle);
        assert!((a.body.vel.x - b.body.vel.x).abs() < 1e-3);
    }

    #[test]
    fn test_destroyed_ship_ignores_updates() {
        let mut ship = Ship::new(Vec2::new(400.0, 300.0), Vec2::new(50.0, 0.0), 0.0);
        ship.destroy();
        assert_eq!(ship.phase(), ShipPhase::Destroyed);
        fly(&mut ship, 1.0, &TickInput::default());
        assert_eq!(ship.body.pos, Vec2::new(400.0, 300.0));
        assert!(!ship.is_visible());
    }

    #[test]
    fn test_respawn_window() {
        let mut ship = ship();
        ship.destroy();
        ship.respawn(Vec2::new(10.0, 20.0), Vec2::ZERO, 1.0);
        assert_eq!(ship.phase(), ShipPhase::Respawning);
        assert!(!ship.is_vulnerable());
        assert_eq!(ship.body.pos, Vec2::new(10.0, 20.0));
        assert_eq!(ship.body.rotation, 1.0);

        let idle = TickInput::default();
        for _ in 0..29 {
            fly(&mut ship, 0.1, &idle);
        }
        assert!(ship.is_respawning());
        fly(&mut ship, 0.2, &idle);
        assert_eq!(ship.phase(), ShipPhase::Active);
        assert!(ship.is_vulnerable());
    }

    #[test]
    fn test_respawn_blink() {
        let mut ship = ship();
        ship.respawn(Vec2::new(400.0, 300.0), Vec2::ZERO, 0.0);
        assert!(ship.is_visible_during_respawn());

        let idle = TickInput::default();
        fly(&mut ship, 0.15, &idle);
        assert!(!ship.is_visible_during_respawn());
        fly(&mut ship, 0.1, &idle);
        assert!(ship.is_visible_during_respawn());
        fly(&mut ship, 0.1, &idle);
        assert!(!ship.is_visible());
    }
}
