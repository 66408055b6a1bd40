//! Player pose and per-tick movement.

use crate::types::{InputIntent, Vec2, MOVEMENT_SPEED, ROTATION_SPEED, SPAWN_POINT};

/// The viewpoint: a position and a facing angle in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    position: Vec2,
    angle: f64,
}

impl Default for Player {
    fn default() -> Self {
        Self::spawn()
    }
}

impl Player {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            angle: 0.0,
        }
    }

    /// A player at the default spawn point, facing `+y`.
    pub fn spawn() -> Self {
        Self::new(SPAWN_POINT)
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Unit vector the player is facing.
    pub fn facing(&self) -> Vec2 {
        Vec2::from_angle(self.angle)
    }

    /// Advance one tick at the default speeds.
    pub fn update(&mut self, intent: InputIntent, dt: f64) -> &mut Self {
        self.update_with(intent, dt, ROTATION_SPEED, MOVEMENT_SPEED)
    }

    /// Advance one tick.
    ///
    /// Rotation is applied first; walking then uses the new angle. Walls do
    /// not block movement.
    pub fn update_with(
        &mut self,
        intent: InputIntent,
        dt: f64,
        rotation_speed: f64,
        movement_speed: f64,
    ) -> &mut Self {
        if intent.turn_left {
            self.angle -= rotation_speed * dt;
        }
        if intent.turn_right {
            self.angle += rotation_speed * dt;
        }

        let step = self.facing() * (movement_speed * dt);
        if intent.forward {
            self.position += step;
        }
        if intent.backward {
            self.position -= step;
        }
        debug_assert!(
            self.position.is_finite() && self.angle.is_finite(),
            "player pose became non-finite: {self:?}"
        );
        self
    }
}
