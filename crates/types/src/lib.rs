//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (world simulation, terminal rendering, input handling).
//!
//! # World Units
//!
//! One world unit equals one tile of the grid. Walls are centered on integer
//! tile coordinates `(x, y)` where `x` is the column and `y` is the row, and
//! extend [`WALL_UNIT`] in every direction.
//!
//! # Angles
//!
//! Angles are in radians. Angle `0` faces along `+y`; a direction `a` maps to
//! the unit vector `(sin(a), cos(a))`. Increasing the angle turns right.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCREEN_WIDTH` | 100 | Columns (one ray per column) |
//! | `SCREEN_HEIGHT` | 20 | Rows |
//! | `FOV` | 0.7π | Horizontal field of view |
//! | `FOG_DISTANCE` | 20 | Maximum ray travel / draw distance |
//! | `RAY_STEP` | 0.2 | Ray march increment |
//! | `ROTATION_SPEED` | π | Radians per second |
//! | `MOVEMENT_SPEED` | 2 | Units per second |
//! | `DELTA_TIME` | 1/30 | Fixed simulation step in seconds |
//!
//! # Examples
//!
//! ```
//! use tui_raycast_types::{InputIntent, Key, Vec2};
//!
//! let p = Vec2::new(1.0, 2.0) + Vec2::new(0.5, 0.5) * 2.0;
//! assert_eq!(p, Vec2::new(2.0, 3.0));
//!
//! let intent = InputIntent::idle().with(Key::Forward, true);
//! assert!(intent.forward);
//! assert!(!intent.is_idle());
//! ```

use std::f64::consts::PI;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

pub mod cancel;
pub mod config;

pub use cancel::CancelToken;
pub use config::GameConfig;

/// Screen width in character columns (one ray per column)
pub const SCREEN_WIDTH: u16 = 100;

/// Screen height in character rows
pub const SCREEN_HEIGHT: u16 = 20;

/// Horizontal field of view in radians (0.7π)
pub const FOV: f64 = 0.7 * PI;

/// Fog / draw distance in world units. Rays stop here and walls fade to blank.
pub const FOG_DISTANCE: f64 = 20.0;

/// Ray march increment in world units
pub const RAY_STEP: f64 = 0.2;

/// Smallest accepted ray march increment
pub const MIN_RAY_STEP: f64 = 1e-3;

/// Largest accepted fog / draw distance
pub const MAX_FOG_DISTANCE: f64 = 1000.0;

/// Hard cap on probes per ray, whatever the step and distance
pub const MAX_RAY_STEPS: usize = 1_000_000;

/// Half-width of a wall's square footprint
pub const WALL_UNIT: f64 = 1.0;

/// Turn rate in radians per second
pub const ROTATION_SPEED: f64 = PI;

/// Walk speed in world units per second
pub const MOVEMENT_SPEED: f64 = 2.0;

/// Fixed simulation step in seconds (not measured from the wall clock)
pub const DELTA_TIME: f64 = 1.0 / 30.0;

/// Player spawn point
pub const SPAWN_POINT: Vec2 = Vec2::new(2.0, 2.0);

/// Added to the frame time before inverting it for the FPS readout
pub const FPS_EPSILON: f64 = 1e-5;

/// Smallest distance used when converting a hit into a silhouette height
pub const MIN_WALL_DISTANCE: f64 = 0.01;

/// 2D point or vector in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector for a facing angle: `(sin(angle), cos(angle))`.
    pub fn from_angle(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self { x: s, y: c }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

/// The four movement keys the player can hold.
///
/// - **TurnLeft** / **TurnRight**: rotate the facing angle
/// - **Forward** / **Backward**: walk along the facing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    TurnLeft,
    TurnRight,
    Forward,
    Backward,
}

impl Key {
    pub const ALL: [Key; 4] = [Key::TurnLeft, Key::TurnRight, Key::Forward, Key::Backward];

    /// Dense index, used by fixed-size key tables.
    pub fn index(&self) -> usize {
        match self {
            Key::TurnLeft => 0,
            Key::TurnRight => 1,
            Key::Forward => 2,
            Key::Backward => 3,
        }
    }
}

/// Movement intent sampled once per tick.
///
/// The four flags are independent: holding left and right together cancels
/// out only because the two rotations are equal and opposite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputIntent {
    pub turn_left: bool,
    pub turn_right: bool,
    pub forward: bool,
    pub backward: bool,
}

impl InputIntent {
    pub const fn idle() -> Self {
        Self {
            turn_left: false,
            turn_right: false,
            forward: false,
            backward: false,
        }
    }

    pub fn with(mut self, key: Key, pressed: bool) -> Self {
        match key {
            Key::TurnLeft => self.turn_left = pressed,
            Key::TurnRight => self.turn_right = pressed,
            Key::Forward => self.forward = pressed,
            Key::Backward => self.backward = pressed,
        }
        self
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        match key {
            Key::TurnLeft => self.turn_left,
            Key::TurnRight => self.turn_right,
            Key::Forward => self.forward,
            Key::Backward => self.backward,
        }
    }

    pub fn is_idle(&self) -> bool {
        !(self.turn_left || self.turn_right || self.forward || self.backward)
    }
}
