//! Runtime configuration with environment overrides.

use std::time::Duration;

use crate::{
    Vec2, DELTA_TIME, FOG_DISTANCE, FOV, MAX_FOG_DISTANCE, MIN_RAY_STEP, MOVEMENT_SPEED, RAY_STEP,
    ROTATION_SPEED, SCREEN_HEIGHT, SCREEN_WIDTH, SPAWN_POINT, WALL_UNIT,
};

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub fov: f64,
    pub fog_distance: f64,
    pub ray_step: f64,
    pub wall_unit: f64,
    pub rotation_speed: f64,
    pub movement_speed: f64,
    pub delta_time: f64,
    pub spawn: Vec2,
    /// Sleep out the rest of each `delta_time` budget after drawing.
    pub frame_pacing: bool,
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            fov: FOV,
            fog_distance: FOG_DISTANCE,
            ray_step: RAY_STEP,
            wall_unit: WALL_UNIT,
            rotation_speed: ROTATION_SPEED,
            movement_speed: MOVEMENT_SPEED,
            delta_time: DELTA_TIME,
            spawn: SPAWN_POINT,
            frame_pacing: true,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// - `RAYCAST_WIDTH`, `RAYCAST_HEIGHT`: screen size in cells
    /// - `RAYCAST_FOG`: draw distance
    /// - `RAYCAST_STEP`: ray march increment
    /// - `RAYCAST_UNCAPPED`: "1" or "true" disables frame pacing
    /// - `RAYCAST_LOG_PATH`: write logs to this file instead of stderr
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Same as [`GameConfig::from_env`], reading variables through `var`.
    ///
    /// Missing, unparsable and non-positive values fall back to the defaults,
    /// as do a fog distance above [`MAX_FOG_DISTANCE`] and a ray step below
    /// [`MIN_RAY_STEP`].
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let width = var("RAYCAST_WIDTH")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .filter(|&w| w > 0)
            .unwrap_or(defaults.width);
        let height = var("RAYCAST_HEIGHT")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .filter(|&h| h > 0)
            .unwrap_or(defaults.height);
        let fog_distance = positive_f64(var("RAYCAST_FOG"))
            .filter(|&fog| fog <= MAX_FOG_DISTANCE)
            .unwrap_or(defaults.fog_distance);
        let ray_step = positive_f64(var("RAYCAST_STEP"))
            .filter(|&step| step >= MIN_RAY_STEP)
            .unwrap_or(defaults.ray_step);

        let frame_pacing = !var("RAYCAST_UNCAPPED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let log_path = var("RAYCAST_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            width,
            height,
            fog_distance,
            ray_step,
            frame_pacing,
            log_path,
            ..defaults
        }
    }

    /// Wall-clock budget of one frame when pacing is enabled.
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs_f64(self.delta_time)
    }
}

fn positive_f64(value: Option<String>) -> Option<f64> {
    value
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
}
