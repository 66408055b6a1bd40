//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the world model, the ray caster and the player
//! simulation. It has **zero dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: The same inputs always produce the same pose and hits
//! - **Testable**: Every rule is covered by unit tests
//! - **Portable**: Can drive any renderer (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`world`]: Tile grid, walls derived from solid tiles, construction errors
//! - [`raycast`]: Fixed-step ray marching against wall bounding boxes
//! - [`player`]: Position/angle state advanced from input intent
//! - [`level`]: The built-in level
//!
//! # Example
//!
//! ```
//! use tui_raycast_core::{Player, RayCaster, World};
//! use tui_raycast_core::types::{InputIntent, Key, DELTA_TIME, FOG_DISTANCE};
//!
//! let world = World::default_level();
//! let mut player = Player::spawn();
//!
//! player.update(InputIntent::idle().with(Key::Forward, true), DELTA_TIME);
//!
//! let hit = RayCaster::default()
//!     .cast(&world, player.position(), player.angle(), FOG_DISTANCE)
//!     .expect("the level is enclosed");
//! assert!(hit.distance < FOG_DISTANCE);
//! ```

pub mod level;
pub mod player;
pub mod raycast;
pub mod world;

pub use tui_raycast_types as types;

// Re-export commonly used types for convenience
pub use player::Player;
pub use raycast::{Ray, RayCaster, RayHit};
pub use world::{TileGrid, Wall, World, WorldError};
