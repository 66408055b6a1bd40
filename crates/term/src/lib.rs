//! Terminal rendering module.
//!
//! This is the rendering half of the raycaster: the [`Camera`] casts one ray
//! per screen column and composes a [`FrameBuffer`] of shaded glyphs, which is
//! then [`present`]ed to an [`OutputSink`] row by row.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the camera pure so frames can be asserted on in tests
//! - Keep terminal I/O behind a two-call sink (`move_cursor`, `write`)

pub mod cache;
pub mod camera;
pub mod fb;
pub mod renderer;
pub mod shade;
pub mod sink;

pub use tui_raycast_core as core;
pub use tui_raycast_types as types;

pub use cache::ShadeCache;
pub use camera::Camera;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
pub use shade::{floor_glyph, wall_glyph};
pub use sink::{present, write_fps, HeadlessScreen, OutputSink};
