//! Game loop module.
//!
//! [`Game`] ties the pieces together. Each iteration:
//!
//! 1. polls the [`InputSource`](crate::input::InputSource) without blocking
//! 2. advances the player by the fixed `delta_time` (never the measured frame time)
//! 3. renders a full frame through the camera
//! 4. writes it to the [`OutputSink`](crate::term::OutputSink), top-left first
//! 5. overlays `FPS: n` computed from the iteration's wall time
//!
//! The loop runs until its [`CancelToken`](crate::types::CancelToken) fires.
//! Everything happens on the calling thread.

pub mod game;

pub use tui_raycast_core as core;
pub use tui_raycast_input as input;
pub use tui_raycast_term as term;
pub use tui_raycast_types as types;

pub use game::{FrameStats, Game};
pub use tui_raycast_types::CancelToken;
