//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events onto the four movement [`Key`](crate::types::Key)s
//! and tracks which are held, including on terminals without key-release
//! events. The game loop only sees the [`InputSource`] trait.

pub mod map;
pub mod source;
pub mod state;

pub use tui_raycast_types as types;

pub use map::{map_key, should_quit};
pub use source::{InputSource, TerminalInput};
pub use state::KeyState;
