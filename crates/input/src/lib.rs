//! Terminal input module (session-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! and mouse events into [`crate::types::GameAction`]s. Keys map directly;
//! mouse drags go through a [`SwipeTracker`] that turns a press/drag/release
//! sequence into at most one direction.

pub mod map;
pub mod swipe;

pub use tui_2048_types as types;

pub use map::{handle_key_event, handle_mouse_event, should_quit};
pub use swipe::SwipeTracker;
