//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout frameworks and instead renders into a simple
//! framebuffer that is diffed and flushed to a terminal backend.
//!
//! - [`game_view`]: pure snapshot-to-framebuffer rendering
//! - [`palette`]: seeded tile colors
//! - [`renderer`]: crossterm output, diffed one row span at a time
//! - [`render_throttle`]: redraw pacing keyed on a snapshot fingerprint

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod render_throttle;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, BoardLayout, GameView, Viewport};
pub use palette::{text_color, TilePalette, EMPTY_TILE};
pub use render_throttle::{fingerprint, RenderThrottle};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
