//! TUI 2048 (workspace facade crate).
//!
//! This package exposes `tui_2048::{core,engine,input,term,types}` over the
//! crates under `crates/`, plus the binary's configuration and logging setup.

pub mod config;
pub mod logging;

pub use tui_2048_core as core;
pub use tui_2048_engine as engine;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
