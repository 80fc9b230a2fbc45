//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct, story switching and the idle tick
//! - `input`: Key event handling
//! - `render`: UI rendering

mod input;
mod render;
mod state;

pub use state::{App, TICK_RATE, View};
