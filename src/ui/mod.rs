//! Terminal rendering
//!
//! Story views on top, reusable widgets and styled components below them,
//! with glyphs and colours kept in `symbols` and `theme`.

pub mod components;
pub mod symbols;
pub mod theme;
pub mod views;
pub mod widgets;
