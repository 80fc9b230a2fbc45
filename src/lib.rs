//! Volstage - terminal showcase for a stream volume control
//!
//! A volume/mute widget whose changes are forwarded to a pluggable media
//! backend through an adapter.
//!
//! This library provides:
//! - [`app`]: Application state and logic
//! - [`config`]: Configuration file
//! - [`control`]: The volume controller
//! - [`keys`]: Key binding definitions
//! - [`logging`]: File-backed logging setup
//! - [`media`]: Media adapters, the embed readiness state machine and the
//!   shared script registry
//! - [`model`]: Domain models
//! - [`ui`]: User interface components

pub mod app;
pub mod config;
pub mod control;
pub mod keys;
pub mod logging;
pub mod media;
pub mod model;
pub mod ui;
