//! Kairos core crate.
//!
//! This crate owns the host-framework seam (frame scheduling, wall-clock
//! sampling) and the stopwatch state machine built on top of it. It contains
//! no rendering and no platform code — the embedding framework supplies both
//! through the traits defined here.

pub mod frame;
pub mod logging;
pub mod time;
