//! Time subsystem.
//!
//! Provides stable, testable wall-clock sampling without coupling to the host
//! runtime. Intended usage:
//! - one `Clock` implementation per host (or per test)
//! - one `Stopwatch` per widget instance, driven by the host's refresh ticks

mod clock;
mod stopwatch;

pub use clock::{Clock, ManualClock, SystemClock};
pub use stopwatch::Stopwatch;
