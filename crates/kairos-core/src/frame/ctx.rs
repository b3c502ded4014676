use crate::time::Clock;

use super::scheduler::FrameScheduler;

/// Per-call host context passed to state-transition operations.
///
/// The host owns both the clock and the scheduler; widgets borrow them for
/// the duration of a single `start` / `stop` / frame-tick call.
pub struct FrameCtx<'a> {
    pub clock: &'a dyn Clock,
    pub scheduler: &'a mut dyn FrameScheduler,
}

impl<'a> FrameCtx<'a> {
    pub fn new(clock: &'a dyn Clock, scheduler: &'a mut dyn FrameScheduler) -> Self {
        Self { clock, scheduler }
    }

    /// Samples the host clock.
    #[inline]
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }
}
