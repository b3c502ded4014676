use log::debug;

use crate::frame::{FrameCtx, FrameHandle};

use super::clock::Clock;

/// Elapsed-time state machine driven by host refresh ticks.
///
/// While running, the stopwatch resamples the host clock once per refresh and
/// accumulates the delta; while stopped, elapsed time is frozen until the
/// next `start` or an explicit `reset`. Every accumulation step invokes the
/// change callback with the updated elapsed milliseconds.
///
/// All operations are infallible; calling `start` while running or `stop`
/// while stopped is an idempotent no-op.
///
/// # Example
/// ```rust,ignore
/// let mut watch = Stopwatch::new().on_change(|ms| println!("{ms}"));
/// watch.start(false, &mut FrameCtx::new(&clock, &mut queue));
/// // host fires refresh ticks:
/// watch.tick(&mut FrameCtx::new(&clock, &mut queue));
/// watch.stop(&mut FrameCtx::new(&clock, &mut queue));
/// ```
#[derive(Default)]
pub struct Stopwatch {
    /// Accumulated running time in milliseconds.
    elapsed_ms: u64,
    running: bool,
    /// Clock sample the next delta is computed against. Meaningful only
    /// while running (or immediately after `reset`).
    last_sample_ms: u64,
    /// Live frame request; `Some` exactly while running.
    pending_frame: Option<FrameHandle>,
    on_change: Option<Box<dyn FnMut(u64)>>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the change callback, invoked with the updated elapsed time on
    /// every accumulation step.
    pub fn on_change(mut self, f: impl FnMut(u64) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Accumulated elapsed time in milliseconds.
    #[inline]
    pub fn time(&self) -> u64 {
        self.elapsed_ms
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Zeroes the elapsed time and resamples the clock.
    ///
    /// The running state is untouched: a running stopwatch keeps ticking, and
    /// its next delta counts from the new sample point, so no in-flight time
    /// leaks into the zeroed total. Emits no change notification.
    pub fn reset(&mut self, clock: &dyn Clock) {
        self.elapsed_ms = 0;
        self.last_sample_ms = clock.now_ms();
    }

    /// Starts the stopwatch and schedules the first refresh tick.
    ///
    /// With `resume` false the elapsed time restarts from zero; with `resume`
    /// true it continues from the current total. A second `start` while
    /// already running does nothing — in particular it does not resample the
    /// clock, so time keeps accumulating against the original sample.
    pub fn start(&mut self, resume: bool, ctx: &mut FrameCtx<'_>) {
        if self.running {
            return;
        }
        if !resume {
            self.elapsed_ms = 0;
        }
        self.last_sample_ms = ctx.now_ms();
        self.running = true;
        self.pending_frame = Some(ctx.scheduler.request_frame());
        debug!("stopwatch started (resume: {resume}) at {}ms", self.elapsed_ms);
    }

    /// Stops the stopwatch, folding in the time since the last sample.
    ///
    /// If any time passed since the last sample the change callback fires one
    /// final time with the settled total. The pending frame request is
    /// cancelled, so no tick can fire after this returns.
    pub fn stop(&mut self, ctx: &mut FrameCtx<'_>) {
        if !self.running {
            return;
        }
        let delta = ctx.now_ms().saturating_sub(self.last_sample_ms);
        if delta != 0 {
            self.elapsed_ms += delta;
            self.notify();
        }
        self.running = false;
        if let Some(handle) = self.pending_frame.take() {
            ctx.scheduler.cancel_frame(handle);
        }
        debug!("stopwatch stopped at {}ms", self.elapsed_ms);
    }

    /// Refresh tick: accumulate one delta and re-request the next frame.
    ///
    /// Invoked by the host once per display refresh for the live frame
    /// request. A stale call after `stop` is a no-op. A zero delta (two
    /// ticks inside the same millisecond) mutates nothing and emits nothing,
    /// but the next frame is still requested.
    pub fn tick(&mut self, ctx: &mut FrameCtx<'_>) {
        if !self.running {
            return;
        }
        let now = ctx.now_ms();
        // Saturating: a clock regression contributes zero rather than
        // underflowing, and the stale sample stays until the clock catches up.
        let delta = now.saturating_sub(self.last_sample_ms);
        if delta != 0 {
            self.elapsed_ms += delta;
            self.last_sample_ms = now;
            self.notify();
        }
        self.pending_frame = Some(ctx.scheduler.request_frame());
    }

    fn notify(&mut self) {
        let time = self.elapsed_ms;
        if let Some(f) = &mut self.on_change {
            f(time);
        }
    }
}
