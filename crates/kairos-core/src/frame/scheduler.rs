use log::trace;

/// Opaque cancellation token for one scheduled frame callback.
///
/// Returned by [`FrameScheduler::request_frame`] and consumed either by the
/// callback firing or by [`FrameScheduler::cancel_frame`]. Handles are plain
/// ids, so schedulers outside this crate can mint their own via [`from_raw`].
///
/// [`from_raw`]: FrameHandle::from_raw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Scheduling primitive supplied by the host framework.
///
/// Requests are one-shot: each call schedules exactly one callback before the
/// next display refresh. A callback that wants to keep running re-requests
/// itself from inside its own invocation.
pub trait FrameScheduler {
    /// Schedule one callback before the next refresh.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a previously requested callback.
    ///
    /// Cancelling a handle that already fired (or was never issued) does
    /// nothing.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Single-threaded reference scheduler.
///
/// A host embeds one `FrameQueue` per refresh loop: widgets push requests via
/// the [`FrameScheduler`] impl, and once per refresh the host drains
/// [`take_due`] and invokes the frame callback for each drained handle.
///
/// # Example
/// ```rust,ignore
/// let mut queue = FrameQueue::new();
/// // each refresh:
/// for _handle in queue.take_due() {
///     widget.frame(&mut FrameCtx::new(&clock, &mut queue));
/// }
/// ```
///
/// [`take_due`]: FrameQueue::take_due
#[derive(Debug)]
pub struct FrameQueue {
    next_id: u64,
    pending: Vec<FrameHandle>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self { next_id: 1, pending: Vec::new() }
    }

    /// Number of requests waiting for the next refresh.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// `true` when no callback is scheduled.
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drains every request due this refresh.
    ///
    /// Requests made while servicing the drained handles land in the next
    /// refresh, not this one.
    pub fn take_due(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.pending)
    }
}

impl Default for FrameQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(handle);
        trace!("frame requested: {handle:?}");
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|h| *h != handle);
        trace!("frame cancelled: {handle:?}");
    }
}
