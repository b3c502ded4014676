use kairos_core::frame::FrameCtx;

use crate::markup::Markup;

// ── Widget trait ──────────────────────────────────────────────────────────

/// The contract between a widget and its embedding host.
///
/// The host calls [`frame`] once per display refresh for every live frame
/// request the widget issued through the scheduler, then re-renders the
/// widget's [`view`] whenever its state changed.
///
/// # Implementing a custom widget
///
/// ```rust,ignore
/// use kairos_ui::prelude::*;
///
/// pub struct Blinker { on: bool }
///
/// impl Widget for Blinker {
///     fn view(&self) -> Markup {
///         Markup::new().span(if self.on { "●" } else { "○" }, 1.0)
///     }
///     fn frame(&mut self, ctx: &mut FrameCtx<'_>) {
///         self.on = !self.on;
///         ctx.scheduler.request_frame();
///     }
/// }
/// ```
///
/// [`frame`]: Widget::frame
/// [`view`]: Widget::view
pub trait Widget: 'static {
    /// Produce the widget's current markup.
    ///
    /// Pure — must not mutate state or touch the scheduler. The host may
    /// call `view` any number of times between frames.
    fn view(&self) -> Markup;

    /// Advance the widget by one display-refresh tick.
    ///
    /// The default implementation does nothing, so static widgets only need
    /// to override this if they animate.
    fn frame(&mut self, _ctx: &mut FrameCtx<'_>) {}
}

// ── Element ───────────────────────────────────────────────────────────────

/// A type-erased widget — what a tag registry hands back to the host.
///
/// Any `Widget` converts to `Element` via `From` / `Into`.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }

    #[inline]
    pub fn view(&self) -> Markup {
        self.0.view()
    }

    #[inline]
    pub fn frame(&mut self, ctx: &mut FrameCtx<'_>) {
        self.0.frame(ctx)
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Self::new(w)
    }
}

// ── RenderSink ────────────────────────────────────────────────────────────

/// Declarative rendering mechanism supplied by the host.
///
/// The host re-invokes [`present`] with a widget's current markup whenever
/// that widget reported a state change (and once after mounting it).
///
/// [`present`]: RenderSink::present
pub trait RenderSink {
    fn present(&mut self, markup: &Markup);
}
