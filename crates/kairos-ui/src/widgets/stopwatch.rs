use kairos_core::frame::FrameCtx;
use kairos_core::time::{Clock, Stopwatch};

use crate::format::split_elapsed;
use crate::markup::Markup;
use crate::registry::WidgetRegistry;
use crate::widget::Widget;

/// An embeddable stopwatch.
///
/// Fuses the [`Stopwatch`] state machine with its presentation: while
/// running, the host's refresh ticks drive accumulation, and [`view`]
/// renders the total as `hh:mm:ss.mmm` text. The millisecond digits form
/// their own span so the host can draw them smaller than the rest of the
/// display.
///
/// # Example
/// ```rust,ignore
/// StopwatchWidget::new()
///     .ms_font_scale(0.5)
///     .on_time_change(|ms| println!("elapsed: {ms}"))
/// ```
///
/// [`view`]: Widget::view
pub struct StopwatchWidget {
    timer: Stopwatch,
    ms_font_scale: f32,
}

impl StopwatchWidget {
    /// Tag name for markup-driven hosts.
    pub const TAG: &'static str = "Stopwatch";

    /// Default scale of the millisecond digits relative to the main run.
    pub const DEFAULT_MS_FONT_SCALE: f32 = 0.6;

    pub fn new() -> Self {
        Self {
            timer: Stopwatch::new(),
            ms_font_scale: Self::DEFAULT_MS_FONT_SCALE,
        }
    }

    /// Font size of the millisecond digits relative to the rest of the
    /// display (`1.0` = same size).
    pub fn ms_font_scale(mut self, v: f32) -> Self {
        self.ms_font_scale = v;
        self
    }

    /// Change event, fired with the updated elapsed milliseconds on every
    /// accumulation step while running and once more on `stop` if time
    /// passed since the last sample.
    pub fn on_time_change(mut self, f: impl FnMut(u64) + 'static) -> Self {
        self.timer = self.timer.on_change(f);
        self
    }

    /// Registers the `"Stopwatch"` tag. Called by the embedding application,
    /// once, at startup.
    pub fn register(registry: &mut WidgetRegistry) {
        registry.register(Self::TAG, |props| {
            let mut widget = StopwatchWidget::new();
            if let Some(scale) = props.prop_f32("ms_font_scale") {
                widget = widget.ms_font_scale(scale);
            }
            widget.into()
        });
    }

    // ── control surface ───────────────────────────────────────────────────

    /// Starts the stopwatch; from zero when `resume` is false, continuing
    /// from the current total when true. No-op while already running.
    pub fn start(&mut self, resume: bool, ctx: &mut FrameCtx<'_>) {
        self.timer.start(resume, ctx);
    }

    /// Stops the stopwatch. No-op while already stopped.
    pub fn stop(&mut self, ctx: &mut FrameCtx<'_>) {
        self.timer.stop(ctx);
    }

    /// Zeroes the display without touching the running state.
    pub fn reset(&mut self, clock: &dyn Clock) {
        self.timer.reset(clock);
    }

    /// Current elapsed time in milliseconds.
    #[inline]
    pub fn time(&self) -> u64 {
        self.timer.time()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }
}

impl Default for StopwatchWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for StopwatchWidget {
    fn view(&self) -> Markup {
        let parts = split_elapsed(self.timer.time());
        Markup::new()
            .span(parts.main, 1.0)
            .span(parts.millis, self.ms_font_scale)
    }

    fn frame(&mut self, ctx: &mut FrameCtx<'_>) {
        self.timer.tick(ctx);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use kairos_core::frame::FrameQueue;
    use kairos_core::time::ManualClock;

    use crate::registry::TagProps;

    use super::*;

    #[test]
    fn view_at_zero() {
        let watch = StopwatchWidget::new();
        let markup = watch.view();
        assert_eq!(markup.spans.len(), 2);
        assert_eq!(markup.spans[0].text, "00:00.");
        assert_eq!(markup.spans[0].font_scale, 1.0);
        assert_eq!(markup.spans[1].text, "000");
        assert_eq!(markup.spans[1].font_scale, StopwatchWidget::DEFAULT_MS_FONT_SCALE);
    }

    #[test]
    fn ms_font_scale_reaches_the_millis_span() {
        let watch = StopwatchWidget::new().ms_font_scale(0.45);
        assert_eq!(watch.view().spans[1].font_scale, 0.45);
    }

    #[test]
    fn frames_advance_the_display() {
        let clock = ManualClock::new();
        let mut queue = FrameQueue::new();
        let mut watch = StopwatchWidget::new();

        watch.start(false, &mut FrameCtx::new(&clock, &mut queue));
        clock.advance(61_234);
        let _ = queue.take_due();
        watch.frame(&mut FrameCtx::new(&clock, &mut queue));

        assert_eq!(watch.time(), 61_234);
        assert_eq!(watch.view().text(), "01:01.234");
        assert_eq!(queue.pending(), 1);
    }

    #[test]
    fn change_event_fires_per_accumulation() {
        let clock = ManualClock::new();
        let mut queue = FrameQueue::new();
        let fired = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&fired);
        let mut watch = StopwatchWidget::new().on_time_change(move |_| {
            counter.set(counter.get() + 1);
        });

        watch.start(false, &mut FrameCtx::new(&clock, &mut queue));
        clock.advance(16);
        watch.frame(&mut FrameCtx::new(&clock, &mut queue));
        watch.frame(&mut FrameCtx::new(&clock, &mut queue)); // zero delta
        clock.advance(16);
        watch.stop(&mut FrameCtx::new(&clock, &mut queue));

        assert_eq!(fired.get(), 2);
        assert!(!watch.is_running());
        assert_eq!(watch.time(), 32);
    }

    #[test]
    fn reset_zeroes_the_display() {
        let clock = ManualClock::new();
        let mut queue = FrameQueue::new();
        let mut watch = StopwatchWidget::new();

        watch.start(false, &mut FrameCtx::new(&clock, &mut queue));
        clock.advance(5_000);
        watch.stop(&mut FrameCtx::new(&clock, &mut queue));
        watch.reset(&clock);

        assert_eq!(watch.time(), 0);
        assert_eq!(watch.view().text(), "00:00.000");
    }

    #[test]
    fn registry_builds_the_tag_with_props() {
        let mut registry = WidgetRegistry::new();
        StopwatchWidget::register(&mut registry);
        assert!(registry.contains(StopwatchWidget::TAG));

        let props = TagProps::new().with("ms_font_scale", "0.45");
        let element = registry.build(StopwatchWidget::TAG, &props).unwrap();
        let markup = element.view();
        assert_eq!(markup.text(), "00:00.000");
        assert_eq!(markup.spans[1].font_scale, 0.45);
    }

    #[test]
    fn registry_defaults_without_props() {
        let mut registry = WidgetRegistry::new();
        StopwatchWidget::register(&mut registry);

        let element = registry.build(StopwatchWidget::TAG, &TagProps::new()).unwrap();
        assert_eq!(
            element.view().spans[1].font_scale,
            StopwatchWidget::DEFAULT_MS_FONT_SCALE
        );
    }
}
