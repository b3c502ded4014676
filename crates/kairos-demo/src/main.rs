use std::cell::Cell;
use std::io::Write as _;
use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, ensure};
use log::info;

use kairos_core::logging::{LoggingConfig, init_logging};
use kairos_ui::prelude::*;

// ── TerminalSink ──────────────────────────────────────────────────────────

/// Renders the widget's markup in place on one terminal line.
///
/// Span styling collapses to plain text here; a graphical host would honor
/// each span's `font_scale` instead.
struct TerminalSink;

impl RenderSink for TerminalSink {
    fn present(&mut self, markup: &Markup) {
        print!("\r      {}", markup.text());
        let _ = std::io::stdout().flush();
    }
}

// ── DemoConfig ────────────────────────────────────────────────────────────

struct DemoConfig {
    fps: u64,
}

impl DemoConfig {
    /// Refresh rate, overridable via `KAIROS_FPS`.
    fn from_env() -> Result<Self> {
        let fps = match std::env::var("KAIROS_FPS") {
            Ok(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("KAIROS_FPS is not a number: {raw:?}"))?,
            Err(_) => 60,
        };
        ensure!((1..=240).contains(&fps), "KAIROS_FPS out of range (1-240): {fps}");
        Ok(Self { fps })
    }

    fn frame_interval(&self) -> Duration {
        Duration::from_millis(1_000 / self.fps)
    }
}

// ── Host ──────────────────────────────────────────────────────────────────

/// Minimal embedding host: one clock, one frame queue, one render sink.
struct Host {
    clock: SystemClock,
    queue: FrameQueue,
    sink: TerminalSink,
    dirty: Rc<Cell<bool>>,
    interval: Duration,
}

impl Host {
    fn ctx(&mut self) -> FrameCtx<'_> {
        FrameCtx::new(&self.clock, &mut self.queue)
    }

    /// Pumps refresh ticks for `duration`, re-rendering whenever the widget
    /// reported a change.
    fn run_for(&mut self, watch: &mut StopwatchWidget, duration: Duration) {
        let deadline = Instant::now() + duration;
        loop {
            let due = self.queue.take_due();
            if !due.is_empty() {
                let mut ctx = FrameCtx::new(&self.clock, &mut self.queue);
                for _ in due {
                    watch.frame(&mut ctx);
                }
            }
            if self.dirty.replace(false) {
                self.sink.present(&watch.view());
            }
            if Instant::now() >= deadline {
                break;
            }
            thread::sleep(self.interval);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    let config = DemoConfig::from_env()?;

    println!();
    println!("  ╔══════════════════════════════════╗");
    println!("  ║        KAIROS  STOPWATCH         ║");
    println!("  ║     terminal embedding demo      ║");
    println!("  ╚══════════════════════════════════╝");
    println!();
    println!("  refresh rate: {} fps", config.fps);
    println!();

    // Markup-driven hosts get the widget by tag; registration is an explicit
    // startup step, never a side effect.
    let mut registry = WidgetRegistry::new();
    StopwatchWidget::register(&mut registry);
    let from_tag = registry
        .build(
            StopwatchWidget::TAG,
            &TagProps::new().with("ms_font_scale", "0.5"),
        )
        .context("Stopwatch tag not registered")?;
    info!(
        "registry built <{}> showing {}",
        StopwatchWidget::TAG,
        from_tag.view().text()
    );

    // The interactive instance is held directly, like any Rust widget tree.
    let dirty = Rc::new(Cell::new(true));
    let changed = Rc::clone(&dirty);
    let mut watch = StopwatchWidget::new()
        .ms_font_scale(0.6)
        .on_time_change(move |_| changed.set(true));

    let mut host = Host {
        clock: SystemClock::new(),
        queue: FrameQueue::new(),
        sink: TerminalSink,
        dirty,
        interval: config.frame_interval(),
    };

    println!("  ▶ start (fresh), run 2s");
    watch.start(false, &mut host.ctx());
    host.run_for(&mut watch, Duration::from_secs(2));
    watch.stop(&mut host.ctx());
    println!();
    println!("  ■ stopped at {}", format_elapsed(watch.time()));

    println!("  … 500ms pass while stopped (nothing accumulates)");
    thread::sleep(Duration::from_millis(500));

    println!("  ▶ resume, run 1s");
    watch.start(true, &mut host.ctx());
    host.run_for(&mut watch, Duration::from_secs(1));
    watch.stop(&mut host.ctx());
    println!();
    println!("  ■ stopped at {}", format_elapsed(watch.time()));

    watch.reset(&host.clock);
    println!("  ↺ reset to {}", format_elapsed(watch.time()));

    println!("  ▶ start (fresh), run 1s");
    watch.start(false, &mut host.ctx());
    host.run_for(&mut watch, Duration::from_secs(1));
    watch.stop(&mut host.ctx());
    println!();
    println!("  ■ final time {}", format_elapsed(watch.time()));
    println!();

    Ok(())
}
