//! Kairos UI — an embeddable stopwatch widget on top of `kairos-core`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use kairos_ui::prelude::*;
//!
//! let clock = SystemClock::new();
//! let mut queue = FrameQueue::new();
//! let mut watch = StopwatchWidget::new()
//!     .ms_font_scale(0.6)
//!     .on_time_change(|ms| println!("elapsed: {ms}"));
//!
//! watch.start(false, &mut FrameCtx::new(&clock, &mut queue));
//!
//! // In your refresh loop:
//! for _ in queue.take_due() {
//!     watch.frame(&mut FrameCtx::new(&clock, &mut queue));
//! }
//! sink.present(&watch.view());
//! ```
//!
//! # Markup-driven hosts
//!
//! Hosts that build widget trees from markup register the tag explicitly at
//! startup — registration is never a module-load side effect:
//!
//! ```rust,ignore
//! let mut registry = WidgetRegistry::new();
//! StopwatchWidget::register(&mut registry);
//! let element = registry.build("Stopwatch", &TagProps::new()).unwrap();
//! ```

pub mod format;
pub mod markup;
pub mod registry;
pub mod widget;
pub mod widgets;

/// Everything you need to embed the widget — import this in host code.
pub mod prelude {
    pub use crate::format::{TimeParts, format_elapsed, split_elapsed};
    pub use crate::markup::{Markup, Span};
    pub use crate::registry::{TagProps, WidgetRegistry};
    pub use crate::widget::{Element, RenderSink, Widget};
    pub use crate::widgets::stopwatch::StopwatchWidget;

    // Re-export the core seam everyone needs.
    pub use kairos_core::frame::{FrameCtx, FrameHandle, FrameQueue, FrameScheduler};
    pub use kairos_core::time::{Clock, ManualClock, Stopwatch, SystemClock};
}
