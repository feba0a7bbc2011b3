//! Injectable environment services for the desktop shell.
//!
//! The shell's only real external dependencies are a wall clock (taskbar
//! display, wallpaper tone) and a viewport-size source (maximize bounds,
//! breakpoint decisions). Both are traits here so tests can pin them to fixed
//! values while the browser entry point wires up the real sources.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod clock;
mod viewport;

pub use clock::{Clock, ClockSnapshot, FixedClock, SystemClock};
pub use viewport::{
    is_compact_viewport, BrowserViewport, FixedViewport, ViewportSize, ViewportSource,
    COMPACT_VIEWPORT_BREAKPOINT_PX,
};
