//! Viewport-size source abstraction.

use serde::{Deserialize, Serialize};

/// Width threshold below which the shell clamps window sizes aggressively.
pub const COMPACT_VIEWPORT_BREAKPOINT_PX: i32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Inner size of the hosting viewport in CSS pixels.
pub struct ViewportSize {
    /// Viewport width.
    pub width: i32,
    /// Viewport height.
    pub height: i32,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
        }
    }
}

/// Source of viewport-size readings.
pub trait ViewportSource {
    /// Returns the current viewport inner size.
    fn size(&self) -> ViewportSize;
}

/// Returns whether `size` falls under the compact-layout breakpoint.
pub fn is_compact_viewport(size: ViewportSize) -> bool {
    size.width < COMPACT_VIEWPORT_BREAKPOINT_PX
}

#[derive(Debug, Clone, Copy, Default)]
/// Real viewport source backed by the browser window's inner size.
pub struct BrowserViewport;

impl ViewportSource for BrowserViewport {
    fn size(&self) -> ViewportSize {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(1024);
                let height = window
                    .inner_height()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(768);
                return ViewportSize {
                    width: width.max(320),
                    height: height.max(240),
                };
            }
        }

        ViewportSize::default()
    }
}

#[derive(Debug, Clone, Copy)]
/// Deterministic viewport source for tests.
pub struct FixedViewport(pub ViewportSize);

impl ViewportSource for FixedViewport {
    fn size(&self) -> ViewportSize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_breakpoint_splits_on_768() {
        assert!(is_compact_viewport(ViewportSize {
            width: 767,
            height: 800,
        }));
        assert!(!is_compact_viewport(ViewportSize {
            width: 768,
            height: 800,
        }));
    }

    #[test]
    fn fixed_viewport_reports_configured_size() {
        let source = FixedViewport(ViewportSize {
            width: 1280,
            height: 720,
        });
        assert_eq!(source.size().width, 1280);
        assert_eq!(source.size().height, 720);
    }
}
