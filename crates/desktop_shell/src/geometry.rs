//! Frame placement math: canvas bounds, default placement, and drag clamping.

use app_contract::PreferredSize;
use host_env::ViewportSize;

use crate::model::{PointerPosition, WindowRect};

/// Height of the taskbar strip reserved at the bottom of the viewport.
pub const TASKBAR_HEIGHT_PX: i32 = 48;

const COMPACT_EDGE_GUTTER_PX: i32 = 20;
const MIN_VISIBLE_TITLEBAR_PX: i32 = 32;

/// The desktop canvas: the viewport minus the taskbar strip.
pub fn canvas_rect(viewport: ViewportSize, taskbar_height_px: i32) -> WindowRect {
    WindowRect {
        x: 0,
        y: 0,
        w: viewport.width,
        h: (viewport.height - taskbar_height_px).max(0),
    }
}

/// A maximized frame fills the canvas exactly; the taskbar stays visible.
pub fn maximized_rect(canvas: WindowRect) -> WindowRect {
    canvas
}

/// Shrinks an app's preferred size to fit narrow viewports, leaving a small
/// gutter so the frame edge is never flush against the screen.
pub fn preferred_frame_size(preferred: PreferredSize, viewport: ViewportSize) -> (i32, i32) {
    let width = preferred.width.min(viewport.width - COMPACT_EDGE_GUTTER_PX);
    let height = preferred
        .height
        .min(viewport.height - TASKBAR_HEIGHT_PX - COMPACT_EDGE_GUTTER_PX);
    (width.max(1), height.max(1))
}

/// Centers a frame of `(width, height)` on the canvas.
pub fn default_placement(width: i32, height: i32, canvas: WindowRect) -> PointerPosition {
    PointerPosition {
        x: canvas.x + ((canvas.w - width) / 2).max(0),
        y: canvas.y + ((canvas.h - height) / 2).max(0),
    }
}

/// Pulls a dragged frame back onto the canvas so at least the titlebar stays
/// reachable. Applied once when the drag ends, not per pointer move.
pub fn clamp_frame_to_canvas(frame: WindowRect, canvas: WindowRect) -> WindowRect {
    let max_x = canvas.x + canvas.w - MIN_VISIBLE_TITLEBAR_PX;
    let min_x = canvas.x + MIN_VISIBLE_TITLEBAR_PX - frame.w;
    let max_y = canvas.y + canvas.h - MIN_VISIBLE_TITLEBAR_PX;
    WindowRect {
        x: frame.x.clamp(min_x.min(max_x), max_x),
        y: frame.y.clamp(canvas.y, max_y.max(canvas.y)),
        ..frame
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const VIEWPORT: ViewportSize = ViewportSize {
        width: 1024,
        height: 768,
    };

    #[test]
    fn canvas_excludes_the_taskbar_strip() {
        let canvas = canvas_rect(VIEWPORT, TASKBAR_HEIGHT_PX);
        assert_eq!(canvas.w, 1024);
        assert_eq!(canvas.h, 720);
    }

    #[test]
    fn preferred_size_passes_through_on_roomy_viewports() {
        let preferred = PreferredSize {
            width: 600,
            height: 400,
        };
        assert_eq!(preferred_frame_size(preferred, VIEWPORT), (600, 400));
    }

    #[test]
    fn preferred_size_shrinks_to_fit_compact_viewports() {
        let preferred = PreferredSize {
            width: 800,
            height: 600,
        };
        let compact = ViewportSize {
            width: 390,
            height: 700,
        };
        assert_eq!(preferred_frame_size(preferred, compact), (370, 600));
    }

    #[test]
    fn default_placement_centers_the_frame() {
        let canvas = canvas_rect(VIEWPORT, TASKBAR_HEIGHT_PX);
        let position = default_placement(600, 400, canvas);
        assert_eq!(position, PointerPosition { x: 212, y: 160 });
    }

    #[test]
    fn frames_dragged_offscreen_snap_back_within_reach() {
        let canvas = canvas_rect(VIEWPORT, TASKBAR_HEIGHT_PX);
        let frame = WindowRect {
            x: 2000,
            y: -300,
            w: 600,
            h: 400,
        };
        let clamped = clamp_frame_to_canvas(frame, canvas);
        assert_eq!(clamped.x, 992);
        assert_eq!(clamped.y, 0);
        assert_eq!(clamped.w, 600);
    }

    #[test]
    fn frames_inside_the_canvas_do_not_move() {
        let canvas = canvas_rect(VIEWPORT, TASKBAR_HEIGHT_PX);
        let frame = WindowRect {
            x: 100,
            y: 120,
            w: 600,
            h: 400,
        };
        assert_eq!(clamp_frame_to_canvas(frame, canvas), frame);
    }
}
