//! Host environment bundle: injectable clock and viewport sources plus the
//! DOM-side execution of runtime effects.

use std::rc::Rc;

use app_contract::ApplicationId;
use host_env::{BrowserViewport, Clock, ClockSnapshot, SystemClock, ViewportSize, ViewportSource};

use crate::geometry;
use crate::model::WindowRect;
use crate::reducer::RuntimeEffect;

/// Clock and viewport sources the shell reads from. Production uses the
/// browser-backed sources; tests inject fixed ones.
#[derive(Clone)]
pub struct DesktopHostContext {
    clock: Rc<dyn Clock>,
    viewport: Rc<dyn ViewportSource>,
}

impl DesktopHostContext {
    pub fn new(clock: Rc<dyn Clock>, viewport: Rc<dyn ViewportSource>) -> Self {
        Self { clock, viewport }
    }

    /// Browser-backed host used by the real shell entry point.
    pub fn browser() -> Self {
        Self::new(Rc::new(SystemClock), Rc::new(BrowserViewport))
    }

    pub fn clock_snapshot(&self) -> ClockSnapshot {
        self.clock.now()
    }

    pub fn viewport_size(&self) -> ViewportSize {
        self.viewport.size()
    }

    /// Current desktop canvas: the viewport minus the taskbar strip.
    pub fn desktop_canvas(&self, taskbar_height_px: i32) -> WindowRect {
        geometry::canvas_rect(self.viewport_size(), taskbar_height_px)
    }
}

/// DOM id of an app's window frame, used for programmatic focus.
pub fn window_frame_dom_id(app_id: &ApplicationId) -> String {
    format!("window-{app_id}")
}

/// Executes one reducer-emitted effect against the DOM. Outside wasm there
/// is no DOM, so effects evaporate.
pub fn run_runtime_effect(effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::FocusWindowInput(app_id) => focus_window_frame(&app_id),
    }
}

#[cfg(target_arch = "wasm32")]
fn focus_window_frame(app_id: &ApplicationId) {
    use leptos::logging;
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(&window_frame_dom_id(app_id)) else {
        return;
    };
    if let Ok(frame) = element.dyn_into::<web_sys::HtmlElement>() {
        if frame.focus().is_err() {
            logging::warn!("failed to focus window frame for {app_id}");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn focus_window_frame(_app_id: &ApplicationId) {}

#[cfg(test)]
mod tests {
    use host_env::{FixedClock, FixedViewport};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::geometry::TASKBAR_HEIGHT_PX;

    #[test]
    fn fixed_host_yields_deterministic_canvas() {
        let host = DesktopHostContext::new(
            Rc::new(FixedClock::new(ClockSnapshot::default())),
            Rc::new(FixedViewport(ViewportSize {
                width: 1280,
                height: 800,
            })),
        );
        let canvas = host.desktop_canvas(TASKBAR_HEIGHT_PX);
        assert_eq!(canvas.w, 1280);
        assert_eq!(canvas.h, 752);
    }

    #[test]
    fn frame_dom_ids_embed_the_app_id() {
        assert_eq!(
            window_frame_dom_id(&ApplicationId::trusted("terminal")),
            "window-terminal"
        );
    }
}
