use app_contract::ApplicationId;
use serde::{Deserialize, Serialize};

/// Stacking order seed. The first window opened lands above this value.
pub const INITIAL_Z_INDEX: u64 = 10;

pub use app_contract::{DEFAULT_CONTENT_HEIGHT, DEFAULT_CONTENT_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: 48,
            y: 48,
            w: DEFAULT_CONTENT_WIDTH,
            h: DEFAULT_CONTENT_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

/// One open application window. Presence in [`DesktopState::entities`] is
/// what "open" means; there is at most one entity per application id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowEntity {
    pub app_id: ApplicationId,
    pub minimized: bool,
    pub maximized: bool,
    pub z_index: u64,
    /// Dragged position of the frame's top-left corner. `None` until the
    /// window is first moved; the renderer falls back to centered placement.
    pub position: Option<PointerPosition>,
}

impl WindowEntity {
    pub fn new(app_id: ApplicationId, z_index: u64) -> Self {
        Self {
            app_id,
            minimized: false,
            maximized: false,
            z_index,
            position: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopState {
    pub entities: Vec<WindowEntity>,
    /// The focused window, tracked separately from z-order. `None` whenever
    /// the focused window closes or minimizes.
    pub active_id: Option<ApplicationId>,
    /// Highest stacking value handed out so far. Monotonic; values are never
    /// reused or renumbered, so relative depth of untouched windows is stable.
    pub next_z: u64,
    pub start_menu_open: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            active_id: None,
            next_z: INITIAL_Z_INDEX,
            start_menu_open: false,
        }
    }
}

impl DesktopState {
    pub fn entity(&self, app_id: &ApplicationId) -> Option<&WindowEntity> {
        self.entities.iter().find(|w| &w.app_id == app_id)
    }

    pub fn entity_mut(&mut self, app_id: &ApplicationId) -> Option<&mut WindowEntity> {
        self.entities.iter_mut().find(|w| &w.app_id == app_id)
    }

    pub fn is_open(&self, app_id: &ApplicationId) -> bool {
        self.entity(app_id).is_some()
    }

    pub fn is_active(&self, app_id: &ApplicationId) -> bool {
        self.active_id.as_ref() == Some(app_id)
    }

    /// Entities sorted by ascending z-index for back-to-front rendering.
    pub fn entities_by_z_order(&self) -> Vec<&WindowEntity> {
        let mut ordered: Vec<&WindowEntity> = self.entities.iter().collect();
        ordered.sort_by_key(|w| w.z_index);
        ordered
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub app_id: ApplicationId,
    pub pointer_start: PointerPosition,
    pub frame_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}
