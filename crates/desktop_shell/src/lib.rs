//! Desktop shell runtime: window state machine, taskbar projection, and the
//! Leptos components that render them.

pub mod apps;
pub mod components;
pub mod geometry;
pub mod host;
pub mod model;
pub mod reducer;
pub mod runtime_context;
pub mod taskbar;
pub mod wallpaper;
pub mod window_manager;

pub use components::DesktopShell;
pub use host::DesktopHostContext;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
pub use taskbar::{taskbar_entries, TaskbarClickCommand, TaskbarEntry};
