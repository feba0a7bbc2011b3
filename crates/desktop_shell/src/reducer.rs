//! Reducer actions, side-effect intents, and transition logic for the
//! desktop shell.

use app_contract::ApplicationId;
use thiserror::Error;

use crate::geometry;
use crate::model::{DesktopState, DragSession, InteractionState, PointerPosition, WindowRect};
use crate::taskbar::{self, TaskbarClickCommand};
use crate::window_manager;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open an application, or restore and raise its existing window.
    OpenApp {
        /// Application to open.
        app_id: ApplicationId,
    },
    /// Close a window by application id.
    CloseWindow {
        /// Window to close.
        app_id: ApplicationId,
    },
    /// Focus (and raise) an open, non-minimized window.
    FocusWindow {
        /// Window to focus.
        app_id: ApplicationId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        app_id: ApplicationId,
    },
    /// Toggle a window between maximized and windowed.
    ToggleMaximize {
        /// Window to toggle.
        app_id: ApplicationId,
    },
    /// Apply taskbar button semantics (open, focus, or minimize).
    TaskbarAppClick {
        /// Application associated with the taskbar button.
        app_id: ApplicationId,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Begin dragging a window by its titlebar.
    BeginMove {
        /// Window being dragged.
        app_id: ApplicationId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
        /// Frame rectangle at drag start.
        frame: WindowRect,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag, clamping the frame to the canvas.
    EndMove {
        /// Current desktop canvas rectangle.
        canvas: WindowRect,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime
/// to execute.
pub enum RuntimeEffect {
    /// Move DOM focus into the newly focused window's frame.
    FocusWindowInput(ApplicationId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that can only originate from broken wiring.
pub enum ReducerError {
    /// A drag started against a window that is not in the current state.
    #[error("window not found")]
    WindowNotFound,
}

/// Applies a [`DesktopAction`] to the shell state and collects resulting
/// side effects.
///
/// Window operations targeting unknown application ids are silent no-ops:
/// taskbar and icon clicks can race against windows closing, and a stale
/// click must not corrupt state or surface an error.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when a drag begins on a missing
/// window. Drags originate from a rendered titlebar, so that id always
/// names an open window in a correctly wired shell.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenApp { app_id } => {
            window_manager::open_window(state, &app_id);
            state.start_menu_open = false;
            effects.push(RuntimeEffect::FocusWindowInput(app_id));
        }
        DesktopAction::CloseWindow { app_id } => {
            window_manager::close_window(state, &app_id);
            if interaction
                .dragging
                .as_ref()
                .is_some_and(|session| session.app_id == app_id)
            {
                interaction.dragging = None;
            }
        }
        DesktopAction::FocusWindow { app_id } => {
            if window_manager::focus_window(state, &app_id) {
                state.start_menu_open = false;
                effects.push(RuntimeEffect::FocusWindowInput(app_id));
            }
        }
        DesktopAction::MinimizeWindow { app_id } => {
            window_manager::minimize_window(state, &app_id);
        }
        DesktopAction::ToggleMaximize { app_id } => {
            window_manager::toggle_maximize(state, &app_id);
        }
        DesktopAction::TaskbarAppClick { app_id } => {
            let command = taskbar::click_command(state.is_open(&app_id), state.is_active(&app_id));
            let minimized = state.entity(&app_id).is_some_and(|w| w.minimized);
            let follow_up = match command {
                TaskbarClickCommand::Open => DesktopAction::OpenApp { app_id },
                // Focus cannot reach a minimized window; restoring goes
                // through open, which clears the minimize bit first.
                TaskbarClickCommand::Focus if minimized => DesktopAction::OpenApp { app_id },
                TaskbarClickCommand::Focus => DesktopAction::FocusWindow { app_id },
                TaskbarClickCommand::Minimize => DesktopAction::MinimizeWindow { app_id },
            };
            effects.extend(reduce_desktop(state, interaction, follow_up)?);
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::BeginMove {
            app_id,
            pointer,
            frame,
        } => {
            if state.entity(&app_id).is_none() {
                return Err(ReducerError::WindowNotFound);
            }
            if window_manager::focus_window(state, &app_id) {
                effects.push(RuntimeEffect::FocusWindowInput(app_id.clone()));
            }
            interaction.dragging = Some(DragSession {
                app_id,
                pointer_start: pointer,
                frame_start: frame,
            });
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                let moved = session.frame_start.offset(dx, dy);
                if let Some(entity) = state.entity_mut(&session.app_id) {
                    if !entity.maximized {
                        entity.position = Some(PointerPosition {
                            x: moved.x,
                            y: moved.y,
                        });
                    }
                }
            }
        }
        DesktopAction::EndMove { canvas } => {
            if let Some(session) = interaction.dragging.take() {
                if let Some(entity) = state.entity_mut(&session.app_id) {
                    if let Some(position) = entity.position {
                        let frame = WindowRect {
                            x: position.x,
                            y: position.y,
                            ..session.frame_start
                        };
                        let clamped = geometry::clamp_frame_to_canvas(frame, canvas);
                        entity.position = Some(PointerPosition {
                            x: clamped.x,
                            y: clamped.y,
                        });
                    }
                }
            }
        }
    }
    Ok(effects)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn id(raw: &str) -> ApplicationId {
        ApplicationId::trusted(raw)
    }

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, raw: &str) {
        reduce_desktop(
            state,
            interaction,
            DesktopAction::OpenApp { app_id: id(raw) },
        )
        .expect("open app");
    }

    #[test]
    fn open_app_focuses_and_requests_input_focus() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenApp {
                app_id: id("terminal"),
            },
        )
        .expect("open app");

        assert_eq!(state.active_id, Some(id("terminal")));
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(id("terminal"))]);
    }

    #[test]
    fn open_app_closes_the_start_menu() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce_desktop(&mut state, &mut interaction, DesktopAction::ToggleStartMenu)
            .expect("toggle menu");
        assert!(state.start_menu_open);

        open(&mut state, &mut interaction, "mail");
        assert!(!state.start_menu_open);
    }

    #[test]
    fn window_ops_on_unknown_ids_are_silent() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "terminal");
        let before = state.clone();

        for action in [
            DesktopAction::CloseWindow { app_id: id("mail") },
            DesktopAction::FocusWindow { app_id: id("mail") },
            DesktopAction::MinimizeWindow { app_id: id("mail") },
            DesktopAction::ToggleMaximize { app_id: id("mail") },
        ] {
            let effects =
                reduce_desktop(&mut state, &mut interaction, action).expect("unknown id no-op");
            assert_eq!(effects, vec![]);
        }
        assert_eq!(state, before);
    }

    #[test]
    fn focusing_a_minimized_window_emits_nothing() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "snake");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                app_id: id("snake"),
            },
        )
        .expect("minimize");
        let before = state.clone();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow {
                app_id: id("snake"),
            },
        )
        .expect("focus minimized");

        assert_eq!(effects, vec![]);
        assert_eq!(state, before);
    }

    #[test]
    fn taskbar_click_walks_open_focus_minimize() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let click = DesktopAction::TaskbarAppClick {
            app_id: id("projects"),
        };

        reduce_desktop(&mut state, &mut interaction, click.clone()).expect("launch");
        assert!(state.is_open(&id("projects")));
        assert!(state.is_active(&id("projects")));

        reduce_desktop(&mut state, &mut interaction, click.clone()).expect("minimize");
        assert!(state.entity(&id("projects")).unwrap().minimized);
        assert_eq!(state.active_id, None);

        reduce_desktop(&mut state, &mut interaction, click.clone()).expect("restore");
        assert!(!state.entity(&id("projects")).unwrap().minimized);
        assert!(state.is_active(&id("projects")));

        open(&mut state, &mut interaction, "mail");
        reduce_desktop(&mut state, &mut interaction, click).expect("refocus");
        assert!(state.is_active(&id("projects")));
        assert!(state.is_open(&id("mail")));
    }

    #[test]
    fn drag_updates_position_and_clamps_on_end() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "terminal");
        let frame = WindowRect {
            x: 100,
            y: 80,
            w: 600,
            h: 400,
        };

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                app_id: id("terminal"),
                pointer: PointerPosition { x: 150, y: 90 },
                frame,
            },
        )
        .expect("begin move");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 180, y: 140 },
            },
        )
        .expect("update move");

        assert_eq!(
            state.entity(&id("terminal")).unwrap().position,
            Some(PointerPosition { x: 130, y: 130 })
        );

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::EndMove {
                canvas: WindowRect {
                    x: 0,
                    y: 0,
                    w: 1024,
                    h: 720,
                },
            },
        )
        .expect("end move");

        assert!(interaction.dragging.is_none());
        assert_eq!(
            state.entity(&id("terminal")).unwrap().position,
            Some(PointerPosition { x: 130, y: 130 })
        );
    }

    #[test]
    fn drag_does_not_move_a_maximized_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "about");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                app_id: id("about"),
            },
        )
        .expect("maximize");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                app_id: id("about"),
                pointer: PointerPosition { x: 10, y: 10 },
                frame: WindowRect::default(),
            },
        )
        .expect("begin move");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 300, y: 200 },
            },
        )
        .expect("update move");

        assert_eq!(state.entity(&id("about")).unwrap().position, None);
    }

    #[test]
    fn begin_move_on_unknown_window_is_an_error() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let result = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                app_id: id("mail"),
                pointer: PointerPosition { x: 0, y: 0 },
                frame: WindowRect::default(),
            },
        );
        assert_eq!(result, Err(ReducerError::WindowNotFound));
    }

    #[test]
    fn closing_a_dragged_window_drops_the_session() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "terminal");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                app_id: id("terminal"),
                pointer: PointerPosition { x: 0, y: 0 },
                frame: WindowRect::default(),
            },
        )
        .expect("begin move");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                app_id: id("terminal"),
            },
        )
        .expect("close");
        assert!(interaction.dragging.is_none());
    }
}
