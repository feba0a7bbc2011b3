//! Window lifecycle operations over [`DesktopState`].
//!
//! All operations are plain functions that mutate state in place and report
//! whether they changed anything. Unknown application ids are silent no-ops
//! so stale UI events cannot corrupt state.

use app_contract::ApplicationId;

use crate::model::{DesktopState, WindowEntity};

/// Hands out the next stacking value. Values only grow; closing or
/// renumbering never claws one back, so a freshly raised window always sits
/// above every window raised before it.
pub fn advance_z(state: &mut DesktopState) -> u64 {
    state.next_z += 1;
    state.next_z
}

/// Opens `app_id`, or restores and raises it when it is already open.
///
/// A second open for the same id never creates a second window: the existing
/// entity is un-minimized and raised instead, keeping its maximize flag and
/// position. The window always ends up focused.
pub fn open_window(state: &mut DesktopState, app_id: &ApplicationId) {
    let z = advance_z(state);
    match state.entity_mut(app_id) {
        Some(entity) => {
            entity.minimized = false;
            entity.z_index = z;
        }
        None => {
            state.entities.push(WindowEntity::new(app_id.clone(), z));
        }
    }
    state.active_id = Some(app_id.clone());
}

/// Removes the window outright. Returns `false` when no such window exists.
///
/// Closing the focused window leaves nothing focused; focus never jumps to
/// another window on its own.
pub fn close_window(state: &mut DesktopState, app_id: &ApplicationId) -> bool {
    let before = state.entities.len();
    state.entities.retain(|w| &w.app_id != app_id);
    if state.entities.len() == before {
        return false;
    }
    if state.is_active(app_id) {
        state.active_id = None;
    }
    true
}

/// Hides the window from the desktop while keeping its entity (and the
/// hosted content's state) intact. Returns `false` on unknown ids.
pub fn minimize_window(state: &mut DesktopState, app_id: &ApplicationId) -> bool {
    let Some(entity) = state.entity_mut(app_id) else {
        return false;
    };
    entity.minimized = true;
    if state.is_active(app_id) {
        state.active_id = None;
    }
    true
}

/// Raises the window and makes it active. Minimized windows do not respond;
/// they come back through [`open_window`]. Returns `false` when nothing
/// changed.
pub fn focus_window(state: &mut DesktopState, app_id: &ApplicationId) -> bool {
    match state.entity(app_id) {
        Some(entity) if entity.minimized => return false,
        Some(_) => {}
        None => return false,
    }
    let z = advance_z(state);
    if let Some(entity) = state.entity_mut(app_id) {
        entity.z_index = z;
    }
    state.active_id = Some(app_id.clone());
    true
}

/// Flips the maximize flag and refocuses the window. Returns `false` on
/// unknown ids. The flag survives minimize and restore cycles.
pub fn toggle_maximize(state: &mut DesktopState, app_id: &ApplicationId) -> bool {
    let Some(entity) = state.entity_mut(app_id) else {
        return false;
    };
    entity.maximized = !entity.maximized;
    focus_window(state, app_id);
    true
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn id(raw: &str) -> ApplicationId {
        ApplicationId::trusted(raw)
    }

    #[test]
    fn opening_a_window_focuses_it_above_existing_windows() {
        let mut state = DesktopState::default();
        open_window(&mut state, &id("terminal"));
        open_window(&mut state, &id("projects"));

        let terminal = state.entity(&id("terminal")).unwrap();
        let projects = state.entity(&id("projects")).unwrap();
        assert!(projects.z_index > terminal.z_index);
        assert_eq!(state.active_id, Some(id("projects")));
    }

    #[test]
    fn reopening_an_open_window_raises_instead_of_duplicating() {
        let mut state = DesktopState::default();
        open_window(&mut state, &id("terminal"));
        open_window(&mut state, &id("projects"));
        open_window(&mut state, &id("terminal"));

        assert_eq!(state.entities.len(), 2);
        let terminal = state.entity(&id("terminal")).unwrap();
        let projects = state.entity(&id("projects")).unwrap();
        assert!(terminal.z_index > projects.z_index);
        assert_eq!(state.active_id, Some(id("terminal")));
    }

    #[test]
    fn stacking_values_never_repeat_across_close_and_reopen() {
        let mut state = DesktopState::default();
        open_window(&mut state, &id("mail"));
        let first_z = state.entity(&id("mail")).unwrap().z_index;
        assert!(close_window(&mut state, &id("mail")));
        open_window(&mut state, &id("mail"));
        let second_z = state.entity(&id("mail")).unwrap().z_index;

        assert!(second_z > first_z);
        assert_eq!(state.next_z, second_z);
    }

    #[test]
    fn closing_the_active_window_leaves_nothing_focused() {
        let mut state = DesktopState::default();
        open_window(&mut state, &id("terminal"));
        open_window(&mut state, &id("projects"));
        assert!(close_window(&mut state, &id("projects")));

        assert_eq!(state.active_id, None);
        assert!(state.is_open(&id("terminal")));
    }

    #[test]
    fn closing_a_background_window_keeps_current_focus() {
        let mut state = DesktopState::default();
        open_window(&mut state, &id("terminal"));
        open_window(&mut state, &id("projects"));
        assert!(close_window(&mut state, &id("terminal")));

        assert_eq!(state.active_id, Some(id("projects")));
    }

    #[test]
    fn closing_an_unknown_window_is_a_no_op() {
        let mut state = DesktopState::default();
        open_window(&mut state, &id("terminal"));
        let before = state.clone();

        assert!(!close_window(&mut state, &id("mail")));
        assert_eq!(state, before);
    }

    #[test]
    fn minimizing_the_active_window_clears_focus_but_keeps_the_entity() {
        let mut state = DesktopState::default();
        open_window(&mut state, &id("snake"));
        assert!(minimize_window(&mut state, &id("snake")));

        let snake = state.entity(&id("snake")).unwrap();
        assert!(snake.minimized);
        assert_eq!(state.active_id, None);
    }

    #[test]
    fn focusing_a_minimized_window_changes_nothing() {
        let mut state = DesktopState::default();
        open_window(&mut state, &id("snake"));
        minimize_window(&mut state, &id("snake"));
        let before = state.clone();

        assert!(!focus_window(&mut state, &id("snake")));
        assert_eq!(state, before);
    }

    #[test]
    fn focusing_raises_without_renumbering_other_windows() {
        let mut state = DesktopState::default();
        open_window(&mut state, &id("terminal"));
        open_window(&mut state, &id("projects"));
        open_window(&mut state, &id("mail"));
        let projects_z = state.entity(&id("projects")).unwrap().z_index;
        let mail_z = state.entity(&id("mail")).unwrap().z_index;

        assert!(focus_window(&mut state, &id("terminal")));

        let terminal = state.entity(&id("terminal")).unwrap();
        assert!(terminal.z_index > mail_z);
        assert_eq!(state.entity(&id("projects")).unwrap().z_index, projects_z);
        assert_eq!(state.entity(&id("mail")).unwrap().z_index, mail_z);
    }

    #[test]
    fn maximize_toggles_back_to_windowed_while_advancing_z() {
        let mut state = DesktopState::default();
        open_window(&mut state, &id("about"));
        let opened_z = state.entity(&id("about")).unwrap().z_index;

        assert!(toggle_maximize(&mut state, &id("about")));
        assert!(state.entity(&id("about")).unwrap().maximized);

        assert!(toggle_maximize(&mut state, &id("about")));
        let about = state.entity(&id("about")).unwrap();
        assert!(!about.maximized);
        assert!(about.z_index > opened_z);
    }

    #[test]
    fn restoring_a_minimized_window_keeps_its_maximize_flag() {
        let mut state = DesktopState::default();
        open_window(&mut state, &id("shooter"));
        toggle_maximize(&mut state, &id("shooter"));
        minimize_window(&mut state, &id("shooter"));
        let hidden_z = state.entity(&id("shooter")).unwrap().z_index;

        open_window(&mut state, &id("shooter"));

        let shooter = state.entity(&id("shooter")).unwrap();
        assert!(!shooter.minimized);
        assert!(shooter.maximized);
        assert!(shooter.z_index > hidden_z);
        assert_eq!(state.active_id, Some(id("shooter")));
    }

    #[test]
    fn minimize_then_close_the_remaining_window_empties_the_desktop() {
        let mut state = DesktopState::default();
        open_window(&mut state, &id("about"));
        open_window(&mut state, &id("mail"));
        minimize_window(&mut state, &id("mail"));
        assert!(close_window(&mut state, &id("about")));

        assert_eq!(state.active_id, None);
        assert_eq!(state.entities.len(), 1);
        assert!(state.entity(&id("mail")).unwrap().minimized);
    }
}
