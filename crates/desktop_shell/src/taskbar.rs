//! Taskbar projection: a pure view over [`DesktopState`] plus the click
//! decision logic and clock formatting used by the taskbar component.

use app_contract::ApplicationId;
use host_env::ClockSnapshot;

use crate::apps;
use crate::model::DesktopState;

/// One taskbar slot, derived from the pinned roster and the open windows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub app_id: ApplicationId,
    pub title: &'static str,
    pub is_open: bool,
    pub is_active: bool,
    pub is_minimized: bool,
    pub pinned: bool,
}

/// Projects the taskbar contents: every pinned app in roster order, then
/// every other open window in the order it was opened. An app never appears
/// twice; pinned apps keep their slot whether or not they are open, so the
/// strip does not reshuffle as windows come and go.
pub fn taskbar_entries(state: &DesktopState) -> Vec<TaskbarEntry> {
    let pinned = apps::pinned_taskbar_app_ids();
    let mut entries: Vec<TaskbarEntry> = pinned
        .iter()
        .map(|app_id| entry_for(state, app_id, true))
        .collect();
    for entity in &state.entities {
        if pinned.contains(&entity.app_id) {
            continue;
        }
        entries.push(entry_for(state, &entity.app_id, false));
    }
    entries
}

fn entry_for(state: &DesktopState, app_id: &ApplicationId, pinned: bool) -> TaskbarEntry {
    let entity = state.entity(app_id);
    TaskbarEntry {
        app_id: app_id.clone(),
        title: apps::descriptor_by_id(app_id).map_or("", |app| app.title),
        is_open: entity.is_some(),
        is_active: state.is_active(app_id),
        is_minimized: entity.map_or(false, |w| w.minimized),
        pinned,
    }
}

/// What a taskbar button click should do to its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskbarClickCommand {
    /// Launch, or restore and raise an existing (possibly minimized) window.
    Open,
    /// Bring an open background window to the front.
    Focus,
    /// Tuck away the window that currently has focus.
    Minimize,
}

/// Click semantics depend only on whether the window is open and whether it
/// holds focus. A minimized window reads as open-but-not-active and yields
/// [`TaskbarClickCommand::Focus`]; the reducer routes that through open,
/// since focus alone cannot reach a minimized window.
pub fn click_command(is_open: bool, is_active: bool) -> TaskbarClickCommand {
    match (is_open, is_active) {
        (false, _) => TaskbarClickCommand::Open,
        (true, true) => TaskbarClickCommand::Minimize,
        (true, false) => TaskbarClickCommand::Focus,
    }
}

pub(crate) fn format_clock_time(snapshot: ClockSnapshot, use_24_hour: bool) -> String {
    if use_24_hour {
        format!("{:02}:{:02}", snapshot.hour, snapshot.minute)
    } else {
        let mut hour = snapshot.hour % 12;
        if hour == 0 {
            hour = 12;
        }
        let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
        format!("{:02}:{:02} {}", hour, snapshot.minute, suffix)
    }
}

pub(crate) fn format_clock_date(snapshot: ClockSnapshot) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        snapshot.year, snapshot.month, snapshot.day
    )
}

pub(crate) fn format_clock_aria(snapshot: ClockSnapshot, use_24_hour: bool) -> String {
    format!(
        "{}, {}",
        format_clock_date(snapshot),
        format_clock_time(snapshot, use_24_hour)
    )
}
