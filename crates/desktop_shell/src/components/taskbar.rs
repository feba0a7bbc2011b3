use std::time::Duration;

use super::*;
use host_env::is_compact_viewport;
use shell_ui::{
    ClockButton, IconName, LauncherMenu, MenuItem, Taskbar as TaskbarRoot, TaskbarButton,
    TaskbarSection, TrayButton,
};

use crate::taskbar::{format_clock_aria, format_clock_date, format_clock_time, taskbar_entries};

const CLOCK_TICK_MS: u64 = 1000;

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let clock_now = create_rw_signal(runtime.host.get_value().clock_snapshot());
    let compact = create_rw_signal(is_compact_viewport(
        runtime.host.get_value().viewport_size(),
    ));

    // The clock ticks on its own interval, unrelated to window state.
    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(runtime.host.get_value().clock_snapshot()),
        Duration::from_millis(CLOCK_TICK_MS),
    ) {
        on_cleanup(move || interval.clear());
    }

    let resize_listener = window_event_listener(ev::resize, move |_| {
        compact.set(is_compact_viewport(
            runtime.host.get_value().viewport_size(),
        ));
    });
    on_cleanup(move || resize_listener.remove());

    let outside_click_listener = window_event_listener(ev::mousedown, move |_| {
        if runtime.state.get_untracked().start_menu_open {
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let entries = create_memo(move |_| taskbar_entries(&state.get()));
    let start_menu_open = Signal::derive(move || state.get().start_menu_open);

    view! {
        <TaskbarRoot
            aria_label="Desktop taskbar".to_string()
            on_mousedown=Callback::new(|ev: web_sys::MouseEvent| ev.stop_propagation())
        >
            <TaskbarSection ui_slot="start">
                <TaskbarButton
                    id="taskbar-start-button".to_string()
                    aria_label="Open application launcher".to_string()
                    aria_expanded=start_menu_open
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                    })
                >
                    <Icon icon=IconName::Launcher size=IconSize::Sm />
                </TaskbarButton>
                <Show when=move || start_menu_open.get() fallback=|| ()>
                    <LauncherMenu id="desktop-launcher-menu".to_string()>
                        <For
                            each=apps::launcher_apps
                            key=|app| app.id
                            let:app
                        >
                            {{
                                let app_id = app.app_id();
                                view! {
                                    <MenuItem
                                        aria_label=format!("Open {}", app.title)
                                        on_click=Callback::new(move |_| {
                                            runtime.dispatch_action(DesktopAction::OpenApp {
                                                app_id: app_id.clone(),
                                            });
                                        })
                                    >
                                        <Icon icon=app.icon size=IconSize::Sm />
                                        <span>{app.title}</span>
                                    </MenuItem>
                                }
                            }}
                        </For>
                    </LauncherMenu>
                </Show>
            </TaskbarSection>

            <TaskbarSection ui_slot="apps" aria_label="Open and pinned applications".to_string()>
                <For
                    each=move || entries.get()
                    key=|entry| entry.app_id.to_string()
                    let:entry
                >
                    {{
                        let app_id = entry.app_id.clone();
                        let selected = {
                            let app_id = app_id.clone();
                            Signal::derive(move || state.get().is_active(&app_id))
                        };
                        let open = {
                            let app_id = app_id.clone();
                            Signal::derive(move || state.get().is_open(&app_id))
                        };
                        view! {
                            <TaskbarButton
                                title=entry.title.to_string()
                                aria_label=entry.title.to_string()
                                aria_pressed=selected
                                selected=selected
                                data_app=app_id.to_string()
                                on_click=Callback::new(move |_| {
                                    runtime.dispatch_action(DesktopAction::TaskbarAppClick {
                                        app_id: app_id.clone(),
                                    });
                                })
                            >
                                <span data-ui-slot="open-badge" aria-hidden="true">
                                    {move || if open.get() { "\u{2022}" } else { "" }}
                                </span>
                                <span>{entry.title}</span>
                            </TaskbarButton>
                        }
                    }}
                </For>
            </TaskbarSection>

            <TaskbarSection ui_slot="tray" aria_label="System tray".to_string()>
                <TrayButton aria_label="Network".to_string() title="Connected".to_string()>
                    <Icon icon=IconName::Wifi size=IconSize::Xs />
                </TrayButton>
                <TrayButton aria_label="Volume".to_string() title="Volume".to_string()>
                    <Icon icon=IconName::Volume size=IconSize::Xs />
                </TrayButton>
                <TrayButton aria_label="Battery".to_string() title="Battery".to_string()>
                    <Icon icon=IconName::Battery size=IconSize::Xs />
                </TrayButton>
                <ClockButton
                    aria_label=Signal::derive(move || format_clock_aria(clock_now.get(), true))
                    title=Signal::derive(move || format_clock_date(clock_now.get()))
                >
                    <span data-ui-slot="clock-time">
                        {move || format_clock_time(clock_now.get(), true)}
                    </span>
                    <Show when=move || !compact.get() fallback=|| ()>
                        <span data-ui-slot="clock-date">
                            {move || format_clock_date(clock_now.get())}
                        </span>
                    </Show>
                </ClockButton>
            </TaskbarSection>
        </TaskbarRoot>
    }
}
