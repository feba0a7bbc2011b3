//! Desktop shell UI composition and interaction surfaces.

mod boot;
mod taskbar;
mod window;

use leptos::*;

use self::{boot::BootSplash, taskbar::Taskbar, window::DesktopWindow};

use crate::{
    apps,
    geometry::TASKBAR_HEIGHT_PX,
    model::PointerPosition,
    reducer::DesktopAction,
    runtime_context::use_desktop_runtime,
    wallpaper,
};
use shell_ui::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer, Icon,
    IconSize,
};

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[component]
/// Renders the boot splash, then the full desktop shell.
pub fn DesktopShell() -> impl IntoView {
    let booting = create_rw_signal(true);

    view! {
        <Show
            when=move || !booting.get()
            fallback=move || {
                view! { <BootSplash on_done=Callback::new(move |_| booting.set(false)) /> }
            }
        >
            <DesktopShellInner />
        </Show>
    }
}

#[component]
fn DesktopShellInner() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let backdrop_tone = Signal::derive(move || {
        let hour = runtime.host.get_value().clock_snapshot().hour;
        wallpaper::wallpaper_for_hour(hour).token().to_string()
    });

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        if state.get_untracked().start_menu_open {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
    });
    on_cleanup(move || escape_listener.remove());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.get_untracked().dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateMove {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |_| {
        if runtime.interaction.get_untracked().dragging.is_some() {
            runtime.dispatch_action(DesktopAction::EndMove {
                canvas: runtime.host.get_value().desktop_canvas(TASKBAR_HEIGHT_PX),
            });
        }
    };

    view! {
        <DesktopRoot id="desktop-shell-root".to_string()>
            <div
                data-ui-slot="interaction-surface"
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_end
                on:pointercancel=on_pointer_end
            >
                <DesktopBackdrop tone=backdrop_tone>
                    <div
                        data-ui-slot="dismiss-layer"
                        on:mousedown=move |_| {
                            runtime.dispatch_action(DesktopAction::CloseStartMenu);
                        }
                    />
                    <DesktopIconGrid>
                        <For
                            each=apps::desktop_icon_apps
                            key=|app| app.id
                            let:app
                        >
                            {{
                                let app_id = app.app_id();
                                view! {
                                    <DesktopIconButton
                                        title=app.title.to_string()
                                        aria_label=format!("Open {}", app.title)
                                        on_click=Callback::new(move |_| {
                                            runtime.dispatch_action(DesktopAction::OpenApp {
                                                app_id: app_id.clone(),
                                            });
                                        })
                                    >
                                        <span>
                                            <Icon icon=app.icon size=IconSize::Lg />
                                        </span>
                                        <span>{app.title}</span>
                                    </DesktopIconButton>
                                }
                            }}
                        </For>
                    </DesktopIconGrid>

                    <DesktopWindowLayer>
                        <For
                            each=move || {
                                state
                                    .get()
                                    .entities_by_z_order()
                                    .into_iter()
                                    .cloned()
                                    .collect::<Vec<_>>()
                            }
                            key=|entity| entity.app_id.to_string()
                            let:entity
                        >
                            <DesktopWindow app_id=entity.app_id />
                        </For>
                    </DesktopWindowLayer>
                </DesktopBackdrop>
            </div>

            <Taskbar />
        </DesktopRoot>
    }
}
