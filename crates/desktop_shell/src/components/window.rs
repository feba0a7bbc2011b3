use super::*;
use app_contract::{AppMountContext, ApplicationId};
use shell_ui::{
    IconName, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::geometry;
use crate::host::window_frame_dom_id;
use crate::model::{WindowEntity, WindowRect};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn current_frame_rect(entity: &WindowEntity, host: &crate::host::DesktopHostContext) -> WindowRect {
    let canvas = host.desktop_canvas(geometry::TASKBAR_HEIGHT_PX);
    let descriptor = crate::apps::descriptor_by_id(&entity.app_id);
    let preferred = descriptor.map(|d| d.preferred_size()).unwrap_or_default();
    let (w, h) = geometry::preferred_frame_size(preferred, host.viewport_size());
    let position = entity
        .position
        .unwrap_or_else(|| geometry::default_placement(w, h, canvas));
    WindowRect {
        x: position.x,
        y: position.y,
        w,
        h,
    }
}

fn frame_style(entity: &WindowEntity, host: &crate::host::DesktopHostContext) -> String {
    let rect = if entity.maximized {
        geometry::maximized_rect(host.desktop_canvas(geometry::TASKBAR_HEIGHT_PX))
    } else {
        current_frame_rect(entity, host)
    };
    // Minimized frames stay mounted but leave layout and paint entirely.
    let visibility = if entity.minimized { "display:none;" } else { "" };
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};{}",
        rect.x, rect.y, rect.w, rect.h, entity.z_index, visibility
    )
}

#[component]
pub(super) fn DesktopWindow(app_id: ApplicationId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let entity = {
        let app_id = app_id.clone();
        Signal::derive(move || runtime.state.get().entity(&app_id).cloned())
    };

    let focus = {
        let app_id = app_id.clone();
        move |_| {
            let should_focus = entity
                .get()
                .map(|w| !runtime.state.get_untracked().is_active(&w.app_id))
                .unwrap_or(false);
            if should_focus {
                runtime.dispatch_action(DesktopAction::FocusWindow {
                    app_id: app_id.clone(),
                });
            }
        }
    };
    let minimize = {
        let app_id = app_id.clone();
        move |_| {
            runtime.dispatch_action(DesktopAction::MinimizeWindow {
                app_id: app_id.clone(),
            })
        }
    };
    let close = {
        let app_id = app_id.clone();
        move |_| {
            runtime.dispatch_action(DesktopAction::CloseWindow {
                app_id: app_id.clone(),
            })
        }
    };
    let toggle_maximize = {
        let app_id = app_id.clone();
        move |_| {
            runtime.dispatch_action(DesktopAction::ToggleMaximize {
                app_id: app_id.clone(),
            })
        }
    };
    let begin_move = {
        let app_id = app_id.clone();
        move |ev: web_sys::PointerEvent| {
            if ev.pointer_type() == "mouse" && ev.button() != 0 {
                return;
            }
            if ev.pointer_type() != "mouse" && !ev.is_primary() {
                return;
            }
            try_set_pointer_capture(&ev);
            if ev.button() != 0 {
                return;
            }
            ev.prevent_default();
            ev.stop_propagation();
            let Some(current) = entity.get_untracked() else {
                return;
            };
            let host = runtime.host.get_value();
            let style_rect = current_frame_rect(&current, &host);
            runtime.dispatch_action(DesktopAction::BeginMove {
                app_id: app_id.clone(),
                pointer: pointer_from_pointer_event(&ev),
                frame: style_rect,
            });
        }
    };
    let titlebar_double_click = {
        let app_id = app_id.clone();
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            runtime.dispatch_action(DesktopAction::ToggleMaximize {
                app_id: app_id.clone(),
            });
        }
    };

    let title = apps::descriptor_by_id(&app_id)
        .map(|d| d.title)
        .unwrap_or("Application");
    let icon = apps::descriptor_by_id(&app_id)
        .map(|d| d.icon)
        .unwrap_or(IconName::Folder);

    let style = Signal::derive(move || {
        entity
            .get()
            .map(|w| frame_style(&w, &runtime.host.get_value()))
            .unwrap_or_default()
    });
    let focused = {
        let app_id = app_id.clone();
        Signal::derive(move || runtime.state.get().is_active(&app_id))
    };
    let minimized = Signal::derive(move || entity.get().map(|w| w.minimized).unwrap_or(false));
    let maximized = Signal::derive(move || entity.get().map(|w| w.maximized).unwrap_or(false));

    // Content mounts once per window lifetime; minimize hides the frame
    // without tearing the hosted view down, so its internal state survives.
    let contents = apps::app_module(&app_id).mount(AppMountContext {
        app_id: app_id.clone(),
    });

    let frame_id = window_frame_dom_id(&app_id);

    // Callbacks are Copy, so they can cross the nested `move` children
    // closures the view macro generates without moving the originals.
    let focus = Callback::new(focus);
    let begin_move = Callback::new(begin_move);
    let titlebar_double_click = Callback::new(titlebar_double_click);
    let minimize_click = Callback::new({
        let minimize = minimize.clone();
        move |ev| {
            stop_mouse_event(&ev);
            minimize(ev);
        }
    });
    let maximize_click = Callback::new({
        let toggle_maximize = toggle_maximize.clone();
        move |ev| {
            stop_mouse_event(&ev);
            toggle_maximize(ev);
        }
    });
    let close_click = Callback::new({
        let close = close.clone();
        move |ev| {
            stop_mouse_event(&ev);
            close(ev);
        }
    });
    let contents = store_value(contents);

    view! {
        <Show when=move || entity.get().is_some() fallback=|| ()>
            <WindowFrame
                id=frame_id.clone()
                style=style
                aria_label=title.to_string()
                focused=focused
                minimized=minimized
                maximized=maximized
                on_pointerdown=focus
            >
                <WindowTitleBar
                    on_pointerdown=begin_move
                    on_dblclick=titlebar_double_click
                >
                    <WindowTitle>
                        <span aria-hidden="true">
                            <Icon icon=icon size=IconSize::Sm />
                        </span>
                        <span>{title}</span>
                    </WindowTitle>
                    <WindowControls>
                        <WindowControlButton
                            aria_label="Minimize window".to_string()
                            on_pointerdown=Callback::new(|ev: web_sys::PointerEvent| {
                                ev.prevent_default();
                                ev.stop_propagation();
                            })
                            on_mousedown=Callback::new(|ev| stop_mouse_event(&ev))
                            on_click=minimize_click
                        >
                            <Icon icon=IconName::WindowMinimize size=IconSize::Xs />
                        </WindowControlButton>
                        <WindowControlButton
                            aria_label=Signal::derive(move || {
                                if maximized.get() {
                                    "Restore window".to_string()
                                } else {
                                    "Maximize window".to_string()
                                }
                            })
                            on_pointerdown=Callback::new(|ev: web_sys::PointerEvent| {
                                ev.prevent_default();
                                ev.stop_propagation();
                            })
                            on_mousedown=Callback::new(|ev| stop_mouse_event(&ev))
                            on_click=maximize_click
                        >
                            {move || {
                                let icon = if maximized.get() {
                                    IconName::WindowRestore
                                } else {
                                    IconName::WindowMaximize
                                };
                                view! { <Icon icon=icon size=IconSize::Xs /> }
                            }}
                        </WindowControlButton>
                        <WindowControlButton
                            aria_label="Close window".to_string()
                            on_pointerdown=Callback::new(|ev: web_sys::PointerEvent| {
                                ev.prevent_default();
                                ev.stop_propagation();
                            })
                            on_mousedown=Callback::new(|ev| stop_mouse_event(&ev))
                            on_click=close_click
                        >
                            <Icon icon=IconName::Dismiss size=IconSize::Xs />
                        </WindowControlButton>
                    </WindowControls>
                </WindowTitleBar>
                <WindowBody>{contents.get_value()}</WindowBody>
            </WindowFrame>
        </Show>
    }
}
