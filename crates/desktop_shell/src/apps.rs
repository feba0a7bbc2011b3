//! Static application registry: descriptors consumed by the launcher, the
//! desktop icon grid, the taskbar pins, and window content mounting.

use app_contract::{AppModule, AppMountContext, ApplicationId, PreferredSize};
use leptos::*;
use shell_ui::IconName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: IconName,
    pub preferred_width: Option<i32>,
    pub preferred_height: Option<i32>,
    pub show_on_desktop: bool,
    pub pinned_to_taskbar: bool,
}

impl AppDescriptor {
    pub fn app_id(&self) -> ApplicationId {
        ApplicationId::trusted(self.id)
    }

    pub fn preferred_size(&self) -> PreferredSize {
        let fallback = PreferredSize::default();
        PreferredSize {
            width: self.preferred_width.unwrap_or(fallback.width),
            height: self.preferred_height.unwrap_or(fallback.height),
        }
    }
}

const APP_REGISTRY: [AppDescriptor; 10] = [
    AppDescriptor {
        id: "about",
        title: "About Me",
        icon: IconName::Person,
        preferred_width: Some(750),
        preferred_height: Some(550),
        show_on_desktop: true,
        pinned_to_taskbar: false,
    },
    AppDescriptor {
        id: "projects",
        title: "Projects",
        icon: IconName::Folder,
        preferred_width: Some(800),
        preferred_height: Some(600),
        show_on_desktop: true,
        pinned_to_taskbar: true,
    },
    AppDescriptor {
        id: "skills",
        title: "Skills",
        icon: IconName::Wrench,
        preferred_width: Some(500),
        preferred_height: Some(500),
        show_on_desktop: true,
        pinned_to_taskbar: false,
    },
    AppDescriptor {
        id: "education",
        title: "Education",
        icon: IconName::GraduationCap,
        preferred_width: Some(450),
        preferred_height: Some(500),
        show_on_desktop: true,
        pinned_to_taskbar: false,
    },
    AppDescriptor {
        id: "terminal",
        title: "Terminal",
        icon: IconName::Terminal,
        preferred_width: Some(600),
        preferred_height: Some(400),
        show_on_desktop: false,
        pinned_to_taskbar: true,
    },
    AppDescriptor {
        id: "snake",
        title: "Snake",
        icon: IconName::Gamepad,
        preferred_width: Some(400),
        preferred_height: Some(450),
        show_on_desktop: true,
        pinned_to_taskbar: false,
    },
    AppDescriptor {
        id: "shooter",
        title: "Shooter",
        icon: IconName::Crosshair,
        preferred_width: Some(800),
        preferred_height: Some(600),
        show_on_desktop: true,
        pinned_to_taskbar: false,
    },
    AppDescriptor {
        id: "assistant",
        title: "Assistant",
        icon: IconName::Bot,
        preferred_width: Some(380),
        preferred_height: Some(550),
        show_on_desktop: true,
        pinned_to_taskbar: false,
    },
    AppDescriptor {
        id: "mail",
        title: "Mail",
        icon: IconName::Mail,
        preferred_width: Some(500),
        preferred_height: Some(550),
        show_on_desktop: false,
        pinned_to_taskbar: false,
    },
    AppDescriptor {
        id: "settings",
        title: "Settings",
        icon: IconName::Settings,
        preferred_width: Some(700),
        preferred_height: Some(500),
        show_on_desktop: false,
        pinned_to_taskbar: false,
    },
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

/// Apps rendered as desktop launcher icons. Taskbar-only and launcher-only
/// apps stay off the desktop to keep the grid small.
pub fn desktop_icon_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.show_on_desktop)
        .collect()
}

/// Every app, in registry order, for the start menu.
pub fn launcher_apps() -> Vec<AppDescriptor> {
    app_registry().to_vec()
}

/// Taskbar pin display order; intentionally not the registry order.
const PINNED_TASKBAR_IDS: [&str; 2] = ["terminal", "projects"];

/// Pinned taskbar shortcuts, in display order.
pub fn pinned_taskbar_app_ids() -> Vec<ApplicationId> {
    PINNED_TASKBAR_IDS
        .iter()
        .map(|id| ApplicationId::trusted(*id))
        .collect()
}

pub fn descriptor_by_id(app_id: &ApplicationId) -> Option<&'static AppDescriptor> {
    app_registry()
        .iter()
        .find(|entry| entry.id == app_id.as_str())
}

/// Resolves the mountable module for an app id. Unknown ids fall back to a
/// generic placeholder rather than failing the frame render.
pub fn app_module(app_id: &ApplicationId) -> AppModule {
    match app_id.as_str() {
        "about" => AppModule::new(mount_about),
        "projects" => AppModule::new(mount_projects),
        "skills" => AppModule::new(mount_skills),
        "education" => AppModule::new(mount_education),
        "terminal" => AppModule::new(mount_terminal),
        "snake" => AppModule::new(mount_snake),
        "shooter" => AppModule::new(mount_shooter),
        "assistant" => AppModule::new(mount_assistant),
        "mail" => AppModule::new(mount_mail),
        "settings" => AppModule::new(mount_settings),
        _ => AppModule::new(mount_unknown),
    }
}

fn mount_about(_ctx: AppMountContext) -> View {
    view! {
        <div class="app app-about">
            <p><strong>"About Me"</strong></p>
            <p>"Profile content placeholder."</p>
        </div>
    }
    .into_view()
}

fn mount_projects(_ctx: AppMountContext) -> View {
    view! {
        <div class="app app-projects">
            <p><strong>"Projects"</strong></p>
            <p>"Project browser placeholder."</p>
        </div>
    }
    .into_view()
}

fn mount_skills(_ctx: AppMountContext) -> View {
    view! {
        <div class="app app-skills">
            <p><strong>"Skills"</strong></p>
            <p>"Skill matrix placeholder."</p>
        </div>
    }
    .into_view()
}

fn mount_education(_ctx: AppMountContext) -> View {
    view! {
        <div class="app app-education">
            <p><strong>"Education"</strong></p>
            <p>"Education timeline placeholder."</p>
        </div>
    }
    .into_view()
}

fn mount_terminal(_ctx: AppMountContext) -> View {
    view! {
        <div class="app app-terminal">
            <pre>"$ _"</pre>
        </div>
    }
    .into_view()
}

fn mount_snake(_ctx: AppMountContext) -> View {
    view! {
        <div class="app app-snake">
            <p><strong>"Snake"</strong></p>
            <p>"Game canvas placeholder."</p>
        </div>
    }
    .into_view()
}

fn mount_shooter(_ctx: AppMountContext) -> View {
    view! {
        <div class="app app-shooter">
            <p><strong>"Shooter"</strong></p>
            <p>"Game canvas placeholder."</p>
        </div>
    }
    .into_view()
}

fn mount_assistant(_ctx: AppMountContext) -> View {
    view! {
        <div class="app app-assistant">
            <p><strong>"Assistant"</strong></p>
            <p>"Chat widget placeholder."</p>
        </div>
    }
    .into_view()
}

fn mount_mail(_ctx: AppMountContext) -> View {
    view! {
        <div class="app app-mail">
            <p><strong>"Mail"</strong></p>
            <p>"Contact form placeholder."</p>
        </div>
    }
    .into_view()
}

fn mount_settings(_ctx: AppMountContext) -> View {
    view! {
        <div class="app app-settings">
            <p><strong>"Settings"</strong></p>
            <p>"System settings placeholder."</p>
        </div>
    }
    .into_view()
}

fn mount_unknown(ctx: AppMountContext) -> View {
    view! {
        <div class="app app-unknown">
            <p>{format!("No application registered for `{}`", ctx.app_id)}</p>
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registry_ids_are_unique_and_well_formed() {
        let mut seen = Vec::new();
        for entry in app_registry() {
            assert!(
                ApplicationId::new(entry.id).is_ok(),
                "bad registry id: {}",
                entry.id
            );
            assert!(!seen.contains(&entry.id), "duplicate id: {}", entry.id);
            seen.push(entry.id);
        }
    }

    #[test]
    fn pinned_roster_order_is_explicit() {
        let pinned = pinned_taskbar_app_ids();
        assert_eq!(
            pinned,
            vec![
                ApplicationId::trusted("terminal"),
                ApplicationId::trusted("projects"),
            ]
        );
        for id in &pinned {
            let entry = descriptor_by_id(id).expect("pinned app registered");
            assert!(entry.pinned_to_taskbar);
        }
    }

    #[test]
    fn taskbar_only_apps_stay_off_the_desktop() {
        let desktop: Vec<&str> = desktop_icon_apps().iter().map(|a| a.id).collect();
        assert!(!desktop.contains(&"terminal"));
        assert!(!desktop.contains(&"settings"));
        assert!(!desktop.contains(&"mail"));
        assert!(desktop.contains(&"projects"));
    }

    #[test]
    fn preferred_size_falls_back_to_the_shared_default() {
        let entry = AppDescriptor {
            id: "blank",
            title: "Blank",
            icon: IconName::Folder,
            preferred_width: None,
            preferred_height: None,
            show_on_desktop: false,
            pinned_to_taskbar: false,
        };
        assert_eq!(entry.preferred_size(), PreferredSize::default());
    }
}
