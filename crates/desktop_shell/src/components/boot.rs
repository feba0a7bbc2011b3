use std::time::Duration;

use super::*;
use shell_ui::SplashScreen;

/// How long the boot splash stays up before the shell appears.
pub(super) const BOOT_SPLASH_MS: u64 = 2000;

#[component]
/// Fire-once boot splash. The timer is cleared on teardown so an unmounted
/// splash never runs its completion callback late.
pub(super) fn BootSplash(on_done: Callback<()>) -> impl IntoView {
    if let Ok(timeout) = set_timeout_with_handle(
        move || on_done.call(()),
        Duration::from_millis(BOOT_SPLASH_MS),
    ) {
        on_cleanup(move || timeout.clear());
    }

    view! {
        <SplashScreen>
            <Icon icon=shell_ui::IconName::Power size=IconSize::Lg />
            <p>"Starting up..."</p>
        </SplashScreen>
    }
}
