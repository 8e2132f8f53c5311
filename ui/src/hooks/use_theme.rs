use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use site::theme::ThemePreference;

use crate::app_state_mut::AppStateMut;
use crate::app_state_mut::PlatformTheme;

/// Copyable handle to the page's theme settings.
#[derive(Clone, Copy)]
pub struct ThemeHandle {
    settings: Signal<PlatformTheme>,
}

impl ThemeHandle {
    /// Subscribes the calling component to theme changes.
    pub fn current(&self) -> ThemePreference {
        self.settings.read().get()
    }

    /// Switches theme, updating the document marker and storage.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.settings.write().toggle();
        info!("theme switched to {next}");
        next
    }
}

pub fn use_theme() -> ThemeHandle {
    let settings = use_context::<AppStateMut>().theme;
    ThemeHandle { settings }
}
