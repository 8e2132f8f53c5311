//! Defines the mutable, reactive state for the page.

use dioxus::prelude::*;
use site::menu::MenuState;
use site::theme::ThemeSettings;

use crate::compat::PlatformMarker;
use crate::compat::PlatformStorage;

pub type PlatformTheme = ThemeSettings<PlatformStorage, PlatformMarker>;

/// A reactive state provided as a Dioxus context.
///
/// Holds the only two pieces of interactive state on the page. Everything
/// else is rendered from the static tables in `site::content`.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// Whether the mobile navigation menu is expanded.
    pub menu: Signal<MenuState>,
    /// Theme mirror, bound to platform storage and the document root.
    pub theme: Signal<PlatformTheme>,
}
