// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state_mut;
pub mod compat;
mod components;
pub mod hooks;
mod sections;

use app_state_mut::AppStateMut;
use hooks::use_theme::use_theme;
use sections::about::AboutSection;
use sections::contact::ContactSection;
use sections::experience::ExperienceSection;
use sections::footer::Footer;
use sections::hero::HeroSection;
use sections::projects::ProjectsSection;
use sections::skills::SkillsSection;
use site::config::SiteConfig;
use site::content::PROFILE;
use site::menu::MenuState;
use site::menu::NavAnchor;
use site::theme::ThemeSettings;

/// Document title and description, shared with the web page shell.
pub const PAGE_TITLE: &str = "Manish Kumar | AI/ML Enthusiast & Full Stack Developer";
pub const PAGE_DESCRIPTION: &str = "Portfolio of Manish Kumar - Full Stack Developer & AI/ML Enthusiast. Finalist at Smart India Hackathon 2025.";

/// The desktop navigation links. Hidden on narrow screens.
#[component]
fn NavLinks() -> Element {
    rsx! {
        ul {
            class: "nav-links",
            for (i, anchor) in NavAnchor::ALL.into_iter().enumerate() {
                li {
                    style: format!("animation-delay: {}ms", i * 100),
                    a { href: anchor.href(), "{anchor.label()}" }
                }
            }
        }
    }
}

/// Light/dark switch. `compact` renders the icon-only mobile variant.
#[component]
fn ThemeToggle(#[props(default)] compact: bool) -> Element {
    let mut theme = use_theme();
    let current = theme.current();
    let (class, caption) = if compact {
        ("glass pill-button theme-toggle mobile-only", current.toggle_icon())
    } else {
        ("glass pill-button theme-toggle desktop-only", current.toggle_label())
    };

    rsx! {
        button {
            class,
            "aria-label": "Toggle theme",
            onclick: move |_| {
                theme.toggle();
            },
            "{caption}"
        }
    }
}

/// The mobile "hamburger" button.
#[component]
fn HamburgerMenu(menu: Signal<MenuState>) -> Element {
    let is_open = menu().is_open();
    let expanded = if is_open { "true" } else { "false" };
    rsx! {
        button {
            class: "hamburger mobile-only",
            "aria-label": "Toggle menu",
            "aria-expanded": expanded,
            onclick: move |_| menu.write().toggle(),
            if is_open { "✕" } else { "☰" }
        }
    }
}

/// The collapsible link list shown under the bar on narrow screens.
#[component]
fn MobileMenu(menu: Signal<MenuState>) -> Element {
    rsx! {
        if menu().is_open() {
            div {
                class: "mobile-menu mobile-only",
                for (i, anchor) in NavAnchor::ALL.into_iter().enumerate() {
                    a {
                        class: "mobile-menu-item",
                        style: format!("animation-delay: {}ms", i * 50),
                        href: anchor.href(),
                        onclick: move |_| {
                            menu.write().select(anchor);
                        },
                        "{anchor.label()}"
                    }
                }
            }
        }
    }
}

#[component]
fn NavBar() -> Element {
    let mut menu = use_context::<AppStateMut>().menu;

    rsx! {
        nav {
            class: "glass site-nav slide-down",
            div {
                class: "nav-inner",
                a {
                    class: "brand gradient-text",
                    href: NavAnchor::Dashboard.href(),
                    onclick: move |_| menu.write().close(),
                    "{PROFILE.name}"
                }
                div {
                    class: "nav-controls",
                    NavLinks {}
                    ThemeToggle {}
                    HamburgerMenu { menu }
                    ThemeToggle { compact: true }
                }
            }
            MobileMenu { menu }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Title { "{PAGE_TITLE}" }
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Meta {
            name: "description",
            content: PAGE_DESCRIPTION,
        }
        document::Stylesheet {
            href: asset!("/assets/css/portfolio.css"),
        }
        AppBody {}
    }
}

/// Owns the page state. Mounting it is the second theme initialization
/// phase: the settings re-read durable storage, which the shell's pre-paint
/// step already applied.
#[component]
fn AppBody() -> Element {
    use_context_provider(SiteConfig::from_build_env);

    let menu = use_signal(MenuState::default);
    let theme = use_signal(|| {
        ThemeSettings::mount(
            compat::platform_storage(),
            compat::PlatformMarker::default(),
        )
    });
    use_context_provider(|| AppStateMut { menu, theme });
    // every section is mounted by the time this runs
    use_effect(compat::observe_reveals);

    rsx! {
        main {
            class: "page",
            NavBar {}
            HeroSection {}
            AboutSection {}
            SkillsSection {}
            ExperienceSection {}
            ProjectsSection {}
            ContactSection {}
            Footer {}
        }
    }
}
