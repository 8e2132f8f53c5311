use dioxus::prelude::*;
use site::config::SiteConfig;
use site::content::PROFILE;
use site::menu::NavAnchor;
use site::typewriter::TypeSequence;

use crate::components::glass::Container;
use crate::components::section::Section;
use crate::components::social::SocialButton;
use crate::hooks::use_typewriter::use_typewriter;

#[component]
pub fn HeroSection() -> Element {
    let config = use_context::<SiteConfig>();
    let role = use_typewriter(TypeSequence::hero(&config));

    rsx! {
        Section {
            anchor: NavAnchor::Dashboard,
            class: "hero".to_string(),
            Container {
                class: "hero-grid".to_string(),
                div {
                    class: "hero-text slide-in-left",
                    h2 { class: "hero-greeting muted", "{PROFILE.greeting}" }
                    h1 { class: "hero-name", span { class: "gradient-text", "{PROFILE.name}" } }
                    div {
                        class: "hero-role",
                        span { class: "gradient-text", "{role}" }
                        span { class: "cursor", "aria-hidden": "true", "|" }
                    }
                    p { class: "hero-tagline", "{PROFILE.tagline}" }
                    div {
                        class: "hero-links",
                        for link in PROFILE.links.iter().copied() {
                            SocialButton { link }
                        }
                    }
                }
                div {
                    class: "hero-portrait float",
                    img {
                        class: "themed-image",
                        src: PROFILE.portrait,
                        alt: PROFILE.portrait_alt,
                    }
                }
            }
            a {
                class: "scroll-hint bounce",
                href: NavAnchor::About.href(),
                "aria-label": "Scroll to About",
                "↓"
            }
        }
    }
}
