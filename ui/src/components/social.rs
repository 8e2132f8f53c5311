use dioxus::prelude::*;
use site::content::SocialLink;

use super::glass::PillLink;

/// Pill button for one of the profile's social links.
#[component]
pub fn SocialButton(link: SocialLink, #[props(optional)] label: Option<String>) -> Element {
    let label = label.unwrap_or_else(|| link.label.to_string());
    rsx! {
        PillLink {
            href: link.href.to_string(),
            external: link.kind.opens_new_tab(),
            span { class: "social-glyph", "aria-hidden": "true", "{link.kind.glyph()}" }
            span { "{label}" }
        }
    }
}

/// Icon-only round link, as used in the contact section.
#[component]
pub fn SocialIcon(link: SocialLink) -> Element {
    let external = link.kind.opens_new_tab();
    rsx! {
        a {
            class: "glass social-icon",
            href: link.href,
            target: external.then_some("_blank"),
            rel: external.then_some("noopener noreferrer"),
            "aria-label": link.label,
            "{link.kind.glyph()}"
        }
    }
}
