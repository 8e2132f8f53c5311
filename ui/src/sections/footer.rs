use dioxus::prelude::*;
use site::content::PROFILE;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "glass site-footer",
            p { class: "muted", "{PROFILE.built_with}" }
            p { class: "muted small", "{PROFILE.copyright}" }
            span { class: "spin", "⭐" }
        }
    }
}
