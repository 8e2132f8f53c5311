use dioxus::prelude::*;
use site::menu::NavAnchor;

/// A full-height page section that a navigation anchor scrolls to.
///
/// The element id comes from the anchor, so the nav links and the sections
/// cannot drift apart.
#[component]
pub fn Section(
    anchor: NavAnchor,
    #[props(optional)] title: Option<String>,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        section {
            id: anchor.section_id(),
            class: "section {class}",
            if let Some(title) = title {
                h2 { class: "section-title gradient-text reveal", "{title}" }
            }
            {children}
        }
    }
}
