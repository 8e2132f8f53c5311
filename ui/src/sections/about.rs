use dioxus::prelude::*;
use site::content::PROFILE;
use site::menu::NavAnchor;

use crate::components::glass::Card;
use crate::components::section::Section;

#[component]
pub fn AboutSection() -> Element {
    rsx! {
        Section {
            anchor: NavAnchor::About,
            title: "About Me".to_string(),
            Card {
                class: "about-card reveal".to_string(),
                div {
                    class: "grid grid-2 align-center",
                    img {
                        class: "about-image",
                        src: PROFILE.about_image,
                        alt: "Coding",
                    }
                    div {
                        for paragraph in PROFILE.about.iter() {
                            p { class: "lead", "{paragraph}" }
                        }
                        div {
                            class: "highlights",
                            for highlight in PROFILE.highlights.iter() {
                                div {
                                    class: "glass highlight",
                                    span { class: "highlight-icon", "{highlight.icon}" }
                                    p { "{highlight.text}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
