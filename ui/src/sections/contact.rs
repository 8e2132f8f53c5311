use dioxus::prelude::*;
use site::content::SocialKind;
use site::content::PROFILE;
use site::menu::NavAnchor;

use crate::components::glass::Container;
use crate::components::section::Section;
use crate::components::social::SocialButton;
use crate::components::social::SocialIcon;

#[component]
pub fn ContactSection() -> Element {
    let email = PROFILE.link(SocialKind::Email).copied();
    let email_address = PROFILE.email().unwrap_or_default().to_string();

    rsx! {
        Section {
            anchor: NavAnchor::Contact,
            title: "Let's Connect!".to_string(),
            class: "contact".to_string(),
            Container {
                class: "narrow center".to_string(),
                p { class: "lead muted reveal", "{PROFILE.contact_pitch}" }
                if let Some(link) = email {
                    div {
                        class: "contact-email reveal",
                        SocialButton { link, label: email_address }
                    }
                }
                div {
                    class: "social-row reveal",
                    for link in PROFILE.links.iter().copied().filter(|l| !l.kind.is_email()) {
                        SocialIcon { link }
                    }
                }
                div {
                    class: "motto reveal",
                    p { class: "gradient-text", "{PROFILE.motto}" }
                    div {
                        class: "emoji-row",
                        span { class: "float", "🚀" }
                        span { class: "float delay-1", "💻" }
                        span { class: "float delay-2", "🤖" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_mail_link_and_profiles() {
        let html = dioxus_ssr::render_element(rsx! { ContactSection {} });
        assert!(html.contains(r#"id="contact""#));
        assert!(html.contains("mailto:manishgenius2513@gmail.com"));
        assert!(html.contains(">manishgenius2513@gmail.com<"), "{html}");
        assert!(html.contains(r#"aria-label="GitHub""#));
        assert!(html.contains(r#"aria-label="LinkedIn""#));
    }
}
