use dioxus::prelude::*;
use site::content::SkillCategory;
use site::content::SKILL_CATEGORIES;
use site::menu::NavAnchor;

use crate::components::glass::Card;
use crate::components::glass::Container;
use crate::components::section::Section;

#[component]
fn SkillGroup(category: SkillCategory) -> Element {
    rsx! {
        div {
            class: "skill-group reveal",
            h3 { class: "accent", "{category.icon} {category.title}" }
            div {
                class: "grid grid-6 skill-grid",
                for skill in category.skills.iter() {
                    Card {
                        class: "skill-card".to_string(),
                        img { src: skill.icon, alt: skill.name, loading: "lazy" }
                        p { "{skill.name}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SkillsSection() -> Element {
    rsx! {
        Section {
            anchor: NavAnchor::Skills,
            title: "Skills & Technologies".to_string(),
            Container {
                wide: true,
                for category in SKILL_CATEGORIES.iter().copied() {
                    SkillGroup { key: "{category.title}", category }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_every_skill() {
        let html = dioxus_ssr::render_element(rsx! { SkillsSection {} });
        assert!(html.contains(r#"id="skills""#));
        for category in SKILL_CATEGORIES {
            // dioxus-ssr writes `&` as a numeric reference
            let title = category.title.replace('&', "&#38;");
            assert!(html.contains(&title), "missing {title}");
            for skill in category.skills {
                assert!(html.contains(skill.icon), "missing icon for {}", skill.name);
            }
        }
    }
}
