use dioxus::prelude::*;
use site::content::Project;
use site::content::ProjectMedia;
use site::content::ONGOING_PROJECTS;
use site::content::PROJECTS;
use site::menu::NavAnchor;

use crate::components::glass::Card;
use crate::components::glass::CheckList;
use crate::components::glass::Container;
use crate::components::glass::Grid;
use crate::components::glass::Pill;
use crate::components::glass::PillLink;
use crate::components::glass::PillStyle;
use crate::components::section::Section;

#[component]
fn ProjectMediaPanel(
    media: ProjectMedia,
    #[props(default)] badge: Option<&'static str>,
) -> Element {
    rsx! {
        div {
            class: "project-media",
            match media {
                ProjectMedia::Image { src, alt } => rsx! {
                    img { src, alt, loading: "lazy" }
                },
                ProjectMedia::Emoji(emoji) => rsx! {
                    div { class: "project-emoji float", "{emoji}" }
                },
            }
            if let Some(badge) = badge {
                span { class: "gradient badge", "{badge}" }
            }
        }
    }
}

/// One featured project. Every other card mirrors its layout on wide screens.
#[component]
fn ProjectCard(project: Project, mirrored: bool) -> Element {
    let highlights: Vec<String> = project.highlights.iter().map(|h| h.to_string()).collect();
    let layout = if mirrored { "project mirrored" } else { "project" };
    rsx! {
        Card {
            class: "project-card reveal".to_string(),
            div {
                class: "{layout}",
                ProjectMediaPanel { media: project.media, badge: project.badge }
                div {
                    class: "project-body",
                    h3 { class: "gradient-text", "{project.title}" }
                    p { class: "muted", "{project.description}" }
                    div {
                        class: "pill-row",
                        for tech in project.tech.iter() {
                            Pill { label: tech.to_string() }
                        }
                    }
                    if !highlights.is_empty() {
                        CheckList { items: highlights }
                    }
                    if let Some(url) = project.demo_url {
                        PillLink {
                            href: url.to_string(),
                            style: PillStyle::Gradient,
                            external: true,
                            "View Live Demo →"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProjectsSection() -> Element {
    rsx! {
        Section {
            anchor: NavAnchor::Projects,
            title: "Featured Projects".to_string(),
            Container {
                wide: true,
                class: "stack".to_string(),
                for (i, project) in PROJECTS.iter().copied().enumerate() {
                    ProjectCard { key: "{project.title}", project, mirrored: i % 2 == 1 }
                }
                h3 { class: "section-subtitle gradient-text reveal", "🚧 Ongoing Projects" }
                Grid {
                    columns: 3,
                    for project in ONGOING_PROJECTS.iter() {
                        Card {
                            class: "ongoing-card".to_string(),
                            div { class: "ongoing-icon", "{project.icon}" }
                            h4 { "{project.title}" }
                            p { class: "muted", "{project.description}" }
                            div {
                                class: "pill-row",
                                for tag in project.tags.iter() {
                                    Pill { label: tag.to_string() }
                                }
                            }
                        }
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
    fn lists_projects_and_demo_link() {
        let html = dioxus_ssr::render_element(rsx! { ProjectsSection {} });
        assert!(html.contains(r#"id="projects""#));
        assert_eq!(html.matches("project-card").count(), PROJECTS.len());
        assert_eq!(html.matches("ongoing-card").count(), ONGOING_PROJECTS.len());
        assert!(html.contains("https://tech-shop-online.netlify.app/"));
        assert_eq!(html.matches("project mirrored").count(), PROJECTS.len() / 2);
    }
}
