use dioxus::prelude::*;
use site::content::Job;
use site::content::EDUCATION;
use site::content::JOBS;
use site::menu::NavAnchor;

use crate::components::glass::Card;
use crate::components::glass::CheckList;
use crate::components::glass::Container;
use crate::components::glass::Grid;
use crate::components::section::Section;

#[component]
fn JobCard(job: Job) -> Element {
    let achievements: Vec<String> = job.achievements.iter().map(|a| a.to_string()).collect();
    rsx! {
        Card {
            class: "job-card reveal".to_string(),
            div {
                class: "job",
                div { class: "job-icon glow", "{job.icon}" }
                div {
                    class: "job-body",
                    h3 { class: "gradient-text", "{job.title}" }
                    p { class: "accent job-meta", "{job.company} • {job.duration}" }
                    p { class: "muted", "{job.summary}" }
                    CheckList { items: achievements }
                }
            }
        }
    }
}

#[component]
pub fn ExperienceSection() -> Element {
    rsx! {
        Section {
            anchor: NavAnchor::Experience,
            title: "Work Experience".to_string(),
            Container {
                class: "stack".to_string(),
                for job in JOBS.iter().copied() {
                    JobCard { key: "{job.company}", job }
                }
                h2 { class: "section-title gradient-text reveal", "🎓 Education" }
                Grid {
                    columns: 2,
                    for education in EDUCATION.iter() {
                        Card {
                            class: "education-card".to_string(),
                            h3 { "{education.degree}" }
                            p { class: "accent", "{education.institution}" }
                            p { class: "muted", "{education.years}" }
                        }
                    }
                }
            }
        }
    }
}
