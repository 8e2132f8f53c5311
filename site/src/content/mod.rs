//! Static page content. Everything here is `const` data; the ui crate only
//! lays it out.

mod experience;
mod profile;
mod projects;
mod skills;

pub use experience::EDUCATION;
pub use experience::JOBS;
pub use profile::HERO_ROLES;
pub use profile::PROFILE;
pub use projects::ONGOING_PROJECTS;
pub use projects::PROJECTS;
pub use skills::SKILL_CATEGORIES;

#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::EnumIs)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Email,
}

impl SocialKind {
    pub fn glyph(self) -> &'static str {
        match self {
            SocialKind::GitHub => "🐙",
            SocialKind::LinkedIn => "💼",
            SocialKind::Email => "✉️",
        }
    }

    /// External profiles open in a new tab; `mailto:` links do not.
    pub fn opens_new_tab(self) -> bool {
        !self.is_email()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: &'static str,
    pub href: &'static str,
}

/// An emoji-prefixed one-liner, as used in the About section.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Highlight {
    pub icon: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Profile {
    pub name: &'static str,
    pub greeting: &'static str,
    pub tagline: &'static str,
    pub portrait: &'static str,
    pub portrait_alt: &'static str,
    pub about_image: &'static str,
    pub about: &'static [&'static str],
    pub highlights: &'static [Highlight],
    pub links: &'static [SocialLink],
    pub contact_pitch: &'static str,
    pub motto: &'static str,
    pub built_with: &'static str,
    pub copyright: &'static str,
}

impl Profile {
    pub fn link(&self, kind: SocialKind) -> Option<&'static SocialLink> {
        self.links.iter().find(|l| l.kind == kind)
    }

    /// The bare address of the email link, without the `mailto:` scheme.
    pub fn email(&self) -> Option<&'static str> {
        self.link(SocialKind::Email)
            .map(|l| l.href.trim_start_matches("mailto:"))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Job {
    pub title: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub icon: &'static str,
    pub summary: &'static str,
    pub achievements: &'static [&'static str],
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub years: &'static str,
}

/// What fills the media half of a project card.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProjectMedia {
    Image { src: &'static str, alt: &'static str },
    Emoji(&'static str),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub highlights: &'static [&'static str],
    pub media: ProjectMedia,
    pub badge: Option<&'static str>,
    pub demo_url: Option<&'static str>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct OngoingProject {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

/// Site-relative images the page references. They are not bundled with the
/// crate: the deployment serves them from the web app's `public/` directory.
pub fn local_images() -> impl Iterator<Item = &'static str> {
    let projects = PROJECTS.iter().filter_map(|p| match p.media {
        ProjectMedia::Image { src, .. } => Some(src),
        ProjectMedia::Emoji(_) => None,
    });
    std::iter::once(PROFILE.portrait).chain(projects)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_skill_category_has_skills() {
        assert_eq!(SKILL_CATEGORIES.len(), 6);
        for category in SKILL_CATEGORIES {
            assert!(!category.skills.is_empty(), "{} is empty", category.title);
            assert!(category.skills.iter().all(|s| s.icon.starts_with("https://")));
        }
    }

    #[test]
    fn every_project_lists_its_stack() {
        for project in PROJECTS.iter() {
            assert!(!project.tech.is_empty(), "{} has no tech", project.title);
        }
        for project in ONGOING_PROJECTS.iter() {
            assert!(!project.tags.is_empty(), "{} has no tags", project.title);
        }
    }

    #[test]
    fn local_images_are_site_relative() {
        let images: Vec<_> = local_images().collect();
        assert_eq!(images.len(), 4);
        assert_eq!(images[0], PROFILE.portrait);
        for src in images {
            assert!(src.starts_with('/') && !src.starts_with("//"), "{src}");
            assert!(
                [".png", ".jpg"].iter().any(|ext| src.ends_with(ext)),
                "{src} is not an image"
            );
        }
    }

    #[test]
    fn jobs_have_achievements() {
        assert_eq!(JOBS.len(), 2);
        assert!(JOBS.iter().all(|j| j.achievements.len() == 4));
        assert_eq!(EDUCATION.len(), 2);
    }

    #[test]
    fn profile_links() {
        assert_eq!(PROFILE.email(), Some("manishgenius2513@gmail.com"));
        let github = PROFILE.link(SocialKind::GitHub).unwrap();
        assert!(github.kind.opens_new_tab());
        assert!(!SocialKind::Email.opens_new_tab());
    }

    #[test]
    fn hero_roles() {
        assert_eq!(HERO_ROLES.len(), 4);
        assert_eq!(HERO_ROLES[0], "AI & ML Enthusiast 🤖");
    }
}
