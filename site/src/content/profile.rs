use super::Highlight;
use super::Profile;
use super::SocialKind;
use super::SocialLink;

/// Roles cycled by the hero typewriter.
pub const HERO_ROLES: &[&str] = &[
    "AI & ML Enthusiast 🤖",
    "Full Stack Developer 💻",
    "UI/UX Designer 🎨",
    "Always Learning 🚀",
];

pub const PROFILE: Profile = Profile {
    name: "Manish Kumar",
    greeting: "Hi there! 👋 I'm",
    tagline: "Crafting Intelligent Solutions ✨ | Building Future Tech 🔥 | Learning Without Limits 📚",
    portrait: "/my_img.png",
    portrait_alt: "Portrait of Manish Kumar",
    about_image: "https://media.giphy.com/media/qgQUggAC3Pfv687qPC/giphy.gif",
    about: &[
        "✨ Passionate about blending Full Stack Development and Artificial Intelligence to create smart, user-focused solutions.",
        "Constantly learning, experimenting, and exploring new ways to turn ideas into impactful technology.",
    ],
    highlights: &[
        Highlight {
            icon: "🎯",
            text: "Currently: Working on AI/ML projects using Python",
        },
        Highlight {
            icon: "📖",
            text: "Finalist at Smart India Hackathon 2025",
        },
        Highlight {
            icon: "🌐",
            text: "Contributing to open-source projects",
        },
    ],
    links: &[
        SocialLink {
            kind: SocialKind::GitHub,
            label: "GitHub",
            href: "https://github.com/proximityguy",
        },
        SocialLink {
            kind: SocialKind::LinkedIn,
            label: "LinkedIn",
            href: "https://www.linkedin.com/in/proximityguy",
        },
        SocialLink {
            kind: SocialKind::Email,
            label: "Contact Me",
            href: "mailto:manishgenius2513@gmail.com",
        },
    ],
    contact_pitch: "Have a project in mind or just want to chat about tech? I'm always open to discussing new opportunities and ideas!",
    motto: "✨ \"Code. Create. Contribute. Continuously.\" ✨",
    built_with: "Built with ❤️ using Rust, Dioxus and WebAssembly",
    copyright: "© 2025 Manish Kumar. All rights reserved.",
};
