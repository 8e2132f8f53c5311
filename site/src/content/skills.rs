use super::Skill;
use super::SkillCategory;

const fn skill(name: &'static str, icon: &'static str) -> Skill {
    Skill { name, icon }
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend Development",
        icon: "⚛️",
        skills: &[
            skill("React", "https://skillicons.dev/icons?i=react"),
            skill("Next.js", "https://skillicons.dev/icons?i=nextjs"),
            skill("JavaScript", "https://skillicons.dev/icons?i=js"),
            skill("HTML", "https://skillicons.dev/icons?i=html"),
            skill("CSS", "https://skillicons.dev/icons?i=css"),
            skill("Bootstrap", "https://skillicons.dev/icons?i=bootstrap"),
            skill("Tailwind", "https://skillicons.dev/icons?i=tailwind"),
        ],
    },
    SkillCategory {
        title: "Backend Development",
        icon: "☕",
        skills: &[
            skill("Java", "https://skillicons.dev/icons?i=java"),
            skill("Spring", "https://skillicons.dev/icons?i=spring"),
            skill("Node.js", "https://skillicons.dev/icons?i=nodejs"),
            skill("Express", "https://skillicons.dev/icons?i=express"),
            skill("C++", "https://skillicons.dev/icons?i=cpp"),
            skill("C", "https://skillicons.dev/icons?i=c"),
        ],
    },
    SkillCategory {
        title: "Mobile Development",
        icon: "📱",
        skills: &[
            skill("Flutter", "https://skillicons.dev/icons?i=flutter"),
            skill("Dart", "https://skillicons.dev/icons?i=dart"),
            skill("Android Studio", "https://skillicons.dev/icons?i=androidstudio"),
        ],
    },
    SkillCategory {
        title: "Databases",
        icon: "🗄️",
        skills: &[
            skill("MySQL", "https://skillicons.dev/icons?i=mysql"),
            skill("MongoDB", "https://skillicons.dev/icons?i=mongodb"),
            skill(
                "MS SQL Server",
                "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/microsoftsqlserver/microsoftsqlserver-plain.svg",
            ),
        ],
    },
    SkillCategory {
        title: "AI/ML (Currently Learning)",
        icon: "🤖",
        skills: &[
            skill("Python", "https://skillicons.dev/icons?i=python"),
            skill("TensorFlow", "https://skillicons.dev/icons?i=tensorflow"),
            skill("PyTorch", "https://skillicons.dev/icons?i=pytorch"),
            skill("Scikit-Learn", "https://skillicons.dev/icons?i=sklearn"),
        ],
    },
    SkillCategory {
        title: "Tools & IDEs",
        icon: "🛠️",
        skills: &[
            skill("VS Code", "https://skillicons.dev/icons?i=vscode"),
            skill("Git", "https://skillicons.dev/icons?i=git"),
            skill("GitHub", "https://skillicons.dev/icons?i=github"),
            skill("IntelliJ", "https://skillicons.dev/icons?i=idea"),
            skill("Postman", "https://skillicons.dev/icons?i=postman"),
            skill("Figma", "https://skillicons.dev/icons?i=figma"),
        ],
    },
];
