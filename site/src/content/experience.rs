use super::Education;
use super::Job;

pub const JOBS: &[Job] = &[
    Job {
        title: "UI/UX Designer",
        company: "Quickb AI Solutions",
        duration: "3 Months",
        icon: "🎨",
        summary: "At Quickb AI Solutions, I worked on designing user-centered interfaces for AI-powered web applications. My responsibilities included conducting user research, creating wireframes and prototypes in Figma, and ensuring seamless user experiences through clean, responsive front-end design using HTML and CSS.",
        achievements: &[
            "Designed visually appealing and functional UI mockups using Figma",
            "Conducted user research and feedback analysis to refine designs",
            "Built responsive front-end components with HTML and CSS",
            "Improved interface consistency and reduced user confusion through iterative design",
        ],
    },
    Job {
        title: "Java Backend Intern",
        company: "Paritechsoft",
        duration: "6 Months",
        icon: "☕",
        summary: "At Paritechsoft, I contributed to the development of RESTful APIs and backend modules for enterprise-level web applications. I worked with the Spring Boot framework to build and test backend logic, integrated MySQL for data management, and used Postman for API testing and validation.",
        achievements: &[
            "Developed and optimized RESTful APIs using Spring Boot",
            "Implemented CRUD operations and managed data persistence with MySQL",
            "Tested and documented APIs using Postman for integration readiness",
            "Enhanced backend code quality through modular and reusable design patterns",
        ],
    },
];

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "MCA (Pursuing)",
        institution: "Lovely Professional University",
        years: "2025 - 2027",
    },
    Education {
        degree: "BCA",
        institution: "Patliputra University",
        years: "2020 - 2023",
    },
];
