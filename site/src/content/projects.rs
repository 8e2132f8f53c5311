use super::OngoingProject;
use super::Project;
use super::ProjectMedia;

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Civic Issue Reporter",
        description: "A unified mobile-first platform enabling citizens to report civic issues like potholes and broken infrastructure with GPS-tagged photos. Features automated categorization, real-time tracking, and analytics dashboard for government departments.",
        tech: &["Flutter", "React", "Next.js", "Express.js", "MongoDB", "Python AI"],
        highlights: &[
            "Team of 6 members",
            "Centralized dashboard with interactive city mapping",
            "Automated routing and real-time citizen notifications",
        ],
        media: ProjectMedia::Image {
            src: "/civic-issue-reporter.jpg",
            alt: "Civic Issue Reporter",
        },
        badge: Some("SIH 2025 Finalist 🏆"),
        demo_url: None,
    },
    Project {
        title: "Dhvani Vicharak - Audio Language Model",
        description: "Deep Learning-based Audio Language Model for defense intelligence. Capable of understanding speech, non-speech, and paralinguistic audio with multilingual support. Built for DRDO to process audio data 5X faster.",
        tech: &["React", "Next.js", "Tailwind CSS", "Whisper", "PANNs", "LLM", "JWT"],
        highlights: &[
            "Frontend Developer for Team Code4City",
            "85-90% reduction in processing time",
            "Multilingual: Hindi, Urdu, Tamil, Telugu, Bengali, Mandarin, English",
            "400% throughput improvement for DRDO",
        ],
        media: ProjectMedia::Image {
            src: "/dhvani-vicharak.png",
            alt: "Dhvani Vicharak",
        },
        badge: Some("SIH Alternate 🎖️"),
        demo_url: None,
    },
    Project {
        title: "Tech Shop E-Commerce",
        description: "A fully responsive e-commerce website for electronics and tech products. Features include product catalog, shopping cart, dynamic filtering, and smooth animations for enhanced user experience.",
        tech: &["HTML", "CSS", "JavaScript"],
        highlights: &[],
        media: ProjectMedia::Image {
            src: "/tech-shop.png",
            alt: "Tech Shop",
        },
        badge: None,
        demo_url: Some("https://tech-shop-online.netlify.app/"),
    },
    Project {
        title: "🏠 House Price Prediction System",
        description: "Data-driven ML project predicting housing prices using California Housing dataset. Implements multiple regression algorithms with comprehensive data preprocessing and model evaluation.",
        tech: &["Python", "Jupyter", "NumPy", "Pandas", "Scikit-Learn"],
        highlights: &[
            "Linear Regression, Decision Tree, Random Forest models",
            "Cross-validation, RMSE, R² metrics evaluation",
            "GridSearchCV optimization and automated Pipeline",
        ],
        media: ProjectMedia::Emoji("🏠"),
        badge: None,
        demo_url: None,
    },
];

pub const ONGOING_PROJECTS: &[OngoingProject] = &[
    OngoingProject {
        icon: "📧",
        title: "Phishing Email Detection",
        description: "ML system using KNN and SVM to classify 5,172 emails based on word-frequency features. Comparative model analysis for effective detection.",
        tags: &["KNN", "SVM", "Python"],
    },
    OngoingProject {
        icon: "📱",
        title: "SMS Spam Detection (BERT)",
        description: "NLP-based spam detection using BERT transformer for deep contextual understanding. Superior precision on 5,574 SMS messages.",
        tags: &["BERT", "NLP", "Transformers"],
    },
    OngoingProject {
        icon: "📲",
        title: "SMS Spam (Traditional ML)",
        description: "Comparing Logistic Regression, Random Forest, Gradient Boosting, and SVM with TF-IDF vectorization for SMS spam detection.",
        tags: &["RF", "SVM", "TF-IDF"],
    },
];
