//! Static portfolio content. Everything here is configuration: the UI renders
//! exactly what is listed, in the order it is listed.

/// The page sections, in document order. Drives both the nav bar and the
/// scroll-spy highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Education,
    Experience,
    Skills,
    Projects,
    Certifications,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::About,
        Section::Education,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Certifications,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Education => "Education",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Certifications => "Certifications",
            Section::Contact => "Contact",
        }
    }

    /// Position within [`Section::ALL`], for indexing parallel arrays.
    pub fn index(self) -> usize {
        match self {
            Section::About => 0,
            Section::Education => 1,
            Section::Experience => 2,
            Section::Skills => 3,
            Section::Projects => 4,
            Section::Certifications => 5,
            Section::Contact => 6,
        }
    }
}

pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub bio: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
    pub resume_url: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Arjun Mehta",
    tagline: "Computer Science student passionate about web development, data analysis, and AI",
    bio: "I'm always interested in new opportunities and interesting projects. \
          Whether you have a question or just want to say hi, feel free to reach out!",
    email: "arjunmehta.dev@gmail.com",
    phone: "+91-9876012345",
    location: "Pune, India",
    github_url: "https://github.com/arjunm-dev",
    linkedin_url: "https://linkedin.com/in/arjunm-dev",
    resume_url: "https://www.arjunmehta.dev/resume.pdf",
};

pub struct EducationEntry {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub grade: &'static str,
}

pub const EDUCATION: [EducationEntry; 3] = [
    EducationEntry {
        degree: "B.Tech in Computer Science",
        institution: "Meridian Institute of Technology, Pune",
        period: "Aug 2024 - Present",
        grade: "CGPA: 8.1",
    },
    EducationEntry {
        degree: "Senior Secondary (Class XII)",
        institution: "St. Xavier's School, Nashik",
        period: "March 2024",
        grade: "Percentage: 92.6%",
    },
    EducationEntry {
        degree: "Secondary School (Class X)",
        institution: "St. Xavier's School, Nashik",
        period: "March 2022",
        grade: "Percentage: 94.8%",
    },
];

pub struct ExperienceEntry {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub engagement: &'static str,
}

pub const EXPERIENCE: [ExperienceEntry; 2] = [
    ExperienceEntry {
        title: "Summer AI Intern",
        company: "Lumos School of Technology",
        period: "June 2025 - August 2025",
        engagement: "Internship",
    },
    ExperienceEntry {
        title: "Virtual Cloud & AI Intern",
        company: "IBM SkillsBuild",
        period: "July 2025 - August 2025",
        engagement: "Virtual Internship",
    },
];

pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_GROUPS: [SkillGroup; 7] = [
    SkillGroup {
        category: "Languages",
        skills: &["Python", "Rust", "Java", "HTML", "CSS", "SQL"],
    },
    SkillGroup {
        category: "Frameworks",
        skills: &["Flask", "FastAPI", "Django", "Bootstrap", "SQLAlchemy"],
    },
    SkillGroup {
        category: "Libraries",
        skills: &[
            "Pandas", "NumPy", "Matplotlib", "Plotly", "NLTK", "BeautifulSoup", "Scrapy",
            "Selenium", "OpenCV",
        ],
    },
    SkillGroup {
        category: "Tools",
        skills: &["Git", "GitHub", "VS Code", "PyCharm"],
    },
    SkillGroup {
        category: "Platforms",
        skills: &["Linux", "Windows"],
    },
    SkillGroup {
        category: "Concepts",
        skills: &["Object-Oriented Programming (OOP)"],
    },
    SkillGroup {
        category: "Interests",
        skills: &["Web Development", "Data Analysis", "NLP & LLMs", "Automation", "DSA"],
    },
];

pub struct Project {
    pub title: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub features: &'static [&'static str],
    pub report_url: Option<&'static str>,
    pub demo_url: Option<&'static str>,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "Forum Pulse",
        period: "Mar 2025 - May 2025",
        description: "A Flask web app for subreddit sentiment, post-thread analysis, and meme browsing.",
        tech: &["Flask", "PRAW", "TextBlob", "Chart.js", "Bootstrap"],
        features: &[
            "Subreddit analytics dashboard",
            "Sentiment analysis of posts and comments",
            "Thread visualizer with collapsible UI",
            "Meme fetcher with dynamic updates",
        ],
        report_url: None,
        demo_url: None,
    },
    Project {
        title: "Campus Network Analysis",
        period: "Feb 2025 - Mar 2025",
        description: "Graph-theory analysis of university student LinkedIn connections.",
        tech: &["Python", "NetworkX", "Matplotlib", "Pandas"],
        features: &[
            "Graph visualization of the student network",
            "Random walks, clustering stats, degree distributions",
            "Cleaned and parsed exported LinkedIn JSON data",
        ],
        report_url: Some("https://www.arjunmehta.dev/reports/campus-network.pdf"),
        demo_url: None,
    },
    Project {
        title: "Tag Trends API",
        period: "Jan 2025",
        description: "A Flask REST API that serves the top 10 Stack Overflow tags by year.",
        tech: &["Flask", "Pandas", "BeautifulSoup", "Stack Overflow API"],
        features: &[
            "Tag trend analysis from 2023-2025",
            "JSON REST endpoint",
            "CSV + API scraping and enrichment",
        ],
        report_url: None,
        demo_url: Some("https://tag-trends.netlify.app"),
    },
    Project {
        title: "Folio",
        period: "Current",
        description: "This portfolio: a native desktop app with a contact form wired to EmailJS.",
        tech: &["Rust", "FLTK", "serde", "minreq"],
        features: &[
            "Dark/light mode persisted across visits",
            "Smooth scrolling navigation with section highlighting",
            "Contact form with email relay integration",
        ],
        report_url: None,
        demo_url: None,
    },
];

pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub description: Option<&'static str>,
    pub verified: bool,
}

pub const CERTIFICATIONS: [Certification; 4] = [
    Certification {
        title: "100 Days of Code: Python Pro Bootcamp",
        issuer: "Udemy",
        description: Some("Web scraping, APIs, Flask apps, GUI, OOP, automation"),
        verified: true,
    },
    Certification {
        title: "Data Analytics Virtual Internship",
        issuer: "Deloitte Australia",
        description: None,
        verified: true,
    },
    Certification {
        title: "Data Analytics Certification",
        issuer: "TATA",
        description: None,
        verified: true,
    },
    Certification {
        title: "Introduction to Generative AI",
        issuer: "Google Cloud",
        description: None,
        verified: true,
    },
];

pub const ACHIEVEMENT: &str =
    "Received a 100% scholarship for B.Tech in Computer Science at Meridian Institute of Technology";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order_matches_index() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }

    #[test]
    fn test_section_labels_unique() {
        for a in Section::ALL {
            for b in Section::ALL {
                if a != b {
                    assert_ne!(a.label(), b.label());
                }
            }
        }
    }

    #[test]
    fn test_contact_is_last_section() {
        assert_eq!(Section::ALL.last(), Some(&Section::Contact));
    }
}
