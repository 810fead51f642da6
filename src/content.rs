// Static portfolio content.
// Everything the sections render that is not fetched at runtime.

pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub github_url: &'static str,
    pub location: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Arjun Sharma",
    initials: "AS",
    github_url: "https://github.com/Arjunuk1",
    location: "India",
};

/// Phrases the hero subtitle rotates through.
pub static TYPED_PHRASES: [&str; 4] = [
    "BTech CSE Student",
    "Backend Developer",
    "IoT Enthusiast",
    "Problem Solver",
];

pub static ABOUT_TEXT: &str = "A BE student passionate about backend development, IoT projects, \
and building real-world tech solutions. I love exploring new technologies and turning ideas \
into functional applications that solve real problems.";

pub struct Highlight {
    pub title: &'static str,
    pub detail: &'static str,
}

pub static ABOUT_HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        title: "Algorithm Engineer",
        detail: "Crafting efficient logic with DSA",
    },
    Highlight {
        title: "AI Solution Architect",
        detail: "Controlling and customizing AI-driven systems",
    },
    Highlight {
        title: "Tech Innovator",
        detail: "Building practical tech solutions from scratch",
    },
];

pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0-100.
    pub level: u8,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub static SKILL_CATEGORIES: [SkillCategory; 5] = [
    SkillCategory {
        title: "Frontend",
        skills: &[
            Skill { name: "HTML/CSS", level: 90 },
            Skill { name: "JavaScript", level: 85 },
            Skill { name: "React", level: 80 },
            Skill { name: "Tailwind CSS", level: 85 },
        ],
    },
    SkillCategory {
        title: "Backend",
        skills: &[
            Skill { name: "Node.js", level: 88 },
            Skill { name: "Python", level: 75 },
            Skill { name: "REST APIs", level: 90 },
        ],
    },
    SkillCategory {
        title: "IoT & Hardware",
        skills: &[
            Skill { name: "Arduino", level: 85 },
            Skill { name: "ESP32", level: 82 },
            Skill { name: "Sensors", level: 85 },
        ],
    },
    SkillCategory {
        title: "DevOps & Tools",
        skills: &[
            Skill { name: "Git/GitHub", level: 88 },
            Skill { name: "Linux", level: 80 },
            Skill { name: "VS Code", level: 90 },
            Skill { name: "WSL", level: 85 },
        ],
    },
    SkillCategory {
        title: "Languages",
        skills: &[
            Skill { name: "JavaScript", level: 88 },
            Skill { name: "Java", level: 78 },
            Skill { name: "Python", level: 75 },
            Skill { name: "C/C++", level: 72 },
        ],
    },
];

pub struct TimelineEntry {
    pub years: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

pub static TIMELINE: [TimelineEntry; 4] = [
    TimelineEntry {
        years: "2026 - Present",
        title: "Data Structures & Algorithms",
        description: "Currently mastering DSA concepts using Java, solving complex problems \
and improving algorithmic thinking.",
        achievements: &[
            "Learning DSA in Java",
            "Solving algorithmic problems",
            "Building strong problem-solving skills",
        ],
    },
    TimelineEntry {
        years: "2025",
        title: "IoT Projects & System Programming",
        description: "Learned C and C++ programming languages, built IoT projects with Arduino \
and ESP32, and mastered Linux in late 2025.",
        achievements: &[
            "Learned C and C++ languages",
            "Built multiple IoT projects",
            "Mastered Linux operating system",
        ],
    },
    TimelineEntry {
        years: "2024 - Present",
        title: "BE in Computer Science",
        description: "Pursuing Bachelor of Engineering in Computer Science and Engineering, \
building strong fundamentals.",
        achievements: &[
            "Core CS fundamentals",
            "Software Engineering principles",
            "Continuous learning and growth",
        ],
    },
    TimelineEntry {
        years: "2024",
        title: "Programming Foundation",
        description: "Started the programming journey by learning Python as the first language, \
building a strong foundation in coding.",
        achievements: &[
            "Learned Python programming",
            "Built first programs and projects",
            "Developed coding fundamentals",
        ],
    },
];

pub struct ContactChannel {
    pub title: &'static str,
    pub value: &'static str,
    pub link: Option<&'static str>,
}

pub static CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        title: "GitHub",
        value: "@Arjunuk1",
        link: Some("https://github.com/Arjunuk1"),
    },
    ContactChannel {
        title: "Email",
        value: "Contact via GitHub",
        link: Some("https://github.com/Arjunuk1"),
    },
    ContactChannel {
        title: "Location",
        value: "India",
        link: None,
    },
];
