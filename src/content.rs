//! Hardcoded display data for the portfolio page.
//!
//! Everything here is `'static` and immutable. Renderers borrow slices of it;
//! nothing writes back.

pub const OWNER_NAME: &str = "Harsh Desai";
pub const OWNER_TITLE: &str = "MERN Stack Developer";
pub const CONTACT_EMAIL: &str = "harsh@mernportfolio.com";
pub const MAILTO_LINK: &str = "mailto:harsh@example.com";
pub const GITHUB_URL: &str = "https://github.com";
pub const LINKEDIN_URL: &str = "https://linkedin.com";
pub const RESUME_PATH: &str = "/resume.pdf";

/// Featured cards show this many technologies before the "+N" badge.
pub const FEATURED_TECH_LIMIT: usize = 3;
/// The all-projects grid shows this many technologies and no overflow badge.
pub const ALL_PROJECTS_TECH_LIMIT: usize = 4;
/// Number of skills rendered as level bars.
pub const SKILL_BARS_SHOWN: usize = 6;

pub const ROLES: [&str; 5] = [
    "MERN Stack Developer",
    "Frontend Specialist",
    "Backend Architect",
    "Full Stack Developer",
    "Web 3.0 Enthusiast",
];

pub const MERN_BADGES: [&str; 4] = ["MongoDB", "Express", "React", "Node.js"];

/// Closed set of every icon the page draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Code,
    Server,
    Database,
    Terminal,
    Layers,
    Palette,
    Rocket,
    Cloud,
    Cpu,
    GitBranch,
    Smartphone,
    Brain,
    Globe,
    Award,
    Shield,
    Github,
    Linkedin,
    Mail,
    ExternalLink,
    ChevronRight,
    Menu,
    Close,
    Download,
    Heart,
    Briefcase,
    MapPin,
}

impl Icon {
    pub const ALL: [Icon; 26] = [
        Icon::Code,
        Icon::Server,
        Icon::Database,
        Icon::Terminal,
        Icon::Layers,
        Icon::Palette,
        Icon::Rocket,
        Icon::Cloud,
        Icon::Cpu,
        Icon::GitBranch,
        Icon::Smartphone,
        Icon::Brain,
        Icon::Globe,
        Icon::Award,
        Icon::Shield,
        Icon::Github,
        Icon::Linkedin,
        Icon::Mail,
        Icon::ExternalLink,
        Icon::ChevronRight,
        Icon::Menu,
        Icon::Close,
        Icon::Download,
        Icon::Heart,
        Icon::Briefcase,
        Icon::MapPin,
    ];

    /// Devicon class for the brand marks; the shell links that stylesheet.
    pub fn devicon_class(self) -> Option<&'static str> {
        match self {
            Self::Github => Some("devicon-github-plain"),
            Self::Linkedin => Some("devicon-linkedin-plain"),
            _ => None,
        }
    }

    /// Text glyph drawn in place of an icon font. Empty for devicon marks.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Code => "</>",
            Self::Server => "🖥",
            Self::Database => "🗄",
            Self::Terminal => ">_",
            Self::Layers => "≣",
            Self::Palette => "🎨",
            Self::Rocket => "🚀",
            Self::Cloud => "☁",
            Self::Cpu => "⚙",
            Self::GitBranch => "⑂",
            Self::Smartphone => "📱",
            Self::Brain => "🧠",
            Self::Globe => "🌐",
            Self::Award => "🏆",
            Self::Shield => "🛡",
            Self::Github | Self::Linkedin => "",
            Self::Mail => "✉",
            Self::ExternalLink => "↗",
            Self::ChevronRight => "›",
            Self::Menu => "☰",
            Self::Close => "✕",
            Self::Download => "⤓",
            Self::Heart => "♥",
            Self::Briefcase => "💼",
            Self::MapPin => "📍",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Github => "GitHub Profile",
            Self::Linkedin => "LinkedIn Profile",
            Self::Mail => "Email",
            Self::ExternalLink => "Live Demo",
            Self::Download => "Download",
            Self::Menu => "Open menu",
            Self::Close => "Close menu",
            _ => "",
        }
    }
}

/// Anything that is drawn with an [`Icon`].
pub trait IconSource {
    fn icon(&self) -> Icon;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub github_url: &'static str,
    pub live_url: &'static str,
    pub image_color: &'static str,
    pub featured: bool,
}

impl Project {
    /// Leading technologies to show, plus how many were cut off.
    pub fn tech_preview(&self, limit: usize) -> (&'static [&'static str], usize) {
        let shown = self.technologies.len().min(limit);
        (
            &self.technologies[..shown],
            self.technologies.len() - shown,
        )
    }

    /// First word of the title, used as the banner caption.
    pub fn banner_word(&self) -> &'static str {
        self.title.split(' ').next().unwrap_or(self.title)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Tools,
    Ai,
}

impl SkillCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Database => "database",
            Self::Tools => "tools",
            Self::Ai => "ai",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// 0..=100
    pub level: u8,
    pub category: SkillCategory,
    pub color: &'static str,
    pub icon: Icon,
}

impl IconSource for Skill {
    fn icon(&self) -> Icon {
        self.icon
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmploymentType {
    FullTime,
    Contract,
    Freelance,
}

impl EmploymentType {
    pub fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::Contract => "Contract",
            Self::Freelance => "Freelance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experience {
    pub id: u32,
    pub title: &'static str,
    pub organization: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub responsibilities: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub employment: EmploymentType,
    pub achievements: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechStackItem {
    pub name: &'static str,
    pub glyph: &'static str,
    pub level: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackCard {
    pub name: &'static str,
    pub glyph: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    pub level: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: Icon,
    pub color: &'static str,
    pub trend: &'static str,
}

impl IconSource for Stat {
    fn icon(&self) -> Icon {
        self.icon
    }
}

pub static PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "MERN E-Commerce Platform",
        description: "Full-featured e-commerce with real-time inventory, payment integration, and admin dashboard",
        technologies: &["React", "Node.js", "MongoDB", "Express", "Stripe"],
        github_url: GITHUB_URL,
        live_url: "https://example.com",
        image_color: "from-blue-600 via-cyan-600 to-teal-600",
        featured: true,
    },
    Project {
        id: 2,
        title: "Real-time Collaboration Tool",
        description: "MERN stack collaboration platform with WebSocket real-time updates and document sharing",
        technologies: &["Socket.io", "React", "MongoDB", "Express", "JWT"],
        github_url: GITHUB_URL,
        live_url: "https://example.com",
        image_color: "from-purple-600 via-pink-600 to-rose-600",
        featured: true,
    },
    Project {
        id: 3,
        title: "MERN Dashboard Analytics",
        description: "Comprehensive analytics dashboard with real-time data visualization and reporting",
        technologies: &["Chart.js", "React", "Node.js", "MongoDB", "Express"],
        github_url: GITHUB_URL,
        live_url: "https://example.com",
        image_color: "from-emerald-600 via-green-600 to-lime-600",
        featured: false,
    },
    Project {
        id: 4,
        title: "Social Media Platform",
        description: "Full-stack social media app with posts, comments, likes, and user authentication",
        technologies: &["MERN Stack", "Cloudinary", "JWT", "Redis", "Socket.io"],
        github_url: GITHUB_URL,
        live_url: "https://example.com",
        image_color: "from-orange-600 via-red-600 to-pink-600",
        featured: true,
    },
    Project {
        id: 5,
        title: "AI-Powered Content Platform",
        description: "Content management system with AI writing assistance and analytics",
        technologies: &["Next.js", "OpenAI", "MongoDB", "Express", "Prisma"],
        github_url: GITHUB_URL,
        live_url: "https://example.com",
        image_color: "from-violet-600 via-purple-600 to-fuchsia-600",
        featured: false,
    },
    Project {
        id: 6,
        title: "IoT Monitoring Dashboard",
        description: "Real-time IoT device monitoring with MERN stack and WebSocket connections",
        technologies: &["React", "Node.js", "MongoDB", "MQTT", "Express"],
        github_url: GITHUB_URL,
        live_url: "https://example.com",
        image_color: "from-amber-600 via-yellow-600 to-lime-600",
        featured: false,
    },
];

pub static SKILLS: [Skill; 16] = [
    Skill {
        name: "React",
        level: 95,
        category: SkillCategory::Frontend,
        color: "#61DAFB",
        icon: Icon::Code,
    },
    Skill {
        name: "Node.js",
        level: 90,
        category: SkillCategory::Backend,
        color: "#339933",
        icon: Icon::Server,
    },
    Skill {
        name: "MongoDB",
        level: 85,
        category: SkillCategory::Database,
        color: "#47A248",
        icon: Icon::Database,
    },
    Skill {
        name: "TypeScript",
        level: 88,
        category: SkillCategory::Frontend,
        color: "#3178C6",
        icon: Icon::Terminal,
    },
    Skill {
        name: "Express.js",
        level: 87,
        category: SkillCategory::Backend,
        color: "#000000",
        icon: Icon::Layers,
    },
    Skill {
        name: "Tailwind CSS",
        level: 92,
        category: SkillCategory::Frontend,
        color: "#06B6D4",
        icon: Icon::Palette,
    },
    Skill {
        name: "Three.js",
        level: 75,
        category: SkillCategory::Frontend,
        color: "#000000",
        icon: Icon::Rocket,
    },
    Skill {
        name: "AWS",
        level: 80,
        category: SkillCategory::Tools,
        color: "#FF9900",
        icon: Icon::Cloud,
    },
    Skill {
        name: "Docker",
        level: 78,
        category: SkillCategory::Tools,
        color: "#2496ED",
        icon: Icon::Cpu,
    },
    Skill {
        name: "GraphQL",
        level: 82,
        category: SkillCategory::Backend,
        color: "#E10098",
        icon: Icon::GitBranch,
    },
    Skill {
        name: "Redux",
        level: 90,
        category: SkillCategory::Frontend,
        color: "#764ABC",
        icon: Icon::Code,
    },
    Skill {
        name: "React Native",
        level: 85,
        category: SkillCategory::Frontend,
        color: "#61DAFB",
        icon: Icon::Smartphone,
    },
    Skill {
        name: "TensorFlow.js",
        level: 70,
        category: SkillCategory::Ai,
        color: "#FF6F00",
        icon: Icon::Brain,
    },
    Skill {
        name: "Next.js",
        level: 88,
        category: SkillCategory::Frontend,
        color: "#000000",
        icon: Icon::Globe,
    },
    Skill {
        name: "PostgreSQL",
        level: 83,
        category: SkillCategory::Database,
        color: "#336791",
        icon: Icon::Database,
    },
    Skill {
        name: "Redis",
        level: 79,
        category: SkillCategory::Database,
        color: "#DC382D",
        icon: Icon::Database,
    },
];

pub static TECH_STACK: [TechStackItem; 8] = [
    TechStackItem {
        name: "React",
        glyph: "⚛️",
        level: "Expert",
    },
    TechStackItem {
        name: "Node.js",
        glyph: "🚀",
        level: "Expert",
    },
    TechStackItem {
        name: "MongoDB",
        glyph: "🍃",
        level: "Advanced",
    },
    TechStackItem {
        name: "Express.js",
        glyph: "⚡",
        level: "Advanced",
    },
    TechStackItem {
        name: "TypeScript",
        glyph: "📘",
        level: "Advanced",
    },
    TechStackItem {
        name: "Three.js",
        glyph: "🎨",
        level: "Intermediate",
    },
    TechStackItem {
        name: "Docker",
        glyph: "🐳",
        level: "Intermediate",
    },
    TechStackItem {
        name: "GraphQL",
        glyph: "🔗",
        level: "Advanced",
    },
];

pub static STACK_CARDS: [StackCard; 4] = [
    StackCard {
        name: "MongoDB",
        glyph: "🍃",
        color: "from-green-500 to-emerald-500",
        description: "NoSQL Database",
        level: "Advanced",
    },
    StackCard {
        name: "Express.js",
        glyph: "⚡",
        color: "from-gray-500 to-gray-700",
        description: "Backend Framework",
        level: "Expert",
    },
    StackCard {
        name: "React",
        glyph: "⚛️",
        color: "from-cyan-500 to-blue-500",
        description: "Frontend Library",
        level: "Expert",
    },
    StackCard {
        name: "Node.js",
        glyph: "🚀",
        color: "from-green-600 to-green-400",
        description: "Runtime Environment",
        level: "Expert",
    },
];

pub static STATS: [Stat; 4] = [
    Stat {
        value: "50+",
        label: "Projects Built",
        icon: Icon::Code,
        color: "from-blue-500 to-cyan-500",
        trend: "+5",
    },
    Stat {
        value: "99%",
        label: "Client Satisfaction",
        icon: Icon::Award,
        color: "from-green-500 to-emerald-500",
        trend: "+2.5%",
    },
    Stat {
        value: "2K+",
        label: "Code Commits",
        icon: Icon::GitBranch,
        color: "from-purple-500 to-pink-500",
        trend: "+200",
    },
    Stat {
        value: "24/7",
        label: "Support Ready",
        icon: Icon::Shield,
        color: "from-orange-500 to-red-500",
        trend: "Always",
    },
];

/// Career history, most recent first. A lower id is more recent.
pub static EXPERIENCES: [Experience; 3] = [
    Experience {
        id: 1,
        title: "Senior MERN Stack Developer",
        organization: "TechNova Solutions",
        location: "Remote",
        period: "2023 - Present",
        responsibilities: &[
            "Lead development of customer-facing React applications",
            "Design REST and GraphQL APIs on Node.js and Express",
            "Own MongoDB schema design and query performance",
            "Mentor junior developers through code review",
        ],
        technologies: &["React", "Node.js", "MongoDB", "Express", "GraphQL", "AWS"],
        employment: EmploymentType::FullTime,
        achievements: &[
            "Cut average API latency by 40% with query indexing and caching",
            "Shipped a real-time collaboration feature used by 10k+ users",
            "Introduced CI pipelines that halved release time",
        ],
    },
    Experience {
        id: 2,
        title: "Full Stack Developer",
        organization: "Digital Craft Studio",
        location: "Ahmedabad, India",
        period: "2021 - 2023",
        responsibilities: &[
            "Built e-commerce storefronts and admin dashboards",
            "Integrated payment gateways and third-party APIs",
            "Maintained Docker-based deployment workflows",
        ],
        technologies: &["React", "Redux", "Node.js", "Express", "MongoDB", "Docker"],
        employment: EmploymentType::Contract,
        achievements: &[
            "Delivered 12 client projects on schedule",
            "Built a reusable component library adopted across teams",
            "Raised Lighthouse performance scores above 90",
        ],
    },
    Experience {
        id: 3,
        title: "Frontend Developer",
        organization: "Freelance",
        location: "Remote",
        period: "2019 - 2021",
        responsibilities: &[
            "Built responsive websites for small businesses",
            "Converted designs into accessible React components",
        ],
        technologies: &["JavaScript", "React", "Tailwind CSS", "Firebase"],
        employment: EmploymentType::Freelance,
        achievements: &[
            "Completed 25+ freelance projects with 5-star ratings",
            "Grew repeat-client share to 60%",
        ],
    },
];

pub fn projects() -> &'static [Project] {
    &PROJECTS
}

pub fn featured_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| p.featured)
}

pub fn skills() -> &'static [Skill] {
    &SKILLS
}

/// Skills rendered as level bars.
pub fn highlighted_skills() -> &'static [Skill] {
    &SKILLS[..SKILL_BARS_SHOWN.min(SKILLS.len())]
}

pub fn experiences() -> &'static [Experience] {
    &EXPERIENCES
}

pub fn experience_by_id(id: u32) -> Option<&'static Experience> {
    EXPERIENCES.iter().find(|e| e.id == id)
}

pub fn most_recent_experience() -> &'static Experience {
    EXPERIENCES
        .iter()
        .min_by_key(|e| e.id)
        .unwrap_or(&EXPERIENCES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_featured_is_filtered_subset() {
        let featured = featured_projects().collect::<Vec<_>>();
        assert!(featured.len() <= projects().len());
        assert!(featured.iter().all(|p| p.featured));
        let expected = projects().iter().filter(|p| p.featured).count();
        assert_eq!(featured.len(), expected);
    }

    #[test]
    fn test_featured_fixture_ids() {
        let ids = featured_projects().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn test_tech_preview_truncation() {
        let project = &projects()[0];
        let (shown, rest) = project.tech_preview(FEATURED_TECH_LIMIT);
        assert_eq!(shown, &["React", "Node.js", "MongoDB"]);
        assert_eq!(rest, 2);

        let (shown, rest) = project.tech_preview(ALL_PROJECTS_TECH_LIMIT);
        assert_eq!(shown.len(), 4);
        assert_eq!(rest, 1);

        let (shown, rest) = project.tech_preview(10);
        assert_eq!(shown.len(), 5);
        assert_eq!(rest, 0);
    }

    #[test]
    fn test_banner_word() {
        assert_eq!(projects()[1].banner_word(), "Real-time");
        assert_eq!(projects()[3].banner_word(), "Social");
    }

    #[test]
    fn test_skill_levels_in_range() {
        assert!(skills().iter().all(|s| s.level <= 100));
        assert_eq!(highlighted_skills().len(), SKILL_BARS_SHOWN);
        assert_eq!(highlighted_skills()[0].name, "React");
    }

    #[test]
    fn test_ids_unique() {
        let project_ids = projects().iter().map(|p| p.id).collect::<HashSet<_>>();
        assert_eq!(project_ids.len(), projects().len());
        let exp_ids = experiences().iter().map(|e| e.id).collect::<HashSet<_>>();
        assert_eq!(exp_ids.len(), experiences().len());
    }

    #[test]
    fn test_experience_lookup() {
        assert_eq!(most_recent_experience().id, 1);
        let second = experience_by_id(2).expect("entry 2 exists");
        assert_eq!(second.organization, "Digital Craft Studio");
        assert!(experience_by_id(42).is_none());
    }

    #[test]
    fn test_icon_source() {
        assert_eq!(SKILLS[2].icon(), Icon::Database);
        assert_eq!(STATS[1].icon(), Icon::Award);
        assert_eq!(Icon::Github.devicon_class(), Some("devicon-github-plain"));
    }

    #[test]
    fn test_every_icon_draws_something() {
        let distinct = Icon::ALL.iter().collect::<HashSet<_>>();
        assert_eq!(distinct.len(), Icon::ALL.len());
        for icon in Icon::ALL {
            match icon.devicon_class() {
                Some(class) => {
                    assert!(class.starts_with("devicon-"), "{icon:?}");
                    assert!(icon.glyph().is_empty(), "{icon:?}");
                }
                None => assert!(!icon.glyph().trim().is_empty(), "{icon:?} has no glyph"),
            }
        }
        assert_ne!(Icon::Menu.glyph(), Icon::Close.glyph());
    }
}
