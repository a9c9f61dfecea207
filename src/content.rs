//! Hand-written page content.
//!
//! Every record is `'static` and rendered in slice order. Nothing here is
//! filtered, sorted or mutated at runtime.

pub const PROFILE_NAME: &str = "SOHAM JOSHI";
pub const PROFILE_TAGLINE: &str = ".engineer";
pub const PROFILE_AVATAR: &str = "/image/i.jpg";
pub const PROFILE_EMAIL: &str = "joshi.soham27@gmail.com";
pub const PROFILE_PHONE: &str = "+91 7719088844";
pub const GITHUB_URL: &str = "https://github.com/ManInTheHam";
pub const GITHUB_LABEL: &str = "github.com/ManInTheHam";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/soham-joshi-54aa171aa/";
pub const LINKEDIN_LABEL: &str = "linkedin.com/in/SohamJoshi";
pub const CV_URL: &str =
    "https://drive.google.com/file/d/1NQXPHifl0_na4IcxAS20JYunB5itMvu-/view?usp=sharing";

/// Small glyph shown next to a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Document,
    User,
    Mail,
    Github,
    Linkedin,
    Calendar,
    Download,
    Send,
    ArrowLeft,
    Sun,
    Moon,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Document => "\u{1F5CE}",
            Icon::User => "\u{1F464}",
            Icon::Mail => "\u{2709}",
            Icon::Github => "\u{2328}",
            Icon::Linkedin => "in",
            Icon::Calendar => "\u{1F4C5}",
            Icon::Download => "\u{2913}",
            Icon::Send => "\u{27A4}",
            Icon::ArrowLeft => "\u{2190}",
            Icon::Sun => "\u{2600}",
            Icon::Moon => "\u{263E}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

/// Links on the back of the business card.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "PROJECTS",
        href: "/projects",
        icon: Icon::Document,
    },
    NavLink {
        label: "BLOGS",
        href: "/blogs",
        icon: Icon::Document,
    },
    NavLink {
        label: "SKILLS / CV",
        href: "/skills",
        icon: Icon::User,
    },
    NavLink {
        label: "CONTACT",
        href: "/contact",
        icon: Icon::Mail,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "MediOcracy",
        description: "A smart web app that reads handwritten prescriptions using OCR and ML to digitize medical records.",
        tags: &["Python", "Flask", "ML", "AI", "OCR"],
    },
    Project {
        title: "Packet Sniffer",
        description: "A network packet sniffer that captures and analyzes network traffic in real-time.",
        tags: &["Wireshark", "Python", "Network"],
    },
    Project {
        title: "E-Commerce Platform",
        description: "Modern e-commerce solution with advanced features",
        tags: &["Next.js", "Stripe", "Tailwind CSS", "MongoDB"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    pub title: &'static str,
    pub date: &'static str,
    pub excerpt: &'static str,
    pub link: &'static str,
}

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "How I Started Learning Go (Golang): A Developer's Journey into Simplicity and Speed",
        date: "May 1, 2025",
        excerpt: "Exploring the Golang Programming Language.",
        link: "https://open.substack.com/pub/manintheham/p/how-i-started-learning-go-golang?r=5l6uyg&utm_campaign=post&utm_medium=web&showWelcomeOnShare=false",
    },
    BlogPost {
        title: "Solana Breakout Hackathon 2025: India's Record-Breaking Rise and the Projects You Can't Miss",
        date: "July 2, 2025",
        excerpt: "Superteamearn Bounty.",
        link: "https://manintheham.substack.com/p/solana-breakout-hackathon-2025-indias",
    },
];

/// A skill with a self-assessed level in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "Python", level: 90 },
    Skill { name: "Flask", level: 80 },
    Skill { name: "Django", level: 70 },
    Skill { name: "SQL", level: 80 },
    Skill { name: "NoSQL", level: 70 },
    Skill { name: "Shell Scripting", level: 60 },
    Skill { name: "FastAPI", level: 70 },
    Skill { name: "JavaScript", level: 40 },
    Skill { name: "Golang", level: 10 },
    Skill { name: "Node.js", level: 40 },
    Skill { name: "Next.js", level: 30 },
    Skill { name: "UI/UX Design", level: 65 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub year: &'static str,
}

pub const EDUCATION: &[Education] = &[Education {
    degree: "Bachelor of Engineering in Electronics",
    institution: "International Institute of Information Technology, Pune",
    year: "2025",
}];

/// Entrance stagger for cards and list rows, in seconds.
pub const CARD_STAGGER_S: f64 = 0.1;
pub const SKILL_STAGGER_S: f64 = 0.05;
pub const EDUCATION_BASE_DELAY_S: f64 = 0.7;

/// Entrance delay for the `index`-th record of a list.
pub fn stagger_delay(base_s: f64, step_s: f64, index: usize) -> f64 {
    base_s + step_s * index as f64
}

/// Inline style that delays an element's entrance animation.
pub fn stagger_style(base_s: f64, step_s: f64, index: usize) -> String {
    format!("animation-delay: {:.2}s", stagger_delay(base_s, step_s, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_back_has_four_routes() {
        assert_eq!(NAV_LINKS.len(), 4);
        let hrefs: Vec<_> = NAV_LINKS.iter().map(|l| l.href).collect();
        assert_eq!(hrefs, vec!["/projects", "/blogs", "/skills", "/contact"]);
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        for skill in SKILLS {
            assert!(skill.level <= 100, "{} has level {}", skill.name, skill.level);
        }
    }

    #[test]
    fn test_records_are_populated() {
        assert!(PROJECTS.iter().all(|p| !p.title.is_empty() && !p.tags.is_empty()));
        assert!(BLOG_POSTS.iter().all(|b| b.link.starts_with("https://")));
        assert!(!EDUCATION.is_empty());
    }

    #[test]
    fn test_stagger_delay_is_proportional_to_index() {
        assert_eq!(stagger_delay(0.0, CARD_STAGGER_S, 0), 0.0);
        assert!((stagger_delay(0.0, CARD_STAGGER_S, 2) - 0.2).abs() < 1e-9);
        assert!((stagger_delay(0.0, SKILL_STAGGER_S, 11) - 0.55).abs() < 1e-9);
        assert!((stagger_delay(EDUCATION_BASE_DELAY_S, CARD_STAGGER_S, 1) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_stagger_style() {
        assert_eq!(stagger_style(0.0, CARD_STAGGER_S, 3), "animation-delay: 0.30s");
    }
}
