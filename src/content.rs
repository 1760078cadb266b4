//! Copy and link tables rendered by the page.

pub const OWNER: &str = "Ashritha PL";
pub const LOGO_TEXT: &str = "Ashritha";
pub const RESUME_PATH: &str = "resume.pdf";
pub const COPYRIGHT_YEAR: u16 = 2025;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[PageLink] = &[
    PageLink { label: "Home", href: "#home" },
    PageLink { label: "About", href: "#about" },
    PageLink { label: "Skills", href: "#skills" },
    PageLink { label: "Projects", href: "#projects" },
];

pub struct Hero {
    pub greeting: &'static str,
    pub role_lead: &'static str,
    pub role_highlight: &'static str,
    pub bio: &'static str,
    pub primary_cta: PageLink,
    pub secondary_cta: PageLink,
}

pub const HERO: Hero = Hero {
    greeting: "Hello, I'm",
    role_lead: "Full Stack ",
    role_highlight: "Developer",
    bio: "Building seamless digital experiences from the database to the pixel.",
    primary_cta: PageLink { label: "View Work", href: "#projects" },
    secondary_cta: PageLink { label: "Let's Talk", href: "#contact" },
};

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I am a passionate Full Stack Developer with a knack for building robust, scalable applications. My approach combines clean code architecture with modern design principles.",
    "Whether it's designing a complex backend API or crafting a fluid frontend interface, I love solving problems with technology.",
];

pub struct AboutCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

pub const ABOUT_CARDS: &[AboutCard] = &[
    AboutCard {
        icon: "fas fa-code",
        title: "Frontend",
        summary: "React, Next.js, Tailwind",
    },
    AboutCard {
        icon: "fas fa-server",
        title: "Backend",
        summary: "Node.js, Express, SQL",
    },
];

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend",
        skills: &["HTML5", "CSS3", "JavaScript", "React.js", "Tailwind CSS", "Redux"],
    },
    SkillCategory {
        title: "Backend",
        skills: &["Node.js", "Express", "Python", "MongoDB", "PostgreSQL", "REST APIs"],
    },
    SkillCategory {
        title: "Tools",
        skills: &["Git", "Docker", "AWS", "Figma", "Postman"],
    },
];

pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    /// CSS background for the image placeholder.
    pub backdrop: &'static str,
    pub source_href: &'static str,
    pub live_href: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        summary: "A full-stack shopping application with payment integration and user dashboard.",
        tags: &["React", "Node", "MongoDB", "Python"],
        backdrop: "linear-gradient(45deg, #2a2a72, #009ffd)",
        source_href: "#",
        live_href: "#",
    },
    Project {
        title: "Task Manager AI",
        summary: "Productivity tool utilizing AI to prioritize daily tasks automatically.",
        tags: &["Python", "Django", "OpenAI API"],
        backdrop: "linear-gradient(45deg, #43cea2, #185a9d)",
        source_href: "#",
        live_href: "#",
    },
];

pub const CONTACT_HEADLINE: &str = "Let's build something amazing together.";
pub const CONTACT_BLURB: &str = "I'm currently looking for new opportunities. Whether you have a question or just want to say hi, my inbox is always open.";

pub struct SocialLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
    pub new_tab: bool,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: "fab fa-github",
        label: "GitHub",
        href: "https://github.com/ashrithahub",
        new_tab: true,
    },
    SocialLink {
        icon: "fab fa-linkedin",
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/ashritha-pl-798aaa2b4",
        new_tab: true,
    },
    SocialLink {
        icon: "fab fa-twitter",
        label: "Twitter",
        href: "#",
        new_tab: false,
    },
    SocialLink {
        icon: "fas fa-envelope",
        label: "Email",
        href: "mailto:plashritha5@gmail.com",
        new_tab: false,
    },
];
