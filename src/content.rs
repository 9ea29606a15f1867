//! Static page copy: services, portfolio pieces, the design process and the
//! contact block.

use serde::Serialize;

pub const BRAND: &str = "Designer";
pub const HEADLINE: &str = "Creative Designer";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Figma,
    Users,
    Palette,
    Eye,
    Mail,
    Phone,
    MapPin,
    Github,
    Linkedin,
    ExternalLink,
    ChevronDown,
    Camera,
    Menu,
    Close,
    Sun,
    Moon,
}

impl Icon {
    pub const ALL: [Icon; 16] = [
        Icon::Figma,
        Icon::Users,
        Icon::Palette,
        Icon::Eye,
        Icon::Mail,
        Icon::Phone,
        Icon::MapPin,
        Icon::Github,
        Icon::Linkedin,
        Icon::ExternalLink,
        Icon::ChevronDown,
        Icon::Camera,
        Icon::Menu,
        Icon::Close,
        Icon::Sun,
        Icon::Moon,
    ];

    /// Stroke paths of the glyph on a 24x24 viewbox, drawn with
    /// `stroke="currentColor"` and round caps so `h.01` segments show as dots.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Figma => &[
                "M5 5.5A3.5 3.5 0 0 1 8.5 2H12v7H8.5A3.5 3.5 0 0 1 5 5.5z",
                "M12 2h3.5a3.5 3.5 0 1 1 0 7H12V2z",
                "M12 12.5a3.5 3.5 0 1 1 7 0 3.5 3.5 0 1 1-7 0z",
                "M5 19.5A3.5 3.5 0 0 1 8.5 16H12v3.5a3.5 3.5 0 1 1-7 0z",
                "M5 12.5A3.5 3.5 0 0 1 8.5 9H12v7H8.5A3.5 3.5 0 0 1 5 12.5z",
            ],
            Icon::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Icon::Palette => &[
                "M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.93 0 1.65-.75 1.65-1.69 0-.44-.18-.84-.44-1.13-.29-.29-.44-.65-.44-1.13a1.64 1.64 0 0 1 1.67-1.67h2c3.05 0 5.55-2.5 5.55-5.55C21.97 6.01 17.46 2 12 2z",
                "M13.5 6.5h.01",
                "M17.5 10.5h.01",
                "M8.5 7.5h.01",
                "M6.5 12.5h.01",
            ],
            Icon::Eye => &[
                "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7z",
                "M9 12a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
            ],
            Icon::Mail => &[
                "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z",
                "m22 6-10 7L2 6",
            ],
            Icon::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            Icon::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z",
                "M9 10a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
            ],
            Icon::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Icon::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M2 4a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            Icon::ExternalLink => &[
                "M15 3h6v6",
                "M10 14 21 3",
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            ],
            Icon::ChevronDown => &["m6 9 6 6 6-6"],
            Icon::Camera => &[
                "M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z",
                "M9 13a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
            ],
            Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Icon::Close => &["M18 6 6 18", "m6 6 12 12"],
            Icon::Sun => &[
                "M8 12a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            Icon::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9z"],
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    /// Tailwind gradient stops, e.g. `from-purple-500 to-pink-500`.
    pub gradient: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PortfolioItem {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub category: &'static str,
    pub tools: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub gradient: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: Icon,
    pub gradient: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
    pub hover_gradient: &'static str,
}

impl SocialLink {
    /// Placeholder links (`#`) stay on the page; real profiles open a new tab.
    pub fn opens_new_tab(&self) -> bool {
        self.href.starts_with("https://")
    }
}

pub const SERVICES: [Service; 4] = [
    Service {
        title: "UI Design",
        description: "Creating beautiful and intuitive user interfaces using Figma with attention to detail and modern design principles.",
        icon: Icon::Figma,
        gradient: "from-purple-500 to-pink-500",
    },
    Service {
        title: "UX Research",
        description: "Understanding user needs through research, personas, and user journey mapping to create meaningful experiences.",
        icon: Icon::Users,
        gradient: "from-blue-500 to-cyan-500",
    },
    Service {
        title: "Design Systems",
        description: "Building scalable design systems and component libraries that ensure consistency across products.",
        icon: Icon::Palette,
        gradient: "from-green-500 to-emerald-500",
    },
    Service {
        title: "Prototyping",
        description: "Creating interactive prototypes in Figma to validate ideas and communicate design concepts effectively.",
        icon: Icon::Eye,
        gradient: "from-orange-500 to-red-500",
    },
];

pub const PORTFOLIO_ITEMS: [PortfolioItem; 4] = [
    PortfolioItem {
        title: "E-Commerce Mobile App",
        description: "Complete mobile shopping experience with intuitive navigation and seamless checkout flow",
        image_url: "https://images.pexels.com/photos/607812/pexels-photo-607812.jpeg?auto=compress&cs=tinysrgb&w=800",
        category: "Mobile Design",
        tools: &["Figma", "Prototyping", "User Research"],
    },
    PortfolioItem {
        title: "SaaS Dashboard Redesign",
        description: "Modern dashboard interface focusing on data visualization and user workflow optimization",
        image_url: "https://images.pexels.com/photos/590022/pexels-photo-590022.jpeg?auto=compress&cs=tinysrgb&w=800",
        category: "Web Design",
        tools: &["Figma", "Design System", "UX Research"],
    },
    PortfolioItem {
        title: "Banking App Interface",
        description: "Secure and user-friendly banking application with focus on accessibility and trust",
        image_url: "https://images.pexels.com/photos/4386321/pexels-photo-4386321.jpeg?auto=compress&cs=tinysrgb&w=800",
        category: "Mobile Design",
        tools: &["Figma", "Accessibility", "Security UX"],
    },
    PortfolioItem {
        title: "Design System Library",
        description: "Comprehensive design system with components, tokens, and documentation for enterprise use",
        image_url: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=800",
        category: "Design System",
        tools: &["Figma", "Component Library", "Documentation"],
    },
];

pub const DESIGN_PROCESS: [ProcessStep; 5] = [
    ProcessStep {
        step: "01",
        title: "Research",
        description: "Understanding users and business goals",
    },
    ProcessStep {
        step: "02",
        title: "Ideate",
        description: "Brainstorming and concept development",
    },
    ProcessStep {
        step: "03",
        title: "Design",
        description: "Creating wireframes and visual designs",
    },
    ProcessStep {
        step: "04",
        title: "Prototype",
        description: "Building interactive prototypes",
    },
    ProcessStep {
        step: "05",
        title: "Test",
        description: "User testing and iteration",
    },
];

pub const STATS: [Stat; 2] = [
    Stat {
        value: "50+",
        label: "Projects Completed",
        gradient: "from-purple-600 to-pink-600",
    },
    Stat {
        value: "4+",
        label: "Years Experience",
        gradient: "from-blue-600 to-cyan-600",
    },
];

pub const CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail {
        label: "Email",
        value: "dzakiyushibanaa@gmail.com",
        icon: Icon::Mail,
        gradient: "from-purple-500 to-pink-500",
    },
    ContactDetail {
        label: "Phone",
        value: "+62 8128-4444-196",
        icon: Icon::Phone,
        gradient: "from-blue-500 to-cyan-500",
    },
    ContactDetail {
        label: "Location",
        value: "Depok, Indonesia",
        icon: Icon::MapPin,
        gradient: "from-green-500 to-emerald-500",
    },
];

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub Profile",
        href: "https://github.com/DzakiYushiibanaa",
        icon: Icon::Github,
        hover_gradient: "hover:from-purple-500 hover:to-pink-500",
    },
    SocialLink {
        label: "LinkedIn Profile",
        href: "https://www.linkedin.com/in/dzaki-yushiibanaa/",
        icon: Icon::Linkedin,
        hover_gradient: "hover:from-blue-500 hover:to-cyan-500",
    },
    SocialLink {
        label: "Figma Profile",
        href: "#",
        icon: Icon::Figma,
        hover_gradient: "hover:from-purple-500 hover:to-pink-500",
    },
];

/// Options of the contact form's project type select, first is preselected.
pub const PROJECT_TYPES: [&str; 5] = [
    "UI/UX Design",
    "Mobile App Design",
    "Web Design",
    "Design System",
    "Other",
];

/// Year for the footer copyright line, taken from the build timestamp.
pub fn copyright_year() -> i32 {
    use chrono::{Datelike, Utc};

    chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_steps_are_numbered_in_order() {
        for (i, step) in DESIGN_PROCESS.iter().enumerate() {
            assert_eq!(step.step, format!("{:02}", i + 1));
        }
    }

    #[test]
    fn portfolio_items_list_tools() {
        assert!(PORTFOLIO_ITEMS.iter().all(|p| !p.tools.is_empty()));
        assert!(PORTFOLIO_ITEMS.iter().all(|p| p.image_url.starts_with("https://")));
    }

    #[test]
    fn records_serialize_with_icon_names() {
        let json = serde_json::to_value(SERVICES[0]).unwrap();
        assert_eq!(json["title"], "UI Design");
        assert_eq!(json["icon"], "figma");
        let json = serde_json::to_value(CONTACT_DETAILS[2]).unwrap();
        assert_eq!(json["icon"], "map-pin");
    }

    #[test]
    fn every_icon_has_drawable_paths() {
        for icon in Icon::ALL {
            let paths = icon.paths();
            assert!(!paths.is_empty(), "{icon:?} has no paths");
            for d in paths {
                assert!(d.starts_with(['M', 'm']), "{icon:?} path must start with a move: {d}");
                assert!(
                    d.chars().all(|c| c.is_ascii_digit() || " .,-MmLlHhVvCcSsAaZz".contains(c)),
                    "{icon:?} path has unexpected characters: {d}"
                );
            }
        }
    }

    #[test]
    fn placeholder_social_link_stays_in_tab() {
        let figma = SOCIAL_LINKS.iter().find(|l| l.icon == Icon::Figma).unwrap();
        assert_eq!(figma.href, "#");
        assert!(!figma.opens_new_tab());
        assert!(SOCIAL_LINKS
            .iter()
            .filter(|l| l.icon != Icon::Figma)
            .all(SocialLink::opens_new_tab));
    }

    #[test]
    fn build_year_is_plausible() {
        assert!(copyright_year() >= 2024);
    }
}
