//! Fixed text blocks shown by the portfolio commands.

use crate::app::{LineKind, TerminalLine};

pub(crate) const PROMPT: &str = "mark@portfolio:~$";
pub(crate) const OWNER: &str = "Mark Gatere";
pub(crate) const TRANSCRIPT_TITLE: &str = "mark@portfolio: ~";

pub(crate) struct StaticLine {
    kind: LineKind,
    text: &'static str,
    href: Option<&'static str>,
}

const fn out(text: &'static str) -> StaticLine {
    StaticLine {
        kind: LineKind::Output,
        text,
        href: None,
    }
}

const fn list(text: &'static str) -> StaticLine {
    StaticLine {
        kind: LineKind::List,
        text,
        href: None,
    }
}

const fn success(text: &'static str) -> StaticLine {
    StaticLine {
        kind: LineKind::Success,
        text,
        href: None,
    }
}

const fn error(text: &'static str) -> StaticLine {
    StaticLine {
        kind: LineKind::Error,
        text,
        href: None,
    }
}

const fn comment(text: &'static str) -> StaticLine {
    StaticLine {
        kind: LineKind::Comment,
        text,
        href: None,
    }
}

const fn system(text: &'static str) -> StaticLine {
    StaticLine {
        kind: LineKind::System,
        text,
        href: None,
    }
}

const fn link(text: &'static str, href: &'static str) -> StaticLine {
    StaticLine {
        kind: LineKind::Link,
        text,
        href: Some(href),
    }
}

const BLANK: StaticLine = out("");

pub(crate) fn to_lines(block: &[StaticLine]) -> Vec<TerminalLine> {
    block
        .iter()
        .map(|line| match line.href {
            Some(href) => TerminalLine::link(line.text, href),
            None => TerminalLine::new(line.kind, line.text),
        })
        .collect()
}

pub(crate) const WELCOME: &[StaticLine] = &[
    system("╔══════════════════════════════════════════════════════════╗"),
    system("║                MARK GATERE  ::  PORTFOLIO                ║"),
    system("╚══════════════════════════════════════════════════════════╝"),
    system(""),
    system("Welcome to Mark Gatere's Portfolio Terminal v1.0.0"),
    system("Type \"help\" to see available commands."),
    system(""),
];

pub(crate) const HELP: &[StaticLine] = &[
    out("Available commands:"),
    BLANK,
    list("help, ?, commands     - Show this help message"),
    list("about                 - Learn about Mark Gatere"),
    list("skills                - View technical skills"),
    list("projects              - Browse portfolio projects"),
    list("experience            - View work history"),
    list("education             - See educational background"),
    list("contact               - Get contact information"),
    list("themes                - View available color themes"),
    list("theme <name>          - Change color theme"),
    list("clear, cls            - Clear terminal screen"),
    list("home                  - Back to the welcome screen"),
    list("history               - Show command history"),
    BLANK,
    comment("Navigation:"),
    list("ls                    - List contents"),
    list("pwd                   - Print working directory"),
    BLANK,
];

pub(crate) const ABOUT: &[StaticLine] = &[
    out("╔════════════════════════════════════════════════════════════╗"),
    out("║                      MARK GATERE                           ║"),
    out("╚════════════════════════════════════════════════════════════╝"),
    BLANK,
    out("Title:    Software Engineer || AI/ML"),
    out("Location: Nairobi, Kenya"),
    out("Company:  Microsoft"),
    BLANK,
    out("Bio:"),
    out("Full Stack Software and AI Engineer specializing in"),
    out("JavaScript/TypeScript, Azure, AWS, and Artificial"),
    out("Intelligence development."),
    BLANK,
    out("Passionate about building innovative solutions that"),
    out("make a difference. From payment systems processing"),
    out("1000+ daily transactions to AI-powered applications"),
    out("serving hundreds of users."),
    BLANK,
];

pub(crate) const SKILLS: &[StaticLine] = &[
    out("Technical Skills:"),
    BLANK,
    success("→ Programming Languages"),
    list("• JavaScript/TypeScript  • Python  • SQL  • Rust"),
    BLANK,
    success("→ Frameworks & Libraries"),
    list("• React.js  • Next.js  • Node.js  • TensorFlow"),
    BLANK,
    success("→ Cloud Platforms"),
    list("• Microsoft Azure  • AWS  • Firebase"),
    BLANK,
    success("→ Developer Tools"),
    list("• Git/GitHub  • Docker  • VS Code  • Linux"),
    BLANK,
    success("→ Databases"),
    list("• MySQL  • PostgreSQL  • MongoDB"),
    BLANK,
];

pub(crate) const PROJECTS: &[StaticLine] = &[
    out("Portfolio Projects:"),
    BLANK,
    success("1. Charge24 Africa"),
    list("Payment portal with Next.js integrating 100+ dispensers"),
    list("Tech: Next.js, Payment APIs, Real-time tracking"),
    list("Metrics: 500-1,000+ daily transactions"),
    list("Status: Production"),
    BLANK,
    success("2. Lishebora"),
    list("AI-powered meal planning solution"),
    list("Tech: AI/ML, React, Backend APIs"),
    list("Users: 300+"),
    list("Status: Active"),
    BLANK,
    success("3. SiGna AI"),
    list("Sign language interpreter project"),
    list("Tech: AI/ML, Computer Vision"),
    list("Achievement: $1000 winner at Mt Kenya Innovation Week"),
    list("Status: Award Winner"),
    BLANK,
    success("4. Gatere Maps"),
    list("Google Maps clone with interactive features"),
    list("Tech: React.js, Maps API, Tailwind CSS"),
    link(
        "→ GitHub: github.com/gateremark/google_maps_clone",
        "https://github.com/gateremark/google_maps_clone",
    ),
    link(
        "→ Demo: gateremaps.vercel.app",
        "https://gateremaps.vercel.app/",
    ),
    list("Status: Open Source"),
    BLANK,
];

pub(crate) const EXPERIENCE: &[StaticLine] = &[
    out("Work Experience:"),
    BLANK,
    success("Microsoft"),
    list("Position: Garage and Ecosystem Intern"),
    list("Duration: August 2024 - Present"),
    list("Location: Nairobi, Kenya"),
    list("Develop and implement AI integrated solutions improving"),
    list("efficiency and user experience"),
    BLANK,
    success("FarCas Consult"),
    list("Position: Software Engineer"),
    list("Duration: June 2024 - February 2025"),
    list("Location: Nairobi, Kenya"),
    list("Led development of payment systems and admin dashboards"),
    list("for multiple clients including Charge24 Africa"),
    BLANK,
];

pub(crate) const EDUCATION: &[StaticLine] = &[
    out("Education:"),
    BLANK,
    success("Dedan Kimathi University of Technology"),
    list("Degree: BSc. Information Technology"),
    list("Focus: Machine Learning and Web Development"),
    list("Year: 2021-2025"),
    BLANK,
    success("Achievements & Leadership"),
    list("• Microsoft Learn Student Ambassador"),
    list("• Ex-Google Developer Student Clubs Lead"),
    list("• Technical Writer - Hashnode, Dev.to"),
    BLANK,
];

pub(crate) const CONTACT: &[StaticLine] = &[
    out("Contact Information:"),
    BLANK,
    success("Email:"),
    link("contact@gateremark.me", "mailto:contact@gateremark.me"),
    BLANK,
    success("Social Media:"),
    link("GitHub: github.com/gateremark", "https://github.com/gateremark"),
    link(
        "LinkedIn: linkedin.com/in/gateremark",
        "https://linkedin.com/in/gateremark",
    ),
    link(
        "Twitter: twitter.com/gatere_mark",
        "https://twitter.com/gatere_mark",
    ),
    BLANK,
    success("Portfolio & Blog:"),
    link("Website: gateremark.me", "https://gateremark.me"),
    link(
        "Blog: gateremark.hashnode.dev",
        "https://gateremark.hashnode.dev",
    ),
    BLANK,
];

pub(crate) const THEMES: &[StaticLine] = &[
    out("Available Themes:"),
    BLANK,
    success("Usage: theme <name>"),
    BLANK,
    list("green   - Classic Matrix green (default)"),
    list("blue    - Ocean blue terminal"),
    list("amber   - Vintage amber monitor"),
    list("white   - Classic white phosphor"),
    list("matrix  - Matrix digital rain style"),
    BLANK,
    comment("Example: theme blue"),
    BLANK,
];

pub(crate) const LS: &[StaticLine] = &[
    out("total 7"),
    list("about.txt"),
    list("skills.txt"),
    list("projects/"),
    list("experience.txt"),
    list("education.txt"),
    list("contact.txt"),
    list("README.md"),
    BLANK,
];

pub(crate) const PWD: &[StaticLine] = &[out("/home/mark/portfolio"), BLANK];

pub(crate) const SUDO: &[StaticLine] = &[
    error("[sudo] password for mark: "),
    error("Nice try! But this isn't a real terminal 😄"),
    BLANK,
];

pub(crate) const WHOAMI: &[StaticLine] = &[
    success("You're viewing Mark Gatere's portfolio - the awesome developer!"),
    BLANK,
];
