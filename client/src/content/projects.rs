//! Showcased projects.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectLinks {
    pub github: Option<&'static str>,
    pub live: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    /// Inline SVG placeholder until real screenshots exist.
    pub image: &'static str,
    pub links: ProjectLinks,
}

const MICROCREDIT_ICON: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='100' height='100' viewBox='0 0 24 24' fill='none' stroke='%232563eb' stroke-width='1' stroke-linecap='round' stroke-linejoin='round'%3E%3Crect x='2' y='5' width='20' height='14' rx='2'%3E%3C/rect%3E%3Cline x1='2' y1='10' x2='22' y2='10'%3E%3C/line%3E%3Cpath d='M7 15h0'%3E%3C/path%3E%3Cpath d='M11 15h0'%3E%3C/path%3E%3C/svg%3E";

const ANALYSIS_ICON: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='100' height='100' viewBox='0 0 24 24' fill='none' stroke='%238b5cf6' stroke-width='1' stroke-linecap='round' stroke-linejoin='round'%3E%3Cpath d='M3 3v18h18'%3E%3C/path%3E%3Cpath d='M18 17V9'%3E%3C/path%3E%3Cpath d='M13 17v-5'%3E%3C/path%3E%3Cpath d='M8 17v-2'%3E%3C/path%3E%3C/svg%3E";

const SCRAPE_ICON: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='100' height='100' viewBox='0 0 24 24' fill='none' stroke='%2310b981' stroke-width='1' stroke-linecap='round' stroke-linejoin='round'%3E%3Cpolyline points='8 2 12 6 16 2'%3E%3C/polyline%3E%3Cline x1='12' y1='6' x2='12' y2='18'%3E%3C/line%3E%3Cpath d='M20 16a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2h3'%3E%3C/path%3E%3C/svg%3E";

const PORTFOLIO_ICON: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='100' height='100' viewBox='0 0 24 24' fill='none' stroke='%23f59e0b' stroke-width='1' stroke-linecap='round' stroke-linejoin='round'%3E%3Crect x='3' y='3' width='18' height='18' rx='2' ry='2'%3E%3C/rect%3E%3Cline x1='12' y1='3' x2='12' y2='21'%3E%3C/line%3E%3C/svg%3E";

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Micro-Credit",
        description: "Instant Micro Credit solution for vendors. Built with Python, HTML, and JavaScript. \
                      The system tracks real-time transactions and updates credit limits dynamically, \
                      providing instant credit without civil score checks.",
        tags: &["Python", "HTML", "JavaScript", "Real-time Tracking"],
        image: MICROCREDIT_ICON,
        links: ProjectLinks { github: Some("https://github.com/GODL0111"), live: Some("https://example.com") },
    },
    Project {
        title: "Credit Analysis",
        description: "A credit card transaction analysis tool built with Power BI. The system analyzes \
                      monthly credit card transactions and provides targeted offers to users who perform \
                      the most transactions.",
        tags: &["Power BI", "Data Analysis", "Visualization", "Financial Analytics"],
        image: ANALYSIS_ICON,
        links: ProjectLinks { github: Some("https://github.com/GODL0111"), live: Some("https://example.com") },
    },
    Project {
        title: "WebScrape",
        description: "A data scraping tool developed using Python and BeautifulSoup. This tool efficiently \
                      tracks and extracts table data from user-provided links, automating the data \
                      collection process.",
        tags: &["Python", "BeautifulSoup", "Web Scraping", "Data Collection"],
        image: SCRAPE_ICON,
        links: ProjectLinks { github: Some("https://github.com/GODL0111"), live: None },
    },
    Project {
        title: "Portfolio Website",
        description: "A modern, responsive portfolio website with dark/light theme, smooth animations, and \
                      interactive elements. Built with Rust, Leptos, and WebAssembly.",
        tags: &["Rust", "Leptos", "WebAssembly", "Axum"],
        image: PORTFOLIO_ICON,
        links: ProjectLinks { github: Some("https://github.com/GODL0111"), live: Some("https://example.com") },
    },
];
