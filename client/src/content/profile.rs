//! Owner profile: identity, contact channels, résumé sections.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub short_name: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
    pub email: &'static str,
    pub phones: &'static [&'static str],
    pub linkedin: &'static str,
    pub github: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link for the first listed number.
    pub fn tel(&self) -> Option<String> {
        self.phones.first().map(|p| format!("tel:+91{p}"))
    }

    /// URL without the scheme, for display.
    pub fn display_url(url: &str) -> &str {
        url.trim_start_matches("https://").trim_start_matches("www.")
    }
}

pub const PROFILE: Profile = Profile {
    name: "ARIN KARMAKAR",
    initials: "AK",
    short_name: "ARIN",
    tagline: "Durgapur, West Bengal | Computer Science Student",
    summary: "A detail-oriented B.Tech graduate seeking to leverage a strong analytical mindset in the \
              Sales Quality Analyst Intern role. My goal is to help establish and maintain high-quality \
              standards for sales interactions by analyzing call data to identify trends, assisting in \
              performance assessments, and supporting the continuous improvement of sales strategies.",
    email: "arinkarmakar3@gmail.com",
    phones: &["6294979223", "9476476209"],
    linkedin: "https://www.linkedin.com/in/arin-karmakar",
    github: "https://github.com/GODL0111",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Education {
    pub school: &'static str,
    pub detail: &'static str,
}

pub const EDUCATION: &[Education] = &[
    Education {
        school: "Techno Main Salt Lake",
        detail: "B.Tech (pursuing) | Major: Computer Science | Minor: Data Science | 2026",
    },
    Education { school: "Dr. B. C. Roy Polytechnic", detail: "Diploma | Major: Mechanical | 2021" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Role {
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub const EXPERIENCE: &[Role] = &[Role {
    title: "Field Engineer",
    organization: "Tata Power",
    period: "2021 - 2023",
    highlights: &[
        "Boiler Engineer: Managed 1070MW (525MW*2) plant.",
        "Contributed to AOH, also taken part as a safety team.",
        "Proactively monitored and maintained plant systems to increase efficiency and reduce leakages.",
    ],
}];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Leadership {
    pub position: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub const LEADERSHIP: &[Leadership] = &[
    Leadership {
        position: "Chairperson of GeeksForGeeks Student Chapter",
        period: "2024-25",
        description: "Leading tech initiatives and coordinating programming workshops for students.",
    },
    Leadership {
        position: "Captain of PeerHub Student Chapter",
        period: "2025",
        description: "Facilitating peer-to-peer learning and mentorship programs.",
    },
    Leadership {
        position: "Google Student Ambassador",
        period: "2025",
        description: "Representing Google on campus and organizing tech events and workshops.",
    },
];

pub const SKILLS: &[&str] = &[
    "Python",
    "CSS",
    "AI",
    "JavaScript",
    "HTML",
    "Node.js",
    "DSA",
    "DBMS",
    "RestAPI",
    "AWS",
    "Azure",
    "Team Management",
    "Leadership",
    "AgenticAI",
    "GCP",
    "GitHub",
    "SQL",
    "OOPs",
    "Data Analysis",
    "MySQL",
    "Neural Networks",
    "Docker",
    "Learning Experience Design",
];

pub const CERTIFICATIONS: &[&str] = &[
    "Getting Started with Enterprise-Grade AI by IBM SkillsBuild",
    "Journey to Cloud: Envisioning Your Solution by IBM SkillsBuild",
    "Reverse Engineering & Malware Analysis in 21 Hours | REMAC+ from Udemy",
    "HTML 5, Python, Django And Flask Framework Full-Stack Course from Udemy",
];
