//! Static portfolio content.
//!
//! Everything here is configuration owned by the view layer, not theming
//! logic: sections read these values and the derived theme, and nothing
//! else. A `[profile]` block in `folio.toml` replaces the built-in sample
//! profile wholesale or per-section.

use serde::Deserialize;

/// The full profile rendered by the viewer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub hero: Hero,
    pub about: About,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub contact: ContactInfo,
    pub footer: Footer,
    pub resume: Resume,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub name: String,
    pub role: String,
    pub tagline: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct About {
    /// Markdown body rendered through the terminal markdown helper.
    pub body: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency 0–100; the gauge renderer clamps out-of-range values.
    pub level: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub source_link: String,
    #[serde(default)]
    pub demo_link: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub github: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Footer {
    pub line: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Resume {
    /// Path or URL of the static resume asset surfaced in the resume section.
    pub asset: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            hero: Hero::default(),
            about: About::default(),
            experience: default_experience(),
            skills: default_skills(),
            projects: default_projects(),
            contact: ContactInfo::default(),
            footer: Footer::default(),
            resume: Resume::default(),
        }
    }
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            name: "Jordan Avery".to_string(),
            role: "Full Stack Developer".to_string(),
            tagline: "Building interactive web experiences, one component at a time."
                .to_string(),
        }
    }
}

impl Default for About {
    fn default() -> Self {
        Self {
            body: "I'm a full-stack developer with a front-end heart. I spend most of my \
                   time in **React** and **TypeScript**, with real-time 3D work in \
                   Babylon.js and Node.js services behind it.\n\n\
                   Away from the keyboard I mentor junior developers and run internal \
                   training sessions."
                .to_string(),
            highlights: vec![
                "3+ years shipping production front ends".to_string(),
                "Led frontend CI/CD pipeline builds in Azure".to_string(),
                "Mentor and internal trainer".to_string(),
            ],
        }
    }
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: "jordan.avery@example.com".to_string(),
            phone: "+1 555 010 1805".to_string(),
            location: "Ahmedabad, India".to_string(),
            github: "https://github.com/javery".to_string(),
            linkedin: "https://linkedin.com/in/jordan-avery".to_string(),
        }
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            line: "© 2025 Jordan Avery. All rights reserved.".to_string(),
        }
    }
}

impl Default for Resume {
    fn default() -> Self {
        Self {
            asset: "assets/resume.pdf".to_string(),
        }
    }
}

fn default_experience() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            title: "Senior Software Developer".to_string(),
            company: "Ansibyte Code LLP".to_string(),
            period: "Sep 2023 - Present".to_string(),
            points: vec![
                "Working on a cloud play creator built with React.js and Babylon.js"
                    .to_string(),
                "Migrated the frontend stack to current major versions".to_string(),
                "Leading client calls and mentoring team members".to_string(),
                "Built frontend CI/CD pipelines in Azure".to_string(),
            ],
        },
        ExperienceEntry {
            title: "Software Developer".to_string(),
            company: "Infosys".to_string(),
            period: "Jul 2022 - Sep 2023".to_string(),
            points: vec![
                "Node.js and Express.js backend development".to_string(),
                "Evolved APIs and data models against frontend requirements".to_string(),
                "Collaborated with cross-functional teams on delivery".to_string(),
            ],
        },
    ]
}

fn default_skills() -> Vec<Skill> {
    [
        ("React.js", 95),
        ("Babylon.js", 90),
        ("TypeScript", 90),
        ("Node.js", 85),
        ("Redux", 85),
        ("Azure DevOps", 80),
    ]
    .into_iter()
    .map(|(name, level)| Skill {
        name: name.to_string(),
        level,
    })
    .collect()
}

fn default_projects() -> Vec<Project> {
    vec![
        Project {
            name: "Portfolio Website".to_string(),
            description: "A modern portfolio site with 3D animation and responsive design, \
                          built with React, Three.js, and Material UI."
                .to_string(),
            tags: vec!["react".to_string(), "threejs".to_string(), "mui".to_string()],
            source_link: "https://github.com/javery/portfolio".to_string(),
            demo_link: Some("https://javery.dev".to_string()),
        },
        Project {
            name: "E-Commerce Platform".to_string(),
            description: "Full-stack storefront with authentication, product management, \
                          and Stripe payments."
                .to_string(),
            tags: vec!["node".to_string(), "stripe".to_string(), "postgres".to_string()],
            source_link: "https://github.com/javery/ecommerce".to_string(),
            demo_link: None,
        },
        Project {
            name: "Task Board".to_string(),
            description: "Collaborative task management with real-time updates and \
                          drag-and-drop lanes."
                .to_string(),
            tags: vec!["react".to_string(), "websockets".to_string()],
            source_link: "https://github.com/javery/taskboard".to_string(),
            demo_link: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_fully_populated() {
        let profile = Profile::default();
        assert!(!profile.hero.name.is_empty());
        assert!(!profile.about.body.is_empty());
        assert!(!profile.experience.is_empty());
        assert!(!profile.skills.is_empty());
        assert!(!profile.projects.is_empty());
        assert!(!profile.contact.email.is_empty());
        assert!(!profile.footer.line.is_empty());
        assert!(!profile.resume.asset.is_empty());
    }

    #[test]
    fn skill_levels_stay_within_gauge_range() {
        for skill in Profile::default().skills {
            assert!(skill.level <= 100, "{} out of range", skill.name);
        }
    }

    #[test]
    fn profile_deserializes_with_partial_overrides() {
        let toml = r#"
            [hero]
            name = "Ada Example"

            [[skills]]
            name = "Rust"
            level = 80
        "#;
        let profile: Profile = toml::from_str(toml).expect("parse");
        assert_eq!(profile.hero.name, "Ada Example");
        // Unset hero fields keep their defaults.
        assert_eq!(profile.hero.role, "Full Stack Developer");
        assert_eq!(profile.skills.len(), 1);
        assert_eq!(profile.skills[0].level, 80);
    }
}
