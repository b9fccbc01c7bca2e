//! Portfolio section renderers.
//!
//! Each section is a view consumer in the theming contract: it receives a
//! derived [`Theme`] and its own static content, reads theme tokens, and
//! never mutates them. Re-rendering on theme changes is driven by the caller
//! (the interactive loop subscribes to the store and repaints).

use crate::content::Profile;
use crate::theme::Theme;
use crate::ui::markdown::render_markdown_for_terminal;
use crate::ui::render::RenderSink;

/// Addressable portfolio sections, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Experience,
    Skills,
    Projects,
    Contact,
    Resume,
    Footer,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Self::Hero,
        Self::About,
        Self::Experience,
        Self::Skills,
        Self::Projects,
        Self::Contact,
        Self::Resume,
        Self::Footer,
    ];

    /// Stable CLI key for this section.
    pub fn key(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
            Self::Resume => "resume",
            Self::Footer => "footer",
        }
    }

    /// Resolve a CLI key back into a section.
    pub fn from_key(input: &str) -> Result<Self, String> {
        let normalized = input.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|section| section.key() == normalized)
            .ok_or_else(|| {
                let known = Self::ALL.map(Section::key).join(", ");
                format!("unknown section `{input}`. Available sections: {known}")
            })
    }
}

/// Render every section in order.
pub fn render_all(sink: &dyn RenderSink, theme: &Theme, profile: &Profile) {
    for section in Section::ALL {
        render_section(section, sink, theme, profile);
    }
}

/// Render one section.
pub fn render_section(section: Section, sink: &dyn RenderSink, theme: &Theme, profile: &Profile) {
    match section {
        Section::Hero => hero(sink, theme, profile),
        Section::About => about(sink, theme, profile),
        Section::Experience => experience(sink, theme, profile),
        Section::Skills => skills(sink, theme, profile),
        Section::Projects => projects(sink, theme, profile),
        Section::Contact => contact(sink, theme, profile),
        Section::Resume => resume(sink, theme, profile),
        Section::Footer => footer(sink, theme, profile),
    }
}

fn hero(sink: &dyn RenderSink, theme: &Theme, profile: &Profile) {
    let bar = theme.components.app_bar.gradient;
    sink.banner(&profile.hero.name, bar.start.contrast_text(), bar.start);
    sink.text(&profile.hero.role, theme.palette.primary.main);
    sink.text(&profile.hero.tagline, theme.palette.text.secondary);
    sink.blank();
}

fn about(sink: &dyn RenderSink, theme: &Theme, profile: &Profile) {
    sink.title("about", theme.palette.primary.main);
    sink.text(
        &render_markdown_for_terminal(&profile.about.body),
        theme.palette.text.primary,
    );
    for highlight in &profile.about.highlights {
        sink.bullet(highlight, theme.palette.info.main, theme.palette.text.primary);
    }
    sink.blank();
}

fn experience(sink: &dyn RenderSink, theme: &Theme, profile: &Profile) {
    sink.title("experience", theme.palette.primary.main);
    for entry in &profile.experience {
        sink.text(
            &format!("{} · {}", entry.title, entry.company),
            theme.palette.text.primary,
        );
        sink.text(&entry.period, theme.palette.text.secondary);
        for point in &entry.points {
            sink.bullet(point, theme.palette.primary.main, theme.palette.text.primary);
        }
        sink.blank();
    }
}

fn skills(sink: &dyn RenderSink, theme: &Theme, profile: &Profile) {
    sink.title("skills", theme.palette.primary.main);
    for skill in &profile.skills {
        sink.gauge(
            &skill.name,
            skill.level,
            theme.palette.primary.main,
            theme.palette.text.primary,
        );
    }
    sink.blank();
}

fn projects(sink: &dyn RenderSink, theme: &Theme, profile: &Profile) {
    sink.title("projects", theme.palette.primary.main);
    for project in &profile.projects {
        sink.text(&project.name, theme.palette.info.light);
        sink.text(&project.description, theme.palette.text.primary);
        if !project.tags.is_empty() {
            sink.text(
                &format!("[{}]", project.tags.join("] [")),
                theme.palette.warning.main,
            );
        }
        sink.field(
            "source",
            &project.source_link,
            theme.palette.text.secondary,
            theme.palette.info.main,
        );
        if let Some(demo) = &project.demo_link {
            sink.field(
                "demo",
                demo,
                theme.palette.text.secondary,
                theme.palette.info.main,
            );
        }
        sink.blank();
    }
}

fn contact(sink: &dyn RenderSink, theme: &Theme, profile: &Profile) {
    sink.title("contact", theme.palette.primary.main);
    let info = &profile.contact;
    let key_fg = theme.palette.text.secondary;
    let value_fg = theme.palette.info.light;
    sink.field("email", &info.email, key_fg, value_fg);
    sink.field("phone", &info.phone, key_fg, value_fg);
    sink.field("location", &info.location, key_fg, value_fg);
    sink.field("github", &info.github, key_fg, value_fg);
    sink.field("linkedin", &info.linkedin, key_fg, value_fg);
    sink.blank();
}

fn resume(sink: &dyn RenderSink, theme: &Theme, profile: &Profile) {
    sink.title("resume", theme.palette.primary.main);
    sink.field(
        "download",
        &profile.resume.asset,
        theme.palette.text.secondary,
        theme.palette.success.main,
    );
    sink.blank();
}

fn footer(sink: &dyn RenderSink, theme: &Theme, profile: &Profile) {
    sink.text(&profile.footer.line, theme.palette.text.secondary);
}
