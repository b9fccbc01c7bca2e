//! Markdown-to-terminal rendering helpers.
//!
//! We use `termimad` because it produces terminal-friendly markdown layout
//! (lists, headings, emphasis) without requiring a full TUI view.

use termimad::MadSkin;

/// Render markdown into plain terminal text with structure preserved.
///
/// The output intentionally contains no ANSI styling; section renderers
/// control colors so the active theme stays consistent.
pub fn render_markdown_for_terminal(input: &str) -> String {
    let skin = MadSkin::no_style();
    let formatted = skin.text(input, None).to_string();
    trim_trailing_blank_lines(&formatted)
}

fn trim_trailing_blank_lines(s: &str) -> String {
    s.trim_end_matches('\n').to_string()
}
