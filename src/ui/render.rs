//! Rendering contracts and the default terminal renderer.
//!
//! `RenderSink` is the injectable drawing interface consumed by section
//! renderers and the interactive loop. Colors arrive pre-resolved from the
//! derived theme; the sink itself holds no theme state, so a repaint with a
//! different theme needs no renderer changes.

use crate::theme::Rgb;
use crossterm::style::Stylize;

/// Width of skill gauge bars, in cells.
const GAUGE_WIDTH: usize = 24;

/// Injectable rendering interface used by section renderers.
///
/// `TerminalRenderer` is the default implementation; tests substitute a
/// recording sink without touching stdout.
pub trait RenderSink {
    /// Render a full-width banner row (hero header).
    fn banner(&self, text: &str, fg: Rgb, bg: Rgb);
    /// Render a section title with its accent color.
    fn title(&self, text: &str, accent: Rgb);
    /// Render body text; multi-line input renders line by line.
    fn text(&self, body: &str, fg: Rgb);
    /// Render one bulleted row.
    fn bullet(&self, body: &str, marker: Rgb, fg: Rgb);
    /// Render one key/value field row.
    fn field(&self, key: &str, value: &str, key_fg: Rgb, value_fg: Rgb);
    /// Render a labeled proficiency gauge (level 0–100, clamped).
    fn gauge(&self, label: &str, level: u8, filled: Rgb, label_fg: Rgb);
    /// Render a blank separator row.
    fn blank(&self);
}

/// Default stdout renderer.
#[derive(Debug, Clone, Copy)]
pub struct TerminalRenderer {
    color: bool,
}

impl TerminalRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, fg: Rgb) -> String {
        if self.color {
            text.with(fg.into()).to_string()
        } else {
            text.to_string()
        }
    }
}

impl RenderSink for TerminalRenderer {
    fn banner(&self, text: &str, fg: Rgb, bg: Rgb) {
        let row = format!("  {text}  ");
        if self.color {
            println!("{}", row.with(fg.into()).on(bg.into()).bold());
        } else {
            println!("{row}");
        }
    }

    fn title(&self, text: &str, accent: Rgb) {
        let rule = "─".repeat(text.chars().count().max(4));
        if self.color {
            println!("{}", text.with(accent.into()).bold());
            println!("{}", rule.with(accent.into()));
        } else {
            println!("{text}");
            println!("{rule}");
        }
    }

    fn text(&self, body: &str, fg: Rgb) {
        for line in body.lines() {
            println!("{}", self.paint(line, fg));
        }
        if body.is_empty() {
            println!();
        }
    }

    fn bullet(&self, body: &str, marker: Rgb, fg: Rgb) {
        println!("{} {}", self.paint("•", marker), self.paint(body, fg));
    }

    fn field(&self, key: &str, value: &str, key_fg: Rgb, value_fg: Rgb) {
        // Pad before styling so ANSI escapes never skew the column width.
        let padded = format!("{key:>12}");
        println!(
            "{}  {}",
            self.paint(&padded, key_fg),
            self.paint(value, value_fg)
        );
    }

    fn gauge(&self, label: &str, level: u8, filled: Rgb, label_fg: Rgb) {
        let (bar, percent) = gauge_bar(level);
        let padded = format!("{label:<16}");
        println!(
            "{} {} {percent:>3}%",
            self.paint(&padded, label_fg),
            self.paint(&bar, filled)
        );
    }

    fn blank(&self) {
        println!();
    }
}

/// Build the gauge bar glyphs for a clamped level.
pub(crate) fn gauge_bar(level: u8) -> (String, u8) {
    let percent = level.min(100);
    let cells = usize::from(percent) * GAUGE_WIDTH / 100;
    let mut bar = String::with_capacity(GAUGE_WIDTH * 3);
    for _ in 0..cells {
        bar.push('█');
    }
    for _ in cells..GAUGE_WIDTH {
        bar.push('░');
    }
    (bar, percent)
}
