//! Viewer orchestration: one-shot rendering and the interactive loop.
//!
//! The interactive loop is the canonical store consumer: it subscribes a
//! repaint listener, so a `toggle` repaints the whole portfolio with the
//! theme re-derived from the new mode before the keypress handler returns.

use crate::content::Profile;
use crate::theme::{self, ThemeMode, ThemeStore};
use crate::ui::render::{RenderSink, TerminalRenderer};
use crate::ui::sections;
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, Write};
use std::rc::Rc;

/// Render the whole portfolio once with the store's current mode.
pub fn render_once(sink: &dyn RenderSink, store: &ThemeStore, profile: &Profile) {
    let theme = theme::derive(store.mode());
    sections::render_all(sink, &theme, profile);
}

/// Interactive viewer: repaints on every theme toggle until quit.
///
/// Keys: `t` toggles dark/light, `q` or Esc quits.
pub fn run_interactive(
    store: &ThemeStore,
    profile: Profile,
    renderer: TerminalRenderer,
) -> io::Result<()> {
    let renderer = Rc::new(renderer);
    let profile = Rc::new(profile);

    let painter = Rc::new({
        let renderer = Rc::clone(&renderer);
        let profile = Rc::clone(&profile);
        move |mode: ThemeMode| {
            if let Err(e) = clear_screen() {
                tracing::warn!(error = %e, "failed to clear screen");
            }
            let theme = theme::derive(mode);
            sections::render_all(renderer.as_ref(), &theme, &profile);
            renderer.blank();
            renderer.text(
                &format!("theme: {mode}   t: toggle   q: quit"),
                theme.palette.text.secondary,
            );
        }
    });

    painter(store.mode());
    let repaint = Rc::clone(&painter);
    let _subscription = store.subscribe(move |mode| repaint(mode));

    loop {
        // Raw mode only while waiting for a key, so repaints keep normal
        // newline handling.
        terminal::enable_raw_mode()?;
        let ev = event::read();
        terminal::disable_raw_mode()?;
        let Event::Key(key) = ev? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }
        match key.code {
            KeyCode::Char('t') | KeyCode::Char('T') => store.toggle(),
            KeyCode::Char('q') | KeyCode::Esc => break,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
            _ => {}
        }
    }
    Ok(())
}

fn clear_screen() -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.queue(Clear(ClearType::All))?;
    stdout.queue(MoveTo(0, 0))?;
    stdout.flush()
}
