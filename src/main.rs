//! CLI entry point for folio.

mod cli;

use clap::Parser;
use folio::app;
use folio::config::load_config;
use folio::contact::{self, ContactForm};
use folio::theme::{self, tokens, ThemeMode, ThemeStore};
use folio::ui::render::TerminalRenderer;
use folio::ui::sections::{self, Section};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_tracing();
    let args = cli::Args::parse();

    // Load config.
    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    // Apply CLI overrides.
    if let Some(key) = &args.theme {
        match ThemeMode::from_key(key) {
            Ok(mode) => config.display.theme = mode,
            Err(msg) => {
                eprintln!("error: {msg}");
                std::process::exit(1);
            }
        }
    }
    if args.no_color {
        config.display.color = false;
    }

    let renderer = TerminalRenderer::new(config.display.color);
    let store = ThemeStore::new(config.display.theme);

    match args.command {
        None => app::render_once(&renderer, &store, &config.profile),
        Some(cli::Command::Show { section }) => {
            let section = match Section::from_key(&section) {
                Ok(section) => section,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    std::process::exit(1);
                }
            };
            let derived = theme::derive(store.mode());
            sections::render_section(section, &renderer, &derived, &config.profile);
        }
        Some(cli::Command::Watch) => {
            if let Err(e) = app::run_interactive(&store, config.profile, renderer) {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        Some(cli::Command::Tokens { pretty }) => {
            let doc = tokens::theme_json(&theme::derive(store.mode()));
            let rendered = if pretty {
                serde_json::to_string_pretty(&doc)
            } else {
                serde_json::to_string(&doc)
            };
            match rendered {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("error: failed to serialize theme tokens: {e}");
                    std::process::exit(1);
                }
            }
        }
        Some(cli::Command::Contact { name, email, message }) => {
            let form = ContactForm { name, email, message };
            match contact::submit(&form).await {
                Ok(receipt) => {
                    println!("Message sent. Thank you, {}!", receipt.sender);
                    println!("(Delivery is simulated; nothing was transmitted.)");
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
