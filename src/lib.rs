//! Folio — a themed terminal portfolio viewer.
//!
//! This crate renders a resume-like profile (hero, about, experience,
//! skills, projects, contact, footer) in the terminal, with a dark/light
//! theme system at its core: an explicit [`theme::ThemeStore`] holds the
//! active mode and notifies subscribers, and [`theme::derive`] maps a mode
//! to a complete, authored token bundle.
//!
//! # Quick start
//!
//! ```
//! use folio::theme::{self, ThemeMode, ThemeStore};
//!
//! let store = ThemeStore::default();
//! assert_eq!(store.mode(), ThemeMode::Dark);
//!
//! let _sub = store.subscribe(|mode| {
//!     let theme = theme::derive(mode);
//!     assert_eq!(theme.mode, mode);
//! });
//! store.toggle();
//! assert_eq!(store.mode(), ThemeMode::Light);
//! ```

pub mod app;
pub mod build_info;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod theme;
pub mod ui;
