//! Theme token export.
//!
//! Flattens a derived [`Theme`] into the CSS-variable vocabulary the web
//! front ends of this profile format expect, plus the full semantic palette,
//! as JSON. Consumed by `folio tokens`.

use super::{PaletteEntry, Theme};
use serde_json::{json, Map, Value};

/// Render the theme as a JSON token document.
pub fn theme_json(theme: &Theme) -> Value {
    json!({
        "mode": theme.mode.key(),
        "css_variables": css_variables(theme),
        "palette": palette_json(theme),
        "typography": {
            "font_family": theme.typography.font_family,
            "headings": theme
                .typography
                .headings
                .iter()
                .enumerate()
                .map(|(idx, h)| {
                    json!({
                        "level": format!("h{}", idx + 1),
                        "weight": h.weight,
                        "letter_spacing_em": h.letter_spacing_em,
                    })
                })
                .collect::<Vec<_>>(),
            "button_weight": theme.typography.button_weight,
            "button_uppercase": theme.typography.button_uppercase,
        },
        "shape": { "border_radius": theme.shape.border_radius },
    })
}

/// CSS custom-property map for the derived theme.
pub fn css_variables(theme: &Theme) -> Map<String, Value> {
    let palette = &theme.palette;
    let mut vars = Map::new();
    vars.insert("--primary-color".into(), palette.primary.main.hex().into());
    vars.insert("--secondary-color".into(), palette.secondary.main.hex().into());
    vars.insert("--accent-color".into(), palette.info.main.hex().into());
    vars.insert(
        "--background-color".into(),
        palette.background.default.hex().into(),
    );
    vars.insert("--text-color".into(), palette.text.primary.hex().into());
    vars.insert(
        "--card-bg".into(),
        theme.components.card.background.hex().into(),
    );
    vars.insert(
        "--font-family".into(),
        theme.typography.font_family.into(),
    );
    vars
}

fn palette_json(theme: &Theme) -> Value {
    let mut roles = Map::new();
    for (name, entry) in theme.palette.accent_roles() {
        roles.insert(name.to_string(), entry_json(entry));
    }
    roles.insert(
        "background".into(),
        json!({
            "default": theme.palette.background.default.hex(),
            "paper": theme.palette.background.paper.hex(),
        }),
    );
    roles.insert(
        "text".into(),
        json!({
            "primary": theme.palette.text.primary.hex(),
            "secondary": theme.palette.text.secondary.hex(),
        }),
    );
    Value::Object(roles)
}

fn entry_json(entry: &PaletteEntry) -> Value {
    // Roles without an authored contrast color fall back to the luminance
    // helper, mirroring how the renderer picks readable text at paint time.
    let contrast = entry
        .contrast_text
        .unwrap_or_else(|| entry.main.contrast_text());
    json!({
        "main": entry.main.hex(),
        "light": entry.light.hex(),
        "dark": entry.dark.hex(),
        "contrast_text": contrast.hex(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{derive, ThemeMode};

    #[test]
    fn css_variables_cover_the_expected_names() {
        let theme = derive(ThemeMode::Dark);
        let vars = css_variables(&theme);
        for name in [
            "--primary-color",
            "--secondary-color",
            "--accent-color",
            "--background-color",
            "--text-color",
            "--card-bg",
            "--font-family",
        ] {
            assert!(vars.contains_key(name), "missing {name}");
        }
        assert_eq!(vars["--background-color"], "#121212");
        assert_eq!(vars["--text-color"], "#FFFFFF");
    }

    #[test]
    fn light_mode_swaps_background_and_text_variables() {
        let vars = css_variables(&derive(ThemeMode::Light));
        assert_eq!(vars["--background-color"], "#F5F5F5");
        assert_eq!(vars["--text-color"], "#212121");
        assert_eq!(vars["--card-bg"], "#FAFAFA");
    }

    #[test]
    fn palette_export_populates_every_role() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            let doc = theme_json(&derive(mode));
            let palette = doc["palette"].as_object().expect("palette object");
            for role in [
                "primary",
                "secondary",
                "error",
                "warning",
                "info",
                "success",
                "background",
                "text",
            ] {
                assert!(palette.contains_key(role), "{mode}: missing {role}");
                assert!(!palette[role].is_null(), "{mode}: null {role}");
            }
        }
    }

    #[test]
    fn unauthored_contrast_text_falls_back_to_luminance() {
        let doc = theme_json(&derive(ThemeMode::Dark));
        // Warning gold is bright; the computed contrast must be black.
        assert_eq!(doc["palette"]["warning"]["contrast_text"], "#000000");
        // Primary orange has an authored black contrast choice.
        assert_eq!(doc["palette"]["primary"]["contrast_text"], "#000000");
        // Secondary purple has an authored white contrast choice.
        assert_eq!(doc["palette"]["secondary"]["contrast_text"], "#FFFFFF");
    }
}
