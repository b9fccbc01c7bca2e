//! Semantic portfolio theme system.
//!
//! All colors and component styles used by the view layer resolve through
//! this module. A [`ThemeMode`] selects one of two authored token tables;
//! [`derive`] assembles the full [`Theme`] bundle consumed by renderers.
//!
//! The light/dark variants are separately authored constants, not computed
//! from one another. Keep it that way: introducing color interpolation here
//! silently changes the visual design.

use std::fmt;

mod color;
mod store;
pub mod tokens;

pub use color::{Rgb, BLACK, WHITE};
pub use store::{Subscription, ThemeStore};

/// Two-valued selector driving which palette is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// The other mode. `toggle` on the store is defined in terms of this.
    pub fn flipped(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Stable config key for this mode (used by `display.theme`).
    pub fn key(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a config key back into a mode.
    pub fn from_key(input: &str) -> Result<Self, String> {
        match input.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!("unknown theme mode `{other}` (expected dark or light)")),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A named color role: the main token plus authored light/dark variants.
///
/// Design invariant of the authored tables: `light` is perceptually lighter
/// than `main` and `dark` is perceptually darker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub main: Rgb,
    pub light: Rgb,
    pub dark: Rgb,
    /// Authored text color readable on `main`, when the design fixes one.
    pub contrast_text: Option<Rgb>,
}

impl PaletteEntry {
    const fn new(main: Rgb, light: Rgb, dark: Rgb) -> Self {
        Self {
            main,
            light,
            dark,
            contrast_text: None,
        }
    }

    const fn with_contrast(main: Rgb, light: Rgb, dark: Rgb, contrast_text: Rgb) -> Self {
        Self {
            main,
            light,
            dark,
            contrast_text: Some(contrast_text),
        }
    }
}

/// Surface background tokens for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundPalette {
    pub default: Rgb,
    pub paper: Rgb,
}

/// Text tokens for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPalette {
    pub primary: Rgb,
    pub secondary: Rgb,
}

/// The full semantic color table for one mode. Every role is always
/// populated; there is no partial palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: PaletteEntry,
    pub secondary: PaletteEntry,
    pub error: PaletteEntry,
    pub warning: PaletteEntry,
    pub info: PaletteEntry,
    pub success: PaletteEntry,
    pub background: BackgroundPalette,
    pub text: TextPalette,
}

impl Palette {
    /// The six accent roles with their stable names, in a fixed order.
    pub fn accent_roles(&self) -> [(&'static str, &PaletteEntry); 6] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("error", &self.error),
            ("warning", &self.warning),
            ("info", &self.info),
            ("success", &self.success),
        ]
    }
}

/// Weight and tracking for one heading level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingStyle {
    pub weight: u16,
    pub letter_spacing_em: f32,
}

/// Type scale shared by both modes.
#[derive(Debug, Clone, PartialEq)]
pub struct Typography {
    pub font_family: &'static str,
    /// h1 through h6, in order.
    pub headings: [HeadingStyle; 6],
    pub button_weight: u16,
    /// Buttons keep their authored casing; no uppercase transform.
    pub button_uppercase: bool,
}

/// Corner rounding tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub border_radius: u8,
}

/// A two-stop linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub start: Rgb,
    pub end: Rgb,
    pub angle_deg: u16,
}

/// A drop shadow: offset/blur in pixels plus black alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub y_offset: u8,
    pub blur: u8,
    pub alpha: f32,
}

/// App-bar style rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppBarStyle {
    pub gradient: Gradient,
    pub shadow: Shadow,
}

/// Button style rules for one emphasis level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStyle {
    pub gradient: Gradient,
    pub hover_gradient: Gradient,
    pub border_radius: u8,
}

/// Paper elevation shadows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaperStyle {
    pub elevation_low: Shadow,
    pub elevation_high: Shadow,
}

/// Card style rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStyle {
    pub background: Rgb,
    pub border_radius: u8,
    /// Accent strip revealed on hover along the card's top edge.
    pub accent_strip: Gradient,
}

/// Authored per-component style overrides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentOverrides {
    pub app_bar: AppBarStyle,
    pub button_primary: ButtonStyle,
    pub button_secondary: ButtonStyle,
    pub paper: PaperStyle,
    pub card: CardStyle,
}

/// The complete derived token bundle consumed by the view layer.
///
/// Newly constructed on every [`derive`] call and owned by the caller;
/// nothing mutates a `Theme` after it is returned.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub palette: Palette,
    pub typography: Typography,
    pub shape: Shape,
    pub components: ComponentOverrides,
}

// ---------------------------------------------------------------------------
// Authored constants
// ---------------------------------------------------------------------------

// Accent trios are shared by both modes; only backgrounds, text, and the
// gradient direction of component overrides differ between the two tables.
const PRIMARY: PaletteEntry = PaletteEntry::with_contrast(
    Rgb::new(0xFF, 0x6F, 0x00),
    Rgb::new(0xFF, 0x9E, 0x40),
    Rgb::new(0xE6, 0x51, 0x00),
    BLACK,
);
const SECONDARY: PaletteEntry = PaletteEntry::with_contrast(
    Rgb::new(0x67, 0x3A, 0xB7),
    Rgb::new(0x95, 0x75, 0xCD),
    Rgb::new(0x51, 0x2D, 0xA8),
    WHITE,
);
const ERROR: PaletteEntry = PaletteEntry::new(
    Rgb::new(0xC6, 0x28, 0x28),
    Rgb::new(0xE5, 0x39, 0x35),
    Rgb::new(0xB7, 0x1C, 0x1C),
);
const WARNING: PaletteEntry = PaletteEntry::new(
    Rgb::new(0xFF, 0xC1, 0x07),
    Rgb::new(0xFF, 0xD5, 0x4F),
    Rgb::new(0xFF, 0xA0, 0x00),
);
const INFO: PaletteEntry = PaletteEntry::new(
    Rgb::new(0x15, 0x65, 0xC0),
    Rgb::new(0x42, 0xA5, 0xF5),
    Rgb::new(0x0D, 0x47, 0xA1),
);
const SUCCESS: PaletteEntry = PaletteEntry::new(
    Rgb::new(0x43, 0xA0, 0x47),
    Rgb::new(0x66, 0xBB, 0x6A),
    Rgb::new(0x2E, 0x7D, 0x32),
);

const DARK_CARD_BG: Rgb = Rgb::new(0x2D, 0x2D, 0x2D);
const LIGHT_CARD_BG: Rgb = Rgb::new(0xFA, 0xFA, 0xFA);

fn dark_palette() -> Palette {
    Palette {
        primary: PRIMARY,
        secondary: SECONDARY,
        error: ERROR,
        warning: WARNING,
        info: INFO,
        success: SUCCESS,
        background: BackgroundPalette {
            default: Rgb::new(0x12, 0x12, 0x12),
            paper: Rgb::new(0x1E, 0x1E, 0x1E),
        },
        text: TextPalette {
            primary: Rgb::new(0xFF, 0xFF, 0xFF),
            secondary: Rgb::new(0xB0, 0xB0, 0xB0),
        },
    }
}

fn light_palette() -> Palette {
    Palette {
        primary: PRIMARY,
        secondary: SECONDARY,
        error: ERROR,
        warning: WARNING,
        info: INFO,
        success: SUCCESS,
        background: BackgroundPalette {
            default: Rgb::new(0xF5, 0xF5, 0xF5),
            paper: Rgb::new(0xFF, 0xFF, 0xFF),
        },
        text: TextPalette {
            primary: Rgb::new(0x21, 0x21, 0x21),
            secondary: Rgb::new(0x75, 0x75, 0x75),
        },
    }
}

fn typography() -> Typography {
    Typography {
        font_family: "'Poppins', 'Roboto', sans-serif",
        headings: [
            HeadingStyle {
                weight: 700,
                letter_spacing_em: -0.01,
            },
            HeadingStyle {
                weight: 600,
                letter_spacing_em: -0.005,
            },
            HeadingStyle {
                weight: 600,
                letter_spacing_em: 0.0,
            },
            HeadingStyle {
                weight: 600,
                letter_spacing_em: 0.0,
            },
            HeadingStyle {
                weight: 500,
                letter_spacing_em: 0.0,
            },
            HeadingStyle {
                weight: 500,
                letter_spacing_em: 0.0,
            },
        ],
        button_weight: 600,
        button_uppercase: false,
    }
}

fn dark_components() -> ComponentOverrides {
    ComponentOverrides {
        app_bar: AppBarStyle {
            gradient: Gradient {
                start: PRIMARY.dark,
                end: INFO.dark,
                angle_deg: 90,
            },
            shadow: Shadow {
                y_offset: 4,
                blur: 20,
                alpha: 0.5,
            },
        },
        button_primary: ButtonStyle {
            gradient: Gradient {
                start: PRIMARY.main,
                end: PRIMARY.dark,
                angle_deg: 135,
            },
            hover_gradient: Gradient {
                start: PRIMARY.dark,
                end: INFO.dark,
                angle_deg: 135,
            },
            border_radius: 8,
        },
        button_secondary: ButtonStyle {
            gradient: Gradient {
                start: INFO.main,
                end: INFO.dark,
                angle_deg: 135,
            },
            hover_gradient: Gradient {
                start: INFO.dark,
                end: SECONDARY.dark,
                angle_deg: 135,
            },
            border_radius: 8,
        },
        paper: PaperStyle {
            elevation_low: Shadow {
                y_offset: 2,
                blur: 10,
                alpha: 0.5,
            },
            elevation_high: Shadow {
                y_offset: 4,
                blur: 20,
                alpha: 0.5,
            },
        },
        card: CardStyle {
            background: DARK_CARD_BG,
            border_radius: 16,
            accent_strip: Gradient {
                start: PRIMARY.main,
                end: SECONDARY.main,
                angle_deg: 90,
            },
        },
    }
}

fn light_components() -> ComponentOverrides {
    ComponentOverrides {
        app_bar: AppBarStyle {
            gradient: Gradient {
                start: PRIMARY.light,
                end: INFO.light,
                angle_deg: 90,
            },
            shadow: Shadow {
                y_offset: 4,
                blur: 20,
                alpha: 0.1,
            },
        },
        button_primary: ButtonStyle {
            gradient: Gradient {
                start: PRIMARY.light,
                end: PRIMARY.main,
                angle_deg: 135,
            },
            hover_gradient: Gradient {
                start: PRIMARY.main,
                end: INFO.main,
                angle_deg: 135,
            },
            border_radius: 8,
        },
        button_secondary: ButtonStyle {
            gradient: Gradient {
                start: INFO.light,
                end: INFO.main,
                angle_deg: 135,
            },
            hover_gradient: Gradient {
                start: INFO.main,
                end: SECONDARY.main,
                angle_deg: 135,
            },
            border_radius: 8,
        },
        paper: PaperStyle {
            elevation_low: Shadow {
                y_offset: 2,
                blur: 10,
                alpha: 0.1,
            },
            elevation_high: Shadow {
                y_offset: 4,
                blur: 20,
                alpha: 0.1,
            },
        },
        card: CardStyle {
            background: LIGHT_CARD_BG,
            border_radius: 16,
            accent_strip: Gradient {
                start: PRIMARY.main,
                end: SECONDARY.main,
                angle_deg: 90,
            },
        },
    }
}

/// Derive the full theme bundle for one mode.
///
/// Pure, total, and deterministic: two calls with the same mode yield
/// structurally equal themes, and every palette role is always populated.
pub fn derive(mode: ThemeMode) -> Theme {
    let (palette, components) = match mode {
        ThemeMode::Dark => (dark_palette(), dark_components()),
        ThemeMode::Light => (light_palette(), light_components()),
    };
    Theme {
        mode,
        palette,
        typography: typography(),
        shape: Shape { border_radius: 12 },
        components,
    }
}
