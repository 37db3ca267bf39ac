pub mod colors;
pub mod palette;
pub mod signal;

pub use colors::Color;
pub use palette::{ColorStop, Palette};
pub use signal::ThemeSignal;

use pulse_config::ThemeConfig;
use pulse_core::ThemeMode;

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible: invalid color strings fall
/// back to safe defaults.
#[derive(Debug, Clone)]
pub struct Theme {
    pub light_background: Color,
    pub light_foreground: Color,
    pub dark_background:  Color,
    pub dark_foreground:  Color,
    pub muted:            Color,
    pub font_size:        f32,
    pub label_size:       f32,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        let fallback = ThemeConfig::default();
        let parse = |value: &str, default: &str| {
            Color::from_hex(value)
                .or_else(|| Color::from_hex(default))
                .unwrap_or(Color::BLACK)
        };

        Self {
            light_background: parse(&cfg.light_background, &fallback.light_background),
            light_foreground: parse(&cfg.light_foreground, &fallback.light_foreground),
            dark_background:  parse(&cfg.dark_background, &fallback.dark_background),
            dark_foreground:  parse(&cfg.dark_foreground, &fallback.dark_foreground),
            muted:            parse(&cfg.muted, &fallback.muted),
            font_size:        cfg.font_size,
            label_size:       cfg.label_size,
        }
    }

    pub fn background(&self, mode: ThemeMode) -> Color {
        match mode {
            ThemeMode::Light => self.light_background,
            ThemeMode::Dark  => self.dark_background,
        }
    }

    pub fn foreground(&self, mode: ThemeMode) -> Color {
        match mode {
            ThemeMode::Light => self.light_foreground,
            ThemeMode::Dark  => self.dark_foreground,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}
