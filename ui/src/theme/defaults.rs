use crate::theme::loader::decode_theme_file;
use crate::theme::types::{ColorSet, ThemeFile};
use std::sync::Arc;

/// Source of the embedded baseline theme.
pub const DEFAULT_THEME_TOML: &str = include_str!("../../themes/default.toml");

const DEFAULT_THEME_SOURCE: &str = "<embedded>/default.toml";

/// Holds the embedded baseline theme, used whenever no theme file is
/// configured, the configured one fails to load, or it lacks the current
/// variant.
///
/// The returned theme always supports both variants.
#[derive(Debug, Clone)]
pub struct DefaultThemeProvider {
    theme: Arc<ThemeFile>,
}

impl DefaultThemeProvider {
    pub fn new() -> Self {
        let theme = match decode_theme_file(DEFAULT_THEME_TOML, DEFAULT_THEME_SOURCE) {
            Ok(theme) => theme,
            Err(e) => {
                log::error!("Embedded default theme is broken, using host colors only: {e}");
                Self::empty_theme()
            }
        };

        Self {
            theme: Arc::new(ThemeFile {
                supports_light: true,
                supports_dark: true,
                ..theme
            }),
        }
    }

    pub fn theme(&self) -> Arc<ThemeFile> {
        Arc::clone(&self.theme)
    }

    fn empty_theme() -> ThemeFile {
        ThemeFile {
            source_path: DEFAULT_THEME_SOURCE.to_string(),
            display_name: "Default".to_string(),
            version: None,
            light_colors: ColorSet::new(),
            dark_colors: ColorSet::new(),
            supports_light: true,
            supports_dark: true,
        }
    }
}

impl Default for DefaultThemeProvider {
    fn default() -> Self {
        Self::new()
    }
}
