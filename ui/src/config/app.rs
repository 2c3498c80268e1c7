use super::{LoggingConfig, appearance::AppearanceConfig, validation::ConfigValidationError};
use crate::theme::fonts::FONT_FILE_EXTENSION;
use crate::theme::types::AppearanceMode;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    appearance: AppearanceConfig,
    theme_dir: Option<String>,
    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    pub fn new(appearance: AppearanceConfig, theme_dir: Option<String>) -> Self {
        Self {
            appearance,
            theme_dir,
            logging: LoggingConfig::default(),
        }
    }

    /// Check for settings that will be ignored at resolution time.
    ///
    /// None of these stop the application; they are reported so the user
    /// knows why a setting has no effect.
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        let mode = &self.appearance.appearance;
        if !mode.is_empty() && AppearanceMode::from_config(mode).as_str() != mode {
            errors.push(ConfigValidationError::UnknownAppearance {
                configured: mode.clone(),
            });
        }

        for (setting, path) in [
            ("normal_font", &self.appearance.normal_font),
            ("bold_font", &self.appearance.bold_font),
        ] {
            let extension = Path::new(path).extension().and_then(|s| s.to_str());
            if !path.is_empty() && extension != Some(FONT_FILE_EXTENSION) {
                errors.push(ConfigValidationError::UnsupportedFont {
                    setting,
                    configured: path.clone(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn appearance(&self) -> &AppearanceConfig {
        &self.appearance
    }

    pub fn appearance_mut(&mut self) -> &mut AppearanceConfig {
        &mut self.appearance
    }

    /// Directory theme files are looked up in.
    ///
    /// `theme_dir` when configured, otherwise `<config dir>/lumen/themes`,
    /// otherwise `themes` relative to the working directory.
    pub fn themes_dir(&self) -> PathBuf {
        if let Some(dir) = self.theme_dir.as_deref().filter(|d| !d.is_empty()) {
            return PathBuf::from(dir);
        }
        dirs::config_dir()
            .map(|dir| dir.join("lumen").join("themes"))
            .unwrap_or_else(|| PathBuf::from("themes"))
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(appearance: &str, normal_font: &str) -> AppConfig {
        AppConfig::new(
            AppearanceConfig {
                appearance: appearance.to_string(),
                normal_font: normal_font.to_string(),
                ..AppearanceConfig::default()
            },
            None,
        )
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(AppConfig::default().validate().is_ok());
        assert!(with("Auto", "/fonts/Inter.ttf").validate().is_ok());
    }

    #[test]
    fn test_validate_reports_ignored_settings() {
        let errors = with("dark", "/fonts/Inter.otf").validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(matches!(
            errors[0],
            ConfigValidationError::UnknownAppearance { .. }
        ));
        assert!(matches!(
            errors[1],
            ConfigValidationError::UnsupportedFont {
                setting: "normal_font",
                ..
            }
        ));
        assert!(errors[0].user_message().contains("Valid values: Light, Dark, Auto"));
    }

    #[test]
    fn test_explicit_themes_dir() {
        let config = AppConfig::new(AppearanceConfig::default(), Some("/srv/themes".to_string()));
        assert_eq!(config.themes_dir(), PathBuf::from("/srv/themes"));
    }
}
