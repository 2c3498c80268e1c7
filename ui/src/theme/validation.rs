use crate::theme::types::{ThemeDocument, Variant};
use crate::validation::Validator;
use std::path::Path;

/// File extension theme definitions must carry.
pub const THEME_FILE_EXTENSION: &str = "toml";

/// Validation errors specific to theme files
///
/// `Display` is a one-line reason for log entries; [`user_message`] is the
/// longer text for a settings UI.
///
/// [`user_message`]: ThemeValidationError::user_message
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeValidationError {
    #[error("{reason}")]
    InvalidThemePath { path: String, reason: String },
    #[error("expected a .{expected} file")]
    InvalidFileExtension { path: String, expected: String },
    #[error("missing theme metadata field {field}")]
    MissingMetadata { field: String },
    #[error("no supported modes declared")]
    NoSupportedModes,
    #[error("unknown supported mode {mode:?}")]
    UnknownSupportedMode { mode: String },
}

impl ThemeValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ThemeValidationError::InvalidThemePath { path, reason } => {
                format!(
                    "Invalid theme path: '{path}'\n\n\
                    Reason: {reason}\n\n\
                    Please ensure the path exists and is accessible."
                )
            }
            ThemeValidationError::InvalidFileExtension { path, expected } => {
                format!(
                    "Invalid file extension for: '{path}'\n\n\
                    Expected: '{expected}' files\n\n\
                    Please ensure theme files have the correct extension."
                )
            }
            ThemeValidationError::MissingMetadata { field } => {
                format!(
                    "Missing theme metadata: '{field}'\n\n\
                    Please ensure the [Theme] section contains all required fields."
                )
            }
            ThemeValidationError::NoSupportedModes => {
                "Theme declares no supported modes\n\n\
                Please list at least one of \"Light\" or \"Dark\" in SupportedModes."
                    .to_string()
            }
            ThemeValidationError::UnknownSupportedMode { mode } => {
                format!(
                    "Unknown supported mode: '{mode}'\n\n\
                    SupportedModes may only contain \"Light\" and \"Dark\" (case-sensitive)."
                )
            }
        }
    }
}

/// Validator for theme file paths
pub struct ThemePathValidator;

impl Validator<Path> for ThemePathValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &Path) -> Result<(), Self::Error> {
        if !input.exists() {
            return Err(ThemeValidationError::InvalidThemePath {
                path: input.display().to_string(),
                reason: "Path does not exist".to_string(),
            });
        }

        if !input.is_file() {
            return Err(ThemeValidationError::InvalidThemePath {
                path: input.display().to_string(),
                reason: "Path is not a file".to_string(),
            });
        }

        if input.extension().and_then(|s| s.to_str()) != Some(THEME_FILE_EXTENSION) {
            return Err(ThemeValidationError::InvalidFileExtension {
                path: input.display().to_string(),
                expected: THEME_FILE_EXTENSION.to_string(),
            });
        }

        Ok(())
    }
}

/// Validator for a decoded theme document
pub struct ThemeDocumentValidator;

impl Validator<ThemeDocument> for ThemeDocumentValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &ThemeDocument) -> Result<(), Self::Error> {
        // Display names may contain spaces, only emptiness is checked
        if input.theme.name.trim().is_empty() {
            return Err(ThemeValidationError::MissingMetadata {
                field: "Name".to_string(),
            });
        }

        if input.theme.supported_modes.is_empty() {
            return Err(ThemeValidationError::NoSupportedModes);
        }

        if let Some(mode) = input
            .theme
            .supported_modes
            .iter()
            .find(|mode| Variant::from_name(mode).is_none())
        {
            return Err(ThemeValidationError::UnknownSupportedMode { mode: mode.clone() });
        }

        Ok(())
    }
}
