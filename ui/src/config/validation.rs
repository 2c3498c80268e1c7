/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Unknown appearance mode: {configured:?} (expected \"Light\", \"Dark\" or \"Auto\")")]
    UnknownAppearance { configured: String },
    #[error("Unsupported font for {setting}: {configured:?} (only .ttf fonts are supported)")]
    UnsupportedFont {
        setting: &'static str,
        configured: String,
    },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::UnknownAppearance { configured } => {
                format!(
                    "Unknown appearance mode!\n\n\
                    Your configured value: {configured}\n\
                    Valid values: Light, Dark, Auto (case-sensitive)\n\n\
                    The default mode (Dark) will be used instead."
                )
            }
            ConfigValidationError::UnsupportedFont {
                setting,
                configured,
            } => {
                format!(
                    "Unsupported font file!\n\n\
                    Setting: {setting}\n\
                    Your configured value: {configured}\n\n\
                    Only .ttf fonts are supported; the default font will be used instead."
                )
            }
        }
    }
}
