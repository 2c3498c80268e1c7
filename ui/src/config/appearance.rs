use serde::{Deserialize, Serialize};

/// User-facing appearance settings.
///
/// Read at every resolution call. Empty strings mean "not set": the default
/// appearance mode, the embedded default theme, the host fonts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// `"Light"`, `"Dark"` or `"Auto"` (case-sensitive)
    pub appearance: String,
    /// Theme file path relative to the themes directory
    pub theme_file: String,
    pub normal_font: String,
    pub bold_font: String,
}
