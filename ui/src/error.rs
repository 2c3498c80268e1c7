use thiserror::Error;

/// Errors produced while reading, parsing or validating a theme file.
///
/// None of these are fatal: the resolution layer logs them and falls back
/// to the embedded default theme. They carry owned strings so that a failed
/// load can be cached next to successful ones and handed out repeatedly.
///
/// # Error Categories
///
/// - [`ThemeError::Read`] - the file could not be read from disk
/// - [`ThemeError::Parse`] - the file is not valid TOML or has a malformed section
/// - [`ThemeError::Invalid`] - the document parsed but failed validation
///
/// # Examples
///
/// ```no_run
/// use lumen::error::ThemeError;
/// use lumen::theme::loader::ThemeFileStore;
///
/// let store = ThemeFileStore::new("themes");
/// match store.load("nord.toml") {
///     Ok(theme) => println!("loaded {}", theme.display_name),
///     Err(ThemeError::Read { path, .. }) => eprintln!("missing theme {path}"),
///     Err(e) => eprintln!("broken theme: {e}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("Failed to read theme file '{path}': {reason}")]
    Read { path: String, reason: String },
    #[error("Failed to parse theme file '{path}': {reason}")]
    Parse { path: String, reason: String },
    #[error("Invalid theme file '{path}': {reason}")]
    Invalid { path: String, reason: String },
}

impl ThemeError {
    /// Path of the theme file the error refers to.
    pub fn path(&self) -> &str {
        match self {
            ThemeError::Read { path, .. }
            | ThemeError::Parse { path, .. }
            | ThemeError::Invalid { path, .. } => path,
        }
    }
}

/// Errors produced while loading a user supplied font file.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("Unsupported font format for '{path}': only .{expected} fonts are supported")]
    UnsupportedFormat {
        path: String,
        expected: &'static str,
    },
    #[error("Failed to read font file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Application-level error used by the configuration layer and the CLI.
///
/// The resolution surface itself never returns this type; it is for the
/// outer edges of the program where failing fast is acceptable (a missing
/// `config.toml`, an unreadable log file, a bad CLI argument).
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading and validation errors.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Font(#[from] FontError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type AppResult<T> = Result<T, AppError>;
