use crate::error::FontError;
use crate::theme::types::Resource;
use crate::validation::Validator;
use std::fmt;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// The only font container accepted for custom fonts.
pub const FONT_FILE_EXTENSION: &str = "ttf";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Normal,
    Bold,
}

impl FontStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Bold => "bold",
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of one lazily loaded font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSlot {
    /// Nothing attempted yet.
    Empty,
    /// Loaded once, kept for the lifetime of the loader.
    Loaded(Resource),
    /// Loading `path` failed; it is not retried.
    Failed { path: String },
}

/// Validator for custom font paths (extension only, the file is read later)
pub struct FontPathValidator;

impl Validator<str> for FontPathValidator {
    type Error = FontError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        let extension = Path::new(input).extension().and_then(|s| s.to_str());
        if extension != Some(FONT_FILE_EXTENSION) {
            return Err(FontError::UnsupportedFormat {
                path: input.to_string(),
                expected: FONT_FILE_EXTENSION,
            });
        }
        Ok(())
    }
}

/// Lazily loads user supplied fonts, one slot per style.
///
/// A style is read at most once. After a failure the slot stays
/// [`FontSlot::Failed`] for that path so callers fall back without
/// repeated attempts.
#[derive(Debug)]
pub struct FontLoader {
    normal: Mutex<FontSlot>,
    bold: Mutex<FontSlot>,
}

impl FontLoader {
    pub fn new() -> Self {
        Self {
            normal: Mutex::new(FontSlot::Empty),
            bold: Mutex::new(FontSlot::Empty),
        }
    }

    /// Load the font for `style` from `path`, or return the cached one.
    ///
    /// Returns `Ok(None)` when `path` is empty or a previous attempt with the
    /// same path already failed. The slot lock is held across the read.
    pub fn load(&self, style: FontStyle, path: &str) -> Result<Option<Resource>, FontError> {
        let mut slot = self.lock_slot(style);

        match &*slot {
            FontSlot::Loaded(font) => return Ok(Some(font.clone())),
            FontSlot::Failed { path: failed } if failed == path => return Ok(None),
            _ => {}
        }
        if path.is_empty() {
            return Ok(None);
        }

        match read_font_file(style, path) {
            Ok(font) => {
                log::info!("Loaded custom {style} font from {path:?}");
                *slot = FontSlot::Loaded(font.clone());
                Ok(Some(font))
            }
            Err(e) => {
                *slot = FontSlot::Failed {
                    path: path.to_string(),
                };
                Err(e)
            }
        }
    }

    /// Current state of the slot for `style`.
    pub fn slot(&self, style: FontStyle) -> FontSlot {
        self.lock_slot(style).clone()
    }

    /// The cached font for `style`, if one was loaded.
    pub fn cached(&self, style: FontStyle) -> Option<Resource> {
        match &*self.lock_slot(style) {
            FontSlot::Loaded(font) => Some(font.clone()),
            _ => None,
        }
    }

    /// Forget every loaded or failed font.
    pub fn clear(&self) {
        *self.lock_slot(FontStyle::Normal) = FontSlot::Empty;
        *self.lock_slot(FontStyle::Bold) = FontSlot::Empty;
    }

    fn lock_slot(&self, style: FontStyle) -> MutexGuard<'_, FontSlot> {
        let slot = match style {
            FontStyle::Normal => &self.normal,
            FontStyle::Bold => &self.bold,
        };
        slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for FontLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn read_font_file(style: FontStyle, path: &str) -> Result<Resource, FontError> {
    FontPathValidator.validate(path)?;

    let content = std::fs::read(path).map_err(|source| FontError::Read {
        path: path.to_string(),
        source,
    })?;
    Ok(Resource::new(format!("{style}Font"), content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_path_validator() {
        let validator = FontPathValidator;
        assert!(validator.validate("/fonts/Inter.ttf").is_ok());
        assert!(validator.validate("/fonts/Inter.otf").is_err());
        assert!(validator.validate("/fonts/Inter.TTF").is_err());
        assert!(validator.validate("/fonts/ttf").is_err());
    }

    #[test]
    fn test_empty_path_loads_nothing() {
        let loader = FontLoader::new();
        assert!(matches!(loader.load(FontStyle::Normal, ""), Ok(None)));
        assert_eq!(loader.slot(FontStyle::Normal), FontSlot::Empty);
    }

    #[test]
    fn test_loaded_font_is_kept() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("Regular.ttf");
        std::fs::write(&path, b"font-bytes").expect("write");
        let path = path.to_string_lossy().to_string();

        let loader = FontLoader::new();
        let font = loader
            .load(FontStyle::Normal, &path)
            .expect("font should load")
            .expect("font should be present");
        assert_eq!(font.content(), b"font-bytes");

        // Gone from disk, still served from the slot
        std::fs::remove_file(&path).expect("remove");
        let again = loader.load(FontStyle::Normal, &path).expect("cached");
        assert_eq!(again, Some(font));
        assert_eq!(loader.cached(FontStyle::Bold), None);
    }

    #[test]
    fn test_missing_file_is_not_retried() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("Missing.ttf").to_string_lossy().to_string();

        let loader = FontLoader::new();
        assert!(matches!(
            loader.load(FontStyle::Bold, &path),
            Err(FontError::Read { .. })
        ));
        assert_eq!(loader.slot(FontStyle::Bold), FontSlot::Failed { path: path.clone() });

        // Creating the file afterwards does not trigger another attempt
        std::fs::write(&path, b"late").expect("write");
        assert!(matches!(loader.load(FontStyle::Bold, &path), Ok(None)));
    }
}
