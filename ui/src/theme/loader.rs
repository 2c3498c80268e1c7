use crate::error::ThemeError;
use crate::theme::types::{ColorSet, ThemeDocument, ThemeFile, Variant};
use crate::theme::validation::{
    THEME_FILE_EXTENSION, ThemeDocumentValidator, ThemePathValidator, ThemeValidationError,
};
use crate::validation::Validator;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Outcome of the last load, keyed by the path string that was requested.
struct CachedTheme {
    key: String,
    outcome: Result<Arc<ThemeFile>, ThemeError>,
}

/// Theme file store responsible for loading theme definitions from the filesystem.
///
/// Holds a single-slot cache keyed by the requested path string. Asking for
/// the same path again never touches the disk, even if the file was edited
/// in place; asking for a different path replaces the slot.
pub struct ThemeFileStore {
    themes_dir: PathBuf,
    cache: Mutex<Option<CachedTheme>>,
}

impl ThemeFileStore {
    pub fn new(themes_dir: impl Into<PathBuf>) -> Self {
        Self {
            themes_dir: themes_dir.into(),
            cache: Mutex::new(None),
        }
    }

    pub fn themes_dir(&self) -> &Path {
        &self.themes_dir
    }

    /// Load the theme at `path`, relative to the themes directory.
    ///
    /// The lock is held across the read so concurrent first loads of the
    /// same path read the file only once.
    pub fn load(&self, path: &str) -> Result<Arc<ThemeFile>, ThemeError> {
        let mut cache = self.lock_cache();

        if let Some(cached) = cache.as_ref() {
            if cached.key == path {
                return cached.outcome.clone();
            }
        }

        let full_path = self.themes_dir.join(path);
        let outcome = read_theme_file(&full_path).map(Arc::new);
        match &outcome {
            Ok(theme) => log::info!(
                "Loaded theme '{}' from {}",
                theme.display_name,
                full_path.display()
            ),
            Err(e) => log::warn!("Failed to load theme file {path:?}: {e}"),
        }

        *cache = Some(CachedTheme {
            key: path.to_string(),
            outcome: outcome.clone(),
        });
        outcome
    }

    /// Path string currently held in the cache slot, if any.
    pub fn cached_path(&self) -> Option<String> {
        self.lock_cache().as_ref().map(|cached| cached.key.clone())
    }

    /// Drop the cached theme so the next load reads from disk.
    pub fn clear(&self) {
        *self.lock_cache() = None;
    }

    /// Map of theme file name to display name for the themes directory.
    pub fn list_available(&self) -> BTreeMap<String, String> {
        list_theme_files(&self.themes_dir)
    }

    fn lock_cache(&self) -> MutexGuard<'_, Option<CachedTheme>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Enumerate the `.toml` files directly inside `dir` and parse each one.
///
/// Files that fail to parse are left out of the result; a missing or
/// unreadable directory yields an empty map.
pub fn list_theme_files(dir: &Path) -> BTreeMap<String, String> {
    let mut result = BTreeMap::new();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Failed to read themes directory '{}': {e}", dir.display());
            return result;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some(THEME_FILE_EXTENSION)
        {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        match read_theme_file(&path) {
            Ok(theme) => {
                result.insert(file_name.to_string(), theme.display_name);
            }
            Err(e) => log::debug!("Skipping theme file {file_name:?}: {e}"),
        }
    }

    result
}

/// Read and decode a theme file from disk.
pub fn read_theme_file(path: &Path) -> Result<ThemeFile, ThemeError> {
    let display = path.display().to_string();

    ThemePathValidator
        .validate(path)
        .map_err(|e| ThemeError::Read {
            path: display.clone(),
            reason: e.to_string(),
        })?;

    let content = fs::read_to_string(path).map_err(|e| ThemeError::Read {
        path: display.clone(),
        reason: e.to_string(),
    })?;

    decode_theme_file(&content, &display)
}

/// Decode theme file contents. `source_path` is recorded on the result and
/// used in error messages.
pub fn decode_theme_file(content: &str, source_path: &str) -> Result<ThemeFile, ThemeError> {
    let document: ThemeDocument = toml::from_str(content).map_err(|e| ThemeError::Parse {
        path: source_path.to_string(),
        reason: e.to_string(),
    })?;

    ThemeDocumentValidator
        .validate(&document)
        .map_err(|e: ThemeValidationError| ThemeError::Invalid {
            path: source_path.to_string(),
            reason: e.to_string(),
        })?;

    let supports = |variant: Variant| {
        document
            .theme
            .supported_modes
            .iter()
            .any(|mode| mode == variant.as_str())
    };
    let supports_light = supports(Variant::Light);
    let supports_dark = supports(Variant::Dark);

    let (light_colors, unknown_light) = ColorSet::from_raw(document.light_colors);
    let (dark_colors, unknown_dark) = ColorSet::from_raw(document.dark_colors);
    for key in unknown_light.iter().chain(unknown_dark.iter()) {
        log::debug!("Ignoring unknown color '{key}' in theme file {source_path:?}");
    }

    Ok(ThemeFile {
        source_path: source_path.to_string(),
        display_name: document.theme.name,
        version: document.theme.version,
        light_colors,
        dark_colors,
        supports_light,
        supports_dark,
    })
}
