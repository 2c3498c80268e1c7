use crate::error::{AppError, AppResult};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::sync::{Arc, PoisonError, RwLock};

pub mod app;
pub mod appearance;
pub mod validation;

pub use app::AppConfig;
pub use appearance::AppearanceConfig;
pub use validation::ConfigValidationError;

/// Configuration file read when none is given on the command line
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Prefix for environment overrides, e.g. `LUMEN_APPEARANCE__THEME_FILE`
pub const ENV_PREFIX: &str = "LUMEN";

/// Load configuration from `path` (or [`DEFAULT_CONFIG_FILE`]) and the environment.
///
/// An explicitly named file must exist; the default file is optional so
/// the binary runs with built-in defaults.
pub fn load_config(path: Option<&str>) -> AppResult<AppConfig> {
    dotenv::dotenv().ok();

    let file_source = match path {
        Some(path) => File::with_name(path).required(true),
        None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };
    let env_source = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__");

    let config = Config::builder()
        .add_source(file_source)
        .add_source(env_source) // environment entries override file values when present
        .build()
        .map_err(|e| {
            AppError::Config(format!(
                "Configuration loading failed: {e}. Please check your config file and environment variables."
            ))
        })?;

    config
        .try_deserialize::<AppConfig>()
        .map_err(|e| AppError::Config(format!("Failed to deserialize config: {e}")))
}

/// Shared, mutable appearance configuration.
///
/// Cloning yields another handle to the same settings; the resolution
/// layer takes a snapshot at every call, so writes from any thread are
/// visible on the next lookup.
#[derive(Debug, Clone, Default)]
pub struct ConfigHandle {
    inner: Arc<RwLock<AppearanceConfig>>,
}

impl ConfigHandle {
    pub fn new(config: AppearanceConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Copy of the current settings
    pub fn snapshot(&self) -> AppearanceConfig {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Mutate the settings in place
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut AppearanceConfig),
    {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard);
    }

    pub fn set(&self, config: AppearanceConfig) {
        self.update(|current| *current = config);
    }
}

/// Additional logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn new(level: Option<String>, file: Option<String>) -> Self {
        Self { level, file }
    }

    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}
