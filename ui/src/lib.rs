//! # Lumen
//!
//! Appearance resolution engine for desktop applications. Given the user's
//! appearance settings and the host's live light/dark setting, it answers
//! which color, icon and font applies right now, falling back from a custom
//! theme file to an embedded default theme to the host's built-in values.
//!
//! ## Modules
//!
//! - [`theme`] - Theme files, color/icon/font resolution and the [`ThemeContext`]
//! - [`config`] - Configuration loading and the shared [`config::ConfigHandle`]
//! - [`error`] - Error types
//! - [`logger`] - Logging setup
//! - [`validation`] - The [`Validator`] trait

pub mod config;
pub mod error;
pub mod logger;
pub mod theme;
pub mod validation;

pub use error::{AppError, AppResult};
pub use theme::ThemeContext;
pub use validation::Validator;
