//! # Appearance Engine
//!
//! Resolves which color, icon and font applies at any moment from the
//! user's appearance settings and the host's live light/dark setting.
//!
//! ## Architecture
//!
//! - **[`ThemeContext`]** - Composition root owning every cache; the only
//!   type the rendering layer needs to hold
//! - **[`ThemeFileStore`](loader::ThemeFileStore)** - Loads TOML theme files
//!   with a single-slot cache keyed by path string
//! - **[`DefaultThemeProvider`](defaults::DefaultThemeProvider)** - Embedded
//!   baseline theme supporting both variants
//! - **[`effective_variant`](appearance::effective_variant)** - Light/Dark
//!   from the configured mode or the [`Host`](appearance::Host)
//! - **[`ColorResolver`](resolver::ColorResolver)** - Custom theme, then
//!   default theme, then host baseline
//! - **[`IconRegistry`](icons::IconRegistry)** - Light/dark asset pairs per
//!   semantic icon
//! - **[`FontLoader`](fonts::FontLoader)** - Lazily loaded custom fonts with
//!   a no-retry failure state
//!
//! ## Basic Usage
//!
//! ```no_run
//! use lumen::config::{AppearanceConfig, ConfigHandle};
//! use lumen::theme::{ThemeContext, appearance::SystemHost, types::ColorName};
//! use std::sync::Arc;
//!
//! let config = ConfigHandle::new(AppearanceConfig {
//!     appearance: "Auto".to_string(),
//!     theme_file: "nord.toml".to_string(),
//!     ..AppearanceConfig::default()
//! });
//! let theme = ThemeContext::new(config.clone(), "themes", Arc::new(SystemHost::new()));
//!
//! let primary = theme.color(ColorName::Primary);
//!
//! // Settings change from anywhere; the next lookup reflects it
//! config.update(|c| c.appearance = "Light".to_string());
//! let light_primary = theme.color(ColorName::Primary);
//! ```
//!
//! ## Error Handling and Fallbacks
//!
//! Nothing in the resolution surface fails:
//!
//! - **Missing or broken theme file** - Default theme, logged once per path
//! - **Theme without the current variant** - Default theme as a whole
//! - **Empty or invalid color** - Host baseline color for that name
//! - **Unsupported or unreadable font** - Host font, setting cleared, no retry
//!
//! ## Known Limitation
//!
//! The theme cache is keyed by the configured path string only. Editing a
//! theme file in place is not picked up until the configured path changes
//! or [`ThemeContext::reset`] is called.

pub mod appearance;
pub mod color;
pub mod defaults;
pub mod fonts;
pub mod icons;
pub mod loader;
pub mod manager;
pub mod resolver;
pub mod types;
pub mod validation;

pub use color::Color;
pub use manager::ThemeContext;
pub use types::{ColorName, Variant};
