use crate::config::{AppearanceConfig, ConfigHandle};
use crate::theme::appearance::{Host, effective_variant};
use crate::theme::color::Color;
use crate::theme::defaults::DefaultThemeProvider;
use crate::theme::fonts::{FontLoader, FontStyle};
use crate::theme::icons::{IconName, IconRegistry};
use crate::theme::loader::ThemeFileStore;
use crate::theme::resolver::{ColorResolver, ResolvedColor};
use crate::theme::types::{ColorName, Resource, ThemeFile, Variant};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Owns every cache and collaborator the appearance engine needs.
///
/// Create one at the composition root and share it by reference (or in an
/// `Arc`). Independent instances do not share state, so tests can build one
/// per case. All lookups read the current configuration from the
/// [`ConfigHandle`] and never fail; problems are logged and resolved by
/// falling back.
pub struct ThemeContext {
    config: ConfigHandle,
    host: Arc<dyn Host>,
    store: ThemeFileStore,
    defaults: DefaultThemeProvider,
    icons: IconRegistry,
    fonts: FontLoader,
}

impl ThemeContext {
    pub fn new(config: ConfigHandle, themes_dir: impl Into<PathBuf>, host: Arc<dyn Host>) -> Self {
        Self {
            config,
            host,
            store: ThemeFileStore::new(themes_dir),
            defaults: DefaultThemeProvider::new(),
            icons: IconRegistry::embedded(),
            fonts: FontLoader::new(),
        }
    }

    /// Replace the icon table, e.g. with application specific artwork.
    pub fn with_icons(mut self, icons: IconRegistry) -> Self {
        self.icons = icons;
        self
    }

    pub fn config(&self) -> &ConfigHandle {
        &self.config
    }

    pub fn store(&self) -> &ThemeFileStore {
        &self.store
    }

    pub fn fonts(&self) -> &FontLoader {
        &self.fonts
    }

    /// Light or dark, as it applies right now.
    pub fn variant(&self) -> Variant {
        effective_variant(&self.config.snapshot(), self.host.as_ref())
    }

    pub fn color(&self, name: ColorName) -> Color {
        self.resolver().resolve(name, &self.config.snapshot())
    }

    /// Like [`ThemeContext::color`], also reporting which tier answered.
    pub fn resolve_color(&self, name: ColorName) -> ResolvedColor {
        self.resolver()
            .resolve_with_source(name, &self.config.snapshot())
    }

    /// Lookup by semantic name string; `None` for names that do not exist.
    pub fn color_by_name(&self, name: &str) -> Option<Color> {
        match name.parse::<ColorName>() {
            Ok(name) => Some(self.color(name)),
            Err(e) => {
                log::debug!("{e}");
                None
            }
        }
    }

    /// Every semantic color for the current configuration.
    pub fn palette(&self) -> BTreeMap<ColorName, ResolvedColor> {
        self.resolver().palette(&self.config.snapshot())
    }

    /// The theme currently supplying colors.
    pub fn active_theme(&self) -> Arc<ThemeFile> {
        let config = self.config.snapshot();
        let variant = effective_variant(&config, self.host.as_ref());
        self.resolver().theme_for(&config, variant).0
    }

    pub fn icon(&self, id: IconName) -> Resource {
        self.icons.resolve(id, self.variant())
    }

    /// Font for `style`.
    ///
    /// Bold falls back to the custom normal font, and either falls back to
    /// the host font. A custom font that fails to load is reported once,
    /// its setting is cleared, and it is not retried.
    pub fn font(&self, style: FontStyle) -> Resource {
        if let Some(font) = self.custom_font(style) {
            return font;
        }
        if style == FontStyle::Bold {
            if let Some(font) = self.custom_font(FontStyle::Normal) {
                return font;
            }
        }
        self.host.default_font(style)
    }

    /// Theme files available in the themes directory, file name to display name.
    pub fn list_themes(&self) -> BTreeMap<String, String> {
        self.store.list_available()
    }

    /// Drop cached theme and fonts. Configuration is left untouched.
    pub fn reset(&self) {
        self.store.clear();
        self.fonts.clear();
        log::debug!("Theme context caches cleared");
    }

    fn resolver(&self) -> ColorResolver<'_> {
        ColorResolver::new(&self.store, &self.defaults, self.host.as_ref())
    }

    fn custom_font(&self, style: FontStyle) -> Option<Resource> {
        let config = self.config.snapshot();
        let path = font_path(&config, style);

        match self.fonts.load(style, path) {
            Ok(font) => font,
            Err(e) => {
                log::error!("Error loading custom {style} font: {e}");
                self.config
                    .update(|config| clear_font_path(config, style, path));
                None
            }
        }
    }
}

fn font_path(config: &AppearanceConfig, style: FontStyle) -> &str {
    match style {
        FontStyle::Normal => &config.normal_font,
        FontStyle::Bold => &config.bold_font,
    }
}

/// Clear the setting only if it still names the path that failed.
fn clear_font_path(config: &mut AppearanceConfig, style: FontStyle, failed: &str) {
    let setting = match style {
        FontStyle::Normal => &mut config.normal_font,
        FontStyle::Bold => &mut config.bold_font,
    };
    if setting.as_str() == failed {
        setting.clear();
    }
}
