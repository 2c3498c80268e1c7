use crate::config::AppearanceConfig;
use crate::theme::appearance::{Host, effective_variant};
use crate::theme::color::Color;
use crate::theme::defaults::DefaultThemeProvider;
use crate::theme::loader::ThemeFileStore;
use crate::theme::types::{ColorName, ThemeFile, Variant};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Which tier of the fallback chain produced a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSource {
    /// The configured theme file.
    Custom,
    /// The embedded default theme, standing in for a missing, broken or
    /// variant-incomplete configured theme.
    Default,
    /// The host's built-in color.
    Baseline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColor {
    pub color: Color,
    pub source: ColorSource,
}

/// Resolves semantic color names through custom theme, default theme and
/// host baseline, in that order.
pub struct ColorResolver<'a> {
    store: &'a ThemeFileStore,
    defaults: &'a DefaultThemeProvider,
    host: &'a dyn Host,
}

impl<'a> ColorResolver<'a> {
    pub fn new(
        store: &'a ThemeFileStore,
        defaults: &'a DefaultThemeProvider,
        host: &'a dyn Host,
    ) -> Self {
        Self {
            store,
            defaults,
            host,
        }
    }

    pub fn resolve(&self, name: ColorName, config: &AppearanceConfig) -> Color {
        self.resolve_with_source(name, config).color
    }

    pub fn resolve_with_source(&self, name: ColorName, config: &AppearanceConfig) -> ResolvedColor {
        let variant = effective_variant(config, self.host);
        let (theme, source) = self.theme_for(config, variant);
        self.lookup(&theme, source, name, variant)
    }

    /// Every semantic color for the current configuration.
    ///
    /// The theme is chosen once for the whole palette.
    pub fn palette(&self, config: &AppearanceConfig) -> BTreeMap<ColorName, ResolvedColor> {
        let variant = effective_variant(config, self.host);
        let (theme, source) = self.theme_for(config, variant);
        ColorName::ALL
            .iter()
            .map(|name| (*name, self.lookup(&theme, source, *name, variant)))
            .collect()
    }

    /// Theme that supplies colors for `variant`.
    ///
    /// A theme that does not declare the variant is replaced as a whole by
    /// the default theme, never merged with it.
    pub fn theme_for(
        &self,
        config: &AppearanceConfig,
        variant: Variant,
    ) -> (Arc<ThemeFile>, ColorSource) {
        let active = self.active_theme(config);
        match active {
            Some(theme) if theme.supports_variant(variant) => (theme, ColorSource::Custom),
            Some(theme) => {
                log::debug!(
                    "Theme '{}' does not support {variant}, using default theme",
                    theme.display_name
                );
                (self.defaults.theme(), ColorSource::Default)
            }
            None => (self.defaults.theme(), ColorSource::Default),
        }
    }

    /// The configured theme file, or `None` when none is configured or it
    /// failed to load.
    fn active_theme(&self, config: &AppearanceConfig) -> Option<Arc<ThemeFile>> {
        if config.theme_file.is_empty() {
            return None;
        }
        // Failures are logged by the store when they are first seen
        self.store.load(&config.theme_file).ok()
    }

    fn lookup(
        &self,
        theme: &ThemeFile,
        source: ColorSource,
        name: ColorName,
        variant: Variant,
    ) -> ResolvedColor {
        match theme.colors(variant).color(name) {
            Some(color) => ResolvedColor { color, source },
            None => ResolvedColor {
                color: self.host.default_color(name, variant),
                source: ColorSource::Baseline,
            },
        }
    }
}
