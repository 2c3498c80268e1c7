use crate::config::AppearanceConfig;
use crate::theme::color::Color;
use crate::theme::fonts::FontStyle;
use crate::theme::types::{AppearanceMode, ColorName, Resource, Variant};
use std::sync::{PoisonError, RwLock};

/// Environment variable consulted by [`SystemHost`] for the live host appearance.
pub const SYSTEM_APPEARANCE_ENV: &str = "LUMEN_SYSTEM_APPEARANCE";

/// Facilities the engine needs from the host environment / toolkit.
///
/// `current_variant` must reflect the host's setting at call time; the
/// engine never caches it.
pub trait Host: Send + Sync {
    /// The host environment's current light/dark setting.
    fn current_variant(&self) -> Variant;

    /// Built-in color for `name` under `variant`; the fallback of last resort.
    fn default_color(&self, name: ColorName, variant: Variant) -> Color;

    /// Built-in font for `style`.
    fn default_font(&self, style: FontStyle) -> Resource;
}

/// Compute the effective variant for the current configuration.
///
/// Explicit `Light`/`Dark` are returned as is, `Auto` asks the host, and an
/// unrecognized value is treated as the default mode.
pub fn effective_variant(config: &AppearanceConfig, host: &dyn Host) -> Variant {
    match AppearanceMode::from_config(&config.appearance) {
        AppearanceMode::Light => Variant::Light,
        AppearanceMode::Dark => Variant::Dark,
        AppearanceMode::Auto => host.current_variant(),
    }
}

/// Host implementation used by the shipped binary.
///
/// Live appearance comes from a runtime override when one is set (for
/// example by a settings-change listener on another thread), otherwise from
/// [`SYSTEM_APPEARANCE_ENV`], defaulting to dark.
pub struct SystemHost {
    regular_font: Resource,
    bold_font: Resource,
    appearance_override: RwLock<Option<Variant>>,
}

impl SystemHost {
    pub fn new() -> Self {
        Self {
            regular_font: Resource::new("default-regular", Vec::<u8>::new()),
            bold_font: Resource::new("default-bold", Vec::<u8>::new()),
            appearance_override: RwLock::new(None),
        }
    }

    /// Replace the built-in fonts, e.g. with ones embedded by the application.
    pub fn with_fonts(mut self, regular: Resource, bold: Resource) -> Self {
        self.regular_font = regular;
        self.bold_font = bold;
        self
    }

    /// Pin the host appearance, or clear the pin with `None`.
    pub fn set_override(&self, variant: Option<Variant>) {
        *self
            .appearance_override
            .write()
            .unwrap_or_else(PoisonError::into_inner) = variant;
    }
}

impl Default for SystemHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for SystemHost {
    fn current_variant(&self) -> Variant {
        let pinned = *self
            .appearance_override
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(variant) = pinned {
            return variant;
        }

        std::env::var(SYSTEM_APPEARANCE_ENV)
            .ok()
            .and_then(|value| Variant::from_name(value.trim()))
            .unwrap_or(Variant::Dark)
    }

    fn default_color(&self, name: ColorName, variant: Variant) -> Color {
        baseline_color(name, variant)
    }

    fn default_font(&self, style: FontStyle) -> Resource {
        match style {
            FontStyle::Normal => self.regular_font.clone(),
            FontStyle::Bold => self.bold_font.clone(),
        }
    }
}

/// Built-in palette. `PageBackground` has no toolkit color of its own and
/// shares the `Background` value.
pub fn baseline_color(name: ColorName, variant: Variant) -> Color {
    match variant {
        Variant::Dark => baseline_dark(name),
        Variant::Light => baseline_light(name),
    }
}

fn baseline_dark(name: ColorName) -> Color {
    match name {
        ColorName::PageBackground | ColorName::Background => Color::rgb(0x17, 0x17, 0x18),
        ColorName::Button => Color::rgb(0x28, 0x29, 0x2e),
        ColorName::Disabled => Color::rgba(0x39, 0x39, 0x3a, 0xff),
        ColorName::DisabledButton => Color::rgb(0x28, 0x29, 0x2e),
        ColorName::Error => Color::rgb(0xf4, 0x43, 0x36),
        ColorName::Focus => Color::rgba(0x00, 0x6c, 0xff, 0x2a),
        ColorName::Foreground => Color::rgb(0xf3, 0xf3, 0xf3),
        ColorName::Hover => Color::rgba(0xff, 0xff, 0xff, 0x0f),
        ColorName::InputBackground => Color::rgb(0x20, 0x20, 0x23),
        ColorName::InputBorder => Color::rgb(0x39, 0x39, 0x3a),
        ColorName::MenuBackground => Color::rgb(0x28, 0x29, 0x2e),
        ColorName::OverlayBackground => Color::rgb(0x18, 0x1d, 0x25),
        ColorName::Placeholder => Color::rgb(0xb2, 0xb2, 0xb2),
        ColorName::Pressed => Color::rgba(0xff, 0xff, 0xff, 0x66),
        ColorName::Primary => Color::rgb(0x00, 0x6c, 0xff),
        ColorName::ScrollBar => Color::rgba(0xff, 0xff, 0xff, 0x99),
        ColorName::Selection => Color::rgba(0x00, 0x6c, 0xff, 0x40),
        ColorName::Separator => Color::rgb(0x00, 0x00, 0x00),
        ColorName::Shadow => Color::rgba(0x00, 0x00, 0x00, 0x66),
        ColorName::Success => Color::rgb(0x43, 0xf4, 0x36),
        ColorName::Warning => Color::rgb(0xff, 0x98, 0x00),
    }
}

fn baseline_light(name: ColorName) -> Color {
    match name {
        ColorName::PageBackground | ColorName::Background => Color::rgb(0xff, 0xff, 0xff),
        ColorName::Button => Color::rgb(0xf5, 0xf5, 0xf5),
        ColorName::Disabled => Color::rgb(0xe3, 0xe3, 0xe3),
        ColorName::DisabledButton => Color::rgb(0xf5, 0xf5, 0xf5),
        ColorName::Error => Color::rgb(0xf4, 0x43, 0x36),
        ColorName::Focus => Color::rgba(0x00, 0x6c, 0xff, 0x2a),
        ColorName::Foreground => Color::rgb(0x56, 0x56, 0x56),
        ColorName::Hover => Color::rgba(0x00, 0x00, 0x00, 0x0f),
        ColorName::InputBackground => Color::rgb(0xf3, 0xf3, 0xf3),
        ColorName::InputBorder => Color::rgb(0xe3, 0xe3, 0xe3),
        ColorName::MenuBackground => Color::rgb(0xf5, 0xf5, 0xf5),
        ColorName::OverlayBackground => Color::rgb(0xff, 0xff, 0xff),
        ColorName::Placeholder => Color::rgb(0x88, 0x88, 0x88),
        ColorName::Pressed => Color::rgba(0x00, 0x00, 0x00, 0x19),
        ColorName::Primary => Color::rgb(0x00, 0x6c, 0xff),
        ColorName::ScrollBar => Color::rgba(0x00, 0x00, 0x00, 0x99),
        ColorName::Selection => Color::rgba(0x00, 0x6c, 0xff, 0x40),
        ColorName::Separator => Color::rgb(0xe3, 0xe3, 0xe3),
        ColorName::Shadow => Color::rgba(0x00, 0x00, 0x00, 0x33),
        ColorName::Success => Color::rgb(0x43, 0xf4, 0x36),
        ColorName::Warning => Color::rgb(0xff, 0x98, 0x00),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LightHost;

    impl Host for LightHost {
        fn current_variant(&self) -> Variant {
            Variant::Light
        }

        fn default_color(&self, name: ColorName, variant: Variant) -> Color {
            baseline_color(name, variant)
        }

        fn default_font(&self, _style: FontStyle) -> Resource {
            Resource::new("host", Vec::<u8>::new())
        }
    }

    fn config(mode: &str) -> AppearanceConfig {
        AppearanceConfig {
            appearance: mode.to_string(),
            ..AppearanceConfig::default()
        }
    }

    #[test]
    fn test_explicit_modes_ignore_host() {
        assert_eq!(effective_variant(&config("Dark"), &LightHost), Variant::Dark);
        assert_eq!(effective_variant(&config("Light"), &LightHost), Variant::Light);
    }

    #[test]
    fn test_auto_asks_host() {
        assert_eq!(effective_variant(&config("Auto"), &LightHost), Variant::Light);
    }

    #[test]
    fn test_unrecognized_mode_uses_default() {
        assert_eq!(effective_variant(&config("auto"), &LightHost), Variant::Dark);
        assert_eq!(effective_variant(&config(""), &LightHost), Variant::Dark);
    }

    #[test]
    fn test_system_host_override_is_live() {
        let host = SystemHost::new();
        host.set_override(Some(Variant::Light));
        assert_eq!(host.current_variant(), Variant::Light);
        host.set_override(Some(Variant::Dark));
        assert_eq!(host.current_variant(), Variant::Dark);
    }

    #[test]
    fn test_page_background_shares_background_baseline() {
        for variant in [Variant::Light, Variant::Dark] {
            assert_eq!(
                baseline_color(ColorName::PageBackground, variant),
                baseline_color(ColorName::Background, variant)
            );
        }
    }
}
