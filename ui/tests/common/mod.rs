#![allow(dead_code)]

use lumen::config::{AppearanceConfig, ConfigHandle};
use lumen::theme::ThemeContext;
use lumen::theme::appearance::{Host, baseline_color};
use lumen::theme::color::Color;
use lumen::theme::fonts::FontStyle;
use lumen::theme::types::{ColorName, Resource, Variant};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Host double whose live appearance can be flipped by the test.
pub struct FixedHost {
    variant: RwLock<Variant>,
}

impl FixedHost {
    pub fn new(variant: Variant) -> Arc<Self> {
        Arc::new(Self {
            variant: RwLock::new(variant),
        })
    }

    pub fn set(&self, variant: Variant) {
        *self.variant.write().expect("host lock") = variant;
    }
}

impl Host for FixedHost {
    fn current_variant(&self) -> Variant {
        *self.variant.read().expect("host lock")
    }

    fn default_color(&self, name: ColorName, variant: Variant) -> Color {
        baseline_color(name, variant)
    }

    fn default_font(&self, style: FontStyle) -> Resource {
        Resource::new(format!("host-{style}"), Vec::<u8>::new())
    }
}

pub fn appearance(mode: &str, theme_file: &str) -> AppearanceConfig {
    AppearanceConfig {
        appearance: mode.to_string(),
        theme_file: theme_file.to_string(),
        ..AppearanceConfig::default()
    }
}

pub fn context(
    dir: &Path,
    config: AppearanceConfig,
    host: Arc<FixedHost>,
) -> (ThemeContext, ConfigHandle) {
    let handle = ConfigHandle::new(config);
    let context = ThemeContext::new(handle.clone(), dir, host);
    (context, handle)
}

pub fn write_theme(dir: &Path, file: &str, content: &str) {
    std::fs::write(dir.join(file), content).expect("write theme file");
}

pub const OCEAN_THEME: &str = r##"
[Theme]
Name = "Ocean"
Version = "1.2"
SupportedModes = ["Dark", "Light"]

[DarkColors]
Primary = "#336699"
Background = ""
Foreground = "#eeeeee"

[LightColors]
Primary = "#224466"
Foreground = "#111111"
"##;

pub const NIGHT_THEME: &str = r##"
[Theme]
Name = "Night"
SupportedModes = ["Dark"]

[DarkColors]
Primary = "#010203"
"##;
