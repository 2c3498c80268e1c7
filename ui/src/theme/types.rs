use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::theme::color::{Color, parse_color};

/// One of the two appearance variants every color and icon is conditioned on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    Light,
    Dark,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Light => "Light",
            Variant::Dark => "Dark",
        }
    }

    /// Case-sensitive parse of `"Light"` / `"Dark"`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Light" => Some(Variant::Light),
            "Dark" => Some(Variant::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Appearance mode as configured by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppearanceMode {
    Light,
    Dark,
    Auto,
}

impl AppearanceMode {
    /// Mode used when the configured value is missing or not recognized.
    pub const DEFAULT: AppearanceMode = AppearanceMode::Dark;

    /// Interpret a raw configuration value.
    ///
    /// Matching is case-sensitive; anything other than the three literal
    /// values maps to [`AppearanceMode::DEFAULT`].
    pub fn from_config(value: &str) -> Self {
        match value {
            "Light" => AppearanceMode::Light,
            "Dark" => AppearanceMode::Dark,
            "Auto" => AppearanceMode::Auto,
            _ => Self::DEFAULT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppearanceMode::Light => "Light",
            AppearanceMode::Dark => "Dark",
            AppearanceMode::Auto => "Auto",
        }
    }
}

macro_rules! color_names {
    ($($variant:ident),+ $(,)?) => {
        /// Semantic color roles a theme can define.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ColorName {
            $($variant),+
        }

        impl ColorName {
            /// Every semantic color name, in declaration order.
            pub const ALL: &'static [ColorName] = &[$(ColorName::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(ColorName::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

color_names!(
    PageBackground,
    Background,
    Button,
    Disabled,
    DisabledButton,
    Error,
    Focus,
    Foreground,
    Hover,
    InputBackground,
    InputBorder,
    MenuBackground,
    OverlayBackground,
    Placeholder,
    Pressed,
    Primary,
    ScrollBar,
    Selection,
    Separator,
    Shadow,
    Success,
    Warning,
);

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| format!("unknown color name '{s}'"))
    }
}

/// Color strings for one variant, keyed by semantic name.
///
/// Values are kept as written in the theme file; an entry that is empty or
/// does not parse behaves exactly like a missing entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorSet {
    entries: HashMap<ColorName, String>,
}

impl ColorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a raw TOML table, returning the keys that are not
    /// semantic color names.
    pub fn from_raw(raw: BTreeMap<String, String>) -> (Self, Vec<String>) {
        let mut set = Self::new();
        let mut unknown = Vec::new();
        for (key, value) in raw {
            match key.parse::<ColorName>() {
                Ok(name) => set.insert(name, value),
                Err(_) => unknown.push(key),
            }
        }
        (set, unknown)
    }

    pub fn insert(&mut self, name: ColorName, value: impl Into<String>) {
        self.entries.insert(name, value.into());
    }

    /// Raw color string for `name`, if the theme declared one.
    pub fn raw(&self, name: ColorName) -> Option<&str> {
        self.entries.get(&name).map(String::as_str)
    }

    /// Parsed color for `name`; `None` when missing, empty or malformed.
    pub fn color(&self, name: ColorName) -> Option<Color> {
        self.raw(name).and_then(|value| parse_color(value).ok())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A parsed theme definition. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeFile {
    pub source_path: String,
    pub display_name: String,
    pub version: Option<String>,
    pub light_colors: ColorSet,
    pub dark_colors: ColorSet,
    pub supports_light: bool,
    pub supports_dark: bool,
}

impl ThemeFile {
    pub fn supports_variant(&self, variant: Variant) -> bool {
        match variant {
            Variant::Light => self.supports_light,
            Variant::Dark => self.supports_dark,
        }
    }

    pub fn colors(&self, variant: Variant) -> &ColorSet {
        match variant {
            Variant::Light => &self.light_colors,
            Variant::Dark => &self.dark_colors,
        }
    }
}

/// An opaque named binary resource (icon artwork, font file).
///
/// Cloning is cheap: both name and content are reference counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    name: Arc<str>,
    content: Arc<[u8]>,
}

impl Resource {
    pub fn new(name: impl Into<Arc<str>>, content: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

/// On-disk layout of a theme file, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ThemeDocument {
    pub theme: ThemeMetadata,
    #[serde(default)]
    pub light_colors: BTreeMap<String, String>,
    #[serde(default)]
    pub dark_colors: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ThemeMetadata {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub supported_modes: Vec<String>,
}
