use crate::theme::types::{Resource, Variant};
use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;

/// Semantic icon identifiers with light and dark artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IconName {
    Album,
    Artist,
    Favorite,
    NotFavorite,
    Genre,
    NowPlaying,
    Playlist,
    Shuffle,
    Tracks,
}

impl IconName {
    pub const ALL: &'static [IconName] = &[
        IconName::Album,
        IconName::Artist,
        IconName::Favorite,
        IconName::NotFavorite,
        IconName::Genre,
        IconName::NowPlaying,
        IconName::Playlist,
        IconName::Shuffle,
        IconName::Tracks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IconName::Album => "Album",
            IconName::Artist => "Artist",
            IconName::Favorite => "Favorite",
            IconName::NotFavorite => "NotFavorite",
            IconName::Genre => "Genre",
            IconName::NowPlaying => "NowPlaying",
            IconName::Playlist => "Playlist",
            IconName::Shuffle => "Shuffle",
            IconName::Tracks => "Tracks",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| format!("unknown icon name '{s}'"))
    }
}

/// A light/dark asset pair for one icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemedAsset {
    pub id: IconName,
    pub light: Resource,
    pub dark: Resource,
}

impl ThemedAsset {
    pub fn select(&self, variant: Variant) -> &Resource {
        match variant {
            Variant::Light => &self.light,
            Variant::Dark => &self.dark,
        }
    }
}

macro_rules! embedded_icon {
    ($file:literal) => {
        Resource::new(
            $file,
            &include_bytes!(concat!("../../assets/icons/", $file))[..],
        )
    };
}

/// Artwork for `id`. Dark variants use the inverted (light on dark) files.
fn embedded_asset(id: IconName) -> ThemedAsset {
    let (light, dark) = match id {
        IconName::Album => (embedded_icon!("disc.svg"), embedded_icon!("disc-invert.svg")),
        IconName::Artist => (
            embedded_icon!("people.svg"),
            embedded_icon!("people-invert.svg"),
        ),
        IconName::Favorite => (
            embedded_icon!("heart-filled.svg"),
            embedded_icon!("heart-filled-invert.svg"),
        ),
        IconName::NotFavorite => (
            embedded_icon!("heart-outline.svg"),
            embedded_icon!("heart-outline-invert.svg"),
        ),
        IconName::Genre => (
            embedded_icon!("theatermasks.svg"),
            embedded_icon!("theatermasks-invert.svg"),
        ),
        IconName::NowPlaying => (
            embedded_icon!("headphones.svg"),
            embedded_icon!("headphones-invert.svg"),
        ),
        IconName::Playlist => (
            embedded_icon!("playlist.svg"),
            embedded_icon!("playlist-invert.svg"),
        ),
        IconName::Shuffle => (
            embedded_icon!("shuffle.svg"),
            embedded_icon!("shuffle-invert.svg"),
        ),
        IconName::Tracks => (
            embedded_icon!("musicnotes.svg"),
            embedded_icon!("musicnotes-invert.svg"),
        ),
    };
    ThemedAsset { id, light, dark }
}

static EMBEDDED_ICONS: Lazy<IconRegistry> = Lazy::new(|| {
    IconRegistry::from_assets(IconName::ALL.iter().map(|id| embedded_asset(*id)))
});

/// Fixed table of themed icons, one entry per [`IconName`].
///
/// Selection happens on every call so a change of appearance shows up on
/// the next lookup.
#[derive(Debug, Clone)]
pub struct IconRegistry {
    assets: Vec<ThemedAsset>,
}

impl IconRegistry {
    /// The registry built from the artwork compiled into the binary.
    pub fn embedded() -> Self {
        EMBEDDED_ICONS.clone()
    }

    /// Build a registry from custom asset pairs.
    ///
    /// Icons missing from `assets` get the embedded artwork; later entries
    /// for the same id replace earlier ones.
    pub fn from_assets(assets: impl IntoIterator<Item = ThemedAsset>) -> Self {
        let mut slots: Vec<Option<ThemedAsset>> = vec![None; IconName::ALL.len()];
        for asset in assets {
            let index = asset.id.index();
            if let Some(replaced) = slots[index].replace(asset) {
                log::debug!(
                    "Icon {} listed more than once, replacing '{}'",
                    replaced.id,
                    replaced.light.name()
                );
            }
        }

        let assets = IconName::ALL
            .iter()
            .zip(slots)
            .map(|(id, slot)| slot.unwrap_or_else(|| embedded_asset(*id)))
            .collect();
        Self { assets }
    }

    pub fn asset(&self, id: IconName) -> &ThemedAsset {
        &self.assets[id.index()]
    }

    pub fn resolve(&self, id: IconName, variant: Variant) -> Resource {
        self.asset(id).select(variant).clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThemedAsset> {
        self.assets.iter()
    }
}
