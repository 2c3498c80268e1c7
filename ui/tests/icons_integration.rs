mod common;

use common::*;
use lumen::theme::icons::{IconName, IconRegistry, ThemedAsset};
use lumen::theme::types::{Resource, Variant};

#[test]
fn test_icon_follows_effective_variant() {
    let dir = tempfile::tempdir().expect("tempdir");
    let host = FixedHost::new(Variant::Light);
    let (context, handle) = context(dir.path(), appearance("Auto", ""), host.clone());

    assert_eq!(context.icon(IconName::Favorite).name(), "heart-filled.svg");
    host.set(Variant::Dark);
    assert_eq!(context.icon(IconName::Favorite).name(), "heart-filled-invert.svg");

    handle.update(|config| config.appearance = "Light".to_string());
    assert_eq!(context.icon(IconName::Favorite).name(), "heart-filled.svg");
}

#[test]
fn test_custom_icon_table() {
    let dir = tempfile::tempdir().expect("tempdir");
    let asset = ThemedAsset {
        id: IconName::Playlist,
        light: Resource::new("list-light", vec![0u8]),
        dark: Resource::new("list-dark", vec![1u8]),
    };
    let (context, _) = context(dir.path(), appearance("Dark", ""), FixedHost::new(Variant::Dark));
    let context = context.with_icons(IconRegistry::from_assets([asset]));

    assert_eq!(context.icon(IconName::Playlist).name(), "list-dark");
    assert_eq!(context.icon(IconName::Album).name(), "disc-invert.svg");
}
