mod common;

use claims::assert_matches;
use common::*;
use lumen::config::AppearanceConfig;
use lumen::error::FontError;
use lumen::theme::fonts::{FontLoader, FontSlot, FontStyle};
use lumen::theme::types::Variant;

fn font_config(normal: &str, bold: &str) -> AppearanceConfig {
    AppearanceConfig {
        normal_font: normal.to_string(),
        bold_font: bold.to_string(),
        ..appearance("Dark", "")
    }
}

#[test]
fn test_unsupported_font_extension_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("Inter.otf");
    std::fs::write(&path, b"otf").expect("write font");
    let path = path.to_string_lossy().to_string();

    let (context, handle) = context(
        dir.path(),
        font_config(&path, ""),
        FixedHost::new(Variant::Dark),
    );

    // The host font is served and the setting cleared
    assert_eq!(context.font(FontStyle::Normal).name(), "host-normal");
    assert_eq!(handle.snapshot().normal_font, "");
    assert_eq!(context.fonts().cached(FontStyle::Normal), None);
    assert_matches!(context.fonts().slot(FontStyle::Normal), FontSlot::Failed { .. });

    // The same path is not attempted again
    assert_matches!(context.fonts().load(FontStyle::Normal, &path), Ok(None));

    let loader = FontLoader::new();
    assert_matches!(
        loader.load(FontStyle::Normal, &path),
        Err(FontError::UnsupportedFormat { .. })
    );
}

#[test]
fn test_bold_falls_back_to_custom_normal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("Regular.ttf");
    std::fs::write(&path, b"regular-bytes").expect("write font");
    let path = path.to_string_lossy().to_string();

    let (context, _) = context(dir.path(), font_config(&path, ""), FixedHost::new(Variant::Dark));

    let bold = context.font(FontStyle::Bold);
    assert_eq!(bold.name(), "normalFont");
    assert_eq!(bold.content(), b"regular-bytes");
}

#[test]
fn test_no_custom_fonts_uses_host_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (context, _) = context(dir.path(), font_config("", ""), FixedHost::new(Variant::Dark));

    assert_eq!(context.font(FontStyle::Normal).name(), "host-normal");
    assert_eq!(context.font(FontStyle::Bold).name(), "host-bold");
}

#[test]
fn test_failed_bold_font_keeps_normal_setting() {
    let dir = tempfile::tempdir().expect("tempdir");
    let normal = dir.path().join("Regular.ttf");
    std::fs::write(&normal, b"regular").expect("write font");
    let normal = normal.to_string_lossy().to_string();
    let bold = dir.path().join("Missing-Bold.ttf").to_string_lossy().to_string();

    let (context, handle) = context(
        dir.path(),
        font_config(&normal, &bold),
        FixedHost::new(Variant::Dark),
    );

    assert_eq!(context.font(FontStyle::Bold).name(), "normalFont");
    let settings = handle.snapshot();
    assert_eq!(settings.bold_font, "");
    assert_eq!(settings.normal_font, normal);
}

#[test]
fn test_concurrent_first_loads_read_font_once() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("Regular.ttf");
    std::fs::write(&path, b"regular-bytes").expect("write font");
    let path = path.to_string_lossy().to_string();
    let loader = FontLoader::new();

    let fonts: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..16)
            .map(|_| scope.spawn(|| loader.load(FontStyle::Normal, &path)))
            .collect();
        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .expect("loader thread")
                    .expect("font should load")
                    .expect("font should be present")
            })
            .collect()
    });

    // Every caller sees the bytes of the single cached read
    let first = fonts[0].content().as_ptr();
    for font in &fonts {
        assert_eq!(font.content().as_ptr(), first);
        assert_eq!(font.content(), b"regular-bytes");
    }
    assert_eq!(loader.cached(FontStyle::Normal).as_ref(), Some(&fonts[0]));
}
