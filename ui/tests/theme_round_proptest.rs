mod common;

use common::*;
use lumen::theme::appearance::baseline_color;
use lumen::theme::color::Color;
use lumen::theme::resolver::{ColorSource, ResolvedColor};
use lumen::theme::types::{ColorName, Variant};
use proptest::prelude::*;

fn color_name() -> impl Strategy<Value = ColorName> {
    (0..ColorName::ALL.len()).prop_map(|index| ColorName::ALL[index])
}

fn variant() -> impl Strategy<Value = Variant> {
    prop_oneof![Just(Variant::Light), Just(Variant::Dark)]
}

/// Empty strings and `#` followed by non-hex letters never parse.
fn unusable_color() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "#[g-z]{3,6}"]
}

fn other(variant: Variant) -> Variant {
    match variant {
        Variant::Light => Variant::Dark,
        Variant::Dark => Variant::Light,
    }
}

/// Write a single-entry theme and resolve `name` with `variant` set explicitly.
fn resolve_single_entry(name: ColorName, variant: Variant, value: &str) -> ResolvedColor {
    let dir = tempfile::tempdir().expect("tempdir");
    let content = format!(
        "[Theme]\nName = \"Round\"\nSupportedModes = [\"Dark\", \"Light\"]\n\n[{variant}Colors]\n{name} = \"{value}\"\n"
    );
    write_theme(dir.path(), "round.toml", &content);

    // The host reports the other variant so only the explicit mode can match
    let (context, _) = context(
        dir.path(),
        appearance(variant.as_str(), "round.toml"),
        FixedHost::new(other(variant)),
    );
    context.resolve_color(name)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn declared_color_is_returned_exactly(
        name in color_name(),
        variant in variant(),
        (r, g, b) in (any::<u8>(), any::<u8>(), any::<u8>()),
    ) {
        let resolved = resolve_single_entry(name, variant, &format!("#{r:02x}{g:02x}{b:02x}"));
        prop_assert_eq!(resolved.color, Color::rgb(r, g, b));
        prop_assert_eq!(resolved.source, ColorSource::Custom);
    }

    #[test]
    fn unusable_entry_resolves_to_baseline(
        name in color_name(),
        variant in variant(),
        value in unusable_color(),
    ) {
        let resolved = resolve_single_entry(name, variant, &value);
        prop_assert_eq!(resolved.color, baseline_color(name, variant));
        prop_assert_eq!(resolved.source, ColorSource::Baseline);
    }
}
