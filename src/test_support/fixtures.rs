//! Test fixtures for common test scenarios.
//!
//! The palette mirrors a real app's asset catalog: light/dark pairs, a few
//! semantic surface colors, and `AccentColor`.

use crate::catalog::{Srgba, StaticBundle};
use crate::core::manifest::{ResourceManifestEntry, VariantTag};

/// Bundle identifier used across fixtures.
pub const FOCAL_BUNDLE_ID: &str = "com.venkat.focal.app";

/// Palette color names in catalog order.
pub const FOCAL_COLORS: &[&str] = &[
    "AccentColor",
    "Amber",
    "AmberLight",
    "Background",
    "BackgroundSecondary",
    "BorderStrong",
    "CardBackground",
    "Coral",
    "CoralLight",
    "Divider",
    "Lavender",
    "LavenderLight",
    "Night",
    "NightLight",
    "Overlay",
    "Rose",
    "RoseLight",
    "Sage",
    "SageLight",
    "Sky",
    "SkyLight",
    "Slate",
    "SlateLight",
    "SurfaceSecondary",
    "TextInverse",
    "TextPrimary",
    "TextSecondary",
    "TextTertiary",
];

/// The palette as manifest entries, each with `any` and `dark` variants.
pub fn focal_palette() -> Vec<ResourceManifestEntry> {
    FOCAL_COLORS
        .iter()
        .map(|name| {
            ResourceManifestEntry::color(*name).with_variants([VariantTag::Any, VariantTag::Dark])
        })
        .collect()
}

/// An in-memory bundle holding every palette color.
///
/// Light values step through the red channel and dark values through the
/// blue channel, so every `(name, variant)` pair is distinct.
pub fn focal_bundle() -> StaticBundle {
    FOCAL_COLORS
        .iter()
        .enumerate()
        .fold(StaticBundle::new(FOCAL_BUNDLE_ID), |bundle, (i, name)| {
            let step = (i * 9) as u8;
            bundle.with_color(
                *name,
                [
                    (VariantTag::Any, Srgba::from_rgb8(step, 128, 64)),
                    (VariantTag::Dark, Srgba::from_rgb8(16, 32, step)),
                ],
            )
        })
}

/// A TOML manifest with colors, an image, and one public token.
pub const SAMPLE_MANIFEST: &str = r#"bundle-id = "com.venkat.focal.app"

[[token]]
name = "AccentColor"

[[token]]
name = "Amber"
variants = ["any", "dark"]

[[token]]
name = "AmberLight"

[[token]]
name = "Sky"
variants = ["any", "dark", "dark-high-contrast"]

[[token]]
name = "Overlay"
public = true

[[token]]
name = "Logo"
category = "image"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ResourceBundle;
    use crate::core::manifest::{Category, Manifest};

    #[test]
    fn test_palette_matches_bundle() {
        let bundle = focal_bundle();
        for entry in focal_palette() {
            assert!(bundle.has(Category::Color, &entry.name), "{}", entry.name);
        }
        assert_eq!(bundle.len(), FOCAL_COLORS.len());
    }

    #[test]
    fn test_sample_manifest_parses() {
        let manifest = Manifest::parse(SAMPLE_MANIFEST).unwrap();
        assert_eq!(manifest.entries.len(), 6);
    }
}
