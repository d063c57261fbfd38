//! Manifest ingestion.
//!
//! Tokens come either from a TOML token manifest or straight from an
//! `.xcassets` catalog directory.

use std::path::Path;

use anyhow::{Context, Result};

use crate::catalog::AssetCatalog;
use crate::core::manifest::Manifest;
use crate::core::registry::TokenRegistry;

/// Load a manifest from a `.toml` file or an asset catalog directory.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let manifest = if path.is_dir() {
        AssetCatalog::open(path)
            .with_context(|| format!("failed to read asset catalog: {}", path.display()))?
            .to_manifest()
    } else {
        Manifest::load(path)?
    };

    tracing::info!(
        "loaded {} tokens from {}",
        manifest.entries.len(),
        path.display()
    );

    Ok(manifest)
}

/// Register every manifest entry and seal the registry.
///
/// Stops at the first rejected entry.
pub fn build_registry(manifest: &Manifest) -> Result<TokenRegistry> {
    let registry = TokenRegistry::from_entries(manifest.entries.iter().cloned())?;
    tracing::debug!("sealed registry with {} tokens", registry.len());
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::TokenError;
    use crate::core::manifest::{Category, VariantTag};
    use crate::test_support::{CatalogFixture, SAMPLE_MANIFEST};
    use tempfile::TempDir;

    #[test]
    fn test_load_toml_manifest() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tokens.toml");
        std::fs::write(&path, SAMPLE_MANIFEST).unwrap();

        let manifest = load_manifest(&path).unwrap();

        assert_eq!(manifest.bundle_id.as_deref(), Some("com.venkat.focal.app"));
        assert_eq!(manifest.entries[0].name, "AccentColor");
        assert!(manifest.entries.iter().any(|e| e.category == Category::Image));
    }

    #[test]
    fn test_load_catalog_manifest() {
        let fixture = CatalogFixture::new()
            .color("Amber", &[(VariantTag::Any, (245, 158, 11))])
            .image("Logo", &[(VariantTag::Any, "logo.png")])
            .write();

        let manifest = load_manifest(&fixture.catalog_path()).unwrap();

        assert_eq!(manifest.bundle_id, None);
        assert_eq!(manifest.entries.len(), 2);
    }

    #[test]
    fn test_missing_manifest_reports_path() {
        let err = load_manifest(Path::new("/nonexistent/tokens.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/tokens.toml"));
    }

    #[test]
    fn test_build_registry_stops_on_duplicate() {
        let manifest = Manifest::parse(
            r#"
[[token]]
name = "Sky"

[[token]]
name = "Sky"
"#,
        )
        .unwrap();

        let err = build_registry(&manifest).unwrap_err();
        assert_eq!(
            err.downcast_ref::<TokenError>(),
            Some(&TokenError::DuplicateName {
                category: Category::Color,
                name: "Sky".to_string()
            })
        );
    }
}
