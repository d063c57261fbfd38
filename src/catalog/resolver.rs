//! Symbol resolution against packaged bundles.
//!
//! Resolution happens in three steps, each with its own failure:
//! 1. Locate the bundle by identity (`BundleUnavailable`)
//! 2. Check the asset exists in the symbol's category (`ResourceNotFound`)
//! 3. Pick the first stored variant the appearance accepts (`VariantNotFound`)

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::catalog::asset_catalog::AssetCatalog;
use crate::catalog::errors::ResolveError;
use crate::catalog::{ResolvedHandle, ResourceBundle};
use crate::core::manifest::VariantTag;
use crate::core::symbol::{BundleIdentity, SymbolicConstant};

/// Base appearance of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// Appearance the caller is rendering for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct AppearanceContext {
    pub scheme: ColorScheme,
    pub high_contrast: bool,
}

impl AppearanceContext {
    pub const fn light() -> Self {
        AppearanceContext {
            scheme: ColorScheme::Light,
            high_contrast: false,
        }
    }

    pub const fn dark() -> Self {
        AppearanceContext {
            scheme: ColorScheme::Dark,
            high_contrast: false,
        }
    }

    pub const fn with_high_contrast(mut self, high_contrast: bool) -> Self {
        self.high_contrast = high_contrast;
        self
    }

    /// Variants acceptable for this appearance, most specific first.
    pub fn candidates(&self) -> &'static [VariantTag] {
        match (self.scheme, self.high_contrast) {
            (ColorScheme::Light, false) => &[VariantTag::Light, VariantTag::Any],
            (ColorScheme::Light, true) => {
                &[VariantTag::HighContrast, VariantTag::Light, VariantTag::Any]
            }
            (ColorScheme::Dark, false) => &[VariantTag::Dark, VariantTag::Any],
            (ColorScheme::Dark, true) => &[
                VariantTag::DarkHighContrast,
                VariantTag::Dark,
                VariantTag::Any,
            ],
        }
    }
}

impl fmt::Display for AppearanceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scheme = match self.scheme {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        };
        if self.high_contrast {
            write!(f, "{}, high contrast", scheme)
        } else {
            f.write_str(scheme)
        }
    }
}

/// Opened bundles keyed by identity.
#[derive(Clone, Default)]
pub struct BundleSet {
    bundles: HashMap<BundleIdentity, Arc<dyn ResourceBundle>>,
}

impl BundleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bundle under its own identity, replacing any previous one.
    pub fn insert(&mut self, bundle: Arc<dyn ResourceBundle>) {
        let identity = bundle.identity().clone();
        tracing::debug!("registered bundle `{}`", identity);
        self.bundles.insert(identity, bundle);
    }

    /// Open an asset catalog directory and register it as `identity`.
    pub fn open_catalog(
        &mut self,
        identity: impl Into<BundleIdentity>,
        path: impl AsRef<Path>,
    ) -> Result<(), ResolveError> {
        let identity = identity.into();
        let catalog = AssetCatalog::open(path.as_ref())
            .map_err(|err| match err {
                ResolveError::BundleUnavailable { reason, .. } => ResolveError::BundleUnavailable {
                    bundle: identity.to_string(),
                    reason,
                },
                other => other,
            })?
            .with_identity(identity);

        self.insert(Arc::new(catalog));
        Ok(())
    }

    pub fn get(&self, identity: &BundleIdentity) -> Option<&Arc<dyn ResourceBundle>> {
        self.bundles.get(identity)
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

impl fmt::Debug for BundleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<_> = self.bundles.keys().collect();
        ids.sort();
        f.debug_struct("BundleSet").field("bundles", &ids).finish()
    }
}

/// Resolves generated symbols to resources. Holds no mutable state.
#[derive(Debug, Clone, Default)]
pub struct BundleResolver {
    bundles: BundleSet,
}

impl BundleResolver {
    pub fn new(bundles: BundleSet) -> Self {
        BundleResolver { bundles }
    }

    pub fn bundles(&self) -> &BundleSet {
        &self.bundles
    }

    /// Resolve `constant` inside `bundle` for `appearance`.
    pub fn resolve(
        &self,
        constant: &SymbolicConstant,
        bundle: &BundleIdentity,
        appearance: AppearanceContext,
    ) -> Result<ResolvedHandle, ResolveError> {
        let source = self
            .bundles
            .get(bundle)
            .ok_or_else(|| ResolveError::BundleUnavailable {
                bundle: bundle.to_string(),
                reason: "no bundle is registered with this identity".to_string(),
            })?;

        let category = constant.category;
        let name = constant.target_name.as_str();

        if !source.has(category, name) {
            return Err(ResolveError::ResourceNotFound {
                bundle: bundle.to_string(),
                category,
                name: name.to_string(),
            });
        }

        for &variant in appearance.candidates() {
            if let Some(resource) = source.get(category, name, variant) {
                tracing::trace!(
                    "resolved {} `{}` as {} for {}",
                    category,
                    name,
                    variant,
                    appearance
                );
                return Ok(ResolvedHandle {
                    bundle: bundle.clone(),
                    category,
                    name: name.to_string(),
                    variant,
                    resource,
                });
            }
        }

        Err(ResolveError::VariantNotFound {
            category,
            name: name.to_string(),
            appearance: appearance.to_string(),
            available: source.variants(category, name),
        })
    }
}
