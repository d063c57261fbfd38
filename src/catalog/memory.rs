//! In-memory bundle.

use std::collections::BTreeMap;

use crate::catalog::{ResourceBundle, Resource, Srgba};
use crate::core::manifest::{Category, VariantTag};
use crate::core::symbol::BundleIdentity;

/// A bundle assembled in code. Immutable once shared with a resolver.
#[derive(Debug, Clone)]
pub struct StaticBundle {
    identity: BundleIdentity,
    assets: BTreeMap<Category, BTreeMap<String, Vec<(VariantTag, Resource)>>>,
}

impl StaticBundle {
    pub fn new(identity: impl Into<BundleIdentity>) -> Self {
        StaticBundle {
            identity: identity.into(),
            assets: BTreeMap::new(),
        }
    }

    /// Add or replace one variant of an asset.
    pub fn with_resource(
        mut self,
        category: Category,
        name: impl Into<String>,
        variant: VariantTag,
        resource: Resource,
    ) -> Self {
        let variants = self
            .assets
            .entry(category)
            .or_default()
            .entry(name.into())
            .or_default();
        match variants.iter_mut().find(|(v, _)| *v == variant) {
            Some(slot) => slot.1 = resource,
            None => variants.push((variant, resource)),
        }
        self
    }

    /// Add a color with the given variants.
    pub fn with_color(
        self,
        name: impl Into<String>,
        variants: impl IntoIterator<Item = (VariantTag, Srgba)>,
    ) -> Self {
        let name = name.into();
        variants.into_iter().fold(self, |bundle, (variant, color)| {
            bundle.with_resource(Category::Color, name.clone(), variant, Resource::Color(color))
        })
    }

    pub fn len(&self) -> usize {
        self.assets.values().map(|assets| assets.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    fn lookup(&self, category: Category, name: &str) -> Option<&Vec<(VariantTag, Resource)>> {
        self.assets.get(&category)?.get(name)
    }
}

impl ResourceBundle for StaticBundle {
    fn identity(&self) -> &BundleIdentity {
        &self.identity
    }

    fn has(&self, category: Category, name: &str) -> bool {
        self.lookup(category, name).is_some()
    }

    fn get(&self, category: Category, name: &str, variant: VariantTag) -> Option<Resource> {
        self.lookup(category, name)?
            .iter()
            .find(|(v, _)| *v == variant)
            .map(|(_, resource)| resource.clone())
    }

    fn variants(&self, category: Category, name: &str) -> Vec<VariantTag> {
        self.lookup(category, name)
            .map(|variants| variants.iter().map(|(v, _)| *v).collect())
            .unwrap_or_default()
    }

    fn names(&self, category: Category) -> Vec<String> {
        self.assets
            .get(&category)
            .map(|assets| assets.keys().cloned().collect())
            .unwrap_or_default()
    }
}
