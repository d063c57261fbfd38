//! Packaged resource bundles and runtime resolution.
//!
//! A bundle is an immutable, named container of resources addressable by
//! category and asset name. The resolver turns a generated symbol into a
//! concrete resource for the current appearance.
//!
//! - `asset_catalog` reads `.xcassets` directories
//! - `memory` is an in-process bundle built from code
//! - `resolver` selects bundles and variants
//! - `cache` memoizes resolved handles across threads

pub mod asset_catalog;
pub mod cache;
pub mod errors;
pub mod memory;
pub mod resolver;

use std::fmt;

use serde::Serialize;

use crate::core::manifest::{Category, VariantTag};
use crate::core::symbol::BundleIdentity;

pub use asset_catalog::AssetCatalog;
pub use cache::CachedResolver;
pub use errors::ResolveError;
pub use memory::StaticBundle;
pub use resolver::{AppearanceContext, BundleResolver, BundleSet, ColorScheme};

/// A packaged resource container.
///
/// Implementations are immutable once constructed; every method is a pure
/// lookup and may be called from any thread.
pub trait ResourceBundle: Send + Sync {
    /// Identity this bundle answers to.
    fn identity(&self) -> &BundleIdentity;

    /// Whether an asset with this name exists in the category.
    fn has(&self, category: Category, name: &str) -> bool;

    /// The resource stored for one exact variant.
    fn get(&self, category: Category, name: &str, variant: VariantTag) -> Option<Resource>;

    /// Variants stored for an asset, in catalog order.
    fn variants(&self, category: Category, name: &str) -> Vec<VariantTag>;

    /// Every asset name in the category.
    fn names(&self, category: Category) -> Vec<String>;
}

/// A color in the sRGB space with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Srgba {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Srgba {
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Srgba {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Build an opaque color from 8-bit channels.
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Srgba::new(
            f32::from(red) / 255.0,
            f32::from(green) / 255.0,
            f32::from(blue) / 255.0,
            1.0,
        )
    }

    fn channel(value: f32) -> u8 {
        (value.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl fmt::Display for Srgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            Self::channel(self.red),
            Self::channel(self.green),
            Self::channel(self.blue),
            Self::channel(self.alpha)
        )
    }
}

/// Reference to an image file inside the bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub filename: String,
}

/// A concrete resource value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Resource {
    Color(Srgba),
    Image(ImageRef),
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Color(color) => write!(f, "{}", color),
            Resource::Image(image) => write!(f, "{}", image.filename),
        }
    }
}

/// Result of resolving a symbol against a bundle. Owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedHandle {
    pub bundle: BundleIdentity,
    pub category: Category,
    pub name: String,

    /// Variant that satisfied the requested appearance.
    pub variant: VariantTag,

    pub resource: Resource,
}
