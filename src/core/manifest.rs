//! Token manifest parsing and schema.
//!
//! A manifest is the authoring tool's export: a bundle identifier plus an
//! ordered list of named resources, each with a category and a set of
//! variant tags. The TOML form looks like:
//!
//! ```toml
//! bundle-id = "com.example.app"
//!
//! [[token]]
//! name = "Amber"
//! variants = ["any", "dark"]
//!
//! [[token]]
//! name = "Logo"
//! category = "image"
//! public = true
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::errors::ParseError;
use crate::util::fs::read_to_string;

/// Resource category. Each category has its own symbol prefix and its own
/// name scope in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Color,
    Image,
}

impl Category {
    /// All categories, in emission order.
    pub const ALL: [Category; 2] = [Category::Color, Category::Image];

    /// Fixed prefix prepended to generated constant names.
    pub fn symbol_prefix(&self) -> &'static str {
        match self {
            Category::Color => "ColorName",
            Category::Image => "ImageName",
        }
    }

    /// Trailing word dropped from member-style names (`AccentColor` -> `accent`).
    pub fn member_suffix(&self) -> &'static str {
        match self {
            Category::Color => "Color",
            Category::Image => "Image",
        }
    }

    /// Asset catalog folder extension for this category.
    pub fn catalog_extension(&self) -> &'static str {
        match self {
            Category::Color => "colorset",
            Category::Image => "imageset",
        }
    }

    /// Capitalized name used in section headings.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Color => "Color",
            Category::Image => "Image",
        }
    }

    /// Lowercase noun used in generated comments and messages.
    pub fn noun(&self) -> &'static str {
        match self {
            Category::Color => "color",
            Category::Image => "image",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "color" | "colour" => Ok(Category::Color),
            "image" => Ok(Category::Image),
            other => Err(format!(
                "invalid category '{}', valid values: color, image",
                other
            )),
        }
    }
}

/// An appearance variant a token may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VariantTag {
    /// Universal value, used as the fallback for every appearance.
    #[serde(alias = "base", alias = "universal")]
    Any,
    Light,
    Dark,
    HighContrast,
    DarkHighContrast,
}

impl VariantTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantTag::Any => "any",
            VariantTag::Light => "light",
            VariantTag::Dark => "dark",
            VariantTag::HighContrast => "high-contrast",
            VariantTag::DarkHighContrast => "dark-high-contrast",
        }
    }
}

impl fmt::Display for VariantTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariantTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "any" | "base" | "universal" => Ok(VariantTag::Any),
            "light" => Ok(VariantTag::Light),
            "dark" => Ok(VariantTag::Dark),
            "high-contrast" => Ok(VariantTag::HighContrast),
            "dark-high-contrast" => Ok(VariantTag::DarkHighContrast),
            other => Err(format!(
                "invalid variant '{}', valid values: any, light, dark, high-contrast, dark-high-contrast",
                other
            )),
        }
    }
}

/// Linkage of a generated symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    /// Implementation-private; the emitters' default.
    #[default]
    Internal,
}

impl Visibility {
    pub fn is_public(&self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// One named resource from the authoring tool's export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceManifestEntry {
    /// Human-readable name, also the name stored in the bundle.
    pub name: String,

    pub category: Category,

    /// Declared variants, in declaration order.
    pub variants: Vec<VariantTag>,

    pub visibility: Visibility,
}

impl ResourceManifestEntry {
    /// Create an internal entry with only the universal variant.
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        ResourceManifestEntry {
            name: name.into(),
            category,
            variants: vec![VariantTag::Any],
            visibility: Visibility::Internal,
        }
    }

    /// Shorthand for a color entry.
    pub fn color(name: impl Into<String>) -> Self {
        Self::new(name, Category::Color)
    }

    /// Shorthand for an image entry.
    pub fn image(name: impl Into<String>) -> Self {
        Self::new(name, Category::Image)
    }

    /// Replace the declared variants.
    pub fn with_variants(mut self, variants: impl IntoIterator<Item = VariantTag>) -> Self {
        self.variants = variants.into_iter().collect();
        self
    }

    /// Mark the entry as public.
    pub fn public(mut self) -> Self {
        self.visibility = Visibility::Public;
        self
    }

    pub fn has_variant(&self, variant: VariantTag) -> bool {
        self.variants.contains(&variant)
    }
}

/// A loaded manifest: optional bundle identifier plus entries in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub bundle_id: Option<String>,
    pub entries: Vec<ResourceManifestEntry>,
}

/// Raw TOML representation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawManifest {
    #[serde(default)]
    bundle_id: Option<String>,

    #[serde(default, rename = "token")]
    tokens: Vec<RawToken>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawToken {
    name: String,

    #[serde(default)]
    category: Category,

    #[serde(default)]
    variants: Option<Vec<VariantTag>>,

    #[serde(default)]
    public: bool,
}

impl From<RawManifest> for Manifest {
    fn from(raw: RawManifest) -> Self {
        Manifest {
            bundle_id: raw.bundle_id,
            entries: raw.tokens.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<RawToken> for ResourceManifestEntry {
    fn from(raw: RawToken) -> Self {
        ResourceManifestEntry {
            name: raw.name,
            category: raw.category,
            variants: raw.variants.unwrap_or_else(|| vec![VariantTag::Any]),
            visibility: if raw.public {
                Visibility::Public
            } else {
                Visibility::Internal
            },
        }
    }
}

impl Manifest {
    /// Parse a TOML token manifest.
    pub fn parse(contents: &str) -> Result<Self> {
        let raw: RawManifest = toml::from_str(contents).context("invalid token manifest")?;
        Ok(raw.into())
    }

    /// Load a TOML token manifest from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = read_to_string(path)?;
        let raw: RawManifest =
            toml::from_str(&contents).map_err(|e| ParseError::new("manifest", path, e))?;

        Ok(raw.into())
    }

    /// Mark every entry whose name is listed as public.
    pub fn publish(&mut self, names: &[String]) {
        for entry in &mut self.entries {
            if names.iter().any(|n| n == &entry.name) {
                entry.visibility = Visibility::Public;
            }
        }
    }
}
