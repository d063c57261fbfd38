//! `.xcassets` asset catalog reader.
//!
//! An asset catalog is a directory tree. Every `<Name>.colorset` or
//! `<Name>.imageset` folder is one asset described by a `Contents.json`:
//!
//! ```json
//! {
//!   "colors" : [
//!     { "color" : { "color-space" : "srgb",
//!                   "components" : { "red" : "0.961", "green" : "0.620",
//!                                    "blue" : "0.043", "alpha" : "1.000" } },
//!       "idiom" : "universal" },
//!     { "appearances" : [ { "appearance" : "luminosity", "value" : "dark" } ],
//!       "color" : { ... }, "idiom" : "universal" }
//!   ]
//! }
//! ```
//!
//! Plain folders group assets; a folder whose `Contents.json` sets
//! `properties.provides-namespace` prefixes its children (`Brand/Primary`).
//! Other asset types (`appiconset`, `dataset`, ...) are skipped.
//!
//! The same reader serves generation (as a manifest source) and runtime
//! resolution (as a [`ResourceBundle`]).

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Deserialize;
use walkdir::WalkDir;

use crate::catalog::errors::ResolveError;
use crate::catalog::{ImageRef, Resource, ResourceBundle, Srgba};
use crate::core::manifest::{Category, Manifest, ResourceManifestEntry, VariantTag, Visibility};
use crate::core::symbol::BundleIdentity;

/// One asset read from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogAsset {
    /// Asset name including namespace folders, e.g. `Brand/Primary`.
    pub name: String,

    pub category: Category,

    /// Stored variants in catalog order; the first slot wins on duplicates.
    pub variants: Vec<(VariantTag, Resource)>,
}

/// A loaded asset catalog.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    identity: BundleIdentity,
    root: PathBuf,
    assets: Vec<CatalogAsset>,
    index: HashMap<(Category, String), usize>,
}

impl AssetCatalog {
    /// Read a catalog directory.
    ///
    /// The catalog answers to its directory name until
    /// [`with_identity`](Self::with_identity) is called.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, ResolveError> {
        let root = root.as_ref();
        let default_identity = BundleIdentity::new(
            root.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| root.display().to_string()),
        );

        if !root.is_dir() {
            return Err(ResolveError::BundleUnavailable {
                bundle: default_identity.to_string(),
                reason: format!("{} is not a directory", root.display()),
            });
        }

        let pending = discover(root).map_err(|reason| ResolveError::BundleUnavailable {
            bundle: default_identity.to_string(),
            reason,
        })?;

        let assets = pending
            .par_iter()
            .map(|p| p.load())
            .collect::<Result<Vec<_>, String>>()
            .map_err(|reason| ResolveError::BundleUnavailable {
                bundle: default_identity.to_string(),
                reason,
            })?;

        let mut index = HashMap::new();
        for (i, asset) in assets.iter().enumerate() {
            let key = (asset.category, asset.name.clone());
            if index.contains_key(&key) {
                tracing::warn!(
                    "{} `{}` appears more than once in {}",
                    asset.category,
                    asset.name,
                    root.display()
                );
                continue;
            }
            index.insert(key, i);
        }

        tracing::debug!("loaded {} assets from {}", assets.len(), root.display());

        Ok(AssetCatalog {
            identity: default_identity,
            root: root.to_path_buf(),
            assets,
            index,
        })
    }

    /// Answer to a bundle identifier instead of the directory name.
    pub fn with_identity(mut self, identity: impl Into<BundleIdentity>) -> Self {
        self.identity = identity.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Assets in catalog order (sorted by path).
    pub fn assets(&self) -> &[CatalogAsset] {
        &self.assets
    }

    /// Every asset as an internal manifest entry, in catalog order.
    ///
    /// Duplicate names are kept so the registry can reject them.
    pub fn to_manifest(&self) -> Manifest {
        let entries = self
            .assets
            .iter()
            .map(|asset| ResourceManifestEntry {
                name: asset.name.clone(),
                category: asset.category,
                variants: asset.variants.iter().map(|(v, _)| *v).collect(),
                visibility: Visibility::Internal,
            })
            .collect();

        Manifest {
            bundle_id: None,
            entries,
        }
    }

    fn lookup(&self, category: Category, name: &str) -> Option<&CatalogAsset> {
        self.index
            .get(&(category, name.to_string()))
            .map(|&i| &self.assets[i])
    }
}

impl ResourceBundle for AssetCatalog {
    fn identity(&self) -> &BundleIdentity {
        &self.identity
    }

    fn has(&self, category: Category, name: &str) -> bool {
        self.lookup(category, name).is_some()
    }

    fn get(&self, category: Category, name: &str, variant: VariantTag) -> Option<Resource> {
        self.lookup(category, name)?
            .variants
            .iter()
            .find(|(v, _)| *v == variant)
            .map(|(_, resource)| resource.clone())
    }

    fn variants(&self, category: Category, name: &str) -> Vec<VariantTag> {
        self.lookup(category, name)
            .map(|asset| asset.variants.iter().map(|(v, _)| *v).collect())
            .unwrap_or_default()
    }

    fn names(&self, category: Category) -> Vec<String> {
        self.assets
            .iter()
            .filter(|a| a.category == category)
            .map(|a| a.name.clone())
            .collect()
    }
}

/// Asset folder types that are never read and never hold other assets.
/// Any other folder, dotted or not, is walked as a group.
const OPAQUE_ASSET_TYPES: &[&str] = &[
    "appiconset",
    "brandassets",
    "complicationset",
    "cubetextureset",
    "dataset",
    "iconset",
    "imagestack",
    "imagestacklayer",
    "launchimage",
    "mipmapset",
    "solidimagestack",
    "stickerpack",
    "stickersequence",
    "sticker",
    "symbolset",
    "textureset",
];

/// An asset folder found during the directory walk.
struct PendingAsset {
    name: String,
    category: Category,
    dir: PathBuf,
}

/// Walk the catalog in path order, collecting asset folders.
fn discover(root: &Path) -> Result<Vec<PendingAsset>, String> {
    let mut pending = Vec::new();
    let mut namespaces: HashSet<PathBuf> = HashSet::new();

    let mut walker = WalkDir::new(root).sort_by_file_name().into_iter();
    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|e| format!("failed to read {}: {}", root.display(), e))?;
        if !entry.file_type().is_dir() || entry.depth() == 0 {
            continue;
        }

        let path = entry.path();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();

        let category = Category::ALL
            .into_iter()
            .find(|c| c.catalog_extension() == extension);

        let Some(category) = category else {
            if OPAQUE_ASSET_TYPES.contains(&extension.as_str()) {
                tracing::debug!("skipping {} (unsupported asset type)", path.display());
                walker.skip_current_dir();
            } else if provides_namespace(path) {
                namespaces.insert(path.to_path_buf());
            }
            continue;
        };

        // Asset folders are leaves.
        walker.skip_current_dir();

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut segments: Vec<String> = path
            .ancestors()
            .skip(1)
            .take_while(|a| *a != root)
            .filter(|a| namespaces.contains(*a))
            .filter_map(|a| a.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        segments.reverse();
        segments.push(stem);

        pending.push(PendingAsset {
            name: segments.join("/"),
            category,
            dir: path.to_path_buf(),
        });
    }

    Ok(pending)
}

fn provides_namespace(dir: &Path) -> bool {
    let path = dir.join("Contents.json");
    let Ok(contents) = std::fs::read_to_string(&path) else {
        return false;
    };

    match serde_json::from_str::<FolderContents>(&contents) {
        Ok(folder) => folder.properties.provides_namespace,
        Err(e) => {
            tracing::warn!("ignoring malformed {}: {}", path.display(), e);
            false
        }
    }
}

impl PendingAsset {
    fn load(&self) -> Result<CatalogAsset, String> {
        let path = self.dir.join("Contents.json");
        let variants = if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
            let parsed = match self.category {
                Category::Color => parse_colorset(&contents),
                Category::Image => parse_imageset(&contents),
            };
            parsed.map_err(|e| format!("invalid {}: {}", path.display(), e))?
        } else {
            tracing::warn!("{} has no Contents.json", self.dir.display());
            Vec::new()
        };

        Ok(CatalogAsset {
            name: self.name.clone(),
            category: self.category,
            variants,
        })
    }
}

#[derive(Debug, Deserialize)]
struct FolderContents {
    #[serde(default)]
    properties: FolderProperties,
}

#[derive(Debug, Default, Deserialize)]
struct FolderProperties {
    #[serde(default, rename = "provides-namespace")]
    provides_namespace: bool,
}

#[derive(Debug, Deserialize)]
struct ColorSetContents {
    #[serde(default)]
    colors: Vec<ColorSlot>,
}

#[derive(Debug, Deserialize)]
struct ColorSlot {
    #[serde(default)]
    appearances: Vec<AppearanceSpec>,
    color: Option<ColorSpec>,
}

#[derive(Debug, Deserialize)]
struct ColorSpec {
    #[serde(default)]
    components: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ImageSetContents {
    #[serde(default)]
    images: Vec<ImageSlot>,
}

#[derive(Debug, Deserialize)]
struct ImageSlot {
    #[serde(default)]
    appearances: Vec<AppearanceSpec>,
    filename: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AppearanceSpec {
    appearance: String,
    value: String,
}

fn parse_colorset(contents: &str) -> Result<Vec<(VariantTag, Resource)>, serde_json::Error> {
    let parsed: ColorSetContents = serde_json::from_str(contents)?;
    let mut variants: Vec<(VariantTag, Resource)> = Vec::new();

    for slot in parsed.colors {
        let (Some(variant), Some(spec)) = (variant_for(&slot.appearances), slot.color) else {
            continue;
        };
        if variants.iter().any(|(v, _)| *v == variant) {
            continue;
        }
        if let Some(color) = color_from_components(&spec.components) {
            variants.push((variant, Resource::Color(color)));
        }
    }

    Ok(variants)
}

fn parse_imageset(contents: &str) -> Result<Vec<(VariantTag, Resource)>, serde_json::Error> {
    let parsed: ImageSetContents = serde_json::from_str(contents)?;
    let mut variants: Vec<(VariantTag, Resource)> = Vec::new();

    for slot in parsed.images {
        let (Some(variant), Some(filename)) = (variant_for(&slot.appearances), slot.filename)
        else {
            continue;
        };
        if variants.iter().any(|(v, _)| *v == variant) {
            continue;
        }
        variants.push((variant, Resource::Image(ImageRef { filename })));
    }

    Ok(variants)
}

/// Map catalog appearances to a variant tag. Unknown appearance kinds yield `None`.
fn variant_for(appearances: &[AppearanceSpec]) -> Option<VariantTag> {
    let mut luminosity = None;
    let mut high_contrast = false;

    for spec in appearances {
        match (spec.appearance.as_str(), spec.value.as_str()) {
            ("luminosity", "light") => luminosity = Some(VariantTag::Light),
            ("luminosity", "dark") => luminosity = Some(VariantTag::Dark),
            ("contrast", "high") => high_contrast = true,
            (kind, value) => {
                tracing::debug!("ignoring slot with appearance {}={}", kind, value);
                return None;
            }
        }
    }

    Some(match (luminosity, high_contrast) {
        (None, false) => VariantTag::Any,
        (Some(tag), false) => tag,
        (Some(VariantTag::Dark), true) => VariantTag::DarkHighContrast,
        (_, true) => VariantTag::HighContrast,
    })
}

fn color_from_components(components: &HashMap<String, serde_json::Value>) -> Option<Srgba> {
    let channel = |key: &str| components.get(key).and_then(parse_component);
    let alpha = channel("alpha").unwrap_or(1.0);

    if let Some(white) = channel("white") {
        return Some(Srgba::new(white, white, white, alpha));
    }

    Some(Srgba::new(
        channel("red")?,
        channel("green")?,
        channel("blue")?,
        alpha,
    ))
}

/// Parse one component. Catalogs store `"0.961"`, `"0xF5"`, `"245"` or bare numbers.
fn parse_component(value: &serde_json::Value) -> Option<f32> {
    match value {
        serde_json::Value::Number(n) => n.as_f64().map(|f| normalize(f as f32, false)),
        serde_json::Value::String(s) => {
            let s = s.trim();
            if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                u8::from_str_radix(hex, 16).ok().map(|v| f32::from(v) / 255.0)
            } else {
                s.parse::<f32>().ok().map(|f| normalize(f, s.contains('.')))
            }
        }
        _ => None,
    }
}

/// Integers above one are 8-bit channel values.
fn normalize(value: f32, fractional: bool) -> f32 {
    if !fractional && value > 1.0 {
        value / 255.0
    } else {
        value
    }
}
