//! Test utilities for tokensmith unit tests.
//!
//! Provides palette fixtures and a writer for on-disk `.xcassets` catalogs.
//!
//! # Example
//!
//! ```rust,ignore
//! use tokensmith::test_support::CatalogFixture;
//!
//! let fixture = CatalogFixture::new()
//!     .color("Amber", &[(VariantTag::Any, (245, 158, 11))])
//!     .namespace("Brand")
//!     .write();
//! let catalog = AssetCatalog::open(fixture.catalog_path())?;
//! ```

pub mod fixtures;

use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use tempfile::TempDir;

use crate::core::manifest::VariantTag;

pub use fixtures::*;

/// Builder for an asset catalog on disk.
///
/// Names containing `/` are written into nested folders.
#[derive(Debug, Clone, Default)]
pub struct CatalogFixture {
    colors: Vec<(String, Vec<(VariantTag, (u8, u8, u8))>)>,
    images: Vec<(String, Vec<(VariantTag, String)>)>,
    namespaces: Vec<String>,
}

impl CatalogFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a colorset with 8-bit sRGB values per variant.
    pub fn color(mut self, name: &str, variants: &[(VariantTag, (u8, u8, u8))]) -> Self {
        self.colors.push((name.to_string(), variants.to_vec()));
        self
    }

    /// Add an imageset with one file per variant.
    pub fn image(mut self, name: &str, variants: &[(VariantTag, &str)]) -> Self {
        self.images.push((
            name.to_string(),
            variants
                .iter()
                .map(|(v, file)| (*v, file.to_string()))
                .collect(),
        ));
        self
    }

    /// Mark a folder as providing a namespace.
    pub fn namespace(mut self, folder: &str) -> Self {
        self.namespaces.push(folder.to_string());
        self
    }

    /// Write the catalog into a fresh temporary directory.
    pub fn write(&self) -> WrittenCatalog {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("Assets.xcassets");
        self.write_to(&root);
        WrittenCatalog { _tmp: tmp, root }
    }

    /// Write the catalog to `root`.
    pub fn write_to(&self, root: &Path) {
        write_json(&root.join("Contents.json"), &info_only());

        for (name, variants) in &self.colors {
            let colors: Vec<Value> = variants
                .iter()
                .map(|(variant, (r, g, b))| {
                    slot(
                        *variant,
                        "color",
                        json!({
                            "color-space": "srgb",
                            "components": {
                                "red": format!("0x{:02X}", r),
                                "green": format!("0x{:02X}", g),
                                "blue": format!("0x{:02X}", b),
                                "alpha": "1.000",
                            }
                        }),
                    )
                })
                .collect();
            let dir = root.join(format!("{}.colorset", name));
            write_json(&dir.join("Contents.json"), &json!({ "colors": colors, "info": info() }));
        }

        for (name, variants) in &self.images {
            let images: Vec<Value> = variants
                .iter()
                .map(|(variant, file)| slot(*variant, "filename", json!(file)))
                .collect();
            let dir = root.join(format!("{}.imageset", name));
            write_json(&dir.join("Contents.json"), &json!({ "images": images, "info": info() }));
        }

        for folder in &self.namespaces {
            write_json(
                &root.join(folder).join("Contents.json"),
                &json!({ "info": info(), "properties": { "provides-namespace": true } }),
            );
        }
    }
}

/// A catalog written to disk; removed when dropped.
#[derive(Debug)]
pub struct WrittenCatalog {
    _tmp: TempDir,
    root: PathBuf,
}

impl WrittenCatalog {
    pub fn catalog_path(&self) -> PathBuf {
        self.root.clone()
    }
}

fn info() -> Value {
    json!({ "author": "xcode", "version": 1 })
}

fn info_only() -> Value {
    json!({ "info": info() })
}

fn slot(variant: VariantTag, key: &str, value: Value) -> Value {
    let appearances: Vec<Value> = match variant {
        VariantTag::Any => vec![],
        VariantTag::Light => vec![json!({ "appearance": "luminosity", "value": "light" })],
        VariantTag::Dark => vec![json!({ "appearance": "luminosity", "value": "dark" })],
        VariantTag::HighContrast => vec![json!({ "appearance": "contrast", "value": "high" })],
        VariantTag::DarkHighContrast => vec![
            json!({ "appearance": "luminosity", "value": "dark" }),
            json!({ "appearance": "contrast", "value": "high" }),
        ],
    };

    let mut object = json!({ "idiom": "universal" });
    if !appearances.is_empty() {
        object["appearances"] = Value::Array(appearances);
    }
    object[key] = value;
    object
}

fn write_json(path: &Path, value: &Value) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}
