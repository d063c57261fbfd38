//! Symbol/bundle cross-check.
//!
//! Confirms before shipping that every generated symbol names an asset the
//! packaged bundle actually contains, so lookups cannot fail at runtime for
//! want of a resource.
//!
//! ## Usage
//!
//! ```bash
//! tokensmith verify                              # Use tokensmith.toml
//! tokensmith verify --bundle Assets.xcassets     # Check a specific catalog
//! tokensmith verify --strict                     # Also reject undeclared assets
//! tokensmith verify --output-format json         # Machine-readable output
//! ```

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::catalog::{AssetCatalog, ResourceBundle};
use crate::codegen::ident::{IdentifierGenerator, NamingStyle};
use crate::core::manifest::Category;
use crate::core::symbol::SymbolTable;
use crate::ops::ingest::{build_registry, load_manifest};

/// Output format for verification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// Machine-readable JSON output
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = OutputFormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            _ => Err(OutputFormatParseError(s.to_string())),
        }
    }
}

/// Error parsing output format option.
#[derive(Debug, Clone)]
pub struct OutputFormatParseError(pub String);

impl std::fmt::Display for OutputFormatParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid output format '{}', valid values: human, json",
            self.0
        )
    }
}

impl std::error::Error for OutputFormatParseError {}

/// Options for the verify command.
#[derive(Debug, Clone, Default)]
pub struct VerifyOptions {
    /// Fail when the bundle holds assets no symbol refers to
    pub strict: bool,

    /// Identifier prefix, so reports name the symbols that were generated
    pub namespace: Option<String>,
}

/// A symbol whose asset is absent from the bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingAsset {
    pub symbol: String,
    pub category: Category,
    pub name: String,
}

/// An asset in the bundle with no generated symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UndeclaredAsset {
    pub category: Category,
    pub name: String,
}

/// Outcome of a cross-check.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    /// Bundle identity checked
    pub bundle: String,

    /// Number of symbols checked
    pub checked: usize,

    pub missing: Vec<MissingAsset>,

    /// Reported always, fatal only in strict mode
    pub undeclared: Vec<UndeclaredAsset>,

    pub strict: bool,

    /// Whether verification passed overall
    pub passed: bool,
}

impl VerifyReport {
    pub fn is_ok(&self) -> bool {
        self.passed
    }
}

/// Check a symbol table against a bundle.
pub fn verify(
    table: &SymbolTable,
    bundle: &dyn ResourceBundle,
    options: &VerifyOptions,
) -> VerifyReport {
    let missing: Vec<_> = table
        .iter()
        .filter(|symbol| !bundle.has(symbol.category, &symbol.target_name))
        .map(|symbol| MissingAsset {
            symbol: symbol.symbol_name.clone(),
            category: symbol.category,
            name: symbol.target_name.clone(),
        })
        .collect();

    let undeclared: Vec<_> = Category::ALL
        .into_iter()
        .flat_map(|category| {
            bundle
                .names(category)
                .into_iter()
                .map(move |name| (category, name))
        })
        .filter(|(category, name)| table.find(*category, name).is_none())
        .map(|(category, name)| UndeclaredAsset { category, name })
        .collect();

    for asset in &missing {
        tracing::debug!("{} `{}` missing from {}", asset.category, asset.name, bundle.identity());
    }

    let passed = missing.is_empty() && (!options.strict || undeclared.is_empty());

    VerifyReport {
        bundle: bundle.identity().to_string(),
        checked: table.len(),
        missing,
        undeclared,
        strict: options.strict,
        passed,
    }
}

/// Load a manifest and an asset catalog from disk and cross-check them.
pub fn verify_catalog(
    manifest: &Path,
    catalog: &Path,
    bundle_id: Option<&str>,
    options: &VerifyOptions,
) -> Result<VerifyReport> {
    let manifest = load_manifest(manifest)?;
    let registry = build_registry(&manifest)?;
    let table = IdentifierGenerator::new(NamingStyle::Constant)
        .with_namespace(options.namespace.clone().unwrap_or_default())
        .generate_all(&registry)?;

    let mut bundle = AssetCatalog::open(catalog)
        .with_context(|| format!("failed to open bundle: {}", catalog.display()))?;
    if let Some(id) = bundle_id.or(manifest.bundle_id.as_deref()) {
        bundle = bundle.with_identity(id);
    }

    let report = verify(&table, &bundle, options);
    tracing::info!(
        "checked {} symbols against {}: {} missing, {} undeclared",
        report.checked,
        report.bundle,
        report.missing.len(),
        report.undeclared.len()
    );

    Ok(report)
}

/// Format a verification report.
pub fn format_report(report: &VerifyReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(report),
        OutputFormat::Json => format_json(report),
    }
}

fn format_human(report: &VerifyReport) -> String {
    let mut output = String::new();

    writeln!(output, "Verifying bundle {}", report.bundle).ok();
    writeln!(output).ok();

    if report.missing.is_empty() {
        writeln!(output, "  [PASS] {} symbols resolve", report.checked).ok();
    } else {
        writeln!(
            output,
            "  [FAIL] {} of {} symbols have no asset",
            report.missing.len(),
            report.checked
        )
        .ok();
        for asset in &report.missing {
            writeln!(
                output,
                "         {} -> {} `{}`",
                asset.symbol, asset.category, asset.name
            )
            .ok();
        }
    }

    if !report.undeclared.is_empty() {
        let tag = if report.strict { "[FAIL]" } else { "[WARN]" };
        writeln!(
            output,
            "  {} {} assets have no symbol",
            tag,
            report.undeclared.len()
        )
        .ok();
        for asset in &report.undeclared {
            writeln!(output, "         {} `{}`", asset.category, asset.name).ok();
        }
    }

    writeln!(output).ok();
    if report.passed {
        writeln!(output, "Verification PASSED").ok();
    } else {
        writeln!(output, "Verification FAILED").ok();
    }

    output
}

fn format_json(report: &VerifyReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Srgba, StaticBundle};
    use crate::core::manifest::{ResourceManifestEntry, VariantTag};
    use crate::core::registry::TokenRegistry;

    fn table(names: &[&str]) -> SymbolTable {
        let registry = TokenRegistry::from_entries(
            names.iter().map(|n| ResourceManifestEntry::color(*n)),
        )
        .unwrap();
        IdentifierGenerator::new(NamingStyle::Constant)
            .generate_all(&registry)
            .unwrap()
    }

    fn bundle(names: &[&str]) -> StaticBundle {
        names.iter().fold(StaticBundle::new("com.venkat.focal.app"), |b, n| {
            b.with_color(*n, [(VariantTag::Any, Srgba::from_rgb8(0, 0, 0))])
        })
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("HUMAN".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
        assert!("github".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_verify_reports_missing() {
        let report = verify(
            &table(&["Amber", "Overlay"]),
            &bundle(&["Amber"]),
            &VerifyOptions::default(),
        );

        assert!(!report.is_ok());
        assert_eq!(
            report.missing,
            vec![MissingAsset {
                symbol: "ColorNameOverlay".to_string(),
                category: Category::Color,
                name: "Overlay".to_string(),
            }]
        );
    }

    #[test]
    fn test_undeclared_only_fails_strict() {
        let symbols = table(&["Amber"]);
        let assets = bundle(&["Amber", "Legacy"]);

        let lenient = verify(&symbols, &assets, &VerifyOptions {
                strict: false,
                ..Default::default()
            });
        assert!(lenient.is_ok());
        assert_eq!(lenient.undeclared.len(), 1);

        let strict = verify(&symbols, &assets, &VerifyOptions {
                strict: true,
                ..Default::default()
            });
        assert!(!strict.is_ok());
        assert!(format_report(&strict, OutputFormat::Human).contains("[FAIL] 1 assets have no symbol"));
    }

    #[test]
    fn test_format_human_and_json() {
        let report = verify(
            &table(&["Amber", "Overlay"]),
            &bundle(&["Amber"]),
            &VerifyOptions::default(),
        );

        let human = format_report(&report, OutputFormat::Human);
        assert!(human.contains("ColorNameOverlay -> color `Overlay`"));
        assert!(human.contains("Verification FAILED"));

        let json: serde_json::Value =
            serde_json::from_str(&format_report(&report, OutputFormat::Json)).unwrap();
        assert_eq!(json["passed"], false);
        assert_eq!(json["missing"][0]["name"], "Overlay");
        assert_eq!(json["missing"][0]["category"], "color");
    }

    #[test]
    fn test_verify_catalog_uses_namespace() {
        let fixture = crate::test_support::CatalogFixture::new()
            .color("Amber", &[(VariantTag::Any, (245, 158, 11))])
            .write();
        let manifest = fixture.catalog_path().with_file_name("tokens.toml");
        std::fs::write(
            &manifest,
            "[[token]]\nname = \"Amber\"\n\n[[token]]\nname = \"Overlay\"\n",
        )
        .unwrap();

        let options = VerifyOptions {
            namespace: Some("AC".to_string()),
            ..Default::default()
        };
        let report = verify_catalog(&manifest, &fixture.catalog_path(), None, &options).unwrap();

        assert!(!report.passed);
        assert_eq!(report.missing.len(), 1);
        assert_eq!(report.missing[0].symbol, "ACColorNameOverlay");
    }
}
