//! Implementation of `tokensmith generate`.
//!
//! Generation is all-or-nothing: any registry or naming error aborts before
//! the output file is touched, and a successful run replaces the whole file.

use std::fmt;
use std::path::PathBuf;

use anyhow::{bail, Result};
use serde::Serialize;

use crate::codegen::emit::{emit, EmitOptions, TargetSyntax};
use crate::core::symbol::BundleIdentity;
use crate::ops::ingest::{build_registry, load_manifest};
use crate::util::fs::write_atomic;
use crate::util::hash::{sha256_existing, sha256_str, short};

/// Options for a generation pass.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Token manifest or asset catalog
    pub manifest: PathBuf,

    /// Generated source file
    pub output: PathBuf,

    pub syntax: TargetSyntax,

    /// Identifier prefix
    pub namespace: String,

    /// Overrides the manifest's `bundle-id`
    pub bundle_id: Option<String>,

    /// Asset names to emit with public visibility
    pub public: Vec<String>,

    /// Report drift without writing
    pub check: bool,
}

/// What happened to the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerateStatus {
    /// New contents were written
    Written,
    /// Existing file already matched
    Unchanged,
    /// Check mode found the file out of date
    WouldChange,
}

impl fmt::Display for GenerateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GenerateStatus::Written => "written",
            GenerateStatus::Unchanged => "unchanged",
            GenerateStatus::WouldChange => "out of date",
        })
    }
}

/// Result of a generation pass.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResult {
    pub output: PathBuf,
    pub status: GenerateStatus,

    /// Number of symbols in the file
    pub symbols: usize,

    /// SHA-256 of the generated contents
    pub digest: String,
}

/// Run a generation pass.
pub fn generate(options: &GenerateOptions) -> Result<GenerateResult> {
    let mut manifest = load_manifest(&options.manifest)?;
    manifest.publish(&options.public);

    let bundle_id = match options.bundle_id.clone().or_else(|| manifest.bundle_id.clone()) {
        Some(id) if !id.trim().is_empty() => BundleIdentity::new(id),
        _ => bail!(
            "no bundle identifier for {}\n\
             \n\
             Set `bundle-id` in the manifest, `generate.bundle-id` in tokensmith.toml, \
             or pass --bundle-id.",
            options.manifest.display()
        ),
    };

    let mut registry = build_registry(&manifest)?;

    let emit_options =
        EmitOptions::new(options.syntax, bundle_id).with_namespace(options.namespace.clone());
    let contents = emit(&registry, &emit_options)?;
    let digest = sha256_str(&contents);
    let symbols = registry.len();

    let existing = sha256_existing(&options.output)?;
    let status = if existing.as_deref() == Some(digest.as_str()) {
        GenerateStatus::Unchanged
    } else if options.check {
        GenerateStatus::WouldChange
    } else {
        write_atomic(&options.output, &contents)?;
        GenerateStatus::Written
    };

    if status != GenerateStatus::WouldChange {
        registry.mark_emitted()?;
    }

    tracing::info!(
        "{} symbols -> {} ({}, {})",
        symbols,
        options.output.display(),
        status,
        short(&digest)
    );

    Ok(GenerateResult {
        output: options.output.clone(),
        status,
        symbols,
        digest,
    })
}
