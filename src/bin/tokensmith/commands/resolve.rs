//! `tokensmith resolve` command

use anyhow::{anyhow, Result};

use crate::cli::ResolveArgs;
use crate::commands::bundle_path;
use tokensmith::catalog::{AppearanceContext, BundleResolver, BundleSet};
use tokensmith::codegen::{IdentifierGenerator, NamingStyle};
use tokensmith::core::{BundleIdentity, Category, ResourceManifestEntry};
use tokensmith::util::Config;

pub fn execute(args: ResolveArgs, config: &Config) -> Result<()> {
    let category: Category = args
        .category
        .parse()
        .map_err(|e| anyhow!("invalid category: {}", e))?;

    let bundle_id = args
        .bundle_id
        .or_else(|| config.generate.bundle_id.clone());
    let path = bundle_path(args.bundle, bundle_id.as_deref(), config)?;

    // Without an identifier the catalog answers to its directory name.
    let identity = BundleIdentity::new(bundle_id.unwrap_or_else(|| {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }));

    let mut bundles = BundleSet::new();
    bundles.open_catalog(identity.clone(), &path)?;
    let resolver = BundleResolver::new(bundles);

    let namespace = config.generate.namespace.clone().unwrap_or_default();
    let constant = IdentifierGenerator::new(NamingStyle::Constant)
        .with_namespace(namespace)
        .generate(&ResourceManifestEntry::new(args.name.as_str(), category))?;

    let appearance = if args.dark {
        AppearanceContext::dark()
    } else {
        AppearanceContext::light()
    }
    .with_high_contrast(args.high_contrast);

    let handle = resolver.resolve(&constant, &identity, appearance)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&handle)?);
    } else {
        println!(
            "{} = {} ({} variant of {} `{}` for {})",
            constant.symbol_name, handle.resource, handle.variant, category, handle.name, appearance
        );
    }

    Ok(())
}
