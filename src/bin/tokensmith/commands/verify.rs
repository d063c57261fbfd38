//! `tokensmith verify` command

use anyhow::{Context, Result};

use crate::cli::VerifyArgs;
use crate::commands::{bundle_path, manifest_path};
use tokensmith::ops::verify::{format_report, verify_catalog, OutputFormat, VerifyOptions};
use tokensmith::util::Config;

pub fn execute(args: VerifyArgs, config: &Config) -> Result<()> {
    let output_format: OutputFormat = args
        .output_format
        .parse()
        .with_context(|| format!("invalid output format: {}", args.output_format))?;

    let manifest = manifest_path(args.manifest, config)?;
    let bundle_id = args
        .bundle_id
        .or_else(|| config.generate.bundle_id.clone());
    let bundle = bundle_path(args.bundle, bundle_id.as_deref(), config)?;

    let options = VerifyOptions {
        strict: args.strict || config.verify.strict.unwrap_or(false),
        namespace: config.generate.namespace.clone(),
    };

    let report = verify_catalog(&manifest, &bundle, bundle_id.as_deref(), &options)?;

    print!("{}", format_report(&report, output_format));

    // Exit with error code if verification failed
    if !report.is_ok() {
        std::process::exit(1);
    }

    Ok(())
}
