//! `tokensmith generate` command

use anyhow::{anyhow, bail, Result};

use crate::cli::GenerateArgs;
use crate::commands::manifest_path;
use tokensmith::codegen::TargetSyntax;
use tokensmith::ops::generate::{generate, GenerateOptions, GenerateStatus};
use tokensmith::util::diagnostic::suggestions;
use tokensmith::util::Config;

pub fn execute(args: GenerateArgs, config: &Config) -> Result<()> {
    let manifest = manifest_path(args.manifest, config)?;

    let output = args
        .output
        .or_else(|| config.generate.output.clone())
        .ok_or_else(|| anyhow!("no output file given\n\n{}", suggestions::NO_OUTPUT))?;

    // Target: CLI > config > file extension > objc
    let syntax = match args.target {
        Some(ref t) => t
            .parse::<TargetSyntax>()
            .map_err(|e| anyhow!("invalid target: {}", e))?,
        None => match config.target()? {
            Some(t) => t,
            None => output
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(|ext| ext.parse().ok())
                .unwrap_or_default(),
        },
    };

    let namespace = args
        .namespace
        .or_else(|| config.generate.namespace.clone())
        .unwrap_or_default();

    // Public names: CLI list replaces the configured one
    let public = if args.public.is_empty() {
        config.generate.public.clone()
    } else {
        args.public
    };

    let options = GenerateOptions {
        manifest,
        output,
        syntax,
        namespace,
        bundle_id: args.bundle_id.or_else(|| config.generate.bundle_id.clone()),
        public,
        check: args.check,
    };

    let result = generate(&options)?;

    match result.status {
        GenerateStatus::Written => println!(
            "Generated {} symbols in {}",
            result.symbols,
            result.output.display()
        ),
        GenerateStatus::Unchanged => println!("{} is up to date", result.output.display()),
        GenerateStatus::WouldChange => bail!(
            "{} is out of date\n\n{}",
            result.output.display(),
            suggestions::STALE_OUTPUT
        ),
    }

    Ok(())
}
