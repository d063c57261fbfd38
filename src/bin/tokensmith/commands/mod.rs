//! Command implementations

pub mod completions;
pub mod generate;
pub mod resolve;
pub mod verify;

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use tokensmith::util::diagnostic::suggestions;
use tokensmith::util::Config;

/// Manifest path: flag, then `generate.manifest`.
pub(crate) fn manifest_path(flag: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    flag.or_else(|| config.generate.manifest.clone())
        .ok_or_else(|| anyhow!("no token manifest given\n\n{}", suggestions::NO_MANIFEST))
}

/// Bundle catalog path: flag, then the `[bundles]` entry for the identity.
pub(crate) fn bundle_path(
    flag: Option<PathBuf>,
    bundle_id: Option<&str>,
    config: &Config,
) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }

    bundle_id
        .and_then(|id| config.bundle_path(id))
        .map(|p| p.to_path_buf())
        .ok_or_else(|| match bundle_id {
            Some(id) => anyhow!(
                "no asset catalog configured for bundle `{}`\n\n{}",
                id,
                suggestions::NO_BUNDLE
            ),
            None => anyhow!("no bundle given\n\n{}", suggestions::NO_BUNDLE),
        })
}
