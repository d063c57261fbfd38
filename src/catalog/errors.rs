//! Runtime resolution errors and diagnostics.
//!
//! These are surfaced to the caller as-is; the resolver never substitutes a
//! default resource.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::core::manifest::{Category, VariantTag};
use crate::util::diagnostic::Diagnostic;

/// Error while resolving a symbol against a bundle.
#[derive(Debug, Clone, PartialEq, Eq, Error, MietteDiagnostic)]
pub enum ResolveError {
    #[error("{category} `{name}` not found in bundle `{bundle}`")]
    #[diagnostic(code(tokensmith::resolve::not_found))]
    ResourceNotFound {
        bundle: String,
        category: Category,
        name: String,
    },

    #[error("bundle `{bundle}` is unavailable: {reason}")]
    #[diagnostic(code(tokensmith::resolve::bundle_unavailable))]
    BundleUnavailable { bundle: String, reason: String },

    #[error("{category} `{name}` has no variant for the {appearance} appearance")]
    #[diagnostic(
        code(tokensmith::resolve::variant_not_found),
        help("Add a variant for this appearance or a universal (`any`) fallback")
    )]
    VariantNotFound {
        category: Category,
        name: String,
        appearance: String,
        available: Vec<VariantTag>,
    },
}

impl ResolveError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ResolveError::ResourceNotFound {
                bundle,
                category,
                name,
            } => Diagnostic::error(format!(
                "could not find {} `{}` in bundle `{}`",
                category, name, bundle
            ))
            .with_context("the generated symbols and the packaged bundle have drifted apart")
            .with_suggestion("Regenerate symbols from the current asset catalog")
            .with_suggestion(format!("Add `{}` to the bundle before packaging", name)),

            ResolveError::BundleUnavailable { bundle, reason } => {
                Diagnostic::error(format!("could not open bundle `{}`", bundle))
                    .with_context(reason.clone())
                    .with_suggestion("Check that the bundle is included in the install")
                    .with_suggestion("Verify the `[bundles]` paths in tokensmith.toml")
            }

            ResolveError::VariantNotFound {
                category,
                name,
                appearance,
                available,
            } => {
                let mut diag = Diagnostic::error(format!(
                    "{} `{}` has no variant for the {} appearance",
                    category, name, appearance
                ));

                if available.is_empty() {
                    diag = diag.with_context("no variants are stored for this asset");
                } else {
                    let names: Vec<_> = available.iter().map(|v| v.as_str()).collect();
                    diag = diag.with_context(format!("available variants: {}", names.join(", ")));
                }

                diag.with_suggestion("Add a universal (`any`) value to act as the fallback")
            }
        }
    }
}
