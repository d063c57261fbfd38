//! Build-time error types and diagnostics.
//!
//! Every variant is fatal to a generation pass: the pipeline aborts and no
//! output file is written.

use std::fmt;
use std::path::PathBuf;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::core::manifest::{Category, VariantTag};
use crate::util::diagnostic::Diagnostic;

/// Error while registering tokens or generating symbols.
#[derive(Debug, Clone, PartialEq, Eq, Error, MietteDiagnostic)]
pub enum TokenError {
    #[error("duplicate {category} token `{name}`")]
    #[diagnostic(code(tokensmith::registry::duplicate_name))]
    DuplicateName { category: Category, name: String },

    #[error("{category} token has an empty name")]
    #[diagnostic(code(tokensmith::registry::empty_name))]
    EmptyName { category: Category },

    #[error("token `{name}` declares variant `{variant}` more than once")]
    #[diagnostic(code(tokensmith::registry::duplicate_variant))]
    DuplicateVariant { name: String, variant: VariantTag },

    #[error("registry is sealed; cannot register `{name}`")]
    #[diagnostic(
        code(tokensmith::registry::sealed),
        help("Build a fresh registry from the manifest instead of mutating a sealed one")
    )]
    SealedRegistry { name: String },

    #[error("registry must be sealed before symbols are emitted")]
    #[diagnostic(code(tokensmith::registry::not_sealed))]
    NotSealed,

    #[error("`{first}` and `{second}` both produce symbol `{symbol}`")]
    #[diagnostic(
        code(tokensmith::codegen::symbol_collision),
        help("Rename one of the assets so their identifiers differ")
    )]
    SymbolCollision {
        symbol: String,
        first: String,
        second: String,
    },

    #[error("`{name}` contains no characters usable in an identifier")]
    #[diagnostic(code(tokensmith::codegen::unrepresentable))]
    Unrepresentable { name: String },
}

/// A manifest or config file that is not valid TOML for its schema.
#[derive(Debug, Clone, PartialEq, Eq, Error, MietteDiagnostic)]
#[error("failed to parse {kind}: {}", .path.display())]
#[diagnostic(code(tokensmith::parse))]
pub struct ParseError {
    pub kind: &'static str,
    pub path: PathBuf,
    pub message: String,
}

impl ParseError {
    pub fn new(kind: &'static str, path: impl Into<PathBuf>, source: impl fmt::Display) -> Self {
        ParseError {
            kind,
            path: path.into(),
            message: source.to_string().trim_end().to_string(),
        }
    }

    /// Convert to a user-friendly diagnostic pointing at the file.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(format!("invalid {} file", self.kind))
            .with_location(&self.path);
        for line in self.message.lines().filter(|l| !l.trim().is_empty()) {
            diag = diag.with_context(line.to_string());
        }
        diag
    }
}

impl TokenError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            TokenError::DuplicateName { category, name } => {
                Diagnostic::error(format!("{} token `{}` is declared twice", category, name))
                    .with_context("token names must be unique within their category")
                    .with_suggestion(format!("Remove or rename one of the `{}` entries", name))
            }

            TokenError::EmptyName { category } => {
                Diagnostic::error(format!("a {} token has an empty name", category))
                    .with_suggestion("Give every asset a non-empty name")
            }

            TokenError::DuplicateVariant { name, variant } => Diagnostic::error(format!(
                "token `{}` declares the `{}` variant more than once",
                name, variant
            ))
            .with_suggestion("List each appearance variant once"),

            TokenError::SealedRegistry { name } => {
                Diagnostic::error(format!("cannot register `{}` after sealing", name))
                    .with_context("a sealed registry is read-only")
                    .with_suggestion("Re-run generation from a fresh manifest")
            }

            TokenError::NotSealed => {
                Diagnostic::error("symbols were requested from an unsealed registry")
                    .with_suggestion("Call `seal()` once every manifest entry is registered")
            }

            TokenError::SymbolCollision {
                symbol,
                first,
                second,
            } => Diagnostic::error(format!("symbol collision on `{}`", symbol))
                .with_context(format!("`{}` sanitizes to `{}`", first, symbol))
                .with_context(format!("`{}` sanitizes to `{}`", second, symbol))
                .with_suggestion(format!("Rename `{}` or `{}` in the asset catalog", first, second)),

            TokenError::Unrepresentable { name } => Diagnostic::error(format!(
                "`{}` cannot be turned into an identifier",
                name
            ))
            .with_suggestion("Include at least one letter or digit in the asset name"),
        }
    }
}
