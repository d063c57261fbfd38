//! User-friendly diagnostic messages.
//!
//! Every error shown to a user carries the root cause, the surrounding
//! context, and suggested fixes.

use std::fmt;
use std::path::PathBuf;

use crate::catalog::errors::ResolveError;
use crate::core::errors::{ParseError, TokenError};

/// Common suggestion messages for consistent error handling.
pub mod suggestions {
    /// Suggestion when no manifest is configured.
    pub const NO_MANIFEST: &str =
        "help: Pass --manifest or set `generate.manifest` in tokensmith.toml";

    /// Suggestion when no output path is configured.
    pub const NO_OUTPUT: &str = "help: Pass --output or set `generate.output` in tokensmith.toml";

    /// Suggestion when no bundle path is known.
    pub const NO_BUNDLE: &str =
        "help: Pass --bundle or add the identity under `[bundles]` in tokensmith.toml";

    /// Suggestion when generated output is stale.
    pub const STALE_OUTPUT: &str = "help: Run `tokensmith generate` to refresh generated symbols";
}

/// A diagnostic message with optional suggestions.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Primary message
    pub message: String,
    /// Additional context lines
    pub context: Vec<String>,
    /// Suggested fixes
    pub suggestions: Vec<String>,
    /// Related location (file path)
    pub location: Option<PathBuf>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            location: None,
        }
    }

    /// Build a diagnostic for any error, using the rich form when the chain
    /// holds a [`TokenError`], [`ResolveError`] or [`ParseError`].
    pub fn from_error(err: &anyhow::Error) -> Self {
        let typed = err.chain().find_map(|cause| {
            cause
                .downcast_ref::<TokenError>()
                .map(TokenError::to_diagnostic)
                .or_else(|| cause.downcast_ref::<ResolveError>().map(ResolveError::to_diagnostic))
                .or_else(|| cause.downcast_ref::<ParseError>().map(ParseError::to_diagnostic))
        });

        if let Some(diag) = typed {
            return diag;
        }

        let mut diag = Diagnostic::error(err.to_string());
        for cause in err.chain().skip(1) {
            diag = diag.with_context(cause.to_string());
        }
        diag
    }

    /// Add context to the diagnostic.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Add a suggestion for fixing the issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Add a file location.
    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// Format the diagnostic for terminal output.
    pub fn format(&self, color: bool) -> String {
        let mut output = String::new();

        let prefix = if color {
            "\x1b[1;31merror\x1b[0m"
        } else {
            "error"
        };

        output.push_str(&format!("{}: {}\n", prefix, self.message));

        if let Some(ref path) = self.location {
            output.push_str(&format!("  --> {}\n", path.display()));
        }

        for ctx in &self.context {
            output.push_str(&format!("  -> {}\n", ctx));
        }

        if !self.suggestions.is_empty() {
            output.push('\n');
            let help_prefix = if color {
                "\x1b[1;32mhelp\x1b[0m"
            } else {
                "help"
            };
            output.push_str(&format!("{}: consider:\n", help_prefix));
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
            }
        }

        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(false))
    }
}

/// Print a diagnostic to stderr.
pub fn emit(diagnostic: &Diagnostic, color: bool) {
    eprint!("{}", diagnostic.format(color));
}
