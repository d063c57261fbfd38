//! Emission of generated source.
//!
//! Emission is a pure function of a sealed registry: the whole file is
//! rendered in one pass and always replaces the previous output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codegen::ident::{IdentifierGenerator, NamingStyle};
use crate::codegen::objc::ObjcHeaderEmitter;
use crate::codegen::rust::RustEmitter;
use crate::codegen::swift::SwiftEmitter;
use crate::core::errors::TokenError;
use crate::core::registry::TokenRegistry;
use crate::core::symbol::{BundleIdentity, SymbolTable};

/// First line of every generated file.
pub const GENERATED_BANNER: &str = "Generated by tokensmith. Do not edit.";

/// Source language of the generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetSyntax {
    /// Objective-C header of `NSString` constants
    #[default]
    #[serde(alias = "objc-header")]
    Objc,
    /// Swift `ColorResource`/`ImageResource` extensions
    Swift,
    /// Rust `&str` constants
    Rust,
}

impl TargetSyntax {
    pub fn naming_style(&self) -> NamingStyle {
        match self {
            TargetSyntax::Objc => NamingStyle::Constant,
            TargetSyntax::Swift => NamingStyle::Member,
            TargetSyntax::Rust => NamingStyle::ShoutyConstant,
        }
    }

    /// Conventional extension for the generated file.
    pub fn file_extension(&self) -> &'static str {
        match self {
            TargetSyntax::Objc => "h",
            TargetSyntax::Swift => "swift",
            TargetSyntax::Rust => "rs",
        }
    }

    /// Renderer for this syntax.
    pub fn emitter(&self, namespace: &str) -> Box<dyn Emitter> {
        match self {
            TargetSyntax::Objc => Box::new(ObjcHeaderEmitter::new(namespace)),
            TargetSyntax::Swift => Box::new(SwiftEmitter),
            TargetSyntax::Rust => Box::new(RustEmitter::new(namespace)),
        }
    }
}

impl fmt::Display for TargetSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetSyntax::Objc => write!(f, "objc"),
            TargetSyntax::Swift => write!(f, "swift"),
            TargetSyntax::Rust => write!(f, "rust"),
        }
    }
}

impl FromStr for TargetSyntax {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "objc" | "objc-header" | "h" => Ok(TargetSyntax::Objc),
            "swift" => Ok(TargetSyntax::Swift),
            "rust" | "rs" => Ok(TargetSyntax::Rust),
            other => Err(format!(
                "invalid target '{}', valid values: objc, swift, rust",
                other
            )),
        }
    }
}

/// Options for a single emission.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    pub syntax: TargetSyntax,

    /// Prefix for constant names (`AC` -> `ACColorNameAmber`)
    pub namespace: String,

    pub bundle: BundleIdentity,
}

impl EmitOptions {
    pub fn new(syntax: TargetSyntax, bundle: BundleIdentity) -> Self {
        EmitOptions {
            syntax,
            namespace: String::new(),
            bundle,
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }
}

/// A target-specific renderer for a symbol table.
pub trait Emitter {
    /// Render the complete file.
    ///
    /// Symbols are grouped by category in `Category::ALL` order and keep
    /// table order within each group.
    fn render(&self, table: &SymbolTable, bundle: &BundleIdentity) -> String;
}

/// Generate symbols for a sealed registry and render them.
pub fn emit(registry: &TokenRegistry, options: &EmitOptions) -> Result<String, TokenError> {
    let table = IdentifierGenerator::new(options.syntax.naming_style())
        .with_namespace(&options.namespace)
        .generate_all(registry)?;

    tracing::debug!(
        "emitting {} symbols as {}",
        table.len(),
        options.syntax
    );

    Ok(options
        .syntax
        .emitter(&options.namespace)
        .render(&table, &options.bundle))
}

/// Escape text for a Swift string literal.
pub(crate) fn escape_literal(s: &str) -> String {
    escape_with(s, |c, out| out.push_str(&format!("\\u{{{:x}}}", c as u32)))
}

/// Escape text for an Objective-C string literal. Octal escapes stop after
/// three digits, so they never swallow the characters that follow.
pub(crate) fn escape_c_literal(s: &str) -> String {
    escape_with(s, |c, out| out.push_str(&format!("\\{:03o}", c as u32)))
}

/// Make text safe inside a line comment: control characters become visible
/// escapes so the comment cannot end early.
pub(crate) fn escape_comment(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_control() {
                c.escape_default().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

fn escape_with(s: &str, other_control: impl Fn(char, &mut String)) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => other_control(c, &mut escaped),
            c => escaped.push(c),
        }
    }
    escaped
}
