//! Identifier generation.
//!
//! Turns human-authored asset names into identifiers for the target syntax.
//! Sanitizing splits the name on every character that cannot appear in an
//! identifier and upper-cases the first character of each segment, keeping
//! the rest of the segment as written:
//!
//! | Asset name      | Constant                | Member           |
//! |-----------------|-------------------------|------------------|
//! | `Amber`         | `ColorNameAmber`        | `amber`          |
//! | `AccentColor`   | `ColorNameAccentColor`  | `accent`         |
//! | `text-primary`  | `ColorNameTextPrimary`  | `textPrimary`    |
//! | `Brand/Primary` | `ColorNameBrandPrimary` | `brandPrimary`   |
//!
//! Two names that map to the same identifier are a hard error.

use std::collections::HashMap;

use heck::ToShoutySnakeCase;

use crate::core::errors::TokenError;
use crate::core::manifest::{Category, ResourceManifestEntry};
use crate::core::registry::TokenRegistry;
use crate::core::symbol::{SymbolTable, SymbolicConstant};

/// How symbol names are spelled for a target syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingStyle {
    /// `<namespace><CategoryPrefix><Sanitized>`, e.g. `ACColorNameAmber`.
    Constant,
    /// The constant name in SCREAMING_SNAKE_CASE, e.g. `COLOR_NAME_AMBER`.
    ShoutyConstant,
    /// Lower-camel member on a per-category type, e.g. `amberLight`.
    Member,
}

impl NamingStyle {
    /// Member names live on one type per category; constants share one namespace.
    fn scoped_per_category(&self) -> bool {
        matches!(self, NamingStyle::Member)
    }
}

/// Deterministic name generator with collision detection.
#[derive(Debug, Clone)]
pub struct IdentifierGenerator {
    style: NamingStyle,
    namespace: String,
    seen: HashMap<(Option<Category>, String), String>,
}

impl IdentifierGenerator {
    /// Create a generator for a naming style.
    pub fn new(style: NamingStyle) -> Self {
        IdentifierGenerator {
            style,
            namespace: String::new(),
            seen: HashMap::new(),
        }
    }

    /// Prepend a namespace to constant names (`AC` -> `ACColorNameAmber`).
    ///
    /// Member names ignore the namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = sanitize(&namespace.into());
        self
    }

    /// Generate the symbol for one entry.
    ///
    /// Fails if the name has no identifier characters or if a different
    /// name generated by this generator already produced the same symbol.
    pub fn generate(
        &mut self,
        entry: &ResourceManifestEntry,
    ) -> Result<SymbolicConstant, TokenError> {
        let symbol_name = self.symbol_name(entry.category, &entry.name)?;

        let scope = self.style.scoped_per_category().then_some(entry.category);
        if let Some(first) = self.seen.get(&(scope, symbol_name.clone())) {
            return Err(TokenError::SymbolCollision {
                symbol: symbol_name,
                first: first.clone(),
                second: entry.name.clone(),
            });
        }
        self.seen
            .insert((scope, symbol_name.clone()), entry.name.clone());

        tracing::debug!("`{}` -> {}", entry.name, symbol_name);

        Ok(SymbolicConstant::new(symbol_name, entry.name.clone(), entry.category)
            .with_visibility(entry.visibility))
    }

    /// Generate symbols for every entry of a sealed registry, in order.
    pub fn generate_all(&mut self, registry: &TokenRegistry) -> Result<SymbolTable, TokenError> {
        if !registry.is_sealed() {
            return Err(TokenError::NotSealed);
        }

        let symbols = registry
            .all()
            .map(|entry| self.generate(entry))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SymbolTable::from_symbols(symbols))
    }

    fn symbol_name(&self, category: Category, name: &str) -> Result<String, TokenError> {
        let sanitized = sanitize(name);
        if sanitized.is_empty() {
            return Err(TokenError::Unrepresentable {
                name: name.to_string(),
            });
        }

        let constant = format!("{}{}{}", self.namespace, category.symbol_prefix(), sanitized);

        Ok(match self.style {
            NamingStyle::Constant => constant,
            NamingStyle::ShoutyConstant => constant.to_shouty_snake_case(),
            NamingStyle::Member => member_name(category, &sanitized),
        })
    }
}

/// Join the identifier-safe segments of `name`, capitalizing each segment.
pub fn sanitize(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

fn member_name(category: Category, sanitized: &str) -> String {
    let base = match sanitized.strip_suffix(category.member_suffix()) {
        Some(stem) if !stem.is_empty() => stem,
        _ => sanitized,
    };

    let name = lower_leading(base);
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", name)
    } else {
        name
    }
}

/// Lower-case the leading capital run, keeping the capital that starts the
/// next word (`URLBlue` -> `urlBlue`, `Amber` -> `amber`).
fn lower_leading(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let run = chars.iter().take_while(|c| c.is_ascii_uppercase()).count();

    let lower_count = match chars.get(run) {
        Some(next) if run > 1 && next.is_ascii_lowercase() => run - 1,
        _ => run,
    };

    chars
        .iter()
        .enumerate()
        .map(|(i, c)| if i < lower_count { c.to_ascii_lowercase() } else { *c })
        .collect()
}
