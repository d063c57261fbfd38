//! Generated symbols and bundle identity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::manifest::{Category, Visibility};

/// A generated identifier bound to the asset name it resolves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SymbolicConstant {
    /// Identifier used from source code.
    pub symbol_name: String,

    /// Asset name as stored in the bundle.
    pub target_name: String,

    pub category: Category,

    pub visibility: Visibility,
}

impl SymbolicConstant {
    pub fn new(
        symbol_name: impl Into<String>,
        target_name: impl Into<String>,
        category: Category,
    ) -> Self {
        SymbolicConstant {
            symbol_name: symbol_name.into(),
            target_name: target_name.into(),
            category,
            visibility: Visibility::Internal,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

/// Symbols generated from a sealed registry, in registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SymbolTable {
    symbols: Vec<SymbolicConstant>,
}

impl SymbolTable {
    pub(crate) fn from_symbols(symbols: Vec<SymbolicConstant>) -> Self {
        SymbolTable { symbols }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolicConstant> + '_ {
        self.symbols.iter()
    }

    /// Symbols of one category, in registry order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &SymbolicConstant> + '_ {
        self.symbols.iter().filter(move |s| s.category == category)
    }

    /// Find the symbol generated for an asset name.
    pub fn find(&self, category: Category, target_name: &str) -> Option<&SymbolicConstant> {
        self.symbols
            .iter()
            .find(|s| s.category == category && s.target_name == target_name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a SymbolicConstant;
    type IntoIter = std::slice::Iter<'a, SymbolicConstant>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

/// Identifier of the packaged resource bundle, fixed for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BundleIdentity(String);

impl BundleIdentity {
    pub fn new(bundle_id: impl Into<String>) -> Self {
        BundleIdentity(bundle_id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BundleIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for BundleIdentity {
    fn from(s: String) -> Self {
        BundleIdentity(s)
    }
}

impl From<&str> for BundleIdentity {
    fn from(s: &str) -> Self {
        BundleIdentity::new(s)
    }
}
