//! Token registry.
//!
//! The registry ingests manifest entries in order and is then sealed.
//! Ordering is preserved so emission is deterministic.
//!
//! ```text
//! Empty -> Ingesting -> Sealed -> Emitted
//! ```
//!
//! `Emitted` is terminal; a new generation starts from a fresh registry.

use std::collections::HashSet;

use crate::core::errors::TokenError;
use crate::core::manifest::{Category, ResourceManifestEntry};

/// Lifecycle state of a [`TokenRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    Empty,
    Ingesting,
    Sealed,
    Emitted,
}

impl RegistryState {
    /// Whether the registry still accepts entries.
    pub fn is_open(&self) -> bool {
        matches!(self, RegistryState::Empty | RegistryState::Ingesting)
    }
}

/// Ordered, category-scoped collection of manifest entries.
#[derive(Debug, Clone)]
pub struct TokenRegistry {
    entries: Vec<ResourceManifestEntry>,
    names: HashSet<(Category, String)>,
    state: RegistryState,
}

impl TokenRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        TokenRegistry {
            entries: Vec::new(),
            names: HashSet::new(),
            state: RegistryState::Empty,
        }
    }

    /// Build and seal a registry from entries, stopping at the first error.
    pub fn from_entries(
        entries: impl IntoIterator<Item = ResourceManifestEntry>,
    ) -> Result<Self, TokenError> {
        let mut registry = TokenRegistry::new();
        for entry in entries {
            registry.register(entry)?;
        }
        registry.seal();
        Ok(registry)
    }

    /// Register an entry.
    ///
    /// Fails without modifying the registry when the registry is sealed,
    /// the name is empty, a variant repeats, or `(category, name)` exists.
    pub fn register(&mut self, entry: ResourceManifestEntry) -> Result<(), TokenError> {
        if !self.state.is_open() {
            return Err(TokenError::SealedRegistry { name: entry.name });
        }

        if entry.name.is_empty() {
            return Err(TokenError::EmptyName {
                category: entry.category,
            });
        }

        let mut seen = HashSet::new();
        for variant in &entry.variants {
            if !seen.insert(*variant) {
                return Err(TokenError::DuplicateVariant {
                    name: entry.name,
                    variant: *variant,
                });
            }
        }

        let key = (entry.category, entry.name.clone());
        if self.names.contains(&key) {
            return Err(TokenError::DuplicateName {
                category: entry.category,
                name: entry.name,
            });
        }

        tracing::debug!("registered {} token `{}`", entry.category, entry.name);

        self.names.insert(key);
        self.entries.push(entry);
        self.state = RegistryState::Ingesting;
        Ok(())
    }

    /// Transition to read-only. Sealing twice is a no-op.
    pub fn seal(&mut self) {
        if self.state.is_open() {
            self.state = RegistryState::Sealed;
        }
    }

    /// Record that the sealed registry has been emitted.
    pub fn mark_emitted(&mut self) -> Result<(), TokenError> {
        match self.state {
            RegistryState::Sealed | RegistryState::Emitted => {
                self.state = RegistryState::Emitted;
                Ok(())
            }
            RegistryState::Empty | RegistryState::Ingesting => Err(TokenError::NotSealed),
        }
    }

    /// Entries in ingestion order.
    pub fn all(&self) -> impl Iterator<Item = &ResourceManifestEntry> + '_ {
        self.entries.iter()
    }

    /// Entries of one category, in ingestion order.
    pub fn by_category(
        &self,
        category: Category,
    ) -> impl Iterator<Item = &ResourceManifestEntry> + '_ {
        self.entries.iter().filter(move |e| e.category == category)
    }

    /// Look up an entry by category and name.
    pub fn get(&self, category: Category, name: &str) -> Option<&ResourceManifestEntry> {
        self.entries
            .iter()
            .find(|e| e.category == category && e.name == name)
    }

    pub fn state(&self) -> RegistryState {
        self.state
    }

    /// Whether the registry is sealed (or already emitted).
    pub fn is_sealed(&self) -> bool {
        !self.state.is_open()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self::new()
    }
}
