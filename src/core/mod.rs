//! Core data structures for tokensmith.
//!
//! This module contains the foundational types used throughout the crate:
//! - Manifest entries (categories, variants, visibility)
//! - The token registry and its seal state machine
//! - Generated symbols and bundle identity
//! - Build-time errors

pub mod errors;
pub mod manifest;
pub mod registry;
pub mod symbol;

pub use errors::{ParseError, TokenError};
pub use manifest::{Category, Manifest, ResourceManifestEntry, VariantTag, Visibility};
pub use registry::{RegistryState, TokenRegistry};
pub use symbol::{BundleIdentity, SymbolTable, SymbolicConstant};
