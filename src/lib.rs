//! tokensmith - typed symbols for design tokens
//!
//! This crate turns an asset catalog's named colors and images into
//! generated source constants, and resolves those constants back to concrete
//! resources inside a packaged bundle at runtime.

pub mod catalog;
pub mod codegen;
pub mod core;
pub mod ops;
pub mod util;

/// Test utilities for tokensmith unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides palette fixtures and an `.xcassets` writer.
#[cfg(test)]
pub mod test_support;

pub use catalog::{
    AppearanceContext, AssetCatalog, BundleResolver, BundleSet, CachedResolver, ResolveError,
    ResolvedHandle, Resource, ResourceBundle, StaticBundle,
};
pub use codegen::{emit, EmitOptions, IdentifierGenerator, NamingStyle, TargetSyntax};
pub use core::{
    errors::TokenError,
    manifest::{Category, Manifest, ResourceManifestEntry, VariantTag, Visibility},
    registry::TokenRegistry,
    symbol::{BundleIdentity, SymbolTable, SymbolicConstant},
};
