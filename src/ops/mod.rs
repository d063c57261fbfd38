//! High-level operations.
//!
//! This module contains the implementation of tokensmith commands.

pub mod generate;
pub mod ingest;
pub mod verify;

pub use generate::{generate, GenerateOptions, GenerateResult, GenerateStatus};
pub use ingest::{build_registry, load_manifest};
pub use verify::{format_report, verify, verify_catalog, OutputFormat, VerifyOptions, VerifyReport};
