//! Symbol generation and source emission.
//!
//! This module turns a sealed token registry into identifiers and then
//! into source text for one of the supported target syntaxes.

pub mod emit;
pub mod ident;
pub mod objc;
pub mod rust;
pub mod swift;

pub use emit::{emit, EmitOptions, Emitter, TargetSyntax};
pub use ident::{sanitize, IdentifierGenerator, NamingStyle};
pub use objc::ObjcHeaderEmitter;
pub use rust::RustEmitter;
pub use swift::SwiftEmitter;
