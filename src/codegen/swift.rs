//! Swift emitter.
//!
//! Emits static members on `DeveloperToolsSupport.ColorResource` and
//! `ImageResource`, one extension per category.

use crate::codegen::emit::{escape_comment, escape_literal, Emitter, GENERATED_BANNER};
use crate::core::manifest::Category;
use crate::core::symbol::{BundleIdentity, SymbolTable};

const AVAILABILITY: &str = "@available(iOS 17.0, macOS 14.0, tvOS 17.0, watchOS 10.0, *)";

/// Swift keywords that must be wrapped in backticks when used as members.
const RESERVED: &[&str] = &[
    "Any", "Self", "Type", "as", "associatedtype", "break", "case", "catch", "class",
    "continue", "default", "defer", "deinit", "do", "else", "enum", "extension",
    "fallthrough", "false", "fileprivate", "for", "func", "guard", "if", "import", "in",
    "init", "inout", "internal", "is", "let", "nil", "open", "operator", "private",
    "protocol", "public", "repeat", "rethrows", "return", "self", "static", "struct",
    "subscript", "super", "switch", "throw", "throws", "true", "try", "typealias", "var",
    "where", "while",
];

/// Renders Swift resource extensions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwiftEmitter;

impl Emitter for SwiftEmitter {
    fn render(&self, table: &SymbolTable, bundle: &BundleIdentity) -> String {
        let mut output = String::new();

        output.push_str(&format!("// {}\n", GENERATED_BANNER));
        output.push_str("import Foundation\n");
        output.push_str("#if canImport(DeveloperToolsSupport)\n");
        output.push_str("import DeveloperToolsSupport\n");
        output.push_str("#endif\n\n");

        output.push_str("#if SWIFT_PACKAGE\n");
        output.push_str("private let resourceBundle = Foundation.Bundle.module\n");
        output.push_str("#else\n");
        output.push_str("private class ResourceBundleClass {}\n");
        output.push_str(
            "private let resourceBundle = Foundation.Bundle(for: ResourceBundleClass.self)\n",
        );
        output.push_str("#endif\n\n");

        output.push_str("/// The resource bundle ID.\n");
        output.push_str(&format!(
            "let resourceBundleID = \"{}\"\n",
            escape_literal(bundle.as_str())
        ));

        for category in Category::ALL {
            let mut symbols = table.by_category(category).peekable();
            if symbols.peek().is_none() {
                continue;
            }

            let resource_type = match category {
                Category::Color => "ColorResource",
                Category::Image => "ImageResource",
            };

            output.push_str(&format!("\n// MARK: - {} Symbols -\n\n", category.title()));
            output.push_str(AVAILABILITY);
            output.push('\n');
            output.push_str(&format!(
                "extension DeveloperToolsSupport.{} {{\n",
                resource_type
            ));

            for symbol in symbols {
                let modifier = if symbol.visibility.is_public() {
                    "public "
                } else {
                    ""
                };

                output.push('\n');
                output.push_str(&format!(
                    "    /// The \"{}\" asset catalog {} resource.\n",
                    escape_comment(&symbol.target_name),
                    category.noun()
                ));
                output.push_str(&format!(
                    "    {}static let {} = DeveloperToolsSupport.{}(name: \"{}\", bundle: resourceBundle)\n",
                    modifier,
                    member(&symbol.symbol_name),
                    resource_type,
                    escape_literal(&symbol.target_name)
                ));
            }

            output.push_str("\n}\n");
        }

        output
    }
}

fn member(name: &str) -> String {
    if RESERVED.contains(&name) {
        format!("`{}`", name)
    } else {
        name.to_string()
    }
}
