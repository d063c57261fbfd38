//! Rust emitter: `&str` constants keyed by SCREAMING_SNAKE_CASE names.

use heck::ToShoutySnakeCase;

use crate::codegen::emit::{escape_comment, Emitter, GENERATED_BANNER};
use crate::codegen::ident::sanitize;
use crate::core::manifest::Category;
use crate::core::symbol::{BundleIdentity, SymbolTable};

/// Renders a Rust module of string constants.
#[derive(Debug, Clone)]
pub struct RustEmitter {
    namespace: String,
}

impl RustEmitter {
    pub fn new(namespace: impl Into<String>) -> Self {
        RustEmitter {
            namespace: namespace.into(),
        }
    }
}

impl Emitter for RustEmitter {
    fn render(&self, table: &SymbolTable, bundle: &BundleIdentity) -> String {
        let mut output = String::new();

        output.push_str(&format!("// @generated {}\n\n", GENERATED_BANNER));

        output.push_str("/// The resource bundle ID.\n");
        output.push_str(&format!(
            "pub(crate) const {}: &str = {:?};\n",
            format!("{}BundleId", sanitize(&self.namespace)).to_shouty_snake_case(),
            bundle.as_str()
        ));

        for category in Category::ALL {
            let mut symbols = table.by_category(category).peekable();
            if symbols.peek().is_none() {
                continue;
            }

            output.push_str(&format!("\n// {} symbols\n", category.title()));

            for symbol in symbols {
                let visibility = if symbol.visibility.is_public() {
                    "pub"
                } else {
                    "pub(crate)"
                };

                output.push('\n');
                output.push_str(&format!(
                    "/// The \"{}\" asset catalog {} resource.\n",
                    escape_comment(&symbol.target_name),
                    category.noun()
                ));
                output.push_str(&format!(
                    "{} const {}: &str = {:?};\n",
                    visibility, symbol.symbol_name, symbol.target_name
                ));
            }
        }

        output
    }
}
