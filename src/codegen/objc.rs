//! Objective-C header emitter.
//!
//! Produces one `static NSString * const` per symbol. Internal symbols are
//! tagged with a `swift_private` macro so they stay hidden from Swift.

use crate::codegen::emit::{escape_c_literal, escape_comment, Emitter, GENERATED_BANNER};
use crate::core::manifest::Category;
use crate::core::symbol::{BundleIdentity, SymbolTable};

/// Renders an Objective-C header.
#[derive(Debug, Clone)]
pub struct ObjcHeaderEmitter {
    namespace: String,
}

impl ObjcHeaderEmitter {
    pub fn new(namespace: impl Into<String>) -> Self {
        ObjcHeaderEmitter {
            namespace: namespace.into(),
        }
    }

    /// Name of the `swift_private` attribute macro, e.g. `AC_SWIFT_PRIVATE`.
    fn private_macro(&self) -> String {
        let ns = crate::codegen::ident::sanitize(&self.namespace).to_uppercase();
        if ns.is_empty() {
            "TOKENS_SWIFT_PRIVATE".to_string()
        } else {
            format!("{}_SWIFT_PRIVATE", ns)
        }
    }
}

impl Emitter for ObjcHeaderEmitter {
    fn render(&self, table: &SymbolTable, bundle: &BundleIdentity) -> String {
        let private = self.private_macro();
        let mut output = String::new();

        output.push_str(&format!("// {}\n", GENERATED_BANNER));
        output.push_str("#import <Foundation/Foundation.h>\n\n");
        output.push_str("#if __has_attribute(swift_private)\n");
        output.push_str(&format!("#define {} __attribute__((swift_private))\n", private));
        output.push_str("#else\n");
        output.push_str(&format!("#define {}\n", private));
        output.push_str("#endif\n\n");

        output.push_str("/// The resource bundle ID.\n");
        output.push_str(&format!(
            "static NSString * const {}BundleID {} = @\"{}\";\n\n",
            crate::codegen::ident::sanitize(&self.namespace),
            private,
            escape_c_literal(bundle.as_str())
        ));

        for category in Category::ALL {
            let mut symbols = table.by_category(category).peekable();
            if symbols.peek().is_none() {
                continue;
            }

            output.push_str(&format!("#pragma mark - {} Symbols\n\n", category.title()));

            for symbol in symbols {
                let attribute = if symbol.visibility.is_public() {
                    String::new()
                } else {
                    format!(" {}", private)
                };

                output.push_str(&format!(
                    "/// The \"{}\" asset catalog {} resource.\n",
                    escape_comment(&symbol.target_name),
                    category.noun()
                ));
                output.push_str(&format!(
                    "static NSString * const {}{} = @\"{}\";\n\n",
                    symbol.symbol_name,
                    attribute,
                    escape_c_literal(&symbol.target_name)
                ));
            }
        }

        output.push_str(&format!("#undef {}\n", private));
        output
    }
}
