//! Run-wide registry of compact type codes.

use abapgen_core::suffix_code;
use indexmap::IndexMap;

/// Interns complex type names into short sequential codes.
///
/// The counter is the table size, shared by every prefix: interning `Pet`
/// under `ty_` and then `Order` under `other_` yields `ty_000` and
/// `other_001`. Once a type has a code, later lookups return it unchanged
/// whatever prefix they pass.
#[derive(Debug, Clone, Default)]
pub struct TypeInterner {
    codes: IndexMap<String, String>,
}

impl TypeInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the code for `type_name`, assigning the next one on first sight.
    pub fn intern(&mut self, type_name: &str, prefix: &str) -> String {
        if let Some(code) = self.codes.get(type_name) {
            return code.clone();
        }

        let code = format!("{}{}", prefix, suffix_code(self.codes.len()));
        log::trace!("interned type '{}' as '{}'", type_name, code);
        self.codes.insert(type_name.to_string(), code.clone());
        code
    }

    /// Look up an existing code without assigning one.
    pub fn get(&self, type_name: &str) -> Option<&str> {
        self.codes.get(type_name).map(String::as_str)
    }

    /// All `(type name, code)` pairs in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.codes.iter().map(|(name, code)| (name.as_str(), code.as_str()))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
