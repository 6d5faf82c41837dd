//! Reserved words of the target dialect.

use std::collections::{HashMap, HashSet};

/// ABAP keywords that cannot be used as plain identifiers.
///
/// Stored lowercase; edited identifiers are always lowercase.
pub const ABAP_KEYWORDS: &[&str] = &[
    "abstract", "add", "alias", "aliases", "and", "append", "as", "assign", "at", "begin",
    "break", "call", "case", "catch", "check", "class", "clear", "collect", "commit", "compute",
    "concatenate", "condense", "constants", "continue", "create", "data", "default", "define",
    "delete", "describe", "divide", "do", "else", "elseif", "end", "endcase", "endclass",
    "endif", "endloop", "endmethod", "endtry", "endwhile", "event", "events", "exit", "export",
    "field", "final", "find", "for", "form", "format", "free", "from", "function", "get", "if",
    "import", "in", "include", "insert", "interface", "into", "is", "join", "key", "like",
    "loop", "message", "method", "methods", "modify", "module", "move", "new", "not", "of",
    "on", "or", "other", "private", "protected", "public", "raise", "raising", "read", "ref",
    "report", "return", "rollback", "select", "set", "shift", "sort", "split", "static",
    "structure", "submit", "table", "tables", "to", "translate", "try", "type", "types",
    "update", "using", "value", "when", "where", "while", "with", "write",
];

/// Reserved-word set plus remapping table.
///
/// A candidate is escaped when it is reserved, starts with an ASCII digit or
/// starts with `@`. Remapped words take their replacement verbatim; all
/// others get a leading underscore.
#[derive(Debug, Clone, Default)]
pub struct ReservedWords {
    words: HashSet<String>,
    mappings: HashMap<String, String>,
}

impl ReservedWords {
    /// The ABAP keyword list without remappings.
    pub fn abap() -> Self {
        Self::empty().with_words(ABAP_KEYWORDS.iter().copied())
    }

    /// A set with no reserved words at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add reserved words.
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Add a remapping. The word itself becomes reserved.
    pub fn with_mapping(mut self, word: impl Into<String>, replacement: impl Into<String>) -> Self {
        let word = word.into();
        self.words.insert(word.clone());
        self.mappings.insert(word, replacement.into());
        self
    }

    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.words.contains(name)
    }

    /// Check if a name must be escaped before use as an identifier.
    pub fn needs_escape(&self, name: &str) -> bool {
        self.is_reserved(name)
            || name.starts_with(|c: char| c.is_ascii_digit())
            || name.starts_with('@')
    }

    /// Escape a name: its remapping if one exists, otherwise `_` + name.
    pub fn escape(&self, name: &str) -> String {
        match self.mappings.get(name) {
            Some(mapped) => mapped.clone(),
            None => format!("_{}", name),
        }
    }

    /// Number of reserved words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
