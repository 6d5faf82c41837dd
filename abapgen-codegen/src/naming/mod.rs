//! Identifier mangling for the ABAP naming dialect.
//!
//! This module provides the run-scoped [`NamingContext`] and the pieces it
//! is built from:
//! - [`ReservedWords`] - reserved-word detection and escaping
//! - [`ShortNameBuckets`] - collision-free truncation with numeric suffixes
//! - [`TypeInterner`] - compact sequential codes for complex type names
//! - [`placeholders`] - path template scanning
//! - [`format_global_name`] - the one-off interface name formatter
//! - [`extract_description`] - sentence-bounded comment text
//!
//! All mutable state lives in a [`NamingContext`]. A generation run owns
//! exactly one; a new run starts from a new context.

mod bucket;
mod description;
mod error;
mod global;
mod interner;
mod path;
mod reserved;

use std::collections::HashSet;

use abapgen_core::to_snake_identifier;
use abapgen_descriptor::{NamingConfig, Placement};
pub use bucket::ShortNameBuckets;
pub use description::extract_description;
pub use error::{NamingError, PathDefect};
pub use global::format_global_name;
pub use interner::TypeInterner;
pub use path::{Placeholder, placeholders};
pub use reserved::{ABAP_KEYWORDS, ReservedWords};

/// Longest identifier kept without truncation.
pub const DEFAULT_MAX_LENGTH: usize = 30;
/// Prefix length used as the collision bucket key.
pub const DEFAULT_TRIM_LENGTH: usize = 27;
/// Cap for the global interface name.
pub const DEFAULT_GLOBAL_MAX_LENGTH: usize = 26;
/// Cap for property descriptions.
pub const DEFAULT_DESCRIPTION_MAX_LENGTH: usize = 60;

/// Role tag prepended to an identifier before length and collision handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    /// No role tag
    None,
    /// Array-valued query parameter
    QueryTable,
    /// Scalar query parameter
    QueryValue,
    /// Array-valued path parameter
    PathTable,
    /// Scalar path parameter
    PathValue,
    /// Interned type code
    Type,
}

impl Prefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            Prefix::None => "",
            Prefix::QueryTable => "it_q_",
            Prefix::QueryValue => "iv_q_",
            Prefix::PathTable => "it_p_",
            Prefix::PathValue => "iv_p_",
            Prefix::Type => "ty_",
        }
    }

    /// Role tag for a parameter's placeholder name, if its placement has one.
    pub fn for_parameter(placement: Placement, is_array: bool) -> Option<Self> {
        match (placement, is_array) {
            (Placement::Query, true) => Some(Prefix::QueryTable),
            (Placement::Query, false) => Some(Prefix::QueryValue),
            (Placement::Path, true) => Some(Prefix::PathTable),
            (Placement::Path, false) => Some(Prefix::PathValue),
            (Placement::Body | Placement::Other, _) => None,
        }
    }
}

impl AsRef<str> for Prefix {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Length limits applied by a [`NamingContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamingLimits {
    pub max_length: usize,
    pub trim_length: usize,
    pub global_max_length: usize,
    pub description_max_length: usize,
}

impl Default for NamingLimits {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            trim_length: DEFAULT_TRIM_LENGTH,
            global_max_length: DEFAULT_GLOBAL_MAX_LENGTH,
            description_max_length: DEFAULT_DESCRIPTION_MAX_LENGTH,
        }
    }
}

impl From<&NamingConfig> for NamingLimits {
    fn from(config: &NamingConfig) -> Self {
        Self {
            max_length: config.max_length,
            trim_length: config.trim_length,
            global_max_length: config.global_max_length,
            description_max_length: config.description_max_length,
        }
    }
}

/// Result of editing one identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edited {
    /// The final identifier
    pub value: String,
    /// Whether the candidate was cut to its bucket key and suffixed
    pub truncated: bool,
    /// Whether the candidate was escaped or remapped
    pub escaped: bool,
}

/// Run-scoped naming state: collision buckets, type codes and reserved words.
///
/// Every identifier in one generation run must go through the same context,
/// in a fixed traversal order, for suffixes and type codes to be stable.
#[derive(Debug, Clone)]
pub struct NamingContext {
    limits: NamingLimits,
    reserved: ReservedWords,
    buckets: ShortNameBuckets,
    types: TypeInterner,
}

impl NamingContext {
    /// A context with default limits and the ABAP keyword list.
    pub fn new() -> Self {
        Self::with_reserved(NamingLimits::default(), ReservedWords::abap())
    }

    /// A context with custom limits and reserved words.
    pub fn with_reserved(limits: NamingLimits, reserved: ReservedWords) -> Self {
        Self {
            limits,
            reserved,
            buckets: ShortNameBuckets::new(limits.trim_length),
            types: TypeInterner::new(),
        }
    }

    /// Build a context from the `[naming]` section of abapgen.toml.
    pub fn from_config(config: &NamingConfig) -> Self {
        let mut reserved = ReservedWords::abap().with_words(config.reserved_words.iter().cloned());
        // Sorted so that the resulting set does not depend on map iteration order
        let mut mappings: Vec<_> = config.reserved_mappings.iter().collect();
        mappings.sort();
        for (word, replacement) in mappings {
            reserved = reserved.with_mapping(word.clone(), replacement.clone());
        }
        log::debug!("naming context with {} reserved word(s)", reserved.len());
        Self::with_reserved(NamingLimits::from(config), reserved)
    }

    pub fn limits(&self) -> &NamingLimits {
        &self.limits
    }

    pub fn reserved(&self) -> &ReservedWords {
        &self.reserved
    }

    pub fn buckets(&self) -> &ShortNameBuckets {
        &self.buckets
    }

    pub fn types(&self) -> &TypeInterner {
        &self.types
    }

    /// Turn a raw name plus role prefix into a valid identifier.
    pub fn edit(&mut self, name: &str, prefix: impl AsRef<str>) -> String {
        self.edit_with_outcome(name, prefix).value
    }

    /// Like [`edit`](Self::edit), also reporting which rules fired.
    pub fn edit_with_outcome(&mut self, name: &str, prefix: impl AsRef<str>) -> Edited {
        let mut candidate = format!("{}{}", prefix.as_ref(), to_snake_identifier(name));

        let truncated = candidate.chars().count() > self.limits.max_length;
        if truncated {
            candidate = self.buckets.resolve(&candidate);
        }

        let escaped = self.reserved.needs_escape(&candidate);
        if escaped {
            candidate = self.reserved.escape(&candidate);
        }

        if truncated || escaped {
            log::trace!("edited '{}' to '{}'", name, candidate);
        }

        Edited {
            value: candidate,
            truncated,
            escaped,
        }
    }

    /// Get the type code for `type_name`, assigning one on first sight.
    pub fn intern(&mut self, type_name: &str, prefix: impl AsRef<str>) -> String {
        self.types.intern(type_name, prefix.as_ref())
    }

    /// Replace every `{token}` in a path with its edited path-parameter name.
    ///
    /// Each distinct token is edited once and all literal occurrences of its
    /// text are replaced, including any outside the braces. Braces are then
    /// padded with a space.
    pub fn rewrite_path(&mut self, path: &str) -> Result<String, NamingError> {
        let found = placeholders(path)?;

        let mut rewritten = path.to_string();
        let mut seen = HashSet::new();
        for placeholder in found {
            if !seen.insert(placeholder.text) {
                continue;
            }
            let edited = self.edit(placeholder.text, Prefix::PathValue);
            rewritten = rewritten.replace(placeholder.text, &edited);
        }

        Ok(path::pad_braces(&rewritten))
    }

    /// Format the run-wide interface name.
    pub fn format_global_name(&self, text: &str) -> String {
        format_global_name(text, self.limits.global_max_length)
    }

    /// Shorten a property description for a generated comment.
    pub fn extract_description(&self, text: Option<&str>) -> String {
        extract_description(text, self.limits.description_max_length)
    }
}

impl Default for NamingContext {
    fn default() -> Self {
        Self::new()
    }
}
