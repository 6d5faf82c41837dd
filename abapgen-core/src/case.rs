//! Case conversion helpers for identifier editing.

use std::sync::LazyLock;

use regex::Regex;

/// A lowercase letter followed by a run of uppercase letters.
static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("([a-z])([A-Z]+)").expect("valid camel boundary pattern"));

/// Convert camelCase to snake_case (e.g., "abapGenerator" -> "abap_generator").
///
/// An underscore is inserted wherever a lowercase ASCII letter is directly
/// followed by one or more uppercase ASCII letters, then the whole string is
/// lowercased. Digits and non-ASCII characters never start a new word, so
/// `"v2Api"` becomes `"v2api"` and `"userID"` becomes `"user_id"`.
pub fn camel_to_snake(s: &str) -> String {
    CAMEL_BOUNDARY.replace_all(s, "${1}_${2}").to_lowercase()
}

/// Convert a free-text sentence to snake_case (e.g., "Hello World" -> "hello_world").
///
/// Every space becomes an underscore and every other character is lowercased
/// in place. Punctuation and digits pass through untouched.
pub fn sentence_to_snake(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        if c == ' ' {
            result.push('_');
        } else {
            result.extend(c.to_lowercase());
        }
    }
    result
}

/// Split camel humps first, then convert spaces.
///
/// This is the canonical form every edited identifier starts from.
pub fn to_snake_identifier(s: &str) -> String {
    sentence_to_snake(&camel_to_snake(s))
}
