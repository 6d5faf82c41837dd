//! Formatting of the run-wide interface name.

use std::sync::LazyLock;

use abapgen_core::sentence_to_snake;
use regex::Regex;

/// Punctuation that may not appear in the interface name.
static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[*&$#%/\-.,:;!?'"()\[\]{}<>+=~^|\\@]"#).expect("valid punctuation class")
});

static UNDERSCORE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("_{2,}").expect("valid underscore run pattern"));

/// Format the single global symbol name (the generated interface).
///
/// Only spaces are converted; camel humps are kept as written. The name is
/// hard-cut to `max_length` characters without uniquification, since there is
/// exactly one such symbol per run. Disallowed punctuation becomes `_` and
/// runs of underscores collapse to one.
pub fn format_global_name(text: &str, max_length: usize) -> String {
    let snake = sentence_to_snake(text);
    let truncated: String = snake.chars().take(max_length).collect();
    let replaced = DISALLOWED.replace_all(&truncated, "_");
    UNDERSCORE_RUN.replace_all(&replaced, "_").into_owned()
}
