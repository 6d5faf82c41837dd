//! Placeholder scanning for URL path templates.

use super::{NamingError, PathDefect};

/// A `{...}` placeholder in a path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Text between the braces
    pub text: &'a str,
    /// Byte offset of the opening brace
    pub offset: usize,
}

/// Extract every placeholder in left-to-right order.
///
/// The first `}` after a `{` closes it. Unterminated, nested, stray-closing
/// and empty placeholders are rejected.
pub fn placeholders(path: &str) -> Result<Vec<Placeholder<'_>>, NamingError> {
    let malformed = |offset: usize, defect: PathDefect| NamingError::MalformedPath {
        path: path.to_string(),
        offset,
        defect,
    };

    let mut found = Vec::new();
    let mut open: Option<usize> = None;

    for (i, c) in path.char_indices() {
        match (c, open) {
            ('{', Some(_)) => return Err(malformed(i, PathDefect::Nested)),
            ('{', None) => open = Some(i),
            ('}', None) => return Err(malformed(i, PathDefect::UnmatchedClose)),
            ('}', Some(start)) => {
                if start + 1 == i {
                    return Err(malformed(start, PathDefect::Empty));
                }
                found.push(Placeholder {
                    text: &path[start + 1..i],
                    offset: start,
                });
                open = None;
            }
            _ => {}
        }
    }

    match open {
        Some(start) => Err(malformed(start, PathDefect::Unterminated)),
        None => Ok(found),
    }
}

/// Surround braces with a space: `{id}` becomes `{ id }`.
pub(crate) fn pad_braces(path: &str) -> String {
    path.replace('{', "{ ").replace('}', " }")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_in_order() {
        let found = placeholders("/users/{userId}/orders/{orderId}").unwrap();
        let texts: Vec<_> = found.iter().map(|p| p.text).collect();
        assert_eq!(texts, ["userId", "orderId"]);
        assert_eq!(found[0].offset, 7);
    }

    #[test]
    fn test_no_placeholders() {
        assert!(placeholders("/pets").unwrap().is_empty());
        assert!(placeholders("").unwrap().is_empty());
    }

    #[test]
    fn test_unterminated() {
        let err = placeholders("/pets/{petId").unwrap_err();
        assert_eq!(
            err,
            NamingError::MalformedPath {
                path: "/pets/{petId".into(),
                offset: 6,
                defect: PathDefect::Unterminated,
            }
        );
    }

    #[test]
    fn test_nested() {
        let err = placeholders("/a/{b{c}}").unwrap_err();
        assert!(matches!(
            err,
            NamingError::MalformedPath {
                offset: 5,
                defect: PathDefect::Nested,
                ..
            }
        ));
    }

    #[test]
    fn test_unmatched_close_and_empty() {
        assert!(matches!(
            placeholders("/a/b}").unwrap_err(),
            NamingError::MalformedPath {
                defect: PathDefect::UnmatchedClose,
                ..
            }
        ));
        assert!(matches!(
            placeholders("/a/{}").unwrap_err(),
            NamingError::MalformedPath {
                defect: PathDefect::Empty,
                ..
            }
        ));
    }

    #[test]
    fn test_pad_braces() {
        assert_eq!(pad_braces("/a/{b}/c"), "/a/{ b }/c");
    }
}
