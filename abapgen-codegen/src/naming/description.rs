//! Sentence-bounded description truncation for generated comments.

/// Shorten a description to whole sentences that fit in `max_length`.
///
/// Sentences are split on `.`, trimmed and re-terminated with `.`. They are
/// appended while they fit; the first sentence is hard-cut if it alone is too
/// long. The result starts with `"`, the ABAP end-of-line comment marker.
/// A missing description yields an empty string. Text without any `.` is a
/// single sentence, even when empty; trailing empty segments are dropped
/// otherwise.
pub fn extract_description(text: Option<&str>, max_length: usize) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let mut segments: Vec<&str> = text.split('.').collect();
    if segments.len() > 1 {
        while segments.last().is_some_and(|s| s.is_empty()) {
            segments.pop();
        }
    }

    let mut description = String::new();
    let mut current_length = 0;

    for segment in segments {
        let sentence = format!("{}.", segment.trim());
        let length = sentence.chars().count();

        if current_length + length > max_length {
            if current_length == 0 {
                description.extend(sentence.chars().take(max_length));
            }
            break;
        }

        description.push_str(&sentence);
        current_length += length;
    }

    format!("\"{}", description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_description() {
        assert_eq!(extract_description(None, 60), "");
    }

    #[test]
    fn test_whole_sentences_fit() {
        assert_eq!(
            extract_description(Some("The pet name. Shown in lists."), 60),
            "\"The pet name.Shown in lists."
        );
    }

    #[test]
    fn test_stops_at_first_sentence_that_does_not_fit() {
        assert_eq!(
            extract_description(Some("Short one. This second sentence is far too long to fit."), 20),
            "\"Short one."
        );
    }

    #[test]
    fn test_first_sentence_is_hard_cut() {
        let long = "An extremely long first sentence that keeps going past the limit";
        let result = extract_description(Some(long), 20);
        assert_eq!(result, "\"An extremely long fi");
        assert_eq!(result.chars().count(), 21);
    }

    #[test]
    fn test_no_trailing_period_added_twice() {
        assert_eq!(extract_description(Some("Status."), 60), "\"Status.");
        assert_eq!(extract_description(Some("Status"), 60), "\"Status.");
    }

    #[test]
    fn test_empty_text_is_one_empty_sentence() {
        assert_eq!(extract_description(Some(""), 60), "\".");
    }

    #[test]
    fn test_only_periods() {
        assert_eq!(extract_description(Some("..."), 60), "\"");
        assert_eq!(extract_description(Some("."), 60), "\"");
    }
}
