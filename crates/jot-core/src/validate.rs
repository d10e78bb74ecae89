//! Validation for note fields before they are sent to the server.

/// Longest accepted title, in characters
pub const TITLE_MAX_CHARS: usize = 200;

/// Longest accepted content, in characters
pub const CONTENT_MAX_CHARS: usize = 10_000;

/// Check a note's editable fields, returning one message per violation.
///
/// Lengths are measured in characters, not bytes, and an empty vector means
/// the fields are acceptable.
#[must_use]
pub fn validate_note(title: &str, content: &str) -> Vec<String> {
    let mut problems = Vec::new();

    let title = title.trim();
    if title.is_empty() {
        problems.push("Title is required".to_string());
    } else if title.chars().count() > TITLE_MAX_CHARS {
        problems.push("Title must be 200 characters or less".to_string());
    }

    let content = content.trim();
    if content.is_empty() {
        problems.push("Content is required".to_string());
    } else if content.chars().count() > CONTENT_MAX_CHARS {
        problems.push("Content must be 10,000 characters or less".to_string());
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accepts_reasonable_input() {
        assert_eq!(validate_note("Shopping list", "eggs, milk"), Vec::<String>::new());
    }

    #[test]
    fn requires_both_fields() {
        assert_eq!(
            validate_note("", ""),
            vec!["Title is required".to_string(), "Content is required".to_string()]
        );
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        assert_eq!(
            validate_note("   ", "\n\t"),
            vec!["Title is required".to_string(), "Content is required".to_string()]
        );
    }

    #[test]
    fn enforces_title_length_boundary() {
        let body = "fine";
        assert!(validate_note(&"a".repeat(TITLE_MAX_CHARS), body).is_empty());
        assert_eq!(
            validate_note(&"a".repeat(TITLE_MAX_CHARS + 1), body),
            vec!["Title must be 200 characters or less".to_string()]
        );
    }

    #[test]
    fn enforces_content_length_boundary() {
        let title = "fine";
        assert!(validate_note(title, &"b".repeat(CONTENT_MAX_CHARS)).is_empty());
        assert_eq!(
            validate_note(title, &"b".repeat(CONTENT_MAX_CHARS + 1)),
            vec!["Content must be 10,000 characters or less".to_string()]
        );
    }

    #[test]
    fn lengths_are_measured_in_characters() {
        // 200 two-byte characters stay within the limit
        let title = "é".repeat(TITLE_MAX_CHARS);
        assert!(validate_note(&title, "body").is_empty());

        // surrounding whitespace does not count against the limit
        let padded = format!("  {}  ", "a".repeat(TITLE_MAX_CHARS));
        assert!(validate_note(&padded, "body").is_empty());
    }
}
