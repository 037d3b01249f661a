/// Validates a unit identifier used as a filesystem path component.
///
/// Checks:
/// - Non-empty
/// - Not "." or ".."
/// - Characters are ASCII alphanumeric, '-', '_', '.', or '@'
pub fn validate_unit_identifier(id: &str) -> bool {
    if id.is_empty() || id == "." || id == ".." {
        return false;
    }
    id.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '@'))
}

/// A value placed verbatim into a line-oriented directive: non-empty and free
/// of control characters, line breaks included.
pub fn is_directive_value(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(char::is_control)
}

/// A single directive word: a directive value that also has no whitespace.
pub fn is_directive_word(word: &str) -> bool {
    is_directive_value(word) && !word.chars().any(char::is_whitespace)
}
