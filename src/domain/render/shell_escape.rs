//! POSIX shell word escaping.

/// Escape one token so a POSIX shell reads it back as exactly one word
/// equal to `token`.
///
/// Characters outside `[A-Za-z0-9_\-.,:+/@\n]` get a preceding backslash,
/// a newline is wrapped in single quotes, and the empty token becomes `''`.
pub fn shell_escape(token: &str) -> String {
    if token.is_empty() {
        return "''".to_string();
    }

    let mut escaped = String::with_capacity(token.len() * 2);
    for c in token.chars() {
        match c {
            '\n' => escaped.push_str("'\n'"),
            c if is_shell_safe(c) => escaped.push(c),
            c => {
                escaped.push('\\');
                escaped.push(c);
            }
        }
    }
    escaped
}

/// Escape every token and join them with single spaces.
pub fn shell_join<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens.iter().map(|token| shell_escape(token.as_ref())).collect::<Vec<_>>().join(" ")
}

/// Quote `text` as a single-quoted shell string.
pub fn single_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ',' | ':' | '+' | '/' | '@')
}
