//! Validation of raw user input before it reaches the index.
//!
//! A query is accepted when it is a single non-empty token made entirely of
//! letters (any script), or else of ASCII letters and apostrophes. Accepted
//! queries are lowercased.

use crate::error::QueryError;

/// Input that ends an interactive session.
pub const EXIT_COMMAND: &str = "@";

/// Strip the line terminator left by `read_line`. Other whitespace is kept.
fn strip_line_ending(raw: &str) -> &str {
    let line = raw.strip_suffix('\n').unwrap_or(raw);
    line.strip_suffix('\r').unwrap_or(line)
}

/// True if `raw` is the session escape token.
pub fn is_exit_command(raw: &str) -> bool {
    strip_line_ending(raw) == EXIT_COMMAND
}

/// Check `raw` and return the lowercased token to look up.
pub fn validate(raw: &str) -> Result<String, QueryError> {
    let token = strip_line_ending(raw);
    if token.is_empty() {
        return Err(QueryError::Empty);
    }
    if token.chars().any(char::is_whitespace) {
        return Err(QueryError::MultipleTokens);
    }
    // Apostrophes are only allowed alongside ASCII letters.
    if !token.chars().all(char::is_alphabetic) {
        if let Some(bad) = token
            .chars()
            .find(|&c| !(c.is_ascii_alphabetic() || c == '\''))
        {
            return Err(QueryError::DisallowedCharacter(bad));
        }
    }
    Ok(token.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_and_lowercases() {
        assert_eq!(validate("Cat\n"), Ok("cat".to_string()));
        assert_eq!(validate("DON'T\r\n"), Ok("don't".to_string()));
        assert_eq!(validate("'tis"), Ok("'tis".to_string()));
    }

    #[test]
    fn test_validate_accepts_letters_from_any_script() {
        assert_eq!(validate("café\n"), Ok("café".to_string()));
        assert_eq!(validate("NAÏVE"), Ok("naïve".to_string()));
        assert_eq!(validate("ÜBER"), Ok("über".to_string()));
    }

    #[test]
    fn test_validate_empty() {
        assert_eq!(validate(""), Err(QueryError::Empty));
        assert_eq!(validate("\n"), Err(QueryError::Empty));
        assert_eq!(validate("\r\n"), Err(QueryError::Empty));
    }

    #[test]
    fn test_validate_multiple_tokens() {
        assert_eq!(validate("two words"), Err(QueryError::MultipleTokens));
        assert_eq!(validate(" cat"), Err(QueryError::MultipleTokens));
        assert_eq!(validate("cat\t\n"), Err(QueryError::MultipleTokens));
    }

    #[test]
    fn test_validate_disallowed_characters() {
        assert_eq!(validate("c4t"), Err(QueryError::DisallowedCharacter('4')));
        assert_eq!(validate("well-known"), Err(QueryError::DisallowedCharacter('-')));
        // non-ASCII letters cannot be mixed with apostrophes
        assert_eq!(validate("café's"), Err(QueryError::DisallowedCharacter('é')));
        assert_eq!(validate("@@"), Err(QueryError::DisallowedCharacter('@')));
    }

    #[test]
    fn test_exit_command() {
        assert!(is_exit_command("@"));
        assert!(is_exit_command("@\n"));
        assert!(!is_exit_command("@@"));
        assert!(!is_exit_command(" @"));
    }
}
