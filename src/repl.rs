//! Interactive lookup session over generic input and output streams.
//!
//! The `triespell` binary drives a [`Session`] with stdin and stdout; tests
//! drive it with in-memory buffers.

use std::collections::BTreeSet;
use std::fmt;
use std::io::{self, BufRead, Write};

use log::debug;

use crate::error::QueryError;
use crate::index::{VocabularyIndex, DEFAULT_THRESHOLD};
use crate::query;

pub const PROMPT: &str = "Enter a word to search in the dictionary or press @ to escape: ";

/// Outcome of handling one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The user asked to leave.
    Exit,
    /// The input was rejected before lookup.
    Invalid(QueryError),
    /// The word is in the vocabulary.
    Found(String),
    /// The word is not in the vocabulary; `candidates` may be empty.
    NotFound {
        word: String,
        candidates: BTreeSet<String>,
    },
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Exit => Ok(()),
            Response::Invalid(err) => write!(f, "{err}"),
            Response::Found(word) => write!(f, "Word found in the dictionary: {word}"),
            Response::NotFound { candidates, .. } if candidates.is_empty() => {
                write!(f, "No matching word found. No suggestions.")
            }
            Response::NotFound { candidates, .. } => {
                let list: Vec<&str> = candidates.iter().map(String::as_str).collect();
                write!(f, "No matching word found. Did you mean {}?", list.join(", "))
            }
        }
    }
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub queries: usize,
    pub found: usize,
    pub not_found: usize,
    pub rejected: usize,
}

/// Read-only lookup session over a loaded vocabulary.
pub struct Session<'a> {
    index: &'a VocabularyIndex,
    threshold: usize,
}

impl<'a> Session<'a> {
    /// Session using [`DEFAULT_THRESHOLD`].
    pub fn new(index: &'a VocabularyIndex) -> Self {
        Self::with_threshold(index, DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(index: &'a VocabularyIndex, threshold: usize) -> Self {
        Self { index, threshold }
    }

    /// Handle one raw line of input.
    pub fn respond(&self, raw: &str) -> Response {
        if query::is_exit_command(raw) {
            return Response::Exit;
        }
        let word = match query::validate(raw) {
            Ok(word) => word,
            Err(err) => {
                debug!("rejected query {raw:?}: {err:?}");
                return Response::Invalid(err);
            }
        };
        if self.index.contains(&word) {
            return Response::Found(word);
        }
        let candidates = self.index.suggest(&word, self.threshold);
        Response::NotFound { word, candidates }
    }

    /// Prompt, read and answer lines until `@` or end of input.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> io::Result<SessionStats> {
        let mut stats = SessionStats::default();
        let mut line = String::new();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }

            let response = self.respond(&line);
            match &response {
                Response::Exit => break,
                Response::Invalid(_) => stats.rejected += 1,
                Response::Found(_) => {
                    stats.queries += 1;
                    stats.found += 1;
                }
                Response::NotFound { .. } => {
                    stats.queries += 1;
                    stats.not_found += 1;
                }
            }
            writeln!(output, "{response}")?;
        }
        debug!("session finished: {stats:?}");
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn animals() -> VocabularyIndex {
        ["cat", "car", "cart", "dog"].into_iter().collect()
    }

    #[test]
    fn test_respond_found_and_not_found() {
        let index = animals();
        let session = Session::new(&index);

        assert_eq!(session.respond("Cat\n"), Response::Found("cat".to_string()));

        match session.respond("caat\n") {
            Response::NotFound { word, candidates } => {
                assert_eq!(word, "caat");
                let got: Vec<&str> = candidates.iter().map(String::as_str).collect();
                assert_eq!(got, vec!["car", "cart", "cat"]);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn test_respond_invalid_and_exit() {
        let index = animals();
        let session = Session::new(&index);
        assert_eq!(session.respond("\n"), Response::Invalid(QueryError::Empty));
        assert_eq!(
            session.respond("hot dog\n"),
            Response::Invalid(QueryError::MultipleTokens)
        );
        assert_eq!(session.respond("@\n"), Response::Exit);
    }

    #[test]
    fn test_response_rendering() {
        let index = animals();
        let session = Session::new(&index);
        assert_eq!(
            session.respond("dog").to_string(),
            "Word found in the dictionary: dog"
        );
        assert_eq!(
            session.respond("caat").to_string(),
            "No matching word found. Did you mean car, cart, cat?"
        );
        assert_eq!(
            session.respond("zebra").to_string(),
            "No matching word found. No suggestions."
        );
    }

    #[test]
    fn test_threshold_is_applied() {
        let index = animals();
        let strict = Session::with_threshold(&index, 0);
        assert_eq!(
            strict.respond("caat").to_string(),
            "No matching word found. No suggestions."
        );
    }

    #[test]
    fn test_run_until_exit() {
        let index = animals();
        let session = Session::new(&index);
        let input = Cursor::new("cat\ncaat\n\n@\ndog\n");
        let mut output = Vec::new();

        let stats = session.run(input, &mut output).unwrap();
        assert_eq!(
            stats,
            SessionStats {
                queries: 2,
                found: 1,
                not_found: 1,
                rejected: 1,
            }
        );

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Word found in the dictionary: cat"));
        assert!(text.contains("Did you mean car, cart, cat?"));
        assert!(text.contains("Please enter a word"));
        // input after the escape token is never read
        assert!(!text.contains("Word found in the dictionary: dog"));
        assert_eq!(text.matches(PROMPT).count(), 4);
    }

    #[test]
    fn test_run_stops_at_eof() {
        let index = VocabularyIndex::new();
        let session = Session::new(&index);
        let mut output = Vec::new();

        let stats = session.run(Cursor::new("anything\n"), &mut output).unwrap();
        assert_eq!(stats.not_found, 1);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("No matching word found. No suggestions."));
        assert_eq!(text.matches(PROMPT).count(), 2);
    }
}
