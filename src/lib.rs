//! triespell - library exports and compile-time embedding point
//!
//! This crate stores a static vocabulary in a prefix tree and answers two
//! questions about it: is a token an exact member, and if not, which stored
//! words are within a small Levenshtein distance of it.
//!
//! The core lives in [`trie`], [`distance`] and [`index`]. The boundary
//! pieces around it are the runtime [`loader`], the [`query`] validator and
//! the interactive [`repl`] session used by the `triespell` binary. A
//! compile-time proc-macro `include_vocabulary!` (from the
//! `triespell_macros` crate) can embed a word list into the binary instead.
//!
//! Examples
//!
//! - Runtime construction:
//!
//! ```
//! use triespell::VocabularyIndex;
//!
//! let index: VocabularyIndex = ["cat", "car", "cart", "dog"].into_iter().collect();
//! assert!(index.contains("cat"));
//! assert!(!index.contains("caat"));
//!
//! let suggestions = index.suggest("caat", 2);
//! assert!(suggestions.contains("cat"));
//! assert!(suggestions.contains("car"));
//! assert!(suggestions.contains("cart"));
//! assert!(!suggestions.contains("dog"));
//! ```
//!
//! - Compile-time embedding (the path is relative to the calling crate's root):
//!
//! ```ignore
//! use triespell::include_vocabulary;
//!
//! let index = include_vocabulary!("path/to/words.txt", lowercase = true);
//! let suggestions = index.suggest_default("helo");
//! ```

pub mod distance;
pub mod error;
pub mod index;
pub mod loader;
pub mod query;
pub mod repl;
pub mod trie;

/// Re-export commonly used types.
pub use distance::levenshtein;
pub use error::{LoadError, QueryError};
pub use index::{Suggestion, VocabularyIndex, DEFAULT_THRESHOLD};
pub use trie::TrieNode;

/// Re-export the compile-time vocabulary macro from the proc-macro crate.
///
/// The proc-macro crate is the workspace member `triespell-macros`. The
/// expansion refers to `::phf` and `::triespell`, so calling crates need both
/// as dependencies:
///
///   use triespell::include_vocabulary;
pub use triespell_macros::include_vocabulary;
