/*!
index module

The queryable vocabulary. It owns the root of the prefix tree and exposes:

- `insert` / `extend` / `FromIterator` to populate it during startup
- `contains` for exact membership
- `suggest` and `suggest_ranked` for fuzzy lookups by Levenshtein distance

How suggestions are found

Only the subtree under the query's first character is searched. Every
stored word in that subtree is compared against the query and kept when its
distance is within the threshold. Words that start with a different letter
are never suggested, even when they would be closer; this trades recall for
a much smaller search space.

Each call builds and returns its own result, so the index can be shared
read-only across threads once loading is done.
*/

use std::collections::BTreeSet;

use log::trace;

use crate::distance::levenshtein;
use crate::trie::TrieNode;

/// Threshold used when the caller does not pick one.
pub const DEFAULT_THRESHOLD: usize = 2;

/// A candidate word returned by `suggest_ranked`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Suggestion {
    /// Edit distance from the query to `term`.
    pub distance: usize,
    /// Stored vocabulary word.
    pub term: String,
}

/// Vocabulary stored as a prefix tree.
#[derive(Debug, Clone, Default)]
pub struct VocabularyIndex {
    root: TrieNode,
    words: usize,
}

impl VocabularyIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `word` to the vocabulary. Returns `true` if it was not already present.
    ///
    /// The empty word is accepted and stored on the root.
    pub fn insert(&mut self, word: &str) -> bool {
        let added = self.root.insert(word);
        if added {
            self.words += 1;
        }
        added
    }

    /// Exact membership test. Runs in time proportional to `word` and never allocates.
    pub fn contains(&self, word: &str) -> bool {
        self.root.contains(word)
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of trie nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Root of the underlying prefix tree.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// All stored words that start with `query`'s first character and lie
    /// within `threshold` edits of `query`.
    ///
    /// Returns an empty set when `query` is empty or no stored word shares
    /// its first character. An empty set means "no close word", not an error.
    pub fn suggest(&self, query: &str, threshold: usize) -> BTreeSet<String> {
        self.suggest_ranked(query, threshold)
            .into_iter()
            .map(|s| s.term)
            .collect()
    }

    /// `suggest` with [`DEFAULT_THRESHOLD`].
    pub fn suggest_default(&self, query: &str) -> BTreeSet<String> {
        self.suggest(query, DEFAULT_THRESHOLD)
    }

    /// Same candidates as `suggest`, with distances, sorted by distance then term.
    pub fn suggest_ranked(&self, query: &str, threshold: usize) -> Vec<Suggestion> {
        let Some(first) = query.chars().next() else {
            return Vec::new();
        };
        let Some(subtree) = self.root.child(first) else {
            trace!("no vocabulary words start with {first:?}");
            return Vec::new();
        };

        let mut search = Search {
            query,
            query_len: query.chars().count(),
            threshold,
            path: String::from(first),
            found: Vec::new(),
        };
        search.visit(subtree, 1);

        let mut found = search.found;
        found.sort();
        trace!(
            "{} suggestion(s) for {query:?} within distance {threshold}",
            found.len()
        );
        found
    }
}

impl<S: AsRef<str>> Extend<S> for VocabularyIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for VocabularyIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = VocabularyIndex::new();
        index.extend(iter);
        index
    }
}

/// Depth-first walk state for one `suggest_ranked` call.
struct Search<'q> {
    query: &'q str,
    query_len: usize,
    threshold: usize,
    /// Characters on the path from the root to the node being visited.
    path: String,
    found: Vec<Suggestion>,
}

impl Search<'_> {
    fn visit(&mut self, node: &TrieNode, depth: usize) {
        // Any word below is at least `depth - query_len` edits away.
        if depth.saturating_sub(self.query_len) > self.threshold {
            return;
        }

        if node.is_terminal() {
            let distance = levenshtein(&self.path, self.query);
            if distance <= self.threshold {
                self.found.push(Suggestion {
                    distance,
                    term: self.path.clone(),
                });
            }
        }

        for (ch, child) in node.children() {
            self.path.push(ch);
            self.visit(child, depth + 1);
            self.path.pop();
        }
    }
}
