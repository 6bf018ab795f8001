//! Prefix tree storage for the vocabulary.

use std::collections::HashMap;

/// One prefix position in the vocabulary.
///
/// Every node is exclusively owned by its parent through `children`, so the
/// tree is acyclic by construction. Nodes are created on demand during
/// insertion and are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    children: HashMap<char, TrieNode>,
    is_terminal: bool,
}

impl TrieNode {
    /// Create an empty, non-terminal node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `word` below this node, creating missing children along the way.
    ///
    /// Returns `true` if the word was not already stored. The empty word marks
    /// this node itself as terminal.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut current = self;
        for ch in word.chars() {
            current = current.children.entry(ch).or_default();
        }
        let added = !current.is_terminal;
        current.is_terminal = true;
        added
    }

    /// Follow `path` from this node, returning the node it ends on.
    ///
    /// Stops at the first missing child; nothing is allocated.
    pub fn find(&self, path: &str) -> Option<&TrieNode> {
        let mut current = self;
        for ch in path.chars() {
            current = current.children.get(&ch)?;
        }
        Some(current)
    }

    /// True if `word` is stored below this node as a complete word.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(TrieNode::is_terminal)
    }

    /// Child reached through `ch`, if any.
    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    /// Iterate over `(char, child)` pairs in no particular order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(&ch, node)| (ch, node))
    }

    /// True if the path from the root to this node is a stored word.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Number of nodes in this subtree, this node included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }
}
