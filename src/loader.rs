//! Runtime loading of newline-delimited word lists.
//!
//! Each line is trimmed of surrounding whitespace and inserted as one word.
//! Blank lines are skipped. Case is left as-is; lowercase the list beforehand
//! if queries are lowercased.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::error::{LoadError, Result};
use crate::index::VocabularyIndex;

/// Build an index from any buffered reader.
pub fn load_reader<R: BufRead>(reader: R) -> Result<VocabularyIndex> {
    let mut index = VocabularyIndex::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LoadError::Read {
            line: lineno + 1,
            source,
        })?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        index.insert(word);
    }
    Ok(index)
}

/// Build an index from the word list at `path`.
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<VocabularyIndex> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| {
        debug!("failed to open {}: {source}", path.display());
        LoadError::Open {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let index = load_reader(BufReader::new(file))?;
    info!(
        "loaded {} words ({} trie nodes) from {}",
        index.len(),
        index.node_count(),
        path.display()
    );
    Ok(index)
}
