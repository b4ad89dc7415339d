//! Built-in stopword list.

use std::collections::HashSet;

use once_cell::sync::Lazy;

const COMMON_WORDS: &[&str] = &[
    "the", "of", "a", "to", "an", "on", "at", "is", "are", "as", "have", "had", "from", "so",
    "be", "when", "there", "in", "and", "that", "this", "it", "but", "with", "was", "were",
    "for", "by", "or", "their", "which",
];

static BUILTIN: Lazy<HashSet<&'static str>> = Lazy::new(|| COMMON_WORDS.iter().copied().collect());

/// Lookup set of words excluded from analysis unless explicitly included.
#[derive(Debug, Clone, Copy)]
pub struct CommonWords {
    words: &'static HashSet<&'static str>,
}

impl Default for CommonWords {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CommonWords {
    /// The English stopword set shipped with the tool
    pub fn builtin() -> Self {
        Self { words: &BUILTIN }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
