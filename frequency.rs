use std::collections::HashMap;

use itertools::Itertools;
use regex::Regex;
use tracing::debug;

use crate::digest_types::WordCount;
use crate::error::{DigestError, Result, check_length_bounds};

/// Count word occurrences, keeping words in the order they were first seen.
pub fn count<S: AsRef<str>>(words: &[S]) -> Vec<WordCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<WordCount> = Vec::new();
    for word in words {
        let word = word.as_ref();
        match index.get(word) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(word, counts.len());
                counts.push(WordCount::new(word, 1));
            }
        }
    }
    counts
}

/// Order by count descending. The sort is stable, so ties keep first-seen order.
fn rank(counts: Vec<WordCount>) -> impl Iterator<Item = WordCount> {
    counts.into_iter().sorted_by(|a, b| b.count.cmp(&a.count))
}

/// The `n` most frequent words.
///
/// Fails with a config error when `words` is empty, since there is no
/// most-common word to report.
pub fn top_n<S: AsRef<str>>(words: &[S], n: usize) -> Result<Vec<WordCount>> {
    if words.is_empty() {
        return Err(DigestError::Config("no words to rank".to_string()));
    }
    let top: Vec<WordCount> = rank(count(words)).take(n).collect();
    debug!(requested = n, returned = top.len(), "ranked words");
    Ok(top)
}

/// The `n` most frequent words among those whose length lies in
/// `[min_length, max_length]`. An empty band yields an empty list.
pub fn top_n_filtered<S: AsRef<str>>(
    words: &[S],
    n: usize,
    min_length: usize,
    max_length: usize,
) -> Result<Vec<WordCount>> {
    check_length_bounds(min_length, max_length)?;
    let in_band: Vec<&str> = words
        .iter()
        .map(|w| w.as_ref())
        .filter(|w| (min_length..=max_length).contains(&w.len()))
        .collect();
    Ok(rank(count(&in_band)).take(n).collect())
}

/// Counts of every word matching `pattern` at its start.
///
/// The match is anchored at the beginning of the word only, so `ca` matches
/// `cat` and `cat-nap`. Results come back by descending count.
pub fn search<S: AsRef<str>>(words: &[S], pattern: &str) -> Result<Vec<WordCount>> {
    let matcher = Regex::new(pattern)?;
    // leftmost-first: a match at offset 0 is found whenever one exists
    let found: Vec<WordCount> = rank(count(words))
        .filter(|wc| matcher.find(&wc.word).is_some_and(|m| m.start() == 0))
        .collect();
    debug!(pattern, matches = found.len(), "searched words");
    Ok(found)
}

/// Number of distinct words.
pub fn unique_count<S: AsRef<str>>(words: &[S]) -> usize {
    words.iter().map(|w| w.as_ref()).unique().count()
}
