use std::fs;
use std::path::Path;

use encoding_rs::UTF_8;
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::common_words::CommonWords;
use crate::digest_types::TokenizeConfig;
use crate::error::{DigestError, Result};

// Compile regexes once
static HYPHENATED_WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-zA-Z'-]+\b").unwrap());
static PLAIN_WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-zA-Z']+\b").unwrap());

const POSSESSIVE_SUFFIX: &str = "'s";

/// Read a whole file into memory and decode it.
///
/// A byte-order mark selects the encoding; anything else is treated as UTF-8
/// with malformed sequences replaced by U+FFFD.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| DigestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let (text, encoding, had_errors) = UTF_8.decode(&bytes);
    if had_errors {
        warn!(path = %path.display(), encoding = encoding.name(), "replaced malformed byte sequences");
    }
    debug!(path = %path.display(), bytes = bytes.len(), encoding = encoding.name(), "read input file");
    Ok(text.into_owned())
}

/// Tokenize the file at `path` using the built-in stopword set.
pub fn tokenize(path: &Path, config: &TokenizeConfig) -> Result<Vec<String>> {
    config.validate()?;
    let text = read_text(path)?;
    tokenize_text(&text, config, &CommonWords::builtin())
}

/// Extract normalized words from in-memory text.
pub fn tokenize_text(text: &str, config: &TokenizeConfig, common: &CommonWords) -> Result<Vec<String>> {
    config.validate()?;

    let pattern: &Regex = if config.allow_hyphens {
        &*HYPHENATED_WORD_REGEX
    } else {
        &*PLAIN_WORD_REGEX
    };

    let mut words = Vec::new();
    for line in text.lines() {
        for m in pattern.find_iter(line) {
            let word = normalize(m.as_str());
            let len = word.len();
            if len < config.min_length || len > config.max_length {
                continue;
            }
            if !config.include_common_words && common.contains(&word) {
                continue;
            }
            words.push(word);
        }
    }

    let words = match (config.unique_only, config.sorted) {
        (true, true) => words.into_iter().sorted().dedup().collect(),
        (true, false) => words.into_iter().unique().collect(),
        (false, true) => words.into_iter().sorted().collect(),
        (false, false) => words,
    };

    debug!(count = words.len(), ?config, "tokenized text");
    Ok(words)
}

/// Strip edge hyphens, lowercase and drop a trailing possessive `'s`.
pub fn normalize(raw: &str) -> String {
    let word = raw.trim_matches('-').to_ascii_lowercase();
    match word.strip_suffix(POSSESSIVE_SUFFIX) {
        Some(stem) => stem.to_string(),
        None => word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TokenizeConfig {
        TokenizeConfig {
            min_length: 1,
            ..TokenizeConfig::default()
        }
    }

    fn words(text: &str, config: &TokenizeConfig) -> Vec<String> {
        tokenize_text(text, config, &CommonWords::builtin()).unwrap()
    }

    #[test]
    fn normalize_strips_edge_hyphens() {
        assert_eq!(normalize("-word"), "word");
        assert_eq!(normalize("word--"), "word");
        assert_eq!(normalize("--cat-nap-"), "cat-nap");
        assert_eq!(normalize("---"), "");
    }

    #[test]
    fn leading_hyphen_after_digit_is_stripped() {
        let cfg = TokenizeConfig {
            allow_hyphens: true,
            ..config()
        };
        assert_eq!(words("3-d movie", &cfg), vec!["d", "movie"]);
    }

    #[test]
    fn normalize_lowercases() {
        assert_eq!(normalize("WhAle"), "whale");
    }

    #[test]
    fn normalize_removes_possessive() {
        assert_eq!(normalize("Ahab's"), "ahab");
        assert_eq!(normalize("'s"), "");
        assert_eq!(normalize("it's-"), "it");
        assert_eq!(normalize("sea's'"), "sea's'");
        assert_eq!(normalize("'sdeath"), "'sdeath");
    }

    #[test]
    fn worked_example_with_hyphens() {
        let cfg = TokenizeConfig {
            allow_hyphens: true,
            ..config()
        };
        let got = words("The cat sat. The cat-nap was nice.", &cfg);
        assert_eq!(got, vec!["cat", "cat-nap", "nice", "sat"]);
    }

    #[test]
    fn hyphens_split_words_when_disallowed() {
        let got = words("The cat-nap", &config());
        assert_eq!(got, vec!["cat", "nap"]);
        assert!(got.iter().all(|w| !w.contains('-')));
    }

    #[test]
    fn common_words_can_be_included() {
        let cfg = TokenizeConfig {
            include_common_words: true,
            ..config()
        };
        assert_eq!(words("The whale", &cfg), vec!["the", "whale"]);
        assert_eq!(words("The whale", &config()), vec!["whale"]);
    }

    #[test]
    fn length_bounds_filter_words() {
        let cfg = TokenizeConfig {
            min_length: 3,
            max_length: 4,
            ..config()
        };
        assert_eq!(words("my big fish swims", &cfg), vec!["big", "fish"]);
    }

    #[test]
    fn inverted_bounds_fail() {
        let cfg = TokenizeConfig {
            min_length: 5,
            max_length: 2,
            ..config()
        };
        let err = tokenize_text("anything", &cfg, &CommonWords::builtin()).unwrap_err();
        assert!(matches!(err, DigestError::Config(_)));
    }

    #[test]
    fn zero_min_length_keeps_emptied_tokens() {
        let cfg = TokenizeConfig {
            min_length: 0,
            ..config()
        };
        assert_eq!(words("in the 1990's whales", &cfg), vec!["", "whales"]);
        assert_eq!(words("in the 1990's whales", &config()), vec!["whales"]);
    }

    #[test]
    fn unique_sorted_dedups() {
        let cfg = TokenizeConfig {
            unique_only: true,
            ..config()
        };
        assert_eq!(words("sea whale sea ship whale", &cfg), vec!["sea", "ship", "whale"]);
    }

    #[test]
    fn unsorted_keeps_encounter_order() {
        let cfg = TokenizeConfig {
            sorted: false,
            ..config()
        };
        assert_eq!(words("Zebra apple\nmango", &cfg), vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn unique_unsorted_has_each_word_once() {
        let cfg = TokenizeConfig {
            unique_only: true,
            sorted: false,
            ..config()
        };
        let mut got = words("b d b c d", &cfg);
        got.sort();
        assert_eq!(got, vec!["b", "c", "d"]);
    }

    #[test]
    fn digits_glued_to_letters_block_a_word() {
        assert_eq!(words("whale42 sea, ship!", &config()), vec!["sea", "ship"]);
    }

    #[test]
    fn empty_text_is_empty_sequence() {
        assert!(words("", &config()).is_empty());
    }

    #[test]
    fn output_is_lowercase() {
        let got = words("LOUD Quiet MiXeD", &config());
        assert!(got.iter().all(|w| !w.chars().any(|c| c.is_ascii_uppercase())));
    }

    #[test]
    fn length_filter_is_a_post_filter() {
        let text = "Call me Ishmael. Some years ago, never mind how long precisely";
        let wide = TokenizeConfig {
            min_length: 0,
            max_length: usize::MAX,
            ..config()
        };
        let narrow = TokenizeConfig {
            min_length: 4,
            max_length: 5,
            ..config()
        };
        let expected: Vec<String> = words(text, &wide)
            .into_iter()
            .filter(|w| (4..=5).contains(&w.len()))
            .collect();
        assert_eq!(words(text, &narrow), expected);
    }
}
